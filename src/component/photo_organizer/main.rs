//! 照片整理主模組
//!
//! 顯示進度標題、執行整理流程並輸出結果摘要

use super::organizer::{OrganizeResult, Organizer};
use crate::config::Config;
use anyhow::Result;
use console::style;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// 依拍攝日期整理照片元件
pub struct PhotoOrganizer {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl PhotoOrganizer {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<OrganizeResult> {
        println!("{}", style("=== 依拍攝日期整理照片 ===").cyan().bold());
        println!("  來源: {}", input_dir.display());
        println!("  目標: {}", output_dir.display());

        let organizer = Organizer::new(
            input_dir,
            output_dir,
            &self.config,
            Arc::clone(&self.shutdown_signal),
        );

        println!("{}", style("整理照片中...").dim());
        let result = organizer.organize()?;

        self.print_result(&result);

        Ok(result)
    }

    fn print_result(&self, result: &OrganizeResult) {
        println!();
        println!("{}", style("=== 整理結果 ===").cyan().bold());
        println!("  掃描檔案: {} 個", result.total_files);
        println!("  已複製: {} 個", style(result.copied).green());

        if result.moved > 0 {
            println!("  已移動（刪除原檔）: {} 個", style(result.moved).green());
        }

        if result.already_in_place > 0 {
            println!("  已在目標位置: {} 個", style(result.already_in_place).dim());
        }

        println!("  非圖片（略過）: {} 個", style(result.ignored).dim());

        if result.failed > 0 {
            println!("  失敗: {} 個", style(result.failed).red());
        }

        if result.interrupted {
            println!("{}", style("處理已中斷，部分檔案尚未整理").yellow());
        }
    }
}

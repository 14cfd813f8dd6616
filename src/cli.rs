use clap::Parser;
use std::path::PathBuf;

/// 依拍攝日期整理照片：複製到 `{OUTPUT_DIR}/{年}/{月}/`，檔名為 `{日期}_{SHA-256}{副檔名}`
#[derive(Debug, Parser)]
#[command(name = "photo_organize", version, about)]
pub struct Args {
    /// 待整理的照片來源資料夾
    #[arg(env = "PHOTO_ORGANIZE_INPUT")]
    pub input_dir: PathBuf,

    /// 整理後的輸出資料夾
    #[arg(env = "PHOTO_ORGANIZE_OUTPUT")]
    pub output_dir: PathBuf,
}

//! 檔案傳輸：保留屬性的複製，以及（可選）複製成功後刪除原檔

use crate::tools::ensure_directory_exists;
use anyhow::{Context, Result, bail};
use log::{info, warn};
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// 保留檔案屬性（時間戳記、權限）的複製能力
pub trait AttributePreservingCopier {
    /// 用於日誌的名稱
    fn name(&self) -> &'static str;

    fn copy(&self, source: &Path, destination: &Path) -> Result<()>;
}

/// 內建複製：先寫入同目錄的暫存檔，套用時間與權限後再改名覆蓋
pub struct NativeCopier;

impl NativeCopier {
    fn staging_path(destination: &Path) -> PathBuf {
        let file_name = destination
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        destination.with_file_name(format!(".{file_name}.partial"))
    }

    fn copy_with_attributes(source: &Path, target: &Path) -> Result<()> {
        let metadata =
            fs::metadata(source).with_context(|| format!("無法讀取檔案資訊: {}", source.display()))?;

        let mut reader =
            File::open(source).with_context(|| format!("無法開啟檔案: {}", source.display()))?;
        // 上次中斷留下的暫存檔可能是唯讀，先移除
        if target.exists() {
            fs::remove_file(target)
                .with_context(|| format!("無法移除舊的暫存檔: {}", target.display()))?;
        }
        let mut writer =
            File::create(target).with_context(|| format!("無法建立檔案: {}", target.display()))?;
        io::copy(&mut reader, &mut writer)
            .with_context(|| format!("複製內容失敗: {} -> {}", source.display(), target.display()))?;

        let times = FileTimes::new()
            .set_accessed(metadata.accessed()?)
            .set_modified(metadata.modified()?);
        writer
            .set_times(times)
            .with_context(|| format!("無法設定檔案時間: {}", target.display()))?;
        // 權限最後設定，唯讀來源也能先完成寫入
        writer
            .set_permissions(metadata.permissions())
            .with_context(|| format!("無法設定檔案權限: {}", target.display()))?;

        Ok(())
    }
}

impl AttributePreservingCopier for NativeCopier {
    fn name(&self) -> &'static str {
        "native"
    }

    fn copy(&self, source: &Path, destination: &Path) -> Result<()> {
        let staging = Self::staging_path(destination);

        let result = Self::copy_with_attributes(source, &staging).and_then(|()| {
            fs::rename(&staging, destination).with_context(|| {
                format!("無法移動暫存檔: {} -> {}", staging.display(), destination.display())
            })
        });

        if result.is_err() && staging.exists() {
            if let Err(e) = fs::remove_file(&staging) {
                warn!("無法清除暫存檔 {}: {e}", staging.display());
            }
        }

        result
    }
}

/// 呼叫外部 `rsync -a` 進行封存模式複製
pub struct RsyncCopier;

impl RsyncCopier {
    /// 檢查系統是否安裝 rsync
    pub fn check_available() -> bool {
        Command::new("rsync")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl AttributePreservingCopier for RsyncCopier {
    fn name(&self) -> &'static str {
        "rsync"
    }

    fn copy(&self, source: &Path, destination: &Path) -> Result<()> {
        let output = Command::new("rsync")
            .arg("-a")
            .arg(source)
            .arg(destination)
            .stdin(Stdio::null())
            .output()
            .context("無法執行 rsync")?;

        if !output.status.success() {
            bail!(
                "rsync 執行失敗 (exit code {:?}): {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(())
    }
}

/// 單一檔案的傳輸結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// 已複製，原檔保留
    Copied,
    /// 已複製並刪除原檔
    Moved,
    /// 來源與目標是同一個檔案
    AlreadyInPlace,
    /// 複製失敗，原檔未被刪除
    CopyFailed(String),
}

pub struct TransferExecutor {
    copier: Box<dyn AttributePreservingCopier>,
}

impl Default for TransferExecutor {
    fn default() -> Self {
        Self::new(Box::new(NativeCopier))
    }
}

impl TransferExecutor {
    #[must_use]
    pub fn new(copier: Box<dyn AttributePreservingCopier>) -> Self {
        Self { copier }
    }

    /// 建立目標資料夾、複製檔案，`delete_source` 為真且複製成功時刪除原檔
    ///
    /// 複製失敗以 `TransferOutcome::CopyFailed` 回報；建立資料夾或刪除原檔失敗則回傳錯誤。
    pub fn execute(
        &self,
        source: &Path,
        destination: &Path,
        delete_source: bool,
    ) -> Result<TransferOutcome> {
        if is_same_file(source, destination) {
            info!("檔案已在目標位置，略過: {}", source.display());
            return Ok(TransferOutcome::AlreadyInPlace);
        }

        if let Some(parent) = destination.parent() {
            ensure_directory_exists(parent)?;
        }

        info!(
            "複製檔案 ({}): {} -> {}",
            self.copier.name(),
            source.display(),
            destination.display()
        );
        if let Err(e) = self.copier.copy(source, destination) {
            warn!("複製檔案失敗 {}: {e:#}", source.display());
            return Ok(TransferOutcome::CopyFailed(format!("{e:#}")));
        }

        if !delete_source {
            return Ok(TransferOutcome::Copied);
        }

        info!("刪除原檔案: {}", source.display());
        fs::remove_file(source)
            .with_context(|| format!("刪除原檔案失敗: {}", source.display()))?;

        Ok(TransferOutcome::Moved)
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

use super::date_resolver::{CaptureDate, CreationTimeProvider, DateResolver};
use super::path_builder::build_destination;
use super::transfer::{AttributePreservingCopier, TransferExecutor, TransferOutcome};
use crate::config::{Config, ImageExtensionTable};
use crate::tools::{calculate_file_hash, scan_all_files, validate_directory_exists};
use anyhow::Result;
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 單一檔案的日期與雜湊資訊，只在處理該檔案時存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub exif_date: Option<CaptureDate>,
    pub fs_birth_date: CaptureDate,
    pub content_hash: String,
}

impl FileMetadata {
    /// EXIF 拍攝時間優先，否則使用檔案建立時間
    #[must_use]
    pub fn capture_date(&self) -> CaptureDate {
        self.exif_date.unwrap_or(self.fs_birth_date)
    }
}

/// 整理結果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrganizeResult {
    /// 掃描到的檔案總數
    pub total_files: usize,
    /// 副檔名不符而略過的檔案數
    pub ignored: usize,
    /// 已複製的檔案數
    pub copied: usize,
    /// 已複製並刪除原檔的檔案數
    pub moved: usize,
    /// 已在目標位置的檔案數
    pub already_in_place: usize,
    /// 處理失敗的檔案數
    pub failed: usize,
    /// 是否因中斷訊號提前結束
    pub interrupted: bool,
}

impl OrganizeResult {
    /// 符合副檔名、實際進入處理流程的檔案數
    #[must_use]
    pub fn processed(&self) -> usize {
        self.copied + self.moved + self.already_in_place + self.failed
    }
}

/// 照片整理流程：掃描 → 副檔名過濾 → 雜湊 → 日期 → 目標路徑 → 傳輸
pub struct Organizer {
    input_dir: PathBuf,
    output_dir: PathBuf,
    extension_table: ImageExtensionTable,
    delete_source: bool,
    date_resolver: DateResolver,
    transfer: TransferExecutor,
    shutdown_signal: Arc<AtomicBool>,
}

impl Organizer {
    /// 預設只複製不刪除原檔，使用內建複製與檔案系統建立時間
    #[must_use]
    pub fn new(
        input_dir: &Path,
        output_dir: &Path,
        config: &Config,
        shutdown_signal: Arc<AtomicBool>,
    ) -> Self {
        Self {
            input_dir: input_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            extension_table: config.extension_table.clone(),
            delete_source: false,
            date_resolver: DateResolver::default(),
            transfer: TransferExecutor::default(),
            shutdown_signal,
        }
    }

    #[must_use]
    pub fn with_creation_time_provider(mut self, provider: Box<dyn CreationTimeProvider>) -> Self {
        self.date_resolver = DateResolver::new(provider);
        self
    }

    #[must_use]
    pub fn with_copier(mut self, copier: Box<dyn AttributePreservingCopier>) -> Self {
        self.transfer = TransferExecutor::new(copier);
        self
    }

    #[must_use]
    pub const fn with_delete_source(mut self, delete_source: bool) -> Self {
        self.delete_source = delete_source;
        self
    }

    /// 執行一次完整的整理
    ///
    /// 來源資料夾無法讀取時回傳錯誤；單一檔案的失敗只會記錄並計數，不中斷整體流程。
    pub fn organize(&self) -> Result<OrganizeResult> {
        validate_directory_exists(&self.input_dir)?;

        info!("開始掃描目錄: {}", self.input_dir.display());
        let files = scan_all_files(&self.input_dir)?;

        let mut result = OrganizeResult {
            total_files: files.len(),
            ..OrganizeResult::default()
        };
        info!("掃描到 {} 個檔案", result.total_files);

        for file in &files {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止處理");
                result.interrupted = true;
                break;
            }

            let Some(extension) = file
                .extension
                .as_deref()
                .filter(|ext| self.extension_table.is_allowed(ext))
            else {
                debug!("略過非圖片檔案: {}", file.path.display());
                result.ignored += 1;
                continue;
            };

            match self.process_file(&file.path, extension) {
                Ok(TransferOutcome::Copied) => result.copied += 1,
                Ok(TransferOutcome::Moved) => result.moved += 1,
                Ok(TransferOutcome::AlreadyInPlace) => result.already_in_place += 1,
                Ok(TransferOutcome::CopyFailed(_)) => result.failed += 1,
                Err(e) => {
                    error!("處理檔案失敗 {}: {e:#}", file.path.display());
                    result.failed += 1;
                }
            }
        }

        info!(
            "照片整理完成 - 複製: {}, 移動: {}, 已存在: {}, 略過: {}, 失敗: {}",
            result.copied, result.moved, result.already_in_place, result.ignored, result.failed
        );

        Ok(result)
    }

    /// 計算雜湊並取得兩種來源的日期
    pub fn read_metadata(&self, path: &Path) -> Result<FileMetadata> {
        let content_hash = calculate_file_hash(path)?;
        let exif_date = self.date_resolver.exif_date(path);
        let fs_birth_date = self.date_resolver.fs_birth_date(path)?;

        Ok(FileMetadata {
            exif_date,
            fs_birth_date,
            content_hash,
        })
    }

    /// 計算檔案應該放到的位置
    pub fn destination_for(&self, path: &Path, extension: &str) -> Result<PathBuf> {
        let metadata = self.read_metadata(path)?;
        Ok(build_destination(
            &self.output_dir,
            &metadata.capture_date(),
            &metadata.content_hash,
            extension,
        ))
    }

    fn process_file(&self, path: &Path, extension: &str) -> Result<TransferOutcome> {
        info!("處理檔案: {}", path.display());
        let destination = self.destination_for(path, extension)?;
        self.transfer.execute(path, &destination, self.delete_source)
    }
}

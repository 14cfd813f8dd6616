use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 掃描到的候選檔案
#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    /// 含前導 `.` 的原始副檔名，例如 `.JPG`
    pub extension: Option<String>,
}

/// 取得檔案副檔名（含 `.`，保留原本大小寫）
#[must_use]
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
}

/// 遞迴掃描目錄下所有一般檔案
///
/// 不會進入以符號連結指向的資料夾，但指向檔案的符號連結會被收錄。
/// 根目錄無法讀取時回傳錯誤；子目錄中無法讀取的項目會被略過。
pub fn scan_all_files(directory: &Path) -> Result<Vec<ScannedFile>> {
    fs::read_dir(directory).with_context(|| format!("無法讀取目錄: {}", directory.display()))?;

    let mut files: Vec<ScannedFile> = WalkDir::new(directory)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("略過無法讀取的項目: {e}");
                None
            }
        })
        .filter(|entry| {
            entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
        })
        .map(|entry| {
            let path = entry.into_path();
            let extension = extension_of(&path);
            ScannedFile { path, extension }
        })
        .collect();

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

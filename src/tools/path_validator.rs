use anyhow::{Context, Result, bail};
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

/// 建立所有缺少的上層資料夾
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path).with_context(|| format!("無法建立目錄: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_directory_exists() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("IMG_001.JPG");
        std::fs::write(&file_path, b"data").unwrap();

        assert!(validate_directory_exists(temp_dir.path()).is_ok());
        assert!(validate_directory_exists(&file_path).is_err());
        assert!(validate_directory_exists(&temp_dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_ensure_directory_exists_creates_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("2021").join("05");

        ensure_directory_exists(&nested).unwrap();
        assert!(nested.is_dir());

        // 已存在時不應出錯
        ensure_directory_exists(&nested).unwrap();
    }

    #[test]
    fn test_ensure_directory_fails_when_file_in_the_way() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("2021");
        std::fs::write(&blocker, b"not a directory").unwrap();

        assert!(ensure_directory_exists(&blocker.join("05")).is_err());
    }
}

use super::date_resolver::CaptureDate;
use std::path::{Path, PathBuf};

/// 組出目標路徑：`{output}/{YYYY}/{MM}/{date}_{hash}{ext}`
///
/// 相同的日期、雜湊與副檔名必定得到相同路徑，重複的照片會落在同一個位置。
#[must_use]
pub fn build_destination(
    output_dir: &Path,
    date: &CaptureDate,
    hash: &str,
    extension: &str,
) -> PathBuf {
    output_dir
        .join(date.year())
        .join(date.month())
        .join(format!("{date}_{hash}{}", extension.to_lowercase()))
}

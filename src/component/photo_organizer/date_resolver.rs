use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Local, NaiveDateTime};
use log::debug;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// 輸出檔名使用的日期格式
pub const DATE_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// EXIF `DateTimeOriginal` 的原始格式
const EXIF_DATE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// 拍攝（或建立）時間，本地時區、不含時區資訊
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaptureDate(NaiveDateTime);

impl CaptureDate {
    #[must_use]
    pub const fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// 解析 `YYYY:MM:DD HH:MM:SS`；空白或無法解析時回傳 `None`
    #[must_use]
    pub fn parse_exif(value: &str) -> Option<Self> {
        let value = value.trim_matches(|c: char| c == '\0' || c.is_whitespace());
        if value.is_empty() {
            return None;
        }
        NaiveDateTime::parse_from_str(value, EXIF_DATE_FORMAT)
            .ok()
            .map(Self)
    }

    /// 目錄用的四位數年份
    #[must_use]
    pub fn year(&self) -> String {
        format!("{:04}", self.0.year())
    }

    /// 目錄用的兩位數月份
    #[must_use]
    pub fn month(&self) -> String {
        format!("{:02}", self.0.month())
    }
}

impl fmt::Display for CaptureDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// 提供檔案建立時間的來源
///
/// 並非所有平台都有 birth time，實作需自行決定替代方案。
pub trait CreationTimeProvider {
    fn creation_time(&self, path: &Path) -> Result<NaiveDateTime>;
}

impl<F> CreationTimeProvider for F
where
    F: Fn(&Path) -> Result<NaiveDateTime>,
{
    fn creation_time(&self, path: &Path) -> Result<NaiveDateTime> {
        self(path)
    }
}

/// 讀取檔案系統的建立時間；平台不支援時改用最後修改時間
pub struct FsCreationTime;

impl CreationTimeProvider for FsCreationTime {
    fn creation_time(&self, path: &Path) -> Result<NaiveDateTime> {
        let metadata =
            fs::metadata(path).with_context(|| format!("無法讀取檔案資訊: {}", path.display()))?;

        let time = match metadata.created() {
            Ok(time) => time,
            Err(e) => {
                debug!("無法取得建立時間，改用修改時間 {}: {e}", path.display());
                metadata
                    .modified()
                    .with_context(|| format!("無法取得檔案時間: {}", path.display()))?
            }
        };

        Ok(DateTime::<Local>::from(time).naive_local())
    }
}

/// 日期解析器：讀取 EXIF 拍攝時間與檔案建立時間
pub struct DateResolver {
    provider: Box<dyn CreationTimeProvider>,
}

impl Default for DateResolver {
    fn default() -> Self {
        Self::new(Box::new(FsCreationTime))
    }
}

impl DateResolver {
    #[must_use]
    pub fn new(provider: Box<dyn CreationTimeProvider>) -> Self {
        Self { provider }
    }

    /// 讀取 EXIF 拍攝時間，任何讀取或解析失敗都視為沒有
    #[must_use]
    pub fn exif_date(&self, path: &Path) -> Option<CaptureDate> {
        let file = File::open(path).ok()?;
        let mut reader = BufReader::new(file);

        let exif = match exif::Reader::new().read_from_container(&mut reader) {
            Ok(exif) => exif,
            Err(e) => {
                debug!("沒有可用的 EXIF 資料 {}: {e}", path.display());
                return None;
            }
        };

        let field = exif.get_field(exif::Tag::DateTimeOriginal, exif::In::PRIMARY)?;
        let exif::Value::Ascii(ref values) = field.value else {
            return None;
        };
        let raw = std::str::from_utf8(values.first()?).ok()?;

        let date = CaptureDate::parse_exif(raw);
        if date.is_none() {
            debug!("EXIF 拍攝時間無效 {}: {raw:?}", path.display());
        }
        date
    }

    pub fn fs_birth_date(&self, path: &Path) -> Result<CaptureDate> {
        self.provider.creation_time(path).map(CaptureDate::new)
    }
}

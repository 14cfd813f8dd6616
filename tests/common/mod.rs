//! 測試共用工具

#![allow(dead_code)]

#[path = "../../src/test_helpers.rs"]
mod test_helpers;

use chrono::{NaiveDate, NaiveDateTime};
use photo_organize::component::photo_organizer::CreationTimeProvider;
use std::path::Path;

pub use test_helpers::jpeg_with_capture_time;

/// 每個檔案都回傳同一個建立時間
pub fn fixed_creation_time(
    y: i32,
    mo: u32,
    d: u32,
    h: u32,
    mi: u32,
    s: u32,
) -> Box<dyn CreationTimeProvider> {
    let time = NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap();
    Box::new(move |_: &Path| -> anyhow::Result<NaiveDateTime> { Ok(time) })
}

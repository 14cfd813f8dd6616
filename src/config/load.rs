use crate::config::types::{Config, ImageExtensionTable};
use anyhow::{Context, Result};

/// 編譯時嵌入的圖片副檔名清單（不需要外部檔案）
const IMAGE_EXTENSIONS_JSON: &str = include_str!("../data/image_extensions.json");

impl Config {
    pub fn new() -> Result<Self> {
        Ok(Self {
            extension_table: ImageExtensionTable::embedded()?,
        })
    }
}

impl ImageExtensionTable {
    /// 從編譯時嵌入的 JSON 載入副檔名清單
    pub fn embedded() -> Result<Self> {
        serde_json::from_str(IMAGE_EXTENSIONS_JSON).context("無法解析嵌入的圖片副檔名設定")
    }
}

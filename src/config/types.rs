use serde::Deserialize;

/// 允許處理的圖片副檔名清單（含前導的 `.`）
#[derive(Debug, Clone, Deserialize)]
pub struct ImageExtensionTable {
    #[serde(rename = "IMAGE_FILE")]
    pub image_file: Vec<String>,
}

impl ImageExtensionTable {
    /// 副檔名比對區分大小寫：`.JPG` 與 `.jpg` 需分別列出
    #[must_use]
    pub fn is_allowed(&self, extension: &str) -> bool {
        self.image_file.iter().any(|ext| ext == extension)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub extension_table: ImageExtensionTable,
}

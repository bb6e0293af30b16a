use crate::utils::error::{QrGenError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_MODULE_SIZE_PIXELS: u32 = 100;
pub const MAX_MODULE_SIZE_PIXELS: u32 = 1000;
pub const DEFAULT_MODULE_SIZE_PIXELS: u32 = 300;

/// Byte-mode capacity of the largest symbol (version 40, level L).
pub const MAX_PAYLOAD_BYTES: usize = 2953;

/// Approximate module count across a version 1 symbol plus quiet zone,
/// used to turn a pixel size into a pixels-per-module scale.
pub const MODULE_SCALE_DIVISOR: u32 = 38;

pub const MARGIN_MODULES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CorrectionLevel {
    L,
    #[default]
    M,
    Q,
    H,
}

impl CorrectionLevel {
    /// 大小寫不敏感，不修剪空白；無法辨識時回傳 None
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "L" => Some(CorrectionLevel::L),
            "M" => Some(CorrectionLevel::M),
            "Q" => Some(CorrectionLevel::Q),
            "H" => Some(CorrectionLevel::H),
            _ => None,
        }
    }
}

impl fmt::Display for CorrectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            CorrectionLevel::L => "L",
            CorrectionLevel::M => "M",
            CorrectionLevel::Q => "Q",
            CorrectionLevel::H => "H",
        };
        f.write_str(letter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderConfig {
    module_size_pixels: u32,
    correction_level: CorrectionLevel,
}

impl RenderConfig {
    /// Clamps `module_size_pixels` into the supported range.
    pub fn new(module_size_pixels: u32, correction_level: CorrectionLevel) -> Self {
        Self {
            module_size_pixels: module_size_pixels
                .clamp(MIN_MODULE_SIZE_PIXELS, MAX_MODULE_SIZE_PIXELS),
            correction_level,
        }
    }

    pub fn module_size_pixels(&self) -> u32 {
        self.module_size_pixels
    }

    pub fn correction_level(&self) -> CorrectionLevel {
        self.correction_level
    }

    pub fn module_scale(&self) -> u32 {
        self.module_size_pixels / MODULE_SCALE_DIVISOR
    }

    pub fn margin_modules(&self) -> u32 {
        MARGIN_MODULES
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODULE_SIZE_PIXELS, CorrectionLevel::M)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Text,
    Url,
    Wifi,
    Geo,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 4] = [
        ContentCategory::Text,
        ContentCategory::Url,
        ContentCategory::Wifi,
        ContentCategory::Geo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentCategory::Text => "text",
            ContentCategory::Url => "url",
            ContentCategory::Wifi => "wifi",
            ContentCategory::Geo => "geo",
        }
    }
}

impl FromStr for ContentCategory {
    type Err = QrGenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(ContentCategory::Text),
            "url" => Ok(ContentCategory::Url),
            "wifi" => Ok(ContentCategory::Wifi),
            "geo" => Ok(ContentCategory::Geo),
            other => Err(QrGenError::UnsupportedCategory {
                category: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRequest {
    Text {
        body: String,
    },
    Url {
        value: String,
    },
    Wifi {
        ssid: String,
        password: String,
        security_type: String,
    },
    Geo {
        latitude: String,
        longitude: String,
    },
}

impl ContentRequest {
    pub fn category(&self) -> ContentCategory {
        match self {
            ContentRequest::Text { .. } => ContentCategory::Text,
            ContentRequest::Url { .. } => ContentCategory::Url,
            ContentRequest::Wifi { .. } => ContentCategory::Wifi,
            ContentRequest::Geo { .. } => ContentCategory::Geo,
        }
    }
}

/// 交給編碼器的最終字串；唯一的建構方式保證非空且不超過容量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    data: String,
    config: RenderConfig,
}

impl Payload {
    pub fn new(data: String, config: RenderConfig) -> Result<Self> {
        if data.is_empty() {
            return Err(QrGenError::EmptyContent);
        }
        if data.len() > MAX_PAYLOAD_BYTES {
            return Err(QrGenError::PayloadTooLarge {
                length: data.len(),
                max: MAX_PAYLOAD_BYTES,
            });
        }
        Ok(Self { data, config })
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn config(&self) -> RenderConfig {
        self.config
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub width: u32,
    pub height: u32,
}

impl RenderedImage {
    pub const PNG_CONTENT_TYPE: &'static str = "image/png";
    pub const INLINE_FILENAME: &'static str = "qr_code.png";

    pub fn png(bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            bytes,
            content_type: Self::PNG_CONTENT_TYPE,
            width,
            height,
        }
    }

    pub fn content_disposition(&self) -> String {
        format!("inline; filename=\"{}\"", Self::INLINE_FILENAME)
    }
}

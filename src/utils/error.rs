use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrGenError {
    #[error("Unsupported QR category: '{category}'")]
    UnsupportedCategory { category: String },

    #[error("QR content cannot be empty")]
    EmptyContent,

    #[error("WiFi SSID cannot be empty")]
    EmptySsid,

    #[error("Invalid URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("Invalid geo coordinates ({latitude}, {longitude}): {reason}")]
    InvalidCoordinates {
        latitude: String,
        longitude: String,
        reason: String,
    },

    #[error("Payload of {length} bytes exceeds the maximum QR capacity of {max} bytes")]
    PayloadTooLarge { length: usize, max: usize },

    #[error("Symbol encoder failed: {message}")]
    EncoderFailure { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, QrGenError>;

/// 機器可讀的錯誤種類，由傳輸層映射為狀態碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    UnsupportedCategory,
    EmptyContent,
    EmptySsid,
    InvalidUrl,
    InvalidCoordinates,
    PayloadTooLarge,
    EncoderFailure,
    Io,
    Serialization,
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnsupportedCategory => "UnsupportedCategory",
            ErrorKind::EmptyContent => "EmptyContent",
            ErrorKind::EmptySsid => "EmptySsid",
            ErrorKind::InvalidUrl => "InvalidUrl",
            ErrorKind::InvalidCoordinates => "InvalidCoordinates",
            ErrorKind::PayloadTooLarge => "PayloadTooLarge",
            ErrorKind::EncoderFailure => "EncoderFailure",
            ErrorKind::Io => "Io",
            ErrorKind::Serialization => "Serialization",
            ErrorKind::Config => "Config",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON 錯誤回應: `{"error": {"message": ..., "code": ..., "kind": ...}}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub code: u16,
    pub kind: ErrorKind,
}

impl QrGenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QrGenError::UnsupportedCategory { .. } => ErrorKind::UnsupportedCategory,
            QrGenError::EmptyContent => ErrorKind::EmptyContent,
            QrGenError::EmptySsid => ErrorKind::EmptySsid,
            QrGenError::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            QrGenError::InvalidCoordinates { .. } => ErrorKind::InvalidCoordinates,
            QrGenError::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
            QrGenError::EncoderFailure { .. } => ErrorKind::EncoderFailure,
            QrGenError::IoError(_) => ErrorKind::Io,
            QrGenError::SerializationError(_) => ErrorKind::Serialization,
            QrGenError::ConfigError { .. } => ErrorKind::Config,
        }
    }

    /// 建議的 HTTP 狀態碼
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::UnsupportedCategory
            | ErrorKind::EmptyContent
            | ErrorKind::EmptySsid
            | ErrorKind::InvalidUrl
            | ErrorKind::InvalidCoordinates => 400,
            ErrorKind::PayloadTooLarge => 413,
            ErrorKind::EncoderFailure
            | ErrorKind::Io
            | ErrorKind::Serialization
            | ErrorKind::Config => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QrGenError::UnsupportedCategory { category } => format!(
                "The QR type '{}' is not valid. Use one of: text, url, wifi, geo",
                category
            ),
            QrGenError::EmptyContent => "The content for the QR code cannot be empty".to_string(),
            QrGenError::EmptySsid => "The WiFi SSID cannot be empty".to_string(),
            QrGenError::InvalidUrl { .. } => "The provided URL is not valid".to_string(),
            QrGenError::InvalidCoordinates { .. } => {
                "The geolocation coordinates are not valid".to_string()
            }
            QrGenError::PayloadTooLarge { .. } => {
                "The content exceeds the maximum capacity of a QR code".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QrGenError::UnsupportedCategory { .. } => "Pick a supported category with --type",
            QrGenError::EmptyContent => "Pass the text or URL to encode with --content",
            QrGenError::EmptySsid => "Pass the network name with --ssid",
            QrGenError::InvalidUrl { .. } => {
                "Use an absolute URL with a scheme and host, e.g. https://example.com"
            }
            QrGenError::InvalidCoordinates { .. } => {
                "Latitude must be within [-90, 90] and longitude within [-180, 180]"
            }
            QrGenError::PayloadTooLarge { .. } => "Shorten the content or split it across codes",
            QrGenError::EncoderFailure { .. } => {
                "Lower the correction level or shorten the content"
            }
            QrGenError::IoError(_) => "Check that the output directory is writable",
            QrGenError::SerializationError(_) => "Check the request file is valid JSON",
            QrGenError::ConfigError { .. } => "Check the configuration file and CLI flags",
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            error: ErrorDetail {
                message: self.user_friendly_message(),
                code: self.status_code(),
                kind: self.kind(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let unsupported = QrGenError::UnsupportedCategory {
            category: "vcard".to_string(),
        };
        assert_eq!(unsupported.status_code(), 400);
        assert_eq!(QrGenError::EmptyContent.status_code(), 400);
        assert_eq!(QrGenError::EmptySsid.status_code(), 400);
        assert_eq!(
            QrGenError::PayloadTooLarge {
                length: 3000,
                max: 2953
            }
            .status_code(),
            413
        );
        assert_eq!(
            QrGenError::EncoderFailure {
                message: "boom".to_string()
            }
            .status_code(),
            500
        );
    }

    #[test]
    fn test_error_body_serialization() {
        let body = QrGenError::EmptySsid.to_error_body();
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["error"]["code"], 400);
        assert_eq!(json["error"]["kind"], "EmptySsid");
        assert_eq!(json["error"]["message"], "The WiFi SSID cannot be empty");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(QrGenError::EmptyContent.is_client_error());
        assert!(!QrGenError::EncoderFailure {
            message: "x".to_string()
        }
        .is_client_error());
    }
}

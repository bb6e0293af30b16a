use crate::core::normalizer::normalize;
use crate::domain::model::{ContentCategory, ContentRequest, RenderConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const FIELD_CONTENT: &str = "content";
pub const FIELD_SSID: &str = "ssid";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_SECURITY_TYPE: &str = "security_type";
pub const FIELD_LATITUDE: &str = "latitude";
pub const FIELD_LONGITUDE: &str = "longitude";

pub const DEFAULT_CATEGORY: &str = "text";
pub const DEFAULT_SECURITY_TYPE: &str = "WPA";

/// 傳輸層交進來的原始請求，所有欄位都是未解析的字串
///
/// ```json
/// {"type": "wifi", "size": "400", "correction_level": "h",
///  "ssid": "MyNet", "password": "secret", "security_type": "WPA"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRequest {
    #[serde(default, rename = "type", alias = "category")]
    pub category: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub correction_level: Option<String>,
    #[serde(flatten)]
    pub fields: HashMap<String, String>,
}

impl RawRequest {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Default::default()
        }
    }

    pub fn with_field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn render_config(&self) -> RenderConfig {
        normalize(self.size.as_deref(), self.correction_level.as_deref())
    }
}

fn field(fields: &HashMap<String, String>, key: &str) -> String {
    fields.get(key).cloned().unwrap_or_default()
}

/// 依類別挑出需要的欄位；缺少的欄位視為空字串
pub fn build_content_request(
    category: ContentCategory,
    fields: &HashMap<String, String>,
) -> ContentRequest {
    match category {
        ContentCategory::Text => ContentRequest::Text {
            body: field(fields, FIELD_CONTENT),
        },
        ContentCategory::Url => ContentRequest::Url {
            value: field(fields, FIELD_CONTENT),
        },
        ContentCategory::Wifi => ContentRequest::Wifi {
            ssid: field(fields, FIELD_SSID),
            password: field(fields, FIELD_PASSWORD),
            security_type: fields
                .get(FIELD_SECURITY_TYPE)
                .cloned()
                .unwrap_or_else(|| DEFAULT_SECURITY_TYPE.to_string()),
        },
        ContentCategory::Geo => ContentRequest::Geo {
            latitude: field(fields, FIELD_LATITUDE),
            longitude: field(fields, FIELD_LONGITUDE),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CorrectionLevel;

    #[test]
    fn test_raw_request_from_json() {
        let json = r#"{
            "type": "wifi",
            "size": "400",
            "correction_level": "h",
            "ssid": "MyNet",
            "password": "secret"
        }"#;

        let request = RawRequest::from_json(json).unwrap();
        assert_eq!(request.category(), "wifi");
        assert_eq!(request.fields.get("ssid").map(String::as_str), Some("MyNet"));

        let config = request.render_config();
        assert_eq!(config.module_size_pixels(), 400);
        assert_eq!(config.correction_level(), CorrectionLevel::H);
    }

    #[test]
    fn test_raw_request_defaults() {
        let request = RawRequest::from_json("{}").unwrap();
        assert_eq!(request.category(), "text");
        assert_eq!(request.render_config(), RenderConfig::default());
    }

    #[test]
    fn test_category_alias() {
        let request = RawRequest::from_json(r#"{"category": "geo"}"#).unwrap();
        assert_eq!(request.category(), "geo");
    }

    #[test]
    fn test_wifi_security_defaults_to_wpa() {
        let fields = HashMap::from([("ssid".to_string(), "Home".to_string())]);
        let request = build_content_request(ContentCategory::Wifi, &fields);

        assert_eq!(
            request,
            ContentRequest::Wifi {
                ssid: "Home".to_string(),
                password: String::new(),
                security_type: "WPA".to_string(),
            }
        );
    }

    #[test]
    fn test_text_and_url_share_content_field() {
        let fields = HashMap::from([("content".to_string(), "https://a.b".to_string())]);

        assert_eq!(
            build_content_request(ContentCategory::Url, &fields),
            ContentRequest::Url {
                value: "https://a.b".to_string()
            }
        );
        assert_eq!(
            build_content_request(ContentCategory::Text, &fields).category(),
            ContentCategory::Text
        );
    }
}

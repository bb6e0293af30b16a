pub mod geo;
pub mod text;
pub mod url;
pub mod wifi;

use crate::domain::model::{ContentRequest, Payload, RenderConfig};
use crate::utils::error::Result;

/// Routes a request to the formatter that owns its category.
pub fn format_request(config: RenderConfig, request: &ContentRequest) -> Result<Payload> {
    match request {
        ContentRequest::Text { body } => text::format(config, body),
        ContentRequest::Url { value } => url::format(config, value),
        ContentRequest::Wifi {
            ssid,
            password,
            security_type,
        } => wifi::format(config, ssid, password, security_type),
        ContentRequest::Geo {
            latitude,
            longitude,
        } => geo::format(config, latitude, longitude),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_request_is_idempotent() {
        let config = RenderConfig::default();
        let requests = vec![
            ContentRequest::Text {
                body: "hello".to_string(),
            },
            ContentRequest::Url {
                value: "https://example.com".to_string(),
            },
            ContentRequest::Wifi {
                ssid: "MyNet".to_string(),
                password: "secret".to_string(),
                security_type: "WPA".to_string(),
            },
            ContentRequest::Geo {
                latitude: "45.5".to_string(),
                longitude: "-122.6".to_string(),
            },
        ];

        for request in &requests {
            let first = format_request(config, request).unwrap();
            let second = format_request(config, request).unwrap();
            assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
        }
    }
}

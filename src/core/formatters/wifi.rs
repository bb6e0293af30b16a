use crate::domain::model::{Payload, RenderConfig};
use crate::utils::error::{QrGenError, Result};

/// `WIFI:S:<ssid>;T:<security>;P:<password>;;`
///
/// `security_type` is passed through as given (usually WPA, WEP or nopass).
/// Delimiters inside `ssid` or `password` are not escaped.
pub fn format(
    config: RenderConfig,
    ssid: &str,
    password: &str,
    security_type: &str,
) -> Result<Payload> {
    if ssid.is_empty() {
        return Err(QrGenError::EmptySsid);
    }
    let content = format!("WIFI:S:{};T:{};P:{};;", ssid, security_type, password);
    Payload::new(content, config)
}

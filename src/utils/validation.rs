use crate::utils::error::{QrGenError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Whitespace accepted around numeric strings: space, \t, \n, \r, \v, \f.
const NUMERIC_WS: &[char] = &[' ', '\t', '\n', '\r', '\x0B', '\x0C'];

const NUMBER_PATTERN: &str = r"[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?";

fn numeric_string_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^[ \t\n\r\x0B\x0C]*{}[ \t\n\r\x0B\x0C]*$", NUMBER_PATTERN))
            .expect("numeric string pattern is valid")
    })
}

fn leading_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^[ \t\n\r\x0B\x0C]*({})", NUMBER_PATTERN))
            .expect("leading number pattern is valid")
    })
}

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 語法檢查：必須是含 scheme 與 host 的絕對 URL，不做任何網路解析
pub fn validate_url(url_str: &str) -> Result<Url> {
    let invalid = |reason: String| QrGenError::InvalidUrl {
        value: url_str.to_string(),
        reason,
    };

    if url_str.is_empty() {
        return Err(invalid("URL cannot be empty".to_string()));
    }

    // the WHATWG parser silently strips these, but the payload keeps the raw text
    if url_str
        .chars()
        .any(|c| c.is_ascii_whitespace() || c.is_control())
    {
        return Err(invalid(
            "URL contains whitespace or control characters".to_string(),
        ));
    }

    let url = Url::parse(url_str).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;

    let scheme_len = url.scheme().len();
    let has_authority = url_str
        .get(..scheme_len)
        .is_some_and(|s| s.eq_ignore_ascii_case(url.scheme()))
        && url_str[scheme_len..].starts_with("://");
    if !has_authority {
        return Err(invalid(format!(
            "URL must have the form {}://host",
            url.scheme()
        )));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(invalid(format!(
            "URL with scheme '{}' has no host",
            url.scheme()
        ))),
    }
}

/// Numeric string: optional surrounding whitespace, sign, decimal digits with
/// an optional fraction and exponent. Returns the parsed value.
pub fn parse_numeric_string(raw: &str) -> Option<f64> {
    if !numeric_string_re().is_match(raw) {
        return None;
    }
    raw.trim_matches(NUMERIC_WS).parse::<f64>().ok()
}

/// Integer cast of a string: the leading number (fraction and exponent
/// included) truncated toward zero; no leading number reads as 0.
pub fn leading_integer(raw: &str) -> i64 {
    let Some(number) = leading_number_re()
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return 0;
    };

    if number.contains(['.', 'e', 'E']) {
        // `as` saturates at the i64 bounds
        number.parse::<f64>().map(|v| v.trunc() as i64).unwrap_or(0)
    } else {
        number.parse::<i64>().unwrap_or_else(|_| {
            if number.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }
        })
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(QrGenError::ConfigError {
            field: field_name.to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(QrGenError::ConfigError {
            field: field_name.to_string(),
            message: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QrGenError::ConfigError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

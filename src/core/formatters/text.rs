use crate::domain::model::{Payload, RenderConfig, MAX_PAYLOAD_BYTES};
use crate::utils::error::{QrGenError, Result};

/// Free text is encoded verbatim.
pub fn format(config: RenderConfig, body: &str) -> Result<Payload> {
    if body.is_empty() {
        return Err(QrGenError::EmptyContent);
    }
    if body.len() > MAX_PAYLOAD_BYTES {
        return Err(QrGenError::PayloadTooLarge {
            length: body.len(),
            max: MAX_PAYLOAD_BYTES,
        });
    }
    Payload::new(body.to_string(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_rejected() {
        let err = format(RenderConfig::default(), "").unwrap_err();
        assert!(matches!(err, QrGenError::EmptyContent));
    }

    #[test]
    fn test_capacity_boundary() {
        let config = RenderConfig::default();

        let at_limit = "a".repeat(2953);
        let payload = format(config, &at_limit).unwrap();
        assert_eq!(payload.as_str(), at_limit);

        let over_limit = "a".repeat(2954);
        let err = format(config, &over_limit).unwrap_err();
        assert!(matches!(err, QrGenError::PayloadTooLarge { length: 2954, .. }));
        assert_eq!(err.status_code(), 413);
    }

    #[test]
    fn test_limit_counts_bytes() {
        // 1000 three-byte characters
        let wide = "€".repeat(1000);
        assert!(matches!(
            format(RenderConfig::default(), &wide),
            Err(QrGenError::PayloadTooLarge { length: 3000, .. })
        ));
    }

    #[test]
    fn test_text_is_verbatim() {
        let body = "  line one\nline two;with:delims  ";
        let payload = format(RenderConfig::default(), body).unwrap();
        assert_eq!(payload.as_str(), body);
    }
}

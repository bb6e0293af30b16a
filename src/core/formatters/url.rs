use crate::domain::model::{Payload, RenderConfig};
use crate::utils::error::Result;
use crate::utils::validation::validate_url;

pub fn format(config: RenderConfig, value: &str) -> Result<Payload> {
    validate_url(value)?;
    // the parser normalizes (e.g. adds a trailing slash); keep the caller's text
    Payload::new(value.to_string(), config)
}

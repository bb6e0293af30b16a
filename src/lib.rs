pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{LocalStorage, QrImageEncoder};
pub use crate::core::{dispatcher::Dispatcher, normalizer::normalize, request::RawRequest};
pub use crate::domain::model::{
    ContentCategory, ContentRequest, CorrectionLevel, Payload, RenderConfig, RenderedImage,
};
pub use crate::utils::error::{ErrorKind, QrGenError, Result};

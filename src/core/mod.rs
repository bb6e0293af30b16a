pub mod dispatcher;
pub mod formatters;
pub mod normalizer;
pub mod request;

pub use crate::domain::model::{ContentRequest, Payload, RenderConfig, RenderedImage};
pub use crate::domain::ports::{Storage, SymbolEncoder};
pub use crate::utils::error::Result;

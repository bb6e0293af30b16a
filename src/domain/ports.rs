use crate::domain::model::{CorrectionLevel, RenderedImage};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Turns a payload string into a rendered symbol. Implementations enforce the
/// real capacity limit for the given correction level.
#[async_trait]
pub trait SymbolEncoder: Send + Sync {
    async fn encode(
        &self,
        payload: &str,
        correction_level: CorrectionLevel,
        module_scale: u32,
        margin_modules: u32,
    ) -> Result<RenderedImage>;
}

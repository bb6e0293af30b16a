use crate::core::formatters::format_request;
use crate::core::request::{build_content_request, RawRequest};
use crate::domain::model::{ContentCategory, Payload, RenderConfig, RenderedImage};
use crate::domain::ports::SymbolEncoder;
use crate::utils::error::{QrGenError, Result};
use std::collections::HashMap;

pub struct Dispatcher<E: SymbolEncoder> {
    encoder: E,
}

impl<E: SymbolEncoder> Dispatcher<E> {
    pub fn new(encoder: E) -> Self {
        Self { encoder }
    }

    /// 正規化 + 分派，供傳輸層直接呼叫
    pub async fn handle(&self, request: &RawRequest) -> Result<RenderedImage> {
        let config = request.render_config();
        self.dispatch(request.category(), config, &request.fields)
            .await
    }

    pub async fn dispatch(
        &self,
        category: &str,
        config: RenderConfig,
        fields: &HashMap<String, String>,
    ) -> Result<RenderedImage> {
        let category: ContentCategory = category.parse().inspect_err(|e| {
            tracing::warn!("❌ Rejected request: {}", e);
        })?;

        tracing::debug!(
            "Dispatching '{}' request (size: {}px, level: {})",
            category,
            config.module_size_pixels(),
            config.correction_level()
        );

        let request = build_content_request(category, fields);
        let payload = format_request(config, &request).inspect_err(|e| {
            tracing::warn!("❌ {} validation failed: {}", category, e);
        })?;

        self.render(&payload).await
    }

    pub async fn render(&self, payload: &Payload) -> Result<RenderedImage> {
        let config = payload.config();
        let module_scale = config.module_scale();
        let margin = config.margin_modules();

        tracing::debug!(
            "Encoding {} byte payload (scale: {}, margin: {})",
            payload.as_str().len(),
            module_scale,
            margin
        );

        let image = self
            .encoder
            .encode(
                payload.as_str(),
                config.correction_level(),
                module_scale,
                margin,
            )
            .await
            .map_err(|e| match e {
                QrGenError::EncoderFailure { .. } => e,
                other => QrGenError::EncoderFailure {
                    message: other.to_string(),
                },
            })
            .inspect_err(|e| tracing::error!("❌ {}", e))?;

        tracing::info!(
            "✅ Rendered {}x{} QR image ({} bytes)",
            image.width,
            image.height,
            image.bytes.len()
        );
        Ok(image)
    }
}

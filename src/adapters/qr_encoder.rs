use crate::domain::model::{CorrectionLevel, RenderedImage};
use crate::domain::ports::SymbolEncoder;
use crate::utils::error::{QrGenError, Result};
use async_trait::async_trait;
use image::{ImageBuffer, ImageFormat, Luma};
use qrcode::{Color, EcLevel, QrCode};
use std::io::Cursor;

const DARK: Luma<u8> = Luma([0u8]);
const LIGHT: Luma<u8> = Luma([255u8]);

/// PNG 編碼器：以 `qrcode` 建立矩陣，再以 `image` 柵格化
#[derive(Debug, Clone, Copy, Default)]
pub struct QrImageEncoder;

impl QrImageEncoder {
    pub fn new() -> Self {
        Self
    }
}

fn ec_level(level: CorrectionLevel) -> EcLevel {
    match level {
        CorrectionLevel::L => EcLevel::L,
        CorrectionLevel::M => EcLevel::M,
        CorrectionLevel::Q => EcLevel::Q,
        CorrectionLevel::H => EcLevel::H,
    }
}

fn encoder_failure(message: impl ToString) -> QrGenError {
    QrGenError::EncoderFailure {
        message: message.to_string(),
    }
}

/// Each module becomes a `module_scale` square; `margin_modules` light modules
/// surround the symbol on every side.
fn rasterize(
    payload: &str,
    correction_level: CorrectionLevel,
    module_scale: u32,
    margin_modules: u32,
) -> Result<RenderedImage> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), ec_level(correction_level))
        .map_err(encoder_failure)?;

    let scale = module_scale.max(1);
    let modules = code.width() as u32;
    let side = (modules + 2 * margin_modules) * scale;

    tracing::debug!(
        "QR symbol: {}x{} modules, level {}, image {}x{}px",
        modules,
        modules,
        correction_level,
        side,
        side
    );

    let img = ImageBuffer::from_fn(side, side, |x, y| {
        let mx = (x / scale) as i64 - margin_modules as i64;
        let my = (y / scale) as i64 - margin_modules as i64;
        let inside = (0..modules as i64).contains(&mx) && (0..modules as i64).contains(&my);
        if inside && code[(mx as usize, my as usize)] == Color::Dark {
            DARK
        } else {
            LIGHT
        }
    });

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(encoder_failure)?;

    Ok(RenderedImage::png(bytes, side, side))
}

#[async_trait]
impl SymbolEncoder for QrImageEncoder {
    async fn encode(
        &self,
        payload: &str,
        correction_level: CorrectionLevel,
        module_scale: u32,
        margin_modules: u32,
    ) -> Result<RenderedImage> {
        let payload = payload.to_string();
        tokio::task::spawn_blocking(move || {
            rasterize(&payload, correction_level, module_scale, margin_modules)
        })
        .await
        .map_err(encoder_failure)?
    }
}

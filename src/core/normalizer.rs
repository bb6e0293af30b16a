use crate::domain::model::{CorrectionLevel, RenderConfig, DEFAULT_MODULE_SIZE_PIXELS};
use crate::utils::validation::leading_integer;

/// 將原始的尺寸與糾錯等級轉成 RenderConfig；永不失敗
///
/// 尺寸取開頭的數字（含小數與指數，如 "1e3"）後截斷，無數字視為 0，
/// 再夾在 [100, 1000]；等級只轉大寫不修剪，無法辨識時一律回到 M。
pub fn normalize(raw_size: Option<&str>, raw_level: Option<&str>) -> RenderConfig {
    let size = raw_size
        .map(leading_integer)
        .unwrap_or(DEFAULT_MODULE_SIZE_PIXELS as i64);

    let level = raw_level
        .and_then(CorrectionLevel::parse_lenient)
        .unwrap_or_default();

    // clamp in i64 first so negative and huge inputs never wrap
    let size = size.clamp(0, u32::MAX as i64) as u32;
    RenderConfig::new(size, level)
}

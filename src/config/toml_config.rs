use crate::utils::error::{QrGenError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub render: RenderDefaults,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 渲染預設值；原樣交給 normalizer，因此不在此驗證
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderDefaults {
    pub size: Option<SizeValue>,
    pub correction_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    Number(i64),
    Text(String),
}

impl RenderDefaults {
    pub fn size_raw(&self) -> Option<String> {
        self.size.as_ref().map(|size| match size {
            SizeValue::Number(n) => n.to_string(),
            SizeValue::Text(s) => s.clone(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_filename")]
    pub filename: String,
}

fn default_output_path() -> String {
    "./generated".to_string()
}

fn default_filename() -> String {
    crate::domain::model::RenderedImage::INLINE_FILENAME.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            filename: default_filename(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub json: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QrGenError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QrGenError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${QR_OUTPUT_DIR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QrGenError::ConfigError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output.path", &self.output.path)?;
        validate_non_empty_string("output.filename", &self.output.filename)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[render]
size = 450
correction_level = "h"

[output]
path = "./codes"
filename = "wifi.png"

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.render.size_raw().as_deref(), Some("450"));
        assert_eq!(config.render.correction_level.as_deref(), Some("h"));
        assert_eq!(config.output.path, "./codes");
        assert_eq!(config.output.filename, "wifi.png");
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.logging.json);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(config.render.size_raw().is_none());
        assert_eq!(config.output.path, "./generated");
        assert_eq!(config.output.filename, "qr_code.png");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_size_as_string() {
        let config = TomlConfig::from_toml_str("[render]\nsize = \"250px\"\n").unwrap();
        assert_eq!(config.render.size_raw().as_deref(), Some("250px"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("QRGEN_TEST_OUTPUT_DIR", "/tmp/qrgen-test");

        let toml_content = r#"
[output]
path = "${QRGEN_TEST_OUTPUT_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output.path, "/tmp/qrgen-test");

        std::env::remove_var("QRGEN_TEST_OUTPUT_DIR");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[output]\npath = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[render\nsize = 1").unwrap_err();
        assert!(matches!(err, QrGenError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[render]\ncorrection_level = \"L\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.render.correction_level.as_deref(), Some("L"));
    }
}

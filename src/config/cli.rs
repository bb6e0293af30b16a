use crate::config::toml_config::TomlConfig;
use crate::core::request::{
    RawRequest, FIELD_CONTENT, FIELD_LATITUDE, FIELD_LONGITUDE, FIELD_PASSWORD,
    FIELD_SECURITY_TYPE, FIELD_SSID,
};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "qrgen")]
#[command(about = "Generate QR code images for text, URLs, WiFi credentials and geo locations")]
pub struct CliConfig {
    /// QR type: text, url, wifi or geo
    #[arg(short = 't', long = "type")]
    pub category: Option<String>,

    /// Text or URL to encode
    #[arg(long, allow_hyphen_values = true)]
    pub content: Option<String>,

    #[arg(long)]
    pub ssid: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    /// WPA, WEP or nopass
    #[arg(long)]
    pub security_type: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<String>,

    /// Image size in pixels, clamped to 100..=1000
    #[arg(short, long, allow_hyphen_values = true)]
    pub size: Option<String>,

    /// Error correction level: L, M, Q or H
    #[arg(short = 'l', long)]
    pub correction_level: Option<String>,

    #[arg(short, long)]
    pub output_path: Option<String>,

    #[arg(short, long)]
    pub filename: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Read the request from a JSON file instead of flags
    #[arg(long)]
    pub request: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Print errors as a JSON body on stderr")]
    pub json_errors: bool,
}

impl CliConfig {
    /// 組合最終請求：CLI 旗標 > JSON 請求檔 > TOML 預設值
    pub fn build_request(&self, file_config: &TomlConfig) -> Result<RawRequest> {
        let mut request = match &self.request {
            Some(path) => RawRequest::from_json(&std::fs::read_to_string(path)?)?,
            None => RawRequest::default(),
        };

        if let Some(category) = &self.category {
            request.category = Some(category.clone());
        }

        request.size = self
            .size
            .clone()
            .or(request.size)
            .or_else(|| file_config.render.size_raw());
        request.correction_level = self
            .correction_level
            .clone()
            .or(request.correction_level)
            .or_else(|| file_config.render.correction_level.clone());

        let flags = [
            (FIELD_CONTENT, &self.content),
            (FIELD_SSID, &self.ssid),
            (FIELD_PASSWORD, &self.password),
            (FIELD_SECURITY_TYPE, &self.security_type),
            (FIELD_LATITUDE, &self.latitude),
            (FIELD_LONGITUDE, &self.longitude),
        ];
        for (key, value) in flags {
            if let Some(value) = value {
                request.fields.insert(key.to_string(), value.clone());
            }
        }

        Ok(request)
    }

    pub fn output_path<'a>(&'a self, file_config: &'a TomlConfig) -> &'a str {
        self.output_path
            .as_deref()
            .unwrap_or(&file_config.output.path)
    }

    pub fn filename<'a>(&'a self, file_config: &'a TomlConfig) -> &'a str {
        self.filename
            .as_deref()
            .unwrap_or(&file_config.output.filename)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }
        if let Some(filename) = &self.filename {
            validate_non_empty_string("filename", filename)?;
        }
        if let Some(request) = &self.request {
            validate_path("request", request)?;
        }
        Ok(())
    }
}

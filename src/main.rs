use clap::Parser;
use qrgen::core::Storage;
use qrgen::utils::{logger, validation::Validate};
use qrgen::{CliConfig, Dispatcher, LocalStorage, QrGenError, QrImageEncoder, TomlConfig};

fn exit_code(e: &QrGenError) -> i32 {
    if e.is_client_error() {
        2
    } else {
        3
    }
}

fn report_failure(e: &QrGenError, json_errors: bool) {
    tracing::error!(
        "❌ QR generation failed: {} (kind: {}, status: {})",
        e,
        e.kind(),
        e.status_code()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    if json_errors {
        match serde_json::to_string(&e.to_error_body()) {
            Ok(body) => eprintln!("{}", body),
            Err(_) => eprintln!("❌ {}", e.user_friendly_message()),
        }
    } else {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    // 初始化日誌
    if cli.log_json || file_config.logging.json {
        logger::init_json_logger(cli.verbose, file_config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, file_config.log_level());
    }

    tracing::info!("🚀 Starting qrgen");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = cli.validate().and_then(|_| file_config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let request = match cli.build_request(&file_config) {
        Ok(request) => request,
        Err(e) => {
            report_failure(&e, cli.json_errors);
            std::process::exit(exit_code(&e));
        }
    };

    let dispatcher = Dispatcher::new(QrImageEncoder::new());
    let image = match dispatcher.handle(&request).await {
        Ok(image) => image,
        Err(e) => {
            report_failure(&e, cli.json_errors);
            std::process::exit(exit_code(&e));
        }
    };

    let storage = LocalStorage::new(cli.output_path(&file_config).to_string());
    let filename = cli.filename(&file_config);
    if let Err(e) = storage.write_file(filename, &image.bytes).await {
        report_failure(&e, cli.json_errors);
        std::process::exit(exit_code(&e));
    }

    let saved = storage.full_path(filename);
    tracing::info!("📁 QR code saved to: {}", saved.display());
    println!("✅ QR code generated ({}x{} px)", image.width, image.height);
    println!("📁 Output saved to: {}", saved.display());

    Ok(())
}

use clap::Parser;
use name_decoder::domain::ports::ConfigProvider;
use name_decoder::utils::error::ErrorSeverity;
use name_decoder::utils::{logger, validation::Validate};
use name_decoder::{CliConfig, ConsoleSurface, ConversionEngine, FfprobeProbe, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting name-decoder");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 配置檔優先於命令列旗標
    if let Some(config_path) = cli.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", config_path);
        let config = match TomlConfig::from_file(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", config_path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        };
        run(&cli.name, cli.json, config).await;
    } else {
        run(&cli.name, cli.json, cli.clone()).await;
    }

    Ok(())
}

async fn run<C: ConfigProvider + Validate>(name: &str, json: bool, config: C) {
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let engine = ConversionEngine::new(ConsoleSurface::new(), FfprobeProbe::new(), config);

    match engine.convert(name).await {
        Ok(report) => {
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("❌ Failed to serialize report: {}", e);
                        std::process::exit(3);
                    }
                }
            } else {
                println!("✅ '{}' reduces to {}", report.name, report.number);
                if let Some(video) = &report.video {
                    if report.fallback {
                        println!("🎬 Fallback video: {}", video);
                    } else {
                        println!("🎬 Video: {}", video);
                    }
                }
            }

            // 等待一次性計時器觸發後再結束程序
            if let Some(secs) = report.auto_stop_secs {
                tokio::time::sleep(std::time::Duration::from_secs_f64(secs + 0.1)).await;
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

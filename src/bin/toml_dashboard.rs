use clap::Parser;
use workspace_analytics::config::toml_config::RenderConfig;
use workspace_analytics::core::ConfigProvider;
use workspace_analytics::utils::{logger, validation::Validate};
use workspace_analytics::{DashboardEngine, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-dashboard")]
#[command(about = "Render the workspace dashboard from a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "dashboard.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the seed from config
    #[arg(long)]
    seed: Option<u64>,

    /// Load the assets and show the plan without writing the page
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置（日誌尚未初始化，直接輸出到 stderr）
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    logger::init_logger(args.verbose || config.verbose(), config.json_logs());
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(seed) = args.seed {
        config.render = Some(RenderConfig { seed: Some(seed) });
        tracing::info!("🔧 Seed overridden to: {}", seed);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    let print_report = config.report_enabled();
    let storage = LocalStorage::new(".".to_string());
    let engine = DashboardEngine::new(storage, config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the page will not be written");
        match engine.load_assets().await {
            Ok(pool) => {
                println!("✅ {} assets loaded", pool.len());
                for asset in pool.iter() {
                    println!(
                        "   {} ({}, {} base64 chars)",
                        asset.name(),
                        asset.mime_type(),
                        asset.base64().len()
                    );
                }
            }
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
        }
        return Ok(());
    }

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ Dashboard rendered successfully!");
            if print_report {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("✅ Dashboard rendered successfully!");
                println!("📁 Output saved to: {}", report.output_path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Dashboard render failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Dashboard: {}", config.page_title());
    tracing::info!("🖼️  Assets: {}", config.asset_paths().join(", "));
    tracing::info!("🏷️  Placeholder classes: {}", config.placeholder_classes().join(", "));
    tracing::info!(
        "📁 Output: {}/{}",
        config.output_path(),
        config.output_file()
    );
    match config.seed() {
        Some(seed) => tracing::info!("🎲 Seed: {}", seed),
        None => tracing::info!("🎲 Seed: random"),
    }
}

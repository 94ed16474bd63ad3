use clap::Parser;
use workspace_analytics::utils::{logger, validation::Validate};
use workspace_analytics::{CliConfig, DashboardEngine, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("Starting workspace-analytics");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let print_report = config.report;
    let storage = LocalStorage::new(".".to_string());
    let engine = DashboardEngine::new(storage, config);

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ Dashboard rendered successfully!");
            tracing::info!("📁 Output saved to: {}", report.output_path);
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
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

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

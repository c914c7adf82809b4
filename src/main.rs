use clap::Parser;
use contact_drift::utils::error::{DriftError, ErrorSeverity};
use contact_drift::utils::{logger, validation::Validate};
use contact_drift::{CliConfig, LocalStorage, ReconEngine, ReconcilePipeline};

fn exit_with(e: &DriftError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ Reconciliation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,     // 輸入或配置錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    };
    std::process::exit(exit_code);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting contact-drift");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    tracing::info!(
        "✅ Configuration loaded (company threshold {}, title threshold {})",
        config.thresholds.company,
        config.thresholds.title
    );

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ReconcilePipeline::new(storage, config);
    let engine = ReconEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            println!("✅ Matching completed successfully!");
            println!("📁 Report saved to: {}", output_path);
            println!("⚠️  Fuzzy matching can mislink people with common names; review the results before use.");
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

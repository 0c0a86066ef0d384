use clap::Parser;
use invoice_gen::adapters::auth::{resolve_access_token, TokenCache};
use invoice_gen::utils::{logger, validation::Validate};
use invoice_gen::{
    CliConfig, InvoiceEngine, InvoiceError, InvoicePipeline, LocalStorage, Period, Settings,
};

fn exit_with_error(context: &str, e: &InvoiceError) -> ! {
    tracing::error!("❌ {}: {}", context, e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting invoice-gen CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let period = match Period::new(config.month, config.year) {
        Ok(period) => period,
        Err(e) => exit_with_error("Invalid reporting period", &e),
    };

    let settings = match Settings::from_env(config.invoice_dir.clone()) {
        Ok(settings) => settings,
        Err(e) => exit_with_error("Configuration loading failed", &e),
    };

    if let Err(e) = settings.validate() {
        exit_with_error("Configuration validation failed", &e);
    }

    let access_token = match resolve_access_token(&TokenCache::default()) {
        Ok(token) => token,
        Err(e) => exit_with_error("Access token resolution failed", &e),
    };

    // Build the storage and pipeline
    let storage = LocalStorage::new(settings.invoice_dir.clone());
    let pipeline = InvoicePipeline::new(storage, settings, period, &access_token);

    let engine = InvoiceEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Invoice for {} generated successfully!", period);
            tracing::info!("📁 PDF saved to: {}", output_path);
            println!("✅ Invoice for {} generated successfully!", period);
            println!("📁 PDF saved to: {}", output_path);
        }
        Err(e) => exit_with_error("Invoice generation failed", &e),
    }

    Ok(())
}

use clap::Parser;
use payment_stats::utils::{logger, validation::Validate};
use payment_stats::{records_from_json_str, CliConfig, PaymentAnalyzer};
use std::io::Read;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting payment-stats");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let records = match records_from_json_str(&input) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to parse payments: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let analyzer = PaymentAnalyzer::new(config.analysis_config());
    let result = analyzer.analyse(&records);
    if result.is_invalid() {
        tracing::warn!("At least one amount could not be parsed; statistics are not numbers");
    }

    let output = if config.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(())
}

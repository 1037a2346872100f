use book_catalog::utils::error::ErrorSeverity;
use book_catalog::utils::logger;
use book_catalog::CliConfig;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // Parsed before the logger exists; errors are reported once it does.
    let seed = config.seed_config();
    let json_logs = config.json_logs
        || matches!(&seed, Ok(Some(parsed)) if parsed.json_logs());
    if json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting book-catalog");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let result = seed
        .and_then(|seed| CliConfig::build_from(seed.as_ref()))
        .and_then(|mut catalog| config.command.execute(&mut catalog));

    match result {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

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

    Ok(())
}

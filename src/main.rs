use clap::Parser;
use move_quote::adapters::batch::{quote_rows, write_quote_rows, QuoteStatus};
use move_quote::core::Storage;
use move_quote::utils::error::ErrorSeverity;
use move_quote::utils::{logger, validation::Validate};
use move_quote::{
    CliConfig, LocalStorage, QuoteEngine, QuoteError, QuoteReport, Result, TomlConfig,
};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting move-quote CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Quote failed: {} (Category: {:?}, Severity: {:?})",
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
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> Result<()> {
    config.validate()?;

    let rate_card = match &config.rates {
        Some(path) => {
            tracing::info!("📁 Loading rate card from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };
    rate_card.validate()?;
    let pretty = config.pretty || rate_card.pretty_output();
    let rate_card_name = rate_card.name().to_string();
    let engine = QuoteEngine::new(rate_card)?;

    let storage = LocalStorage::working_dir();

    let output = match (&config.spec, &config.batch) {
        (Some(spec_path), None) => {
            quote_single(&engine, &storage, spec_path, &rate_card_name, pretty)?
        }
        (None, Some(batch_path)) => quote_batch(&engine, &storage, batch_path)?,
        _ => {
            return Err(QuoteError::ConfigError {
                message: "exactly one of --spec or --batch is required".to_string(),
            })
        }
    };

    match &config.output {
        Some(path) => {
            storage.write_file(path, &output)?;
            tracing::info!("📁 Output saved to: {}", path);
        }
        None => {
            use std::io::Write;
            std::io::stdout().write_all(&output)?;
        }
    }

    Ok(())
}

fn quote_single(
    engine: &QuoteEngine<TomlConfig>,
    storage: &LocalStorage,
    spec_path: &str,
    rate_card_name: &str,
    pretty: bool,
) -> Result<Vec<u8>> {
    let spec = storage.load_move_specification(spec_path)?;

    let breakdown = engine.compute_quote(&spec)?;
    tracing::info!(
        "✅ Quoted {:.1} m³ over {:.0} km: {}",
        spec.volume_cubic_meters,
        spec.distance_km,
        breakdown.final_price
    );

    let report = QuoteReport::new(rate_card_name, spec, breakdown);
    let mut json = if pretty {
        serde_json::to_vec_pretty(&report)?
    } else {
        serde_json::to_vec(&report)?
    };
    json.push(b'\n');
    Ok(json)
}

fn quote_batch(
    engine: &QuoteEngine<TomlConfig>,
    storage: &LocalStorage,
    batch_path: &str,
) -> Result<Vec<u8>> {
    let parsed = storage.load_move_rows(batch_path)?;
    tracing::info!("Quoting {} moves from {}", parsed.len(), batch_path);

    let rows = quote_rows(engine, &parsed);
    let rejected = rows
        .iter()
        .filter(|row| row.status == QuoteStatus::Rejected)
        .count();

    tracing::info!(
        "✅ Batch done: {} accepted, {} rejected",
        rows.len() - rejected,
        rejected
    );

    let mut buffer = Vec::new();
    write_quote_rows(&mut buffer, &rows)?;
    Ok(buffer)
}

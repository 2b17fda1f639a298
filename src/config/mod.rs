pub mod cli;
pub mod rates;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::{QuoteError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "move-quote")]
#[command(about = "Price a move from its specification")]
pub struct CliConfig {
    /// Move specification to quote (.json or .toml)
    #[arg(long, conflicts_with = "batch")]
    pub spec: Option<String>,

    /// CSV file with one move per row
    #[arg(long)]
    pub batch: Option<String>,

    /// Rate card overrides (TOML)
    #[arg(long)]
    pub rates: Option<String>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long, help = "Pretty-print JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match (&self.spec, &self.batch) {
            (Some(spec), None) => validate_non_empty_string("--spec", spec)?,
            (None, Some(batch)) => validate_non_empty_string("--batch", batch)?,
            _ => {
                return Err(QuoteError::ConfigError {
                    message: "exactly one of --spec or --batch is required".to_string(),
                })
            }
        }
        if let Some(rates) = &self.rates {
            validate_non_empty_string("--rates", rates)?;
        }
        if let Some(output) = &self.output {
            validate_non_empty_string("--output", output)?;
        }
        Ok(())
    }
}

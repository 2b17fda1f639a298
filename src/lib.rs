pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, rates::PricingRates, toml_config::TomlConfig};
pub use core::engine::{compute_quote, QuoteEngine};
pub use domain::model::{
    AccessDescriptor, BoxCounts, Discounts, ElevatorType, MoveSpecification, PriceBreakdown,
    QuoteReport, Subtotals,
};
pub use utils::error::{QuoteError, Result};

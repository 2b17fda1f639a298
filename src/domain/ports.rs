use crate::config::rates::PricingRates;
use crate::utils::error::Result;

/// Source of the rate card a quote is priced against.
pub trait RateProvider: Send + Sync {
    fn rates(&self) -> &PricingRates;
}

impl RateProvider for PricingRates {
    fn rates(&self) -> &PricingRates {
        self
    }
}

/// File access for the CLI; the engine itself never touches storage.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

use crate::config::rates::PricingRates;
use crate::domain::ports::RateProvider;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rate-card file, e.g.
///
/// ```toml
/// [quote]
/// name = "spring-2025"
///
/// [rates.discounts]
/// low_season_rate = 0.12
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub quote: Option<QuoteSection>,
    #[serde(default)]
    pub rates: PricingRates,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSection {
    pub name: String,
    pub pretty_output: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LOW_SEASON_RATE})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QuoteError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(quote) = &self.quote {
            crate::utils::validation::validate_non_empty_string("quote.name", &quote.name)?;
        }
        self.rates.validate()
    }

    pub fn name(&self) -> &str {
        self.quote.as_ref().map(|q| q.name.as_str()).unwrap_or("default")
    }

    pub fn pretty_output(&self) -> bool {
        self.quote
            .as_ref()
            .and_then(|q| q.pretty_output)
            .unwrap_or(false)
    }
}

impl RateProvider for TomlConfig {
    fn rates(&self) -> &PricingRates {
        &self.rates
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

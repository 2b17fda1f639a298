use crate::domain::model::MoveSpecification;
use crate::utils::error::{QuoteError, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Toml,
}

impl SpecFormat {
    pub fn from_path(path: &str) -> Result<Self> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(SpecFormat::Json),
            Some("toml") => Ok(SpecFormat::Toml),
            _ => Err(QuoteError::invalid_config(
                "--spec",
                path,
                "unsupported file extension, expected .json or .toml",
            )),
        }
    }
}

pub fn parse_move_specification(data: &[u8], format: SpecFormat) -> Result<MoveSpecification> {
    match format {
        SpecFormat::Json => Ok(serde_json::from_slice(data)?),
        SpecFormat::Toml => {
            let text = std::str::from_utf8(data).map_err(|e| QuoteError::ConfigError {
                message: format!("specification is not valid UTF-8: {}", e),
            })?;
            Ok(toml::from_str(text)?)
        }
    }
}

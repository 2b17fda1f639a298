use crate::utils::error::{QuoteError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(QuoteError::validation(
            field_name,
            value,
            "must be a finite number",
        ));
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value < 0.0 {
        return Err(QuoteError::validation(field_name, value, "must not be negative"));
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value <= 0.0 {
        return Err(QuoteError::validation(
            field_name,
            value,
            "must be greater than 0",
        ));
    }
    Ok(())
}

/// Rate-card check: `value` within `[min, max]`.
pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(QuoteError::invalid_config(
            field_name,
            value,
            format!("must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuoteError::invalid_config(
            field_name,
            value,
            "cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Rate-card check: a finite, non-negative amount.
pub fn validate_rate(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(QuoteError::invalid_config(
            field_name,
            value,
            "must be a finite, non-negative number",
        ));
    }
    Ok(())
}

/// Rate-card check: a fraction in `[0, 1]`.
pub fn validate_fraction(field_name: &str, value: f64) -> Result<()> {
    validate_rate(field_name, value)?;
    validate_range(field_name, value, 0.0, 1.0)
}

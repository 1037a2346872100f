use crate::domain::model::{MAX_RATING, MIN_RATING};
use crate::utils::error::{CatalogError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(CatalogError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// Checks a requested rating against the closed `[MIN_RATING, MAX_RATING]` range.
pub fn validate_rating(field_name: &str, value: i32) -> Result<u8> {
    u8::try_from(value)
        .ok()
        .filter(|rating| (MIN_RATING..=MAX_RATING).contains(rating))
        .ok_or_else(|| CatalogError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Rating must be between {} and {}", MIN_RATING, MAX_RATING),
        })
}

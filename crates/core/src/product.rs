//! Product attribute constants and validation.
//!
//! Handlers run these checks before a product is created or patched so the
//! repository only ever sees well-formed values.

use crate::error::CoreError;

/// Maximum length of a product name in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Validate a product name: non-empty after trimming, at most [`MAX_NAME_LEN`] chars.
pub fn validate_product_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be empty".to_string()));
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "name must be at most {MAX_NAME_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate a product price. NaN and infinity are rejected, as are negatives.
pub fn validate_price(price: f64) -> Result<(), CoreError> {
    if !price.is_finite() {
        return Err(CoreError::Validation("price must be a finite number".to_string()));
    }
    if price < 0.0 {
        return Err(CoreError::Validation(format!("price must be >= 0, got {price}")));
    }
    Ok(())
}

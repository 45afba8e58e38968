//! Validated decoding of catalog payloads.

use serde::de::DeserializeOwned;

use crate::SchemaError;

/// Range checks that run after a payload decodes.
pub trait Validate {
    /// Check invariants the type system cannot express.
    fn validate(&self) -> Result<(), SchemaError>;
}

/// Decode a JSON body and validate it.
pub fn parse_json<T: DeserializeOwned + Validate>(bytes: &[u8]) -> Result<T, SchemaError> {
    let value: T = serde_json::from_slice(bytes)?;
    value.validate()?;
    Ok(value)
}

/// Reject non-finite numbers and values outside `[min, max]`.
pub(crate) fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), SchemaError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SchemaError::out_of_range(field, value))
    }
}

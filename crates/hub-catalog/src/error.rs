//! Schema error types.

use thiserror::Error;

/// A catalog payload did not match the expected shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// The payload could not be decoded into the expected entity.
    #[error("Malformed payload: {0}")]
    Malformed(String),

    /// A field decoded but holds a value outside its documented range.
    #[error("Field `{field}` out of range: {value}")]
    OutOfRange { field: String, value: String },

    /// A list envelope carries more products than its page window allows.
    #[error("Envelope holds {count} products but the limit is {limit}")]
    TooManyProducts { count: usize, limit: u32 },
}

impl SchemaError {
    /// Create an out-of-range error for a field.
    pub fn out_of_range(field: impl Into<String>, value: impl ToString) -> Self {
        SchemaError::OutOfRange {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Prefix the field path of an out-of-range error, e.g. `products[3]`.
    pub fn at(self, path: impl AsRef<str>) -> Self {
        match self {
            SchemaError::OutOfRange { field, value } => SchemaError::OutOfRange {
                field: format!("{}.{}", path.as_ref(), field),
                value,
            },
            other => other,
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        SchemaError::Malformed(e.to_string())
    }
}

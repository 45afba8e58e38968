//! Product identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog product.
///
/// Upstream identifiers are positive integers; zero never names a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Identifier used when a route parameter cannot be parsed.
    pub const DEFAULT: ProductId = ProductId(1);

    /// Create an identifier, rejecting zero.
    pub fn new(id: u32) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    /// Get the raw integer value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Fetch lifecycle shared by the views.

use std::fmt;

/// Named state of a view's fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// A fetch is in flight.
    #[default]
    Loading,
    /// The latest fetch succeeded.
    Ready,
    /// The latest fetch failed.
    Error,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Loading => "loading",
            Phase::Ready => "ready",
            Phase::Error => "error",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

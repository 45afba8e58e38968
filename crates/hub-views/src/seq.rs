//! Request sequencing for view fetches.

use std::fmt;

/// Sequence number attached to one fetch issued by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic ticket source owned by a single view.
///
/// Only the most recently issued ticket is current; completions carrying any
/// earlier ticket belong to superseded requests.
#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket, superseding every earlier one.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// The most recently issued ticket, if any.
    pub fn latest(&self) -> Option<Ticket> {
        (self.latest > 0).then_some(Ticket(self.latest))
    }

    /// Check whether a completion belongs to the latest request.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest() == Some(ticket)
    }
}

//! Sequenced image pre-load tickets.
//!
//! Every render issues a ticket for the image it wants on screen. When the
//! host reports a completion, only the most recently issued ticket may swap
//! the visible image; anything older belongs to a navigation the user has
//! already moved past.

#[cfg(test)]
#[path = "preload_test.rs"]
mod preload_test;

/// One requested pre-load.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PreloadTicket {
    pub seq: u64,
    pub src: String,
}

/// How a pre-load settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloadOutcome {
    Loaded,
    Failed,
}

/// Issues monotonically increasing tickets and remembers the latest.
#[derive(Clone, Debug, Default)]
pub struct PreloadSequencer {
    latest: u64,
}

impl PreloadSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for `src`; every earlier ticket becomes stale.
    pub fn issue(&mut self, src: &str) -> PreloadTicket {
        self.latest += 1;
        PreloadTicket { seq: self.latest, src: src.to_owned() }
    }

    /// Make every outstanding ticket stale without issuing a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    #[must_use]
    pub fn is_current(&self, ticket: &PreloadTicket) -> bool {
        ticket.seq == self.latest
    }

    #[cfg(test)]
    pub(crate) fn latest(&self) -> u64 {
        self.latest
    }
}

//! Cancellable timer abstraction for debounce and loading affordances.
//!
//! The core never touches wall-clock timers itself: the event handler emits
//! [`Action::StartTimer`](crate::app::Action::StartTimer) and the host fires
//! [`Event::TimerElapsed`](crate::app::Event::TimerElapsed) back when the
//! delay passes. Cancellation is by supersession — every `schedule` call
//! bumps a generation counter, and only a token carrying the *current*
//! generation is accepted when it comes back. A stale token (a keystroke's
//! debounce overtaken by a newer keystroke) is simply ignored, which is
//! exactly the cancel-previous-on-reschedule semantics the search box needs.

use serde::{Deserialize, Serialize};

/// Quiescence window for free-text search input, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Duration of the synthetic loading affordance, in milliseconds.
///
/// Purely perceived-latency UX: the data is already available when the timer
/// starts, so nothing may gate correctness on this delay.
pub const LOADING_DELAY_MS: u64 = 800;

/// What a timer is for. Each kind has its own generation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// Search-input debounce.
    Search,
    /// Loading-skeleton clear.
    Loading,
}

/// Opaque handle identifying one scheduled timer.
///
/// The host passes the token back unchanged inside `TimerElapsed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken {
    /// Which timer sequence this token belongs to.
    pub kind: TimerKind,

    /// Generation at scheduling time; stale generations are ignored.
    pub generation: u64,
}

/// Generation-counted timer slot.
///
/// One slot exists per [`TimerKind`]. `schedule` supersedes any outstanding
/// token; `accepts` recognizes only the latest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSlot {
    kind: TimerKind,
    generation: u64,
    armed: bool,
}

impl TimerSlot {
    /// Creates an idle slot for the given kind.
    #[must_use]
    pub const fn new(kind: TimerKind) -> Self {
        Self {
            kind,
            generation: 0,
            armed: false,
        }
    }

    /// Arms the slot and returns the token the host must echo back.
    ///
    /// Any previously issued token becomes stale.
    pub fn schedule(&mut self) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        self.armed = true;
        TimerToken {
            kind: self.kind,
            generation: self.generation,
        }
    }

    /// Disarms the slot without issuing a new token.
    ///
    /// Outstanding tokens become stale; used when a reset makes the pending
    /// work irrelevant.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    /// Checks a returning token and disarms the slot when it is current.
    ///
    /// Returns `true` exactly once per scheduled generation: for the latest
    /// token while the slot is armed. Everything else is stale.
    pub fn accepts(&mut self, token: TimerToken) -> bool {
        let current = self.armed && token.kind == self.kind && token.generation == self.generation;
        if current {
            self.armed = false;
        }
        current
    }
}

//! Actions representing side effects to be executed by the host.
//!
//! The event handler is pure with respect to the outside world: it mutates
//! application state and returns a list of actions describing everything that
//! must happen beyond it — arming wall-clock timers, navigating, opening an
//! external contact link. The host executes them in order and feeds results
//! (timer expirations) back as events.

use crate::app::timer::TimerToken;
use crate::ui::ContactLink;

/// Commands the host must execute after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Arms a wall-clock timer.
    ///
    /// After `delay_ms` milliseconds the host must deliver
    /// [`Event::TimerElapsed`](crate::app::Event::TimerElapsed) carrying the
    /// same token. Stale tokens are filtered by the handler, so the host
    /// never needs to cancel anything itself.
    StartTimer {
        /// Token to echo back on expiry.
        token: TimerToken,
        /// Delay in milliseconds.
        delay_ms: u64,
    },

    /// Navigates to a listing's detail page.
    NavigateToListing {
        /// Target listing id.
        id: String,
    },

    /// Navigates back to the browse surface.
    NavigateToBrowse,

    /// Opens an external contact link (WhatsApp, mail client, dialer).
    OpenContact(ContactLink),
}

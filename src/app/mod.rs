//! Application layer coordinating state, events, and actions.
//!
//! This module implements the event-driven core that powers the browse
//! surface, sitting between the host shell and the store/domain layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Intent → Events → Event Handler → State Mutations → Actions → Host
//!                            ↑                                 ↓
//!                            └──────── Timer Expirations ──────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filters`]: Category/status/sort browse state types
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`pipeline`]: Pure filter/sort/paginate pipeline
//! - [`state`]: Central application state container and view model computation
//! - [`timer`]: Cancellable timer abstraction (debounce, loading affordance)

pub mod actions;
pub mod filters;
pub mod handler;
pub mod pipeline;
pub mod state;
pub mod timer;

pub use actions::Action;
pub use filters::{CategoryFilter, SortKey, StatusFilter};
pub use handler::{handle_event, Event};
pub use pipeline::{Filters, PAGE_SIZE};
pub use state::AppState;
pub use timer::{TimerKind, TimerToken, LOADING_DELAY_MS, SEARCH_DEBOUNCE_MS};

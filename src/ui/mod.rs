//! Presentation layer: view models and display formatting.
//!
//! This crate stops at the view-model boundary — it computes what should be
//! on screen, never how to draw it. The host consumes the view models and
//! feeds user intents back as application events:
//!
//! ```text
//! AppState → browse_viewmodel / detail_viewmodel → host render
//!     ↑                                                │
//!     └───────────── Event (user intent) ──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: browse and detail view models, cards, chips, empty state
//! - [`format`]: truncation, initials, phone grouping, highlight ranges
//! - [`contact`]: author contact deep links

pub mod contact;
pub mod format;
pub mod viewmodel;

pub use contact::ContactLink;
pub use viewmodel::{
    BrowseViewModel, CategoryChip, DetailViewModel, EmptyState, ListingCard,
};

//! Domain layer for the DonLocal marketplace core.
//!
//! This module contains the core domain types and business rules, independent of
//! the application layer, the store, or any host UI concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`listing`]: Listing model, category/status enumerations, draft validation
//!
//! # Examples
//!
//! ```
//! use donlocal::domain::{Category, Status};
//!
//! assert_eq!(Category::from_slug("mutual-aid"), Some(Category::MutualAid));
//! assert_eq!(Status::Available.glyph(), "✓");
//! ```

pub mod error;
pub mod listing;

pub use error::{DonLocalError, Result};
pub use listing::{Author, Category, Listing, ListingDraft, Status};

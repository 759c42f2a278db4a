//! Error types for the DonLocal marketplace core.
//!
//! This module defines the centralized error type [`DonLocalError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for DonLocal core operations.
///
/// This enum consolidates all error conditions that can occur in the marketplace
/// core, from store mutations addressing absent listings to catalog and
/// configuration problems. I/O failures convert automatically via `#[from]`.
///
/// # Examples
///
/// ```
/// use donlocal::domain::DonLocalError;
///
/// fn withdraw(id: &str) -> Result<(), DonLocalError> {
///     Err(DonLocalError::NotFound { id: id.to_string() })
/// }
/// ```
#[derive(Debug, Error)]
pub enum DonLocalError {
    /// A store mutation addressed a listing id that does not exist.
    ///
    /// Store operations fail loudly on absent ids rather than silently
    /// succeeding, so caller invariants stay checkable in tests.
    #[error("listing not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A listing draft failed validation before publishing.
    ///
    /// The string names the first field that violated the publish rules.
    #[error("invalid listing draft: {0}")]
    InvalidDraft(String),

    /// The category catalog could not be loaded or is inconsistent.
    ///
    /// Occurs when a catalog file cannot be parsed or does not cover the
    /// fixed category set exactly.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// The embedded seed dataset could not be parsed.
    #[error("seed data error: {0}")]
    Seed(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for DonLocal operations.
///
/// This is a type alias for `std::result::Result<T, DonLocalError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, DonLocalError>;

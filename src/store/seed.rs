//! Embedded demo dataset.
//!
//! Fresh deployments ship with a handful of listings so the browse
//! surface is never empty on first load. The dataset lives in
//! `data/seed_listings.json` and is compiled into the binary.

use crate::domain::error::{DonLocalError, Result};
use crate::domain::Listing;

/// The embedded seed document.
const SEED_JSON: &str = include_str!("../../data/seed_listings.json");

/// Parses the embedded seed listings.
///
/// # Errors
///
/// Returns a `Seed` error if the embedded JSON does not match the listing
/// schema. This can only happen when the shipped asset is out of sync with
/// the domain model.
pub fn seed_listings() -> Result<Vec<Listing>> {
    let listings: Vec<Listing> = serde_json::from_str(SEED_JSON)
        .map_err(|e| DonLocalError::Seed(format!("failed to parse seed listings: {e}")))?;

    tracing::debug!(count = listings.len(), "seed listings parsed");
    Ok(listings)
}

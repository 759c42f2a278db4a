//! Derived community statistics.
//!
//! Aggregate numbers shown on the landing page. Everything here is a pure
//! derivation over the current store contents; nothing is stored or cached.

use crate::store::ResourceStore;
use std::collections::HashSet;

/// Headline numbers for the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunityStats {
    /// Total listings currently published.
    pub resources: usize,

    /// Distinct cities across listing locations.
    pub cities: usize,

    /// Estimated community size, at 1.5 members per listing.
    pub users: usize,

    /// Estimated completed exchanges, at 0.8 per listing.
    pub exchanges: usize,
}

impl CommunityStats {
    /// Derives the statistics from the current store contents.
    ///
    /// The city of a listing is the segment of its free-text location before
    /// the first comma (locations are conventionally `"City, Neighbourhood"`);
    /// a location without a comma counts as a city of its own.
    #[must_use]
    pub fn derive(store: &ResourceStore) -> Self {
        let cities: HashSet<&str> = store
            .listings()
            .iter()
            .map(|l| l.location.split(',').next().unwrap_or("").trim())
            .filter(|city| !city.is_empty())
            .collect();

        let resources = store.len();

        Self {
            resources,
            cities: cities.len(),
            users: resources * 3 / 2,
            exchanges: resources * 4 / 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_follow_the_seed_dataset() {
        let store = ResourceStore::with_seed().unwrap();
        let stats = CommunityStats::derive(&store);

        assert_eq!(stats.resources, 6);
        assert_eq!(stats.cities, 2); // Douala and Yaoundé
        assert_eq!(stats.users, 9);
        assert_eq!(stats.exchanges, 4);
    }

    #[test]
    fn empty_store_yields_zeroes() {
        let stats = CommunityStats::derive(&ResourceStore::new());
        assert_eq!(
            stats,
            CommunityStats {
                resources: 0,
                cities: 0,
                users: 0,
                exchanges: 0
            }
        );
    }
}

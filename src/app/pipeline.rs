//! Pure filter/sort/paginate pipeline over the listing sequence.
//!
//! The pipeline is a total function of the unfiltered listing slice and the
//! current [`Filters`] value: same inputs, same output, bit-identical
//! ordering. It never fails; filters that match nothing simply produce an
//! empty sequence, which the presentation layer renders as an empty state.
//!
//! # Stages
//!
//! Applied in this fixed order:
//!
//! 1. category filter (identity when `All`);
//! 2. status filter (identity when `All`);
//! 3. free-text search — trimmed, case-insensitive substring match against
//!    title, description, or location; a blank query passes everything;
//! 4. sort — stable, so equal keys keep their insertion order;
//! 5. pagination — the first `display_limit` elements. "Load more" only ever
//!    grows the limit; there is no offset window.

use crate::app::filters::{CategoryFilter, SortKey, StatusFilter};
use crate::domain::Listing;
use unicode_normalization::UnicodeNormalization;

/// Number of listings revealed per "load more" step, and the initial limit.
pub const PAGE_SIZE: usize = 12;

/// Snapshot of the browse filter state consumed by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    /// Selected category, defaulting to all.
    pub category: CategoryFilter,

    /// Selected status, defaulting to all.
    pub status: StatusFilter,

    /// Committed free-text query. Whitespace-only means "no filter".
    pub query: String,

    /// Active ordering.
    pub sort: SortKey,

    /// Pagination prefix length. Starts at [`PAGE_SIZE`], grows by
    /// [`PAGE_SIZE`] per load-more, resets on committed filter changes.
    pub display_limit: usize,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            status: StatusFilter::All,
            query: String::new(),
            sort: SortKey::Recency,
            display_limit: PAGE_SIZE,
        }
    }
}

/// Computes the visible listing sequence for the given filter state.
///
/// Returns clones of the matching listings in display order; the store
/// remains the exclusive owner of the canonical records.
#[must_use]
pub fn visible(listings: &[Listing], filters: &Filters) -> Vec<Listing> {
    let _span = tracing::debug_span!(
        "pipeline_visible",
        total = listings.len(),
        query_len = filters.query.len(),
        limit = filters.display_limit
    )
    .entered();

    let mut rows = matching(listings, filters);
    sort_listings(&mut rows, filters.sort);
    rows.truncate(filters.display_limit);

    tracing::debug!(visible = rows.len(), "pipeline applied");
    rows
}

/// Counts the listings surviving the filter stages, before pagination.
///
/// This is the denominator for [`has_more`] and the result count shown above
/// the listing grid.
#[must_use]
pub fn matched_count(listings: &[Listing], filters: &Filters) -> usize {
    matching(listings, filters).len()
}

/// Whether a further "load more" step would reveal additional listings.
///
/// Compares the pagination limit against the *filtered* (pre-pagination)
/// total, so the affordance disappears exactly when the visible grid already
/// shows everything that matches.
#[must_use]
pub fn has_more(listings: &[Listing], filters: &Filters) -> bool {
    filters.display_limit < matched_count(listings, filters)
}

/// Whether a listing matches a normalized (trimmed, lowercased) query in at
/// least one of title, description, or location.
#[must_use]
pub fn matches_query(listing: &Listing, normalized_query: &str) -> bool {
    listing.title.to_lowercase().contains(normalized_query)
        || listing.description.to_lowercase().contains(normalized_query)
        || listing.location.to_lowercase().contains(normalized_query)
}

fn matching(listings: &[Listing], filters: &Filters) -> Vec<Listing> {
    let query = filters.query.trim().to_lowercase();

    listings
        .iter()
        .filter(|l| filters.category.matches(l))
        .filter(|l| filters.status.matches(l))
        .filter(|l| query.is_empty() || matches_query(l, &query))
        .cloned()
        .collect()
}

fn sort_listings(rows: &mut [Listing], sort: SortKey) {
    match sort {
        SortKey::Recency => rows.sort_by_key(|l| std::cmp::Reverse(l.created_at)),
        SortKey::Popularity => rows.sort_by_key(|l| std::cmp::Reverse(l.views)),
        SortKey::Title => rows.sort_by_cached_key(|l| collation_key(&l.title)),
    }
}

/// Builds an accent-insensitive, case-insensitive collation key.
///
/// Titles are decomposed (NFKD), combining marks dropped, and the remainder
/// lowercased, so "Échange" and "echange" sort together. Full locale
/// tailoring is deliberately out of scope.
fn collation_key(title: &str) -> String {
    title
        .nfkd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, Category, Status};

    fn listing(id: &str, title: &str, created_at: i64, views: u32) -> Listing {
        Listing {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("description de {title}"),
            category: Category::Gift,
            image_url: None,
            location: "Douala, Akwa".to_string(),
            author: Author {
                name: "Marie Kouam".to_string(),
                contact: "marie@email.cm".to_string(),
                whatsapp: None,
            },
            created_at,
            expires_at: None,
            status: Status::Available,
            views,
        }
    }

    fn ids(rows: &[Listing]) -> Vec<&str> {
        rows.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn category_all_is_the_identity() {
        let mut a = listing("a", "Livres", 1, 0);
        a.category = Category::Service;
        let b = listing("b", "Vélo", 2, 0);
        let all = vec![a, b];

        let filters = Filters {
            sort: SortKey::Recency,
            ..Filters::default()
        };
        // With no other filters active, every listing survives.
        assert_eq!(matched_count(&all, &filters), all.len());
    }

    #[test]
    fn category_filter_keeps_only_matches() {
        let mut a = listing("a", "Cours de couture", 1, 0);
        a.category = Category::Service;
        let b = listing("b", "Livres scolaires", 2, 0);
        let all = vec![a, b];

        let filters = Filters {
            category: CategoryFilter::Only(Category::Service),
            ..Filters::default()
        };
        assert_eq!(ids(&visible(&all, &filters)), vec!["a"]);
    }

    #[test]
    fn status_filter_keeps_only_matches() {
        let mut a = listing("a", "Livres", 1, 0);
        a.status = Status::Reserved;
        let b = listing("b", "Vélo", 2, 0);
        let all = vec![a, b];

        let filters = Filters {
            status: StatusFilter::Only(Status::Reserved),
            ..Filters::default()
        };
        assert_eq!(ids(&visible(&all, &filters)), vec!["a"]);
    }

    #[test]
    fn search_matches_title_description_or_location() {
        let mut a = listing("a", "Livres scolaires", 1, 0);
        a.description = "collection complète".to_string();
        let mut b = listing("b", "Vélo adulte", 2, 0);
        b.location = "Yaoundé, Bastos".to_string();
        let c = listing("c", "Réparation", 3, 0);
        let all = vec![a, b, c];

        let by_title = Filters {
            query: "LIVRES".to_string(),
            ..Filters::default()
        };
        assert_eq!(ids(&visible(&all, &by_title)), vec!["a"]);

        let by_description = Filters {
            query: "complète".to_string(),
            ..Filters::default()
        };
        assert_eq!(ids(&visible(&all, &by_description)), vec!["a"]);

        let by_location = Filters {
            query: "bastos".to_string(),
            ..Filters::default()
        };
        assert_eq!(ids(&visible(&all, &by_location)), vec!["b"]);

        // Every excluded listing matches in none of the three fields.
        let none = Filters {
            query: "introuvable".to_string(),
            ..Filters::default()
        };
        assert!(visible(&all, &none).is_empty());
    }

    #[test]
    fn whitespace_only_query_is_no_filter() {
        let all = vec![listing("a", "Livres", 1, 0), listing("b", "Vélo", 2, 0)];

        let blank = Filters {
            query: "   ".to_string(),
            ..Filters::default()
        };
        let empty = Filters::default();

        assert_eq!(ids(&visible(&all, &blank)), ids(&visible(&all, &empty)));
        assert_eq!(visible(&all, &blank).len(), 2);
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let all = vec![listing("a", "Livres scolaires", 1, 0)];
        let filters = Filters {
            query: "  livres  ".to_string(),
            ..Filters::default()
        };
        assert_eq!(visible(&all, &filters).len(), 1);
    }

    #[test]
    fn sort_orderings_by_views_date_and_title() {
        // A created day 1 with 10 views, B day 3 with 2, C day 2 with 7.
        let all = vec![
            listing("A", "banane", 86_400, 10),
            listing("B", "ananas", 3 * 86_400, 2),
            listing("C", "cerise", 2 * 86_400, 7),
        ];

        let popular = Filters {
            sort: SortKey::Popularity,
            ..Filters::default()
        };
        assert_eq!(ids(&visible(&all, &popular)), vec!["A", "C", "B"]);

        let recent = Filters {
            sort: SortKey::Recency,
            ..Filters::default()
        };
        assert_eq!(ids(&visible(&all, &recent)), vec!["B", "C", "A"]);

        let title = Filters {
            sort: SortKey::Title,
            ..Filters::default()
        };
        assert_eq!(ids(&visible(&all, &title)), vec!["B", "A", "C"]);
    }

    #[test]
    fn recency_sort_is_stable_on_ties() {
        let all = vec![
            listing("a", "premier", 100, 0),
            listing("b", "deuxième", 100, 0),
            listing("c", "troisième", 100, 0),
        ];

        let filters = Filters::default();
        assert_eq!(ids(&visible(&all, &filters)), vec!["a", "b", "c"]);
    }

    #[test]
    fn popularity_sort_is_stable_on_ties() {
        let all = vec![
            listing("a", "premier", 3, 5),
            listing("b", "deuxième", 2, 5),
            listing("c", "troisième", 1, 9),
        ];

        let filters = Filters {
            sort: SortKey::Popularity,
            ..Filters::default()
        };
        assert_eq!(ids(&visible(&all, &filters)), vec!["c", "a", "b"]);
    }

    #[test]
    fn title_sort_ignores_accents_and_case() {
        let all = vec![
            listing("a", "Échange vélo", 1, 0),
            listing("b", "ananas", 2, 0),
            listing("c", "Citrons", 3, 0),
        ];

        let filters = Filters {
            sort: SortKey::Title,
            ..Filters::default()
        };
        assert_eq!(ids(&visible(&all, &filters)), vec!["b", "c", "a"]);
    }

    #[test]
    fn pagination_takes_a_prefix_and_load_more_extends_it() {
        let all: Vec<Listing> = (0..20)
            .map(|i| listing(&format!("l{i}"), &format!("annonce {i}"), i, 0))
            .collect();

        let first_page = Filters::default();
        let page_one = visible(&all, &first_page);
        assert_eq!(page_one.len(), PAGE_SIZE);

        let second_page = Filters {
            display_limit: 2 * PAGE_SIZE,
            ..Filters::default()
        };
        let page_two = visible(&all, &second_page);
        assert_eq!(page_two.len(), 20);

        // Superset-prefix extension: the first twelve rows are unchanged.
        assert_eq!(&page_two[..PAGE_SIZE], &page_one[..]);
    }

    #[test]
    fn has_more_follows_the_filtered_total() {
        let all: Vec<Listing> = (0..20)
            .map(|i| listing(&format!("l{i}"), &format!("annonce {i}"), i, 0))
            .collect();

        let filters = Filters::default();
        assert!(has_more(&all, &filters));

        let grown = Filters {
            display_limit: 2 * PAGE_SIZE,
            ..Filters::default()
        };
        assert!(!has_more(&all, &grown));

        // A narrow filter exhausts earlier than the unfiltered total would.
        let narrow = Filters {
            query: "annonce 1".to_string(),
            ..Filters::default()
        };
        // "annonce 1" plus "annonce 10".."annonce 19": eleven matches.
        assert_eq!(matched_count(&all, &narrow), 11);
        assert!(!has_more(&all, &narrow));
    }

    #[test]
    fn repeated_invocation_is_deterministic() {
        let all = vec![
            listing("a", "premier", 100, 4),
            listing("b", "deuxième", 100, 4),
        ];
        let filters = Filters {
            sort: SortKey::Popularity,
            ..Filters::default()
        };

        assert_eq!(visible(&all, &filters), visible(&all, &filters));
    }
}

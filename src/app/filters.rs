//! Filter and sort state types for the browse surface.
//!
//! These enums describe the ephemeral browse state the presentation layer
//! owns: which category and status are selected, and how matching listings
//! are ordered. The "all" states are modelled explicitly rather than as
//! magic category values, keeping the [`Category`] and [`Status`] sets closed.

use crate::domain::{Category, Listing, Status};

/// Category selection for the browse surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show listings from every category.
    #[default]
    All,
    /// Show only listings from one category.
    Only(Category),
}

impl CategoryFilter {
    /// Parses a filter slug: `"all"` or any category slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        if slug == "all" {
            Some(Self::All)
        } else {
            Category::from_slug(slug).map(Self::Only)
        }
    }

    /// Whether a listing passes this filter.
    #[must_use]
    pub fn matches(self, listing: &Listing) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => listing.category == category,
        }
    }
}

/// Status selection for the browse surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Show listings in every lifecycle state.
    #[default]
    All,
    /// Show only listings in one lifecycle state.
    Only(Status),
}

impl StatusFilter {
    /// Parses a filter slug: `"all"` or any status slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        if slug == "all" {
            Some(Self::All)
        } else {
            Status::from_slug(slug).map(Self::Only)
        }
    }

    /// Whether a listing passes this filter.
    #[must_use]
    pub fn matches(self, listing: &Listing) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => listing.status == status,
        }
    }
}

/// Ordering applied to the filtered listing sequence.
///
/// Recency and popularity sort descending with insertion order breaking ties
/// (the pipeline uses stable sorts); title sorts ascending with
/// accent-insensitive comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most recently published first.
    #[default]
    Recency,
    /// Most viewed first.
    Popularity,
    /// Alphabetical by title.
    Title,
}

impl SortKey {
    /// Parses the sort slugs used in query parameters: `recent`, `popular`, `title`.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "recent" => Some(Self::Recency),
            "popular" => Some(Self::Popularity),
            "title" => Some(Self::Title),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_slugs_parse() {
        assert_eq!(CategoryFilter::from_slug("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_slug("gift"),
            Some(CategoryFilter::Only(Category::Gift))
        );
        assert_eq!(CategoryFilter::from_slug("everything"), None);

        assert_eq!(StatusFilter::from_slug("all"), Some(StatusFilter::All));
        assert_eq!(
            StatusFilter::from_slug("reserved"),
            Some(StatusFilter::Only(Status::Reserved))
        );

        assert_eq!(SortKey::from_slug("popular"), Some(SortKey::Popularity));
        assert_eq!(SortKey::from_slug("views"), None);
    }

    #[test]
    fn defaults_match_the_browse_surface() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
        assert_eq!(StatusFilter::default(), StatusFilter::All);
        assert_eq!(SortKey::default(), SortKey::Recency);
    }
}

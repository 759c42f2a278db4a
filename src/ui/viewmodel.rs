//! View model types representing renderable browse state.
//!
//! View models are immutable snapshots computed from application state,
//! optimized for rendering by the host UI. They contain no business logic
//! and no live references into the store — only display-ready data:
//! truncated text, resolved category metadata, precomputed highlight ranges.
//!
//! The host renders them however it likes (DOM, terminal, test assertions);
//! nothing in this crate draws.

use crate::domain::Listing;
use crate::store::{CategoryIndex, ResourceStore};
use crate::ui::{format, ContactLink};

/// Characters of description shown on a card before truncation.
const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// Maximum similar listings shown under a detail view.
const SIMILAR_LIMIT: usize = 3;

/// One selectable category chip, with its live count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    /// Stable category slug (filter intent payload).
    pub slug: &'static str,

    /// Display name.
    pub label: String,

    /// Icon glyph.
    pub icon: String,

    /// Accent color hex string.
    pub color: String,

    /// Live listing count, recomputed at view-model build time.
    pub count: usize,

    /// Whether this chip is the active category filter.
    pub selected: bool,
}

/// Display information for a single listing card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCard {
    /// Listing id (payload for view/contact intents).
    pub id: String,

    /// Full title.
    pub title: String,

    /// Truncated description preview.
    pub summary: String,

    /// Resolved category icon.
    pub category_icon: String,

    /// Resolved category accent color.
    pub category_color: String,

    /// Status marker (`✓`, `⏳`, `✕`).
    pub status_glyph: String,

    /// Free-text location.
    pub location: String,

    /// Author initials for the avatar badge.
    pub author_initials: String,

    /// Relative publication label ("3h ago").
    pub posted: String,

    /// View counter.
    pub views: u32,

    /// Optional image reference.
    pub image_url: Option<String>,

    /// Character ranges of the committed query within the title.
    ///
    /// Each tuple is `(start, end)` in character indices, exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

impl ListingCard {
    /// Builds a card from a listing.
    ///
    /// `query` is the committed search text (used for title highlighting) and
    /// `now` the unix timestamp the relative labels are computed against.
    #[must_use]
    pub fn from_listing(listing: &Listing, catalog: &CategoryIndex, query: &str, now: i64) -> Self {
        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            summary: format::truncate(
                &listing.description,
                DESCRIPTION_PREVIEW_CHARS,
                format::ELLIPSIS,
            ),
            category_icon: catalog.icon_for(listing.category).to_string(),
            category_color: catalog.color_for(listing.category).to_string(),
            status_glyph: listing.status.glyph().to_string(),
            location: listing.location.clone(),
            author_initials: format::initials(&listing.author.name),
            posted: listing.time_ago(now),
            views: listing.views,
            image_url: listing.image_url.clone(),
            highlight_ranges: format::highlight_ranges(&listing.title, query),
        }
    }
}

/// Empty state message shown when no listings match the filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

impl EmptyState {
    /// The no-results state, carrying the reset-filters affordance wording.
    #[must_use]
    pub fn no_results() -> Self {
        Self {
            message: "Aucune ressource trouvée".to_string(),
            subtitle: "Essayez de modifier vos critères de recherche".to_string(),
        }
    }
}

/// Complete view model for the browse surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseViewModel {
    /// Category chips with live counts, in catalog order.
    pub chips: Vec<CategoryChip>,

    /// Visible listing cards, in display order.
    pub cards: Vec<ListingCard>,

    /// Count of listings matching the filters, before pagination.
    pub result_count: usize,

    /// Whether a load-more affordance should be shown.
    pub has_more: bool,

    /// Whether the loading skeleton is active.
    pub loading: bool,

    /// The committed search query (echoed in the search box).
    pub query: String,

    /// Present when no listings match and the skeleton is not showing.
    pub empty_state: Option<EmptyState>,
}

/// View model for a single listing's detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewModel {
    /// The full listing record.
    pub listing: Listing,

    /// Resolved category display name.
    pub category_name: String,

    /// Resolved category icon.
    pub category_icon: String,

    /// Resolved category accent color.
    pub category_color: String,

    /// Author initials for the avatar badge.
    pub author_initials: String,

    /// Author WhatsApp number with display grouping, when present.
    pub author_phone: Option<String>,

    /// Relative publication label.
    pub posted: String,

    /// Ways to reach the author, in preference order.
    ///
    /// WhatsApp and dial links are present only when the author has a
    /// WhatsApp handle; the email link always is.
    pub contact_links: Vec<ContactLink>,

    /// Similar listings: same category, different id, first three.
    pub similar: Vec<ListingCard>,
}

impl DetailViewModel {
    /// Builds the detail view model for a listing.
    ///
    /// Similar listings are taken from the store in insertion order: same
    /// category, excluding the listing itself, capped at three.
    #[must_use]
    pub fn build(
        listing: &Listing,
        store: &ResourceStore,
        catalog: &CategoryIndex,
        now: i64,
    ) -> Self {
        let similar = store
            .listings()
            .iter()
            .filter(|other| other.id != listing.id && other.category == listing.category)
            .take(SIMILAR_LIMIT)
            .map(|other| ListingCard::from_listing(other, catalog, "", now))
            .collect();

        let mut contact_links = Vec::new();
        if let Some(number) = &listing.author.whatsapp {
            contact_links.push(ContactLink::whatsapp_for(number, &listing.title));
            contact_links.push(ContactLink::Phone {
                number: number.clone(),
            });
        }
        contact_links.push(ContactLink::email_for(&listing.author.contact, &listing.title));

        Self {
            category_name: catalog.name_for(listing.category).to_string(),
            category_icon: catalog.icon_for(listing.category).to_string(),
            category_color: catalog.color_for(listing.category).to_string(),
            author_initials: format::initials(&listing.author.name),
            author_phone: listing
                .author
                .whatsapp
                .as_deref()
                .map(format::format_phone),
            posted: listing.time_ago(now),
            contact_links,
            similar,
            listing: listing.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn card_resolves_catalog_metadata_and_formats_fields() {
        let store = ResourceStore::with_seed().unwrap();
        let catalog = CategoryIndex::builtin();
        let listing = store.find_by_id("1").unwrap();

        let card = ListingCard::from_listing(listing, &catalog, "livres", listing.created_at + 120);

        assert_eq!(card.category_icon, "🎁");
        assert_eq!(card.status_glyph, "✓");
        assert_eq!(card.author_initials, "MK");
        assert_eq!(card.posted, "2m ago");
        assert_eq!(card.highlight_ranges, vec![(0, 6)]);
    }

    #[test]
    fn detail_collects_up_to_three_similar_listings() {
        let store = ResourceStore::with_seed().unwrap();
        let catalog = CategoryIndex::builtin();
        let listing = store.find_by_id("1").unwrap(); // gift

        let detail = DetailViewModel::build(listing, &store, &catalog, 0);

        assert_eq!(detail.category_name, "Dons");
        // The seed has one other gift listing.
        assert_eq!(detail.similar.len(), 1);
        assert!(detail.similar.iter().all(|c| c.id != listing.id));
        assert!(detail.similar.iter().all(|c| c.category_icon == "🎁"));
    }

    #[test]
    fn detail_formats_the_whatsapp_number() {
        let store = ResourceStore::with_seed().unwrap();
        let catalog = CategoryIndex::builtin();
        let listing = store.find_by_id("2").unwrap();
        assert_eq!(listing.category, Category::Service);

        let detail = DetailViewModel::build(listing, &store, &catalog, 0);
        assert_eq!(detail.author_phone.as_deref(), Some("+237 650 00 00 02"));
    }

    #[test]
    fn detail_contact_links_follow_the_whatsapp_handle() {
        let store = ResourceStore::with_seed().unwrap();
        let catalog = CategoryIndex::builtin();

        let with_handle =
            DetailViewModel::build(store.find_by_id("1").unwrap(), &store, &catalog, 0);
        assert_eq!(with_handle.contact_links.len(), 3);
        assert!(matches!(
            with_handle.contact_links[0],
            ContactLink::WhatsApp { .. }
        ));
        assert!(matches!(
            with_handle.contact_links[1],
            ContactLink::Phone { .. }
        ));

        let mut bare = store.clone();
        bare.update(
            "1",
            crate::store::ListingPatch {
                author: Some(crate::domain::Author {
                    name: "Marie Kouam".to_string(),
                    contact: "marie@email.cm".to_string(),
                    whatsapp: None,
                }),
                ..Default::default()
            },
        )
        .unwrap();

        let without_handle =
            DetailViewModel::build(bare.find_by_id("1").unwrap(), &bare, &catalog, 0);
        assert_eq!(without_handle.contact_links.len(), 1);
        assert!(matches!(
            without_handle.contact_links[0],
            ContactLink::Email { .. }
        ));
    }
}

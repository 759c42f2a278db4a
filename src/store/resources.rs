//! In-memory listing store.
//!
//! This module provides [`ResourceStore`], the exclusive owner of the listing
//! collection. The store keeps listings in insertion order, hands out read-only
//! views, and funnels every mutation through its CRUD operations so the listing
//! invariants (immutable unique ids, monotonically increasing view counters)
//! hold by construction.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) for the full sequence, O(n) for id lookup
//! - **Mutation**: O(n) worst case (id scan)
//! - **Best for**: a few hundred listings, the scale the product runs at
//!
//! There is no persistence and no index; the data set never justifies either.

use crate::domain::error::{DonLocalError, Result};
use crate::domain::{Author, Category, Listing, ListingDraft, Status};

/// Partial update applied by [`ResourceStore::update`].
///
/// Fields left as `None` are untouched. The patch deliberately has no way to
/// address `id`, `created_at`, or `views`: the first two are immutable, the
/// view counter only moves through [`ResourceStore::increment_views`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPatch {
    /// New title, if any.
    pub title: Option<String>,
    /// New description, if any.
    pub description: Option<String>,
    /// New category, if any.
    pub category: Option<Category>,
    /// New location, if any.
    pub location: Option<String>,
    /// New lifecycle status, if any.
    pub status: Option<Status>,
    /// New image reference, if any.
    pub image_url: Option<String>,
    /// New expiration timestamp, if any.
    pub expires_at: Option<i64>,
    /// New author record, if any.
    pub author: Option<Author>,
}

/// Exclusive owner of the in-memory listing collection.
///
/// Listings are kept in insertion order; the filter pipeline relies on that
/// order for its stable-sort tie-breaking. Every mutation is synchronous and
/// immediately visible to subsequent reads.
///
/// # Examples
///
/// ```
/// use donlocal::store::ResourceStore;
///
/// let store = ResourceStore::with_seed()?;
/// assert_eq!(store.len(), 6);
/// assert!(store.find_by_id("1").is_some());
/// # Ok::<(), donlocal::domain::DonLocalError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResourceStore {
    /// All listings, in insertion order.
    listings: Vec<Listing>,

    /// Next numeric id to assign. Never reused, even after removals.
    next_id: u64,
}

impl ResourceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listings: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store pre-populated with the embedded demo dataset.
    ///
    /// # Errors
    ///
    /// Returns a `Seed` error if the embedded document fails to parse, which
    /// indicates a packaging defect rather than a runtime condition.
    pub fn with_seed() -> Result<Self> {
        let listings = super::seed::seed_listings()?;
        Ok(Self::from_listings(listings))
    }

    /// Creates a store from an existing listing sequence.
    ///
    /// The id counter resumes after the highest numeric id present, so fresh
    /// ids can never collide with seeded ones.
    #[must_use]
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let next_id = listings
            .iter()
            .filter_map(|l| l.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            .saturating_add(1);

        Self { listings, next_id }
    }

    /// Returns the full, unfiltered, insertion-ordered listing sequence.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Number of listings currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the store holds no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Publishes a draft as a new listing, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDraft` if the draft fails validation.
    pub fn add(&mut self, draft: ListingDraft) -> Result<&Listing> {
        self.add_at(draft, chrono::Utc::now().timestamp())
    }

    /// Publishes a draft as a new listing with an explicit timestamp.
    ///
    /// Assigns a fresh unique id, sets `created_at = now`, zero views, and
    /// `Available` status, then appends to the end of the sequence.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDraft` if the draft fails validation.
    pub fn add_at(&mut self, draft: ListingDraft, now: i64) -> Result<&Listing> {
        let _span = tracing::debug_span!("store_add", title = %draft.title).entered();

        draft.validate(now)?;

        let id = self.next_id.to_string();
        self.next_id = self.next_id.saturating_add(1);

        let listing = Listing {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            image_url: draft.image_url,
            location: draft.location,
            author: draft.author,
            created_at: now,
            expires_at: draft.expires_at,
            status: Status::Available,
            views: 0,
        };

        tracing::debug!(id = %listing.id, category = %listing.category, "listing published");
        self.listings.push(listing);
        Ok(self.listings.last().expect("just pushed"))
    }

    /// Applies a partial update to the listing with the given id.
    ///
    /// Fields absent from the patch keep their current values.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no listing has the given id.
    pub fn update(&mut self, id: &str, patch: ListingPatch) -> Result<()> {
        let _span = tracing::debug_span!("store_update", id = %id).entered();

        let listing = self.find_mut(id)?;

        if let Some(title) = patch.title {
            listing.title = title;
        }
        if let Some(description) = patch.description {
            listing.description = description;
        }
        if let Some(category) = patch.category {
            listing.category = category;
        }
        if let Some(location) = patch.location {
            listing.location = location;
        }
        if let Some(status) = patch.status {
            listing.status = status;
        }
        if let Some(image_url) = patch.image_url {
            listing.image_url = Some(image_url);
        }
        if let Some(expires_at) = patch.expires_at {
            listing.expires_at = Some(expires_at);
        }
        if let Some(author) = patch.author {
            listing.author = author;
        }

        tracing::debug!("listing updated");
        Ok(())
    }

    /// Removes and returns the listing with the given id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no listing has the given id.
    pub fn remove(&mut self, id: &str) -> Result<Listing> {
        let _span = tracing::debug_span!("store_remove", id = %id).entered();

        let index = self
            .listings
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| DonLocalError::NotFound { id: id.to_string() })?;

        tracing::debug!("listing removed");
        Ok(self.listings.remove(index))
    }

    /// Increments the view counter of the listing with the given id.
    ///
    /// Returns the new view count. The counter saturates instead of wrapping.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no listing has the given id.
    pub fn increment_views(&mut self, id: &str) -> Result<u32> {
        let listing = self.find_mut(id)?;
        listing.views = listing.views.saturating_add(1);

        tracing::debug!(id = %id, views = listing.views, "view counted");
        Ok(listing.views)
    }

    /// Looks up a listing by id without mutating anything.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Listing> {
        self.listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| DonLocalError::NotFound { id: id.to_string() })
    }
}

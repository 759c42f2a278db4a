//! Listing domain model and operations.
//!
//! This module defines the core `Listing` type representing a published marketplace
//! announcement (a donation, a service offer, an exchange proposal, or a mutual-aid
//! request), together with the closed [`Category`] and [`Status`] enumerations and
//! the [`ListingDraft`] publish input with its validation rules.

use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Minimum trimmed title length accepted at publish time.
const MIN_TITLE_CHARS: usize = 5;

/// Minimum trimmed description length accepted at publish time.
const MIN_DESCRIPTION_CHARS: usize = 20;

/// The closed set of listing categories.
///
/// Every listing belongs to exactly one of these four categories; no other
/// values are valid anywhere in the system. The serde identifiers double as
/// the stable slugs used in seed data, catalog files, and query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Something given away for free.
    Gift,
    /// A service offered or requested.
    Service,
    /// Goods proposed for barter.
    Exchange,
    /// A request or offer of neighbourly help.
    #[serde(rename = "mutual-aid")]
    MutualAid,
}

impl Category {
    /// All categories, in catalog display order.
    pub const ALL: [Self; 4] = [Self::Gift, Self::Service, Self::Exchange, Self::MutualAid];

    /// Returns the stable slug for this category.
    #[must_use]
    pub const fn as_slug(self) -> &'static str {
        match self {
            Self::Gift => "gift",
            Self::Service => "service",
            Self::Exchange => "exchange",
            Self::MutualAid => "mutual-aid",
        }
    }

    /// Parses a category slug.
    ///
    /// Returns `None` for anything outside the closed set, including `"all"` —
    /// the "all categories" state is a filter concern, not a category.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "gift" => Some(Self::Gift),
            "service" => Some(Self::Service),
            "exchange" => Some(Self::Exchange),
            "mutual-aid" => Some(Self::MutualAid),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_slug())
    }
}

/// The closed set of listing lifecycle states.
///
/// `views` aside, this is the only listing field the browse UI exposes a
/// filter for. Transitions are unconstrained; the store accepts any update
/// within the closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The listing is open and the author can be contacted.
    Available,
    /// Someone has claimed the listing; pending handover.
    Reserved,
    /// The listing is concluded and kept for history.
    Completed,
}

impl Status {
    /// Returns the stable slug for this status.
    #[must_use]
    pub const fn as_slug(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Completed => "completed",
        }
    }

    /// Parses a status slug. Returns `None` outside the closed set.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "available" => Some(Self::Available),
            "reserved" => Some(Self::Reserved),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Returns the single-character status marker shown on listing cards.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Available => "✓",
            Self::Reserved => "⏳",
            Self::Completed => "✕",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_slug())
    }
}

/// The person behind a listing and how to reach them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name.
    pub name: String,

    /// Primary contact, an email address.
    pub contact: String,

    /// Optional WhatsApp number in international format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

/// A published marketplace listing.
///
/// Listings are owned exclusively by the resource store; every instance
/// reachable outside the store is a read-only view or a clone. Invariants
/// upheld by the store:
///
/// - `id` is unique for the store's lifetime and never changes.
/// - `views` only ever increases, through the increment operation.
/// - `category` and `status` stay within their closed enumerations (enforced
///   by the type system).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Opaque unique identifier assigned at publish time.
    pub id: String,

    /// Short headline shown on cards and in search results.
    pub title: String,

    /// Free-form body text.
    pub description: String,

    /// Category within the closed set.
    pub category: Category,

    /// Optional image reference (URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Free-text location, conventionally `"City, Neighbourhood"`.
    pub location: String,

    /// Who published the listing and how to reach them.
    pub author: Author,

    /// Unix timestamp (seconds) of publication.
    pub created_at: i64,

    /// Optional unix timestamp after which the listing is stale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,

    /// Lifecycle state.
    pub status: Status,

    /// How many times the detail view was opened. Monotonically increasing.
    pub views: u32,
}

impl Listing {
    /// Returns a human-readable string describing how long ago the listing
    /// was published, relative to `now` (unix seconds).
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago" (e.g., "5m ago")
    /// - Less than 1 day: "Xh ago" (e.g., "3h ago")
    /// - 1 day or more: "Xd ago" (e.g., "7d ago")
    #[must_use]
    pub fn time_ago(&self, now: i64) -> String {
        let diff = now - self.created_at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }

    /// Whether the listing's expiration timestamp, if any, has passed.
    #[must_use]
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|expires| expires < now)
    }
}

/// Publish input: a listing before the store assigns id, timestamp, and views.
///
/// Drafts are validated against the publish rules before a listing is created;
/// see [`ListingDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDraft {
    /// Short headline. At least 5 characters after trimming.
    pub title: String,

    /// Body text. At least 20 characters after trimming.
    pub description: String,

    /// Category within the closed set.
    pub category: Category,

    /// Free-text location. Must be non-empty.
    pub location: String,

    /// Who is publishing. Contact must look like an email address.
    pub author: Author,

    /// Optional image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Optional expiration timestamp. Must not lie in the past.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl ListingDraft {
    /// Validates the draft against the publish rules.
    ///
    /// Rules, checked in order (the first violation is reported):
    ///
    /// 1. trimmed title has at least 5 characters;
    /// 2. trimmed description has at least 20 characters;
    /// 3. trimmed location is non-empty;
    /// 4. trimmed author name is non-empty;
    /// 5. author contact contains `@`;
    /// 6. `expires_at`, when set, is not before `now`.
    ///
    /// # Errors
    ///
    /// Returns [`DonLocalError::InvalidDraft`](crate::domain::DonLocalError::InvalidDraft)
    /// naming the offending field.
    pub fn validate(&self, now: i64) -> crate::domain::Result<()> {
        use crate::domain::DonLocalError;

        if self.title.trim().chars().count() < MIN_TITLE_CHARS {
            return Err(DonLocalError::InvalidDraft(format!(
                "title must have at least {MIN_TITLE_CHARS} characters"
            )));
        }
        if self.description.trim().chars().count() < MIN_DESCRIPTION_CHARS {
            return Err(DonLocalError::InvalidDraft(format!(
                "description must have at least {MIN_DESCRIPTION_CHARS} characters"
            )));
        }
        if self.location.trim().is_empty() {
            return Err(DonLocalError::InvalidDraft(
                "location must not be empty".to_string(),
            ));
        }
        if self.author.name.trim().is_empty() {
            return Err(DonLocalError::InvalidDraft(
                "author name must not be empty".to_string(),
            ));
        }
        if !self.author.contact.contains('@') {
            return Err(DonLocalError::InvalidDraft(
                "author contact must be an email address".to_string(),
            ));
        }
        if let Some(expires) = self.expires_at {
            if expires < now {
                return Err(DonLocalError::InvalidDraft(
                    "expiration must not lie in the past".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ListingDraft {
        ListingDraft {
            title: "Livres scolaires".to_string(),
            description: "Collection complète de livres scolaires pour CP à CM2.".to_string(),
            category: Category::Gift,
            location: "Douala, Akwa".to_string(),
            author: Author {
                name: "Marie Kouam".to_string(),
                contact: "marie@email.cm".to_string(),
                whatsapp: None,
            },
            image_url: None,
            expires_at: None,
        }
    }

    #[test]
    fn category_slugs_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.as_slug()), Some(category));
        }
        assert_eq!(Category::from_slug("all"), None);
        assert_eq!(Category::from_slug("don"), None);
    }

    #[test]
    fn status_slugs_round_trip() {
        for status in [Status::Available, Status::Reserved, Status::Completed] {
            assert_eq!(Status::from_slug(status.as_slug()), Some(status));
        }
        assert_eq!(Status::from_slug("open"), None);
    }

    #[test]
    fn category_serde_uses_kebab_case_slugs() {
        let json = serde_json::to_string(&Category::MutualAid).unwrap();
        assert_eq!(json, "\"mutual-aid\"");
        let back: Category = serde_json::from_str("\"exchange\"").unwrap();
        assert_eq!(back, Category::Exchange);
    }

    #[test]
    fn time_ago_buckets() {
        let listing = Listing {
            id: "1".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            category: Category::Gift,
            image_url: None,
            location: "Douala".to_string(),
            author: draft().author,
            created_at: 1_000_000,
            expires_at: None,
            status: Status::Available,
            views: 0,
        };

        assert_eq!(listing.time_ago(1_000_030), "just now");
        assert_eq!(listing.time_ago(1_000_000 + 5 * 60), "5m ago");
        assert_eq!(listing.time_ago(1_000_000 + 3 * 3600), "3h ago");
        assert_eq!(listing.time_ago(1_000_000 + 7 * 86400), "7d ago");
    }

    #[test]
    fn expiration_is_relative_to_now() {
        let mut listing = Listing {
            id: "1".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            category: Category::Service,
            image_url: None,
            location: "Yaoundé".to_string(),
            author: draft().author,
            created_at: 100,
            expires_at: Some(200),
            status: Status::Available,
            views: 0,
        };

        assert!(!listing.is_expired(150));
        assert!(listing.is_expired(201));

        listing.expires_at = None;
        assert!(!listing.is_expired(i64::MAX));
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate(0).is_ok());
    }

    #[test]
    fn short_title_is_rejected() {
        let mut d = draft();
        d.title = "Vélo".to_string();
        let err = d.validate(0).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn short_description_is_rejected() {
        let mut d = draft();
        d.description = "trop court".to_string();
        assert!(d.validate(0).is_err());
    }

    #[test]
    fn contact_must_be_email_shaped() {
        let mut d = draft();
        d.author.contact = "650000001".to_string();
        assert!(d.validate(0).is_err());
    }

    #[test]
    fn past_expiration_is_rejected() {
        let mut d = draft();
        d.expires_at = Some(50);
        assert!(d.validate(100).is_err());
        d.expires_at = Some(150);
        assert!(d.validate(100).is_ok());
    }
}

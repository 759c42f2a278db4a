//! DonLocal core: the state and semantics of a local mutual-aid marketplace.
//!
//! This crate implements the data and interaction core of DonLocal.cm, a
//! community marketplace for donations, services, exchanges, and mutual aid:
//! - An in-memory listing store with CRUD operations and invariant enforcement
//! - A fixed category catalog with counts derived live from the store
//! - A pure filter/sort/paginate pipeline (category, status, debounced
//!   free-text search, three sort orders, prefix-only "load more")
//! - View models for the browse and detail surfaces
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host shell (web view, TUI, test harness)           │  ← Events in, actions out
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Filter pipeline
//! │  - Debounce / loading timers                        │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store Layer   │
//! │ (ui/)         │   │ (store/)      │
//! │ - View models │   │ - Listings    │
//! │ - Formatting  │   │ - Catalog     │
//! │ - Contact     │   │ - Stats       │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Listing model, category/status enumerations      │
//! │  - Draft validation, error types                    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber setup                         │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Listing, Category, Status, errors)
//! - [`store`]: Listing store, category catalog, derived statistics
//! - [`ui`]: View models, formatting helpers, contact links
//! - [`observability`]: tracing setup
//!
//! # Control flow
//!
//! One direction only, no feedback loops:
//!
//! ```text
//! user intent → Event → handle_event → state mutation → pipeline → view model
//! ```
//!
//! The host owns wall-clock timers: the handler emits
//! [`Action::StartTimer`](app::Action::StartTimer) and the host fires
//! [`Event::TimerElapsed`](app::Event::TimerElapsed) back after the delay.
//! That is the entire concurrency story — everything here is single-threaded
//! and synchronous.
//!
//! # Example
//!
//! ```rust
//! use donlocal::app::{handle_event, CategoryFilter, Event};
//! use donlocal::domain::Category;
//! use donlocal::{initialize, Config};
//!
//! let mut state = initialize(&Config::default());
//!
//! // Select the services category; the visible sequence updates immediately.
//! let (rerender, actions) = handle_event(
//!     &mut state,
//!     &Event::SelectCategory(CategoryFilter::Only(Category::Service)),
//! )?;
//! assert!(rerender);
//! assert!(!actions.is_empty()); // loading timer for the skeleton affordance
//!
//! let vm = state.browse_viewmodel(chrono::Utc::now().timestamp());
//! assert!(vm.cards.iter().all(|card| card.category_icon == "🔧"));
//! # Ok::<(), donlocal::domain::DonLocalError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Derived category counts
//!
//! Category counts are recomputed from the store on every read instead of
//! being maintained incrementally, so there is no second invariant that
//! could drift from the actual listing population.
//!
//! ## Debounce as data
//!
//! The search debounce is a generation-counted token exchange, not a timer
//! handle: rescheduling supersedes the outstanding token, and stale tokens
//! are ignored when they return. The host needs no cancellation API.
//!
//! ## Loading is cosmetic
//!
//! The loading flag is raised on filter changes and cleared by a timer to
//! drive a skeleton affordance. The data is already computed when the flag
//! goes up; nothing may gate correctness on it.

pub mod app;
pub mod domain;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{handle_event, Action, AppState, CategoryFilter, Event, SortKey, StatusFilter};
pub use domain::{Author, Category, DonLocalError, Listing, ListingDraft, Result, Status};
pub use store::{CategoryIndex, CommunityStats, ListingPatch, ResourceStore};
pub use ui::{BrowseViewModel, ContactLink, DetailViewModel, ListingCard};

use std::collections::BTreeMap;

/// Startup configuration for the marketplace core.
///
/// `category` and `search` seed the initial browse filters and are typically
/// read once from the page's navigational query parameters at load time —
/// they are not kept in sync afterwards. The remaining fields come from host
/// configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Initial category filter slug (`"all"` or a category slug).
    ///
    /// Unknown slugs fall back to showing every category.
    pub category: Option<String>,

    /// Initial search text, committed without debounce.
    pub search: Option<String>,

    /// Path to a TOML file overriding category display metadata.
    ///
    /// The file must cover the four fixed category ids exactly once each;
    /// see [`store::catalog`]. Invalid files fall back to the built-ins.
    pub catalog_file: Option<String>,

    /// Tracing level for the subscriber set up by
    /// [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Optional log file path. When set, tracing output goes there with
    /// size-based rotation instead of stderr.
    pub log_file: Option<String>,
}

impl Config {
    /// Parses configuration from a string key/value map.
    ///
    /// Hosts hand over whatever they have — parsed URL query parameters,
    /// an environment map — as a `BTreeMap<String, String>`. Recognized
    /// keys: `category`, `search`, `catalog_file`, `trace_level`,
    /// `log_file`. Blank values are treated as absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use donlocal::Config;
    ///
    /// let mut params = BTreeMap::new();
    /// params.insert("category".to_string(), "gift".to_string());
    /// params.insert("search".to_string(), "livres".to_string());
    ///
    /// let config = Config::from_query_pairs(&params);
    /// assert_eq!(config.category.as_deref(), Some("gift"));
    /// assert_eq!(config.search.as_deref(), Some("livres"));
    /// ```
    #[must_use]
    pub fn from_query_pairs(params: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            category: get("category"),
            search: get("search"),
            catalog_file: get("catalog_file"),
            trace_level: get("trace_level"),
            log_file: get("log_file"),
        }
    }
}

/// Initializes application state from configuration.
///
/// Builds the seeded listing store and the category catalog (file override
/// or built-ins), then applies the seeded filters. Failures degrade
/// gracefully: a broken catalog file falls back to the built-in catalog, a
/// broken seed to an empty store — both are logged, neither aborts startup.
///
/// Seeded filters are committed immediately; the search debounce only
/// applies to interactive input.
///
/// Tracing is *not* initialized here — hosts call
/// [`observability::init_tracing`] themselves, before this, if they want it.
///
/// # Example
///
/// ```rust
/// use donlocal::{initialize, Config};
///
/// let config = Config {
///     category: Some("gift".to_string()),
///     ..Config::default()
/// };
///
/// let state = initialize(&config);
/// assert!(state.visible.iter().all(|l| l.category == donlocal::Category::Gift));
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing donlocal core");

    let catalog = config.catalog_file.as_ref().map_or_else(
        CategoryIndex::builtin,
        |path| {
            CategoryIndex::from_file(path).unwrap_or_else(|e| {
                tracing::warn!(catalog_file = %path, error = %e, "failed to load catalog file, using built-ins");
                CategoryIndex::builtin()
            })
        },
    );

    let store = ResourceStore::with_seed().unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to parse seed listings, starting empty");
        ResourceStore::new()
    });

    let mut state = AppState::new(store, catalog);

    if let Some(slug) = &config.category {
        match CategoryFilter::from_slug(slug) {
            Some(filter) => state.filters.category = filter,
            None => {
                tracing::debug!(category = %slug, "unknown seeded category, showing all");
            }
        }
    }
    if let Some(search) = &config.search {
        state.filters.query.clone_from(search);
    }
    state.apply_filters();

    tracing::debug!(
        listings = state.store.len(),
        visible = state.visible.len(),
        "core initialized"
    );
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_initialization_shows_the_seed() {
        let state = initialize(&Config::default());
        assert_eq!(state.store.len(), 6);
        assert_eq!(state.visible.len(), 6);
    }

    #[test]
    fn query_params_seed_category_and_search() {
        let mut params = BTreeMap::new();
        params.insert("category".to_string(), "service".to_string());
        params.insert("search".to_string(), "couture".to_string());

        let state = initialize(&Config::from_query_pairs(&params));

        assert_eq!(state.filters.query, "couture");
        assert_eq!(state.visible.len(), 1);
        assert_eq!(state.visible[0].id, "2");
        assert!(!state.loading, "seeding must not fake a loading phase");
    }

    #[test]
    fn unknown_seeded_category_falls_back_to_all() {
        let mut params = BTreeMap::new();
        params.insert("category".to_string(), "furniture".to_string());

        let state = initialize(&Config::from_query_pairs(&params));
        assert_eq!(state.filters.category, CategoryFilter::All);
        assert_eq!(state.visible.len(), 6);
    }

    #[test]
    fn blank_query_params_are_ignored() {
        let mut params = BTreeMap::new();
        params.insert("search".to_string(), "   ".to_string());

        let config = Config::from_query_pairs(&params);
        assert!(config.search.is_none());
    }

    #[test]
    fn missing_catalog_file_degrades_to_builtins() {
        let config = Config {
            catalog_file: Some("/nonexistent/catalog.toml".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);
        assert_eq!(state.catalog.entries().len(), 4);
    }
}

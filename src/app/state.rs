//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! marketplace core: the resource store, the category catalog, the browse
//! filter state, the debounce/loading timer slots, and the cached visible
//! listing sequence. It is owned by the composition root and passed by
//! reference — there is no global store and no ambient access.
//!
//! # State Components
//!
//! - **Store**: exclusive owner of all listings
//! - **Catalog**: fixed category metadata, counts derived per read
//! - **Filters**: category/status/query/sort/limit browse state
//! - **Visible**: cached pipeline output, recomputed on state changes
//! - **Timers**: generation-counted slots for search debounce and the
//!   loading affordance
//!
//! View models are computed on demand from state snapshots; recomputation is
//! synchronous and deterministic.

use crate::app::filters::CategoryFilter;
use crate::app::pipeline::{self, Filters, PAGE_SIZE};
use crate::app::timer::{TimerKind, TimerSlot, TimerToken, LOADING_DELAY_MS};
use crate::app::Action;
use crate::domain::Listing;
use crate::store::{CategoryIndex, ResourceStore};
use crate::ui::viewmodel::{BrowseViewModel, CategoryChip, DetailViewModel, EmptyState, ListingCard};

/// Central application state container.
///
/// Mutated by the event handler in response to user intents and timer
/// expirations. The cached `visible` sequence always reflects the current
/// store contents and filter state; every mutation path ends in
/// [`apply_filters`](Self::apply_filters).
#[derive(Debug, Clone)]
pub struct AppState {
    /// Exclusive owner of the listing collection.
    pub store: ResourceStore,

    /// Fixed category catalog.
    pub catalog: CategoryIndex,

    /// Current browse filter state.
    pub filters: Filters,

    /// Uncommitted search text, waiting out the debounce window.
    pub pending_query: Option<String>,

    /// Whether the loading skeleton is showing. Cosmetic only.
    pub loading: bool,

    /// Cached pipeline output for the current state.
    pub visible: Vec<Listing>,

    /// Count of listings matching the filters, before pagination.
    matched: usize,

    /// Debounce slot for search input.
    search_timer: TimerSlot,

    /// Slot for the loading-skeleton clear.
    loading_timer: TimerSlot,
}

impl AppState {
    /// Creates application state over a store and catalog.
    ///
    /// The visible sequence is computed immediately from the default filters.
    #[must_use]
    pub fn new(store: ResourceStore, catalog: CategoryIndex) -> Self {
        let mut state = Self {
            store,
            catalog,
            filters: Filters::default(),
            pending_query: None,
            loading: false,
            visible: vec![],
            matched: 0,
            search_timer: TimerSlot::new(TimerKind::Search),
            loading_timer: TimerSlot::new(TimerKind::Loading),
        };
        state.apply_filters();
        state
    }

    /// Recomputes the visible sequence from the store and current filters.
    ///
    /// Pure recomputation: no timers, no limit reset, no loading flag. The
    /// intent paths that need those wrap this call.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            total = self.store.len(),
            query_len = self.filters.query.len(),
            limit = self.filters.display_limit
        )
        .entered();

        self.visible = pipeline::visible(self.store.listings(), &self.filters);
        self.matched = pipeline::matched_count(self.store.listings(), &self.filters);

        tracing::debug!(
            visible = self.visible.len(),
            matched = self.matched,
            "filters applied"
        );
    }

    /// Whether a load-more step would reveal additional listings.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.filters.display_limit < self.matched
    }

    /// Count of listings matching the filters, before pagination.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched
    }

    /// Commits a filter change: resets the page limit, recomputes, and starts
    /// the loading affordance.
    ///
    /// Returns the timer action the host must execute.
    pub(crate) fn commit_filter_change(&mut self) -> Action {
        self.filters.display_limit = PAGE_SIZE;
        self.apply_filters();
        self.begin_loading()
    }

    /// Grows the page limit by one page and recomputes.
    pub(crate) fn grow_page(&mut self) -> Action {
        self.filters.display_limit += PAGE_SIZE;
        self.apply_filters();
        self.begin_loading()
    }

    /// Restores the five filter defaults and recomputes.
    ///
    /// Any pending debounced query is discarded; its timer token goes stale.
    pub(crate) fn reset_filters(&mut self) -> Action {
        self.filters = Filters::default();
        self.pending_query = None;
        self.search_timer.cancel();
        self.apply_filters();
        self.begin_loading()
    }

    /// Arms the search debounce and returns the token to schedule.
    pub(crate) fn arm_search_debounce(&mut self) -> TimerToken {
        self.search_timer.schedule()
    }

    /// Checks a search-debounce token against the current generation.
    pub(crate) fn search_token_current(&mut self, token: TimerToken) -> bool {
        self.search_timer.accepts(token)
    }

    /// Checks a loading token against the current generation.
    pub(crate) fn loading_token_current(&mut self, token: TimerToken) -> bool {
        self.loading_timer.accepts(token)
    }

    /// Raises the loading skeleton and arms its clear timer.
    ///
    /// The underlying data is already available when this runs; the delay is
    /// a perceived-latency affordance only.
    fn begin_loading(&mut self) -> Action {
        self.loading = true;
        Action::StartTimer {
            token: self.loading_timer.schedule(),
            delay_ms: LOADING_DELAY_MS,
        }
    }

    /// Computes the browse view model for the current state.
    ///
    /// `now` is the unix timestamp relative labels are computed against.
    #[must_use]
    pub fn browse_viewmodel(&self, now: i64) -> BrowseViewModel {
        let chips = self
            .catalog
            .with_counts(&self.store)
            .into_iter()
            .map(|entry| CategoryChip {
                slug: entry.meta.id.as_slug(),
                selected: self.filters.category == CategoryFilter::Only(entry.meta.id),
                label: entry.meta.name,
                icon: entry.meta.icon,
                color: entry.meta.color,
                count: entry.count,
            })
            .collect();

        let query = self.filters.query.trim();
        let cards: Vec<ListingCard> = self
            .visible
            .iter()
            .map(|listing| ListingCard::from_listing(listing, &self.catalog, query, now))
            .collect();

        let empty_state = (cards.is_empty() && !self.loading).then(EmptyState::no_results);

        BrowseViewModel {
            chips,
            result_count: self.matched,
            has_more: self.has_more(),
            loading: self.loading,
            query: self.filters.query.clone(),
            empty_state,
            cards,
        }
    }

    /// Computes the detail view model for a listing, if it exists.
    #[must_use]
    pub fn detail_viewmodel(&self, id: &str, now: i64) -> Option<DetailViewModel> {
        self.store
            .find_by_id(id)
            .map(|listing| DetailViewModel::build(listing, &self.store, &self.catalog, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filters::{SortKey, StatusFilter};

    fn state() -> AppState {
        AppState::new(
            ResourceStore::with_seed().unwrap(),
            CategoryIndex::builtin(),
        )
    }

    #[test]
    fn new_state_shows_everything_newest_first() {
        let state = state();

        assert_eq!(state.visible.len(), 6);
        assert_eq!(state.visible[0].id, "4"); // most recent seed listing
        assert!(!state.has_more());
        assert!(!state.loading);
    }

    #[test]
    fn reset_restores_the_five_defaults() {
        let mut state = state();
        state.filters.category = CategoryFilter::from_slug("gift").unwrap();
        state.filters.status = StatusFilter::from_slug("reserved").unwrap();
        state.filters.query = "vélo".to_string();
        state.filters.sort = SortKey::Title;
        state.filters.display_limit = 48;
        state.pending_query = Some("vél".to_string());

        state.reset_filters();

        assert_eq!(state.filters, Filters::default());
        assert_eq!(state.filters.display_limit, PAGE_SIZE);
        assert!(state.pending_query.is_none());
    }

    #[test]
    fn browse_viewmodel_reports_counts_and_chips() {
        let mut state = state();
        state.filters.category = CategoryFilter::from_slug("service").unwrap();
        state.apply_filters();

        let vm = state.browse_viewmodel(0);

        assert_eq!(vm.cards.len(), 2);
        assert_eq!(vm.result_count, 2);
        assert!(vm.empty_state.is_none());

        let service_chip = vm.chips.iter().find(|c| c.slug == "service").unwrap();
        assert!(service_chip.selected);
        assert_eq!(service_chip.count, 2);
        assert!(vm.chips.iter().filter(|c| c.selected).count() == 1);
    }

    #[test]
    fn empty_results_surface_the_empty_state_unless_loading() {
        let mut state = state();
        state.filters.query = "introuvable".to_string();
        state.apply_filters();

        assert!(state.browse_viewmodel(0).empty_state.is_some());

        state.loading = true;
        assert!(state.browse_viewmodel(0).empty_state.is_none());
    }

    #[test]
    fn detail_viewmodel_is_none_for_absent_ids() {
        let state = state();
        assert!(state.detail_viewmodel("999", 0).is_none());
        assert!(state.detail_viewmodel("1", 0).is_some());
    }
}

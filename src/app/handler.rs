//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user intents
//! and timer expirations, translating them into state changes and action
//! sequences. It is the primary control-flow coordinator of the crate.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//!
//! 1. Intents arrive from the host as [`Event`] values
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via [`AppState`] methods
//! 4. Actions are collected and returned for the host to execute
//!
//! # Debounce contract
//!
//! Free-text search is the only debounced intent: `QueryInput` stores the
//! pending text and arms a 500 ms timer whose token supersedes any earlier
//! one. The query is committed — limit reset, pipeline recomputed, loading
//! raised — only when the *current* token's `TimerElapsed` arrives.
//! Category, status, and sort changes recompute immediately.

use crate::app::timer::{TimerKind, TimerToken, SEARCH_DEBOUNCE_MS};
use crate::app::{Action, AppState, CategoryFilter, SortKey, StatusFilter};
use crate::domain::error::Result;
use crate::domain::ListingDraft;
use crate::ui::ContactLink;

/// User intents and timer expirations processed by the handler.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. Processing is sequential and deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Selects a category chip (or "all").
    SelectCategory(CategoryFilter),

    /// Selects a status from the status dropdown (or "all").
    SetStatus(StatusFilter),

    /// Selects a sort order.
    SetSort(SortKey),

    /// Search box text changed. Debounced; see the module docs.
    QueryInput(String),

    /// Requests the next page of results.
    LoadMore,

    /// Restores the default category, status, query, sort, and page limit.
    ResetFilters,

    /// Opens a listing's detail page, counting the view.
    OpenListing {
        /// Target listing id.
        id: String,
    },

    /// Asks to contact a listing's author.
    ContactAuthor {
        /// Target listing id.
        id: String,
    },

    /// Submits the publish form.
    SubmitListing(ListingDraft),

    /// Withdraws (deletes) a listing.
    WithdrawListing {
        /// Target listing id.
        id: String,
    },

    /// A host timer armed via [`Action::StartTimer`] expired.
    TimerElapsed(TimerToken),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)` — whether the host should re-render, and the
/// side effects to execute in order. Events that change nothing observable
/// (a stale timer token, a contact intent for a vanished listing) return
/// `(false, [])`.
///
/// # Errors
///
/// Store mutation failures propagate: publishing an invalid draft returns
/// `InvalidDraft`, withdrawing an absent listing returns `NotFound`. Filter
/// and pagination intents never fail.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::SelectCategory(filter) => {
            tracing::debug!(category = ?filter, "category selected");
            state.filters.category = *filter;
            let timer = state.commit_filter_change();
            Ok((true, vec![timer]))
        }
        Event::SetStatus(filter) => {
            state.filters.status = *filter;
            let timer = state.commit_filter_change();
            Ok((true, vec![timer]))
        }
        Event::SetSort(sort) => {
            state.filters.sort = *sort;
            let timer = state.commit_filter_change();
            Ok((true, vec![timer]))
        }
        Event::QueryInput(text) => {
            tracing::trace!(query = %text, "search input buffered");
            state.pending_query = Some(text.clone());
            let token = state.arm_search_debounce();
            Ok((
                false,
                vec![Action::StartTimer {
                    token,
                    delay_ms: SEARCH_DEBOUNCE_MS,
                }],
            ))
        }
        Event::LoadMore => {
            let timer = state.grow_page();
            tracing::debug!(limit = state.filters.display_limit, "page limit grown");
            Ok((true, vec![timer]))
        }
        Event::ResetFilters => {
            tracing::debug!("filters reset to defaults");
            let timer = state.reset_filters();
            Ok((true, vec![timer]))
        }
        Event::OpenListing { id } => {
            if state.store.find_by_id(id).is_none() {
                tracing::warn!(id = %id, "open intent for absent listing");
                return Ok((false, vec![Action::NavigateToBrowse]));
            }

            state.store.increment_views(id)?;
            state.apply_filters();

            Ok((true, vec![Action::NavigateToListing { id: id.clone() }]))
        }
        Event::ContactAuthor { id } => {
            let Some(listing) = state.store.find_by_id(id) else {
                tracing::warn!(id = %id, "contact intent for absent listing");
                return Ok((false, vec![]));
            };

            // WhatsApp when the author has a handle, email otherwise.
            let link = match &listing.author.whatsapp {
                Some(number) => ContactLink::whatsapp_for(number, &listing.title),
                None => ContactLink::email_for(&listing.author.contact, &listing.title),
            };

            Ok((false, vec![Action::OpenContact(link)]))
        }
        Event::SubmitListing(draft) => {
            let id = state.store.add(draft.clone())?.id.clone();
            tracing::debug!(id = %id, "listing published");
            state.apply_filters();

            Ok((true, vec![Action::NavigateToListing { id }]))
        }
        Event::WithdrawListing { id } => {
            state.store.remove(id)?;
            tracing::debug!(id = %id, "listing withdrawn");
            state.apply_filters();

            Ok((true, vec![Action::NavigateToBrowse]))
        }
        Event::TimerElapsed(token) => match token.kind {
            TimerKind::Search => {
                if !state.search_token_current(*token) {
                    tracing::trace!("stale search debounce ignored");
                    return Ok((false, vec![]));
                }

                let query = state.pending_query.take().unwrap_or_default();
                tracing::debug!(query = %query, "debounced query committed");
                state.filters.query = query;
                let timer = state.commit_filter_change();
                Ok((true, vec![timer]))
            }
            TimerKind::Loading => {
                if !state.loading_token_current(*token) {
                    return Ok((false, vec![]));
                }

                state.loading = false;
                Ok((true, vec![]))
            }
        },
    }
}

/// Short event label for span fields.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::SelectCategory(_) => "SelectCategory",
        Event::SetStatus(_) => "SetStatus",
        Event::SetSort(_) => "SetSort",
        Event::QueryInput(_) => "QueryInput",
        Event::LoadMore => "LoadMore",
        Event::ResetFilters => "ResetFilters",
        Event::OpenListing { .. } => "OpenListing",
        Event::ContactAuthor { .. } => "ContactAuthor",
        Event::SubmitListing(_) => "SubmitListing",
        Event::WithdrawListing { .. } => "WithdrawListing",
        Event::TimerElapsed(_) => "TimerElapsed",
    }
}

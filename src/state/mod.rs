//! Page state and the async drivers that move it forward.
//!
//! Every operation is split into a synchronous `begin` that updates the state and hands out a
//! ticket, the awaited request, and a synchronous `finish` that only lands if the ticket is still
//! current. The state is never borrowed across an await, so the same drivers run against a
//! Leptos signal in the browser and a `RefCell` in tests.
use std::cell::RefCell;

use leptos::{RwSignal, SignalUpdate};

use crate::client::ReviewsApi;

pub mod browse;
pub mod expansion;
pub mod search;
pub mod submission;

pub use browse::BrowseState;
pub use expansion::{order_reviews, DetailTicket, ExpansionManager};
pub use search::{SearchController, SearchTicket, Settled};
pub use submission::{CloseOutcome, SubmissionPhase, SubmissionWorkflow, SUCCESS_DISPLAY_DELAY};

/// Somewhere a piece of state lives between the halves of an async operation.
/// `None` means the state is gone (e.g. the component was unmounted).
pub trait StateSlot<T> {
    fn with_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: 'static> StateSlot<T> for RwSignal<T> {
    fn with_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> StateSlot<T> for RefCell<T> {
    fn with_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

pub async fn search_restaurants<A, S>(api: &A, slot: &S)
where
    A: ReviewsApi,
    S: StateSlot<BrowseState>,
{
    let Some(ticket) = slot.with_state(BrowseState::begin_search) else {
        return;
    };
    let result = api.search(&ticket.query).await;
    slot.with_state(|state| state.finish_search(&ticket, result));
}

/// Card header click: collapse, reopen from cache, or fetch and open.
pub async fn toggle_restaurant<A, S>(api: &A, slot: &S, restaurant_id: &str)
where
    A: ReviewsApi,
    S: StateSlot<BrowseState>,
{
    if let Some(Some(ticket)) = slot.with_state(|state| state.toggle_expand(restaurant_id)) {
        load_reviews(api, slot, ticket).await;
    }
}

pub async fn fetch_reviews<A, S>(api: &A, slot: &S, restaurant_id: &str, force_reload: bool)
where
    A: ReviewsApi,
    S: StateSlot<BrowseState>,
{
    if let Some(Some(ticket)) = slot.with_state(|state| state.begin_detail(restaurant_id, force_reload)) {
        load_reviews(api, slot, ticket).await;
    }
}

async fn load_reviews<A, S>(api: &A, slot: &S, ticket: DetailTicket)
where
    A: ReviewsApi,
    S: StateSlot<BrowseState>,
{
    let result = api.restaurant_reviews(&ticket.restaurant_id).await;
    slot.with_state(|state| state.finish_detail(&ticket, result));
}

/// Sends the draft if it validates. `Some(true)` once the backend accepted it.
pub async fn submit_review<A, S>(api: &A, slot: &S) -> Option<bool>
where
    A: ReviewsApi,
    S: StateSlot<SubmissionWorkflow>,
{
    let submission = slot.with_state(SubmissionWorkflow::begin_submit)?.ok()?;
    let result = api.submit_review(&submission).await;
    slot.with_state(|workflow| workflow.finish_submit(result))
}

/// After the modal closed on a stored review: search again, then reload and reopen that card.
pub async fn refresh_after_submission<A, S>(api: &A, slot: &S, outcome: CloseOutcome)
where
    A: ReviewsApi,
    S: StateSlot<BrowseState>,
{
    if !outcome.submitted {
        return;
    }
    search_restaurants(api, slot).await;
    if let Some(restaurant_id) = outcome.target_id {
        fetch_reviews(api, slot, &restaurant_id, true).await;
    }
}

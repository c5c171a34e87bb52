use leptos::logging::warn;

use crate::error::ApiError;
use crate::models::{RestaurantSummary, ReviewRecord};
use crate::state::expansion::{DetailTicket, ExpansionManager};
use crate::state::search::{SearchController, SearchTicket, Settled};

const SEARCH_TAG: &str = "[SEARCH]";
const REVIEWS_TAG: &str = "[REVIEWS]";

/// Everything the search page shows apart from the review modal.
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    pub search: SearchController,
    pub expansion: ExpansionManager,
    error: Option<String>,
}

impl BrowseState {
    /// Starts a search. Open cards, cached reviews and the last error go away first so
    /// old reviews are never shown next to new summaries.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.error = None;
        self.expansion.reset();
        self.search.begin()
    }

    pub fn finish_search(
        &mut self,
        ticket: &SearchTicket,
        result: Result<Vec<RestaurantSummary>, ApiError>,
    ) {
        let settled = self.search.finish(ticket, result);
        self.settle(SEARCH_TAG, settled);
    }

    pub fn toggle_expand(&mut self, restaurant_id: &str) -> Option<DetailTicket> {
        self.expansion.toggle(restaurant_id)
    }

    pub fn begin_detail(&mut self, restaurant_id: &str, force_reload: bool) -> Option<DetailTicket> {
        self.expansion.begin_fetch(restaurant_id, force_reload)
    }

    pub fn finish_detail(&mut self, ticket: &DetailTicket, result: Result<Vec<ReviewRecord>, ApiError>) {
        let show_bain = self.search.show_bain;
        let settled = self.expansion.finish_fetch(ticket, result, show_bain);
        self.settle(REVIEWS_TAG, settled);
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.expansion.reset();
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Nothing loaded, nothing loading and nothing went wrong.
    pub fn show_empty_state(&self) -> bool {
        !self.search.is_loading() && !self.search.has_results() && self.error.is_none()
    }

    fn settle(&mut self, tag: &str, settled: Settled) {
        match settled {
            Settled::Failed(err) => self.error = Some(err.to_string()),
            Settled::Stale => warn!("{} Ignoring a response that was superseded", tag),
            Settled::Applied => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: &str) -> ReviewRecord {
        ReviewRecord {
            id: id.to_string(),
            title: None,
            rating: Some(4),
            author_name: None,
            date: None,
            provider: None,
            text: None,
        }
    }

    #[test]
    fn detail_failure_superseded_by_a_search_is_not_reported() {
        let mut state = BrowseState::default();
        let detail = state.begin_detail("r1", false).unwrap();
        state.begin_search();

        state.finish_detail(&detail, Err(ApiError::Upstream("Failed to fetch reviews".into())));

        assert_eq!(state.error(), None);
        assert!(state.expansion.reviews("r1").is_none());
    }

    #[test]
    fn older_detail_fetch_for_the_same_restaurant_is_dropped() {
        let mut state = BrowseState::default();
        let first = state.begin_detail("r1", true).unwrap();
        let second = state.begin_detail("r1", true).unwrap();

        state.finish_detail(&second, Ok(vec![review("new")]));
        state.finish_detail(&first, Ok(vec![review("old")]));

        let ids: Vec<&str> = state
            .expansion
            .reviews("r1")
            .unwrap()
            .iter()
            .map(|review| review.id.as_str())
            .collect();
        assert_eq!(ids, vec!["new"]);
        assert_eq!(state.error(), None);
    }
}

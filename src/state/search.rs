use std::collections::HashSet;

use leptos::logging::warn;

use crate::client::SearchQuery;
use crate::error::ApiError;
use crate::models::{RestaurantSummary, RestaurantType};

/// How a finished request was taken into the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    Applied,
    Failed(ApiError),
    /// A newer request (or a reset) superseded this one; its result was dropped.
    Stale,
}

/// Issued when a search starts; only the ticket of the latest search may complete it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: SearchQuery,
}

/// Search form fields and the summaries of the last completed search.
#[derive(Debug, Clone)]
pub struct SearchController {
    pub keyword: String,
    pub category: RestaurantType,
    pub show_bain: bool,
    results: Vec<RestaurantSummary>,
    loading: bool,
    generation: u64,
}

impl Default for SearchController {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            category: RestaurantType::All,
            show_bain: true,
            results: Vec::new(),
            loading: false,
            generation: 0,
        }
    }
}

impl SearchController {
    pub fn query(&self) -> SearchQuery {
        let keyword = self.keyword.trim();
        SearchQuery {
            keyword: (!keyword.is_empty()).then(|| keyword.to_string()),
            category: self.category,
            show_bain: self.show_bain,
        }
    }

    pub fn begin(&mut self) -> SearchTicket {
        self.generation += 1;
        self.loading = true;
        self.results.clear();
        SearchTicket {
            generation: self.generation,
            query: self.query(),
        }
    }

    pub fn finish(
        &mut self,
        ticket: &SearchTicket,
        result: Result<Vec<RestaurantSummary>, ApiError>,
    ) -> Settled {
        if ticket.generation != self.generation {
            return Settled::Stale;
        }
        self.loading = false;

        match result {
            Ok(results) => {
                self.results = unique_by_id(results);
                Settled::Applied
            }
            Err(err) => Settled::Failed(err),
        }
    }

    /// Back to the initial form. Any search still in flight will come back stale.
    pub fn clear(&mut self) {
        *self = Self {
            generation: self.generation + 1,
            ..Self::default()
        };
    }

    pub fn results(&self) -> &[RestaurantSummary] {
        &self.results
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn results_heading(&self) -> String {
        format!("Search Results ({})", self.results.len())
    }
}

fn unique_by_id(results: Vec<RestaurantSummary>) -> Vec<RestaurantSummary> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|restaurant| {
            let fresh = seen.insert(restaurant.id.clone());
            if !fresh {
                warn!("[SEARCH] Dropping duplicate restaurant {}", restaurant.id);
            }
            fresh
        })
        .collect()
}

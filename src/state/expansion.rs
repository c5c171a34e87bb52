use std::collections::HashMap;

use crate::error::ApiError;
use crate::models::{Provider, ReviewRecord};
use crate::state::search::Settled;

/// Issued when a restaurant's reviews start loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    pub restaurant_id: String,
    pub generation: u64,
}

/// Which card is open and the reviews fetched so far, keyed by restaurant id.
#[derive(Debug, Clone, Default)]
pub struct ExpansionManager {
    expanded: Option<String>,
    cache: HashMap<String, Vec<ReviewRecord>>,
    in_flight: HashMap<String, u64>,
    generation: u64,
}

impl ExpansionManager {
    /// Collapses an open card, opens a cached one, or asks for its reviews.
    pub fn toggle(&mut self, restaurant_id: &str) -> Option<DetailTicket> {
        if self.is_expanded(restaurant_id) {
            self.expanded = None;
            return None;
        }
        self.begin_fetch(restaurant_id, false)
    }

    /// `None` when the cache already answers (the card is opened right away).
    pub fn begin_fetch(&mut self, restaurant_id: &str, force_reload: bool) -> Option<DetailTicket> {
        if !force_reload && self.cache.contains_key(restaurant_id) {
            self.expanded = Some(restaurant_id.to_string());
            return None;
        }

        self.generation += 1;
        self.in_flight.insert(restaurant_id.to_string(), self.generation);
        Some(DetailTicket {
            restaurant_id: restaurant_id.to_string(),
            generation: self.generation,
        })
    }

    /// A success replaces the cached list whole; a failure leaves the cache alone.
    pub fn finish_fetch(
        &mut self,
        ticket: &DetailTicket,
        result: Result<Vec<ReviewRecord>, ApiError>,
        show_bain: bool,
    ) -> Settled {
        if self.in_flight.get(&ticket.restaurant_id) != Some(&ticket.generation) {
            return Settled::Stale;
        }
        self.in_flight.remove(&ticket.restaurant_id);

        match result {
            Ok(reviews) => {
                self.cache
                    .insert(ticket.restaurant_id.clone(), order_reviews(reviews, show_bain));
                self.expanded = Some(ticket.restaurant_id.clone());
                Settled::Applied
            }
            Err(err) => Settled::Failed(err),
        }
    }

    /// Forgets everything, including requests still in flight.
    pub fn reset(&mut self) {
        self.expanded = None;
        self.cache.clear();
        self.in_flight.clear();
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, restaurant_id: &str) -> bool {
        self.expanded.as_deref() == Some(restaurant_id)
    }

    pub fn is_loading(&self, restaurant_id: &str) -> bool {
        self.in_flight.contains_key(restaurant_id)
    }

    pub fn reviews(&self, restaurant_id: &str) -> Option<&[ReviewRecord]> {
        self.cache.get(restaurant_id).map(Vec::as_slice)
    }
}

/// Bain reviews first when they are shown, dropped entirely when they are not.
/// Both groups keep the order the backend returned them in.
pub fn order_reviews(reviews: Vec<ReviewRecord>, show_bain: bool) -> Vec<ReviewRecord> {
    let (bain, others): (Vec<_>, Vec<_>) = reviews
        .into_iter()
        .partition(|review| review.is_from(&Provider::Bain));

    if show_bain {
        bain.into_iter().chain(others).collect()
    } else {
        others
    }
}

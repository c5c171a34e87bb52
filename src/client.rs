/// Client for the reviews backend, shared by the browser bundle and the server.
use leptos::logging::{log, warn};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, Operation};
use crate::models::{
    ApiEnvelope, RestaurantSummary, RestaurantType, ReviewRecord, ReviewSubmission, ReviewsPayload,
};

/// Parameters of one search, rebuilt from the form every time it runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    pub category: RestaurantType,
    pub show_bain: bool,
}

impl SearchQuery {
    /// Keyword search when a keyword is present, plain listing by type otherwise.
    pub fn endpoint(&self, base_url: &str) -> String {
        match &self.keyword {
            Some(keyword) => search_ratings_url(base_url, keyword, self.category),
            None => ratings_url(base_url, self.category),
        }
    }
}

pub fn ratings_url(base_url: &str, category: RestaurantType) -> String {
    format!("{base_url}/reviews/ratings?restaurant_type={category}")
}

pub fn search_ratings_url(base_url: &str, keyword: &str, category: RestaurantType) -> String {
    format!(
        "{base_url}/reviews/search_ratings?keyword={}&restaurant_type={category}",
        urlencoding::encode(keyword)
    )
}

pub fn reviews_url(base_url: &str, restaurant_id: &str) -> String {
    format!("{base_url}/reviews/reviews/{}", urlencoding::encode(restaurant_id))
}

pub fn submit_review_url(base_url: &str) -> String {
    format!("{base_url}/reviews/submit-review")
}

/// Operations the page performs against the backend.
#[allow(async_fn_in_trait)]
pub trait ReviewsApi {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RestaurantSummary>, ApiError>;

    async fn restaurant_reviews(&self, restaurant_id: &str) -> Result<Vec<ReviewRecord>, ApiError>;

    async fn submit_review(&self, submission: &ReviewSubmission) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpReviewsApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpReviewsApi {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // The HTTP status is not inspected: the envelope's `success` flag decides.
    async fn get_envelope<T: DeserializeOwned>(&self, url: &str) -> Result<ApiEnvelope<T>, reqwest::Error> {
        self.client.get(url).send().await?.json().await
    }
}

impl ReviewsApi for HttpReviewsApi {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RestaurantSummary>, ApiError> {
        let url = query.endpoint(&self.config.backend_base_url);
        log!("[SEARCH] GET {}", url);

        let envelope = self
            .get_envelope::<Vec<RestaurantSummary>>(&url)
            .await
            .map_err(|err| {
                warn!("[SEARCH] Request to {} failed: {}", url, err);
                ApiError::transport(Operation::Search { url: url.clone() }, err)
            })?;

        envelope
            .into_data("Failed to fetch results")
            .map(Option::unwrap_or_default)
    }

    async fn restaurant_reviews(&self, restaurant_id: &str) -> Result<Vec<ReviewRecord>, ApiError> {
        let url = reviews_url(&self.config.backend_base_url, restaurant_id);
        log!("[REVIEWS] GET {}", url);

        let envelope = self
            .get_envelope::<ReviewsPayload>(&url)
            .await
            .map_err(|err| {
                warn!("[REVIEWS] Request to {} failed: {}", url, err);
                ApiError::transport(Operation::LoadReviews { url: url.clone() }, err)
            })?;

        envelope
            .into_data("Failed to fetch reviews")
            .map(|payload| payload.unwrap_or_default().reviews)
    }

    async fn submit_review(&self, submission: &ReviewSubmission) -> Result<(), ApiError> {
        let url = submit_review_url(&self.config.backend_base_url);
        log!(
            "[SUBMIT] POST {} for {} ({}/5)",
            url,
            submission.google_maps_id,
            submission.review_rating
        );

        let mut request = self.client.post(&url).form(submission);
        if let Some(token) = &self.config.submission_token {
            request = request.header(AUTHORIZATION, format!("Token {token}"));
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                warn!("[SUBMIT] Request to {} failed: {}", url, err);
                return Err(ApiError::transport(Operation::SubmitReview, err));
            }
        };
        let envelope: ApiEnvelope<serde_json::Value> = response.json().await.map_err(|err| {
            warn!("[SUBMIT] Unreadable response from {}: {}", url, err);
            ApiError::transport(Operation::SubmitReview, err)
        })?;

        envelope.into_data("Failed to submit review").map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:5000";

    #[test]
    fn blank_keyword_lists_by_type() {
        let query = SearchQuery {
            keyword: None,
            category: RestaurantType::Italian,
            show_bain: true,
        };
        assert_eq!(
            query.endpoint(BASE),
            "http://localhost:5000/reviews/ratings?restaurant_type=italian"
        );
    }

    #[test]
    fn keyword_search_carries_keyword_and_type() {
        let query = SearchQuery {
            keyword: Some("pasta".into()),
            category: RestaurantType::All,
            show_bain: true,
        };
        assert!(query.endpoint(BASE).ends_with("/reviews/search_ratings?keyword=pasta&restaurant_type=all"));
    }

    #[test]
    fn keyword_is_percent_encoded() {
        let url = search_ratings_url(BASE, "fish & chips", RestaurantType::Seafood);
        assert_eq!(
            url,
            "http://localhost:5000/reviews/search_ratings?keyword=fish%20%26%20chips&restaurant_type=seafood"
        );
    }

    #[test]
    fn detail_and_submit_urls() {
        assert_eq!(reviews_url(BASE, "abc"), "http://localhost:5000/reviews/reviews/abc");
        assert_eq!(submit_review_url(BASE), "http://localhost:5000/reviews/submit-review");
    }
}

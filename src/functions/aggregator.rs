use http::StatusCode;
use leptos::logging::{error, log};
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::AggregatorConfig;
use crate::functions::FunctionResponse;

pub const ACTOR_ID: &str = "tri_angle~restaurant-review-aggregator";
pub const ALLOWED_METHODS: &str = "PUT, GET, POST";

#[derive(Error, Debug)]
pub enum AggregatorError {
    #[error("APIFY_API_KEY is not configured")]
    MissingToken,

    #[error("actor run failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("actor run answered {status}: {body}")]
    Run { status: StatusCode, body: String },
}

/// Runs the restaurant-review-aggregator Apify actor and returns its dataset items.
#[derive(Debug, Clone)]
pub struct Aggregator {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    max_places: u32,
}

impl Aggregator {
    pub fn new(config: &AggregatorConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &AggregatorConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.api_key.clone(),
            max_places: config.max_places,
        }
    }

    pub fn run_url(&self) -> String {
        format!("{}/acts/{ACTOR_ID}/run-sync-get-dataset-items", self.base_url)
    }

    pub async fn run(&self) -> FunctionResponse {
        match self.fetch_items().await {
            Ok(items) => {
                log!("[AGGREGATOR] Actor returned {} items", items.len());
                for item in &items {
                    log!("[AGGREGATOR] {}", item);
                }
                FunctionResponse::new(StatusCode::OK, ALLOWED_METHODS, json!({ "data": items }))
            }
            Err(err) => {
                error!("[AGGREGATOR] {}", err);
                FunctionResponse::new(
                    StatusCode::BAD_REQUEST,
                    ALLOWED_METHODS,
                    json!({ "error": err.to_string() }),
                )
            }
        }
    }

    async fn fetch_items(&self) -> Result<Vec<Value>, AggregatorError> {
        let token = self.token.as_deref().ok_or(AggregatorError::MissingToken)?;

        let response = self
            .client
            .post(self.run_url())
            .query(&[("token", token)])
            .json(&json!({ "maxPlaces": self.max_places }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AggregatorError::Run { status, body });
        }

        Ok(response.json().await?)
    }
}

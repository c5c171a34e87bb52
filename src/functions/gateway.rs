use http::StatusCode;
use leptos::logging::{error, log, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::functions::FunctionResponse;

pub const API_KEY_HEADER: &str = "X-API-KEY";
pub const ALLOWED_METHODS: &str = "GET";

/// Forwards `GET`s to the upstream REST service with its API key attached.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Gateway {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(
            reqwest::Client::new(),
            config.upstream_base_url.clone(),
            config.upstream_api_key.clone(),
        )
    }

    pub fn with_client(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Upstream URL for a route template such as `/reviews/{id}`.
    pub fn resolve(&self, route: &str, id: &str) -> String {
        encode_uri(&format!("{}{}", self.base_url, route.replace("{id}", id)))
    }

    /// One attempt, no retries. Upstream errors pass through with their status and body.
    pub async fn forward(&self, route: &str, id: &str) -> FunctionResponse {
        let url = self.resolve(route, id);

        let response = match self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return transport_failure(&url, err),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(text) => serde_json::from_str(&text).unwrap_or(Value::String(text)),
            Err(err) => return transport_failure(&url, err),
        };

        if status.is_success() {
            log!("[GATEWAY] {} -> {}", url, status);
            FunctionResponse::new(StatusCode::OK, ALLOWED_METHODS, json!({ "data": body }))
        } else {
            warn!("[GATEWAY] {} answered {}", url, status);
            FunctionResponse::new(status, ALLOWED_METHODS, body)
        }
    }
}

/// Answer for a call that names no upstream route.
pub fn missing_route() -> FunctionResponse {
    FunctionResponse::new(
        StatusCode::BAD_REQUEST,
        ALLOWED_METHODS,
        json!({ "error": "Missing required query parameter: route" }),
    )
}

fn transport_failure(url: &str, err: reqwest::Error) -> FunctionResponse {
    error!("[GATEWAY] Error calling external API ({}): {:?}", url, err);
    FunctionResponse::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        ALLOWED_METHODS,
        json!({ "error": format!("Failed to fetch data from external API ({url})") }),
    )
}

/// What a browser's `encodeURI` leaves alone besides ASCII alphanumerics.
const ENCODE_URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

fn encode_uri(raw: &str) -> String {
    utf8_percent_encode(raw, ENCODE_URI).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> Gateway {
        Gateway::with_client(
            reqwest::Client::new(),
            "https://example.pythonanywhere.com/api".into(),
            "key".into(),
        )
    }

    #[test]
    fn substitutes_id_into_route() {
        assert_eq!(
            gateway().resolve("/reviews/{id}/summary", "ChIJ123"),
            "https://example.pythonanywhere.com/api/reviews/ChIJ123/summary"
        );
    }

    #[test]
    fn encodes_like_encode_uri() {
        assert_eq!(
            encode_uri("https://h/search?q=café au lait&x=1#top"),
            "https://h/search?q=caf%C3%A9%20au%20lait&x=1#top"
        );
        assert_eq!(encode_uri("/a%b"), "/a%25b");
    }

    #[test]
    fn resolved_urls_encode_ids_but_keep_structure() {
        assert_eq!(
            gateway().resolve("/reviews/{id}?lang=en", "Le Sélect [1]"),
            "https://example.pythonanywhere.com/api/reviews/Le%20S%C3%A9lect%20%5B1%5D?lang=en"
        );
    }

    #[test]
    fn missing_route_is_a_cors_enabled_bad_request() {
        let response = missing_route();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[0], ("Access-Control-Allow-Origin", "*"));
        assert_eq!(
            response.body,
            json!({ "error": "Missing required query parameter: route" })
        );
    }
}

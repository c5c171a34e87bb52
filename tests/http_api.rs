use dinereview::client::{HttpReviewsApi, ReviewsApi, SearchQuery};
use dinereview::config::ClientConfig;
use dinereview::error::ApiError;
use dinereview::models::{Provider, RestaurantType, ReviewSubmission};
use httpmock::prelude::*;
use serde_json::json;

fn api(base_url: String, submission_token: Option<&str>) -> HttpReviewsApi {
    HttpReviewsApi::new(ClientConfig {
        backend_base_url: base_url,
        submission_token: submission_token.map(str::to_string),
    })
}

fn query(keyword: Option<&str>, category: RestaurantType) -> SearchQuery {
    SearchQuery {
        keyword: keyword.map(str::to_string),
        category,
        show_bain: true,
    }
}

fn submission() -> ReviewSubmission {
    ReviewSubmission {
        google_maps_id: "r1".to_string(),
        author_name: "Sam".to_string(),
        place_name: "Canoe".to_string(),
        review_title: "Great".to_string(),
        review_text: "Quiet".to_string(),
        review_rating: 5,
    }
}

#[tokio::test]
async fn keyword_search_hits_search_ratings() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/reviews/search_ratings")
                .query_param("keyword", "pasta")
                .query_param("restaurant_type", "all");
            then.status(200).json_body(json!({
                "success": true,
                "data": [{
                    "google_maps_id": "r1",
                    "place_name": "Terroni",
                    "place_address": "57 Adelaide St E",
                    "all_ratings": { "average": 4.3, "count": 210 },
                    "bain_ratings": { "average": null, "count": 0 }
                }]
            }));
        })
        .await;

    let results = api(server.base_url(), None)
        .search(&query(Some("pasta"), RestaurantType::All))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Terroni");
    assert_eq!(results[0].all_ratings.display_average(), "4.3");
    assert_eq!(results[0].bain_ratings.display_average(), "N/A");
}

#[tokio::test]
async fn listing_without_keyword_hits_ratings() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/reviews/ratings")
                .query_param("restaurant_type", "greek");
            then.status(200).json_body(json!({ "success": true, "data": [] }));
        })
        .await;

    let results = api(server.base_url(), None)
        .search(&query(None, RestaurantType::Greek))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn unsuccessful_envelope_surfaces_its_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/reviews/ratings");
            then.status(500)
                .json_body(json!({ "success": false, "error": "Database unavailable" }));
        })
        .await;

    let err = api(server.base_url(), None)
        .search(&query(None, RestaurantType::All))
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::Upstream("Database unavailable".to_string()));
}

#[tokio::test]
async fn unsuccessful_envelope_without_message_uses_fallback() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/reviews/reviews/r1");
            then.status(200).json_body(json!({ "success": false }));
        })
        .await;

    let err = api(server.base_url(), None)
        .restaurant_reviews("r1")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to fetch reviews");
}

#[tokio::test]
async fn unreachable_backend_names_the_url() {
    let err = api("http://127.0.0.1:1".to_string(), None)
        .search(&query(None, RestaurantType::All))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "An error occurred while searching with url: http://127.0.0.1:1/reviews/ratings?restaurant_type=all"
    );
}

#[tokio::test]
async fn body_that_is_not_json_is_a_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/reviews/reviews/r1");
            then.status(502).body("<html>Bad Gateway</html>");
        })
        .await;
    let base_url = server.base_url();

    let err = api(base_url.clone(), None)
        .restaurant_reviews("r1")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }));
    assert_eq!(
        err.to_string(),
        format!("An error occurred while loading reviews with URL: {base_url}/reviews/reviews/r1")
    );
}

#[tokio::test]
async fn reviews_are_read_from_the_payload() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/reviews/reviews/r1");
            then.status(200).json_body(json!({
                "success": true,
                "data": {
                    "reviews": [
                        {
                            "id": 17,
                            "review_title": "Anniversary dinner",
                            "review_rating": 5,
                            "author_name": "Jo",
                            "review_date": "2024-11-02",
                            "provider": "Bain",
                            "review_text": "Attentive staff."
                        },
                        { "id": "g-4", "provider": "google-maps" }
                    ]
                }
            }));
        })
        .await;

    let reviews = api(server.base_url(), None)
        .restaurant_reviews("r1")
        .await
        .unwrap();

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].id, "17");
    assert_eq!(reviews[0].stars().as_deref(), Some("⭐⭐⭐⭐⭐ (5/5)"));
    assert_eq!(reviews[0].display_date().as_deref(), Some("11/2/2024"));
    assert_eq!(reviews[1].provider, Some(Provider::GoogleMaps));
    assert_eq!(reviews[1].stars(), None);
}

#[tokio::test]
async fn submission_is_form_encoded_with_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/reviews/submit-review")
                .header("authorization", "Token secret")
                .header("content-type", "application/x-www-form-urlencoded")
                .body("google_maps_id=r1&author_name=Sam&place_name=Canoe&review_title=Great&review_text=Quiet&review_rating=5");
            then.status(200).json_body(json!({ "success": true, "data": { "id": 101 } }));
        })
        .await;

    api(server.base_url(), Some("secret"))
        .submit_review(&submission())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn submission_without_token_sends_no_authorization() {
    let server = MockServer::start_async().await;
    let with_auth = server
        .mock_async(|when, then| {
            when.method(POST).path("/reviews/submit-review").header_exists("authorization");
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;
    let without_auth = server
        .mock_async(|when, then| {
            when.method(POST).path("/reviews/submit-review");
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    api(server.base_url(), None)
        .submit_review(&submission())
        .await
        .unwrap();

    assert_eq!(with_auth.hits_async().await, 0);
    assert_eq!(without_auth.hits_async().await, 1);
}

#[tokio::test]
async fn rejected_submission_reports_backend_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/reviews/submit-review");
            then.status(400)
                .json_body(json!({ "success": false, "error": "review_rating must be 1-5" }));
        })
        .await;

    let err = api(server.base_url(), Some("secret"))
        .submit_review(&submission())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "review_rating must be 1-5");
}

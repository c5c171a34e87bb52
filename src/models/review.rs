// src/models/review.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::lenient;
use crate::models::restaurant::RestaurantSummary;

pub const MAX_RATING: u8 = 5;
pub const AUTHOR_NAME_LIMIT: usize = 128;
pub const TITLE_LIMIT: usize = 255;

/// Where a review was collected from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Provider {
    GoogleMaps,
    Facebook,
    Tripadvisor,
    Bain,
    Yelp,
    Other(String),
}

impl Provider {
    pub fn as_str(&self) -> &str {
        match self {
            Provider::GoogleMaps => "google-maps",
            Provider::Facebook => "facebook",
            Provider::Tripadvisor => "tripadvisor",
            Provider::Bain => "Bain",
            Provider::Yelp => "Yelp",
            Provider::Other(name) => name,
        }
    }

    pub fn logo(&self) -> Option<&'static str> {
        match self {
            Provider::GoogleMaps => Some("/logos/google.png"),
            Provider::Facebook => Some("/logos/facebook.png"),
            Provider::Tripadvisor => Some("/logos/tripadvisor.png"),
            Provider::Bain => Some("/logos/bain.png"),
            Provider::Yelp => Some("/logos/yelp.png"),
            Provider::Other(_) => None,
        }
    }
}

impl From<String> for Provider {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "google-maps" => Provider::GoogleMaps,
            "facebook" => Provider::Facebook,
            "tripadvisor" => Provider::Tripadvisor,
            "Bain" => Provider::Bain,
            "Yelp" => Provider::Yelp,
            _ => Provider::Other(tag),
        }
    }
}

impl From<Provider> for String {
    fn from(provider: Provider) -> Self {
        match provider {
            Provider::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// A single review as returned by the reviews endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub id: String,
    #[serde(rename = "review_title", default)]
    pub title: Option<String>,
    #[serde(rename = "review_rating", default, deserialize_with = "lenient::rating_or_none")]
    pub rating: Option<u8>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(rename = "review_date", default)]
    pub date: Option<String>,
    #[serde(default)]
    pub provider: Option<Provider>,
    #[serde(rename = "review_text", default)]
    pub text: Option<String>,
}

impl ReviewRecord {
    pub fn is_from(&self, provider: &Provider) -> bool {
        self.provider.as_ref() == Some(provider)
    }

    /// `⭐` per rating point followed by `(n/5)`; `None` for unrated reviews.
    pub fn stars(&self) -> Option<String> {
        self.rating.filter(|rating| *rating > 0).map(|rating| {
            format!(
                "{} ({}/{})",
                "⭐".repeat(rating.min(MAX_RATING) as usize),
                rating,
                MAX_RATING
            )
        })
    }

    pub fn display_date(&self) -> Option<String> {
        self.date.as_deref().map(format_review_date)
    }
}

/// Renders backend timestamps as `M/D/YYYY`, leaving anything unparseable untouched.
pub fn format_review_date(raw: &str) -> String {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|t| t.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|t| t.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Form state of a review that has not been sent yet. A rating of 0 means "not chosen".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub author_name: String,
    pub title: String,
    pub text: String,
    pub rating: u8,
}

impl ReviewDraft {
    pub fn set_author_name(&mut self, value: &str) {
        self.author_name = value.chars().take(AUTHOR_NAME_LIMIT).collect();
    }

    pub fn set_title(&mut self, value: &str) {
        self.title = value.chars().take(TITLE_LIMIT).collect();
    }

    pub fn set_text(&mut self, value: &str) {
        self.text = value.to_string();
    }

    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating.min(MAX_RATING);
    }

    pub fn title_counter(&self) -> String {
        format!("{} / {} characters", self.title.chars().count(), TITLE_LIMIT)
    }

    pub fn to_submission(&self, restaurant: &RestaurantSummary) -> Result<ReviewSubmission, ApiError> {
        if self.rating == 0 {
            return Err(ApiError::Validation("Please select a rating".to_string()));
        }

        Ok(ReviewSubmission {
            google_maps_id: restaurant.id.clone(),
            author_name: self.author_name.clone(),
            place_name: restaurant.name.clone(),
            review_title: self.title.clone(),
            review_text: self.text.clone(),
            review_rating: self.rating,
        })
    }
}

/// Form-encoded body of `POST /reviews/submit-review`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReviewSubmission {
    pub google_maps_id: String,
    pub author_name: String,
    pub place_name: String,
    pub review_title: String,
    pub review_text: String,
    pub review_rating: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::restaurant::RatingSummary;
    use serde_json::json;

    fn restaurant() -> RestaurantSummary {
        RestaurantSummary {
            id: "test123".into(),
            name: "Test Restaurant".into(),
            address: "123 Test Street, Toronto".into(),
            all_ratings: RatingSummary::default(),
            bain_ratings: RatingSummary::default(),
        }
    }

    #[test]
    fn parses_review_with_numeric_id_and_unknown_provider() {
        let review: ReviewRecord = serde_json::from_value(json!({
            "id": 42,
            "review_title": "Lovely",
            "review_rating": 4,
            "author_name": "Ann",
            "review_date": "2024-03-05T18:30:00Z",
            "provider": "opentable",
            "review_text": "Quiet room"
        }))
        .unwrap();

        assert_eq!(review.id, "42");
        assert_eq!(review.provider, Some(Provider::Other("opentable".into())));
        assert_eq!(review.stars().as_deref(), Some("⭐⭐⭐⭐ (4/5)"));
        assert_eq!(review.display_date().as_deref(), Some("3/5/2024"));
    }

    #[test]
    fn sparse_review_keeps_optional_fields_empty() {
        let review: ReviewRecord =
            serde_json::from_value(json!({ "id": "r1", "provider": "Bain" })).unwrap();

        assert!(review.is_from(&Provider::Bain));
        assert_eq!(review.stars(), None);
        assert_eq!(review.title, None);
        assert_eq!(review.display_date(), None);
    }

    #[test]
    fn known_providers_have_logos() {
        assert_eq!(Provider::from("Yelp".to_string()).logo(), Some("/logos/yelp.png"));
        assert_eq!(Provider::from("google-maps".to_string()), Provider::GoogleMaps);
        assert_eq!(Provider::Other("zagat".into()).logo(), None);
        assert_eq!(String::from(Provider::Bain), "Bain");
    }

    #[test]
    fn unparseable_dates_are_shown_raw() {
        assert_eq!(format_review_date("2023-11-02"), "11/2/2023");
        assert_eq!(format_review_date("2023-11-02 09:15:00"), "11/2/2023");
        assert_eq!(format_review_date("last week"), "last week");
    }

    #[test]
    fn draft_without_rating_is_rejected() {
        let mut draft = ReviewDraft::default();
        draft.set_title("Great place!");

        let err = draft.to_submission(&restaurant()).unwrap_err();
        assert_eq!(err.to_string(), "Please select a rating");
    }

    #[test]
    fn draft_caps_field_lengths() {
        let mut draft = ReviewDraft::default();
        draft.set_author_name(&"a".repeat(200));
        draft.set_title(&"t".repeat(300));
        draft.set_rating(9);

        assert_eq!(draft.author_name.len(), AUTHOR_NAME_LIMIT);
        assert_eq!(draft.title.len(), TITLE_LIMIT);
        assert_eq!(draft.rating, MAX_RATING);
        assert_eq!(draft.title_counter(), "255 / 255 characters");
    }

    #[test]
    fn submission_carries_restaurant_identity() {
        let mut draft = ReviewDraft::default();
        draft.set_author_name("John Doe");
        draft.set_text("Amazing food and service");
        draft.set_rating(4);

        let submission = draft.to_submission(&restaurant()).unwrap();
        assert_eq!(submission.google_maps_id, "test123");
        assert_eq!(submission.place_name, "Test Restaurant");
        assert_eq!(submission.review_rating, 4);
        assert_eq!(submission.review_title, "");
    }

    #[test]
    fn float_or_null_ratings_do_not_break_the_payload() {
        let reviews: Vec<ReviewRecord> = serde_json::from_value(json!([
            { "id": 1, "review_rating": 4.0, "provider": "Yelp" },
            { "id": 2, "review_rating": null, "provider": "Bain" }
        ]))
        .unwrap();

        assert_eq!(reviews[0].stars().as_deref(), Some("⭐⭐⭐⭐ (4/5)"));
        assert_eq!(reviews[1].rating, None);
    }
}

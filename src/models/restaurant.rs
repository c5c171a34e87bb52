use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// Cuisine filter understood by the ratings endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RestaurantType {
    #[default]
    All,
    American,
    Italian,
    European,
    Mexican,
    Chinese,
    Japanese,
    Indian,
    Greek,
    Seafood,
    Pizza,
    Fusion,
}

impl RestaurantType {
    /// Every filter in the order the search form lists them.
    pub const ALL: [RestaurantType; 12] = [
        RestaurantType::All,
        RestaurantType::American,
        RestaurantType::Italian,
        RestaurantType::European,
        RestaurantType::Mexican,
        RestaurantType::Chinese,
        RestaurantType::Japanese,
        RestaurantType::Indian,
        RestaurantType::Greek,
        RestaurantType::Seafood,
        RestaurantType::Pizza,
        RestaurantType::Fusion,
    ];

    /// Tag sent as `restaurant_type` on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RestaurantType::All => "all",
            RestaurantType::American => "american",
            RestaurantType::Italian => "italian",
            RestaurantType::European => "european",
            RestaurantType::Mexican => "mexican",
            RestaurantType::Chinese => "chinese",
            RestaurantType::Japanese => "japanese",
            RestaurantType::Indian => "indian",
            RestaurantType::Greek => "greek",
            RestaurantType::Seafood => "seafood",
            RestaurantType::Pizza => "pizza",
            RestaurantType::Fusion => "fusion",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RestaurantType::All => "All Types",
            RestaurantType::American => "American",
            RestaurantType::Italian => "Italian",
            RestaurantType::European => "Other European",
            RestaurantType::Mexican => "Mexican",
            RestaurantType::Chinese => "Chinese",
            RestaurantType::Japanese => "Japanese",
            RestaurantType::Indian => "Indian",
            RestaurantType::Greek => "Greek",
            RestaurantType::Seafood => "Seafood",
            RestaurantType::Pizza => "Pizza",
            RestaurantType::Fusion => "Fusion",
        }
    }
}

impl fmt::Display for RestaurantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown restaurant type: {0}")]
pub struct UnknownRestaurantType(pub String);

impl FromStr for RestaurantType {
    type Err = UnknownRestaurantType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RestaurantType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownRestaurantType(s.to_string()))
    }
}

/// Average and number of ratings for one source of reviews.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RatingSummary {
    #[serde(default)]
    pub average: Option<f64>,
    #[serde(default, deserialize_with = "lenient::count_or_zero")]
    pub count: u32,
}

impl RatingSummary {
    /// One decimal, or `N/A` when there is no (or a zero) average.
    pub fn display_average(&self) -> String {
        match self.average {
            Some(average) if average != 0.0 => format!("{average:.1}"),
            _ => "N/A".to_string(),
        }
    }
}

/// One row of a ratings listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RestaurantSummary {
    #[serde(rename = "google_maps_id")]
    pub id: String,
    #[serde(rename = "place_name")]
    pub name: String,
    #[serde(rename = "place_address", default)]
    pub address: String,
    #[serde(default)]
    pub all_ratings: RatingSummary,
    #[serde(default)]
    pub bain_ratings: RatingSummary,
}

//! Field deserializers for backend values whose JSON type is not reliable.
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(serde_json::Number),
    Text(String),
}

fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Number(number)) => number.as_f64(),
        Some(Loose::Text(text)) => text.trim().parse().ok(),
        None => None,
    }
    .filter(|value| value.is_finite() && *value >= 0.0))
}

/// Ids arrive as either JSON strings or numbers.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(text) => text,
        Loose::Number(number) => number.to_string(),
    })
}

/// `null`, `12`, `12.0` and `"12"` all read as a count; anything else is 0.
pub fn count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose_number(deserializer)?
        .map(|value| value.round().min(f64::from(u32::MAX)) as u32)
        .unwrap_or(0))
}

/// Rating as a whole number of stars; `null` or garbage means unrated.
pub fn rating_or_none<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose_number(deserializer)?.map(|value| value.round().min(f64::from(u8::MAX)) as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize, Debug)]
    struct Row {
        #[serde(default, deserialize_with = "count_or_zero")]
        count: u32,
        #[serde(default, deserialize_with = "rating_or_none")]
        rating: Option<u8>,
    }

    fn row(value: serde_json::Value) -> Row {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn counts_accept_null_floats_and_strings() {
        assert_eq!(row(json!({ "count": null })).count, 0);
        assert_eq!(row(json!({ "count": 12.0 })).count, 12);
        assert_eq!(row(json!({ "count": "7" })).count, 7);
        assert_eq!(row(json!({ "count": -3 })).count, 0);
        assert_eq!(row(json!({})).count, 0);
    }

    #[test]
    fn ratings_accept_null_and_floats() {
        assert_eq!(row(json!({ "rating": null })).rating, None);
        assert_eq!(row(json!({ "rating": 4.0 })).rating, Some(4));
        assert_eq!(row(json!({ "rating": 3.6 })).rating, Some(4));
        assert_eq!(row(json!({ "rating": "n/a" })).rating, None);
    }
}

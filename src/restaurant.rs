//! Restaurant records as delivered by the data source

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Offering tags shown as filter chips, in display order
pub const OFFER_TAGS: [&str; 5] = ["Food", "Drinks", "Wine", "Beer", "Vouchers"];

/// Place tags shown as filter chips, in display order
///
/// "Evora" has a label in the content table but no chip.
pub const PLACE_TAGS: [&str; 5] = ["Lisboa", "Porto", "Coimbra", "Aveiro", "Leiria"];

/// Field names requested from the data source
pub const FIELDS: [&str; 8] = [
    "name",
    "address",
    "description",
    "offerings",
    "delivery",
    "phone",
    "url",
    "staff_pick",
];

/// A single restaurant
///
/// Every field may be absent in the source data. Missing strings stay `None`,
/// missing `offerings` is an empty list and missing flags are `false`.
///
/// Fields of an unexpected type never fail the record: flags take the
/// truthiness of whatever value arrived, a lone offering string becomes a
/// one-tag list, numbers in text fields become their decimal text and
/// anything else falls back to the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_tags")]
    pub offerings: Vec<String>,
    #[serde(deserialize_with = "lenient_flag")]
    pub delivery: bool,
    #[serde(deserialize_with = "lenient_flag")]
    pub staff_pick: bool,
    #[serde(deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub url: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Value::String(s) => vec![s],
        _ => Vec::new(),
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl RestaurantRecord {
    /// Record with the three fields needed for display
    pub fn new(name: &str, description: &str, url: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            url: Some(url.to_string()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    pub fn address(&self) -> Option<&str> {
        present(&self.address)
    }

    pub fn description(&self) -> Option<&str> {
        present(&self.description)
    }

    pub fn phone(&self) -> Option<&str> {
        present(&self.phone)
    }

    pub fn url(&self) -> Option<&str> {
        present(&self.url)
    }

    /// Name, description and url are all present and non-empty
    pub fn is_displayable(&self) -> bool {
        self.name().is_some() && self.description().is_some() && self.url().is_some()
    }

    /// Whether `tag` is one of the record's offerings
    pub fn offers(&self, tag: &str) -> bool {
        self.offerings.iter().any(|o| o == tag)
    }
}

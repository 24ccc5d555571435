//! Restaurant data sources
//!
//! The list is fetched once, as a complete snapshot. There is no retry: any
//! transport or API error aborts the fetch and nothing partial is returned.

use crate::config::AirtableConfig;
use crate::error::{Error, Result};
use crate::restaurant::{FIELDS, RestaurantRecord};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use tracing::{debug, info};

/// Anything that can produce the full, ordered restaurant list
pub trait RestaurantSource {
    fn fetch_restaurants(&self) -> Result<Vec<RestaurantRecord>>;
}

/// Fixed in-memory list
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub Vec<RestaurantRecord>);

impl RestaurantSource for StaticSource {
    fn fetch_restaurants(&self) -> Result<Vec<RestaurantRecord>> {
        Ok(self.0.clone())
    }
}

/// One page of a list-records response
#[derive(Debug, Deserialize)]
struct Page {
    records: Vec<PageRecord>,
    offset: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PageRecord {
    #[serde(default, deserialize_with = "fields_or_default")]
    fields: RestaurantRecord,
}

fn fields_or_default<'de, D>(deserializer: D) -> std::result::Result<RestaurantRecord, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RestaurantRecord>::deserialize(deserializer)?.unwrap_or_default())
}

/// Airtable REST source
pub struct AirtableSource {
    config: AirtableConfig,
    api_key: String,
    base_key: String,
    client: reqwest::blocking::Client,
}

impl fmt::Debug for AirtableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirtableSource")
            .field("config", &self.config)
            .field("api_key", &"<redacted>")
            .field("base_key", &self.base_key)
            .finish_non_exhaustive()
    }
}

impl AirtableSource {
    /// Create a source; both credentials must be known
    pub fn new(config: AirtableConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or(Error::MissingCredential("AIRTABLE_API_KEY"))?;
        let base_key = config
            .base_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or(Error::MissingCredential("AIRTABLE_BASE_KEY"))?;
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            config,
            api_key,
            base_key,
            client,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.base_key,
            self.config.table
        )
    }

    fn query(&self, offset: Option<&str>) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("view", self.config.view.clone()),
            ("filterByFormula", self.config.filter_formula.clone()),
            ("maxRecords", self.config.max_records.to_string()),
            ("pageSize", self.config.page_size.to_string()),
        ];
        query.extend(FIELDS.iter().map(|f| ("fields[]", f.to_string())));
        if let Some(offset) = offset {
            query.push(("offset", offset.to_string()));
        }
        query
    }

    fn fetch_page(&self, offset: Option<&str>) -> Result<Page> {
        let response = self
            .client
            .get(self.url())
            .bearer_auth(&self.api_key)
            .query(&self.query(offset))
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }
        parse_page(&body)
    }
}

impl RestaurantSource for AirtableSource {
    fn fetch_restaurants(&self) -> Result<Vec<RestaurantRecord>> {
        info!(table = %self.config.table, view = %self.config.view, "Fetching restaurants");
        collect_pages(|offset| self.fetch_page(offset))
    }
}

/// Follow `offset` cursors from the first page until one comes back without
/// a cursor, concatenating records in page order. The first failing page
/// aborts the whole walk.
fn collect_pages<F>(mut fetch_page: F) -> Result<Vec<RestaurantRecord>>
where
    F: FnMut(Option<&str>) -> Result<Page>,
{
    let mut restaurants = Vec::new();
    let mut offset: Option<String> = None;
    let mut pages = 0usize;
    loop {
        let page = fetch_page(offset.as_deref())?;
        pages += 1;
        debug!(page = pages, records = page.records.len(), "Fetched page");
        restaurants.extend(page.records.into_iter().map(|r| r.fields));
        match page.offset {
            Some(next) => offset = Some(next),
            None => break,
        }
    }

    info!(count = restaurants.len(), pages, "Fetched restaurants");
    Ok(restaurants)
}

fn parse_page(body: &str) -> Result<Page> {
    Ok(serde_json::from_str(body)?)
}

/// Build an API error, preferring Airtable's own message
fn api_error(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| match &v["error"] {
            Value::String(s) => Some(s.clone()),
            Value::Object(o) => o
                .get("message")
                .or_else(|| o.get("type"))
                .and_then(Value::as_str)
                .map(str::to_owned),
            _ => None,
        })
        .unwrap_or_else(|| body.to_string());
    Error::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> AirtableConfig {
        AirtableConfig {
            api_key: Some("keyTest".into()),
            base_key: Some("appTest".into()),
            endpoint: "https://api.airtable.com/v0/".into(),
            ..AirtableConfig::default()
        }
    }

    #[test]
    fn test_missing_credentials() {
        let err = AirtableSource::new(AirtableConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MissingCredential("AIRTABLE_API_KEY")));

        let config = AirtableConfig {
            api_key: Some("keyTest".into()),
            base_key: Some(String::new()),
            ..AirtableConfig::default()
        };
        let err = AirtableSource::new(config).unwrap_err();
        assert!(matches!(err, Error::MissingCredential("AIRTABLE_BASE_KEY")));
    }

    #[test]
    fn test_request_shape() {
        let source = AirtableSource::new(configured()).unwrap();
        assert_eq!(source.url(), "https://api.airtable.com/v0/appTest/Restaurants");

        let query = source.query(Some("itrNext"));
        assert!(query.contains(&("view", "Grid view".to_string())));
        assert!(query.contains(&("filterByFormula", "display = '1'".to_string())));
        assert!(query.contains(&("maxRecords", "999999".to_string())));
        assert_eq!(query.iter().filter(|(k, _)| *k == "fields[]").count(), FIELDS.len());
        assert_eq!(query.last(), Some(&("offset", "itrNext".to_string())));
        assert!(!source.query(None).iter().any(|(k, _)| *k == "offset"));
    }

    #[test]
    fn test_parse_page() {
        let body = r#"{
            "records": [
                {"id": "rec1", "createdTime": "2020-03-20T10:00:00.000Z",
                 "fields": {"name": "A", "description": "d", "url": "a.com",
                            "delivery": true, "offerings": ["Food", "Lisboa"]}},
                {"id": "rec2", "fields": {"name": "B"}},
                {"id": "rec3"}
            ],
            "offset": "itr2"
        }"#;
        let page = parse_page(body).unwrap();
        assert_eq!(page.offset.as_deref(), Some("itr2"));
        assert_eq!(page.records.len(), 3);

        let first = &page.records[0].fields;
        assert!(first.delivery);
        assert_eq!(first.offerings, ["Food", "Lisboa"]);
        assert_eq!(page.records[1].fields.name(), Some("B"));
        assert_eq!(page.records[2].fields, RestaurantRecord::default());
    }

    fn page(names: &[&str], offset: Option<&str>) -> Page {
        Page {
            records: names
                .iter()
                .map(|n| PageRecord { fields: RestaurantRecord::new(n, "d", "x.pt") })
                .collect(),
            offset: offset.map(str::to_owned),
        }
    }

    #[test]
    fn test_pages_follow_offsets_in_order() {
        let mut requested = Vec::new();
        let records = collect_pages(|offset| {
            requested.push(offset.map(str::to_owned));
            Ok(match offset {
                None => page(&["A", "B"], Some("itr2")),
                Some("itr2") => page(&["C"], Some("itr3")),
                _ => page(&["D"], None),
            })
        })
        .unwrap();

        let names: Vec<_> = records.iter().filter_map(|r| r.name()).collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
        assert_eq!(
            requested,
            [None, Some("itr2".to_string()), Some("itr3".to_string())]
        );
    }

    #[test]
    fn test_single_page_without_offset() {
        let mut calls = 0;
        let records = collect_pages(|_| {
            calls += 1;
            Ok(page(&["A"], None))
        })
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_failing_later_page_aborts_fetch() {
        let result = collect_pages(|offset| match offset {
            None => Ok(page(&["A", "B"], Some("itr2"))),
            Some(_) => Err(api_error(422, r#"{"error": {"type": "LIST_RECORDS_ITERATOR_NOT_AVAILABLE"}}"#)),
        });
        assert!(matches!(
            result,
            Err(Error::Api { status: 422, ref message }) if message == "LIST_RECORDS_ITERATOR_NOT_AVAILABLE"
        ));
    }

    #[test]
    fn test_bad_field_types_do_not_fail_the_page() {
        let body = r#"{
            "records": [
                {"id": "rec1", "fields": {"name": "A", "delivery": "yes", "offerings": "Food"}},
                {"id": "rec2", "fields": null},
                {"id": "rec3", "fields": {"name": 7, "staff_pick": 1}}
            ]
        }"#;
        let page = parse_page(body).unwrap();
        assert!(page.offset.is_none());
        assert!(page.records[0].fields.delivery);
        assert_eq!(page.records[0].fields.offerings, ["Food"]);
        assert_eq!(page.records[1].fields, RestaurantRecord::default());
        assert_eq!(page.records[2].fields.name(), Some("7"));
        assert!(page.records[2].fields.staff_pick);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let source = AirtableSource::new(configured()).unwrap();
        let debug = format!("{source:?}");
        assert!(!debug.contains("keyTest"));
        assert!(debug.contains("appTest"));
    }

    #[test]
    fn test_api_error_message() {
        let err = api_error(
            401,
            r#"{"error": {"type": "AUTHENTICATION_REQUIRED", "message": "Authentication required"}}"#,
        );
        assert!(matches!(err, Error::Api { status: 401, ref message } if message == "Authentication required"));

        let err = api_error(404, r#"{"error": "NOT_FOUND"}"#);
        assert!(matches!(err, Error::Api { ref message, .. } if message == "NOT_FOUND"));

        let err = api_error(502, "Bad Gateway");
        assert!(matches!(err, Error::Api { ref message, .. } if message == "Bad Gateway"));
    }

    #[test]
    fn test_static_source() {
        let source = StaticSource(vec![RestaurantRecord::new("A", "d", "a.com")]);
        assert_eq!(source.fetch_restaurants().unwrap().len(), 1);
    }
}

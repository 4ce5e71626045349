//! Overpass API query construction and wire types.
//!
//! The point-of-interest source is an Overpass-QL query POSTed as a text
//! body, scoped to the viewport's bounding box and to a fixed set of
//! community-oriented tag selectors.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;

use log::debug;
use serde::Deserialize;

use crate::config::OVERPASS_QUERY_TIMEOUT_SECS;
use crate::models::GeoBounds;

/// Tag selectors queried on every fetch cycle: `(key, value)` pairs where a
/// `None` value matches any value for the key.
pub const POI_SELECTORS: &[(&str, Option<&str>)] = &[
    ("office", Some("ngo")),
    ("amenity", Some("food_bank")),
    ("amenity", Some("social_facility")),
    ("social_facility", None),
    ("office", Some("charity")),
    ("amenity", Some("place_of_worship")),
    ("amenity", Some("school")),
];

/// One element of an Overpass response.
///
/// Coordinates are optional on the wire: `out skel qt` trailer elements and
/// non-node members arrive without them and are dropped during normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    /// OSM element id
    pub id: u64,
    /// Latitude in degrees, when present
    pub lat: Option<f64>,
    /// Longitude in degrees, when present
    pub lon: Option<f64>,
    /// OSM tags (`name`, `amenity`, `office`, `website`, ...)
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl OverpassElement {
    /// Returns the non-empty value of `key`, treating empty strings as
    /// absent.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }
}

/// Top-level Overpass response body.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    /// All elements matched by the query
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// Builds the Overpass-QL query for a viewport.
///
/// One `node[...]` clause per entry of [`POI_SELECTORS`], all scoped to the
/// same `(south,west,north,east)` bounding box.
pub fn build_query(bounds: &GeoBounds) -> String {
    let bbox = format!(
        "{},{},{},{}",
        bounds.south, bounds.west, bounds.north, bounds.east
    );

    let mut query = format!("[out:json][timeout:{OVERPASS_QUERY_TIMEOUT_SECS}];\n(\n");
    for (key, value) in POI_SELECTORS {
        match value {
            Some(value) => {
                let _ = writeln!(query, "  node[\"{key}\"=\"{value}\"]({bbox});");
            }
            None => {
                let _ = writeln!(query, "  node[\"{key}\"]({bbox});");
            }
        }
    }
    query.push_str(");\nout body;\n>;\nout skel qt;\n");
    query
}

/// HTTP client for the Overpass point-of-interest source.
///
/// One POST per fetch cycle; no retry, no pagination beyond what the source
/// returns in a single response.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: Arc<reqwest::Client>,
    endpoint: String,
}

impl OverpassClient {
    /// Creates a client against `endpoint`.
    pub fn new(client: Arc<reqwest::Client>, endpoint: impl Into<String>) -> Self {
        OverpassClient {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issues one query scoped to `bounds` and returns the raw elements.
    ///
    /// # Errors
    ///
    /// Returns the underlying `reqwest::Error` on network failure, non-2xx
    /// status, or a malformed JSON body. Callers decide how a failure
    /// degrades; this function never retries.
    pub async fn query(&self, bounds: &GeoBounds) -> Result<Vec<OverpassElement>, reqwest::Error> {
        let query = build_query(bounds);
        debug!("querying {} for bounds {:?}", self.endpoint, bounds);

        let response = self
            .client
            .post(&self.endpoint)
            .body(query)
            .send()
            .await?
            .error_for_status()?;

        let body: OverpassResponse = response.json().await?;
        debug!("overpass returned {} elements", body.elements.len());
        Ok(body.elements)
    }
}

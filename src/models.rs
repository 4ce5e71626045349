//! Core data types shared across the crate.

use serde::Serialize;

/// Rectangular south/west/north/east degree extent of a map viewport.
///
/// Produced by the map surface on every pan/zoom-end event and passed into
/// [`crate::ProximityFetcher::fetch`] as an immutable snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Southern edge in degrees latitude
    pub south: f64,
    /// Western edge in degrees longitude
    pub west: f64,
    /// Northern edge in degrees latitude
    pub north: f64,
    /// Eastern edge in degrees longitude
    pub east: f64,
}

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

/// A normalized point-of-interest record.
///
/// Every record has usable coordinates; raw source items without them are
/// dropped during normalization. The displayed list is replaced wholesale on
/// each fetch cycle, so no record identity persists across fetches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord {
    /// Unique identifier per source item
    pub id: String,
    /// Coordinates of the location
    pub position: GeoPoint,
    /// Display name (placeholder when the source lacks a name)
    pub title: String,
    /// Free-text description (synthesized from the category when absent)
    pub description: String,
    /// Category tag from the source vocabulary, or `"General"`
    pub category: String,
    /// Website URL; synthesized from the title slug, `None` when unnamed
    pub website: Option<String>,
    /// Contact phone; a fixed placeholder when the source lacks one
    pub phone: Option<String>,
    /// Contact email; synthesized from the title slug, `None` when unnamed
    pub email: Option<String>,
    /// Volunteering blurb derived from the category
    pub volunteer_info: String,
}

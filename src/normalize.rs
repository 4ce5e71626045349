//! Normalization of raw Overpass elements into [`LocationRecord`]s.
//!
//! The source data is sparse: most community locations carry a handful of
//! tags and no contact details. Missing fields are synthesized
//! deterministically so the same raw item always yields the same record —
//! descriptions and volunteering blurbs come from fixed per-category tables,
//! website and email from a sanitized slug of the name, and the phone number
//! is a fixed placeholder.

use crate::config::{DEFAULT_CATEGORY, DEFAULT_TITLE, PLACEHOLDER_PHONE};
use crate::models::{GeoPoint, LocationRecord};
use crate::overpass::OverpassElement;

/// Normalizes a batch of raw elements, dropping items without coordinates.
pub fn normalize_elements(elements: &[OverpassElement]) -> Vec<LocationRecord> {
    elements.iter().filter_map(normalize_element).collect()
}

/// Normalizes one raw element, or `None` when it lacks usable coordinates.
pub fn normalize_element(element: &OverpassElement) -> Option<LocationRecord> {
    let (lat, lon) = match (element.lat, element.lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return None,
    };

    let name = element.tag("name");
    // The description/volunteer tables key on amenity, then office. The
    // category itself additionally falls back to social_facility.
    let table_key = element.tag("amenity").or_else(|| element.tag("office"));
    let category = element
        .tag("amenity")
        .or_else(|| element.tag("office"))
        .or_else(|| element.tag("social_facility"))
        .unwrap_or(DEFAULT_CATEGORY);

    Some(LocationRecord {
        id: element.id.to_string(),
        position: GeoPoint { lat, lon },
        title: name.unwrap_or(DEFAULT_TITLE).to_string(),
        description: element
            .tag("description")
            .map(str::to_string)
            .unwrap_or_else(|| description_for(table_key).to_string()),
        category: category.to_string(),
        website: element
            .tag("website")
            .map(str::to_string)
            .or_else(|| synthesize_website(name)),
        phone: Some(
            element
                .tag("phone")
                .unwrap_or(PLACEHOLDER_PHONE)
                .to_string(),
        ),
        email: element
            .tag("email")
            .map(str::to_string)
            .or_else(|| synthesize_email(name)),
        volunteer_info: volunteer_info_for(table_key).to_string(),
    })
}

/// Fallback description per category key.
fn description_for(category: Option<&str>) -> &'static str {
    match category {
        Some("place_of_worship") => {
            "Local religious center offering community support and volunteer opportunities."
        }
        Some("school") => {
            "Educational institution with various volunteer programs and community initiatives."
        }
        Some("food_bank") => "Distribution center providing food assistance to those in need.",
        Some("ngo") => "Non-profit organization working to improve community welfare.",
        _ => "Local organization contributing to community development.",
    }
}

/// Fallback volunteering blurb per category key.
fn volunteer_info_for(category: Option<&str>) -> &'static str {
    match category {
        Some("place_of_worship") => {
            "Contact for community service opportunities and local outreach programs."
        }
        Some("school") => {
            "Volunteer opportunities include tutoring, mentoring, and after-school programs."
        }
        Some("food_bank") => "Volunteers needed for food sorting, distribution, and delivery.",
        _ => "Contact for current volunteer opportunities and ways to help.",
    }
}

/// Lowercases `name` and strips every character outside `[a-z0-9]`.
fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

fn synthesize_website(name: Option<&str>) -> Option<String> {
    name.map(|name| format!("http://www.{}.org", slug(name)))
}

fn synthesize_email(name: Option<&str>) -> Option<String> {
    name.map(|name| format!("contact@{}.org", slug(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn element(id: u64, coords: Option<(f64, f64)>, tags: &[(&str, &str)]) -> OverpassElement {
        let tags: HashMap<String, String> = tags
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        OverpassElement {
            id,
            lat: coords.map(|(lat, _)| lat),
            lon: coords.map(|(_, lon)| lon),
            tags,
        }
    }

    #[test]
    fn unnamed_school_gets_category_fallbacks_and_no_contact_links() {
        let record = normalize_element(&element(
            1,
            Some((10.0, 20.0)),
            &[("amenity", "school")],
        ))
        .expect("has coordinates");

        assert_eq!(record.id, "1");
        assert_eq!(record.position, GeoPoint { lat: 10.0, lon: 20.0 });
        assert_eq!(record.title, "Community Location");
        assert_eq!(record.category, "school");
        assert_eq!(
            record.description,
            "Educational institution with various volunteer programs and community initiatives."
        );
        assert_eq!(
            record.volunteer_info,
            "Volunteer opportunities include tutoring, mentoring, and after-school programs."
        );
        assert_eq!(record.website, None);
        assert_eq!(record.email, None);
        assert_eq!(record.phone.as_deref(), Some("+1 (555) 000-0000"));
    }

    #[test]
    fn items_without_coordinates_are_dropped() {
        assert!(normalize_element(&element(2, None, &[("name", "Hope Center")])).is_none());

        let half = OverpassElement {
            id: 3,
            lat: Some(10.0),
            lon: None,
            tags: HashMap::new(),
        };
        assert!(normalize_element(&half).is_none());
    }

    #[test]
    fn contact_fields_are_synthesized_from_the_name_slug() {
        let record = normalize_element(&element(
            4,
            Some((1.0, 2.0)),
            &[("name", "Hope Center #1"), ("office", "ngo")],
        ))
        .expect("has coordinates");

        assert_eq!(record.title, "Hope Center #1");
        assert_eq!(record.website.as_deref(), Some("http://www.hopecenter1.org"));
        assert_eq!(record.email.as_deref(), Some("contact@hopecenter1.org"));
        assert_eq!(
            record.description,
            "Non-profit organization working to improve community welfare."
        );
    }

    #[test]
    fn source_tags_win_over_synthesis() {
        let record = normalize_element(&element(
            5,
            Some((1.0, 2.0)),
            &[
                ("name", "St. Mary"),
                ("amenity", "place_of_worship"),
                ("description", "A very old church."),
                ("website", "https://stmary.example"),
                ("phone", "+31 20 123 4567"),
                ("email", "info@stmary.example"),
            ],
        ))
        .expect("has coordinates");

        assert_eq!(record.description, "A very old church.");
        assert_eq!(record.website.as_deref(), Some("https://stmary.example"));
        assert_eq!(record.phone.as_deref(), Some("+31 20 123 4567"));
        assert_eq!(record.email.as_deref(), Some("info@stmary.example"));
        // Volunteering info is always synthesized, even for tagged items.
        assert_eq!(
            record.volunteer_info,
            "Contact for community service opportunities and local outreach programs."
        );
    }

    #[test]
    fn category_falls_back_through_amenity_office_social_facility() {
        let amenity = normalize_element(&element(
            6,
            Some((0.0, 0.0)),
            &[("amenity", "food_bank"), ("office", "ngo")],
        ))
        .unwrap();
        assert_eq!(amenity.category, "food_bank");

        let office =
            normalize_element(&element(7, Some((0.0, 0.0)), &[("office", "charity")])).unwrap();
        assert_eq!(office.category, "charity");

        let facility = normalize_element(&element(
            8,
            Some((0.0, 0.0)),
            &[("social_facility", "shelter")],
        ))
        .unwrap();
        assert_eq!(facility.category, "shelter");
        // The description table ignores social_facility and uses the default.
        assert_eq!(
            facility.description,
            "Local organization contributing to community development."
        );

        let bare = normalize_element(&element(9, Some((0.0, 0.0)), &[])).unwrap();
        assert_eq!(bare.category, "General");
    }

    #[test]
    fn normalization_is_deterministic() {
        let raw = element(
            10,
            Some((52.0, 4.9)),
            &[("name", "Buurthuis De Brug"), ("amenity", "social_facility")],
        );

        let first = normalize_element(&raw).unwrap();
        let second = normalize_element(&raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn batch_normalization_keeps_only_usable_items() {
        let elements = vec![
            element(1, Some((10.0, 20.0)), &[("amenity", "school")]),
            element(2, None, &[("name", "Hope Center")]),
            element(3, Some((11.0, 21.0)), &[("office", "ngo")]),
        ];

        let records = normalize_elements(&elements);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[1].id, "3");
    }
}

//! Category filtering for the UI filter control.
//!
//! Pure predicate logic: a [`FilterSelection`] maps each record's category
//! tag to inclusion or exclusion. Evaluated fresh per query — the selection
//! and the record set vary independently, so nothing is cached.

use clap::ValueEnum;

use crate::models::LocationRecord;

/// Category tags counted as humanitarian work.
pub const HUMANITARIAN_CATEGORIES: &[&str] = &[
    "ngo",
    "charity",
    "humanitarian",
    "food_bank",
    "soup_kitchen",
    "shelter",
    "volunteer_centre",
];

/// Category tags counted as community facilities.
pub const COMMUNITY_CATEGORIES: &[&str] = &["community_centre", "social_centre", "social_facility"];

/// Category tags counted as educational institutions.
pub const EDUCATION_CATEGORIES: &[&str] = &["school", "library", "university", "college"];

/// Category tags counted as religious centers.
pub const RELIGIOUS_CATEGORIES: &[&str] = &["place_of_worship"];

/// The single active category group selected in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterSelection {
    /// Every record matches
    All,
    /// NGOs, charities, food banks, shelters and similar
    Humanitarian,
    /// Community and social centres
    Community,
    /// Schools, libraries, universities
    Education,
    /// Places of worship
    Religious,
}

/// Whether `record` is included under `selection`.
pub fn matches(record: &LocationRecord, selection: FilterSelection) -> bool {
    let groups = match selection {
        FilterSelection::All => return true,
        FilterSelection::Humanitarian => HUMANITARIAN_CATEGORIES,
        FilterSelection::Community => COMMUNITY_CATEGORIES,
        FilterSelection::Education => EDUCATION_CATEGORIES,
        FilterSelection::Religious => RELIGIOUS_CATEGORIES,
    };
    groups.contains(&record.category.as_str())
}

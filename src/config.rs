//! Configuration constants and CLI option types.
//!
//! This module defines all operational constants used throughout the crate
//! (zoom thresholds, fetch interval, endpoint, placeholder strings) plus the
//! clap-derived option types for the CLI binary.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::filter::FilterSelection;

// Globe overlay thresholds
/// Camera distance at or below which the hidden map overlay is revealed
pub const ZOOM_IN_THRESHOLD: f64 = 7.5;
/// Camera distance above which the visible map overlay is hidden
///
/// Kept slightly above `ZOOM_IN_THRESHOLD` so the overlay does not flicker
/// while the camera hovers near the transition boundary.
pub const ZOOM_OUT_THRESHOLD: f64 = 8.0;
/// Map zoom level at or below which the overlay dismisses itself
/// ("zoomed out to world view" — a second closing trigger, independent of
/// camera distance)
pub const WORLD_VIEW_MAX_ZOOM: f64 = 3.0;

// Fetch gating
/// Minimum map zoom level before a point-of-interest query is issued.
/// Below this the bounding box is huge and query volume must stay bounded.
pub const MIN_FETCH_ZOOM: f64 = 12.0;
/// Minimum map zoom level on mobile viewports.
/// Currently identical to the desktop threshold; the two constants exist
/// because product intent on differentiating them is unresolved.
pub const MIN_FETCH_ZOOM_MOBILE: f64 = 12.0;
/// Minimum elapsed time between two accepted fetches
pub const FETCH_INTERVAL: Duration = Duration::from_millis(3000);

// Overpass source
/// Default Overpass API endpoint
pub const OVERPASS_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";
/// Server-side timeout requested in the Overpass-QL header, in seconds
pub const OVERPASS_QUERY_TIMEOUT_SECS: u64 = 25;
/// Client-side HTTP timeout, matching the upstream query's own timeout
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(OVERPASS_QUERY_TIMEOUT_SECS);
/// User-Agent sent with Overpass requests (the API asks clients to identify
/// themselves)
pub const DEFAULT_USER_AGENT: &str = concat!("location_scout/", env!("CARGO_PKG_VERSION"));

// Record synthesis placeholders
/// Title used when a source item carries no name
pub const DEFAULT_TITLE: &str = "Community Location";
/// Category used when a source item carries none of the recognized tags
pub const DEFAULT_CATEGORY: &str = "General";
/// Fixed placeholder phone number for items without a phone tag
pub const PLACEHOLDER_PHONE: &str = "+1 (555) 000-0000";

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Command-line options for the one-shot viewport probe.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// All options have sensible defaults and can be overridden via command-line
/// flags.
///
/// # Examples
///
/// ```bash
/// # Query a viewport over central Amsterdam
/// location_scout 52.35 4.85 52.40 4.95
///
/// # Only religious locations, as JSON
/// location_scout 52.35 4.85 52.40 4.95 --filter religious --json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "location_scout",
    about = "Queries community points of interest for a map viewport."
)]
pub struct Opt {
    /// Southern edge of the bounding box (degrees latitude)
    #[arg(value_parser, allow_hyphen_values = true)]
    pub south: f64,

    /// Western edge of the bounding box (degrees longitude)
    #[arg(value_parser, allow_hyphen_values = true)]
    pub west: f64,

    /// Northern edge of the bounding box (degrees latitude)
    #[arg(value_parser, allow_hyphen_values = true)]
    pub north: f64,

    /// Eastern edge of the bounding box (degrees longitude)
    #[arg(value_parser, allow_hyphen_values = true)]
    pub east: f64,

    /// Map zoom level of the viewport (queries below zoom 12 return nothing)
    #[arg(long, default_value_t = 16.0)]
    pub zoom: f64,

    /// Treat the viewport as a mobile device
    #[arg(long)]
    pub mobile: bool,

    /// Category group to keep: all|humanitarian|community|education|religious
    #[arg(long, value_enum, default_value_t = FilterSelection::All)]
    pub filter: FilterSelection,

    /// Overpass API endpoint
    #[arg(long, default_value = OVERPASS_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = OVERPASS_QUERY_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Print matched records as a JSON array instead of plain text
    #[arg(long)]
    pub json: bool,
}

//! location_scout library: proximity search for an interactive globe/map
//! overlay.
//!
//! This library implements the logic behind a globe that reveals a 2D map
//! when zoomed in and populates it with nearby community locations:
//!
//! - [`ViewportGate`] turns the continuous camera-distance signal into a
//!   discrete "overlay visible / hidden" decision with hysteresis, plus a
//!   center coordinate.
//! - [`ProximityFetcher`] converts a viewport bounding box into normalized
//!   [`LocationRecord`]s, gated by a minimum zoom level and a fixed minimum
//!   interval between queries, degrading to an empty list on upstream
//!   failure.
//! - [`filter::matches`] answers which records the active category filter
//!   keeps.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use location_scout::{
//!     config, initialization::init_client, ErrorStats, GeoBounds, OverpassClient,
//!     ProximityFetcher,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = init_client(config::HTTP_TIMEOUT)?;
//! let overpass = OverpassClient::new(client, config::OVERPASS_ENDPOINT);
//! let mut fetcher = ProximityFetcher::new(overpass, Arc::new(ErrorStats::new()));
//!
//! let bounds = GeoBounds { south: 52.35, west: 4.85, north: 52.40, east: 4.95 };
//! let outcome = fetcher.fetch(&bounds, 16.0, false).await;
//! println!("{outcome:?}: {} locations", fetcher.records().len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Fetching requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling [`ProximityFetcher::fetch`] within an
//! async context. The gate and filter are synchronous and runtime-free.

#![warn(missing_docs)]

mod clock;
pub mod config;
mod error_handling;
mod fetcher;
pub mod filter;
pub mod initialization;
mod models;
mod normalize;
mod overpass;
mod viewport;

// Re-export public API
pub use clock::{Clock, ManualClock, SystemClock};
pub use error_handling::{
    update_error_stats, ErrorStats, FetchErrorType, InitializationError,
};
pub use fetcher::{FetchOutcome, ProximityFetcher};
pub use filter::FilterSelection;
pub use models::{GeoBounds, GeoPoint, LocationRecord};
pub use normalize::{normalize_element, normalize_elements};
pub use overpass::{build_query, OverpassClient, OverpassElement, OverpassResponse};
pub use viewport::{CameraState, OrbitTarget, OverlayState, ViewportGate};

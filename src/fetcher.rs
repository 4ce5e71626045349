//! Zoom-gated, rate-limited point-of-interest retrieval.
//!
//! [`ProximityFetcher`] converts a `(bounds, zoom)` viewport snapshot into a
//! normalized list of [`LocationRecord`]s. Two gates bound the query volume:
//! a minimum zoom level (below it the bounding box is huge and the result
//! list is cleared instead) and a fixed minimum interval between accepted
//! fetches (within it the request is silently dropped and the previous list
//! stays visible).
//!
//! Upstream failure never reaches the host: the list degrades to empty, the
//! error is logged and counted, and the outcome reports `SourceUnavailable`.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::{FETCH_INTERVAL, MIN_FETCH_ZOOM, MIN_FETCH_ZOOM_MOBILE};
use crate::error_handling::{update_error_stats, ErrorStats};
use crate::filter::{self, FilterSelection};
use crate::models::{GeoBounds, LocationRecord};
use crate::normalize::normalize_elements;
use crate::overpass::OverpassClient;

/// Result of one fetch cycle.
///
/// Only `Replaced` and `SourceUnavailable` touched the network; the other
/// variants are intentional no-ops of the gating logic, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The displayed list was replaced with this many fresh records.
    Replaced(usize),
    /// Zoom was below the minimum; the displayed list was cleared.
    BelowMinZoom,
    /// Too soon since the last accepted fetch; the displayed list was kept.
    RateLimited,
    /// The source failed; the displayed list was cleared and the error
    /// logged.
    SourceUnavailable,
}

/// Fetches and owns the displayed list of nearby community locations.
///
/// The clock is injectable so hosts and tests can drive the rate limiter
/// deterministically; production code uses [`SystemClock`].
///
/// Overlapping fetches are not serialized beyond the interval gate. Callers
/// that issue concurrent fetches must tolerate last-resolved-wins on the
/// displayed list.
pub struct ProximityFetcher<C: Clock = SystemClock> {
    overpass: OverpassClient,
    error_stats: Arc<ErrorStats>,
    clock: C,
    last_fetch: Instant,
    records: Vec<LocationRecord>,
}

impl ProximityFetcher<SystemClock> {
    /// Creates a fetcher using the system clock.
    pub fn new(overpass: OverpassClient, error_stats: Arc<ErrorStats>) -> Self {
        Self::with_clock(overpass, error_stats, SystemClock)
    }
}

impl<C: Clock> ProximityFetcher<C> {
    /// Creates a fetcher with an explicit clock.
    ///
    /// The rate-limit window starts at construction: a fetch issued within
    /// the interval of creation is dropped, mirroring the mount-time
    /// initialization of the interval gate.
    pub fn with_clock(overpass: OverpassClient, error_stats: Arc<ErrorStats>, clock: C) -> Self {
        let last_fetch = clock.now();
        ProximityFetcher {
            overpass,
            error_stats,
            clock,
            last_fetch,
            records: Vec::new(),
        }
    }

    /// The currently displayed records (the committed list of the last
    /// accepted fetch, or empty).
    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    /// Displayed records matching `selection`.
    pub fn matching(&self, selection: FilterSelection) -> impl Iterator<Item = &LocationRecord> {
        self.records
            .iter()
            .filter(move |record| filter::matches(record, selection))
    }

    /// Runs one fetch cycle for the viewport `bounds` at `zoom`.
    ///
    /// The minimum-zoom threshold is currently identical for mobile and
    /// desktop viewports; `is_mobile` selects between the two constants.
    ///
    /// On success the displayed list is replaced wholesale (no merging); on
    /// upstream failure it is cleared. Never returns an error and never
    /// panics.
    pub async fn fetch(&mut self, bounds: &GeoBounds, zoom: f64, is_mobile: bool) -> FetchOutcome {
        let min_zoom = if is_mobile {
            MIN_FETCH_ZOOM_MOBILE
        } else {
            MIN_FETCH_ZOOM
        };
        debug!("fetch requested at zoom {zoom} (mobile: {is_mobile})");

        if zoom < min_zoom {
            debug!("zoom {zoom} below minimum {min_zoom}, clearing locations");
            self.records.clear();
            return FetchOutcome::BelowMinZoom;
        }

        let now = self.clock.now();
        if now.duration_since(self.last_fetch) < FETCH_INTERVAL {
            debug!(
                "rate limited, keeping previous {} locations",
                self.records.len()
            );
            return FetchOutcome::RateLimited;
        }
        self.last_fetch = now;

        match self.overpass.query(bounds).await {
            Ok(elements) => {
                let records = normalize_elements(&elements);
                debug!(
                    "normalized {} of {} raw elements",
                    records.len(),
                    elements.len()
                );
                let count = records.len();
                // Whole-list replacement; records never merge across cycles.
                self.records = records;
                FetchOutcome::Replaced(count)
            }
            Err(e) => {
                warn!("failed to fetch locations from {}: {e}", self.overpass.endpoint());
                update_error_stats(&self.error_stats, &e);
                self.records.clear();
                FetchOutcome::SourceUnavailable
            }
        }
    }
}

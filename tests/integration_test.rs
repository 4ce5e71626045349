//! Integration tests for the globe-to-map overlay flow.
//!
//! These tests drive the full pipeline — camera gating, zoom-gated
//! rate-limited fetching against a mock Overpass server, normalization, and
//! category filtering — without any real network access.

use std::sync::Arc;
use std::time::Duration;

use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::json;

use location_scout::config::FETCH_INTERVAL;
use location_scout::{
    CameraState, ErrorStats, FetchOutcome, FilterSelection, GeoBounds, GeoPoint, ManualClock,
    OrbitTarget, OverpassClient, ProximityFetcher, ViewportGate,
};

const BOUNDS: GeoBounds = GeoBounds {
    south: 52.35,
    west: 4.85,
    north: 52.4,
    east: 4.95,
};

fn camera(distance: f64, x: f64, y: f64) -> CameraState {
    CameraState {
        distance,
        target: OrbitTarget { x, y, z: 0.0 },
    }
}

fn fetcher_against(
    server: &Server,
) -> (
    ProximityFetcher<Arc<ManualClock>>,
    Arc<ManualClock>,
    Arc<ErrorStats>,
) {
    let clock = Arc::new(ManualClock::new());
    let stats = Arc::new(ErrorStats::new());
    let client = Arc::new(reqwest::Client::new());
    let overpass = OverpassClient::new(client, format!("http://{}/api/interpreter", server.addr()));
    let fetcher = ProximityFetcher::with_clock(overpass, Arc::clone(&stats), Arc::clone(&clock));
    (fetcher, clock, stats)
}

fn overpass_body() -> serde_json::Value {
    json!({
        "elements": [
            {"id": 101, "lat": 52.36, "lon": 4.90,
             "tags": {"name": "Hope Center", "office": "ngo"}},
            {"id": 102, "lat": 52.37, "lon": 4.91,
             "tags": {"amenity": "place_of_worship", "name": "St. Nicholas"}},
            {"id": 103, "lat": 52.38, "lon": 4.92,
             "tags": {"amenity": "school"}},
            {"id": 104, "tags": {"name": "Skeleton Member"}}
        ]
    })
}

/// Full user journey: zoom the globe in, pan/zoom the map, fetch locations,
/// filter them, zoom back out.
#[tokio::test]
async fn globe_to_map_to_locations_flow() {
    let server = Server::run();
    server.expect(
        Expectation::matching(httptest::all_of![
            request::method_path("POST", "/api/interpreter"),
            // The query must carry the viewport's bbox in s,w,n,e order.
            request::body(matches(r#"node\["amenity"="school"\]\(52\.35,4\.85,52\.4,4\.95\)"#)),
        ])
        .respond_with(json_encoded(overpass_body())),
    );

    // Camera approaches the globe: overlay opens at the remapped target.
    let mut gate = ViewportGate::new();
    assert!(!gate.on_camera_change(&camera(9.0, 0.5, 0.25)));
    assert!(gate.on_camera_change(&camera(7.0, 0.5, 0.25)));
    assert_eq!(gate.center(), Some(GeoPoint { lat: 22.5, lon: 90.0 }));

    // The map settles on a neighborhood-level viewport and fetches.
    let (mut fetcher, clock, _) = fetcher_against(&server);
    clock.advance(FETCH_INTERVAL);
    assert_eq!(
        fetcher.fetch(&BOUNDS, 16.0, false).await,
        FetchOutcome::Replaced(3)
    );

    // The coordinate-less skeleton member was dropped.
    assert!(fetcher.records().iter().all(|r| r.id != "104"));

    // Filter control narrows the markers without refetching.
    let religious: Vec<_> = fetcher.matching(FilterSelection::Religious).collect();
    assert_eq!(religious.len(), 1);
    assert_eq!(religious[0].title, "St. Nicholas");
    assert_eq!(fetcher.matching(FilterSelection::All).count(), 3);

    // Camera pulls back: overlay closes.
    assert!(gate.on_camera_change(&camera(8.5, 0.5, 0.25)));
    assert!(!gate.is_visible());
}

/// The map's own zoom can dismiss the overlay and stops fetching below the
/// minimum zoom.
#[tokio::test]
async fn world_view_zoom_dismisses_and_low_zoom_clears() {
    // No expectations: a low-zoom fetch must not reach the server.
    let server = Server::run();

    let mut gate = ViewportGate::new();
    gate.on_camera_change(&camera(7.0, 0.0, 0.0));
    assert!(gate.is_visible());

    let (mut fetcher, clock, _) = fetcher_against(&server);
    clock.advance(FETCH_INTERVAL);

    // Zoomed out below the fetch minimum: cleared, no network I/O.
    assert_eq!(
        fetcher.fetch(&BOUNDS, 4.0, false).await,
        FetchOutcome::BelowMinZoom
    );
    assert!(fetcher.records().is_empty());

    // Zoomed out to world view: the overlay dismisses regardless of camera.
    assert!(gate.on_map_zoom_end(2.0));
    assert!(!gate.is_visible());
}

/// Rapid pan events inside the interval are dropped silently while the last
/// committed list stays visible; upstream failure later degrades to empty.
#[tokio::test]
async fn rate_limiting_and_failure_degradation_across_cycles() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", "/api/interpreter"))
            .times(2)
            .respond_with(httptest::cycle![
                json_encoded(overpass_body()),
                status_code(504),
            ]),
    );

    let (mut fetcher, clock, stats) = fetcher_against(&server);

    // Straight after construction the interval gate is closed.
    assert_eq!(
        fetcher.fetch(&BOUNDS, 16.0, false).await,
        FetchOutcome::RateLimited
    );

    clock.advance(FETCH_INTERVAL);
    assert_eq!(
        fetcher.fetch(&BOUNDS, 16.0, false).await,
        FetchOutcome::Replaced(3)
    );

    // Three quick pan events: all dropped, list untouched.
    for _ in 0..3 {
        clock.advance(Duration::from_millis(500));
        assert_eq!(
            fetcher.fetch(&BOUNDS, 16.0, false).await,
            FetchOutcome::RateLimited
        );
        assert_eq!(fetcher.records().len(), 3);
    }

    // The next accepted fetch hits a gateway timeout: degrade to empty.
    clock.advance(FETCH_INTERVAL);
    assert_eq!(
        fetcher.fetch(&BOUNDS, 16.0, false).await,
        FetchOutcome::SourceUnavailable
    );
    assert!(fetcher.records().is_empty());
    assert_eq!(stats.total(), 1);
}

/// Each accepted fetch replaces the whole list; nothing merges across cycles.
#[tokio::test]
async fn accepted_fetches_replace_rather_than_merge() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", "/api/interpreter"))
            .times(2)
            .respond_with(httptest::cycle![
                json_encoded(overpass_body()),
                json_encoded(json!({
                    "elements": [
                        {"id": 201, "lat": 48.85, "lon": 2.35,
                         "tags": {"amenity": "food_bank", "name": "Banque Alimentaire"}}
                    ]
                })),
            ]),
    );

    let (mut fetcher, clock, _) = fetcher_against(&server);
    clock.advance(FETCH_INTERVAL);
    assert_eq!(
        fetcher.fetch(&BOUNDS, 16.0, false).await,
        FetchOutcome::Replaced(3)
    );

    let paris = GeoBounds {
        south: 48.8,
        west: 2.3,
        north: 48.9,
        east: 2.4,
    };
    clock.advance(FETCH_INTERVAL);
    assert_eq!(
        fetcher.fetch(&paris, 16.0, false).await,
        FetchOutcome::Replaced(1)
    );

    assert_eq!(fetcher.records().len(), 1);
    assert_eq!(fetcher.records()[0].title, "Banque Alimentaire");
    assert_eq!(
        fetcher.records()[0].website.as_deref(),
        Some("http://www.banquealimentaire.org")
    );
}

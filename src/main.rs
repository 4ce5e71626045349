//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `location_scout` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate. The binary
//! runs one fetch cycle for the given viewport and prints the matching
//! records.

use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use location_scout::config::{self, Opt};
use location_scout::initialization::{init_client, init_logger};
use location_scout::{
    ErrorStats, FetchOutcome, GeoBounds, ManualClock, OverpassClient, ProximityFetcher,
};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger(opt.log_level.clone().into()).context("Failed to initialize logger")?;

    let client = init_client(Duration::from_secs(opt.timeout_seconds))
        .context("Failed to initialize HTTP client")?;
    let overpass = OverpassClient::new(client, opt.endpoint.clone());

    // One-shot probe: open the interval window immediately instead of
    // waiting out the mount-time rate limit an interactive host would see.
    let clock = Arc::new(ManualClock::new());
    clock.advance(config::FETCH_INTERVAL);

    let error_stats = Arc::new(ErrorStats::new());
    let mut fetcher = ProximityFetcher::with_clock(overpass, Arc::clone(&error_stats), clock);

    let bounds = GeoBounds {
        south: opt.south,
        west: opt.west,
        north: opt.north,
        east: opt.east,
    };

    match fetcher.fetch(&bounds, opt.zoom, opt.mobile).await {
        FetchOutcome::Replaced(total) => {
            let records: Vec<_> = fetcher.matching(opt.filter).collect();

            if opt.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&records)
                        .context("Failed to serialize records")?
                );
            } else {
                for record in &records {
                    println!(
                        "{:.5},{:.5}  {} [{}]",
                        record.position.lat, record.position.lon, record.title, record.category
                    );
                    println!("    {}", record.description);
                    if let Some(website) = &record.website {
                        println!("    web:   {website}");
                    }
                    if let Some(email) = &record.email {
                        println!("    email: {email}");
                    }
                    if let Some(phone) = &record.phone {
                        println!("    phone: {phone}");
                    }
                }
                println!(
                    "{} of {} location{} matched filter '{:?}'",
                    records.len(),
                    total,
                    if total == 1 { "" } else { "s" },
                    opt.filter
                );
            }
            Ok(())
        }
        FetchOutcome::BelowMinZoom => {
            println!(
                "Zoom {} is below the minimum ({}); zoom in to query locations.",
                opt.zoom,
                config::MIN_FETCH_ZOOM
            );
            Ok(())
        }
        FetchOutcome::RateLimited => {
            // Unreachable with the pre-advanced clock, but handled for
            // completeness.
            println!("Rate limited; try again in a few seconds.");
            Ok(())
        }
        FetchOutcome::SourceUnavailable => {
            eprintln!(
                "location_scout error: point-of-interest source unavailable ({} request failure{})",
                error_stats.total(),
                if error_stats.total() == 1 { "" } else { "s" }
            );
            process::exit(1);
        }
    }
}

//! Error types and fetch-failure statistics.
//!
//! Fetch failures never propagate to the host UI; they degrade to an empty
//! result list. The statistics tracker keeps categorized counts of upstream
//! failures so diagnostics survive the silent degradation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Categories of point-of-interest fetch failures.
///
/// Each variant represents a distinct failure mode of the Overpass round
/// trip, for tracking and reporting purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchErrorType {
    /// Request timed out
    RequestTimeoutError,
    /// TCP/TLS connection failed
    RequestConnectError,
    /// Non-2xx HTTP status (including 429)
    RequestStatusError,
    /// Response body was not valid Overpass JSON
    ResponseDecodeError,
    /// Any other request failure
    RequestOtherError,
}

impl FetchErrorType {
    /// Human-readable label for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorType::RequestTimeoutError => "Request timeout error",
            FetchErrorType::RequestConnectError => "Request connect error",
            FetchErrorType::RequestStatusError => "Request status error",
            FetchErrorType::ResponseDecodeError => "Response decode error",
            FetchErrorType::RequestOtherError => "Request other error",
        }
    }
}

/// Thread-safe fetch-failure statistics tracker.
///
/// Tracks the count of each failure type using atomic counters, allowing
/// concurrent access from multiple tasks. All types are initialized to zero
/// on creation; share across tasks with `Arc`.
pub struct ErrorStats {
    errors: HashMap<FetchErrorType, AtomicUsize>,
}

impl ErrorStats {
    /// Creates a tracker with all counters at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in FetchErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }
        ErrorStats { errors }
    }

    /// Increments the counter for `error`.
    pub fn increment(&self, error: FetchErrorType) {
        // All FetchErrorType variants are initialized in new(), so unwrap() is safe
        self.errors
            .get(&error)
            .unwrap()
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Current count for `error`.
    pub fn get_count(&self, error: FetchErrorType) -> usize {
        // All FetchErrorType variants are initialized in new(), so unwrap() is safe
        self.errors.get(&error).unwrap().load(Ordering::SeqCst)
    }

    /// Total count across all failure types.
    pub fn total(&self) -> usize {
        FetchErrorType::iter().map(|e| self.get_count(e)).sum()
    }
}

impl Default for ErrorStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Updates failure statistics based on a `reqwest::Error`.
///
/// Analyzes the error and increments the appropriate [`FetchErrorType`]
/// counter.
pub fn update_error_stats(error_stats: &ErrorStats, error: &reqwest::Error) {
    let error_type = if error.is_timeout() {
        FetchErrorType::RequestTimeoutError
    } else if error.is_connect() {
        FetchErrorType::RequestConnectError
    } else if error.is_status() {
        FetchErrorType::RequestStatusError
    } else if error.is_decode() {
        FetchErrorType::ResponseDecodeError
    } else {
        FetchErrorType::RequestOtherError
    };

    error_stats.increment(error_type);
}

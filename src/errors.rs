// src/errors.rs
// DOCUMENTATION: Custom error types
// PURPOSE: Centralized error handling for the listing run

use reqwest::StatusCode;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure aborts the run; nothing is recovered locally.
#[derive(Error, Debug)]
pub enum PlacesError {
    /// The Places API answered with a non-success HTTP status.
    /// Carries the raw response body for diagnostics.
    #[error("Failed to fetch data ({status}): {body}")]
    FetchFailure { status: StatusCode, body: String },

    /// A search result had no `place_id` to look details up with.
    #[error("Search result {index} has no place_id")]
    MissingPlaceId { index: usize },

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

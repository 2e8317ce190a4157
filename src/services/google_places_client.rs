// src/services/google_places_client.rs
// DOCUMENTATION: Google Places API client
// PURPOSE: Nearby search and place details requests against the Places Web Service

use crate::config::{ApiKey, SearchOptions};
use crate::errors::PlacesError;
use crate::models::{Coordinate, PlaceDetail, PlaceSummary};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Google Places API client
/// DOCUMENTATION: Owns the credential and sends one request per call.
/// No retries, no pagination, no caching.
pub struct GooglePlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Maps API key
    api_key: ApiKey,
    /// Base URL for Google Places API
    base_url: String,
}

/// Response from Google Places Nearby Search
#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    /// Results array (absent means no results)
    #[serde(default)]
    results: Vec<PlaceSummary>,
    /// In-band status (OK, ZERO_RESULTS, REQUEST_DENIED, ...)
    status: Option<String>,
    /// Error message (if status is not OK)
    error_message: Option<String>,
}

/// Response from Google Places Details
#[derive(Debug, Deserialize)]
struct PlaceDetailsResponse {
    #[serde(default)]
    result: PlaceDetail,
    status: Option<String>,
    error_message: Option<String>,
}

impl GooglePlacesClient {
    /// Create new Google Places API client
    /// DOCUMENTATION: `base_url` is normally DEFAULT_PLACES_BASE_URL
    pub fn new(api_key: ApiKey, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Perform nearby search for places
    /// DOCUMENTATION: Searches for places around `origin`
    ///
    /// # Arguments
    /// * `origin` - Center point, sent as `location=<lat>,<lon>`
    /// * `options` - Radius, keyword and response language
    ///
    /// # Returns
    /// Place summaries in the order the service returned them
    pub async fn nearby_search(
        &self,
        origin: Coordinate,
        options: &SearchOptions,
    ) -> Result<Vec<PlaceSummary>, PlacesError> {
        let location = origin.to_string();
        let radius = options.radius.to_string();

        let params = [
            ("key", self.api_key.as_str()),
            ("location", location.as_str()),
            ("radius", radius.as_str()),
            ("keyword", options.keyword.as_str()),
            ("language", options.language.as_str()),
        ];

        log::debug!(
            "Google Places nearby search: location={}, radius={}, keyword={}",
            location,
            options.radius,
            options.keyword
        );

        let api_response: NearbySearchResponse =
            self.get_json("nearbysearch/json", &params).await?;

        log_api_status(
            "nearby search",
            api_response.status.as_deref(),
            api_response.error_message.as_deref(),
        );
        log::info!(
            "Google Places search returned {} results",
            api_response.results.len()
        );

        Ok(api_response.results)
    }

    /// Get detailed information about a specific place
    /// DOCUMENTATION: Retrieves the detail record by place_id.
    /// An absent `result` object yields an empty record.
    pub async fn get_place_details(&self, place_id: &str) -> Result<PlaceDetail, PlacesError> {
        let params = [("key", self.api_key.as_str()), ("place_id", place_id)];

        log::debug!("Google Places details lookup: place_id={}", place_id);

        let api_response: PlaceDetailsResponse = self.get_json("details/json", &params).await?;

        log_api_status(
            "details",
            api_response.status.as_deref(),
            api_response.error_message.as_deref(),
        );

        Ok(api_response.result)
    }

    /// Send a GET request and decode a successful JSON body
    /// DOCUMENTATION: Any non-success status becomes FetchFailure with the raw body
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, PlacesError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Google Places API request failed: {}", e);
                PlacesError::RequestFailed(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::error!("Google Places API error {}: {}", status, body);
            return Err(PlacesError::FetchFailure { status, body });
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to parse Google Places response: {}", e);
            PlacesError::InvalidResponse(e)
        })
    }
}

/// Warn about in-band API failures
/// DOCUMENTATION: The Places API reports denied or invalid requests with
/// HTTP 200 and a status field. These are not treated as errors.
fn log_api_status(call: &str, status: Option<&str>, error_message: Option<&str>) {
    match status {
        None | Some("OK") | Some("ZERO_RESULTS") => {}
        Some(other) => log::warn!(
            "Google Places {} returned status {}: {}",
            call,
            other,
            error_message.unwrap_or("no error message")
        ),
    }
}

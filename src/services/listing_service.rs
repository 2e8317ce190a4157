// src/services/listing_service.rs
// DOCUMENTATION: Nearby restaurant listing
// PURPOSE: Run one nearby search and print the name of every result

use crate::config::SearchOptions;
use crate::errors::PlacesError;
use crate::models::Coordinate;
use crate::services::GooglePlacesClient;
use std::io::Write;

/// Listing statistics
/// DOCUMENTATION: Counts of what a completed run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingStats {
    /// Places returned by the nearby search
    pub places_found: usize,
    /// Detail requests that completed
    pub details_fetched: usize,
}

/// Listing service
/// DOCUMENTATION: Sequential driver over GooglePlacesClient
pub struct ListingService;

impl ListingService {
    /// List restaurants around a point
    /// DOCUMENTATION: Main listing method
    ///
    /// Process:
    /// 1. One nearby search around `origin`
    /// 2. For each result, in order, one details request
    /// 3. Write `Name: <name>` and a blank line to `out`
    ///
    /// The first error stops the run. Lines already written stay written.
    ///
    /// # Arguments
    /// * `client` - Google Places API client
    /// * `origin` - Search center
    /// * `options` - Search radius, keyword and language
    /// * `out` - Destination for the listing (stdout in main)
    pub async fn list_restaurants<W: Write>(
        client: &GooglePlacesClient,
        origin: Coordinate,
        options: &SearchOptions,
        out: &mut W,
    ) -> Result<ListingStats, PlacesError> {
        let mut stats = ListingStats::default();

        log::info!("Searching for '{}' near {}", options.keyword, origin);

        let places = client.nearby_search(origin, options).await?;
        stats.places_found = places.len();

        for (idx, place) in places.iter().enumerate() {
            log::debug!(
                "Place {}/{}: {} ({})",
                idx + 1,
                places.len(),
                place.name.as_deref().unwrap_or("unnamed"),
                place.vicinity.as_deref().unwrap_or("no vicinity")
            );

            let place_id = place.place_id.as_deref().ok_or_else(|| {
                log::error!("Search result {} has no place_id", idx);
                PlacesError::MissingPlaceId { index: idx }
            })?;

            let details = client.get_place_details(place_id).await?;
            stats.details_fetched += 1;

            // Opening hours are fetched but not part of the listing
            let opening_hours = details.weekday_text();
            log::debug!(
                "{} has {} opening hours lines",
                place_id,
                opening_hours.len()
            );

            writeln!(out, "Name: {}", details.display_name())?;
            writeln!(out)?;
        }

        out.flush()?;

        Ok(stats)
    }
}

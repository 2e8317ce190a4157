// src/models/place.rs
// DOCUMENTATION: Place records returned by the Google Places API
// PURPOSE: Deserialization models for nearby search results and place details

use serde::Deserialize;

/// Name printed when a detail record has none
pub const MISSING_NAME: &str = "N/A";

/// Lightweight record from a nearby search
/// DOCUMENTATION: `place_id` is used to fetch details. It is optional here
/// so one malformed entry does not discard the entries before it; the
/// listing fails when it reaches the entry. `name` and `vicinity` are kept
/// for log messages.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    /// Google's unique place identifier
    pub place_id: Option<String>,
    /// Place name as reported by the search
    pub name: Option<String>,
    /// Short address
    pub vicinity: Option<String>,
}

/// Full record from a place details lookup
/// DOCUMENTATION: Every field is optional; an empty `result` object
/// deserializes to `PlaceDetail::default()`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetail {
    /// Display name
    pub name: Option<String>,
    /// Regular opening hours
    pub opening_hours: Option<OpeningHours>,
}

/// Opening hours metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpeningHours {
    /// One human-readable line per weekday (e.g., "月曜日: 11時00分～22時00分")
    pub weekday_text: Option<Vec<String>>,
}

impl PlaceDetail {
    /// Display name, or `"N/A"` when the record has none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(MISSING_NAME)
    }

    /// Weekday opening hours lines, empty when not reported
    pub fn weekday_text(&self) -> &[String] {
        self.opening_hours
            .as_ref()
            .and_then(|hours| hours.weekday_text.as_deref())
            .unwrap_or(&[])
    }
}

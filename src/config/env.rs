// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load configuration from .env files and the process environment

use super::ApiKey;
use dotenv::dotenv;
use std::env;

/// Default Places Web Service endpoint prefix
pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Nearby search parameters
/// DOCUMENTATION: Defaults are radius 500 m, keyword "restaurant",
/// response language "ja".
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Search radius in meters
    pub radius: u32,
    /// Keyword filter passed as `keyword`
    pub keyword: String,
    /// Response language passed as `language`
    pub language: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            radius: 500,
            keyword: "restaurant".to_string(),
            language: "ja".to_string(),
        }
    }
}

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Built once in main and passed down explicitly
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Maps API key (GOOGLE_MAPS_API_KEY)
    pub google_maps_api_key: ApiKey,

    /// Places API endpoint prefix (GOOGLE_PLACES_BASE_URL)
    pub places_base_url: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Nearby search parameters
    pub search: SearchOptions,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads .env if it exists, then the process environment
    pub fn from_env() -> Self {
        dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = SearchOptions::default();

        Config {
            google_maps_api_key: ApiKey::new(lookup("GOOGLE_MAPS_API_KEY").unwrap_or_default()),

            places_base_url: lookup("GOOGLE_PLACES_BASE_URL")
                .unwrap_or_else(|| DEFAULT_PLACES_BASE_URL.to_string()),

            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),

            search: SearchOptions {
                radius: lookup("SEARCH_RADIUS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.radius),
                keyword: lookup("SEARCH_KEYWORD").unwrap_or(defaults.keyword),
                language: lookup("SEARCH_LANGUAGE").unwrap_or(defaults.language),
            },
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: The API rejects an empty key itself, so this only warns
    pub fn validate(&self) {
        if self.google_maps_api_key.is_empty() {
            log::warn!("GOOGLE_MAPS_API_KEY not configured - Places API calls will be rejected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert!(config.google_maps_api_key.is_empty());
        assert_eq!(config.places_base_url, DEFAULT_PLACES_BASE_URL);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.search, SearchOptions::default());
        assert_eq!(config.search.radius, 500);
        assert_eq!(config.search.keyword, "restaurant");
        assert_eq!(config.search.language, "ja");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("GOOGLE_MAPS_API_KEY", "TESTKEY"),
            ("GOOGLE_PLACES_BASE_URL", "http://127.0.0.1:1234"),
            ("SEARCH_RADIUS", "1200"),
            ("SEARCH_KEYWORD", "ramen"),
            ("SEARCH_LANGUAGE", "en"),
            ("LOG_LEVEL", "debug"),
        ]);

        assert_eq!(config.google_maps_api_key.as_str(), "TESTKEY");
        assert_eq!(config.places_base_url, "http://127.0.0.1:1234");
        assert_eq!(config.search.radius, 1200);
        assert_eq!(config.search.keyword, "ramen");
        assert_eq!(config.search.language, "en");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unparsable_radius_falls_back() {
        let config = config_from(&[("SEARCH_RADIUS", "far")]);
        assert_eq!(config.search.radius, 500);
    }

    #[test]
    fn test_debug_hides_key() {
        let config = config_from(&[("GOOGLE_MAPS_API_KEY", "SECRET123")]);
        assert!(!format!("{:?}", config).contains("SECRET123"));
    }
}

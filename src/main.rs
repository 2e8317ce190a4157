// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Load config, list restaurants near a fixed point, print their names

mod config;
mod errors;
mod models;
mod services;

use anyhow::Context;
use config::Config;
use models::Coordinate;
use services::{GooglePlacesClient, ListingService};
use std::io;

/// Search center (Hongo, Bunkyo, Tokyo)
const ORIGIN: Coordinate = Coordinate::new(35.7143416, 139.7619679);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration (.env first, then process environment)
    let config = Config::from_env();

    // 2. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", &config.log_level);
    }
    env_logger::init();

    config.validate();
    log::debug!("Configuration: {:?}", config);

    // 3. Build the Places client with the explicit credential
    let client = GooglePlacesClient::new(
        config.google_maps_api_key.clone(),
        config.places_base_url.clone(),
    );

    // 4. Search, fetch details and print
    let mut out = io::stdout();
    let stats = ListingService::list_restaurants(&client, ORIGIN, &config.search, &mut out)
        .await
        .context("Failed to list nearby restaurants")?;

    log::info!(
        "Listed {} places ({} detail requests)",
        stats.places_found,
        stats.details_fetched
    );

    Ok(())
}

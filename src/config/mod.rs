// src/config/mod.rs
// DOCUMENTATION: Configuration module organization
// PURPOSE: Re-export configuration components

pub mod credential;
pub mod env;

pub use credential::ApiKey;
pub use env::{Config, SearchOptions};

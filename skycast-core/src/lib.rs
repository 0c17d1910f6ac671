//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Geocoding and forecast retrieval against OpenWeather
//! - Construction of the "current + up to 5 days" view model
//! - The persisted search-history store
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod forecast;
pub mod geocode;
pub mod history;
pub mod model;
pub mod service;

pub use config::Config;
pub use error::WeatherError;
pub use geocode::Geocoder;
pub use history::HistoryStore;
pub use model::{Coordinates, ForecastEntry, HistoryRecord};
pub use service::WeatherService;

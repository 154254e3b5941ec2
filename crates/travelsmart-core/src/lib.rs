//! Core domain types for TravelSmart.
//!
//! Holds the hotel dataset snapshot, the coordinate parser, the scoring
//! engine, and application configuration. Nothing in this crate performs
//! network I/O.

mod app_config;
mod config;
pub mod coordinates;
pub mod dataset;
mod error;
pub mod hotels;
pub mod scoring;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_AIR_QUALITY_URL};
pub use coordinates::{parse_lat_lon, Coordinates};
pub use dataset::{load_dataset, HotelDataset};
pub use error::{ConfigError, DatasetError};
pub use hotels::{HotelRecord, NoiseCategory};
pub use scoring::{
    air_quality_sub_score, calculate_score, label_air_quality, label_noise, AirQualityIndex,
    AirQualityLabel, NoiseLabel, Preference, PreferenceWeights,
};

//! Client for the OpenWeather air-pollution API.
//!
//! [`AirQualityClient::fetch_index`] surfaces every failure as an
//! [`AirQualityError`]; the [`AirQualitySource`] impl turns those into `None`
//! so one bad lookup never aborts a recommendation run.

pub mod client;
pub mod error;
pub mod source;
pub mod types;

pub use client::AirQualityClient;
pub use error::AirQualityError;
pub use source::AirQualitySource;
pub use types::{AirPollutionEntry, AirPollutionMain, AirPollutionResponse};

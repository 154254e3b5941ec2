//! Air-pollution API response types.
//!
//! Only the fields the scorer needs are modelled. The service returns
//! `{"coord": {...}, "list": [{"main": {"aqi": 2}, "components": {...}, "dt": ...}]}`
//! and unknown fields are ignored.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AirPollutionResponse {
    pub list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AirPollutionEntry {
    pub main: AirPollutionMain,
}

#[derive(Debug, Deserialize)]
pub struct AirPollutionMain {
    /// 1 = Good … 5 = Very Poor. Read as a number so `2` and `2.0` both
    /// parse.
    pub aqi: f64,
}

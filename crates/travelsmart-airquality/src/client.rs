//! HTTP client for the OpenWeather `air_pollution` endpoint.
//!
//! Wraps `reqwest` with API key handling and typed response
//! deserialization. One GET per lookup, no retries.

use std::time::Duration;

use reqwest::{Client, Url};
use travelsmart_core::{AirQualityIndex, AppConfig, Coordinates, DEFAULT_AIR_QUALITY_URL};

use crate::error::AirQualityError;
use crate::types::AirPollutionResponse;

/// Client for the current air-pollution API.
///
/// Use [`AirQualityClient::new`] for production or
/// [`AirQualityClient::with_base_url`] to point at a mock server in tests.
pub struct AirQualityClient {
    client: Client,
    api_key: Option<String>,
    base_url: Url,
}

impl AirQualityClient {
    /// Creates a client pointed at the production OpenWeather endpoint.
    ///
    /// `timeout_secs` of `None` keeps reqwest's default (no overall timeout).
    ///
    /// # Errors
    ///
    /// Returns [`AirQualityError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: Option<&str>,
        user_agent: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, AirQualityError> {
        Self::with_base_url(api_key, user_agent, timeout_secs, DEFAULT_AIR_QUALITY_URL)
    }

    /// Creates a client with a custom endpoint URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AirQualityError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AirQualityError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: Option<&str>,
        user_agent: &str,
        timeout_secs: Option<u64>,
        base_url: &str,
    ) -> Result<Self, AirQualityError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let base_url = Url::parse(base_url).map_err(|e| AirQualityError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.map(str::to_owned),
            base_url,
        })
    }

    /// Builds a client from the application config.
    ///
    /// # Errors
    ///
    /// Same as [`AirQualityClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, AirQualityError> {
        Self::with_base_url(
            config.openweather_api_key.as_deref(),
            &config.user_agent,
            config.air_quality_timeout_secs,
            &config.air_quality_url,
        )
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetches the current air-quality index for `coordinates`.
    ///
    /// Returns the `aqi` of the first entry in the response's `list`.
    ///
    /// # Errors
    ///
    /// - [`AirQualityError::MissingApiKey`] if no key is configured.
    /// - [`AirQualityError::Http`] on network failure or non-2xx HTTP status.
    /// - [`AirQualityError::Deserialize`] if the body does not match the
    ///   expected shape.
    /// - [`AirQualityError::EmptyResponse`] if `list` is empty.
    /// - [`AirQualityError::InvalidIndex`] if `aqi` does not fit an index.
    pub async fn fetch_index(
        &self,
        coordinates: Coordinates,
    ) -> Result<AirQualityIndex, AirQualityError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AirQualityError::MissingApiKey)?;
        let context = format!(
            "air_pollution(lat={}, lon={})",
            coordinates.latitude, coordinates.longitude
        );

        let url = self.build_url(coordinates, api_key);
        let body = self.request_text(&url).await?;

        let response: AirPollutionResponse =
            serde_json::from_str(&body).map_err(|e| AirQualityError::Deserialize {
                context: context.clone(),
                source: e,
            })?;

        let entry = response
            .list
            .into_iter()
            .next()
            .ok_or_else(|| AirQualityError::EmptyResponse {
                context: context.clone(),
            })?;

        let aqi = entry.main.aqi;
        let index = index_from_reading(aqi)
            .ok_or(AirQualityError::InvalidIndex { context, value: aqi })?;

        tracing::debug!(
            lat = coordinates.latitude,
            lon = coordinates.longitude,
            aqi,
            "fetched air-quality reading"
        );
        Ok(index)
    }

    /// Builds the request URL with percent-encoded `lat`, `lon` and `appid`.
    fn build_url(&self, coordinates: Coordinates, api_key: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("lat", &coordinates.latitude.to_string())
            .append_pair("lon", &coordinates.longitude.to_string())
            .append_pair("appid", api_key);
        url
    }

    /// Sends a GET request, asserts a 2xx status, and returns the body.
    ///
    /// The URL carries the API key, so it is stripped from any returned
    /// `reqwest::Error` before the error can reach a log line.
    async fn request_text(&self, url: &Url) -> Result<String, AirQualityError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(reqwest::Error::without_url)?;
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        Ok(body)
    }
}

/// Whole-number index for a reading. Flooring leaves every integer `<`
/// threshold comparison unchanged for fractional readings.
#[allow(clippy::cast_possible_truncation)]
fn index_from_reading(aqi: f64) -> Option<AirQualityIndex> {
    let floored = aqi.floor();
    (floored >= f64::from(i32::MIN) && floored <= f64::from(i32::MAX))
        .then(|| AirQualityIndex(floored as i32))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

use thiserror::Error;

/// Errors returned by the air-pollution API client.
#[derive(Debug, Error)]
pub enum AirQualityError {
    /// Network or TLS failure, or a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No OpenWeather API key is configured; no request was sent.
    #[error("no OpenWeather API key configured")]
    MissingApiKey,

    #[error("invalid air-quality endpoint '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The reading is outside the range an index can hold.
    #[error("air-pollution response for {context} has unusable aqi {value}")]
    InvalidIndex { context: String, value: f64 },

    /// The response parsed but its `list` array was empty.
    #[error("air-pollution response for {context} contained no readings")]
    EmptyResponse { context: String },
}

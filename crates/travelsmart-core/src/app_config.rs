use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub dataset_path: PathBuf,
    pub openweather_api_key: Option<String>,
    pub air_quality_url: String,
    /// `None` leaves the HTTP client's default timeout in place.
    pub air_quality_timeout_secs: Option<u64>,
    pub user_agent: String,
    pub max_concurrent_lookups: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("dataset_path", &self.dataset_path)
            .field(
                "openweather_api_key",
                &self.openweather_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("air_quality_url", &self.air_quality_url)
            .field("air_quality_timeout_secs", &self.air_quality_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_concurrent_lookups", &self.max_concurrent_lookups)
            .finish()
    }
}

//! The lookup seam used by the recommendation pipeline.

use std::future::Future;

use travelsmart_core::{AirQualityIndex, Coordinates};

use crate::client::AirQualityClient;

/// Best-effort source of current air-quality readings.
///
/// `None` means "unavailable": the reading could not be obtained for any
/// reason. Implementations never panic on upstream failures.
pub trait AirQualitySource: Sync {
    fn current_index(
        &self,
        coordinates: Coordinates,
    ) -> impl Future<Output = Option<AirQualityIndex>> + Send;
}

impl AirQualitySource for AirQualityClient {
    async fn current_index(&self, coordinates: Coordinates) -> Option<AirQualityIndex> {
        match self.fetch_index(coordinates).await {
            Ok(index) => Some(index),
            Err(e) => {
                tracing::warn!(
                    lat = coordinates.latitude,
                    lon = coordinates.longitude,
                    error = %e,
                    "air-quality lookup failed; treating reading as unavailable"
                );
                None
            }
        }
    }
}

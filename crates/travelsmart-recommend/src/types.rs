use serde::Serialize;
use travelsmart_core::{
    AirQualityIndex, AirQualityLabel, Coordinates, HotelRecord, NoiseLabel, Preference,
};

/// One recommendation query.
#[derive(Debug, Clone)]
pub struct RecommendationRequest {
    /// Exact city name as it appears in the dataset.
    pub city: String,
    /// Optional case-insensitive substring of the hotel name. Blank means no filter.
    pub search: Option<String>,
    pub preference: Preference,
}

/// A hotel that obtained an air-quality reading and was scored.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    pub hotel: HotelRecord,
    pub noise_label: NoiseLabel,
    pub air_quality_index: AirQualityIndex,
    pub air_quality_label: AirQualityLabel,
    /// Rating fed into the score (`0.0` when the dataset value was invalid).
    pub rating: f64,
    pub score: f64,
}

impl ScoredCandidate {
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        self.hotel.coordinates
    }

    /// Rating as shown to users: the trimmed dataset text, or `n/a` when
    /// blank.
    #[must_use]
    pub fn display_rating(&self) -> &str {
        let raw = self.hotel.raw_rating.trim();
        if raw.is_empty() {
            "n/a"
        } else {
            raw
        }
    }
}

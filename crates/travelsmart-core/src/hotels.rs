//! Hotel rows as loaded from the dataset.

use serde::Serialize;

use crate::coordinates::Coordinates;

/// Precomputed noise bucket from the dataset's `NoiseCategory` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoiseCategory {
    Low,
    Moderate,
    High,
    Unknown,
}

impl NoiseCategory {
    /// Maps the dataset's free-text category to a bucket.
    ///
    /// Only the exact cells `"Low Noise"`, `"Moderate Noise"` and
    /// `"High Noise"` are recognised; everything else is `Unknown`.
    #[must_use]
    pub fn from_dataset(raw: &str) -> Self {
        match raw {
            "Low Noise" => Self::Low,
            "Moderate Noise" => Self::Moderate,
            "High Noise" => Self::High,
            _ => Self::Unknown,
        }
    }

    /// Noise sub-score used by the scoring engine: Low → 5, Moderate → 3,
    /// anything else → 1.
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::Low => 5,
            Self::Moderate => 3,
            Self::High | Self::Unknown => 1,
        }
    }
}

/// One hotel from the dataset. Only rows with parseable coordinates exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelRecord {
    pub name: String,
    pub city: String,
    pub noise_category: NoiseCategory,
    /// `None` when the `HotelRating` cell was empty or not a finite number.
    pub rating: Option<f64>,
    /// The `HotelRating` cell exactly as it appeared in the file.
    pub raw_rating: String,
    pub raw_coordinate: String,
    pub coordinates: Coordinates,
}

impl HotelRecord {
    /// Rating used for scoring; invalid or missing ratings count as `0.0`.
    #[must_use]
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Case-insensitive substring match on the hotel name.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Parses a `HotelRating` cell. Non-numeric or non-finite values yield `None`.
#[must_use]
pub fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

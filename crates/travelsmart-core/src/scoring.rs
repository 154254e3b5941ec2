//! Composite hotel scoring.
//!
//! Blends a noise sub-score, the guest rating, and an air-quality sub-score
//! into one number using weights picked by the user's [`Preference`]. All
//! functions here are pure.
//!
//! The air-quality thresholds (50/100/150/200) are written for a 0–500 AQI
//! scale while the upstream service reports a 1–5 index, so every real
//! reading lands in the best bucket. The mismatch is preserved deliberately;
//! do not rescale the thresholds here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Air-quality index as reported by the pollution service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirQualityIndex(pub i32);

impl fmt::Display for AirQualityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User-selected weighting profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Preference {
    QuietArea,
    CleanAir,
    Both,
}

/// Weights applied to the three sub-scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreferenceWeights {
    pub noise: f64,
    pub rating: f64,
    pub air: f64,
}

impl Preference {
    pub const ALL: [Self; 3] = [Self::QuietArea, Self::CleanAir, Self::Both];

    #[must_use]
    pub const fn weights(self) -> PreferenceWeights {
        match self {
            Self::QuietArea => PreferenceWeights {
                noise: 0.6,
                rating: 0.3,
                air: 0.1,
            },
            Self::CleanAir => PreferenceWeights {
                noise: 0.3,
                rating: 0.3,
                air: 0.4,
            },
            Self::Both => PreferenceWeights {
                noise: 0.4,
                rating: 0.3,
                air: 0.3,
            },
        }
    }

    /// Human-facing label, e.g. `"Quiet Area"`.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::QuietArea => "Quiet Area",
            Self::CleanAir => "Clean Air",
            Self::Both => "Both",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Preference {
    type Err = String;

    /// Accepts `"Quiet Area"`, `"quiet-area"`, `"quiet_area"` and so on,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "quietarea" | "quiet" => Ok(Self::QuietArea),
            "cleanair" | "clean" => Ok(Self::CleanAir),
            "both" => Ok(Self::Both),
            _ => Err(format!(
                "unknown preference \"{s}\"; expected one of: Quiet Area, Clean Air, Both"
            )),
        }
    }
}

impl TryFrom<String> for Preference {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoiseLabel {
    Quiet,
    Moderate,
    Noisy,
}

impl NoiseLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "Quiet",
            Self::Moderate => "Moderate",
            Self::Noisy => "Noisy",
        }
    }
}

impl fmt::Display for NoiseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AirQualityLabel {
    Good,
    Moderate,
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthySensitive,
    Unhealthy,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Unknown,
}

impl AirQualityLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryPoor => "Very Poor",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AirQualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps an air-quality reading to its 0/1/3/5 sub-score.
#[must_use]
pub fn air_quality_sub_score(index: Option<AirQualityIndex>) -> u8 {
    match index {
        None => 0,
        Some(AirQualityIndex(i)) if i < 50 => 5,
        Some(AirQualityIndex(i)) if i < 100 => 3,
        Some(_) => 1,
    }
}

/// Computes the composite score. Higher is better; the result is not
/// normalised.
///
/// `noise_score` is the already-mapped 5/3/1 value (see
/// [`NoiseCategory::score`](crate::NoiseCategory::score)) and `rating` the
/// guest rating with invalid values already replaced by `0.0`.
#[must_use]
pub fn calculate_score(
    noise_score: u8,
    air_quality: Option<AirQualityIndex>,
    rating: f64,
    preference: Preference,
) -> f64 {
    let weights = preference.weights();
    let air_score = air_quality_sub_score(air_quality);
    f64::from(noise_score) * weights.noise
        + rating * weights.rating
        + f64::from(air_score) * weights.air
}

#[must_use]
pub const fn label_noise(noise_score: u8) -> NoiseLabel {
    match noise_score {
        5 => NoiseLabel::Quiet,
        3 => NoiseLabel::Moderate,
        _ => NoiseLabel::Noisy,
    }
}

#[must_use]
pub fn label_air_quality(index: Option<AirQualityIndex>) -> AirQualityLabel {
    match index {
        None => AirQualityLabel::Unknown,
        Some(AirQualityIndex(i)) if i < 50 => AirQualityLabel::Good,
        Some(AirQualityIndex(i)) if i < 100 => AirQualityLabel::Moderate,
        Some(AirQualityIndex(i)) if i < 150 => AirQualityLabel::UnhealthySensitive,
        Some(AirQualityIndex(i)) if i < 200 => AirQualityLabel::Unhealthy,
        Some(_) => AirQualityLabel::VeryPoor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn clean_air_scenario_scores_4_85() {
        let score = calculate_score(5, Some(AirQualityIndex(30)), 4.5, Preference::CleanAir);
        assert_close(score, 4.85);
        assert_eq!(label_noise(5), NoiseLabel::Quiet);
        assert_eq!(label_air_quality(Some(AirQualityIndex(30))), AirQualityLabel::Good);
    }

    #[test]
    fn quiet_area_weights() {
        let score = calculate_score(3, Some(AirQualityIndex(2)), 4.0, Preference::QuietArea);
        // 3*0.6 + 4*0.3 + 5*0.1
        assert_close(score, 3.5);
    }

    #[test]
    fn both_weights() {
        let score = calculate_score(1, Some(AirQualityIndex(120)), 2.0, Preference::Both);
        // 1*0.4 + 2*0.3 + 1*0.3
        assert_close(score, 1.3);
    }

    #[test]
    fn missing_air_quality_contributes_zero() {
        let score = calculate_score(5, None, 4.0, Preference::CleanAir);
        assert_close(score, 5.0 * 0.3 + 4.0 * 0.3);
    }

    #[test]
    fn calculate_score_is_deterministic() {
        let a = calculate_score(3, Some(AirQualityIndex(4)), 3.7, Preference::Both);
        let b = calculate_score(3, Some(AirQualityIndex(4)), 3.7, Preference::Both);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn preference_changes_only_weights() {
        let aqi = Some(AirQualityIndex(75));
        for preference in Preference::ALL {
            let w = preference.weights();
            let expected = 5.0 * w.noise + 4.0 * w.rating + 3.0 * w.air;
            assert_close(calculate_score(5, aqi, 4.0, preference), expected);
        }
    }

    #[test]
    fn weights_sum_to_one() {
        for preference in Preference::ALL {
            let w = preference.weights();
            assert_close(w.noise + w.rating + w.air, 1.0);
        }
    }

    #[test]
    fn every_service_index_is_best_bucket() {
        for i in 1..=5 {
            assert_eq!(air_quality_sub_score(Some(AirQualityIndex(i))), 5);
            assert_eq!(label_air_quality(Some(AirQualityIndex(i))), AirQualityLabel::Good);
        }
    }

    #[test]
    fn air_quality_sub_score_thresholds() {
        assert_eq!(air_quality_sub_score(None), 0);
        assert_eq!(air_quality_sub_score(Some(AirQualityIndex(49))), 5);
        assert_eq!(air_quality_sub_score(Some(AirQualityIndex(50))), 3);
        assert_eq!(air_quality_sub_score(Some(AirQualityIndex(99))), 3);
        assert_eq!(air_quality_sub_score(Some(AirQualityIndex(100))), 1);
        assert_eq!(air_quality_sub_score(Some(AirQualityIndex(-7))), 5);
    }

    #[test]
    fn label_air_quality_thresholds() {
        let cases = [
            (None, AirQualityLabel::Unknown),
            (Some(0), AirQualityLabel::Good),
            (Some(49), AirQualityLabel::Good),
            (Some(50), AirQualityLabel::Moderate),
            (Some(99), AirQualityLabel::Moderate),
            (Some(100), AirQualityLabel::UnhealthySensitive),
            (Some(149), AirQualityLabel::UnhealthySensitive),
            (Some(150), AirQualityLabel::Unhealthy),
            (Some(199), AirQualityLabel::Unhealthy),
            (Some(200), AirQualityLabel::VeryPoor),
            (Some(i32::MAX), AirQualityLabel::VeryPoor),
        ];
        for (index, expected) in cases {
            assert_eq!(label_air_quality(index.map(AirQualityIndex)), expected, "{index:?}");
        }
    }

    #[test]
    fn label_noise_is_total() {
        assert_eq!(label_noise(5), NoiseLabel::Quiet);
        assert_eq!(label_noise(3), NoiseLabel::Moderate);
        for other in [0, 1, 2, 4, 6, u8::MAX] {
            assert_eq!(label_noise(other), NoiseLabel::Noisy);
        }
    }

    #[test]
    fn preference_parses_display_and_slug_forms() {
        assert_eq!("Quiet Area".parse::<Preference>().unwrap(), Preference::QuietArea);
        assert_eq!("clean-air".parse::<Preference>().unwrap(), Preference::CleanAir);
        assert_eq!("CLEAN_AIR".parse::<Preference>().unwrap(), Preference::CleanAir);
        assert_eq!("both".parse::<Preference>().unwrap(), Preference::Both);
        assert!("sunny".parse::<Preference>().is_err());
    }

    #[test]
    fn preference_serde_round_trip() {
        let json = serde_json::to_string(&Preference::QuietArea).unwrap();
        assert_eq!(json, "\"quiet_area\"");
        let back: Preference = serde_json::from_str("\"Clean Air\"").unwrap();
        assert_eq!(back, Preference::CleanAir);
    }

    #[test]
    fn air_quality_label_serializes_display_text() {
        let json = serde_json::to_string(&AirQualityLabel::UnhealthySensitive).unwrap();
        assert_eq!(json, "\"Unhealthy for Sensitive Groups\"");
    }
}

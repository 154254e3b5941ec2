//! Parsing for the dataset's combined `"<lat>|<lon>"` coordinate field.

use serde::Serialize;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Parses a raw `"<lat>|<lon>"` field into [`Coordinates`].
///
/// The input is trimmed and split on `|`. Exactly two tokens are required and
/// both must parse as finite floats; anything else yields `None`.
///
/// ```
/// use travelsmart_core::parse_lat_lon;
///
/// let c = parse_lat_lon("40.7128|-74.0060").unwrap();
/// assert_eq!(c.latitude, 40.7128);
/// assert!(parse_lat_lon("invalid").is_none());
/// ```
#[must_use]
pub fn parse_lat_lon(raw: &str) -> Option<Coordinates> {
    let mut parts = raw.trim().split('|');
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };

    let latitude = parse_finite(lat)?;
    let longitude = parse_finite(lon)?;
    Some(Coordinates::new(latitude, longitude))
}

fn parse_finite(token: &str) -> Option<f64> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

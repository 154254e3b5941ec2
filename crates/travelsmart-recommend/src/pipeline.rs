//! Recommendation pipeline orchestration.

use std::cmp::Ordering;

use futures::stream::{self, StreamExt};
use travelsmart_airquality::AirQualitySource;
use travelsmart_core::{
    calculate_score, label_air_quality, label_noise, AirQualityIndex, HotelDataset, HotelRecord,
    Preference,
};

use crate::types::{RecommendationRequest, ScoredCandidate};

/// Upper bound on the number of hotels returned by [`recommend`].
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Hotels in `city` (exact match) whose name contains `search` as given,
/// ignoring case. Only a missing or empty search term keeps every hotel in
/// the city; whitespace is matched literally.
#[must_use]
pub fn filter_hotels<'a>(
    dataset: &'a HotelDataset,
    city: &str,
    search: Option<&str>,
) -> Vec<&'a HotelRecord> {
    let needle = search
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    dataset
        .records()
        .iter()
        .filter(|hotel| hotel.city == city)
        .filter(|hotel| {
            needle
                .as_deref()
                .is_none_or(|n| hotel.name.to_lowercase().contains(n))
        })
        .collect()
}

/// Scores one hotel against an air-quality reading.
#[must_use]
pub fn score_hotel(
    hotel: HotelRecord,
    air_quality: AirQualityIndex,
    preference: Preference,
) -> ScoredCandidate {
    let noise_score = hotel.noise_category.score();
    let rating = hotel.rating_or_zero();
    let score = calculate_score(noise_score, Some(air_quality), rating, preference);

    ScoredCandidate {
        noise_label: label_noise(noise_score),
        air_quality_index: air_quality,
        air_quality_label: label_air_quality(Some(air_quality)),
        rating,
        score,
        hotel,
    }
}

/// Sorts by score descending and keeps the top [`MAX_RECOMMENDATIONS`].
///
/// Ties are broken by hotel name, then latitude, then longitude, so the
/// order does not depend on the order lookups completed in.
#[must_use]
pub fn rank(mut candidates: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    candidates.sort_by(compare_candidates);
    candidates.truncate(MAX_RECOMMENDATIONS);
    candidates
}

fn compare_candidates(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.hotel.name.cmp(&b.hotel.name))
        .then_with(|| {
            a.hotel
                .coordinates
                .latitude
                .total_cmp(&b.hotel.coordinates.latitude)
        })
        .then_with(|| {
            a.hotel
                .coordinates
                .longitude
                .total_cmp(&b.hotel.coordinates.longitude)
        })
}

/// Runs the full recommendation pipeline for one request.
///
/// 1. Filter the dataset by city and optional search term.
/// 2. Look up current air quality for every remaining hotel, at most
///    `max_concurrent` lookups in flight.
/// 3. Drop hotels whose reading is unavailable; score the rest.
/// 4. Rank and truncate (see [`rank`]).
///
/// An empty result is a normal "no matches" outcome, not an error.
pub async fn recommend<S>(
    dataset: &HotelDataset,
    source: &S,
    request: &RecommendationRequest,
    max_concurrent: usize,
) -> Vec<ScoredCandidate>
where
    S: AirQualitySource,
{
    let hotels: Vec<HotelRecord> = filter_hotels(dataset, &request.city, request.search.as_deref())
        .into_iter()
        .cloned()
        .collect();
    let considered = hotels.len();
    let preference = request.preference;

    let scored: Vec<ScoredCandidate> = stream::iter(hotels)
        .map(move |hotel| async move {
            let reading = source.current_index(hotel.coordinates).await;
            (hotel, reading)
        })
        .buffer_unordered(max_concurrent.max(1))
        .filter_map(move |(hotel, reading)| async move {
            match reading {
                Some(index) => Some(score_hotel(hotel, index, preference)),
                None => {
                    tracing::debug!(hotel = %hotel.name, "dropping hotel without air-quality reading");
                    None
                }
            }
        })
        .collect()
        .await;

    let unavailable = considered - scored.len();
    if considered > 0 && unavailable == considered {
        tracing::warn!(
            city = %request.city,
            considered,
            "no air-quality readings were available for any candidate hotel"
        );
    }

    let ranked = rank(scored);
    tracing::info!(
        city = %request.city,
        preference = %preference,
        considered,
        unavailable,
        returned = ranked.len(),
        "recommendation run complete"
    );
    ranked
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;

//! `recommend` command handler.
//!
//! Loads nothing itself: `main` supplies the config and dataset. Air-quality
//! lookups that fail only shrink the result set, so the command succeeds
//! even when every lookup is unavailable.

use std::path::PathBuf;

use anyhow::Context;
use travelsmart_airquality::AirQualityClient;
use travelsmart_core::{AppConfig, HotelDataset, Preference};
use travelsmart_recommend::{build_map, recommend, render_table, RecommendationRequest};

#[derive(Debug)]
pub(crate) struct RecommendOptions {
    pub city: String,
    pub preference: Preference,
    pub search: Option<String>,
    pub map_path: Option<PathBuf>,
    pub json: bool,
}

/// Ranks hotels for one city and prints them as a table or JSON, optionally
/// writing a Leaflet map of the results.
///
/// # Errors
///
/// Returns an error if the city is not in the dataset, the air-quality
/// client cannot be built, JSON encoding fails, or the map file cannot be
/// written.
pub(crate) async fn run_recommend(
    config: &AppConfig,
    dataset: &HotelDataset,
    options: RecommendOptions,
) -> anyhow::Result<()> {
    if !dataset.has_city(&options.city) {
        anyhow::bail!(
            "city '{}' not found in dataset; run `travelsmart cities` to list available cities",
            options.city
        );
    }

    let client = AirQualityClient::from_config(config)?;
    if !client.has_api_key() {
        tracing::warn!("OPENWEATHER_API_KEY is not set; no air-quality readings will be available");
    }

    let request = RecommendationRequest {
        city: options.city,
        search: options.search,
        preference: options.preference,
    };
    let results = recommend(dataset, &client, &request, config.max_concurrent_lookups).await;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!(
            "Top hotel recommendations for {} ({})\n",
            request.city, request.preference
        );
        print!("{}", render_table(&results));
    }

    if let Some(path) = options.map_path {
        match build_map(&results) {
            Some(view) => {
                let title = format!("Hotels in {}", request.city);
                std::fs::write(&path, view.to_html(&title))
                    .with_context(|| format!("failed to write map to {}", path.display()))?;
                tracing::info!(path = %path.display(), markers = view.markers.len(), "map written");
            }
            None => tracing::warn!("no results to map; map file not written"),
        }
    }

    Ok(())
}

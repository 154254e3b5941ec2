//! End-to-end pipeline runs against a wiremock air-pollution endpoint.

use travelsmart_airquality::AirQualityClient;
use travelsmart_core::{Coordinates, HotelDataset, HotelRecord, NoiseCategory, Preference};
use travelsmart_recommend::{build_map, recommend, render_table, RecommendationRequest};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn hotel(name: &str, noise: &str, rating: &str, lat: f64, lon: f64) -> HotelRecord {
    HotelRecord {
        name: name.to_string(),
        city: "Paris".to_string(),
        noise_category: NoiseCategory::from_dataset(noise),
        rating: rating.parse().ok(),
        raw_rating: rating.to_string(),
        raw_coordinate: format!("{lat}|{lon}"),
        coordinates: Coordinates::new(lat, lon),
    }
}

async fn mount_reading(server: &MockServer, lat: &str, aqi: i32) {
    Mock::given(method("GET"))
        .and(query_param("lat", lat))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "list": [ { "main": { "aqi": aqi } } ] })),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn failed_lookups_are_dropped_and_rest_ranked() {
    let server = MockServer::start().await;
    mount_reading(&server, "48.8566", 1).await;
    mount_reading(&server, "48.87", 3).await;
    Mock::given(method("GET"))
        .and(query_param("lat", "48.85"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dataset = HotelDataset::from_records(vec![
        hotel("Hotel Lutetia", "Low Noise", "4.5", 48.8566, 2.3522),
        hotel("Busy Boulevard", "High Noise", "3.9", 48.87, 2.33),
        hotel("Broken Lookup", "Low Noise", "5.0", 48.85, 2.34),
    ]);
    let client = AirQualityClient::with_base_url(
        Some("test-key"),
        "travelsmart-test",
        Some(5),
        &format!("{}/data/2.5/air_pollution", server.uri()),
    )
    .expect("client construction should not fail");

    let request = RecommendationRequest {
        city: "Paris".to_string(),
        search: None,
        preference: Preference::CleanAir,
    };
    let results = recommend(&dataset, &client, &request, 2).await;

    let names: Vec<&str> = results.iter().map(|c| c.hotel.name.as_str()).collect();
    assert_eq!(names, vec!["Hotel Lutetia", "Busy Boulevard"]);
    assert!((results[0].score - 4.85).abs() < 1e-9);

    let table = render_table(&results);
    assert!(table.contains("Hotel Lutetia"));
    assert!(!table.contains("Broken Lookup"));

    let map = build_map(&results).expect("map for non-empty results");
    assert_eq!(map.center, Coordinates::new(48.8566, 2.3522));
    assert_eq!(map.markers.len(), 2);
}

#[tokio::test]
async fn missing_api_key_yields_no_matches() {
    let dataset = HotelDataset::from_records(vec![hotel(
        "Hotel Lutetia",
        "Low Noise",
        "4.5",
        48.8566,
        2.3522,
    )]);
    let client = AirQualityClient::with_base_url(
        None,
        "travelsmart-test",
        None,
        "http://127.0.0.1:9/data/2.5/air_pollution",
    )
    .expect("client construction should not fail");

    let request = RecommendationRequest {
        city: "Paris".to_string(),
        search: Some("lutetia".to_string()),
        preference: Preference::Both,
    };
    let results = recommend(&dataset, &client, &request, 1).await;

    assert!(results.is_empty());
    assert!(build_map(&results).is_none());
}

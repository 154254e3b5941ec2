//! Map view of ranked results.
//!
//! [`MapView`] is the data a map widget needs: a centre on the top result and
//! one marker per hotel. It serialises to JSON for API clients and renders to
//! a standalone Leaflet page for the CLI.

use html_escape::encode_text;
use serde::Serialize;
use travelsmart_core::Coordinates;

use crate::types::ScoredCandidate;

const DEFAULT_ZOOM: u8 = 13;
const LEAFLET_VERSION: &str = "1.9.4";

#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapMarker {
    pub position: Coordinates,
    /// Plain hotel name shown on hover.
    pub tooltip: String,
    /// Pre-escaped HTML fragment for the marker popup.
    pub popup_html: String,
}

/// Builds a map centred on the first (best) candidate. `None` when empty.
#[must_use]
pub fn build_map(candidates: &[ScoredCandidate]) -> Option<MapView> {
    let top = candidates.first()?;
    let markers = candidates
        .iter()
        .map(|c| MapMarker {
            position: c.coordinates(),
            tooltip: c.hotel.name.clone(),
            popup_html: popup_html(c),
        })
        .collect();

    Some(MapView {
        center: top.coordinates(),
        zoom: DEFAULT_ZOOM,
        markers,
    })
}

fn popup_html(c: &ScoredCandidate) -> String {
    format!(
        "<b>{}</b><br>Noise: {}<br>Air Quality: {}<br>Rating: {}\u{2b50}",
        encode_text(&c.hotel.name),
        c.noise_label,
        c.air_quality_label,
        encode_text(c.display_rating()),
    )
}

impl MapView {
    /// Renders a self-contained HTML page that draws the map with Leaflet
    /// and OpenStreetMap tiles.
    #[must_use]
    pub fn to_html(&self, title: &str) -> String {
        // `</` would close the surrounding <script> element early.
        let markers = serde_json::to_string(&self.markers)
            .unwrap_or_else(|_| "[]".to_string())
            .replace("</", "<\\/");

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
const map = L.map("map").setView([{lat}, {lon}], {zoom});
L.tileLayer("https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
  attribution: "&copy; OpenStreetMap contributors"
}}).addTo(map);
const markers = {markers};
for (const m of markers) {{
  L.marker([m.position.latitude, m.position.longitude])
    .bindPopup(m.popup_html)
    .bindTooltip(m.tooltip)
    .addTo(map);
}}
</script>
</body>
</html>
"#,
            title = encode_text(title),
            lat = self.center.latitude,
            lon = self.center.longitude,
            zoom = self.zoom,
        )
    }
}

#[cfg(test)]
mod tests {
    use travelsmart_core::{AirQualityIndex, HotelRecord, NoiseCategory, Preference};

    use super::*;
    use crate::pipeline::score_hotel;

    fn candidate(name: &str, lat: f64, lon: f64) -> ScoredCandidate {
        let hotel = HotelRecord {
            name: name.to_string(),
            city: "Paris".to_string(),
            noise_category: NoiseCategory::Moderate,
            rating: Some(4.0),
            raw_rating: "4.0".to_string(),
            raw_coordinate: format!("{lat}|{lon}"),
            coordinates: Coordinates::new(lat, lon),
        };
        score_hotel(hotel, AirQualityIndex(2), Preference::Both)
    }

    #[test]
    fn empty_results_have_no_map() {
        assert!(build_map(&[]).is_none());
    }

    #[test]
    fn map_is_centred_on_top_result() {
        let view = build_map(&[candidate("First", 48.86, 2.35), candidate("Second", 48.87, 2.30)])
            .expect("map for non-empty results");

        assert_eq!(view.center, Coordinates::new(48.86, 2.35));
        assert_eq!(view.zoom, 13);
        assert_eq!(view.markers.len(), 2);
        assert_eq!(view.markers[1].tooltip, "Second");
        assert_eq!(view.markers[1].position, Coordinates::new(48.87, 2.30));
    }

    #[test]
    fn popup_lists_labels_and_rating() {
        let view = build_map(&[candidate("Le Bristol", 48.87, 2.31)]).expect("map");
        assert_eq!(
            view.markers[0].popup_html,
            "<b>Le Bristol</b><br>Noise: Moderate<br>Air Quality: Good<br>Rating: 4.0\u{2b50}"
        );
    }

    #[test]
    fn popup_escapes_hotel_name() {
        let view = build_map(&[candidate("<script>alert(1)</script> & Co", 1.0, 2.0)]).expect("map");
        let popup = &view.markers[0].popup_html;
        assert!(popup.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; Co"));
        assert!(!popup.contains("<script>"));
    }

    #[test]
    fn html_embeds_markers_without_closing_script_early() {
        let view = build_map(&[candidate("Evil </script> Inn", 1.0, 2.0)]).expect("map");
        let html = view.to_html("Paris");

        assert!(html.contains("L.map(\"map\").setView([1, 2], 13)"));
        assert_eq!(html.matches("</script>").count(), 2, "html was:\n{html}");
        assert!(html.contains("<title>Paris</title>"));
    }

    #[test]
    fn html_escapes_page_title() {
        let view = build_map(&[candidate("Inn", 1.0, 2.0)]).expect("map");
        let html = view.to_html("Hotels in <Paris> & Co");
        assert!(html.contains("<title>Hotels in &lt;Paris&gt; &amp; Co</title>"));
    }

    #[test]
    fn map_view_serializes_to_json() {
        let view = build_map(&[candidate("Json Hotel", 10.5, -20.25)]).expect("map");
        let json = serde_json::to_value(&view).expect("serialize");
        assert_eq!(json["center"]["latitude"], 10.5);
        assert_eq!(json["markers"][0]["tooltip"], "Json Hotel");
    }
}

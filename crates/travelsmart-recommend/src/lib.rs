//! Hotel recommendation pipeline for TravelSmart.
//!
//! Filters the dataset by city and search text, fetches a live air-quality
//! reading per hotel, scores the survivors, and ranks the top results. Also
//! renders those results as a terminal table or a Leaflet map.

pub mod map;
pub mod pipeline;
pub mod table;
pub mod types;

pub use map::{build_map, MapMarker, MapView};
pub use pipeline::{filter_hotels, rank, recommend, score_hotel, MAX_RECOMMENDATIONS};
pub use table::{render_table, NO_MATCHES_NOTICE};
pub use types::{RecommendationRequest, ScoredCandidate};

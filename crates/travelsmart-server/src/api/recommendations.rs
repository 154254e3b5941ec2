use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use travelsmart_core::Preference;
use travelsmart_recommend::{
    build_map, recommend, MapView, RecommendationRequest, ScoredCandidate, NO_MATCHES_NOTICE,
};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct RecommendationsQuery {
    pub city: Option<String>,
    pub preference: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct RecommendationsData {
    city: String,
    preference: Preference,
    results: Vec<ScoredCandidate>,
    map: Option<MapView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<&'static str>,
}

/// Ranks hotels in `city`. Missing air-quality readings shrink the result
/// list; an empty list is returned with a notice rather than as an error.
pub(super) async fn list_recommendations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<RecommendationsQuery>,
) -> Result<Json<ApiResponse<RecommendationsData>>, ApiError> {
    let city = query
        .city
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "bad_request",
                "query parameter 'city' is required",
            )
        })?
        .to_owned();

    let preference = match query.preference.as_deref() {
        None => Preference::QuietArea,
        Some(raw) => raw
            .parse()
            .map_err(|e: String| ApiError::new(req_id.0.clone(), "bad_request", e))?,
    };

    if !state.dataset.has_city(&city) {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("city '{city}' not found"),
        ));
    }

    let request = RecommendationRequest {
        city,
        search: query.search,
        preference,
    };
    let results = recommend(
        &state.dataset,
        state.air_quality.as_ref(),
        &request,
        state.max_concurrent_lookups,
    )
    .await;

    let map = build_map(&results);
    let notice = results.is_empty().then_some(NO_MATCHES_NOTICE);

    Ok(Json(ApiResponse {
        data: RecommendationsData {
            city: request.city,
            preference,
            results,
            map,
            notice,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

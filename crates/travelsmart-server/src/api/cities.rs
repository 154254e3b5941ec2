use axum::{extract::State, Extension, Json};

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

/// Distinct city names in the dataset, sorted.
pub(super) async fn list_cities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    let data = state
        .dataset
        .cities()
        .into_iter()
        .map(str::to_owned)
        .collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

use crate::http::AlertState;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub(crate) struct GetLocation {
    email: Option<String>,
}

pub(crate) async fn get_location(
    State(state): State<AlertState>,
    Query(query): Query<GetLocation>,
) -> impl IntoResponse {
    let Some(email) = query.email else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Email is required" })),
        );
    };

    let Some(location) = state.locations.get(&email).await else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Location not found" })),
        );
    };

    (
        StatusCode::OK,
        Json(json!({
            "latitude": location.latitude,
            "longitude": location.longitude,
            "updatedAt": location.updated_at.to_rfc3339(),
        })),
    )
}

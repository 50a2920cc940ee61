use crate::http::AlertState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub(crate) struct UpdateLocation {
    email: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

pub(crate) async fn update_location(
    State(state): State<AlertState>,
    Json(payload): Json<UpdateLocation>,
) -> impl IntoResponse {
    let (Some(email), Some(latitude), Some(longitude)) =
        (payload.email, payload.latitude, payload.longitude)
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Email, latitude, and longitude are required" })),
        );
    };

    state.locations.update(&email, latitude, longitude).await;

    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Location updated" })),
    )
}

use crate::alerts::{AlertMode, SosRequest};
use crate::errors::AlertError;
use crate::http::AlertState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub(crate) struct SendSos {
    email: String,
    mode: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(rename = "locationLink")]
    location_link: Option<String>,
    #[serde(rename = "customMessage")]
    custom_message: Option<String>,
}

pub(crate) async fn send_sos(
    State(state): State<AlertState>,
    Json(payload): Json<SendSos>,
) -> impl IntoResponse {
    // The device reports its position alongside the SOS; keep the live
    // cache current before resolving the location link.
    if let (Some(latitude), Some(longitude)) = (payload.latitude, payload.longitude) {
        state
            .locations
            .update(&payload.email, latitude, longitude)
            .await;
    }

    let request = SosRequest {
        email: payload.email,
        mode: AlertMode::from_wire(payload.mode.as_deref()),
        location_link: payload.location_link,
        custom_message: payload.custom_message,
    };

    match state.orchestrator.send_sos(request).await {
        Ok(report) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "SOS alerts sent successfully!",
                "attempted": report.attempted(),
                "delivered": report.delivered(),
                "failed": report.failed(),
                "outcomes": report.outcomes,
            })),
        ),
        Err(AlertError::UserNotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "User not found!" })),
        ),
        Err(AlertError::NoContacts) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "No emergency contacts found!" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to send SOS alert." })),
        ),
    }
}

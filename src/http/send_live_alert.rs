use crate::errors::AlertError;
use crate::http::AlertState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub(crate) struct SendLiveAlert {
    email: Option<String>,
    #[serde(rename = "liveLocationLink")]
    live_location_link: Option<String>,
}

pub(crate) async fn send_live_alert(
    State(state): State<AlertState>,
    Json(payload): Json<SendLiveAlert>,
) -> impl IntoResponse {
    let (Some(email), Some(link)) = (payload.email, payload.live_location_link) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Email and liveLocationLink are required" })),
        );
    };

    match state.orchestrator.send_live_alert(&email, &link).await {
        Ok(report) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Live location alerts sent successfully!",
                "attempted": report.attempted(),
                "delivered": report.delivered(),
                "failed": report.failed(),
                "outcomes": report.outcomes,
            })),
        ),
        Err(AlertError::UserNotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "User not found" })),
        ),
        Err(AlertError::NoContacts) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "No emergency contacts found" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal Server Error" })),
        ),
    }
}

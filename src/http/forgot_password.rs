use crate::schema::users::{dsl::users, email, id, reset_token, token_expiry};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{Duration, Utc};
use diesel::{
    ExpressionMethods, MysqlConnection, OptionalExtension, QueryDsl, RunQueryDsl,
    dsl::update,
    r2d2::{ConnectionManager, Pool},
};
use log::info;
use serde::Deserialize;
use serde_json::json;
use std::env;

#[derive(Deserialize)]
pub(crate) struct ForgotPassword {
    email: String,
}

/// Mints a reset token valid for ten minutes. The reset link is logged
/// rather than emailed; mail delivery belongs to a separate service.
pub(crate) async fn forgot_password(
    State(pool): State<Pool<ConnectionManager<MysqlConnection>>>,
    Json(payload): Json<ForgotPassword>,
) -> impl IntoResponse {
    let connection = &mut pool.get().expect("Could not get connection from pool");

    let Ok(found) = users
        .filter(email.eq(&payload.email))
        .select(id)
        .first::<i32>(connection)
        .optional()
    else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Internal Server Error" })),
        );
    };

    let Some(found_id) = found else {
        return (StatusCode::OK, Json(json!({ "message": "Email not found!" })));
    };

    let generated_token = guid_create::GUID::rand().to_string().to_lowercase();
    let expiry = Utc::now().naive_utc() + Duration::minutes(10);

    if update(users.filter(id.eq(found_id)))
        .set((
            reset_token.eq(&generated_token),
            token_expiry.eq(expiry),
        ))
        .execute(connection)
        .is_err()
    {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Internal Server Error" })),
        );
    }

    let client_url =
        env::var("CLIENT_URL").unwrap_or_else(|_| String::from("http://localhost:5000"));
    info!(
        "Password reset link for {}: {client_url}/forgotpassword/index.html?token={generated_token}",
        payload.email
    );

    (
        StatusCode::OK,
        Json(json!({ "message": "Reset password email sent! Check your inbox." })),
    )
}

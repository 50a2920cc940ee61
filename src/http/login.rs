use crate::schema::tokens::{dsl::tokens, token, user_id, valid_until};
use crate::schema::users::{dsl::users, email, id, name, password};
use argon2::password_hash::rand_core;
use argon2::password_hash::rand_core::RngCore;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use base64::{Engine as _, engine::general_purpose::URL_SAFE};
use chrono::{Duration, Utc};
use diesel::{
    ExpressionMethods, MysqlConnection, QueryDsl, RunQueryDsl,
    dsl::insert_into,
    r2d2::{ConnectionManager, Pool},
};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub(crate) struct Login {
    email: String,
    password: String,
}

pub(crate) async fn login(
    State(pool): State<Pool<ConnectionManager<MysqlConnection>>>,
    Json(payload): Json<Login>,
) -> impl IntoResponse {
    let connection = &mut pool.get().expect("Could not get connection from pool");

    let Ok((found_id, found_name, password_hash)) = users
        .filter(email.eq(&payload.email))
        .select((id, name, password))
        .get_result::<(i32, String, String)>(connection)
    else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "User not found!" })),
        );
    };

    let Ok(parsed_hash) = PasswordHash::new(&password_hash) else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Error hashing password" })),
        );
    };

    if Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid credentials!" })),
        );
    }

    let mut bytes = [0u8; 88];
    rand_core::OsRng.fill_bytes(&mut bytes);

    let generated_token = URL_SAFE.encode(bytes);
    let now = Utc::now().naive_utc();
    let datetime = now + Duration::hours(24);

    if insert_into(tokens)
        .values((
            token.eq(&generated_token),
            valid_until.eq(datetime),
            user_id.eq(found_id),
        ))
        .execute(connection)
        .is_err()
    {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Error creating new token" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "message": "Login successful!",
            "token": generated_token,
            "name": found_name,
            "email": payload.email,
        })),
    )
}

use crate::schema::users::{dsl::users, id, password, reset_token, token_expiry};
use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{NaiveDateTime, Utc};
use diesel::{
    ExpressionMethods, MysqlConnection, OptionalExtension, QueryDsl, RunQueryDsl,
    dsl::update,
    r2d2::{ConnectionManager, Pool},
};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub(crate) struct ResetPassword {
    token: String,
    password: String,
}

pub(crate) async fn reset_password(
    State(pool): State<Pool<ConnectionManager<MysqlConnection>>>,
    Json(payload): Json<ResetPassword>,
) -> impl IntoResponse {
    let connection = &mut pool.get().expect("Could not get connection from pool");

    let now = Utc::now().naive_utc();
    let Ok(found) = users
        .filter(reset_token.eq(&payload.token))
        .filter(token_expiry.gt(now))
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
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid or expired token!" })),
        );
    };

    let salt = SaltString::generate(&mut OsRng);
    let Ok(password_hash) = Argon2::default().hash_password(payload.password.as_bytes(), &salt)
    else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Internal Server Error" })),
        );
    };

    if update(users.filter(id.eq(found_id)))
        .set((
            password.eq(password_hash.to_string()),
            reset_token.eq(None::<String>),
            token_expiry.eq(None::<NaiveDateTime>),
        ))
        .execute(connection)
        .is_err()
    {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Internal Server Error" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({ "message": "Password successfully updated!" })),
    )
}

use crate::schema::users::{age, dsl::users, gender, name, phone, surname};
use crate::schema::users::{email, password};
use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::response::IntoResponse;
use axum::{Json, extract::State, http::StatusCode};
use diesel::{
    ExpressionMethods, MysqlConnection, QueryDsl, RunQueryDsl,
    dsl::insert_into,
    r2d2::{ConnectionManager, Pool},
};
use email_address::EmailAddress;
use log::trace;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub(crate) struct Signup {
    name: String,
    surname: String,
    email: String,
    password: String,
}

pub(crate) async fn signup(
    State(pool): State<Pool<ConnectionManager<MysqlConnection>>>,
    Json(payload): Json<Signup>,
) -> impl IntoResponse {
    if !EmailAddress::is_valid(payload.email.as_str()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid email address" })),
        );
    }

    let connection = &mut pool.get().expect("Could not get connection from pool");

    if users
        .filter(email.eq(&payload.email))
        .select(email)
        .get_result::<String>(connection)
        .is_ok()
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "User already exists!" })),
        );
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let Ok(password_hash) = argon2.hash_password(payload.password.as_bytes(), &salt) else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Internal Server Error" })),
        );
    };

    if insert_into(users)
        .values((
            name.eq(&payload.name),
            surname.eq(&payload.surname),
            email.eq(&payload.email),
            password.eq(password_hash.to_string()),
            age.eq("20"),
            phone.eq("1234567890"),
            gender.eq("Female"),
        ))
        .execute(connection)
        .is_err()
    {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Internal Server Error" })),
        );
    }

    trace!("{} signed up", payload.email);

    (
        StatusCode::CREATED,
        Json(json!({ "message": "User created successfully!" })),
    )
}

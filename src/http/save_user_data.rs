use crate::models::emergency_contact::EmergencyContact;
use crate::schema::{emergency_contacts, users};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use diesel::{
    Connection, ExpressionMethods, MysqlConnection, OptionalExtension, QueryDsl, RunQueryDsl,
    dsl::{delete, insert_into, update},
    r2d2::{ConnectionManager, Pool},
};
use regex::Regex;
use serde::Deserialize;
use serde_json::json;
use std::sync::LazyLock;

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9]{7,15}$").expect("Could not compile phone pattern")
});

#[derive(Deserialize)]
pub(crate) struct SaveUserData {
    name: String,
    age: String,
    email: String,
    phone: String,
    gender: String,
    #[serde(rename = "emergencyContacts", default)]
    emergency_contacts: Vec<EmergencyContact>,
}

pub(crate) async fn save_user_data(
    State(pool): State<Pool<ConnectionManager<MysqlConnection>>>,
    Json(payload): Json<SaveUserData>,
) -> impl IntoResponse {
    if payload
        .emergency_contacts
        .iter()
        .any(|contact| !PHONE_PATTERN.is_match(&contact.phone))
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid contact phone number" })),
        );
    }

    let connection = &mut pool.get().expect("Could not get connection from pool");

    let Ok(found_id) = users::table
        .filter(users::email.eq(&payload.email))
        .select(users::id)
        .first::<i32>(connection)
        .optional()
    else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Error saving user data" })),
        );
    };

    let Some(found_id) = found_id else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "User not found!" })),
        );
    };

    // Profile fields and the wholesale contact-list replacement commit
    // together; a failed insert must leave the prior contacts in place.
    let saved = connection.transaction::<_, diesel::result::Error, _>(|transaction| {
        update(users::table.filter(users::id.eq(found_id)))
            .set((
                users::name.eq(&payload.name),
                users::age.eq(&payload.age),
                users::phone.eq(&payload.phone),
                users::gender.eq(&payload.gender),
            ))
            .execute(transaction)?;

        delete(emergency_contacts::table.filter(emergency_contacts::user_id.eq(found_id)))
            .execute(transaction)?;

        let rows: Vec<_> = payload
            .emergency_contacts
            .iter()
            .map(|contact| {
                (
                    emergency_contacts::user_id.eq(found_id),
                    emergency_contacts::name.eq(&contact.name),
                    emergency_contacts::phone.eq(&contact.phone),
                    emergency_contacts::relation.eq(&contact.relation),
                )
            })
            .collect();

        insert_into(emergency_contacts::table)
            .values(&rows)
            .execute(transaction)?;

        Ok(())
    });

    if saved.is_err() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Error saving user data" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({ "message": "User data saved successfully!" })),
    )
}

#[cfg(test)]
mod tests {
    use super::PHONE_PATTERN;

    #[test]
    fn phone_pattern_accepts_plain_and_prefixed_numbers() {
        assert!(PHONE_PATTERN.is_match("+15551234567"));
        assert!(PHONE_PATTERN.is_match("1234567890"));
    }

    #[test]
    fn phone_pattern_rejects_malformed_numbers() {
        assert!(!PHONE_PATTERN.is_match(""));
        assert!(!PHONE_PATTERN.is_match("12345"));
        assert!(!PHONE_PATTERN.is_match("call me"));
        assert!(!PHONE_PATTERN.is_match("+1 555 123 4567"));
    }
}

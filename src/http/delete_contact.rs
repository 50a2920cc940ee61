use crate::schema::{emergency_contacts, users};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use diesel::{
    ExpressionMethods, MysqlConnection, OptionalExtension, QueryDsl, RunQueryDsl,
    dsl::delete,
    r2d2::{ConnectionManager, Pool},
};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub(crate) struct DeleteContact {
    email: String,
    #[serde(rename = "contactId")]
    contact_id: Option<i64>,
}

/// Removes one contact by its position in the user's list.
pub(crate) async fn delete_contact(
    State(pool): State<Pool<ConnectionManager<MysqlConnection>>>,
    Json(payload): Json<DeleteContact>,
) -> impl IntoResponse {
    let connection = &mut pool.get().expect("Could not get connection from pool");

    let Ok(found_id) = users::table
        .filter(users::email.eq(&payload.email))
        .select(users::id)
        .first::<i32>(connection)
        .optional()
    else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Internal server error" })),
        );
    };

    let Some(found_id) = found_id else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "User not found" })),
        );
    };

    let Ok(contact_ids) = emergency_contacts::table
        .filter(emergency_contacts::user_id.eq(found_id))
        .order(emergency_contacts::id.asc())
        .select(emergency_contacts::id)
        .load::<i32>(connection)
    else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Internal server error" })),
        );
    };

    let index = match payload.contact_id {
        Some(index) if index >= 0 && (index as usize) < contact_ids.len() => index as usize,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Invalid contact index" })),
            );
        }
    };

    if delete(emergency_contacts::table.filter(emergency_contacts::id.eq(contact_ids[index])))
        .execute(connection)
        .is_err()
    {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Internal server error" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({ "message": "Contact deleted successfully" })),
    )
}

use crate::models::emergency_contact::EmergencyContact;
use crate::models::user::User;
use crate::schema::{emergency_contacts, users};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use diesel::{
    ExpressionMethods, MysqlConnection, OptionalExtension, QueryDsl, RunQueryDsl,
    SelectableHelper,
    r2d2::{ConnectionManager, Pool},
};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub(crate) struct GetUserData {
    email: Option<String>,
}

pub(crate) async fn get_user_data(
    State(pool): State<Pool<ConnectionManager<MysqlConnection>>>,
    Query(query): Query<GetUserData>,
) -> impl IntoResponse {
    let Some(lookup_email) = query.email else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Email is required!" })),
        );
    };

    let connection = &mut pool.get().expect("Could not get connection from pool");

    let Ok(user) = users::table
        .filter(users::email.eq(&lookup_email))
        .select(User::as_select())
        .first::<User>(connection)
        .optional()
    else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Error fetching user data" })),
        );
    };

    let Some(user) = user else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "User not found!" })),
        );
    };

    let Ok(contacts) = emergency_contacts::table
        .filter(emergency_contacts::user_id.eq(user.id))
        .order(emergency_contacts::id.asc())
        .select((
            emergency_contacts::name,
            emergency_contacts::phone,
            emergency_contacts::relation,
        ))
        .load::<EmergencyContact>(connection)
    else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Error fetching user data" })),
        );
    };

    (
        StatusCode::OK,
        Json(json!({
            "name": user.name,
            "age": user.age,
            "email": user.email,
            "phone": user.phone,
            "gender": user.gender,
            "emergencyContacts": contacts,
        })),
    )
}

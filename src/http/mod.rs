use crate::alerts::SosOrchestrator;
use crate::location::LocationStore;
use axum::routing::delete;
use axum::{
    Router,
    routing::{get, post},
};
use diesel::{
    MysqlConnection,
    r2d2::{ConnectionManager, Pool},
};
use log::{error, info};
use std::env;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

mod delete_contact;
mod forgot_password;
mod get_location;
mod get_user_data;
mod login;
mod reset_password;
mod save_user_data;
mod send_live_alert;
mod send_sos;
mod signup;
mod update_location;

/// Shared handles for the alert and location routes.
#[derive(Clone)]
pub struct AlertState {
    pub orchestrator: Arc<SosOrchestrator>,
    pub locations: Arc<dyn LocationStore>,
}

/// Alert dispatch and live-location routes, separated so tests can run
/// them against in-memory collaborators without a database.
pub fn alert_routes(state: AlertState) -> Router {
    Router::new()
        .route("/sendSOS", post(send_sos::send_sos))
        .route("/api/sent-alert", post(send_live_alert::send_live_alert))
        .route("/api/update-location", post(update_location::update_location))
        .route("/api/get-location", get(get_location::get_location))
        .with_state(state)
}

fn account_routes(pool: Pool<ConnectionManager<MysqlConnection>>) -> Router {
    Router::new()
        .route("/signup", post(signup::signup))
        .route("/login", post(login::login))
        .route("/saveUserData", post(save_user_data::save_user_data))
        .route("/getUserData", get(get_user_data::get_user_data))
        .route(
            "/deleteEmergencyContact",
            delete(delete_contact::delete_contact),
        )
        .route("/api/forgot-password", post(forgot_password::forgot_password))
        .route("/api/reset-password", post(reset_password::reset_password))
        .with_state(pool)
}

pub async fn listen(pool: Pool<ConnectionManager<MysqlConnection>>, state: AlertState) {
    let app = alert_routes(state)
        .merge(account_routes(pool))
        .layer(CorsLayer::permissive());

    let port = env::var("PORT").unwrap_or_else(|_| String::from("5000"));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Could not bind HTTP server");

    info!("HTTP server listening on port {port}");

    if let Err(err) = axum::serve(listener, app).await {
        error!("Failed to serve connections: {err:#}");
    }
}

pub mod alerts;
pub mod errors;
pub mod http;
pub mod location;
pub mod models;
pub mod schema;

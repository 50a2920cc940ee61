pub mod emergency_contact;
pub mod live_location;
pub mod user;

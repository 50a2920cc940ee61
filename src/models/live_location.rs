use chrono::{DateTime, Utc};

/// Most recently reported coordinate for a user. Held in memory only:
/// overwritten on every report, never auto-evicted, lost on restart.
#[derive(Clone, Debug, PartialEq)]
pub struct LiveLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub updated_at: DateTime<Utc>,
}

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A person notified when an alert goes out. Uniqueness is not enforced;
/// list order only matters for deterministic output.
#[derive(Queryable, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relation: String,
}

use crate::location::LocationStore;
use crate::models::live_location::LiveLocation;
use async_trait::async_trait;
use chrono::Utc;
use log::trace;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-wide live-location cache. Entries are replaced atomically under
/// the write lock, so readers never observe a partially written entry.
/// No expiry and no persistence: stale entries stay until overwritten.
#[derive(Default)]
pub struct MemoryLocationStore {
    entries: RwLock<HashMap<String, LiveLocation>>,
}

impl MemoryLocationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocationStore for MemoryLocationStore {
    async fn update(&self, email: &str, latitude: f64, longitude: f64) {
        let location = LiveLocation {
            latitude,
            longitude,
            updated_at: Utc::now(),
        };

        self.entries
            .write()
            .await
            .insert(email.to_string(), location);

        trace!("Location updated for {email}");
    }

    async fn get(&self, email: &str) -> Option<LiveLocation> {
        self.entries.read().await.get(email).cloned()
    }
}

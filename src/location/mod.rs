use crate::models::live_location::LiveLocation;
use async_trait::async_trait;

mod memory;

pub use memory::MemoryLocationStore;

/// Key-value store for the most recent reported coordinate per user.
/// Backed by an in-memory map here; the seam exists so a networked cache
/// can replace it without touching the alert core.
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Overwrites any prior entry for `email` and stamps the current time.
    async fn update(&self, email: &str, latitude: f64, longitude: f64);

    /// Returns the most recently written entry, `None` if the user has
    /// never reported a location.
    async fn get(&self, email: &str) -> Option<LiveLocation>;
}

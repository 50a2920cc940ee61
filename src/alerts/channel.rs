use crate::errors::ChannelError;
use async_trait::async_trait;

/// A third-party delivery provider: sends one message to one destination.
/// Failures are reported per destination and must never abort sibling
/// sends; no retries happen at this layer.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    async fn send(&self, destination: &str, body: &str) -> Result<(), ChannelError>;
}

mod alert_error;
mod channel_error;
mod directory_error;

pub use alert_error::AlertError;
pub use channel_error::ChannelError;
pub use directory_error::DirectoryError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Destination number is empty")]
    EmptyDestination,
    #[error("Message body is empty")]
    EmptyBody,
    #[error("Provider rejected the message: {0}")]
    Rejected(String),
    #[error("Could not reach the delivery provider: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ChannelError {
    /// Short classification safe to surface to callers; the full provider
    /// detail stays in the logs.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::EmptyDestination => "invalid destination",
            Self::EmptyBody => "empty message",
            Self::Rejected(_) => "rejected by provider",
            Self::Transport(_) => "provider unreachable",
        }
    }
}

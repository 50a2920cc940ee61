use crate::alerts::channel::NotificationChannel;
use crate::errors::ChannelError;
use async_trait::async_trait;
use log::trace;
use std::env;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01/Accounts";

/// SMS delivery through the Twilio messages API.
pub struct TwilioChannel {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

impl TwilioChannel {
    pub fn new(account_sid: String, auth_token: String, from_number: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            account_sid,
            auth_token,
            from_number,
        }
    }

    /// Reads SID, AUTH_TOKEN and PHONE_NUMBER from the environment.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self::new(
            env::var("SID")?,
            env::var("AUTH_TOKEN")?,
            env::var("PHONE_NUMBER")?,
        ))
    }
}

#[async_trait]
impl NotificationChannel for TwilioChannel {
    async fn send(&self, destination: &str, body: &str) -> Result<(), ChannelError> {
        if destination.is_empty() {
            return Err(ChannelError::EmptyDestination);
        }
        if body.is_empty() {
            return Err(ChannelError::EmptyBody);
        }

        let url = format!("{TWILIO_API_BASE}/{}/Messages.json", self.account_sid);
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("To", destination),
                ("From", self.from_number.as_str()),
                ("Body", body),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ChannelError::Rejected(format!("{status}: {detail}")));
        }

        trace!("SMS sent to {destination}");
        Ok(())
    }
}

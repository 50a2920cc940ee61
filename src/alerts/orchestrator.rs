use crate::alerts::directory::ProfileDirectory;
use crate::alerts::dispatcher::{AlertDispatcher, DispatchReport};
use crate::errors::AlertError;
use crate::location::LocationStore;
use log::info;
use std::sync::Arc;

/// Mode only affects the wording of the default template, never routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AlertMode {
    #[default]
    Standard,
    High,
}

impl AlertMode {
    pub fn from_wire(mode: Option<&str>) -> Self {
        if mode == Some("high") {
            Self::High
        } else {
            Self::Standard
        }
    }
}

pub struct SosRequest {
    pub email: String,
    pub mode: AlertMode,
    pub location_link: Option<String>,
    pub custom_message: Option<String>,
}

/// Entry point of the alert core: resolves the user's profile, builds the
/// message body and hands the fan-out to the dispatcher.
pub struct SosOrchestrator {
    directory: Arc<dyn ProfileDirectory>,
    dispatcher: AlertDispatcher,
    locations: Arc<dyn LocationStore>,
}

impl SosOrchestrator {
    pub fn new(
        directory: Arc<dyn ProfileDirectory>,
        dispatcher: AlertDispatcher,
        locations: Arc<dyn LocationStore>,
    ) -> Self {
        Self {
            directory,
            dispatcher,
            locations,
        }
    }

    pub async fn send_sos(&self, request: SosRequest) -> Result<DispatchReport, AlertError> {
        let profile = self
            .directory
            .find(&request.email)
            .await?
            .ok_or(AlertError::UserNotFound)?;

        // Prefer the link the device sent; fall back to the last reported
        // live location when there is one.
        let link = match request.location_link.filter(|link| !link.is_empty()) {
            Some(link) => Some(link),
            None => self.locations.get(&request.email).await.map(|location| {
                format!(
                    "https://maps.google.com/?q={},{}",
                    location.latitude, location.longitude
                )
            }),
        };

        let body = match request
            .custom_message
            .filter(|message| !message.trim().is_empty())
        {
            Some(custom) => match &link {
                Some(link) => format!("{custom}\n📍 Location: {link}"),
                None => custom,
            },
            None => {
                let heading = match request.mode {
                    AlertMode::High => "🚨 HIGH ALERT! 🚨",
                    AlertMode::Standard => "🚨 SOS ALERT! 🚨",
                };
                match &link {
                    Some(link) => format!("{heading}\nCheck location: {link}"),
                    None => heading.to_string(),
                }
            }
        };

        let report = self.dispatcher.dispatch(&profile.contacts, &body).await?;
        info!(
            "SOS for {} dispatched to {} contact(s), {} failed",
            request.email,
            report.attempted(),
            report.failed()
        );
        Ok(report)
    }

    pub async fn send_live_alert(
        &self,
        email: &str,
        live_location_link: &str,
    ) -> Result<DispatchReport, AlertError> {
        let profile = self
            .directory
            .find(email)
            .await?
            .ok_or(AlertError::UserNotFound)?;

        let body = format!(
            "🚨 {} has triggered a High Alert!\nTrack live: {live_location_link}",
            profile.display_name
        );

        let report = self.dispatcher.dispatch(&profile.contacts, &body).await?;
        info!(
            "Live alert for {email} dispatched to {} contact(s), {} failed",
            report.attempted(),
            report.failed()
        );
        Ok(report)
    }
}

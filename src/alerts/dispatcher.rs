use crate::alerts::channel::NotificationChannel;
use crate::errors::AlertError;
use crate::models::emergency_contact::EmergencyContact;
use log::error;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOutcome {
    Delivered,
    Failed(String),
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ContactOutcome {
    pub contact: EmergencyContact,
    pub outcome: DeliveryOutcome,
}

/// Per-contact outcomes of one fan-out, in contact-list order.
#[derive(Serialize, Clone, Debug)]
pub struct DispatchReport {
    pub outcomes: Vec<ContactOutcome>,
}

impl DispatchReport {
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn delivered(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|entry| entry.outcome == DeliveryOutcome::Delivered)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.delivered()
    }

    /// True iff the contact list was non-empty and every contact was
    /// attempted. Individual delivery failures do not clear this flag;
    /// callers that care inspect `outcomes`.
    pub fn success(&self) -> bool {
        !self.outcomes.is_empty()
    }
}

/// Fans one message out to every emergency contact, one attempt per
/// contact, recording outcomes without short-circuiting on failure.
pub struct AlertDispatcher {
    channel: Arc<dyn NotificationChannel>,
}

impl AlertDispatcher {
    pub fn new(channel: Arc<dyn NotificationChannel>) -> Self {
        Self { channel }
    }

    pub async fn dispatch(
        &self,
        contacts: &[EmergencyContact],
        body: &str,
    ) -> Result<DispatchReport, AlertError> {
        if contacts.is_empty() {
            return Err(AlertError::NoContacts);
        }

        // One independent task per contact; joined in list order so the
        // report is deterministic while sends overlap.
        let mut attempts = Vec::with_capacity(contacts.len());
        for contact in contacts {
            let channel = Arc::clone(&self.channel);
            let destination = contact.phone.clone();
            let body = body.to_owned();

            attempts.push((
                contact.clone(),
                tokio::spawn(async move { channel.send(&destination, &body).await }),
            ));
        }

        let mut outcomes = Vec::with_capacity(attempts.len());
        for (contact, attempt) in attempts {
            let outcome = match attempt.await {
                Ok(Ok(())) => DeliveryOutcome::Delivered,
                Ok(Err(send_error)) => {
                    error!("Could not send alert to {}: {send_error}", contact.phone);
                    DeliveryOutcome::Failed(String::from(send_error.reason()))
                }
                Err(join_error) => {
                    error!("Alert task for {} failed: {join_error}", contact.phone);
                    DeliveryOutcome::Failed(String::from("delivery task failed"))
                }
            };
            outcomes.push(ContactOutcome { contact, outcome });
        }

        Ok(DispatchReport { outcomes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::testing::MockChannel;
    use crate::models::emergency_contact::EmergencyContact;

    fn contact(name: &str, phone: &str) -> EmergencyContact {
        EmergencyContact {
            name: name.to_string(),
            phone: phone.to_string(),
            relation: String::from("friend"),
        }
    }

    #[tokio::test]
    async fn attempts_every_contact_exactly_once() {
        let channel = Arc::new(MockChannel::default());
        let dispatcher = AlertDispatcher::new(channel.clone());
        let contacts = vec![
            contact("Ana", "+15550000001"),
            contact("Bea", "+15550000002"),
            contact("Cal", "+15550000003"),
        ];

        let report = dispatcher.dispatch(&contacts, "SOS").await.unwrap();

        assert_eq!(report.attempted(), 3);
        assert_eq!(channel.sent().len(), 3);
        assert!(report.success());
    }

    #[tokio::test]
    async fn individual_failure_does_not_abort_siblings() {
        let channel = Arc::new(MockChannel::rejecting(&["+15550000002"]));
        let dispatcher = AlertDispatcher::new(channel.clone());
        let contacts = vec![
            contact("Ana", "+15550000001"),
            contact("Bea", "+15550000002"),
            contact("Cal", "+15550000003"),
        ];

        let report = dispatcher.dispatch(&contacts, "SOS").await.unwrap();

        assert_eq!(report.attempted(), 3);
        assert_eq!(report.delivered(), 2);
        assert_eq!(report.failed(), 1);
        assert!(report.success());
        assert_eq!(channel.sent().len(), 3);
    }

    #[tokio::test]
    async fn empty_contact_list_fails_before_any_send() {
        let channel = Arc::new(MockChannel::default());
        let dispatcher = AlertDispatcher::new(channel.clone());

        let result = dispatcher.dispatch(&[], "SOS").await;

        assert!(matches!(result, Err(AlertError::NoContacts)));
        assert!(channel.sent().is_empty());
    }

    #[tokio::test]
    async fn failure_reason_omits_provider_detail() {
        use crate::alerts::channel::NotificationChannel;
        use crate::errors::ChannelError;
        use async_trait::async_trait;

        struct VerboseProvider;

        #[async_trait]
        impl NotificationChannel for VerboseProvider {
            async fn send(&self, _destination: &str, _body: &str) -> Result<(), ChannelError> {
                Err(ChannelError::Rejected(String::from(
                    "401 Unauthorized: {\"code\": 20003, \"more_info\": \"https://provider/errors/20003\"}",
                )))
            }
        }

        let dispatcher = AlertDispatcher::new(Arc::new(VerboseProvider));
        let contacts = vec![contact("Ana", "+15550000001")];

        let report = dispatcher.dispatch(&contacts, "SOS").await.unwrap();

        assert_eq!(
            report.outcomes[0].outcome,
            DeliveryOutcome::Failed(String::from("rejected by provider"))
        );
    }

    #[tokio::test]
    async fn outcomes_follow_contact_list_order() {
        let channel = Arc::new(MockChannel::rejecting(&["+15550000001"]));
        let dispatcher = AlertDispatcher::new(channel);
        let contacts = vec![
            contact("Ana", "+15550000001"),
            contact("Bea", "+15550000002"),
        ];

        let report = dispatcher.dispatch(&contacts, "SOS").await.unwrap();

        assert_eq!(report.outcomes[0].contact.name, "Ana");
        assert!(matches!(
            report.outcomes[0].outcome,
            DeliveryOutcome::Failed(_)
        ));
        assert_eq!(report.outcomes[1].contact.name, "Bea");
        assert_eq!(report.outcomes[1].outcome, DeliveryOutcome::Delivered);
    }
}

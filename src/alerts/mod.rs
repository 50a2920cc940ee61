pub mod channel;
pub mod directory;
pub mod dispatcher;
pub mod orchestrator;
pub mod twilio;

pub use channel::NotificationChannel;
pub use directory::{AlertProfile, MysqlDirectory, ProfileDirectory};
pub use dispatcher::{AlertDispatcher, ContactOutcome, DeliveryOutcome, DispatchReport};
pub use orchestrator::{AlertMode, SosOrchestrator, SosRequest};
pub use twilio::TwilioChannel;

use async_trait::async_trait;
use lifeline::alerts::{
    AlertDispatcher, AlertProfile, NotificationChannel, ProfileDirectory, SosOrchestrator,
};
use lifeline::errors::{ChannelError, DirectoryError};
use lifeline::http::{AlertState, alert_routes};
use lifeline::location::{LocationStore, MemoryLocationStore};
use lifeline::models::emergency_contact::EmergencyContact;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Default)]
struct RecordingChannel {
    sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl NotificationChannel for RecordingChannel {
    async fn send(&self, destination: &str, body: &str) -> Result<(), ChannelError> {
        self.sent
            .lock()
            .unwrap()
            .push((destination.to_string(), body.to_string()));
        Ok(())
    }
}

#[derive(Default)]
struct StaticDirectory {
    profiles: HashMap<String, AlertProfile>,
}

#[async_trait]
impl ProfileDirectory for StaticDirectory {
    async fn find(&self, email: &str) -> Result<Option<AlertProfile>, DirectoryError> {
        Ok(self.profiles.get(email).cloned())
    }
}

fn directory_with_bob() -> StaticDirectory {
    let mut profiles = HashMap::new();
    profiles.insert(
        String::from("a@x.com"),
        AlertProfile {
            display_name: String::from("Alice"),
            contacts: vec![EmergencyContact {
                name: String::from("Bob"),
                phone: String::from("+15551234567"),
                relation: String::from("spouse"),
            }],
        },
    );
    StaticDirectory { profiles }
}

fn state(directory: StaticDirectory, channel: Arc<RecordingChannel>) -> AlertState {
    let locations: Arc<dyn LocationStore> = Arc::new(MemoryLocationStore::new());
    AlertState {
        orchestrator: Arc::new(SosOrchestrator::new(
            Arc::new(directory),
            AlertDispatcher::new(channel),
            Arc::clone(&locations),
        )),
        locations,
    }
}

async fn serve(state: AlertState) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, alert_routes(state)).await.unwrap();
    });

    addr
}

async fn request(addr: SocketAddr, method: &str, path: &str, body: &str) -> String {
    let mut socket = TcpStream::connect(addr).await.unwrap();

    let raw = format!(
        "{method} {path} HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    socket.write_all(raw.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    socket.read_to_end(&mut response).await.unwrap();
    String::from_utf8(response).unwrap()
}

#[tokio::test]
async fn location_update_then_get_round_trip() {
    let addr = serve(state(StaticDirectory::default(), Arc::default())).await;

    let response = request(
        addr,
        "POST",
        "/api/update-location",
        r#"{"email":"b@x.com","latitude":12.5,"longitude":77.6}"#,
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("Location updated"));

    let response = request(addr, "GET", "/api/get-location?email=b@x.com", "").await;
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("12.5"));
    assert!(response.contains("77.6"));
    assert!(response.contains("updatedAt"));
}

#[tokio::test]
async fn get_location_without_prior_update_is_not_found() {
    let addr = serve(state(StaticDirectory::default(), Arc::default())).await;

    let response = request(addr, "GET", "/api/get-location?email=ghost@x.com", "").await;
    assert!(response.starts_with("HTTP/1.1 404"));
    assert!(response.contains("Location not found"));
}

#[tokio::test]
async fn get_location_requires_email() {
    let addr = serve(state(StaticDirectory::default(), Arc::default())).await;

    let response = request(addr, "GET", "/api/get-location", "").await;
    assert!(response.starts_with("HTTP/1.1 400"));
    assert!(response.contains("Email is required"));
}

#[tokio::test]
async fn update_location_requires_all_fields() {
    let addr = serve(state(StaticDirectory::default(), Arc::default())).await;

    let response = request(
        addr,
        "POST",
        "/api/update-location",
        r#"{"email":"b@x.com","latitude":12.5}"#,
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 400"));
    assert!(response.contains("Email, latitude, and longitude are required"));
}

#[tokio::test]
async fn send_sos_reaches_every_contact() {
    let channel = Arc::new(RecordingChannel::default());
    let addr = serve(state(directory_with_bob(), channel.clone())).await;

    let response = request(
        addr,
        "POST",
        "/sendSOS",
        r#"{"email":"a@x.com","customMessage":"Help","locationLink":"http://loc/1"}"#,
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("\"attempted\":1"));
    assert!(response.contains("SOS alerts sent successfully!"));

    let sent = channel.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "+15551234567");
    assert!(sent[0].1.contains("Help"));
    assert!(sent[0].1.contains("http://loc/1"));
}

#[tokio::test]
async fn send_sos_for_unknown_user_is_not_found() {
    let channel = Arc::new(RecordingChannel::default());
    let addr = serve(state(StaticDirectory::default(), channel.clone())).await;

    let response = request(
        addr,
        "POST",
        "/sendSOS",
        r#"{"email":"ghost@x.com","customMessage":"Help"}"#,
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 404"));
    assert!(response.contains("User not found!"));
    assert!(channel.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn sent_alert_requires_email_and_link() {
    let addr = serve(state(directory_with_bob(), Arc::default())).await;

    let response = request(addr, "POST", "/api/sent-alert", r#"{"email":"a@x.com"}"#).await;
    assert!(response.starts_with("HTTP/1.1 400"));
    assert!(response.contains("Email and liveLocationLink are required"));
}

#[tokio::test]
async fn sent_alert_uses_live_tracking_template() {
    let channel = Arc::new(RecordingChannel::default());
    let addr = serve(state(directory_with_bob(), channel.clone())).await;

    let response = request(
        addr,
        "POST",
        "/api/sent-alert",
        r#"{"email":"a@x.com","liveLocationLink":"http://live/9"}"#,
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("Live location alerts sent successfully!"));

    let sent = channel.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].1.contains("Alice has triggered a High Alert!"));
    assert!(sent[0].1.contains("http://live/9"));
}

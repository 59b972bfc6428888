use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::logic::client::ApiClient;
use crate::logic::scanner::{self, ScanError};
use crate::model::{AppState, STATUS_SUCCESS, StatePanel};

pub type SharedState = Arc<Mutex<AppState>>;

/// The backend is re-polled on this cadence for the process lifetime.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Fixed acknowledgment shown once a code is decoded, before the backend
/// has answered.
pub const SCAN_ACK: &str = "QR Code Data Received";

/// Operations the UI dispatches to the controller task.
#[derive(Debug)]
pub enum Command {
    StartScan { cancel: Arc<AtomicBool> },
    SetInterval(String),
    ClearConfig,
}

/// Background task owning the poll loop and executing UI commands.
///
/// Every tick and every command runs as its own spawned task: an
/// overlapping poll and a post-action refresh may race, and the last
/// response to lock the state wins.
pub async fn controller_task(
    state: SharedState,
    client: ApiClient,
    camera_device: String,
    mut commands: UnboundedReceiver<Command>,
) {
    // The first tick fires immediately and doubles as the initial fetch.
    let mut poll = tokio::time::interval(POLL_INTERVAL);
    loop {
        tokio::select! {
            _ = poll.tick() => {
                let (state, client) = (state.clone(), client.clone());
                tokio::spawn(async move { refresh_state(&state, &client).await });
            }
            command = commands.recv() => {
                let Some(command) = command else { break };
                let state = state.clone();
                let client = client.clone();
                match command {
                    Command::StartScan { cancel } => {
                        let device = camera_device.clone();
                        tokio::spawn(run_scan(state, client, device, cancel));
                    }
                    Command::SetInterval(value) => {
                        tokio::spawn(async move { apply_interval(&state, &client, &value).await });
                    }
                    Command::ClearConfig => {
                        tokio::spawn(async move { run_clear(&state, &client).await });
                    }
                }
            }
        }
    }
}

/// Fetches `/get_state` and replaces the rendered view. A non-empty config
/// shows the panel and refreshes the interval input with the backend
/// value; an empty config hides the panel.
pub(crate) async fn refresh_state(state: &SharedState, client: &ApiClient) {
    match client.get_state().await {
        Ok(backend) => {
            let mut app = state.lock().expect("Failed to lock state for rendering");
            if backend.config.is_empty() {
                app.panel = None;
            } else {
                app.interval_input = backend.heartbeat_interval.to_string();
                app.panel = Some(StatePanel::from(backend));
            }
        }
        // Prior rendered state stays as-is; the 5-second cycle retries.
        Err(err) => log::error!("Failed to fetch backend state: {err}"),
    }
}

/// One full scan attempt: decode, acknowledge, submit, stop.
pub(crate) async fn run_scan(
    state: SharedState,
    client: ApiClient,
    device: String,
    cancel: Arc<AtomicBool>,
) {
    match scanner::decode_once(device, cancel).await {
        Ok(text) => {
            state
                .lock()
                .expect("Failed to lock state for scan result")
                .scan_result = Some(SCAN_ACK.to_string());
            submit_qr(&state, &client, &text).await;
            state
                .lock()
                .expect("Failed to lock state for scan stop")
                .scanning = false;
        }
        // Manual stop already reset the flag, and a newer scan may own it.
        Err(ScanError::Cancelled) => {}
        Err(err) => {
            let mut app = state.lock().expect("Failed to lock state for scan error");
            app.scan_result = Some(format!("Error: {err}"));
            app.scanning = false;
        }
    }
}

/// Submits a decoded payload. Only an accepted submission triggers a state
/// refetch; a rejection shows the server message and a transport failure
/// is just logged.
pub(crate) async fn submit_qr(state: &SharedState, client: &ApiClient, text: &str) {
    match client.process_qr(text).await {
        Ok(response) if response.status == STATUS_SUCCESS => refresh_state(state, client).await,
        Ok(response) => {
            let message = response.message.as_deref().unwrap_or("unknown error");
            state
                .lock()
                .expect("Failed to lock state for submit error")
                .scan_result = Some(format!("Error: {message}"));
        }
        Err(err) => log::error!("Failed to submit QR payload: {err}"),
    }
}

/// Sends the interval exactly as typed. On success the displayed interval
/// becomes the server-confirmed value, not the entered one; a rejection
/// raises the modal alert.
pub(crate) async fn apply_interval(state: &SharedState, client: &ApiClient, value: &str) {
    match client.set_heartbeat_interval(value).await {
        Ok(response) if response.status == STATUS_SUCCESS => {
            if let Some(interval) = response.interval {
                let mut app = state.lock().expect("Failed to lock state for interval");
                if let Some(panel) = app.panel.as_mut() {
                    panel.heartbeat_interval = interval;
                }
            }
        }
        Ok(response) => {
            let message = response.message.as_deref().unwrap_or("unknown error");
            state
                .lock()
                .expect("Failed to lock state for interval alert")
                .alert = Some(format!("Error: {message}"));
        }
        Err(err) => log::error!("Failed to set heartbeat interval: {err}"),
    }
}

/// Clears the backend configuration. Any HTTP answer, success or not,
/// triggers the refetch; only a transport failure skips it.
pub(crate) async fn run_clear(state: &SharedState, client: &ApiClient) {
    match client.clear_config().await {
        Ok(()) => refresh_state(state, client).await,
        Err(err) => log::error!("Failed to clear configuration: {err}"),
    }
}

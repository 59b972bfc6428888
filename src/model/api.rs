use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status value the backend uses for accepted requests.
pub const STATUS_SUCCESS: &str = "success";

/// Snapshot returned by `GET /get_state`.
///
/// The heartbeat fields are null until the first heartbeat has run, so they
/// default to `None` and are rendered with a placeholder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendState {
    #[serde(default)]
    pub config: Map<String, Value>,
    #[serde(default)]
    pub heartbeat_interval: f64,
    #[serde(default)]
    pub last_heartbeat_status: Option<String>,
    #[serde(default)]
    pub last_heartbeat_time: Option<String>,
}

/// Body of `POST /process_qr`.
#[derive(Debug, Serialize)]
pub struct ProcessQrRequest<'a> {
    pub data: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessQrResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /set_heartbeat_interval`. The interval travels exactly as
/// entered; the backend does the parsing and validation.
#[derive(Debug, Serialize)]
pub struct SetIntervalRequest<'a> {
    pub interval: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetIntervalResponse {
    pub status: String,
    #[serde(default)]
    pub interval: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

use serde_json::{Map, Value};

use super::api::BackendState;

/// Shared render model. The UI draws it every frame; the controller task
/// overwrites it as responses arrive.
#[derive(Default)]
pub struct AppState {
    /// True while a decode attempt is in flight.
    pub scanning: bool,
    /// Text shown under the scan button: the decode acknowledgment or the
    /// last error.
    pub scan_result: Option<String>,
    /// Current text of the interval input field. Overwritten with the
    /// backend value on every successful poll.
    pub interval_input: String,
    /// Message for the modal alert window, if one is pending.
    pub alert: Option<String>,
    /// State panel content; `None` hides the panel.
    pub panel: Option<StatePanel>,
}

/// Everything the state panel shows. Replaced wholesale on each successful
/// fetch, never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct StatePanel {
    pub config: Map<String, Value>,
    pub heartbeat_interval: f64,
    pub last_heartbeat_status: Option<String>,
    pub last_heartbeat_time: Option<String>,
}

impl StatePanel {
    pub fn config_text(&self) -> String {
        serde_json::to_string_pretty(&self.config).unwrap_or_default()
    }

    pub fn status_text(&self) -> &str {
        self.last_heartbeat_status.as_deref().unwrap_or("N/A")
    }

    pub fn time_text(&self) -> &str {
        self.last_heartbeat_time.as_deref().unwrap_or("N/A")
    }
}

impl From<BackendState> for StatePanel {
    fn from(state: BackendState) -> Self {
        Self {
            config: state.config,
            heartbeat_interval: state.heartbeat_interval,
            last_heartbeat_status: state.last_heartbeat_status,
            last_heartbeat_time: state.last_heartbeat_time,
        }
    }
}

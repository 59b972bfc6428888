use super::api::BackendState;
use super::app_state::*;

fn panel_without_heartbeat() -> StatePanel {
    let config = serde_json::json!({"DEVICE_ID": "jetson-01"});
    StatePanel {
        config: config.as_object().unwrap().clone(),
        heartbeat_interval: 5.0,
        last_heartbeat_status: None,
        last_heartbeat_time: None,
    }
}

#[test]
fn missing_heartbeat_fields_fall_back_to_placeholder() {
    let panel = panel_without_heartbeat();
    assert_eq!(panel.status_text(), "N/A");
    assert_eq!(panel.time_text(), "N/A");
}

#[test]
fn present_heartbeat_fields_are_shown_verbatim() {
    let mut panel = panel_without_heartbeat();
    panel.last_heartbeat_status = Some("Error: timed out".to_string());
    panel.last_heartbeat_time = Some("2026-08-07 10:00:00".to_string());

    assert_eq!(panel.status_text(), "Error: timed out");
    assert_eq!(panel.time_text(), "2026-08-07 10:00:00");
}

#[test]
fn config_text_is_pretty_printed() {
    let panel = panel_without_heartbeat();
    let text = panel.config_text();
    assert!(text.contains("\"DEVICE_ID\": \"jetson-01\""));
    assert!(text.starts_with('{'));
}

#[test]
fn panel_is_built_from_a_backend_snapshot() {
    let state: BackendState = serde_json::from_str(
        r#"{
            "config": {"DEVICE_ID": "jetson-01"},
            "heartbeat_interval": 7.5,
            "last_heartbeat_status": "Success",
            "last_heartbeat_time": "2026-08-07 10:00:00"
        }"#,
    )
    .unwrap();

    let panel = StatePanel::from(state);
    assert_eq!(panel.heartbeat_interval, 7.5);
    assert_eq!(panel.status_text(), "Success");
    assert_eq!(panel.config.len(), 1);
}

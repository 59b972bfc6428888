pub mod api;
pub mod app_state;

pub use api::{BackendState, ProcessQrResponse, STATUS_SUCCESS, SetIntervalResponse};
pub use app_state::{AppState, StatePanel};

#[cfg(test)]
mod app_state_tests;

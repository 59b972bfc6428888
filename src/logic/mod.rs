pub mod client;
pub mod controller;
pub mod scanner;

pub use client::ApiClient;
pub use controller::{Command, POLL_INTERVAL, SCAN_ACK, SharedState, controller_task};
pub use scanner::ScanError;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use eframe::egui;
use eframe::egui::RichText;
use tokio::sync::mpsc::UnboundedSender;

use crate::logic::{Command, SharedState};

pub const SCAN_LABEL_IDLE: &str = "Scan QR Code";
pub const SCAN_LABEL_ACTIVE: &str = "Stop Scanning";

pub struct ProvisionApp {
    pub(crate) state: SharedState,
    commands: UnboundedSender<Command>,
    /// Cancellation token of the scan currently in flight. Replaced on
    /// every start so a stale attempt can never cancel its successor.
    scan_cancel: Arc<AtomicBool>,
    confirm_clear: bool,
}

impl ProvisionApp {
    pub fn from_parts(state: SharedState, commands: UnboundedSender<Command>) -> Self {
        Self {
            state,
            commands,
            scan_cancel: Arc::new(AtomicBool::new(false)),
            confirm_clear: false,
        }
    }

    /// Starts a scan when idle, stops the running one otherwise. The flag
    /// flips under the lock, so the label and container follow on the same
    /// frame without waiting for the decode to settle.
    fn toggle_scan(&mut self) {
        let mut app = self.state.lock().unwrap();
        if app.scanning {
            app.scanning = false;
            self.scan_cancel.store(true, Ordering::Relaxed);
        } else {
            app.scanning = true;
            let cancel = Arc::new(AtomicBool::new(false));
            self.scan_cancel = cancel.clone();
            let _ = self.commands.send(Command::StartScan { cancel });
        }
    }

    pub fn ui_layout(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Device Provisioning");
                ui.add_space(8.0);

                let scanning = self.state.lock().unwrap().scanning;
                let label = if scanning { SCAN_LABEL_ACTIVE } else { SCAN_LABEL_IDLE };
                if ui.button(label).clicked() {
                    self.toggle_scan();
                }

                if scanning {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Point the camera at the provisioning QR code");
                        });
                    });
                }

                {
                    let state_arc = self.state.clone();
                    let mut app = state_arc.lock().unwrap();

                    if let Some(result) = &app.scan_result {
                        ui.label(result.clone());
                    }

                    ui.separator();

                    if let Some(panel) = &app.panel {
                        ui.group(|ui| {
                            ui.strong("Configuration");
                            ui.label(RichText::new(panel.config_text()).monospace());
                            ui.add_space(4.0);
                            ui.label(format!("Heartbeat interval: {}", panel.heartbeat_interval));
                            ui.label(format!("Last heartbeat status: {}", panel.status_text()));
                            ui.label(format!("Last heartbeat time: {}", panel.time_text()));
                        });
                        ui.add_space(8.0);
                    }

                    ui.horizontal(|ui| {
                        ui.label("Heartbeat interval (seconds):");
                        ui.add(
                            egui::TextEdit::singleline(&mut app.interval_input)
                                .desired_width(8.0 * 8.0),
                        );
                        if ui.button("Set Interval").clicked() {
                            let _ = self
                                .commands
                                .send(Command::SetInterval(app.interval_input.clone()));
                        }
                    });

                    ui.add_space(8.0);
                    if ui.button("Clear Configuration").clicked() {
                        self.confirm_clear = true;
                    }
                }

                if self.confirm_clear {
                    egui::Window::new("Confirm Clear")
                        .collapsible(false)
                        .resizable(false)
                        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                        .show(ctx, |ui| {
                            ui.label("Are you sure you want to clear the configuration?");
                            ui.add_space(12.0);
                            ui.horizontal(|ui| {
                                if ui.button("Clear").clicked() {
                                    let _ = self.commands.send(Command::ClearConfig);
                                    self.confirm_clear = false;
                                }
                                if ui.button("Cancel").clicked() {
                                    self.confirm_clear = false;
                                }
                            });
                        });
                }

                // Modal stand-in for a blocking alert; stays up until OK.
                let alert = self.state.lock().unwrap().alert.clone();
                if let Some(message) = alert {
                    egui::Window::new("Heartbeat Interval")
                        .collapsible(false)
                        .resizable(false)
                        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                        .show(ctx, |ui| {
                            ui.label(message);
                            ui.add_space(12.0);
                            if ui.button("OK").clicked() {
                                self.state.lock().unwrap().alert = None;
                            }
                        });
                }
            })
        });
    }
}

impl eframe::App for ProvisionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_layout(ctx);
        ctx.request_repaint_after(Duration::from_millis(1000));
    }
}

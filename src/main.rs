use std::sync::{Arc, Mutex};

use clap::Parser;
use eframe::egui;

use egui_provisioner::app::ProvisionApp;
use egui_provisioner::logic::{ApiClient, controller_task};
use egui_provisioner::model::AppState;

const PROGRAM_TITLE: &str = "QR Provisioning Console";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the device agent backend
    #[arg(short, long, default_value = "http://127.0.0.1:8000")]
    server: String,

    /// V4L2 device used for QR scanning
    #[arg(short, long, default_value = "/dev/video0")]
    camera: String,

    /// Accept self-signed TLS certificates from the backend
    #[arg(short = 'k', long, default_value_t = false)]
    insecure: bool,
}

fn main() -> eframe::Result {
    env_logger::init();

    let args = Args::parse();
    log::info!("Starting {PROGRAM_TITLE} against {}", args.server);

    let client = match ApiClient::new(&args.server, args.insecure) {
        Ok(client) => client,
        Err(err) => {
            log::error!("Failed to build HTTP client: {err}");
            std::process::exit(1);
        }
    };

    let state = Arc::new(Mutex::new(AppState::default()));
    let (commands, command_rx) = tokio::sync::mpsc::unbounded_channel();

    let task_state = state.clone();
    let camera = args.camera;
    std::thread::spawn(move || {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(controller_task(task_state, client, camera, command_rx));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(PROGRAM_TITLE)
            .with_inner_size([460.0, 640.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "egui_provisioner",
        options,
        Box::new(|_cc| Ok(Box::new(ProvisionApp::from_parts(state, commands)))),
    )
}

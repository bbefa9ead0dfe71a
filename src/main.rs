//! Camera Viewfinder CLI
//!
//! Command-line demonstration of the viewfinder lifecycle controller,
//! driving the mock camera provider through the same callback sequence a
//! hosting UI would issue.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use viewfinder::{
    config::FileConfig, controller::ViewfinderController, device::MockProvider,
    preview::SurfaceHandle, storage::PhotoWriter,
};

#[derive(Debug, Parser)]
#[command(name = "viewfinder", version, about = "Camera viewfinder controller demo")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the configured pictures directory.
    #[arg(long)]
    pictures_dir: Option<PathBuf>,

    /// Number of captures in the scripted run.
    #[arg(long, default_value_t = 2)]
    captures: u32,

    /// Keep capturing periodically until Ctrl-C.
    #[arg(long)]
    continuous: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Viewfinder v{}", viewfinder::VERSION);
    info!("This is a demonstration using the mock camera provider");

    let mut config = match args.config {
        Some(path) => match FileConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };
    if let Some(dir) = args.pictures_dir {
        config.storage.pictures_dir = dir;
    }

    let writer = PhotoWriter::new(&config.storage.pictures_dir, &config.storage.file_prefix);
    let mut controller = ViewfinderController::new(MockProvider::new(), config.camera, writer);

    // The hosting UI would issue these callbacks; here they are scripted.
    let surface = SurfaceHandle::new(1, 1080, 1920);
    if let Err(e) = controller.surface_created(surface) {
        eprintln!("Failed to open camera: {}", e);
        std::process::exit(1);
    }

    report("geometry change", controller.surface_changed(1080, 1920));
    info!(state = %controller.state(), "preview configured");

    for _ in 0..args.captures {
        report("capture", controller.capture());
        drain(&mut controller);
    }

    report_torch(controller.toggle_torch());
    report_torch(controller.toggle_torch());

    match controller.switch_facing() {
        Ok(facing) => info!(%facing, "facing switched"),
        Err(e) => warn!(error = %e, "facing switch failed"),
    }
    match controller.switch_facing() {
        Ok(facing) => info!(%facing, "facing switched back"),
        Err(e) => warn!(error = %e, "facing switch failed"),
    }

    if args.continuous {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        if let Err(e) = ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst)) {
            warn!(error = %e, "Ctrl-C handler unavailable, skipping continuous mode");
        } else {
            info!("capturing every second, press Ctrl-C to stop");
            while running.load(Ordering::SeqCst) {
                report("capture", controller.capture());
                drain(&mut controller);
                std::thread::sleep(Duration::from_secs(1));
            }
        }
    }

    controller.surface_destroyed();
    info!(state = %controller.state(), "done");
}

/// Logs a lifecycle outcome; failures are non-fatal.
fn report(operation: &str, result: Result<(), viewfinder::ControllerError>) {
    if let Err(e) = result {
        warn!(error = %e, "{operation} failed");
    }
}

fn report_torch(result: Result<viewfinder::TorchState, viewfinder::ControllerError>) {
    match result {
        Ok(state) => info!(torch = %state, "torch toggled"),
        Err(e) => warn!(error = %e, "torch toggle failed"),
    }
}

/// Pumps pending capture completions and prints their outcomes.
fn drain(controller: &mut ViewfinderController<MockProvider>) {
    for result in controller.process_events() {
        match result {
            Ok(saved) => {
                println!(
                    "Image saved: {} ({} bytes)",
                    saved.path.display(),
                    saved.bytes
                );
            }
            Err(e) => warn!(error = %e, "capture completion failed"),
        }
    }
}

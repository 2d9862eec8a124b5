#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;

use app_core::backend::BackendEventLoop;
use curvecmp::{BackendAppState, Config, EguiApp};

const WINDOW_NAME: &str = "Curve Comparison";
const WINDOW_WIDTH: f32 = 800.0;
const WINDOW_HEIGHT: f32 = 600.0;

fn main() -> eframe::Result {
    env_logger::init();

    // Every argument is a curve file to open on start-up.
    let initial_files: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();

    let config = match Config::from_config_file() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("unable to load config file \".curvecmp\" from home directory: {err}");
            Config::default()
        }
    };

    // start backend loop
    let (command_tx, command_rx) = std::sync::mpsc::channel();
    let eventloop_handle = BackendEventLoop::new(command_rx, BackendAppState::new()).run();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_NAME,
        native_options,
        Box::new(|cc| {
            Ok(Box::new(EguiApp::new(
                cc,
                config,
                command_tx,
                eventloop_handle,
                initial_files,
            )))
        }),
    )
}

mod app;
mod app_dir;
mod config;
mod input;
mod ui;

use eframe::egui;
use tracing::{error, info, warn};

use crate::app::BrotscopeApp;
use crate::config::AppConfig;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load();

    if let Some(threads) = config.worker_threads {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            Ok(()) => info!("Using {threads} render threads"),
            Err(e) => warn!("Failed to size the render pool: {e}"),
        }
    }

    let (explorer, frame) = match app::build_session(&config) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to start: {e}");
            return Err(eframe::Error::AppCreation(Box::new(e)));
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Brotscope")
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Brotscope",
        options,
        Box::new(move |_cc| Ok(Box::new(BrotscopeApp::new(explorer, frame, config)))),
    )
}

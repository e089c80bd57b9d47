mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::CarlotApp;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::load_or_default();
    log::info!("Starting with {} ({} ms latency)", config.source(), config.latency_ms);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Car Lot – Listing Browser",
        options,
        Box::new(|_cc| Ok(Box::new(CarlotApp::new(config)))),
    )
}

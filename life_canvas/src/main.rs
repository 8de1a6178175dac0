// main.rs - Desktop window for the self-restarting Game of Life
// Cells fill the window; click or tap to splash new life

use anyhow::{Result, anyhow};
use eframe::egui;
use life_core::LifeConfig;
use tracing::info;

mod ui;

fn main() -> Result<()> {
    init_tracing();

    // Optional JSON config path as the only argument
    let config = match std::env::args().nth(1) {
        Some(path) => LifeConfig::load(&path)?,
        None => LifeConfig::default(),
    };
    info!(?config, "starting canvas");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(ui::LifeApp::new(config))),
    )
    .map_err(|err| anyhow!("window closed with error: {err}"))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

mod app;
mod charts;
mod color;
mod config;
mod data;
mod export;
mod state;
mod ui;

use anyhow::Context;
use app::LaunchDashApp;
use config::DashConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashConfig::from_env();
    let table = data::loader::load_file(&config.data_path)
        .context("launch records are required at startup")?;
    if table.is_empty() {
        log::warn!("{} has no launch rows; charts will be empty", config.data_path.display());
    }
    let (min, max) = table.payload_bounds();
    log::info!(
        "Loaded {} launches from {} (sites: {:?}, payload {min}..={max} kg)",
        table.len(),
        config.data_path.display(),
        table.sites()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(AppState::new(table), title)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

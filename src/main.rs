mod app;
mod components;
mod diagnostics;
mod state;
mod team;
mod telemetry;

use app::Bootstrap;
use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};
use team::{AppConfig, load_config};

fn main() {
    let (config, warning) = match load_config() {
        Ok(c) => (c, None),
        Err(e) => (
            AppConfig::default(),
            Some(format!("Failed to load config, using defaults: {}", e)),
        ),
    };

    diagnostics::init_tracing(&config.log_filter);
    if let Some(warning) = &warning {
        tracing::warn!("{}", warning);
    }
    tracing::info!(teams = config.teams.len(), "starting teamdesk");

    let window_builder = WindowBuilder::new()
        .with_title("Teams")
        .with_inner_size(LogicalSize::new(520.0, 640.0));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_menu(None).with_window(window_builder))
        .with_context(Bootstrap { config, warning })
        .launch(app::App);
}

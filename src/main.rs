use anyhow::{anyhow, Context};
use eframe::egui;
use tic_tac_toe_history::{Config, GameApp};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        "Starting tic-tac-toe on a {}x{} board",
        config.board_size, config.board_size
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tic-Tac-Toe")
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(GameApp::new(&config)))),
    )
    .map_err(|e| anyhow!("window closed with an error: {e}"))
}

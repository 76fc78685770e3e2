//! Tic-Tac-Toe GUI
//!
//! A graphical interface for two players sharing one screen.

use clap::Parser;
use tictactoe::ui::TicTacToeApp;
use tictactoe::Config;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    let config = Config::parse();
    init_tracing(&config.log_level);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size())
            .with_min_inner_size([640.0, 420.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    tracing::info!(?config, "starting");
    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, &config)))),
    )
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("failed to install log subscriber: {err}");
    }
}

//! Command-line configuration

use clap::Parser;

/// Tic-Tac-Toe with move history, win chances and achievements
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Initial window width in points
    #[clap(long, default_value_t = 900.0)]
    pub width: f32,
    /// Initial window height in points
    #[clap(long, default_value_t = 600.0)]
    pub height: f32,
    /// Start with the achievement tier table visible
    #[clap(long, default_value_t = false)]
    pub show_achievement_info: bool,
    /// Default log filter (RUST_LOG takes precedence)
    #[clap(long, default_value = "info")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
            show_achievement_info: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Window size clamped to the minimum the layout needs
    pub fn window_size(&self) -> [f32; 2] {
        [self.width.max(640.0), self.height.max(420.0)]
    }
}

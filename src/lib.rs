//! Tic-Tac-Toe with move history, win chances and achievements
//!
//! Two players take turns on a 3x3 board. Every position of the current
//! game is kept so play can be rewound and branched, and the results of
//! all games in the session feed a win counter with award tiers.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win/draw detection and achievement tiers
//! - [`eval`]: Win-chance heuristic
//! - [`game`]: Move history and session results
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{game_end, GameOutcome, History, Player, Session};
//!
//! let mut history = History::new();
//! let mut session = Session::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     history = history.play(cell).unwrap();
//!     session = session.record_if_terminal(history.current_board());
//! }
//!
//! assert_eq!(game_end(history.current_board()), Some(GameOutcome::Win(Player::X)));
//! assert_eq!(session.wins(Player::X), 1);
//! ```

pub mod board;
pub mod config;
pub mod eval;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, LINES};
pub use config::Config;
pub use eval::win_chance;
pub use game::{GameRecord, History, PlayError, Session, WinCount};
pub use rules::{achievement, game_end, is_draw, winner, AchievementTier, GameOutcome};

//! Position evaluation for Tic-Tac-Toe
//!
//! Contains:
//! - Win-chance heuristic based on how many lines are still open

pub mod heuristic;

pub use heuristic::{open_lines, win_chance};

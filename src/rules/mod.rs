//! Game rules for Tic-Tac-Toe
//!
//! This module implements:
//! - Win and draw detection
//! - Achievement tiers for accumulated wins

pub mod achievement;
pub mod win;

// Re-exports for convenient access
pub use achievement::{achievement, AchievementTier};
pub use win::{game_end, is_draw, winner, winning_line, GameOutcome};

//! Win and draw detection
//!
//! A game ends when one player fills a line, or when all nine cells are
//! filled without any line. A full board with a completed line is a win.

use crate::board::{Bitboard, Board, Line, Player, LINES, TOTAL_CELLS};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GameOutcome {
    #[display("{_0}")]
    Win(Player),
    #[display("Draw")]
    Draw,
}

impl GameOutcome {
    /// Winning player, `None` for a draw
    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::Draw => None,
        }
    }
}

/// First completed line and its owner, scanning lines in fixed order.
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES.into_iter().find_map(|line| {
        let mask = Bitboard::from_line(line);
        Player::ALL
            .into_iter()
            .find(|&player| board.marks(player).contains(mask))
            .map(|player| (player, line))
    })
}

/// Owner of the first completed line, if any
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

/// True when every cell holds a mark
pub fn is_draw(board: &Board) -> bool {
    board.mark_count() == TOTAL_CELLS
}

/// Classify a board: won, drawn, or still in progress (`None`).
///
/// The winner check comes first, so a full board with a line is a win.
pub fn game_end(board: &Board) -> Option<GameOutcome> {
    if let Some(player) = winner(board) {
        return Some(GameOutcome::Win(player));
    }
    is_draw(board).then_some(GameOutcome::Draw)
}

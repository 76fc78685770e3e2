//! Win-chance heuristic
//!
//! A line is still open for a player when the opponent has no mark on it.
//! The chance is the share of open lines out of all eight, as a whole
//! percent. It ignores whose turn it is and how well the opponent plays,
//! so it measures blocking, not probability.

use crate::board::{Bitboard, Board, Player, LINES};

/// Number of lines `player` could still complete
pub fn open_lines(board: &Board, player: Player) -> usize {
    let opponent = board.marks(player.opponent());
    LINES
        .into_iter()
        .filter(|&line| opponent.is_disjoint(Bitboard::from_line(line)))
        .count()
}

/// Percentage (0-100) of lines still open for `player`, rounded to the
/// nearest whole percent with halves rounded up.
#[must_use]
pub fn win_chance(board: &Board, player: Player) -> u8 {
    let total = LINES.len();
    let open = open_lines(board, player);
    // open <= total, so the result never exceeds 100
    ((open * 100 + total / 2) / total) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell::{Empty as E, O, X};

    #[test]
    fn test_empty_board_is_full_chance() {
        let board = Board::new();
        assert_eq!(win_chance(&board, Player::X), 100);
        assert_eq!(win_chance(&board, Player::O), 100);
    }

    #[test]
    fn test_own_marks_keep_lines_open() {
        let board = Board::from_cells([X, E, E, E, X, E, E, E, E]);
        assert_eq!(open_lines(&board, Player::X), 8);
        assert_eq!(win_chance(&board, Player::X), 100);
    }

    #[test]
    fn test_center_blocks_four_lines() {
        let board = Board::from_cells([E, E, E, E, X, E, E, E, E]);
        assert_eq!(open_lines(&board, Player::O), 4);
        assert_eq!(win_chance(&board, Player::O), 50);
    }

    #[test]
    fn test_three_open_lines_rounds_up() {
        // X still has row 2, column 0 and column 2
        let board = Board::from_cells([X, O, E, E, O, E, E, E, X]);
        assert_eq!(open_lines(&board, Player::X), 3);
        assert_eq!(win_chance(&board, Player::X), 38);
        assert_eq!(win_chance(&board, Player::O), 38);
    }

    #[test]
    fn test_single_open_line_rounds_up() {
        // Only the anti-diagonal is free of X
        let board = Board::from_cells([X, X, E, X, E, E, E, E, X]);
        assert_eq!(open_lines(&board, Player::O), 1);
        assert_eq!(win_chance(&board, Player::O), 13);
    }

    #[test]
    fn test_fully_blocked() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(win_chance(&board, Player::X), 0);
        assert_eq!(win_chance(&board, Player::O), 0);
    }
}

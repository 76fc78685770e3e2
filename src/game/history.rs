//! Move history with branch-on-replay
//!
//! The history keeps every board of the current game, from the empty
//! board at ply 0 to the latest move. A pointer selects the board being
//! shown. Jumping back and then playing drops the boards after the
//! pointer before appending the new one.
//!
//! All operations return a new `History` instead of mutating in place, so
//! a caller commits the whole next state with one assignment.

use crate::board::{Board, Player, Pos, TOTAL_CELLS};
use crate::rules::{game_end, GameOutcome};

/// Why a play was refused. Refused plays leave the history unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlayError {
    #[display("game already over ({outcome})")]
    GameOver { outcome: GameOutcome },
    #[display("cell {cell} is already occupied")]
    Occupied { cell: usize },
    #[display("cell {cell} is outside the board")]
    OutOfRange { cell: usize },
}

/// Board snapshots of one game plus the ply currently shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    boards: Vec<Board>,
    current: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Fresh game: a single empty board at ply 0
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            current: 0,
        }
    }

    /// Same as [`History::new`], named for the reset action
    pub fn reset() -> Self {
        Self::new()
    }

    /// Board at the current ply
    #[inline]
    pub fn current_board(&self) -> &Board {
        &self.boards[self.current]
    }

    /// Index of the ply currently shown
    #[inline]
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Number of recorded boards, including the empty start
    #[inline]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// All recorded boards in ply order
    #[inline]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Player whose mark the next play places
    #[inline]
    pub fn next_player(&self) -> Player {
        Player::for_ply(self.current)
    }

    /// Outcome of the current board, `None` while in progress
    pub fn outcome(&self) -> Option<GameOutcome> {
        game_end(self.current_board())
    }

    /// Cell filled by the move that produced the current board
    pub fn last_move(&self) -> Option<Pos> {
        let previous = self.boards.get(self.current.checked_sub(1)?)?;
        self.current_board().changed_cell(previous)
    }

    /// Place the current player's mark on `cell` (row-major index 0-8).
    ///
    /// Boards after the current ply are discarded before the new board is
    /// appended, and the pointer moves to the new last board.
    pub fn play(&self, cell: usize) -> Result<History, PlayError> {
        if let Some(outcome) = self.outcome() {
            return Err(PlayError::GameOver { outcome });
        }
        let pos = Pos::from_index(cell).ok_or(PlayError::OutOfRange { cell })?;
        let board = self.current_board();
        if !board.is_empty(pos) {
            return Err(PlayError::Occupied { cell });
        }

        let next_board = board.with_mark(pos, self.next_player());
        let mut boards = Vec::with_capacity(TOTAL_CELLS + 1);
        boards.extend_from_slice(&self.boards[..=self.current]);
        boards.push(next_board);

        Ok(History {
            current: boards.len() - 1,
            boards,
        })
    }

    /// Show ply `ply` without touching the recorded boards.
    ///
    /// `ply` must be below [`History::len`]; in release builds an
    /// out-of-range ply leaves the pointer where it was.
    #[must_use]
    pub fn jump_to(&self, ply: usize) -> History {
        debug_assert!(ply < self.boards.len(), "ply {ply} out of range");
        if ply >= self.boards.len() {
            return self.clone();
        }
        History {
            boards: self.boards.clone(),
            current: ply,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn play_all(cells: &[usize]) -> History {
        cells
            .iter()
            .fold(History::new(), |history, &cell| history.play(cell).unwrap())
    }

    #[test]
    fn test_new_history() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_move(), 0);
        assert_eq!(history.current_board(), &Board::new());
        assert_eq!(history.next_player(), Player::X);
        assert_eq!(history.last_move(), None);
    }

    #[test]
    fn test_players_alternate() {
        let history = play_all(&[4, 0]);
        let board = history.current_board();
        assert_eq!(board.get(Pos::new(1, 1)), Cell::X);
        assert_eq!(board.get(Pos::new(0, 0)), Cell::O);
        assert_eq!(history.next_player(), Player::X);
        assert_eq!(history.last_move(), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_each_ply_changes_one_cell() {
        let history = play_all(&[4, 0, 8, 2, 6]);
        for pair in history.boards().windows(2) {
            assert!(pair[1].changed_cell(&pair[0]).is_some());
            assert_eq!(pair[1].mark_count(), pair[0].mark_count() + 1);
        }
    }

    #[test]
    fn test_play_occupied_is_rejected() {
        let history = play_all(&[4]);
        let err = history.play(4).unwrap_err();
        assert_eq!(err, PlayError::Occupied { cell: 4 });
        // The original value is untouched
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_move(), 1);
    }

    #[test]
    fn test_play_out_of_range_is_rejected() {
        let history = History::new();
        assert_eq!(history.play(9), Err(PlayError::OutOfRange { cell: 9 }));
    }

    #[test]
    fn test_play_after_win_is_rejected() {
        let history = play_all(&[0, 3, 1, 4, 2]);
        assert_eq!(history.outcome(), Some(GameOutcome::Win(Player::X)));
        assert_eq!(
            history.play(8),
            Err(PlayError::GameOver {
                outcome: GameOutcome::Win(Player::X)
            })
        );
    }

    #[test]
    fn test_jump_keeps_boards() {
        let history = play_all(&[0, 1, 2, 3]);
        let jumped = history.jump_to(2);
        assert_eq!(jumped.len(), 5);
        assert_eq!(jumped.current_move(), 2);
        assert_eq!(jumped.current_board(), &history.boards()[2]);
        assert_eq!(jumped.next_player(), Player::X);
    }

    #[test]
    fn test_play_after_jump_truncates() {
        let history = play_all(&[0, 1, 2, 3]);
        assert_eq!(history.len(), 5);

        let branched = history.jump_to(2).play(8).unwrap();
        assert_eq!(branched.len(), 4);
        assert_eq!(branched.current_move(), 3);
        assert_eq!(&branched.boards()[..3], &history.boards()[..3]);
        assert_eq!(branched.current_board().get(Pos::new(2, 2)), Cell::X);
    }

    #[test]
    fn test_jump_back_from_finished_game_reopens_play() {
        let history = play_all(&[0, 3, 1, 4, 2]);
        let rewound = history.jump_to(4);
        assert_eq!(rewound.outcome(), None);
        let replayed = rewound.play(8).unwrap();
        assert_eq!(replayed.len(), 6);
        assert_eq!(replayed.outcome(), None);
    }

    #[test]
    fn test_reset() {
        let history = play_all(&[0, 3, 1]);
        let fresh = History::reset();
        assert_eq!(fresh, History::new());
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh.current_move(), 0);
        assert_ne!(history, fresh);
    }
}

//! Results of every finished game in this session
//!
//! The session outlives individual games: resetting the board starts a new
//! game but keeps the result log and the win totals.

use crate::board::{Board, Player};
use crate::rules::{achievement, game_end, AchievementTier, GameOutcome};

/// One finished game, numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Game {game_number} → {}", outcome_text(*outcome))]
pub struct GameRecord {
    pub game_number: usize,
    pub outcome: GameOutcome,
}

fn outcome_text(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Win(player) => format!("{player} won"),
        GameOutcome::Draw => "Draw".to_string(),
    }
}

/// Wins per player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WinCount {
    x: u32,
    o: u32,
}

impl WinCount {
    #[inline]
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Copy with one more win for `player`
    #[must_use]
    pub fn incremented(self, player: Player) -> WinCount {
        let mut next = self;
        match player {
            Player::X => next.x = next.x.saturating_add(1),
            Player::O => next.o = next.o.saturating_add(1),
        }
        next
    }
}

/// Result log and win totals
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    results: Vec<GameRecord>,
    wins: WinCount,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finished games in the order they ended
    #[inline]
    pub fn results(&self) -> &[GameRecord] {
        &self.results
    }

    #[inline]
    pub fn wins(&self, player: Player) -> u32 {
        self.wins.get(player)
    }

    /// Current award tier for `player`
    pub fn achievement(&self, player: Player) -> AchievementTier {
        achievement(self.wins(player))
    }

    /// Log `outcome` as the next game and credit the winner
    #[must_use]
    pub fn record(&self, outcome: GameOutcome) -> Session {
        let mut results = self.results.clone();
        results.push(GameRecord {
            game_number: self.results.len() + 1,
            outcome,
        });
        let wins = match outcome.winner() {
            Some(player) => self.wins.incremented(player),
            None => self.wins,
        };
        Session { results, wins }
    }

    /// Record the game if `board` is terminal; otherwise return an
    /// unchanged copy. Call once per play that produced `board`.
    #[must_use]
    pub fn record_if_terminal(&self, board: &Board) -> Session {
        match game_end(board) {
            Some(outcome) => self.record(outcome),
            None => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell::{Empty as E, O, X};

    #[test]
    fn test_ongoing_board_not_recorded() {
        let session = Session::new();
        let board = Board::from_cells([X, O, E, E, E, E, E, E, E]);
        assert_eq!(session.record_if_terminal(&board), session);
    }

    #[test]
    fn test_win_recorded() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        let session = Session::new().record_if_terminal(&board);

        assert_eq!(
            session.results(),
            &[GameRecord {
                game_number: 1,
                outcome: GameOutcome::Win(Player::X)
            }]
        );
        assert_eq!(session.wins(Player::X), 1);
        assert_eq!(session.wins(Player::O), 0);
    }

    #[test]
    fn test_draw_recorded_without_wins() {
        let draw = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        let session = Session::new()
            .record(GameOutcome::Win(Player::O))
            .record_if_terminal(&draw);

        let last = session.results().last().unwrap();
        assert_eq!(last.game_number, 2);
        assert_eq!(last.outcome, GameOutcome::Draw);
        assert_eq!(session.wins(Player::O), 1);
        assert_eq!(session.wins(Player::X), 0);
    }

    #[test]
    fn test_achievement_follows_wins() {
        let session = (0..5).fold(Session::new(), |s, _| s.record(GameOutcome::Win(Player::O)));
        assert_eq!(session.achievement(Player::O), AchievementTier::Bronze);
        assert_eq!(session.achievement(Player::X), AchievementTier::Unranked);
        assert_eq!(session.results().len(), 5);
    }

    #[test]
    fn test_record_labels() {
        let session = Session::new()
            .record(GameOutcome::Win(Player::X))
            .record(GameOutcome::Draw);
        let labels: Vec<String> = session.results().iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["Game 1 → X won", "Game 2 → Draw"]);
    }
}

//! Game state management for the Tic-Tac-Toe GUI
//!
//! `GameState` owns the history of the current game and the session
//! totals. Every event handler computes the next values and commits them
//! in one assignment; everything shown on screen is derived on demand.

use crate::board::{Board, Line, Player, Pos};
use crate::eval::win_chance;
use crate::game::{GameRecord, History, PlayError, Session};
use crate::rules::{winning_line, AchievementTier, GameOutcome};
use tracing::instrument;

/// Status line for the board being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    #[display("Winner: {_0}")]
    Winner(Player),
    #[display("Draw 🤝")]
    Draw,
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

/// One entry of the move-jump list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    pub ply: usize,
    pub label: String,
    pub is_current: bool,
}

/// Main game state
#[derive(Debug, Clone, Default)]
pub struct GameState {
    history: History,
    session: Session,
    pub show_achievement_info: bool,
}

impl GameState {
    pub fn new(show_achievement_info: bool) -> Self {
        Self {
            show_achievement_info,
            ..Self::default()
        }
    }

    /// Place the current player's mark at `pos`.
    ///
    /// A refused play changes nothing. A play that ends the game is
    /// recorded in the session exactly once, here.
    #[instrument(level = "debug", skip(self), fields(ply = self.history.current_move()))]
    pub fn try_play(&mut self, pos: Pos) -> Result<(), PlayError> {
        let cell = pos.to_index();
        let player = self.history.next_player();
        let history = self.history.play(cell)?;
        tracing::debug!(%player, cell, ply = history.current_move(), "move played");

        let session = self.session.record_if_terminal(history.current_board());
        if session.results().len() != self.session.results().len() {
            if let Some(record) = session.results().last() {
                tracing::info!(
                    game = record.game_number,
                    outcome = %record.outcome,
                    wins_x = session.wins(Player::X),
                    wins_o = session.wins(Player::O),
                    "game finished"
                );
            }
        }

        self.history = history;
        self.session = session;
        Ok(())
    }

    /// Click handler: refused plays are logged and otherwise ignored
    pub fn play(&mut self, pos: Pos) {
        if let Err(err) = self.try_play(pos) {
            tracing::debug!(%err, "move ignored");
        }
    }

    /// Show an earlier (or later) ply of the current game
    #[instrument(level = "debug", skip(self))]
    pub fn jump_to(&mut self, ply: usize) {
        tracing::debug!(from = self.history.current_move(), to = ply, "jump");
        self.history = self.history.jump_to(ply);
    }

    /// Step one ply back, if there is one
    pub fn step_back(&mut self) {
        if let Some(ply) = self.history.current_move().checked_sub(1) {
            self.jump_to(ply);
        }
    }

    /// Step one ply forward, if there is one
    pub fn step_forward(&mut self) {
        let ply = self.history.current_move() + 1;
        if ply < self.history.len() {
            self.jump_to(ply);
        }
    }

    /// Start a new game; session results are kept
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        tracing::debug!(games = self.session.results().len(), "new game");
        self.history = History::reset();
    }

    pub fn toggle_achievement_info(&mut self) {
        self.show_achievement_info = !self.show_achievement_info;
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.history.current_board()
    }

    pub fn is_game_over(&self) -> bool {
        self.history.outcome().is_some()
    }

    pub fn status(&self) -> Status {
        match self.history.outcome() {
            Some(GameOutcome::Win(player)) => Status::Winner(player),
            Some(GameOutcome::Draw) => Status::Draw,
            None => Status::NextPlayer(self.history.next_player()),
        }
    }

    /// Win chance (percent) for X and O on the board being shown
    pub fn win_chances(&self) -> [(Player, u8); 2] {
        Player::ALL.map(|player| (player, win_chance(self.board(), player)))
    }

    pub fn winning_line(&self) -> Option<Line> {
        winning_line(self.board()).map(|(_, line)| line)
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last_move()
    }

    /// Jump targets, one per recorded ply
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let current = self.history.current_move();
        (0..self.history.boards().len())
            .map(|ply| MoveEntry {
                ply,
                label: if ply == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{ply}")
                },
                is_current: ply == current,
            })
            .collect()
    }

    pub fn results(&self) -> &[GameRecord] {
        self.session.results()
    }

    pub fn wins(&self, player: Player) -> u32 {
        self.session.wins(player)
    }

    pub fn achievement(&self, player: Player) -> AchievementTier {
        self.session.achievement(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_cells(state: &mut GameState, cells: &[usize]) {
        for &cell in cells {
            state.try_play(Pos::from_index(cell).unwrap()).unwrap();
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(false);
        assert_eq!(state.status(), Status::NextPlayer(Player::X));
        assert_eq!(state.win_chances(), [(Player::X, 100), (Player::O, 100)]);
        assert_eq!(state.move_list().len(), 1);
        assert!(state.results().is_empty());
        assert_eq!(state.achievement(Player::X), AchievementTier::Unranked);
    }

    #[test]
    fn test_x_wins_top_row() {
        let mut state = GameState::default();
        play_cells(&mut state, &[0, 3, 1, 4, 2]);

        assert_eq!(state.status(), Status::Winner(Player::X));
        assert_eq!(state.winning_line(), Some([0, 1, 2]));
        assert_eq!(
            state.results(),
            &[GameRecord {
                game_number: 1,
                outcome: GameOutcome::Win(Player::X)
            }]
        );
        assert_eq!(state.wins(Player::X), 1);
        assert_eq!(state.wins(Player::O), 0);
    }

    #[test]
    fn test_draw_game() {
        let mut state = GameState::default();
        // X: 0 2 3 7 8, O: 1 4 5 6
        play_cells(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(state.status(), Status::Draw);
        assert_eq!(state.status().to_string(), "Draw 🤝");
        assert_eq!(state.results()[0].outcome, GameOutcome::Draw);
        assert_eq!(state.wins(Player::X), 0);
        assert_eq!(state.wins(Player::O), 0);
    }

    #[test]
    fn test_moves_after_game_over_are_ignored() {
        let mut state = GameState::default();
        play_cells(&mut state, &[0, 3, 1, 4, 2]);
        let before = state.history().clone();

        state.play(Pos::new(2, 2));
        assert_eq!(state.history(), &before);
        // No duplicate record for the same finished game
        assert_eq!(state.results().len(), 1);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut state = GameState::default();
        play_cells(&mut state, &[4]);
        let before = state.history().clone();

        assert!(state.try_play(Pos::new(1, 1)).is_err());
        state.play(Pos::new(1, 1));
        assert_eq!(state.history(), &before);
    }

    #[test]
    fn test_reset_keeps_session() {
        let mut state = GameState::default();
        play_cells(&mut state, &[0, 3, 1, 4, 2]);
        state.reset();

        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history().current_move(), 0);
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.wins(Player::X), 1);

        // Second game: O wins the middle column
        play_cells(&mut state, &[0, 1, 2, 4, 3, 7]);
        assert_eq!(state.status(), Status::Winner(Player::O));
        assert_eq!(state.results()[1].game_number, 2);
        assert_eq!(state.wins(Player::O), 1);
    }

    #[test]
    fn test_jump_then_play_branches() {
        let mut state = GameState::default();
        play_cells(&mut state, &[0, 1, 2, 3]);
        state.jump_to(2);
        assert_eq!(state.status(), Status::NextPlayer(Player::X));

        state.play(Pos::new(2, 2));
        assert_eq!(state.history().len(), 4);
        assert_eq!(state.last_move(), Some(Pos::new(2, 2)));
    }

    #[test]
    fn test_step_back_and_forward() {
        let mut state = GameState::default();
        play_cells(&mut state, &[4, 0]);

        state.step_forward();
        assert_eq!(state.history().current_move(), 2);
        state.step_back();
        state.step_back();
        state.step_back();
        assert_eq!(state.history().current_move(), 0);
        state.step_forward();
        assert_eq!(state.history().current_move(), 1);
    }

    #[test]
    fn test_move_list_labels() {
        let mut state = GameState::default();
        play_cells(&mut state, &[4, 0]);
        state.jump_to(1);

        let list = state.move_list();
        let labels: Vec<&str> = list.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Go to game start", "Go to move #1", "Go to move #2"]);
        let current: Vec<usize> = list
            .iter()
            .filter(|m| m.is_current)
            .map(|m| m.ply)
            .collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn test_rewinding_finished_game_branches_into_new_game() {
        let mut state = GameState::default();
        play_cells(&mut state, &[0, 3, 1, 4, 2]);

        // Ply 4 is before X completed the top row
        state.jump_to(4);
        assert!(!state.is_game_over());
        play_cells(&mut state, &[8, 5]);
        assert_eq!(state.status(), Status::Winner(Player::O));

        assert_eq!(
            state.results(),
            &[
                GameRecord {
                    game_number: 1,
                    outcome: GameOutcome::Win(Player::X)
                },
                GameRecord {
                    game_number: 2,
                    outcome: GameOutcome::Win(Player::O)
                },
            ]
        );
        assert_eq!(state.wins(Player::X), 1);
        assert_eq!(state.wins(Player::O), 1);

        // Back onto the finished board: play is refused again
        state.jump_to(4);
        state.jump_to(6);
        assert!(state.is_game_over());
        let before = state.history().clone();
        state.play(Pos::new(0, 2));
        assert_eq!(state.history(), &before);
        assert_eq!(state.results().len(), 2);
    }

    #[test]
    fn test_toggle_achievement_info() {
        let mut state = GameState::new(true);
        state.toggle_achievement_info();
        assert!(!state.show_achievement_info);
    }
}

//! Board rendering for the Tic-Tac-Toe GUI

use crate::board::{Board, Line, Player, Pos, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid area (board without margin)
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 120.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        next_player: Player,
        last_move: Option<Pos>,
        winning_line: Option<Line>,
        game_over: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(3.0 * 40.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        painter.rect_filled(response.rect, CornerRadius::same(8), BOARD_BG);
        self.grid_rect = response.rect.shrink(BOARD_MARGIN);

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    if board.is_empty(pos) {
                        self.draw_hover_preview(&painter, pos, next_player);
                        if response.clicked() {
                            clicked_pos = Some(pos);
                        }
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the two inner vertical and horizontal lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let rect = self.grid_rect;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [
                    Pos2::new(rect.min.x + offset, rect.min.y),
                    Pos2::new(rect.min.x + offset, rect.max.y),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    Pos2::new(rect.min.x, rect.min.y + offset),
                    Pos2::new(rect.max.x, rect.min.y + offset),
                ],
                stroke,
            );
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (pos, cell) in Pos::all().zip(board.cells()) {
            if let Some(player) = cell.player() {
                self.draw_mark(painter, pos, player, mark_color(player));
            }
        }
    }

    /// Draw a single X or O
    fn draw_mark(&self, painter: &Painter, pos: Pos, player: Player, color: egui::Color32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MARK_RADIUS_RATIO;
        let stroke = Stroke::new(MARK_STROKE_WIDTH, color);

        match player {
            Player::X => {
                let d = Vec2::splat(radius);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment(
                    [center + Vec2::new(-radius, radius), center + Vec2::new(radius, -radius)],
                    stroke,
                );
            }
            Player::O => {
                painter.circle_stroke(center, radius, stroke);
            }
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let cell = self.cell_rect(pos);
        let corner = cell.left_top() + Vec2::splat(LAST_MOVE_MARKER_RADIUS * 2.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight through the three cells
    fn draw_winning_line(&self, painter: &Painter, line: Line) {
        let stroke = Stroke::new(6.0, WIN_HIGHLIGHT);
        let cells = line.map(|idx| Pos::from_index(idx).map(|pos| self.board_to_screen(pos)));

        if let [Some(start), _, Some(end)] = cells {
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw a faded mark where the next play would land
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, next_player: Player) {
        painter.rect_filled(self.cell_rect(pos).shrink(4.0), CornerRadius::same(4), hover_valid());
        self.draw_mark(painter, pos, next_player, mark_color(next_player).gamma_multiply(0.35));
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        let size = BOARD_SIZE as i32;
        if (0..size).contains(&col) && (0..size).contains(&row) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the center of its cell on screen
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}


//! Immutable 3x3 board snapshot

use super::bitboard::Bitboard;
use super::{Cell, Player, Pos, TOTAL_CELLS};

/// Game board. A move yields a new `Board`; recorded snapshots never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// X marks bitboard
    x: Bitboard,
    /// O marks bitboard
    o: Bitboard,
}

impl Board {
    pub const fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    /// Build a board from nine cells in row-major order
    #[cfg(test)]
    pub(crate) fn from_cells(cells: [Cell; TOTAL_CELLS]) -> Self {
        let mut board = Self::new();
        for (pos, cell) in Pos::all().zip(cells) {
            match cell {
                Cell::X => board.x.set(pos),
                Cell::O => board.o.set(pos),
                Cell::Empty => {}
            }
        }
        board
    }

    /// Nine cells in row-major order
    pub fn cells(&self) -> [Cell; TOTAL_CELLS] {
        let mut cells = [Cell::Empty; TOTAL_CELLS];
        for pos in Pos::all() {
            cells[pos.to_index()] = self.get(pos);
        }
        cells
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.x.get(pos) {
            Cell::X
        } else if self.o.get(pos) {
            Cell::O
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.x.get(pos) && !self.o.get(pos)
    }

    /// Copy of this board with `player`'s mark at `pos`.
    /// Callers check the cell is empty first.
    #[must_use]
    pub fn with_mark(&self, pos: Pos, player: Player) -> Board {
        debug_assert!(self.is_empty(pos), "cell {} already occupied", pos.to_index());
        let mut next = *self;
        match player {
            Player::X => next.x.set(pos),
            Player::O => next.o.set(pos),
        }
        next
    }

    /// Get bitboard for a player
    #[inline]
    pub fn marks(&self, player: Player) -> Bitboard {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        (self.x.count() + self.o.count()) as usize
    }

    /// The single cell that differs between two boards, if exactly one does
    pub fn changed_cell(&self, previous: &Board) -> Option<Pos> {
        let mut changed = Pos::all().filter(|&pos| self.get(pos) != previous.get(pos));
        let first = changed.next()?;
        changed.next().is_none().then_some(first)
    }
}

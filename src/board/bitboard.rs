//! Bitboard implementation for fast line matching

use super::{Line, Pos};

/// One bit per cell, bit `i` is cell index `i`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u16,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Mask covering the three cells of a line
    pub const fn from_line(line: Line) -> Self {
        Self {
            bits: (1 << line[0]) | (1 << line[1]) | (1 << line[2]),
        }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1 << pos.to_index();
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// True if every bit of `mask` is also set here
    #[inline]
    pub fn contains(&self, mask: Bitboard) -> bool {
        self.bits & mask.bits == mask.bits
    }

    /// True if no bit of `mask` is set here
    #[inline]
    pub fn is_disjoint(&self, mask: Bitboard) -> bool {
        self.bits & mask.bits == 0
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }
}

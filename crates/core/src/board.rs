//! Board module - mines, hints and decoys
//!
//! The board is a square grid stored as flat row-major vectors. It is generated
//! once from a random source and never changes afterwards; per-cell user and
//! animation state lives in [`crate::GameState`].
//!
//! Generation:
//! 1. One draw in `[0, 100)` per cell, row-major. Draws below `MINE_CHANCE`
//!    become mines, except in the outer `MINE_FREE_BORDER` rings.
//! 2. Every mine draws four signal values (down, up, right, left) and adds each
//!    to the matching orthogonal neighbour's accumulator if that neighbour is not
//!    a mine.
//! 3. Accumulators above `DECOY_THRESHOLD` mark decoys.
//! 4. Hints count mines in the bounds-checked 3x3 block around a cell,
//!    including the cell itself.

use crate::rng::RandomSource;
use crate::types::{CellPos, DECOY_THRESHOLD, MINE_CHANCE, MINE_FREE_BORDER};

/// Orthogonal neighbour offsets in decoy draw order: down, up, right, left.
const DECOY_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A generated board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    mines: Vec<bool>,
    decoys: Vec<bool>,
    hints: Vec<u8>,
}

impl Board {
    /// Generate a board of side `size`.
    pub fn setup<R: RandomSource + ?Sized>(size: usize, rng: &mut R) -> Self {
        let len = size * size;

        // Every cell draws, border cells included, so the sequence of draws
        // does not depend on the border width.
        let mut mines = vec![false; len];
        for (i, mine) in mines.iter_mut().enumerate() {
            let draw = rng.percent();
            let pos = CellPos::from_index(i, size);
            *mine = draw < MINE_CHANCE && Self::is_interior(pos, size);
        }

        Self::from_mines(size, mines, rng)
    }

    /// Build a board from an explicit mine layout, drawing decoy signals from `rng`.
    ///
    /// `mines` is row-major and must hold `size * size` entries. Mines are taken
    /// as given, border rings included.
    pub fn from_mines<R: RandomSource + ?Sized>(size: usize, mines: Vec<bool>, rng: &mut R) -> Self {
        assert_eq!(mines.len(), size * size, "mine layout does not match board size");

        let mut board = Self {
            size,
            mines,
            decoys: vec![false; size * size],
            hints: vec![0; size * size],
        };

        let mut signal = vec![0u32; size * size];
        for i in 0..board.mines.len() {
            if !board.mines[i] {
                continue;
            }
            let pos = CellPos::from_index(i, size);
            for (dr, dc) in DECOY_DIRECTIONS {
                let draw = rng.percent();
                if let Some(n) = board.offset(pos, dr, dc) {
                    let ni = n.index(size);
                    if !board.mines[ni] {
                        signal[ni] += draw;
                    }
                }
            }
        }
        for (decoy, acc) in board.decoys.iter_mut().zip(&signal) {
            *decoy = *acc > DECOY_THRESHOLD;
        }

        for i in 0..board.hints.len() {
            board.hints[i] = board.count_block(CellPos::from_index(i, size));
        }

        board
    }

    /// True when `pos` is outside the mine-free border rings.
    pub fn is_interior(pos: CellPos, size: usize) -> bool {
        let lo = MINE_FREE_BORDER;
        let hi = size.saturating_sub(MINE_FREE_BORDER);
        (lo..hi).contains(&pos.row) && (lo..hi).contains(&pos.col)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn is_mine(&self, pos: CellPos) -> bool {
        self.contains(pos) && self.mines[pos.index(self.size)]
    }

    pub fn is_decoy(&self, pos: CellPos) -> bool {
        self.contains(pos) && self.decoys[pos.index(self.size)]
    }

    /// Mine count of the 3x3 block centred on `pos` (0 when out of range).
    pub fn hint(&self, pos: CellPos) -> u8 {
        if !self.contains(pos) {
            return 0;
        }
        self.hints[pos.index(self.size)]
    }

    /// Mines and decoys both draw a sprite.
    pub fn draws_sprite(&self, pos: CellPos) -> bool {
        self.is_mine(pos) || self.is_decoy(pos)
    }

    pub fn mine_count(&self) -> usize {
        self.mines.iter().filter(|&&m| m).count()
    }

    /// Mine positions in row-major order.
    pub fn mines(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.mines
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(move |(i, _)| CellPos::from_index(i, self.size))
    }

    /// Decoy positions in row-major order.
    pub fn decoys(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.decoys
            .iter()
            .enumerate()
            .filter(|(_, d)| **d)
            .map(move |(i, _)| CellPos::from_index(i, self.size))
    }

    fn offset(&self, pos: CellPos, dr: isize, dc: isize) -> Option<CellPos> {
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let n = CellPos::new(row, col);
        self.contains(n).then_some(n)
    }

    fn count_block(&self, pos: CellPos) -> u8 {
        let mut count = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if let Some(n) = self.offset(pos, dr, dc) {
                    if self.mines[n.index(self.size)] {
                        count += 1;
                    }
                }
            }
        }
        count
    }
}

use crate::errors::InvalidError;

use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the square board.
pub const BOARD_SIDE: usize = 5;

/// Neighbor offsets in search order: up, down, left, right,
/// up-left, down-right, down-left, up-right.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
];

/// Bit assigned to cell (row, col) in a visited bitmap. The 25 cells
/// fit a u32, so a path's visited set is a plain Copy value and every
/// recursive branch works on its own copy.
fn bit_for_pos(row: usize, col: usize) -> u32 {
    return 1 << (row * BOARD_SIDE + col);
}

/// A 5x5 grid of uppercase letters. Immutable once built; the search
/// never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[char; BOARD_SIDE]; BOARD_SIDE],
}

impl Board {
    /// Make a random board, every cell uniform over A-Z.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut cells = [[' '; BOARD_SIDE]; BOARD_SIDE];
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = (b'A' + rng.gen_range(0..26u8)) as char;
            }
        }
        Board { cells }
    }

    /// Build a board from 5 rows of 5 uppercase letters each.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, InvalidError> {
        if rows.len() != BOARD_SIDE {
            return Err(InvalidError::new("board must have exactly 5 rows"));
        }
        let mut cells = [[' '; BOARD_SIDE]; BOARD_SIDE];
        for (r, row) in rows.iter().enumerate() {
            let letters: Vec<char> = row.as_ref().chars().collect();
            if letters.len() != BOARD_SIDE {
                return Err(InvalidError::new("board rows must have exactly 5 letters"));
            }
            for (c, ch) in letters.iter().enumerate() {
                if !ch.is_ascii_uppercase() {
                    return Err(InvalidError::new("board cells must be uppercase A-Z"));
                }
                cells[r][c] = *ch;
            }
        }
        Ok(Board { cells })
    }

    pub fn rows(&self) -> &[[char; BOARD_SIDE]; BOARD_SIDE] {
        &self.cells
    }

    /// Can `word` be traced on the board through a path of adjacent
    /// cells (diagonals included) without reusing a cell?
    ///
    /// Expects the word in uppercase; lowercase letters never match.
    pub fn find(&self, word: &str) -> bool {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return false;
        }
        // A path visits each of the 25 cells at most once, so longer
        // words can never match; bail before the search walks every
        // self-avoiding path to prove it.
        if letters.len() > BOARD_SIDE * BOARD_SIDE {
            return false;
        }
        // Try every cell as a start, first hit wins.
        for row in 0..BOARD_SIDE {
            for col in 0..BOARD_SIDE {
                if self.find_from(&letters, row, col, 0) {
                    return true;
                }
            }
        }
        return false;
    }

    /// Can the remainder of the word be traced starting at (row, col),
    /// given the cells already consumed by this path?
    fn find_from(&self, word: &[char], row: usize, col: usize, seen: u32) -> bool {
        // Callers only pass in-bounds cells; keep the guard anyway.
        if row >= BOARD_SIDE || col >= BOARD_SIDE {
            return false;
        }
        if self.cells[row][col] != word[0] {
            return false;
        }
        if seen & bit_for_pos(row, col) != 0 {
            return false;
        }
        if word.len() == 1 {
            return true;
        }
        // Extend a copy of the visited set. Only the calls descending
        // from this cell get the extension; sibling branches keep
        // exploring with their own copies, so a cell burned on one
        // candidate path stays available to every other path.
        let seen = seen | bit_for_pos(row, col);
        for (dr, dc) in NEIGHBOR_OFFSETS.iter() {
            let nrow = row as isize + dr;
            let ncol = col as isize + dc;
            if nrow < 0 || ncol < 0 || nrow >= BOARD_SIDE as isize || ncol >= BOARD_SIDE as isize {
                continue;
            }
            if self.find_from(&word[1..], nrow as usize, ncol as usize, seen) {
                return true;
            }
        }
        // Every neighbor failed, this path is dead.
        return false;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.iter() {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

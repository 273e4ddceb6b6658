//! Candidate domains for the three unit families: rows, columns, and boxes.
//!
//! Each unit carries one [`DigitSet`], the digits still legal somewhere in
//! that unit. The core correctness contract of the engine is the domain
//! invariant: a digit is absent from a unit's set iff some cell of that unit
//! already holds it. Every mutation here is paired with an exact inverse so
//! the search can unwind state in strict reverse order.

use std::fmt;
use std::ops::BitAnd;

use crate::{
    error::{Error, Result},
    grid::{CellPos, Digit, Grid},
};

/// A set of digits 1-9 packed into the low nine bits of a `u16`.
///
/// Intersection, removal, and emptiness checks are single bitwise operations,
/// and the whole set is `Copy`, so snapshotting costs nothing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

const ALL_NINE: u16 = 0x1FF;

impl DigitSet {
    /// The set containing every digit 1-9.
    pub fn full() -> Self {
        Self(ALL_NINE)
    }

    /// The set containing no digits.
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn contains(self, digit: Digit) -> bool {
        self.0 & (1 << digit.index()) != 0
    }

    pub fn insert(&mut self, digit: Digit) {
        self.0 |= 1 << digit.index();
    }

    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !(1 << digit.index());
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The single remaining digit, if exactly one remains.
    pub fn singleton(self) -> Option<Digit> {
        if self.0.count_ones() == 1 {
            Digit::new(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// The digits of the set in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::all().filter(move |&digit| self.contains(digit))
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::empty();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Which family of units a domain belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Row,
    Column,
    Box,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::Row => write!(f, "row"),
            UnitKind::Column => write!(f, "column"),
            UnitKind::Box => write!(f, "box"),
        }
    }
}

/// The three families of unit domains for one in-flight solve.
///
/// Built once per solve from the initial grid, mutated destructively during
/// the search, and dropped when the solve returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore {
    rows: [DigitSet; 9],
    cols: [DigitSet; 9],
    boxes: [DigitSet; 9],
}

impl DomainStore {
    /// Seeds every unit domain with the full digit set, then absorbs each
    /// pre-filled clue. A clue whose digit is already absent from one of its
    /// units is a duplicate among the givens and yields
    /// [`Error::InvalidPuzzle`] - the one static consistency check performed
    /// before search starts.
    pub fn from_grid(grid: &Grid) -> Result<Self> {
        let mut store = Self {
            rows: [DigitSet::full(); 9],
            cols: [DigitSet::full(); 9],
            boxes: [DigitSet::full(); 9],
        };
        for (pos, cell) in grid.cells() {
            if let Some(digit) = cell {
                if !store.remove(pos, digit) {
                    return Err(store.duplicate_clue(pos, digit));
                }
            }
        }
        Ok(store)
    }

    /// Names the unit that already lost `digit`, for error reporting.
    /// Only meaningful right after a failed [`remove`](Self::remove).
    fn duplicate_clue(&self, pos: CellPos, digit: Digit) -> Error {
        let (unit, index) = if !self.rows[pos.row].contains(digit) {
            (UnitKind::Row, pos.row)
        } else if !self.cols[pos.col].contains(digit) {
            (UnitKind::Column, pos.col)
        } else {
            (UnitKind::Box, pos.box_index())
        };
        Error::InvalidPuzzle { unit, index, digit }
    }

    /// The candidate set for an empty cell: the intersection of its row,
    /// column, and box domains. No side effects.
    pub fn candidates(&self, pos: CellPos) -> DigitSet {
        self.rows[pos.row] & self.cols[pos.col] & self.boxes[pos.box_index()]
    }

    /// Removes `digit` from the three unit domains of `pos`, atomically.
    ///
    /// Returns `false` and leaves all domains untouched if the digit is
    /// already absent from any of the three - assigning it there would break
    /// the domain invariant. Dead-end detection (an empty candidate set at
    /// some still-empty cell) is the propagator's job, which has the grid in
    /// hand; an empty *unit* domain by itself only means the unit is full.
    pub fn remove(&mut self, pos: CellPos, digit: Digit) -> bool {
        let box_index = pos.box_index();
        if !self.rows[pos.row].contains(digit)
            || !self.cols[pos.col].contains(digit)
            || !self.boxes[box_index].contains(digit)
        {
            return false;
        }
        self.rows[pos.row].remove(digit);
        self.cols[pos.col].remove(digit);
        self.boxes[box_index].remove(digit);
        true
    }

    /// Exact inverse of [`remove`](Self::remove). Callers must restore in
    /// reverse order of their removals: last removed, first restored.
    pub fn restore(&mut self, pos: CellPos, digit: Digit) {
        debug_assert!(
            !self.rows[pos.row].contains(digit)
                && !self.cols[pos.col].contains(digit)
                && !self.boxes[pos.box_index()].contains(digit),
            "restore of a digit that was never removed"
        );
        self.rows[pos.row].insert(digit);
        self.cols[pos.col].insert(digit);
        self.boxes[pos.box_index()].insert(digit);
    }

    /// Checks the domain invariant against `grid`: this store must equal the
    /// one freshly derived from the grid's current contents.
    pub fn consistent_with(&self, grid: &Grid) -> bool {
        Self::from_grid(grid).map_or(false, |fresh| fresh == *self)
    }
}

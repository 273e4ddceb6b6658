//! The puzzle state: digits, cell coordinates, and the 9x9 grid itself.
//!
//! The grid is deliberately dumb. It knows nothing about candidate domains or
//! search; it only stores cells, answers structural queries (peers, boxes),
//! and converts to and from the common textual representations.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// A Sudoku digit, guaranteed to lie in `1..=9`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, or `None` if `value` is outside `1..=9`.
    pub fn new(value: u8) -> Option<Self> {
        (1..=9).contains(&value).then_some(Self(value))
    }

    /// The digit as a plain integer.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Slot of this digit in a nine-entry table (`0..=8`).
    pub(crate) fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// All nine digits in ascending order.
    pub fn all() -> impl Iterator<Item = Digit> {
        (1..=9).map(Digit)
    }
}

impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digit({})", self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single grid cell: a digit, or empty.
pub type Cell = Option<Digit>;

/// A coordinate on the 9x9 grid. Ordered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < 9 && col < 9, "cell ({row}, {col}) is off the grid");
        Self { row, col }
    }

    /// Index of the 3x3 box containing this cell (`0..=8`).
    pub fn box_index(self) -> usize {
        (self.row / 3) * 3 + self.col / 3
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 20 cells sharing a row, column, or box with `pos`, each yielded exactly
/// once and never `pos` itself.
pub fn peers(pos: CellPos) -> impl Iterator<Item = CellPos> {
    let row_peers = (0..9)
        .filter(move |&col| col != pos.col)
        .map(move |col| CellPos { row: pos.row, col });
    let col_peers = (0..9)
        .filter(move |&row| row != pos.row)
        .map(move |row| CellPos { row, col: pos.col });
    let box_row = (pos.row / 3) * 3;
    let box_col = (pos.col / 3) * 3;
    let box_peers = (box_row..box_row + 3)
        .flat_map(move |row| (box_col..box_col + 3).map(move |col| CellPos { row, col }))
        .filter(move |p| p.row != pos.row && p.col != pos.col);
    row_peers.chain(col_peers).chain(box_peers)
}

/// A 9x9 Sudoku grid.
///
/// Serializes as a 9x9 array of one-character strings (`"5"` or `"."`), the
/// row-major shape puzzle sources commonly ship.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; 9]; 9],
}

impl Grid {
    /// An all-blank grid.
    pub fn empty() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Builds a grid from row-major integers, with `0` marking a blank.
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Result<Self> {
        let mut grid = Self::empty();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                grid.cells[row][col] = match value {
                    0 => None,
                    v => Some(Digit::new(v).ok_or_else(|| Error::InvalidCell {
                        row,
                        col,
                        value: v.to_string(),
                    })?),
                };
            }
        }
        Ok(grid)
    }

    pub fn get(&self, pos: CellPos) -> Cell {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: CellPos, digit: Digit) {
        self.cells[pos.row][pos.col] = Some(digit);
    }

    pub fn clear(&mut self, pos: CellPos) {
        self.cells[pos.row][pos.col] = None;
    }

    /// All 81 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellPos, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &cell)| (CellPos { row, col }, cell))
        })
    }

    /// The empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.cells()
            .filter(|(_, cell)| cell.is_none())
            .map(|(pos, _)| pos)
    }

    /// `true` if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, cell)| cell.is_some())
    }

    /// `true` if the grid is a complete, rule-consistent solution: every row,
    /// column, and box contains each digit 1-9 exactly once.
    pub fn is_solved(&self) -> bool {
        const ALL_NINE: u16 = 0x1FF;
        let mut rows = [0u16; 9];
        let mut cols = [0u16; 9];
        let mut boxes = [0u16; 9];
        for (pos, cell) in self.cells() {
            let Some(digit) = cell else { return false };
            let bit = 1u16 << digit.index();
            rows[pos.row] |= bit;
            cols[pos.col] |= bit;
            boxes[pos.box_index()] |= bit;
        }
        rows.iter()
            .chain(&cols)
            .chain(&boxes)
            .all(|&mask| mask == ALL_NINE)
    }
}

fn parse_cell(text: &str, row: usize, col: usize) -> Result<Cell> {
    let mut chars = text.chars();
    let (first, rest) = (chars.next(), chars.next());
    match (first, rest) {
        (Some('.'), None) | (None, None) => Ok(None),
        (Some(c @ '1'..='9'), None) => Ok(Digit::new(c as u8 - b'0')),
        _ => Err(Error::InvalidCell {
            row,
            col,
            value: text.to_string(),
        }),
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parses 81 cells from a string, ignoring whitespace. `'.'`, `'0'`, and
    /// `'_'` all mark a blank.
    fn from_str(s: &str) -> Result<Self> {
        let cells: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != 81 {
            return Err(Error::InvalidLength(cells.len()));
        }
        let mut grid = Self::empty();
        for (i, &c) in cells.iter().enumerate() {
            let (row, col) = (i / 9, i % 9);
            grid.cells[row][col] = match c {
                '.' | '0' | '_' => None,
                '1'..='9' => Digit::new(c as u8 - b'0'),
                other => {
                    return Err(Error::InvalidCell {
                        row,
                        col,
                        value: other.to_string(),
                    })
                }
            };
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.iter().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(\n{self}\n)")
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let rows: Vec<Vec<String>> = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(digit) => digit.to_string(),
                        None => ".".to_string(),
                    })
                    .collect()
            })
            .collect();
        rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let rows: Vec<Vec<String>> = Vec::deserialize(deserializer)?;
        if rows.len() != 9 {
            return Err(de::Error::invalid_length(rows.len(), &"9 rows"));
        }
        let mut grid = Grid::empty();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != 9 {
                return Err(de::Error::invalid_length(cells.len(), &"9 cells per row"));
            }
            for (col, cell) in cells.iter().enumerate() {
                grid.cells[row][col] = parse_cell(cell, row, col).map_err(de::Error::custom)?;
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn digit_rejects_out_of_range_values() {
        assert_eq!(Digit::new(0), None);
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::new(5).map(Digit::get), Some(5));
    }

    #[test]
    fn box_index_follows_band_layout() {
        assert_eq!(CellPos::new(0, 0).box_index(), 0);
        assert_eq!(CellPos::new(1, 4).box_index(), 1);
        assert_eq!(CellPos::new(4, 4).box_index(), 4);
        assert_eq!(CellPos::new(8, 8).box_index(), 8);
        assert_eq!(CellPos::new(5, 2).box_index(), 3);
    }

    #[test]
    fn every_cell_has_twenty_distinct_peers() {
        for row in 0..9 {
            for col in 0..9 {
                let pos = CellPos::new(row, col);
                let peer_set: HashSet<CellPos> = peers(pos).collect();
                assert_eq!(peer_set.len(), 20, "peers of {pos}");
                assert!(!peer_set.contains(&pos));
            }
        }
    }

    #[test]
    fn from_rows_rejects_out_of_range_cells() {
        let mut rows = [[0u8; 9]; 9];
        rows[3][7] = 12;
        let err = Grid::from_rows(rows).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCell {
                row: 3,
                col: 7,
                value: "12".to_string()
            }
        );
    }

    #[test]
    fn parse_and_display_round_trip() {
        let text = "\
            53..7....\n\
            6..195...\n\
            .98....6.\n\
            8...6...3\n\
            4..8.3..1\n\
            7...2...6\n\
            .6....28.\n\
            ...419..5\n\
            ....8..79";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.get(CellPos::new(0, 0)), Digit::new(5));
        assert_eq!(grid.get(CellPos::new(0, 2)), None);
        assert_eq!(grid.to_string(), text);
        assert_eq!(grid.empty_cells().count(), 51);
    }

    #[test]
    fn parse_rejects_wrong_length_and_bad_cells() {
        assert_eq!("123".parse::<Grid>().unwrap_err(), Error::InvalidLength(3));
        let bad = "x".repeat(81);
        assert_eq!(
            bad.parse::<Grid>().unwrap_err(),
            Error::InvalidCell {
                row: 0,
                col: 0,
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn is_solved_accepts_a_valid_completion() {
        let grid = Grid::from_rows([
            [5, 3, 4, 6, 7, 8, 9, 1, 2],
            [6, 7, 2, 1, 9, 5, 3, 4, 8],
            [1, 9, 8, 3, 4, 2, 5, 6, 7],
            [8, 5, 9, 7, 6, 1, 4, 2, 3],
            [4, 2, 6, 8, 5, 3, 7, 9, 1],
            [7, 1, 3, 9, 2, 4, 8, 5, 6],
            [9, 6, 1, 5, 3, 7, 2, 8, 4],
            [2, 8, 7, 4, 1, 9, 6, 3, 5],
            [3, 4, 5, 2, 8, 6, 1, 7, 9],
        ])
        .unwrap();
        assert!(grid.is_solved());

        let mut broken = grid.clone();
        broken.set(CellPos::new(0, 0), Digit::new(3).unwrap());
        assert!(!broken.is_solved());

        let mut incomplete = grid;
        incomplete.clear(CellPos::new(4, 4));
        assert!(!incomplete.is_solved());
    }

    #[test]
    fn serde_uses_the_array_of_strings_shape() {
        let json = r#"[["5","3",".",".","7",".",".",".","."],
                       ["6",".",".","1","9","5",".",".","."],
                       [".","9","8",".",".",".",".","6","."],
                       ["8",".",".",".","6",".",".",".","3"],
                       ["4",".",".","8",".","3",".",".","1"],
                       ["7",".",".",".","2",".",".",".","6"],
                       [".","6",".",".",".",".","2","8","."],
                       [".",".",".","4","1","9",".",".","5"],
                       [".",".",".",".","8",".",".","7","9"]]"#;
        let grid: Grid = serde_json::from_str(json).unwrap();
        assert_eq!(grid.get(CellPos::new(0, 0)), Digit::new(5));
        assert_eq!(grid.get(CellPos::new(8, 8)), Digit::new(9));
        assert_eq!(grid.get(CellPos::new(8, 0)), None);

        let round_tripped: Grid = serde_json::from_str(&serde_json::to_string(&grid).unwrap())
            .unwrap();
        assert_eq!(round_tripped, grid);
    }

    #[test]
    fn serde_rejects_malformed_boards() {
        assert!(serde_json::from_str::<Grid>(r#"[["5"]]"#).is_err());
        let bad_cell = r#"[["55",".",".",".",".",".",".",".","."],
                          [".",".",".",".",".",".",".",".","."],
                          [".",".",".",".",".",".",".",".","."],
                          [".",".",".",".",".",".",".",".","."],
                          [".",".",".",".",".",".",".",".","."],
                          [".",".",".",".",".",".",".",".","."],
                          [".",".",".",".",".",".",".",".","."],
                          [".",".",".",".",".",".",".",".","."],
                          [".",".",".",".",".",".",".",".","."]]"#;
        assert!(serde_json::from_str::<Grid>(bad_cell).is_err());
    }
}

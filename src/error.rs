use crate::{grid::Digit, solver::domain::UnitKind};

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A pre-filled clue collides with another clue in the same row, column,
    /// or box. Detected once, before any search step, and never retried.
    #[error("duplicate clue {digit} in {unit} {index}")]
    InvalidPuzzle {
        unit: UnitKind,
        index: usize,
        digit: Digit,
    },

    /// A cell in the input held something other than a digit 1-9 or a blank
    /// marker. Raised by the parsing layer only; the engine never sees it.
    #[error("cell ({row}, {col}) holds {value:?}, expected a digit 1-9 or a blank")]
    InvalidCell {
        row: usize,
        col: usize,
        value: String,
    },

    /// The textual input did not contain exactly 81 cells.
    #[error("expected 81 cells, found {0}")]
    InvalidLength(usize),
}

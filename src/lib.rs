//! Nonet is a constraint-propagation backtracking solver for 9x9 Sudoku
//! grids.
//!
//! The engine keeps one candidate set per row, column, and 3x3 box - nine
//! bits each - and runs a depth-first search that forward-checks every
//! tentative placement, propagates entailed digits through a worklist, and
//! unwinds its mutations in exact reverse order on backtrack. It either
//! returns a complete, rule-consistent grid or an explicit "no solution"
//! signal, never a partially filled board.
//!
//! # Core Concepts
//!
//! - **[`Grid`](grid::Grid)**: the puzzle state, with parsing from the common
//!   textual and JSON board shapes.
//! - **[`DomainStore`](solver::domain::DomainStore)**: the per-unit candidate
//!   sets, seeded from the clues and mutated destructively during search with
//!   exact inverse operations.
//! - **[`SolverEngine`](solver::engine::SolverEngine)**: the facade that
//!   validates the clues, runs the search, and reports the result with
//!   search statistics.
//! - **[`SearchObserver`](solver::observer::SearchObserver)**: an optional
//!   side channel receiving a read-only grid snapshot per assignment, for
//!   external renderers; the engine itself performs no I/O.
//!
//! # Example
//!
//! ```
//! use nonet::grid::Grid;
//! use nonet::solver::engine::{SolveResult, SolverEngine};
//!
//! let grid: Grid = "
//!     53..7....
//!     6..195...
//!     .98....6.
//!     8...6...3
//!     4..8.3..1
//!     7...2...6
//!     .6....28.
//!     ...419..5
//!     ....8..79
//! "
//! .parse()
//! .unwrap();
//!
//! let (result, stats) = SolverEngine::default().solve(&grid);
//! let SolveResult::Solved(solution) = result else {
//!     panic!("the classic puzzle is solvable");
//! };
//! assert!(solution.is_solved());
//! assert_eq!(solution.to_string().lines().next(), Some("534678912"));
//! assert!(stats.assignments > 0);
//! ```
pub mod error;
pub mod grid;
pub mod solver;

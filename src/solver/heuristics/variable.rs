//! Heuristics for selecting which empty cell to branch on next.

use crate::{
    grid::{CellPos, Grid},
    solver::domain::DomainStore,
};

/// A strategy for choosing the next empty cell during the search.
///
/// A good heuristic can dramatically reduce branching; correctness does not
/// depend on the choice, only on some empty cell being returned while one
/// exists.
pub trait CellSelectionHeuristic {
    /// Selects the next cell to fill.
    ///
    /// # Returns
    ///
    /// * `Some(pos)` of an empty cell, if any remain.
    /// * `None` if the grid is complete.
    fn select(&self, grid: &Grid, domains: &DomainStore) -> Option<CellPos>;
}

/// Selects the first empty cell in row-major order.
///
/// This reproduces the fixed-order scan of the plain backtracking variants
/// and provides a basic, deterministic baseline.
pub struct SelectFirstHeuristic;

impl CellSelectionHeuristic for SelectFirstHeuristic {
    fn select(&self, grid: &Grid, _domains: &DomainStore) -> Option<CellPos> {
        grid.empty_cells().next()
    }
}

/// Selects the empty cell with the Minimum Remaining Values: the smallest
/// candidate set.
///
/// This is a "fail-first" strategy that tackles the most constrained cell
/// early, pruning the search space sooner. Ties break on row-major position
/// to keep the search deterministic.
pub struct MinimumRemainingValuesHeuristic;

impl CellSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select(&self, grid: &Grid, domains: &DomainStore) -> Option<CellPos> {
        grid.empty_cells()
            .min_by_key(|&pos| (domains.candidates(pos).len(), pos))
    }
}

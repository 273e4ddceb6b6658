use tracing::{debug, warn};

use crate::{
    grid::Grid,
    solver::{
        domain::DomainStore,
        heuristics::variable::{CellSelectionHeuristic, MinimumRemainingValuesHeuristic},
        observer::{NullObserver, SearchObserver},
        search::BacktrackingSearch,
        stats::SearchStats,
    },
};

/// Outcome of a solve: either a fully solved, rule-consistent grid or an
/// explicit "no solution" signal. The engine never returns a partially
/// filled grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    Solved(Grid),
    Unsolvable,
}

impl SolveResult {
    /// The solved grid, if there is one.
    pub fn grid(&self) -> Option<&Grid> {
        match self {
            SolveResult::Solved(grid) => Some(grid),
            SolveResult::Unsolvable => None,
        }
    }
}

/// The engine facade: seeds the unit domains from the clues, runs the
/// backtracking search, and reports the result together with the search
/// statistics.
///
/// The input grid is never mutated; the search works on its own copy.
pub struct SolverEngine {
    heuristic: Box<dyn CellSelectionHeuristic>,
}

impl SolverEngine {
    /// Creates an engine with the given cell-selection policy.
    pub fn new(heuristic: Box<dyn CellSelectionHeuristic>) -> Self {
        Self { heuristic }
    }

    /// Solves the puzzle, discarding observer events.
    pub fn solve(&self, grid: &Grid) -> (SolveResult, SearchStats) {
        self.solve_with_observer(grid, &mut NullObserver)
    }

    /// Solves the puzzle, notifying `observer` once per successful assignment
    /// and once with the final result.
    ///
    /// A puzzle whose clues already contradict each other (a duplicate digit
    /// within a row, column, or box) is rejected before any search step and
    /// reported as [`SolveResult::Unsolvable`] with zero assignments; the
    /// underlying typed error is available through
    /// [`DomainStore::from_grid`].
    pub fn solve_with_observer(
        &self,
        grid: &Grid,
        observer: &mut dyn SearchObserver,
    ) -> (SolveResult, SearchStats) {
        let mut stats = SearchStats::default();

        let mut domains = match DomainStore::from_grid(grid) {
            Ok(domains) => domains,
            Err(err) => {
                warn!(%err, "puzzle rejected before search");
                let result = SolveResult::Unsolvable;
                observer.on_result(&result);
                return (result, stats);
            }
        };

        let mut working = grid.clone();
        let search = BacktrackingSearch::new(self.heuristic.as_ref());
        let solved = search.run(&mut working, &mut domains, &mut stats, observer);
        debug!(
            solved,
            nodes = stats.nodes_visited,
            assignments = stats.assignments,
            propagated = stats.propagated,
            backtracks = stats.backtracks,
            "search finished"
        );

        let result = if solved {
            debug_assert!(working.is_solved());
            SolveResult::Solved(working)
        } else {
            SolveResult::Unsolvable
        };
        observer.on_result(&result);
        (result, stats)
    }
}

impl Default for SolverEngine {
    /// Minimum Remaining Values is the canonical selection policy.
    fn default() -> Self {
        Self::new(Box::new(MinimumRemainingValuesHeuristic))
    }
}

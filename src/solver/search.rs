//! The recursive depth-first driver: select a cell, try its candidates,
//! propagate, recurse, and unwind state in exact reverse order on failure.

use tracing::trace;

use crate::{
    grid::Grid,
    solver::{
        domain::DomainStore,
        heuristics::variable::CellSelectionHeuristic,
        observer::SearchObserver,
        propagate::{self, forward_check},
        stats::SearchStats,
    },
};

/// Backtracking search over the empty cells of one grid.
///
/// Each frame owns exactly the mutations it made - the tried placement, its
/// forward-checking removal, and the propagation pass's log - and reverses
/// them before trying the next candidate or returning failure. Recursion
/// depth is bounded by the 81 cells of the grid.
pub struct BacktrackingSearch<'a> {
    heuristic: &'a dyn CellSelectionHeuristic,
}

impl<'a> BacktrackingSearch<'a> {
    pub fn new(heuristic: &'a dyn CellSelectionHeuristic) -> Self {
        Self { heuristic }
    }

    /// Runs the search to completion.
    ///
    /// Returns `true` with `grid` holding a full, rule-consistent solution,
    /// or `false` with `grid` and `domains` restored to the state they were
    /// passed in.
    pub fn run(
        &self,
        grid: &mut Grid,
        domains: &mut DomainStore,
        stats: &mut SearchStats,
        observer: &mut dyn SearchObserver,
    ) -> bool {
        stats.nodes_visited += 1;

        // SOLVED: no empty cell remains.
        let Some(pos) = self.heuristic.select(grid, domains) else {
            return true;
        };

        let candidates = domains.candidates(pos);
        for digit in candidates.iter() {
            stats.assignments += 1;
            grid.set(pos, digit);

            if forward_check(grid, domains, pos, digit) {
                observer.on_assignment(grid);

                let pass = propagate::propagate(grid, domains, pos);
                stats.propagated += pass.log.len() as u64;
                if pass.consistent {
                    for _ in &pass.log {
                        observer.on_assignment(grid);
                    }
                    if self.run(grid, domains, stats, observer) {
                        return true;
                    }
                }
                // Unwind this frame's mutations, most recent first: the
                // propagation pass, then the forward-checking removal.
                propagate::undo(grid, domains, &pass.log);
                domains.restore(pos, digit);
            }

            grid.clear(pos);
            stats.backtracks += 1;
        }

        // EXHAUSTED: every candidate at this frame failed.
        trace!(%pos, "candidates exhausted, unwinding");
        false
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        grid::{CellPos, Digit},
        solver::{heuristics::variable::MinimumRemainingValuesHeuristic, observer::NullObserver},
    };

    fn run_search(grid: &mut Grid) -> (bool, SearchStats) {
        let mut domains = DomainStore::from_grid(grid).unwrap();
        let mut stats = SearchStats::default();
        let solved = BacktrackingSearch::new(&MinimumRemainingValuesHeuristic).run(
            grid,
            &mut domains,
            &mut stats,
            &mut NullObserver,
        );
        assert!(domains.consistent_with(grid), "domain invariant violated");
        (solved, stats)
    }

    #[test]
    fn completes_a_nearly_finished_grid() {
        let mut grid: Grid = "\
            53467891.\
            672195348\
            198342567\
            859761423\
            426853791\
            713924856\
            961537284\
            287419635\
            3452861.9"
            .parse()
            .unwrap();
        let (solved, stats) = run_search(&mut grid);
        assert!(solved);
        assert!(grid.is_solved());
        assert_eq!(grid.get(CellPos::new(0, 8)), Digit::new(2));
        assert_eq!(grid.get(CellPos::new(8, 7)), Digit::new(7));
        assert!(stats.assignments >= 1);
    }

    #[test]
    fn returns_a_full_grid_untouched() {
        let mut grid: Grid = "\
            534678912\
            672195348\
            198342567\
            859761423\
            426853791\
            713924856\
            961537284\
            287419635\
            345286179"
            .parse()
            .unwrap();
        let before = grid.clone();
        let (solved, stats) = run_search(&mut grid);
        assert!(solved);
        assert_eq!(grid, before);
        assert_eq!(stats.assignments, 0);
        assert_eq!(stats.nodes_visited, 1);
    }

    #[test]
    fn exhausted_search_restores_every_mutation() {
        // Consistent clues, but no cell can ever hold a digit at (0, 8):
        // row 0 forces it to 9 while column 8 already has one.
        let mut rows = [[0u8; 9]; 9];
        for col in 0..8 {
            rows[0][col] = col as u8 + 1;
        }
        rows[8][8] = 9;
        let mut grid = Grid::from_rows(rows).unwrap();
        let before = grid.clone();

        let (solved, stats) = run_search(&mut grid);
        assert!(!solved);
        assert_eq!(grid, before);
        assert!(stats.backtracks == stats.assignments);
    }

    #[test]
    fn deep_exhaustion_unwinds_to_the_initial_state() {
        // The classic puzzle's clues plus a wrong extra clue at (0, 2). The
        // clues stay pairwise consistent, but the unique solution needs a 4
        // there, so the search must do real work before exhausting - and
        // every one of its mutations must be unwound.
        let mut grid: Grid = "\
            532.7....\
            6..195...\
            .98....6.\
            8...6...3\
            4..8.3..1\
            7...2...6\
            .6....28.\
            ...419..5\
            ....8..79"
            .parse()
            .unwrap();
        let before = grid.clone();

        let (solved, stats) = run_search(&mut grid);
        assert!(!solved);
        assert_eq!(grid, before);
        assert!(stats.assignments > 0);
        assert_eq!(stats.backtracks, stats.assignments);
    }
}

//! The renderer-facing side channel. The reference implementations drew the
//! board from inside the search loop; here the engine performs no I/O and
//! instead notifies an observer, leaving all drawing to an external
//! collaborator.

use crate::{grid::Grid, solver::engine::SolveResult};

/// Receives read-only snapshots of the search. Implementations must not hold
/// on to the grid beyond the callback or attempt to influence the search.
pub trait SearchObserver {
    /// Called once per successful assignment with the grid as it stands.
    fn on_assignment(&mut self, _grid: &Grid) {}

    /// Called once with the final outcome of the solve.
    fn on_result(&mut self, _result: &SolveResult) {}
}

/// An observer that ignores every event.
#[derive(Debug, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}

//! Constraint propagation: forward checking after each tentative assignment,
//! followed by a worklist pass that places entailed digits (naked singles).
//!
//! Every mutation a pass performs is recorded in a pass-local log so the
//! search can replay it in exact reverse order on failure. Propagation never
//! guesses: a digit is only placed when it is the sole remaining candidate
//! for its cell, so the pass preserves the solution set.

use tracing::trace;

use crate::{
    grid::{peers, CellPos, Digit, Grid},
    solver::{domain::DomainStore, work_list::WorkList},
};

/// One placement made during a propagation pass, recorded for reverse replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub pos: CellPos,
    pub digit: Digit,
}

/// Outcome of a propagation pass.
///
/// When `consistent` is `false` the tentative assignment is a dead end: the
/// caller must replay `log` in reverse (via [`undo`]) and then unwind its own
/// removals, in that order.
#[derive(Debug)]
pub struct Propagation {
    pub consistent: bool,
    pub log: Vec<Placement>,
}

/// Forward checking for a tentative placement of `digit` at `pos`.
///
/// Marks the digit used in the three unit domains of `pos`, then tests every
/// still-empty peer: one whose candidate set just became empty makes the
/// assignment a dead end. On failure the removal is rolled back here and
/// `false` is returned, leaving the domains exactly as before; clearing the
/// tentative placement itself stays with the caller.
pub fn forward_check(
    grid: &Grid,
    domains: &mut DomainStore,
    pos: CellPos,
    digit: Digit,
) -> bool {
    if !domains.remove(pos, digit) {
        return false;
    }
    for peer in peers(pos) {
        if grid.get(peer).is_none() && domains.candidates(peer).is_empty() {
            trace!(%pos, %digit, %peer, "forward check emptied a peer candidate set");
            domains.restore(pos, digit);
            return false;
        }
    }
    true
}

/// Worklist propagation after a successful forward check of the cell at
/// `origin`.
///
/// The queue is seeded with every empty peer of `origin`. A dequeued cell
/// with an empty candidate set fails the pass immediately; one whose
/// candidate set is a singleton takes that digit (it is entailed by the
/// current state), which is logged and its own empty peers enqueued in turn.
/// The worklist admits each cell once per pass.
pub fn propagate(grid: &mut Grid, domains: &mut DomainStore, origin: CellPos) -> Propagation {
    let mut worklist = WorkList::new();
    for peer in peers(origin) {
        if grid.get(peer).is_none() {
            worklist.push_back(peer);
        }
    }

    let mut log = Vec::new();
    while let Some(pos) = worklist.pop_front() {
        if grid.get(pos).is_some() {
            // Filled earlier in this same pass.
            continue;
        }
        let candidates = domains.candidates(pos);
        if candidates.is_empty() {
            trace!(%pos, "propagation emptied a candidate set");
            return Propagation {
                consistent: false,
                log,
            };
        }
        if let Some(digit) = candidates.singleton() {
            grid.set(pos, digit);
            let removed = domains.remove(pos, digit);
            debug_assert!(removed, "entailed digit missing from a unit domain");
            log.push(Placement { pos, digit });
            trace!(%pos, %digit, "entailed placement");
            for peer in peers(pos) {
                if grid.get(peer).is_none() {
                    worklist.push_back(peer);
                }
            }
        }
    }

    Propagation {
        consistent: true,
        log,
    }
}

/// Replays a pass's placements in reverse: restore the unit domains, then
/// clear the cell. Last placed, first undone.
pub fn undo(grid: &mut Grid, domains: &mut DomainStore, log: &[Placement]) {
    for &Placement { pos, digit } in log.iter().rev() {
        domains.restore(pos, digit);
        grid.clear(pos);
    }
}

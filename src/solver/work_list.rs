use std::collections::{HashSet, VecDeque};

use crate::grid::CellPos;

/// FIFO queue of cells awaiting a propagation visit.
///
/// A membership set admits each cell at most once for the lifetime of the
/// list, so it doubles as the pass's visited set: a cell popped and later
/// re-pushed is refused, bounding every propagation pass to one visit per
/// cell.
pub struct WorkList {
    queue: VecDeque<CellPos>,
    queue_members: HashSet<CellPos>,
}

impl WorkList {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_members: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, pos: CellPos) {
        if self.queue_members.insert(pos) {
            self.queue.push_back(pos);
        }
    }

    pub fn pop_front(&mut self) -> Option<CellPos> {
        self.queue.pop_front()
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}

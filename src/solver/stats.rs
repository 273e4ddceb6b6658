use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters accumulated over one solve.
///
/// `assignments` is the step counter external callers care about: it counts
/// every candidate placement the search tried, successful or not.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Search frames entered.
    pub nodes_visited: u64,
    /// Candidate placements tried by the search.
    pub assignments: u64,
    /// Placements entailed and made by propagation passes.
    pub propagated: u64,
    /// Candidate placements undone, whether from a failed propagation or a
    /// failed subtree.
    pub backtracks: u64,
}

/// Renders the statistics as a small table, for callers that want a
/// human-readable summary after a solve.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));
    for (metric, count) in [
        ("Search frames", stats.nodes_visited),
        ("Assignments tried", stats.assignments),
        ("Propagated placements", stats.propagated),
        ("Backtracks", stats.backtracks),
    ] {
        table.add_row(Row::new(vec![
            Cell::new(metric),
            Cell::new(&count.to_string()),
        ]));
    }
    table.to_string()
}

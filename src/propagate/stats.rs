use serde::Serialize;

/// Per-run propagation statistics.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropagationStats {
    /// Number of committed rounds.
    pub rounds: usize,
    /// Pixels resolved in each round, in order.
    pub resolved_per_round: Vec<usize>,
    pub resolved_total: usize,
    pub elapsed_ms: f64,
}

impl PropagationStats {
    pub(crate) fn record_round(&mut self, resolved: usize) {
        self.rounds += 1;
        self.resolved_per_round.push(resolved);
        self.resolved_total += resolved;
    }
}

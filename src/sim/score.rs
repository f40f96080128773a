//! Score counter with a same-gate guard

use super::pipes::GateId;

/// Counts gates passed; the same gate can't score twice in a row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u32,
    last_gate: Option<GateId>,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn last_gate(&self) -> Option<GateId> {
        self.last_gate
    }

    /// Credit a gate overlap. Returns true if the score went up.
    pub fn credit(&mut self, gate: GateId) -> bool {
        if self.last_gate == Some(gate) {
            return false;
        }
        self.score = self.score.saturating_add(1);
        self.last_gate = Some(gate);
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

//! Best-set summaries: reduce the sets of one exercise to its best
//! performance on each tracked metric.

use crate::calculations::{estimate_1rm, exercise_volume};
use crate::types::WorkoutSet;

/// Best performance of one exercise, per metric.
///
/// `reps` is the rep count of the heaviest set, not the highest rep count
/// of the session: weight and reps records are judged on the same set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BestSet {
    pub weight: f64,
    pub reps: u32,
    pub volume: f64,
    pub estimated_1rm: f64,
}

impl BestSet {
    /// True if `(weight, reps)` beats the current heaviest set,
    /// ties on weight going to the higher rep count.
    fn is_heavier(&self, weight: f64, reps: u32) -> bool {
        weight > self.weight || (weight == self.weight && reps > self.reps)
    }

    /// Fold another summary into this one, keeping the best of each metric.
    pub fn absorb(&mut self, other: &BestSet) {
        if self.is_heavier(other.weight, other.reps) {
            self.weight = other.weight;
            self.reps = other.reps;
        }
        self.volume = self.volume.max(other.volume);
        self.estimated_1rm = self.estimated_1rm.max(other.estimated_1rm);
    }
}

/// Summarize one exercise's sets.
///
/// Only completed, non-warmup sets with at least one rep count. Bodyweight
/// sets (no weight) are eligible and can carry the rep count. Returns
/// `None` when no set qualifies.
pub fn best_set(sets: &[WorkoutSet]) -> Option<BestSet> {
    let mut best = BestSet::default();
    let mut found = false;

    for set in sets.iter().filter(|s| s.qualifies()) {
        found = true;
        let weight = set.weight.unwrap_or(0.0);
        let reps = set.reps.unwrap_or(0);

        if best.is_heavier(weight, reps) {
            best.weight = weight;
            best.reps = reps;
        }
        if weight > 0.0 {
            best.estimated_1rm = best.estimated_1rm.max(estimate_1rm(weight, reps));
        }
    }

    if !found {
        return None;
    }
    best.volume = exercise_volume(sets);
    Some(best)
}

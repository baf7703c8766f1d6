//! Best-ever performance across earlier workouts.

use super::summary::{best_set, BestSet};
use crate::types::Workout;

/// Best performance of `exercise_id` across all completed workouts in
/// `history`, skipping the workout being evaluated.
///
/// Each metric is maximised independently, so the returned summary may mix
/// values from different sessions. Returns `None` if no other completed
/// workout has a qualifying set for the exercise.
pub fn previous_best(
    exercise_id: &str,
    current_workout_id: &str,
    history: &[Workout],
) -> Option<BestSet> {
    history
        .iter()
        .filter(|w| w.id != current_workout_id && w.is_completed())
        .filter_map(|w| w.exercise(exercise_id))
        .filter_map(|e| best_set(&e.sets))
        .fold(None, |acc: Option<BestSet>, best| {
            let mut acc = acc.unwrap_or_default();
            acc.absorb(&best);
            Some(acc)
        })
}

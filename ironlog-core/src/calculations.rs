//! Training calculations: volume, estimated one-rep max.

use crate::types::{Workout, WorkoutSet};

/// Above this rep count the Epley estimate is unreliable and the raw
/// weight is used instead.
pub const MAX_RELIABLE_REPS: u32 = 12;

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Estimated one-rep max (Epley-style), rounded to one decimal.
///
/// Returns 0 for non-positive inputs.
pub fn estimate_1rm(weight: f64, reps: u32) -> f64 {
    if reps == 0 || weight <= 0.0 {
        return 0.0;
    }
    if reps == 1 || reps > MAX_RELIABLE_REPS {
        return weight;
    }
    round_to(weight * (36.0 / (37.0 - reps as f64)), 1)
}

/// Volume of a single set, 0 if weight or reps is missing.
pub fn set_volume(weight: Option<f64>, reps: Option<u32>) -> f64 {
    match (weight, reps) {
        (Some(w), Some(r)) if w != 0.0 && r != 0 => w * r as f64,
        _ => 0.0,
    }
}

/// Sum of `weight * reps` over completed, non-warmup sets.
pub fn exercise_volume(sets: &[WorkoutSet]) -> f64 {
    sets.iter()
        .filter(|s| s.is_working())
        .map(|s| set_volume(s.weight, s.reps))
        .sum()
}

/// Total volume across every exercise of a workout.
pub fn workout_volume(workout: &Workout) -> f64 {
    workout
        .exercises
        .iter()
        .map(|e| exercise_volume(&e.sets))
        .sum()
}

pub fn total_completed_sets(sets: &[WorkoutSet]) -> usize {
    sets.iter().filter(|s| s.completed).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SetTag;

    fn set(weight: Option<f64>, reps: Option<u32>, completed: bool, tag: Option<SetTag>) -> WorkoutSet {
        WorkoutSet {
            id: "s".to_string(),
            weight,
            reps,
            completed,
            tag,
            rpe: None,
        }
    }

    #[test]
    fn test_estimate_1rm() {
        assert_eq!(estimate_1rm(100.0, 5), 112.5);
        assert_eq!(estimate_1rm(100.0, 1), 100.0);
        assert_eq!(estimate_1rm(100.0, 15), 100.0);
        assert_eq!(estimate_1rm(100.0, 12), 144.0);
        // 80 * 36 / 29 = 99.31...
        assert_eq!(estimate_1rm(80.0, 8), 99.3);
    }

    #[test]
    fn test_estimate_1rm_non_positive_inputs() {
        assert_eq!(estimate_1rm(0.0, 5), 0.0);
        assert_eq!(estimate_1rm(-10.0, 5), 0.0);
        assert_eq!(estimate_1rm(100.0, 0), 0.0);
    }

    #[test]
    fn test_exercise_volume_rule() {
        let sets = vec![
            set(Some(60.0), Some(10), true, Some(SetTag::Warmup)),
            set(Some(100.0), Some(5), true, None),
            set(Some(100.0), Some(5), true, Some(SetTag::Failure)),
            set(Some(100.0), Some(5), false, None),
            set(None, Some(12), true, None),
            set(Some(80.0), None, true, None),
        ];
        assert_eq!(exercise_volume(&sets), 1000.0);
        assert_eq!(total_completed_sets(&sets), 5);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(7.06, 1), 7.1);
        assert_eq!(round_to(112.5, 0), 113.0);
    }
}

//! Personal record detection for a finished workout.

use super::history::previous_best;
use super::summary::{best_set, BestSet};
use crate::calculations::round_to;
use crate::settings::AppSettings;
use crate::types::{PrEvent, PrMetric, Workout};

/// Detect the personal records set by `workout`.
///
/// `history` holds the other workouts to compare against; the workout
/// itself and unfinished workouts in it are ignored. For an exercise seen
/// for the first time, exactly one event is emitted (weight, or reps for
/// bodyweight work). Otherwise every metric that clears its threshold
/// produces an event, so one exercise yields at most four.
pub fn detect_prs(workout: &Workout, history: &[Workout], settings: &AppSettings) -> Vec<PrEvent> {
    let mut events = Vec::new();

    for exercise in &workout.exercises {
        let Some(current) = best_set(&exercise.sets) else {
            continue;
        };
        let exercise_id = exercise.exercise_id.as_str();
        let mut emit = |metric: PrMetric, new_value: f64, old_value: f64| {
            events.push(make_event(workout, exercise_id, metric, new_value, old_value, &current));
        };

        let Some(previous) = previous_best(exercise_id, &workout.id, history) else {
            if current.weight > 0.0 {
                emit(PrMetric::Weight, current.weight, 0.0);
            } else {
                emit(PrMetric::Reps, current.reps as f64, 0.0);
            }
            continue;
        };

        if current.weight >= previous.weight + settings.pr_threshold_weight {
            emit(PrMetric::Weight, current.weight, previous.weight);
        }

        // A rep record only counts at the same or a heavier weight
        if current.weight >= previous.weight
            && current.reps >= previous.reps.saturating_add(settings.pr_threshold_reps)
        {
            emit(PrMetric::Reps, current.reps as f64, previous.reps as f64);
        }

        let volume_target = previous.volume * (1.0 + settings.pr_threshold_volume_percent / 100.0);
        if previous.volume > 0.0 && current.volume >= volume_target {
            emit(PrMetric::Volume, current.volume, previous.volume);
        }

        let e1rm_target =
            previous.estimated_1rm * (1.0 + settings.pr_threshold_1rm_percent / 100.0);
        if previous.estimated_1rm > 0.0 && current.estimated_1rm >= e1rm_target {
            emit(PrMetric::Estimated1rm, current.estimated_1rm, previous.estimated_1rm);
        }
    }

    if !events.is_empty() {
        tracing::debug!(
            workout_id = %workout.id,
            count = events.len(),
            "Detected personal records"
        );
    }

    events
}

fn make_event(
    workout: &Workout,
    exercise_id: &str,
    metric: PrMetric,
    new_value: f64,
    old_value: f64,
    current: &BestSet,
) -> PrEvent {
    let diff = round_to(new_value - old_value, 2);
    let diff_percent = if old_value > 0.0 {
        round_to(diff / old_value * 100.0, 1)
    } else {
        100.0
    };

    PrEvent {
        id: PrEvent::event_id(&workout.id, exercise_id, metric),
        exercise_id: exercise_id.to_string(),
        date: workout.start_time,
        workout_id: workout.id.clone(),
        metric,
        new_value,
        old_value,
        diff,
        diff_percent,
        weight: current.weight,
        reps: current.reps,
        volume: current.volume,
        estimated1rm: current.estimated_1rm,
    }
}

//! Property tests for personal record detection and the event log

use chrono::{Duration, TimeZone, Utc};
use ironlog_core::{
    backfill_prs, detect_prs, AppSettings, EventLog, PrMetric, SetTag, Workout, WorkoutExercise,
    WorkoutSet,
};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

const EXERCISES: [&str; 3] = ["squat", "bench", "pullup"];

fn arb_set() -> impl Strategy<Value = (Option<f64>, Option<u32>, bool, Option<SetTag>)> {
    (
        prop::option::of((0u32..=80).prop_map(|steps| steps as f64 * 2.5)),
        prop::option::of(0u32..=15),
        prop::bool::weighted(0.85),
        prop::option::weighted(
            0.2,
            prop_oneof![Just(SetTag::Warmup), Just(SetTag::Dropset), Just(SetTag::Failure)],
        ),
    )
}

/// Sets per exercise slot; an empty slot means the exercise was skipped.
fn arb_workout_body() -> impl Strategy<Value = (Vec<Vec<(Option<f64>, Option<u32>, bool, Option<SetTag>)>>, bool)> {
    (
        prop::collection::vec(prop::collection::vec(arb_set(), 0..4), EXERCISES.len()),
        prop::bool::weighted(0.9),
    )
}

fn arb_history() -> impl Strategy<Value = Vec<Workout>> {
    prop::collection::vec(arb_workout_body(), 1..8)
        .prop_map(|bodies| {
            bodies
                .into_iter()
                .enumerate()
                .map(|(i, (slots, finished))| build_workout(i, slots, finished))
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

fn build_workout(
    index: usize,
    slots: Vec<Vec<(Option<f64>, Option<u32>, bool, Option<SetTag>)>>,
    finished: bool,
) -> Workout {
    let id = format!("w{index}");
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap() + Duration::days(index as i64);
    let exercises = slots
        .into_iter()
        .zip(EXERCISES)
        .filter(|(sets, _)| !sets.is_empty())
        .map(|(sets, exercise_id)| WorkoutExercise {
            id: format!("{id}-{exercise_id}"),
            exercise_id: exercise_id.to_string(),
            sets: sets
                .into_iter()
                .enumerate()
                .map(|(n, (weight, reps, completed, tag))| WorkoutSet {
                    id: format!("{id}-{exercise_id}-{n}"),
                    weight,
                    reps,
                    completed,
                    tag,
                    rpe: None,
                })
                .collect(),
            notes: String::new(),
            superset_group_id: None,
        })
        .collect();

    Workout {
        id: id.clone(),
        name: format!("Session {index}"),
        template_id: None,
        start_time: start,
        end_time: finished.then(|| start + Duration::minutes(60)),
        exercises,
        notes: String::new(),
    }
}

proptest! {
    #[test]
    fn detection_is_deterministic(history in arb_history()) {
        let settings = AppSettings::default();
        for workout in &history {
            let first = detect_prs(workout, &history, &settings);
            let second = detect_prs(workout, &history, &settings);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn backfill_replays_each_workout_against_its_past(history in arb_history()) {
        let settings = AppSettings::default();

        let mut completed: Vec<Workout> =
            history.iter().filter(|w| w.is_completed()).cloned().collect();
        completed.sort_by_key(|w| w.start_time);
        let expected: Vec<_> = completed
            .iter()
            .enumerate()
            .flat_map(|(i, w)| detect_prs(w, &completed[..i], &settings))
            .collect();

        prop_assert_eq!(backfill_prs(&history, &settings), expected);
    }

    #[test]
    fn at_most_one_event_per_metric_and_exercise(history in arb_history()) {
        let settings = AppSettings::default();
        for workout in &history {
            let events = detect_prs(workout, &history, &settings);

            let mut per_exercise: HashMap<&str, Vec<PrMetric>> = HashMap::new();
            for event in &events {
                prop_assert!(event.new_value > event.old_value);
                prop_assert_eq!(&event.workout_id, &workout.id);
                per_exercise.entry(event.exercise_id.as_str()).or_default().push(event.metric);
            }
            for metrics in per_exercise.values() {
                prop_assert!(metrics.len() <= PrMetric::ALL.len());
                let unique: HashSet<_> = metrics.iter().collect();
                prop_assert_eq!(unique.len(), metrics.len());
            }
        }
    }

    #[test]
    fn merging_backfill_twice_adds_nothing(history in arb_history()) {
        let events = backfill_prs(&history, &AppSettings::default());

        let mut log = EventLog::new();
        let added = log.merge(events.clone());
        prop_assert_eq!(added, events.len());

        let snapshot = log.clone();
        prop_assert_eq!(log.merge(events), 0);
        prop_assert_eq!(log, snapshot);
    }
}

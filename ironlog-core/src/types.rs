//! Core domain types for ironlog
//!
//! These types mirror the JSON records persisted in the key-value store
//! (camelCase field names), so data written by earlier versions of the
//! app loads unchanged.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Workout** | One training session; completed once `end_time` is set |
//! | **WorkoutExercise** | One exercise performed within a workout, with its sets |
//! | **Set** | A single logged attempt: weight, reps, completion, tag |
//! | **Working set** | A completed set that is not tagged as warmup |
//! | **PR event** | An immutable record that a workout beat the best-ever performance on one metric |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Sets
// ============================================

/// Marker attached to a set. Untagged sets are plain working sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetTag {
    Warmup,
    Dropset,
    Failure,
}

impl SetTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetTag::Warmup => "warmup",
            SetTag::Dropset => "dropset",
            SetTag::Failure => "failure",
        }
    }
}

impl std::str::FromStr for SetTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warmup" => Ok(SetTag::Warmup),
            "dropset" => Ok(SetTag::Dropset),
            "failure" => Ok(SetTag::Failure),
            _ => Err(format!("unknown set tag: {}", s)),
        }
    }
}

/// One logged attempt within an exercise.
///
/// A missing or zero weight denotes a bodyweight set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    pub id: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub tag: Option<SetTag>,
    /// Rate of perceived exertion (6.0 - 10.0 in half steps)
    #[serde(default)]
    pub rpe: Option<f64>,
}

impl WorkoutSet {
    /// Completed and not a warmup.
    pub fn is_working(&self) -> bool {
        self.completed && self.tag != Some(SetTag::Warmup)
    }

    /// Whether this set may contribute to a best-set summary.
    pub fn qualifies(&self) -> bool {
        self.is_working() && self.reps.is_some_and(|r| r > 0)
    }
}

// ============================================
// Workouts
// ============================================

/// One exercise performed within a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub id: String,
    pub exercise_id: String,
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
    #[serde(default)]
    pub notes: String,
    /// Exercises sharing a group id are performed as a superset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superset_group_id: Option<String>,
}

/// A training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub template_id: Option<String>,
    pub start_time: DateTime<Utc>,
    /// `None` while the workout is still in progress
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
    #[serde(default)]
    pub notes: String,
}

impl Workout {
    /// Only completed workouts take part in personal record tracking.
    pub fn is_completed(&self) -> bool {
        self.end_time.is_some()
    }

    /// First entry for the given exercise, if it was performed.
    pub fn exercise(&self, exercise_id: &str) -> Option<&WorkoutExercise> {
        self.exercises.iter().find(|e| e.exercise_id == exercise_id)
    }

    pub fn contains_exercise(&self, exercise_id: &str) -> bool {
        self.exercise(exercise_id).is_some()
    }
}

// ============================================
// Personal records
// ============================================

/// Metric a personal record was set on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrMetric {
    Weight,
    Reps,
    Volume,
    Estimated1rm,
}

impl PrMetric {
    pub const ALL: [PrMetric; 4] = [
        PrMetric::Weight,
        PrMetric::Reps,
        PrMetric::Volume,
        PrMetric::Estimated1rm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrMetric::Weight => "weight",
            PrMetric::Reps => "reps",
            PrMetric::Volume => "volume",
            PrMetric::Estimated1rm => "estimated1rm",
        }
    }

    /// Display label used by the app.
    pub fn label(&self) -> &'static str {
        match self {
            PrMetric::Weight => "Gewicht",
            PrMetric::Reps => "Wiederholungen",
            PrMetric::Volume => "Volumen",
            PrMetric::Estimated1rm => "Gesch. 1RM",
        }
    }
}

impl std::fmt::Display for PrMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PrMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight" => Ok(PrMetric::Weight),
            "reps" => Ok(PrMetric::Reps),
            "volume" => Ok(PrMetric::Volume),
            "estimated1rm" | "1rm" => Ok(PrMetric::Estimated1rm),
            _ => Err(format!("unknown PR metric: {}", s)),
        }
    }
}

/// An immutable personal record fact.
///
/// The id is derived from `(workout, exercise, metric)` so that detecting
/// records for the same workout twice yields the same ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrEvent {
    pub id: String,
    pub exercise_id: String,
    /// Start time of the workout that set the record
    pub date: DateTime<Utc>,
    pub workout_id: String,
    pub metric: PrMetric,
    pub new_value: f64,
    /// Previous best on this metric, 0 for a first-ever record
    pub old_value: f64,
    pub diff: f64,
    pub diff_percent: f64,

    // Snapshot of the performance that set the record
    pub weight: f64,
    pub reps: u32,
    pub volume: f64,
    pub estimated1rm: f64,
}

impl PrEvent {
    /// Deterministic event id: `{workout_id}-{exercise_id}-{metric}`.
    pub fn event_id(workout_id: &str, exercise_id: &str, metric: PrMetric) -> String {
        format!("{}-{}-{}", workout_id, exercise_id, metric.as_str())
    }

    /// True when there was no earlier performance to compare against.
    pub fn is_first(&self) -> bool {
        self.old_value == 0.0
    }
}

// ============================================
// Body measurements
// ============================================

/// A body measurement entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMeasurement {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub body_fat_percent: Option<f64>,
    #[serde(default)]
    pub calories: Option<f64>,
}

/// Partial update for a [`BodyMeasurement`]. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementPatch {
    pub date: Option<DateTime<Utc>>,
    pub weight: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub calories: Option<f64>,
}

impl BodyMeasurement {
    pub fn apply(&mut self, patch: &MeasurementPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if patch.weight.is_some() {
            self.weight = patch.weight;
        }
        if patch.body_fat_percent.is_some() {
            self.body_fat_percent = patch.body_fat_percent;
        }
        if patch.calories.is_some() {
            self.calories = patch.calories;
        }
    }
}

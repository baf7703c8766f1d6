//! Training journal: workouts, personal records, settings and body
//! measurements on top of the key-value store.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │  finish_workout │ ──► │     Journal      │ ──► │    Database     │
//! │  backfill       │     │                  │     │ (kv documents)  │
//! └─────────────────┘     └──────────────────┘     └─────────────────┘
//!                               │
//!                               ▼
//!                    ┌──────────────────────┐
//!                    │  records engine      │
//!                    │  ├─ detect_prs       │
//!                    │  ├─ backfill_prs     │
//!                    │  └─ EventLog         │
//!                    └──────────────────────┘
//! ```
//!
//! Lists are stored as JSON arrays and edited entry by entry: an entry
//! that fails to decode is skipped when reading and written back untouched,
//! so one bad record never costs the rest of the history. Only the backfill
//! runs inside a transaction, because it must check its marker, merge and
//! set the marker as one step.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ironlog_core::{Config, Database, Journal};
//!
//! let db = Database::open(&Config::database_path())?;
//! db.migrate()?;
//! let journal = Journal::new(db);
//!
//! journal.backfill_if_needed()?;
//! let outcome = journal.finish_workout(workout, chrono::Utc::now())?;
//! ```

mod catalog;

use crate::db::{keys, Database, KeyValueStore, Placement};
use crate::error::{Error, Result};
use crate::records::{backfill_prs, detect_prs, BackfillState, EventLog};
use crate::settings::{resolve_settings, AppSettings, PartialSettings};
use crate::types::{BodyMeasurement, MeasurementPatch, PrEvent, PrMetric, Workout, WorkoutExercise};
use chrono::{DateTime, Utc};

/// Result of [`Journal::backfill_if_needed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackfillOutcome {
    /// The backfill already ran on this installation
    AlreadyBackfilled,
    /// Nothing to replay yet; the marker stays unset so a later call retries
    NoCompletedWorkouts,
    /// History was replayed and the marker set
    Completed {
        /// Events produced by the replay
        detected: usize,
        /// Events that were not already in the log
        added: usize,
    },
}

/// Result of [`Journal::finish_workout`].
#[derive(Debug, Clone, PartialEq)]
pub struct FinishOutcome {
    /// Every record the workout set, in detection order
    pub events: Vec<PrEvent>,
    /// How many of them were not already in the log
    pub added: usize,
}

/// The training journal.
pub struct Journal {
    db: Database,
}

impl Journal {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Get the underlying database (for advanced use)
    pub fn database(&self) -> &Database {
        &self.db
    }

    // ============================================
    // Settings
    // ============================================

    /// Stored settings with defaults filled in.
    pub fn settings(&self) -> Result<AppSettings> {
        let stored: PartialSettings = self.db.read_json(keys::SETTINGS)?;
        Ok(resolve_settings(&stored))
    }

    /// Overlay `update` on the stored settings.
    pub fn update_settings(&self, update: PartialSettings) -> Result<AppSettings> {
        let stored: PartialSettings = self.db.read_json(keys::SETTINGS)?;
        let merged = stored.merge(update);
        self.db.write_json(keys::SETTINGS, &merged)?;
        Ok(resolve_settings(&merged))
    }

    /// Drop stored settings so every field is back at its default.
    pub fn reset_settings(&self) -> Result<()> {
        self.db.remove(keys::SETTINGS)?;
        Ok(())
    }

    // ============================================
    // Workouts
    // ============================================

    fn load_workouts(&self) -> Result<Vec<Workout>> {
        self.db.read_list(keys::WORKOUTS)
    }

    /// All workouts, most recent start first.
    pub fn workouts(&self) -> Result<Vec<Workout>> {
        let mut workouts = self.load_workouts()?;
        workouts.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(workouts)
    }

    pub fn workout(&self, id: &str) -> Result<Option<Workout>> {
        Ok(self.load_workouts()?.into_iter().find(|w| w.id == id))
    }

    /// Insert a new workout or replace the one with the same id.
    pub fn save_workout(&self, workout: &Workout) -> Result<()> {
        self.db
            .upsert_entry(keys::WORKOUTS, &workout.id, workout, Placement::Front)
    }

    /// Delete a workout. Personal records it produced stay in the log.
    pub fn delete_workout(&self, id: &str) -> Result<()> {
        if !self.db.remove_entry(keys::WORKOUTS, id)? {
            return Err(Error::WorkoutNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Completed workouts containing the exercise, most recent first.
    pub fn workouts_for_exercise(&self, exercise_id: &str) -> Result<Vec<Workout>> {
        Ok(self
            .workouts()?
            .into_iter()
            .filter(|w| w.is_completed() && w.contains_exercise(exercise_id))
            .collect())
    }

    /// The exercise as performed in the most recent completed workout.
    pub fn last_for_exercise(&self, exercise_id: &str) -> Result<Option<WorkoutExercise>> {
        Ok(self
            .workouts_for_exercise(exercise_id)?
            .into_iter()
            .next()
            .and_then(|w| w.exercise(exercise_id).cloned()))
    }

    /// Complete a workout, store it and record the personal records it set.
    ///
    /// An end time already on the workout is kept. The outcome lists every
    /// detected record, including ones logged by an earlier call, and how
    /// many were new.
    pub fn finish_workout(&self, mut workout: Workout, end_time: DateTime<Utc>) -> Result<FinishOutcome> {
        if workout.end_time.is_none() {
            workout.end_time = Some(end_time);
        }
        self.save_workout(&workout)?;

        let history = self.load_workouts()?;
        let settings = self.settings()?;
        let events = detect_prs(&workout, &history, &settings);
        let added = self.record_events(events.clone())?;

        tracing::info!(
            workout_id = %workout.id,
            detected = events.len(),
            added,
            "Workout finished"
        );

        Ok(FinishOutcome { events, added })
    }

    // ============================================
    // Personal records
    // ============================================

    /// Merge events into the stored log. Returns how many were new.
    pub fn record_events(&self, events: Vec<PrEvent>) -> Result<usize> {
        if events.is_empty() {
            return Ok(0);
        }
        let fresh = self.events()?.unseen(events);
        self.db.prepend_entries(keys::PR_EVENTS, &fresh)?;
        Ok(fresh.len())
    }

    pub fn events(&self) -> Result<EventLog> {
        Ok(EventLog::from(self.db.read_list::<PrEvent>(keys::PR_EVENTS)?))
    }

    /// Records for one exercise, newest first.
    pub fn for_exercise(&self, exercise_id: &str) -> Result<Vec<PrEvent>> {
        Ok(self
            .events()?
            .for_exercise(exercise_id)
            .into_iter()
            .cloned()
            .collect())
    }

    /// The `limit` most recent records.
    pub fn recent(&self, limit: usize) -> Result<Vec<PrEvent>> {
        Ok(self.events()?.recent(limit).into_iter().cloned().collect())
    }

    /// Records for one exercise and metric, oldest first.
    pub fn timeline(&self, exercise_id: &str, metric: PrMetric) -> Result<Vec<PrEvent>> {
        Ok(self
            .events()?
            .timeline(exercise_id, metric)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn backfill_state(&self) -> Result<BackfillState> {
        self.db.read_json(keys::PR_BACKFILL)
    }

    /// Replay stored history into the record log, once per installation.
    ///
    /// The marker check, the merge and the marker update happen in one
    /// transaction. A run interrupted while `Backfilling` is retried.
    pub fn backfill_if_needed(&self) -> Result<BackfillOutcome> {
        let outcome = self.db.atomically(|tx| {
            let state: BackfillState = tx.read_json(keys::PR_BACKFILL)?;
            if state.is_done() {
                return Ok(BackfillOutcome::AlreadyBackfilled);
            }

            let workouts: Vec<Workout> = tx.read_list(keys::WORKOUTS)?;
            if !workouts.iter().any(Workout::is_completed) {
                return Ok(BackfillOutcome::NoCompletedWorkouts);
            }

            let running = state.begin()?;
            tx.write_json(keys::PR_BACKFILL, &running)?;

            let settings = resolve_settings(&tx.read_json::<PartialSettings>(keys::SETTINGS)?);
            let events = backfill_prs(&workouts, &settings);
            let detected = events.len();

            let log = EventLog::from(tx.read_list::<PrEvent>(keys::PR_EVENTS)?);
            let fresh = log.unseen(events);
            let added = fresh.len();
            tx.prepend_entries(keys::PR_EVENTS, &fresh)?;

            tx.write_json(keys::PR_BACKFILL, &running.finish()?)?;
            Ok(BackfillOutcome::Completed { detected, added })
        })?;

        tracing::info!(?outcome, "Personal record backfill checked");
        Ok(outcome)
    }

    // ============================================
    // Body measurements
    // ============================================

    fn load_measurements(&self) -> Result<Vec<BodyMeasurement>> {
        self.db.read_list(keys::MEASUREMENTS)
    }

    /// All measurements, most recent first.
    pub fn measurements(&self) -> Result<Vec<BodyMeasurement>> {
        let mut measurements = self.load_measurements()?;
        measurements.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(measurements)
    }

    pub fn latest_measurement(&self) -> Result<Option<BodyMeasurement>> {
        Ok(self.measurements()?.into_iter().next())
    }

    pub fn add_measurement(
        &self,
        date: DateTime<Utc>,
        weight: Option<f64>,
        body_fat_percent: Option<f64>,
        calories: Option<f64>,
    ) -> Result<BodyMeasurement> {
        let entry = BodyMeasurement {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            weight,
            body_fat_percent,
            calories,
        };
        self.db
            .prepend_entries(keys::MEASUREMENTS, std::slice::from_ref(&entry))?;
        Ok(entry)
    }

    pub fn update_measurement(&self, id: &str, patch: &MeasurementPatch) -> Result<BodyMeasurement> {
        self.db
            .update_entry(keys::MEASUREMENTS, id, |m: &mut BodyMeasurement| m.apply(patch))?
            .ok_or_else(|| Error::MeasurementNotFound(id.to_string()))
    }

    pub fn remove_measurement(&self, id: &str) -> Result<()> {
        if !self.db.remove_entry(keys::MEASUREMENTS, id)? {
            return Err(Error::MeasurementNotFound(id.to_string()));
        }
        Ok(())
    }
}

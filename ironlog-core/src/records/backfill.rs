//! Historical backfill of personal records.
//!
//! Workouts logged before record tracking existed are replayed in
//! chronological order, each compared only against the workouts that came
//! before it. The replay is guarded by a persisted [`BackfillState`] so it
//! runs once per installation.

use super::detect::detect_prs;
use crate::error::{Error, Result};
use crate::settings::AppSettings;
use crate::types::{PrEvent, Workout};
use serde::{Deserialize, Serialize};

/// Replay all completed workouts oldest-first and collect their records.
pub fn backfill_prs(workouts: &[Workout], settings: &AppSettings) -> Vec<PrEvent> {
    let mut completed: Vec<Workout> = workouts
        .iter()
        .filter(|w| w.is_completed())
        .cloned()
        .collect();
    completed.sort_by_key(|w| w.start_time);

    let events: Vec<PrEvent> = completed
        .iter()
        .enumerate()
        .flat_map(|(i, workout)| detect_prs(workout, &completed[..i], settings))
        .collect();

    tracing::info!(
        workouts = completed.len(),
        events = events.len(),
        "Replayed workout history for personal records"
    );

    events
}

/// Lifecycle of the one-time backfill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackfillState {
    #[default]
    NotBackfilled,
    /// A run started but never recorded completion
    Backfilling,
    Backfilled,
}

impl BackfillState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackfillState::NotBackfilled => "not_backfilled",
            BackfillState::Backfilling => "backfilling",
            BackfillState::Backfilled => "backfilled",
        }
    }

    pub fn is_done(&self) -> bool {
        *self == BackfillState::Backfilled
    }

    /// Start a run. An interrupted run may be restarted.
    pub fn begin(self) -> Result<Self> {
        match self {
            BackfillState::NotBackfilled | BackfillState::Backfilling => {
                Ok(BackfillState::Backfilling)
            }
            BackfillState::Backfilled => Err(self.invalid(BackfillState::Backfilling)),
        }
    }

    /// Record a finished run.
    pub fn finish(self) -> Result<Self> {
        match self {
            BackfillState::Backfilling => Ok(BackfillState::Backfilled),
            _ => Err(self.invalid(BackfillState::Backfilled)),
        }
    }

    fn invalid(self, to: BackfillState) -> Error {
        Error::BackfillTransition {
            from: self.as_str(),
            to: to.as_str(),
        }
    }
}

impl std::fmt::Display for BackfillState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! The personal record event log.
//!
//! Events are kept in insertion order, newest batch first. Ids are unique:
//! merging drops any candidate whose id is already present, which makes
//! re-running detection over the same workout harmless. Query methods sort
//! by event date and do not rely on insertion order.

use crate::types::{PrEvent, PrMetric};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PrEvent>", into = "Vec<PrEvent>")]
pub struct EventLog {
    events: Vec<PrEvent>,
}

impl From<Vec<PrEvent>> for EventLog {
    /// Later duplicates of an id are dropped.
    fn from(events: Vec<PrEvent>) -> Self {
        let mut log = EventLog::default();
        log.merge(events);
        log
    }
}

impl From<EventLog> for Vec<PrEvent> {
    fn from(log: EventLog) -> Self {
        log.events
    }
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.events.iter().any(|e| e.id == id)
    }

    /// Events in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PrEvent> {
        self.events.iter()
    }

    /// Candidates whose ids are neither in the log nor earlier in the batch.
    pub fn unseen(&self, candidates: impl IntoIterator<Item = PrEvent>) -> Vec<PrEvent> {
        let mut seen: HashSet<String> = self.events.iter().map(|e| e.id.clone()).collect();
        candidates
            .into_iter()
            .filter(|e| seen.insert(e.id.clone()))
            .collect()
    }

    /// Prepend the candidates whose ids are not yet in the log.
    ///
    /// Returns the number of events added.
    pub fn merge(&mut self, candidates: impl IntoIterator<Item = PrEvent>) -> usize {
        let fresh = self.unseen(candidates);
        let added = fresh.len();
        if added > 0 {
            let existing = std::mem::replace(&mut self.events, fresh);
            self.events.extend(existing);
        }
        added
    }

    /// All events, newest first. Events on the same date keep insertion order.
    pub fn newest_first(&self) -> Vec<&PrEvent> {
        let mut sorted: Vec<&PrEvent> = self.events.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Events for one exercise, newest first.
    pub fn for_exercise(&self, exercise_id: &str) -> Vec<&PrEvent> {
        self.newest_first()
            .into_iter()
            .filter(|e| e.exercise_id == exercise_id)
            .collect()
    }

    /// The `limit` most recent events across all exercises.
    pub fn recent(&self, limit: usize) -> Vec<&PrEvent> {
        let mut sorted = self.newest_first();
        sorted.truncate(limit);
        sorted
    }

    /// Events for one exercise and metric, oldest first (for progression charts).
    pub fn timeline(&self, exercise_id: &str, metric: PrMetric) -> Vec<&PrEvent> {
        let mut events: Vec<&PrEvent> = self
            .newest_first()
            .into_iter()
            .filter(|e| e.exercise_id == exercise_id && e.metric == metric)
            .collect();
        events.reverse();
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(workout_id: &str, day: u32, exercise_id: &str, metric: PrMetric) -> PrEvent {
        PrEvent {
            id: PrEvent::event_id(workout_id, exercise_id, metric),
            exercise_id: exercise_id.to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, day, 18, 0, 0).unwrap(),
            workout_id: workout_id.to_string(),
            metric,
            new_value: day as f64,
            old_value: 0.0,
            diff: day as f64,
            diff_percent: 100.0,
            weight: day as f64,
            reps: 5,
            volume: 0.0,
            estimated1rm: 0.0,
        }
    }

    #[test]
    fn test_merge_prepends_new_events() {
        let mut log = EventLog::new();
        assert_eq!(log.merge(vec![event("w1", 1, "squat", PrMetric::Weight)]), 1);
        assert_eq!(log.merge(vec![event("w2", 2, "squat", PrMetric::Weight)]), 1);

        let ids: Vec<_> = log.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["w2-squat-weight", "w1-squat-weight"]);
    }

    #[test]
    fn test_merge_drops_known_ids() {
        let batch = vec![
            event("w1", 1, "squat", PrMetric::Weight),
            event("w1", 1, "squat", PrMetric::Volume),
        ];
        let mut log = EventLog::new();
        assert_eq!(log.merge(batch.clone()), 2);
        let once = log.clone();

        assert_eq!(log.merge(batch), 0);
        assert_eq!(log, once);
    }

    #[test]
    fn test_merge_dedupes_within_batch() {
        let mut log = EventLog::new();
        let dup = event("w1", 1, "squat", PrMetric::Weight);
        assert_eq!(log.merge(vec![dup.clone(), dup]), 1);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_unseen_leaves_log_alone() {
        let mut log = EventLog::new();
        log.merge(vec![event("w1", 1, "squat", PrMetric::Weight)]);

        let fresh = log.unseen(vec![
            event("w1", 1, "squat", PrMetric::Weight),
            event("w2", 2, "squat", PrMetric::Weight),
            event("w2", 2, "squat", PrMetric::Weight),
        ]);
        let ids: Vec<_> = fresh.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["w2-squat-weight"]);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_queries_sort_by_date() {
        let mut log = EventLog::new();
        // Inserted out of date order on purpose
        log.merge(vec![
            event("w2", 2, "squat", PrMetric::Weight),
            event("w3", 3, "bench", PrMetric::Weight),
        ]);
        log.merge(vec![
            event("w1", 1, "squat", PrMetric::Weight),
            event("w4", 4, "squat", PrMetric::Reps),
        ]);

        let recent: Vec<_> = log.recent(2).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(recent, vec!["w4-squat-reps", "w3-bench-weight"]);

        let squat: Vec<_> = log
            .for_exercise("squat")
            .iter()
            .map(|e| e.workout_id.as_str())
            .collect();
        assert_eq!(squat, vec!["w4", "w2", "w1"]);

        let timeline: Vec<_> = log
            .timeline("squat", PrMetric::Weight)
            .iter()
            .map(|e| e.workout_id.as_str())
            .collect();
        assert_eq!(timeline, vec!["w1", "w2"]);

        assert_eq!(log.recent(10).len(), 4);
        assert!(log.timeline("deadlift", PrMetric::Weight).is_empty());
    }

    #[test]
    fn test_deserialize_drops_duplicate_ids() {
        let a = event("w1", 1, "squat", PrMetric::Weight);
        let json = serde_json::to_string(&vec![a.clone(), a]).unwrap();
        let log: EventLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log.len(), 1);

        let back = serde_json::to_value(&log).unwrap();
        assert!(back.is_array());
    }
}

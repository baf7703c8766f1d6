//! Workout templates and the folders that group them.
//!
//! A template is a workout plan without completion state. Every copy made
//! from one (a new template, a duplicate, a started workout) gets fresh ids
//! for itself, its exercises and its sets.

use super::new_id;
use crate::types::{SetTag, Workout, WorkoutExercise, WorkoutSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A planned set: target weight and reps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSet {
    pub id: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub tag: Option<SetTag>,
    #[serde(default)]
    pub rpe: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateExercise {
    pub id: String,
    pub exercise_id: String,
    #[serde(default)]
    pub sets: Vec<TemplateSet>,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superset_group_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    /// `None` for templates at the top level
    #[serde(default)]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub exercises: Vec<TemplateExercise>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub last_used: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named group of templates. Folders are listed by `order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub order: u32,
}

impl TemplateExercise {
    fn copy(&self) -> TemplateExercise {
        TemplateExercise {
            id: new_id(),
            sets: self
                .sets
                .iter()
                .map(|s| TemplateSet {
                    id: new_id(),
                    ..s.clone()
                })
                .collect(),
            ..self.clone()
        }
    }
}

impl Template {
    /// A new, never used template.
    pub fn new(
        name: impl Into<String>,
        folder_id: Option<String>,
        exercises: Vec<TemplateExercise>,
        notes: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Template {
            id: new_id(),
            name: name.into(),
            folder_id,
            exercises,
            notes: notes.into(),
            last_used: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Capture a workout as a plan. Completion state is dropped.
    pub fn from_workout(
        workout: &Workout,
        name: impl Into<String>,
        folder_id: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let exercises = workout
            .exercises
            .iter()
            .map(|e| TemplateExercise {
                id: new_id(),
                exercise_id: e.exercise_id.clone(),
                sets: e
                    .sets
                    .iter()
                    .map(|s| TemplateSet {
                        id: new_id(),
                        weight: s.weight,
                        reps: s.reps,
                        tag: s.tag,
                        rpe: s.rpe,
                    })
                    .collect(),
                notes: e.notes.clone(),
                superset_group_id: e.superset_group_id.clone(),
            })
            .collect();
        Template::new(name, folder_id, exercises, workout.notes.clone(), now)
    }

    /// Copy named "<name> (Kopie)" in the same folder.
    pub fn duplicate(&self, now: DateTime<Utc>) -> Self {
        Template::new(
            format!("{} (Kopie)", self.name),
            self.folder_id.clone(),
            self.exercises.iter().map(TemplateExercise::copy).collect(),
            self.notes.clone(),
            now,
        )
    }

    /// An in-progress workout following this plan, with no set completed.
    pub fn start_workout(&self, start_time: DateTime<Utc>) -> Workout {
        let exercises = self
            .exercises
            .iter()
            .map(|e| WorkoutExercise {
                id: new_id(),
                exercise_id: e.exercise_id.clone(),
                sets: e
                    .sets
                    .iter()
                    .map(|s| WorkoutSet {
                        id: new_id(),
                        weight: s.weight,
                        reps: s.reps,
                        completed: false,
                        tag: s.tag,
                        rpe: s.rpe,
                    })
                    .collect(),
                notes: e.notes.clone(),
                superset_group_id: e.superset_group_id.clone(),
            })
            .collect();

        Workout {
            id: new_id(),
            name: self.name.clone(),
            template_id: Some(self.id.clone()),
            start_time,
            end_time: None,
            exercises,
            notes: self.notes.clone(),
        }
    }
}

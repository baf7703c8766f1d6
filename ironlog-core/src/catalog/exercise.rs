//! Exercise definitions: the built-in library plus user-created exercises.

use super::seed::BUILT_IN;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Core,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    FullBody,
    Cardio,
    Other,
}

impl MuscleGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Forearms => "forearms",
            MuscleGroup::Core => "core",
            MuscleGroup::Quads => "quads",
            MuscleGroup::Hamstrings => "hamstrings",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Calves => "calves",
            MuscleGroup::FullBody => "full_body",
            MuscleGroup::Cardio => "cardio",
            MuscleGroup::Other => "other",
        }
    }
}

impl std::str::FromStr for MuscleGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chest" => Ok(MuscleGroup::Chest),
            "back" => Ok(MuscleGroup::Back),
            "shoulders" => Ok(MuscleGroup::Shoulders),
            "biceps" => Ok(MuscleGroup::Biceps),
            "triceps" => Ok(MuscleGroup::Triceps),
            "forearms" => Ok(MuscleGroup::Forearms),
            "core" => Ok(MuscleGroup::Core),
            "quads" => Ok(MuscleGroup::Quads),
            "hamstrings" => Ok(MuscleGroup::Hamstrings),
            "glutes" => Ok(MuscleGroup::Glutes),
            "calves" => Ok(MuscleGroup::Calves),
            "full_body" => Ok(MuscleGroup::FullBody),
            "cardio" => Ok(MuscleGroup::Cardio),
            "other" => Ok(MuscleGroup::Other),
            _ => Err(format!("unknown muscle group: {}", s)),
        }
    }
}

/// Equipment family of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Barbell,
    Dumbbell,
    Machine,
    Cable,
    Bodyweight,
    Band,
    Kettlebell,
    Other,
}

impl ExerciseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseCategory::Barbell => "barbell",
            ExerciseCategory::Dumbbell => "dumbbell",
            ExerciseCategory::Machine => "machine",
            ExerciseCategory::Cable => "cable",
            ExerciseCategory::Bodyweight => "bodyweight",
            ExerciseCategory::Band => "band",
            ExerciseCategory::Kettlebell => "kettlebell",
            ExerciseCategory::Other => "other",
        }
    }
}

impl std::str::FromStr for ExerciseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "barbell" => Ok(ExerciseCategory::Barbell),
            "dumbbell" => Ok(ExerciseCategory::Dumbbell),
            "machine" => Ok(ExerciseCategory::Machine),
            "cable" => Ok(ExerciseCategory::Cable),
            "bodyweight" => Ok(ExerciseCategory::Bodyweight),
            "band" => Ok(ExerciseCategory::Band),
            "kettlebell" => Ok(ExerciseCategory::Kettlebell),
            "other" => Ok(ExerciseCategory::Other),
            _ => Err(format!("unknown exercise category: {}", s)),
        }
    }
}

/// An exercise that can be added to workouts and templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: ExerciseCategory,
    pub muscle_group: MuscleGroup,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default)]
    pub equipment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_note: Option<String>,
    /// Overrides the settings' work rest timer, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_rest_timer_work: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_rest_timer_warmup: Option<u32>,
}

impl Exercise {
    /// Case-insensitive substring match on name or equipment.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.equipment.to_lowercase().contains(&query)
    }
}

/// Fields for a user-created exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    pub name: String,
    pub category: ExerciseCategory,
    pub muscle_group: MuscleGroup,
    pub equipment: String,
}

/// Partial update for a custom [`Exercise`]. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExercisePatch {
    pub name: Option<String>,
    pub category: Option<ExerciseCategory>,
    pub muscle_group: Option<MuscleGroup>,
    pub equipment: Option<String>,
    pub pinned_note: Option<String>,
    pub default_rest_timer_work: Option<u32>,
    pub default_rest_timer_warmup: Option<u32>,
}

impl Exercise {
    pub fn apply(&mut self, patch: ExercisePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(muscle_group) = patch.muscle_group {
            self.muscle_group = muscle_group;
        }
        if let Some(equipment) = patch.equipment {
            self.equipment = equipment;
        }
        if patch.pinned_note.is_some() {
            self.pinned_note = patch.pinned_note;
        }
        if patch.default_rest_timer_work.is_some() {
            self.default_rest_timer_work = patch.default_rest_timer_work;
        }
        if patch.default_rest_timer_warmup.is_some() {
            self.default_rest_timer_warmup = patch.default_rest_timer_warmup;
        }
    }
}

/// The exercise library shipped with the app, in display order.
pub fn built_in_exercises() -> Vec<Exercise> {
    BUILT_IN
        .iter()
        .map(|&(id, name, category, muscle_group, equipment)| Exercise {
            id: id.to_string(),
            name: name.to_string(),
            category,
            muscle_group,
            is_custom: false,
            equipment: equipment.to_string(),
            pinned_note: None,
            default_rest_timer_work: None,
            default_rest_timer_warmup: None,
        })
        .collect()
}

pub fn is_built_in(id: &str) -> bool {
    BUILT_IN.iter().any(|&(built_in, ..)| built_in == id)
}

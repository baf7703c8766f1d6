//! Planning data: the exercise library, workout templates and folders.
//!
//! None of this feeds personal record detection, which keys on exercise ids
//! alone. Exercise names are only looked up for display.

pub mod exercise;
mod seed;
pub mod template;

pub use exercise::{
    built_in_exercises, is_built_in, Exercise, ExerciseCategory, ExercisePatch, MuscleGroup,
    NewExercise,
};
pub use template::{Folder, Template, TemplateExercise, TemplateSet};

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

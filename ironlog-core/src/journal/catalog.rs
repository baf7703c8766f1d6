//! Templates, folders and the exercise library.

use super::Journal;
use crate::catalog::{
    built_in_exercises, is_built_in, new_id, Exercise, ExercisePatch, Folder, MuscleGroup,
    NewExercise, Template,
};
use crate::db::{keys, KeyValueStore, Placement};
use crate::error::{Error, Result};
use crate::types::Workout;
use chrono::{DateTime, Utc};

impl Journal {
    // ============================================
    // Templates
    // ============================================

    /// All templates, most recently created first.
    pub fn templates(&self) -> Result<Vec<Template>> {
        self.db.read_list(keys::TEMPLATES)
    }

    pub fn template(&self, id: &str) -> Result<Option<Template>> {
        Ok(self.templates()?.into_iter().find(|t| t.id == id))
    }

    /// Templates in a folder, or at the top level for `None`.
    pub fn templates_in_folder(&self, folder_id: Option<&str>) -> Result<Vec<Template>> {
        Ok(self
            .templates()?
            .into_iter()
            .filter(|t| t.folder_id.as_deref() == folder_id)
            .collect())
    }

    /// Store a new template in front of the others.
    pub fn create_template(&self, template: &Template) -> Result<()> {
        self.db
            .upsert_entry(keys::TEMPLATES, &template.id, template, Placement::Front)
    }

    /// Edit a template in place and bump its `updated_at`.
    pub fn update_template<F>(&self, id: &str, now: DateTime<Utc>, f: F) -> Result<Template>
    where
        F: FnOnce(&mut Template),
    {
        self.db
            .update_entry(keys::TEMPLATES, id, |t: &mut Template| {
                f(t);
                t.updated_at = now;
            })?
            .ok_or_else(|| Error::TemplateNotFound(id.to_string()))
    }

    pub fn delete_template(&self, id: &str) -> Result<()> {
        if !self.db.remove_entry(keys::TEMPLATES, id)? {
            return Err(Error::TemplateNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Record that a workout was started from the template.
    pub fn mark_template_used(&self, id: &str, now: DateTime<Utc>) -> Result<Template> {
        self.db
            .update_entry(keys::TEMPLATES, id, |t: &mut Template| t.last_used = Some(now))?
            .ok_or_else(|| Error::TemplateNotFound(id.to_string()))
    }

    /// Store a stored workout's exercises and sets as a new template.
    pub fn save_workout_as_template(
        &self,
        workout_id: &str,
        name: &str,
        folder_id: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Template> {
        let workout = self
            .workout(workout_id)?
            .ok_or_else(|| Error::WorkoutNotFound(workout_id.to_string()))?;
        let template = Template::from_workout(&workout, name, folder_id, now);
        self.create_template(&template)?;
        tracing::info!(template_id = %template.id, workout_id, "Saved workout as template");
        Ok(template)
    }

    pub fn duplicate_template(&self, id: &str, now: DateTime<Utc>) -> Result<Template> {
        let original = self
            .template(id)?
            .ok_or_else(|| Error::TemplateNotFound(id.to_string()))?;
        let copy = original.duplicate(now);
        self.create_template(&copy)?;
        Ok(copy)
    }

    /// Begin a workout from a template and mark the template used.
    ///
    /// The workout is returned, not stored; it is saved when finished.
    pub fn start_from_template(&self, id: &str, now: DateTime<Utc>) -> Result<Workout> {
        let template = self.mark_template_used(id, now)?;
        Ok(template.start_workout(now))
    }

    // ============================================
    // Folders
    // ============================================

    /// All folders by their `order`.
    pub fn folders(&self) -> Result<Vec<Folder>> {
        let mut folders: Vec<Folder> = self.db.read_list(keys::FOLDERS)?;
        folders.sort_by_key(|f| f.order);
        Ok(folders)
    }

    /// Add a folder after the existing ones.
    pub fn create_folder(&self, name: &str) -> Result<Folder> {
        let order = self
            .folders()?
            .iter()
            .map(|f| f.order + 1)
            .max()
            .unwrap_or(0);
        let folder = Folder {
            id: new_id(),
            name: name.to_string(),
            order,
        };
        self.db
            .upsert_entry(keys::FOLDERS, &folder.id, &folder, Placement::Back)?;
        Ok(folder)
    }

    pub fn rename_folder(&self, id: &str, name: &str) -> Result<Folder> {
        self.db
            .update_entry(keys::FOLDERS, id, |f: &mut Folder| f.name = name.to_string())?
            .ok_or_else(|| Error::FolderNotFound(id.to_string()))
    }

    /// Delete a folder. Its templates move to the top level.
    pub fn delete_folder(&self, id: &str, now: DateTime<Utc>) -> Result<()> {
        if !self.db.remove_entry(keys::FOLDERS, id)? {
            return Err(Error::FolderNotFound(id.to_string()));
        }
        for template in self.templates_in_folder(Some(id))? {
            self.update_template(&template.id, now, |t| t.folder_id = None)?;
        }
        Ok(())
    }

    // ============================================
    // Exercises
    // ============================================

    fn custom_exercises(&self) -> Result<Vec<Exercise>> {
        self.db.read_list(keys::CUSTOM_EXERCISES)
    }

    /// Built-in exercises followed by custom ones.
    pub fn exercises(&self) -> Result<Vec<Exercise>> {
        let mut exercises = built_in_exercises();
        exercises.extend(self.custom_exercises()?);
        Ok(exercises)
    }

    pub fn exercise(&self, id: &str) -> Result<Option<Exercise>> {
        Ok(self.exercises()?.into_iter().find(|e| e.id == id))
    }

    /// Display name for an exercise id; unknown ids are shown as is.
    pub fn exercise_name(&self, id: &str) -> Result<String> {
        Ok(self
            .exercise(id)?
            .map(|e| e.name)
            .unwrap_or_else(|| id.to_string()))
    }

    pub fn exercises_by_muscle_group(&self, muscle_group: MuscleGroup) -> Result<Vec<Exercise>> {
        Ok(self
            .exercises()?
            .into_iter()
            .filter(|e| e.muscle_group == muscle_group)
            .collect())
    }

    /// Exercises whose name or equipment contains `query`, ignoring case.
    pub fn search_exercises(&self, query: &str) -> Result<Vec<Exercise>> {
        Ok(self
            .exercises()?
            .into_iter()
            .filter(|e| e.matches(query))
            .collect())
    }

    pub fn create_exercise(&self, new: NewExercise) -> Result<Exercise> {
        let exercise = Exercise {
            id: new_id(),
            name: new.name,
            category: new.category,
            muscle_group: new.muscle_group,
            is_custom: true,
            equipment: new.equipment,
            pinned_note: None,
            default_rest_timer_work: None,
            default_rest_timer_warmup: None,
        };
        self.db.upsert_entry(
            keys::CUSTOM_EXERCISES,
            &exercise.id,
            &exercise,
            Placement::Back,
        )?;
        Ok(exercise)
    }

    /// Change a custom exercise. Built-in exercises are read-only.
    pub fn update_exercise(&self, id: &str, patch: ExercisePatch) -> Result<Exercise> {
        if is_built_in(id) {
            return Err(Error::BuiltInExercise(id.to_string()));
        }
        self.db
            .update_entry(keys::CUSTOM_EXERCISES, id, |e: &mut Exercise| e.apply(patch))?
            .ok_or_else(|| Error::ExerciseNotFound(id.to_string()))
    }

    /// Delete a custom exercise. Workouts and records that use it are kept.
    pub fn delete_exercise(&self, id: &str) -> Result<()> {
        if is_built_in(id) {
            return Err(Error::BuiltInExercise(id.to_string()));
        }
        if !self.db.remove_entry(keys::CUSTOM_EXERCISES, id)? {
            return Err(Error::ExerciseNotFound(id.to_string()));
        }
        Ok(())
    }
}

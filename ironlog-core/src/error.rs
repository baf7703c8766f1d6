//! Error types for ironlog-core

use thiserror::Error;

/// Main error type for the ironlog-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Workout not found
    #[error("workout not found: {0}")]
    WorkoutNotFound(String),

    /// Body measurement not found
    #[error("measurement not found: {0}")]
    MeasurementNotFound(String),

    /// Template not found
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Template folder not found
    #[error("folder not found: {0}")]
    FolderNotFound(String),

    /// Exercise not found in the library
    #[error("exercise not found: {0}")]
    ExerciseNotFound(String),

    /// Built-in exercises cannot be changed or deleted
    #[error("built-in exercise cannot be modified: {0}")]
    BuiltInExercise(String),

    /// Backfill lifecycle was asked to move backwards or skip a step
    #[error("invalid backfill transition from {from} to {to}")]
    BackfillTransition {
        from: &'static str,
        to: &'static str,
    },
}

/// Result type alias for ironlog-core
pub type Result<T> = std::result::Result<T, Error>;

//! Database layer for ironlog
//!
//! This module provides the storage layer using SQLite with:
//! - Schema migrations
//! - A key-value repository holding JSON documents
//! - Transactions for read-check-write steps

pub mod repo;
pub mod schema;

pub use repo::{Database, KeyValueStore, Placement, StoreTransaction};

/// Keys of the documents kept in the store.
pub mod keys {
    /// `Vec<Workout>`, newest first
    pub const WORKOUTS: &str = "fitness-workouts";
    /// `EventLog`
    pub const PR_EVENTS: &str = "fitness-pr-events";
    /// `PartialSettings`
    pub const SETTINGS: &str = "fitness-settings";
    /// `BackfillState`
    pub const PR_BACKFILL: &str = "fitness-pr-backfill";
    /// `Vec<BodyMeasurement>`, newest first
    pub const MEASUREMENTS: &str = "fitness-measurements";
    /// `Vec<Template>`, newest first
    pub const TEMPLATES: &str = "fitness-templates";
    /// `Vec<Folder>`
    pub const FOLDERS: &str = "fitness-folders";
    /// `Vec<Exercise>`, user-created only
    pub const CUSTOM_EXERCISES: &str = "fitness-custom-exercises";
}

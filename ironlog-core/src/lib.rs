//! # ironlog-core
//!
//! Core library for ironlog - a workout log with personal record tracking.
//!
//! This library provides:
//! - Domain types for workouts, sets, personal records and measurements
//! - The exercise library, workout templates and folders
//! - The personal record engine (detection, backfill, event log)
//! - Key-value storage on SQLite
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! - [`records`] is pure computation: it never touches storage and never fails.
//! - [`db`] stores JSON documents under fixed keys.
//! - [`Journal`] joins the two: it loads documents, runs the engine and
//!   writes the results back.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ironlog_core::{Config, Database, Journal};
//!
//! // Load configuration
//! let config = Config::load().expect("failed to load config");
//!
//! // Open database
//! let db = Database::open(&config.resolved_database_path()).expect("failed to open database");
//! db.migrate().expect("failed to run migrations");
//!
//! let journal = Journal::new(db);
//! for event in journal.recent(10).expect("failed to read records") {
//!     println!("{}: {}", event.exercise_id, ironlog_core::format::format_pr_diff(&event));
//! }
//! ```

// Re-export commonly used items at the crate root
pub use catalog::{Exercise, Folder, Template};
pub use config::Config;
pub use db::{Database, KeyValueStore};
pub use error::{Error, Result};
pub use journal::{BackfillOutcome, FinishOutcome, Journal};
pub use records::{backfill_prs, detect_prs, BackfillState, BestSet, EventLog};
pub use settings::{resolve_settings, AppSettings, PartialSettings};
pub use types::*;

// Public modules
pub mod calculations;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod journal;
pub mod logging;
pub mod records;
pub mod settings;
pub mod types;

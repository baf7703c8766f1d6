//! Personal record engine
//!
//! Detects when a finished workout beats the athlete's best-ever
//! performance on an exercise and keeps a deduplicated log of those events.
//!
//! ## Pipeline
//!
//! ```text
//!  finished workout ──► best_set()        current best per exercise
//!                            │
//!  earlier workouts ──► previous_best()   best-ever per metric
//!                            │
//!                            ▼
//!                       detect_prs()      thresholds from AppSettings
//!                            │
//!                            ▼
//!                     EventLog::merge()   dedup by {workout}-{exercise}-{metric}
//! ```
//!
//! [`backfill_prs`] runs the same pipeline over the full history, oldest
//! workout first, so each workout only sees the workouts before it.
//!
//! Tracked metrics:
//! - **weight**: heaviest working set (ties broken by reps)
//! - **reps**: reps of that heaviest set, only at the same or a higher weight
//! - **volume**: sum of `weight * reps` over working sets
//! - **estimated1rm**: best Epley estimate among weighted sets
//!
//! Reps are judged on the heaviest set of the session, so a high-rep set
//! at a lighter weight never produces a reps record.

pub mod backfill;
pub mod detect;
pub mod history;
pub mod log;
pub mod summary;

pub use backfill::{backfill_prs, BackfillState};
pub use detect::detect_prs;
pub use history::previous_best;
pub use log::EventLog;
pub use summary::{best_set, BestSet};

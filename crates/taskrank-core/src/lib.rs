//! # Taskrank Core Library
//!
//! This library provides the core logic for ranking work items by computed
//! priority. It implements a CLI-first philosophy where the operations are
//! available via a standalone CLI binary, with any other transport being a
//! thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Normalization**: total conversion of loosely-typed task records into
//!   well-formed records, with a defined fallback for every malformed field
//! - **Scoring**: a pure multi-factor priority function of a task and an
//!   explicitly injected reference day
//! - **Ranking**: stable descending sort over scored tasks
//! - **Explanation**: human-readable per-factor justification that shares
//!   its decision tree with the scoring function
//!
//! The core holds no state, performs no I/O, and never reads the wall
//! clock; "today" is sampled once per batch by the caller.
//!
//! ## Key Components
//!
//! - [`NormalizedTask`]: fully-defaulted, typed task record
//! - [`ScoreCalculator`]: priority score computation
//! - [`rank`]: stable ranking of scored tasks
//! - [`explain`]: explanation rendering
//! - [`analyze`] / [`suggest`]: batch operations consumed by the boundary

pub mod batch;
pub mod date;
pub mod error;
pub mod explain;
pub mod rank;
pub mod scoring;
pub mod task;

pub use batch::{analyze, sample_tasks, suggest, TaskPayload, DEFAULT_SUGGESTION_LIMIT};
pub use date::parse_due_date;
pub use error::PayloadError;
pub use explain::explain;
pub use rank::rank;
pub use scoring::{EffortBucket, ScoreCalculator, UrgencyBand};
pub use task::{NormalizedTask, ScoredTask};

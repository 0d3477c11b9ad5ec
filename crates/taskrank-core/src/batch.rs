//! Batch analyze/suggest operations.
//!
//! The transport boundary hands these functions a sequence of loosely-typed
//! task records; they come back normalized, scored, ranked, and (for
//! suggestions) explained. The reference day is sampled once by the caller
//! and applied to the whole batch, so tasks in one call are compared on a
//! consistent calendar day even if evaluation spans midnight.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::PayloadError;
use crate::explain::explain;
use crate::rank::rank;
use crate::scoring::ScoreCalculator;
use crate::task::{NormalizedTask, ScoredTask};

/// Number of suggestions returned when the caller does not ask otherwise.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Request payload: either a bare array of task records or a wrapper object
/// exposing them under a `tasks` key.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TaskPayload {
    /// `[{...}, {...}]`
    Records(Vec<Value>),
    /// `{"tasks": [{...}, ...]}`; a wrapper without the key means "empty"
    Wrapper {
        #[serde(default)]
        tasks: Vec<Value>,
    },
}

impl TaskPayload {
    /// Parse a JSON request body.
    ///
    /// An empty body is an empty batch. Anything else must be valid JSON of
    /// one of the two accepted shapes; this is the only rejection the core
    /// performs, and it is a client-input error.
    pub fn parse(input: &str) -> Result<Self, PayloadError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(TaskPayload::Records(Vec::new()));
        }
        Ok(serde_json::from_str(input)?)
    }

    /// Extract the task records.
    pub fn into_records(self) -> Vec<Value> {
        match self {
            TaskPayload::Records(records) => records,
            TaskPayload::Wrapper { tasks } => tasks,
        }
    }
}

/// Normalize, score, and rank a batch of raw task records.
///
/// Output records carry their passthrough fields, the normalized fields
/// (which win on collision), and the computed score, ordered best-first.
pub fn analyze(records: &[Value], today: NaiveDate) -> Vec<ScoredTask> {
    let calculator = ScoreCalculator::new(today);
    let mut scored: Vec<ScoredTask> = records
        .iter()
        .map(|raw| {
            let task = NormalizedTask::from_value(raw);
            let score = calculator.score(&task);
            ScoredTask::new(raw, task, score)
        })
        .collect();
    rank(&mut scored);
    scored
}

/// Rank a batch and return the top `limit` tasks, each with an explanation.
///
/// An empty batch falls back to [`sample_tasks`] dated `today`, so the
/// operation is demonstrable with no input at all.
pub fn suggest(records: &[Value], today: NaiveDate, limit: usize) -> Vec<ScoredTask> {
    let fallback;
    let records = if records.is_empty() {
        fallback = sample_tasks(today);
        &fallback
    } else {
        records
    };

    let mut scored = analyze(records, today);
    scored.truncate(limit);
    for entry in &mut scored {
        entry.explanation = Some(explain(&entry.task, entry.score));
    }
    scored
}

/// Fixed demonstration tasks used when suggest receives no input.
pub fn sample_tasks(today: NaiveDate) -> Vec<Value> {
    let today = today.to_string();
    vec![
        json!({
            "title": "Finish assignment report",
            "due_date": today,
            "importance": 9,
            "estimated_hours": 3,
            "dependencies": [],
        }),
        json!({
            "title": "Quick inbox cleanup",
            "due_date": today,
            "importance": 5,
            "estimated_hours": 1,
            "dependencies": [],
        }),
        json!({
            "title": "Refactor old code module",
            "due_date": today,
            "importance": 6,
            "estimated_hours": 4,
            "dependencies": [1],
        }),
    ]
}

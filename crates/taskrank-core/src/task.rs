//! Task record normalization.
//!
//! Raw task records arrive as loosely-typed JSON: fields may be missing,
//! hold the wrong type, or sit outside their documented range. Normalization
//! is total -- every record, however malformed, produces exactly one
//! well-formed [`NormalizedTask`] through one parse-or-default combinator
//! per field. This module never fails and never panics; untyped values do
//! not survive past it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::date::parse_due_date;

/// Title substituted when a record has no usable title.
pub const DEFAULT_TITLE: &str = "Untitled Task";
/// Importance assumed when a record has no coercible importance.
pub const DEFAULT_IMPORTANCE: i32 = 5;
/// Estimate assumed when a record has no coercible estimate.
pub const DEFAULT_ESTIMATED_HOURS: f64 = 1.0;

/// Field names owned by the normalized record. Passthrough fields with
/// these names are dropped during composition so normalized values win.
const NORMALIZED_FIELDS: [&str; 7] = [
    "title",
    "due_date",
    "importance",
    "estimated_hours",
    "dependencies",
    "score",
    "explanation",
];

/// A fully-defaulted, typed task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTask {
    /// Task title
    pub title: String,
    /// Parsed due date; `None` when absent or unrecognized
    pub due_date: Option<NaiveDate>,
    /// Caller-supplied priority weight, clamped to 1-10
    pub importance: i32,
    /// Estimated effort in hours, non-negative
    pub estimated_hours: f64,
    /// Opaque identifiers of blocking tasks
    #[serde(default)]
    pub dependencies: Vec<Value>,
}

impl NormalizedTask {
    /// Normalize a raw record.
    ///
    /// Total over any JSON value: non-object input is treated as an empty
    /// record and every field falls back to its default. Normalizing an
    /// already-normalized record is a no-op.
    pub fn from_value(raw: &Value) -> Self {
        let fields = raw.as_object();
        let get = |key: &str| fields.and_then(|m| m.get(key));
        Self {
            title: title_or_default(get("title")),
            due_date: get("due_date").and_then(parse_due_date),
            importance: coerce_importance(get("importance")),
            estimated_hours: coerce_hours(get("estimated_hours")),
            dependencies: coerce_dependencies(get("dependencies")),
        }
    }

    /// Whether the task lists at least one blocking dependency.
    pub fn is_blocked(&self) -> bool {
        !self.dependencies.is_empty()
    }
}

impl Default for NormalizedTask {
    fn default() -> Self {
        NormalizedTask::from_value(&Value::Null)
    }
}

/// A normalized task annotated with its computed score.
///
/// Serializes as one flat object: passthrough fields carried over from the
/// raw record, the normalized fields, `score`, and (for suggestions) an
/// `explanation`. Colliding passthrough keys are removed at construction,
/// so normalized fields always take precedence.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredTask {
    /// Unrecognized fields carried through from the raw record
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// The normalized task
    #[serde(flatten)]
    pub task: NormalizedTask,
    /// Computed priority score
    pub score: f64,
    /// Human-readable justification of the score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl ScoredTask {
    /// Compose the output record from the raw input and its scored,
    /// normalized form.
    pub fn new(raw: &Value, task: NormalizedTask, score: f64) -> Self {
        let mut extra = raw.as_object().cloned().unwrap_or_default();
        for key in NORMALIZED_FIELDS {
            extra.remove(key);
        }
        Self {
            extra,
            task,
            score,
            explanation: None,
        }
    }

    /// Attach an explanation.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}

/// Pass a string title through, defaulting everything else.
fn title_or_default(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => DEFAULT_TITLE.to_string(),
    }
}

/// Integer coercion with clamping.
///
/// JSON integers pass through, floats truncate, and strings parse as
/// integers (fractional strings do not coerce). Everything else falls back
/// to [`DEFAULT_IMPORTANCE`]. The result clamps to 1-10.
fn coerce_importance(value: Option<&Value>) -> i32 {
    let coerced = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    coerced.unwrap_or(DEFAULT_IMPORTANCE as i64).clamp(1, 10) as i32
}

/// Real-number coercion.
///
/// JSON numbers and numeric strings coerce; anything else falls back to
/// [`DEFAULT_ESTIMATED_HOURS`]. Negative estimates clamp to zero.
fn coerce_hours(value: Option<&Value>) -> f64 {
    let coerced = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    coerced.unwrap_or(DEFAULT_ESTIMATED_HOURS).max(0.0)
}

/// Sequence passthrough. A non-array value, truthy or not, means "no
/// dependencies".
fn coerce_dependencies(value: Option<&Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

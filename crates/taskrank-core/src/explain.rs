//! Human-readable score explanations.
//!
//! Renders one clause per scoring factor, reflecting exactly the branch the
//! calculator took for the task: due-date presence, the importance value,
//! the effort-bucket wording, and dependency presence, followed by the
//! score stated to one decimal place. The effort wording is read from the
//! same [`EffortBucket`] the calculator classifies with, so a threshold
//! change cannot silently desynchronize the text from the score.

use crate::scoring::EffortBucket;
use crate::task::NormalizedTask;

/// Build the justification string for a task and its computed score.
pub fn explain(task: &NormalizedTask, score: f64) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(5);

    match task.due_date {
        Some(due) => parts.push(format!("Due date: {due}.")),
        None => parts.push("No due date provided; treated as medium urgency.".to_string()),
    }

    parts.push(format!("Importance {} (1-10 scale).", task.importance));

    parts.push(EffortBucket::classify(task.estimated_hours).as_str().to_string());

    if task.is_blocked() {
        parts.push("Has dependencies, so it may be blocked.".to_string());
    } else {
        parts.push("No dependencies; can be started immediately.".to_string());
    }

    parts.push(format!("Final priority score: {score:.1}."));

    parts.join(" ")
}

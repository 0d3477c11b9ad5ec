//! Stable ranking of scored tasks.

use crate::task::ScoredTask;

/// Sort tasks by score, highest first.
///
/// The sort is stable: tasks with equal scores keep their input order, so
/// callers see deterministic output. Scores are not recomputed or mutated
/// here.
pub fn rank(tasks: &mut [ScoredTask]) {
    tasks.sort_by(|a, b| b.score.total_cmp(&a.score));
}

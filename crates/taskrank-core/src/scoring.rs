//! Priority score calculation.
//!
//! Calculates task priority scores based on four independent factors:
//! - Urgency (due-date proximity, overdue scoring highest)
//! - User-defined importance (1-10 scale, weighted)
//! - Effort (shorter tasks get a "quick win" bonus)
//! - Dependencies (blocked tasks are penalized)
//!
//! The calculator is a pure function of the task and an explicitly injected
//! reference day: identical inputs on the same calendar day always yield
//! the identical score. Scores are unbounded in both directions.

use chrono::NaiveDate;

use crate::task::NormalizedTask;

/// Points contributed per unit of importance.
pub const IMPORTANCE_WEIGHT: f64 = 5.0;
/// Deduction applied when a task lists any blocking dependency.
pub const DEPENDENCY_PENALTY: f64 = 10.0;

/// Urgency band of a due date relative to the reference day.
///
/// Boundaries are inclusive and evaluated in declaration order over
/// `due_date - today` in whole calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyBand {
    /// Due date already passed
    Overdue,
    /// Due today or tomorrow
    Immediate,
    /// Due in 2-3 days
    Soon,
    /// Due in 4-7 days
    ThisWeek,
    /// Due more than a week out
    Later,
    /// No parseable due date
    Unscheduled,
}

impl UrgencyBand {
    /// Classify a due date against the reference day.
    pub fn classify(due_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(due) = due_date else {
            return UrgencyBand::Unscheduled;
        };
        let days = (due - today).num_days();
        if days < 0 {
            UrgencyBand::Overdue
        } else if days <= 1 {
            UrgencyBand::Immediate
        } else if days <= 3 {
            UrgencyBand::Soon
        } else if days <= 7 {
            UrgencyBand::ThisWeek
        } else {
            UrgencyBand::Later
        }
    }

    /// Urgency contribution to the score.
    pub fn points(&self) -> f64 {
        match self {
            UrgencyBand::Overdue => 100.0,
            UrgencyBand::Immediate => 70.0,
            UrgencyBand::Soon => 50.0,
            UrgencyBand::ThisWeek => 30.0,
            UrgencyBand::Later => 10.0,
            UrgencyBand::Unscheduled => 20.0,
        }
    }
}

/// Effort bucket favoring short "quick win" tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffortBucket {
    /// At most one hour
    QuickWin,
    /// Between one and two hours
    Short,
    /// Two to four hours
    Moderate,
    /// More than four hours
    Large,
}

impl EffortBucket {
    /// Classify an estimated-hours value.
    pub fn classify(hours: f64) -> Self {
        if hours <= 1.0 {
            EffortBucket::QuickWin
        } else if hours < 2.0 {
            EffortBucket::Short
        } else if hours <= 4.0 {
            EffortBucket::Moderate
        } else {
            EffortBucket::Large
        }
    }

    /// Effort bonus contribution to the score.
    pub fn bonus(&self) -> f64 {
        match self {
            EffortBucket::QuickWin => 15.0,
            EffortBucket::Short => 10.0,
            EffortBucket::Moderate => 5.0,
            EffortBucket::Large => 0.0,
        }
    }

    /// Human wording for this bucket, shared with explanations.
    pub fn as_str(&self) -> &'static str {
        match self {
            EffortBucket::QuickWin => "Very quick to finish (<= 1 hour).",
            EffortBucket::Short => "Quick task (< 2 hours).",
            EffortBucket::Moderate => "Moderate effort (2-4 hours).",
            EffortBucket::Large => "Larger task (> 4 hours).",
        }
    }
}

/// Priority calculator for normalized tasks.
///
/// The reference day is captured once per batch so every task in one call
/// is compared against the same calendar day, even if evaluation spans a
/// day boundary.
#[derive(Debug, Clone, Copy)]
pub struct ScoreCalculator {
    today: NaiveDate,
}

impl ScoreCalculator {
    /// Create a calculator scoring against the given reference day.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// The reference day this calculator scores against.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Calculate the priority score for a task.
    ///
    /// Higher score = higher priority. No side effects, no I/O.
    pub fn score(&self, task: &NormalizedTask) -> f64 {
        let mut score = UrgencyBand::classify(task.due_date, self.today).points();
        score += f64::from(task.importance) * IMPORTANCE_WEIGHT;
        score += EffortBucket::classify(task.estimated_hours).bonus();
        if task.is_blocked() {
            score -= DEPENDENCY_PENALTY;
        }
        score
    }
}

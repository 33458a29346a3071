//! Sprint classification and display ordering.
//!
//! Status is always derived against an explicit reference date passed in by
//! the caller. Nothing here reads the wall clock, so classification is
//! deterministic in tests and across late-night page loads.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::sprint::{Sprint, SprintStatus};

/// A sprint paired with its derived status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedSprint {
    pub sprint: Sprint,
    pub status: SprintStatus,
}

/// Derive a sprint's lifecycle status at `today`.
///
/// A sprint missing either date is upcoming regardless of its other
/// fields. Comparisons are calendar-date only; both bounds are inclusive,
/// so a sprint is active on its first and last day.
pub fn classify(sprint: &Sprint, today: NaiveDate) -> SprintStatus {
    let (Some(start), Some(end)) = (sprint.start, sprint.end) else {
        return SprintStatus::Upcoming;
    };

    if today < start {
        SprintStatus::Upcoming
    } else if today > end {
        SprintStatus::Completed
    } else {
        SprintStatus::Active
    }
}

/// Display order: active first, then upcoming soonest-first, then completed
/// most-recent-first.
///
/// Within a status group, sprints without a start date sort last, and
/// remaining ties break on the sprint id so the order is stable across
/// refreshes.
pub fn display_cmp(a: &ClassifiedSprint, b: &ClassifiedSprint) -> Ordering {
    a.status
        .display_rank()
        .cmp(&b.status.display_rank())
        .then_with(|| start_order(a, b))
        .then_with(|| a.sprint.id.cmp(&b.sprint.id))
}

// Only called for equal statuses, so one side's status picks the direction.
fn start_order(a: &ClassifiedSprint, b: &ClassifiedSprint) -> Ordering {
    match (a.sprint.start, b.sprint.start) {
        (Some(start_a), Some(start_b)) => match a.status {
            SprintStatus::Upcoming => start_a.cmp(&start_b),
            SprintStatus::Active | SprintStatus::Completed => start_b.cmp(&start_a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Classify a sprint collection at `today` and sort it for display.
pub fn classify_and_sort(sprints: Vec<Sprint>, today: NaiveDate) -> Vec<ClassifiedSprint> {
    let mut classified: Vec<ClassifiedSprint> = sprints
        .into_iter()
        .map(|sprint| ClassifiedSprint {
            status: classify(&sprint, today),
            sprint,
        })
        .collect();
    classified.sort_by(display_cmp);
    classified
}

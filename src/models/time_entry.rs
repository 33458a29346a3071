//! Logged work entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{ProjectId, TaskId, UserId};

/// One logged unit of work against a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Calendar date the hours were logged on
    pub date: NaiveDate,
    /// Logged hours, always positive (quarter-hour increments by convention)
    pub hours: f64,
    /// User who logged the hours
    pub user_id: UserId,
    /// Task the hours were logged against
    pub task_id: TaskId,
    /// Project owning the task
    pub project_id: ProjectId,
    /// Planning estimate rather than time actually spent
    pub is_planning: bool,
}

impl TimeEntry {
    /// Create a spent-hours entry.
    pub fn new(
        date: NaiveDate,
        hours: f64,
        user_id: UserId,
        task_id: TaskId,
        project_id: ProjectId,
    ) -> Self {
        Self {
            date,
            hours,
            user_id,
            task_id,
            project_id,
            is_planning: false,
        }
    }

    /// Create a planning-hours entry.
    pub fn planning(
        date: NaiveDate,
        hours: f64,
        user_id: UserId,
        task_id: TaskId,
        project_id: ProjectId,
    ) -> Self {
        Self {
            date,
            hours,
            user_id,
            task_id,
            project_id,
            is_planning: true,
        }
    }

    /// The population this entry belongs to.
    pub fn kind(&self) -> HoursKind {
        if self.is_planning {
            HoursKind::Planning
        } else {
            HoursKind::Spent
        }
    }
}

/// Which population of entries an aggregation reads.
///
/// Spent and planning hours answer different questions and are never summed
/// together. Every aggregation call selects exactly one population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursKind {
    Spent,
    Planning,
}

impl HoursKind {
    /// Whether an entry belongs to this population.
    pub fn includes(&self, entry: &TimeEntry) -> bool {
        match self {
            HoursKind::Spent => !entry.is_planning,
            HoursKind::Planning => entry.is_planning,
        }
    }
}

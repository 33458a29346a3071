//! Sprints: named, date-bounded containers of work.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{SprintId, TaskId};

/// A named, date-bounded container of tasks.
///
/// Sprints nest: a top-level sprint may own child groups, each with its own
/// dates and task list, rendered inside the parent's bar. Either date may be
/// absent while the sprint is not yet scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprint {
    /// Sprint identifier
    pub id: SprintId,
    /// Display name
    pub name: String,
    /// First day, absent while unscheduled
    pub start: Option<NaiveDate>,
    /// Last day (inclusive), absent while unscheduled
    pub end: Option<NaiveDate>,
    /// Tasks assigned directly to this sprint
    pub task_ids: Vec<TaskId>,
    /// Nested sub-groups
    pub children: Vec<Sprint>,
}

impl Sprint {
    /// Create an unscheduled, empty sprint.
    pub fn new(id: SprintId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            start: None,
            end: None,
            task_ids: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set both dates.
    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Set the task list.
    pub fn with_tasks(mut self, task_ids: Vec<TaskId>) -> Self {
        self.task_ids = task_ids;
        self
    }

    /// Append a child group.
    pub fn with_child(mut self, child: Sprint) -> Self {
        self.children.push(child);
        self
    }

    /// Whether both dates are present.
    pub fn is_scheduled(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Lifecycle phase of a sprint relative to an explicit reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SprintStatus {
    Upcoming,
    Active,
    Completed,
}

impl SprintStatus {
    /// Display rank: active sprints sort first, completed last.
    pub fn display_rank(&self) -> u8 {
        match self {
            SprintStatus::Active => 0,
            SprintStatus::Upcoming => 1,
            SprintStatus::Completed => 2,
        }
    }
}

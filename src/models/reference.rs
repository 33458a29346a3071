//! Identity records and display-label resolution.
//!
//! User, task and project records are opaque to the engine except for their
//! display names. The index resolves breakdown keys to labels so ranked
//! rows arrive at the renderer ready to show; unknown ids keep the raw id
//! as their label rather than disappearing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::{ProjectId, TaskId, UserId};
use crate::models::breakdown::Breakdown;

/// User identity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
}

/// Task identity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub name: String,
}

/// Project identity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub name: String,
}

/// Lookup from identifier to display label.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    users: HashMap<UserId, String>,
    tasks: HashMap<TaskId, String>,
    projects: HashMap<ProjectId, String>,
}

impl LabelIndex {
    /// Build the index from the host's identity records.
    pub fn new(users: &[UserRecord], tasks: &[TaskRecord], projects: &[ProjectRecord]) -> Self {
        Self {
            users: users
                .iter()
                .map(|r| (r.id.clone(), r.name.clone()))
                .collect(),
            tasks: tasks
                .iter()
                .map(|r| (r.id.clone(), r.name.clone()))
                .collect(),
            projects: projects
                .iter()
                .map(|r| (r.id.clone(), r.name.clone()))
                .collect(),
        }
    }

    /// Display label for a user, falling back to the raw id.
    pub fn user_label(&self, id: &UserId) -> String {
        self.users
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.value().to_string())
    }

    /// Display label for a task, falling back to the raw id.
    pub fn task_label(&self, id: &TaskId) -> String {
        self.tasks
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.value().to_string())
    }

    /// Display label for a project, falling back to the raw id.
    pub fn project_label(&self, id: &ProjectId) -> String {
        self.projects
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.value().to_string())
    }

    /// Ranked user rows with labels attached.
    pub fn labeled_user_rows(&self, breakdown: &Breakdown<UserId>) -> Vec<LabeledRow> {
        breakdown
            .ranked()
            .into_iter()
            .map(|row| LabeledRow {
                label: self.user_label(&row.key),
                key: row.key.0,
                total_hours: row.total_hours,
                entry_count: row.entry_count,
            })
            .collect()
    }

    /// Ranked task rows with labels attached.
    pub fn labeled_task_rows(&self, breakdown: &Breakdown<TaskId>) -> Vec<LabeledRow> {
        breakdown
            .ranked()
            .into_iter()
            .map(|row| LabeledRow {
                label: self.task_label(&row.key),
                key: row.key.0,
                total_hours: row.total_hours,
                entry_count: row.entry_count,
            })
            .collect()
    }

    /// Ranked project rows with labels attached.
    pub fn labeled_project_rows(&self, breakdown: &Breakdown<ProjectId>) -> Vec<LabeledRow> {
        breakdown
            .ranked()
            .into_iter()
            .map(|row| LabeledRow {
                label: self.project_label(&row.key),
                key: row.key.0,
                total_hours: row.total_hours,
                entry_count: row.entry_count,
            })
            .collect()
    }
}

/// A ranked breakdown row with its display label resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledRow {
    /// Raw identifier
    pub key: String,
    /// Display label, or the raw id when no record matches
    pub label: String,
    /// Hours accumulated under the key
    pub total_hours: f64,
    /// Number of contributing entries
    pub entry_count: usize,
}

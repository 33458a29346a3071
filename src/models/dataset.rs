// ============================================================================
// Dataset Ingestion
// ============================================================================
//
// The host's query layer hands the engine one JSON payload holding time
// entries, sprints and identity records. Parsing normalizes date keys and
// applies the documented skip rules: entries with non-positive hours or an
// unusable date are dropped with a warning, and a sprint date that does not
// parse leaves that bound unscheduled rather than failing the dataset.

use anyhow::{Context, Result};

use crate::api::{ProjectId, SprintId, TaskId, UserId};
use crate::models::date_key;
use crate::models::reference::{LabelIndex, ProjectRecord, TaskRecord, UserRecord};
use crate::models::sprint::Sprint;
use crate::models::time_entry::TimeEntry;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetInput {
    #[serde(default)]
    time_entries: Vec<TimeEntryRecord>,
    #[serde(default)]
    sprints: Vec<SprintRecord>,
    #[serde(default)]
    users: Vec<UserRecord>,
    #[serde(default)]
    tasks: Vec<TaskRecord>,
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimeEntryRecord {
    date: String,
    hours: f64,
    user_id: String,
    task_id: String,
    project_id: String,
    #[serde(default)]
    is_planning_hours: bool,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SprintRecord {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default)]
    task_ids: Vec<String>,
    #[serde(default)]
    children: Vec<SprintRecord>,
}

/// Parsed dataset ready for aggregation and layout.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub time_entries: Vec<TimeEntry>,
    pub sprints: Vec<Sprint>,
    pub users: Vec<UserRecord>,
    pub tasks: Vec<TaskRecord>,
    pub projects: Vec<ProjectRecord>,
}

impl Dataset {
    /// Build the display-label lookup from the identity records.
    pub fn label_index(&self) -> LabelIndex {
        LabelIndex::new(&self.users, &self.tasks, &self.projects)
    }
}

fn validate_input_dataset(dataset_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(dataset_json).context("Invalid dataset JSON")?;
    let has_entries = value
        .as_object()
        .and_then(|obj| obj.get("timeEntries"))
        .is_some();
    if !has_entries {
        anyhow::bail!("Missing required 'timeEntries' field");
    }
    Ok(())
}

/// Parse a dataset from a JSON string.
///
/// Time entry records are normalized through the date-key parser (a trailing
/// time component is discarded) and filtered by the skip rules; sprint
/// records keep their tree shape, with unparseable dates treated as
/// unscheduled bounds.
pub fn parse_dataset_json_str(dataset_json: &str) -> Result<Dataset> {
    validate_input_dataset(dataset_json)?;

    let input: DatasetInput = serde_json::from_str(dataset_json)
        .context("Failed to deserialize dataset JSON using Serde")?;

    let mut time_entries = Vec::with_capacity(input.time_entries.len());
    for record in input.time_entries {
        match convert_time_entry(record) {
            Some(entry) => time_entries.push(entry),
            None => continue,
        }
    }

    let sprints: Vec<Sprint> = input.sprints.into_iter().map(convert_sprint).collect();

    log::debug!(
        "Parsed dataset: {} time entries, {} sprints, {} users, {} tasks, {} projects",
        time_entries.len(),
        sprints.len(),
        input.users.len(),
        input.tasks.len(),
        input.projects.len()
    );

    Ok(Dataset {
        time_entries,
        sprints,
        users: input.users,
        tasks: input.tasks,
        projects: input.projects,
    })
}

fn convert_time_entry(record: TimeEntryRecord) -> Option<TimeEntry> {
    let date = match date_key::parse_key(&record.date) {
        Ok(date) => date,
        Err(err) => {
            log::warn!(
                "Skipping time entry for task {}: {}",
                record.task_id,
                err
            );
            return None;
        }
    };

    if !record.hours.is_finite() || record.hours <= 0.0 {
        log::warn!(
            "Skipping time entry for task {} with non-positive hours {}",
            record.task_id,
            record.hours
        );
        return None;
    }

    Some(TimeEntry {
        date,
        hours: record.hours,
        user_id: UserId::new(record.user_id),
        task_id: TaskId::new(record.task_id),
        project_id: ProjectId::new(record.project_id),
        is_planning: record.is_planning_hours,
    })
}

fn convert_sprint(record: SprintRecord) -> Sprint {
    let start = parse_sprint_date(record.start_date.as_deref(), &record.id);
    let end = parse_sprint_date(record.end_date.as_deref(), &record.id);

    let name = if record.name.is_empty() {
        record.id.clone()
    } else {
        record.name
    };

    Sprint {
        id: SprintId::new(record.id),
        name,
        start,
        end,
        task_ids: record.task_ids.into_iter().map(TaskId::new).collect(),
        children: record.children.into_iter().map(convert_sprint).collect(),
    }
}

fn parse_sprint_date(raw: Option<&str>, sprint_id: &str) -> Option<chrono::NaiveDate> {
    let raw = raw?;
    match date_key::parse_key(raw) {
        Ok(date) => Some(date),
        Err(err) => {
            log::warn!(
                "Treating sprint {} as unscheduled on one bound: {}",
                sprint_id,
                err
            );
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

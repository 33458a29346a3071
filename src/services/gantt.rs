//! Gantt layout: classified sprints plus a timeline become nested bar
//! geometry (left/width percentages and stacked row heights).
//!
//! Overlap between sibling top-level bars is not resolved here; the caller
//! renders them in independent stacked rows in list order.

use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

use crate::api::SprintId;
use crate::config::GanttSettings;
use crate::models::sprint::{Sprint, SprintStatus};
use crate::services::sprint_status::ClassifiedSprint;
use crate::services::timeline::Timeline;

/// One drawable bar, with its nested child bars.
///
/// `left_percent` and `width_percent` are unclamped; a bar that extends past
/// the timeline keeps its overhang and the renderer clips it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub id: SprintId,
    pub name: String,
    pub status: SprintStatus,
    pub left_percent: f64,
    pub width_percent: f64,
    pub row_height_px: f64,
    pub children: Vec<LayoutNode>,
}

/// Lay out classified sprints against `timeline`, preserving input order.
///
/// Sprints missing either date have no drawable extent and are skipped.
/// Child bars are positioned against the parent's own start/end rather than
/// the root timeline, so they visually fill the parent bar. Child nodes
/// carry the parent's status tag.
pub fn layout(
    sprints: &[ClassifiedSprint],
    timeline: &Timeline,
    settings: &GanttSettings,
) -> Vec<LayoutNode> {
    sprints
        .iter()
        .filter_map(|classified| {
            let sprint = &classified.sprint;
            let (start, end) = sprint.start.zip(sprint.end)?;
            let span = span_on(timeline, start, end);
            Some(build_node(sprint, classified.status, span, settings))
        })
        .collect()
}

fn build_node(
    sprint: &Sprint,
    status: SprintStatus,
    (left_percent, width_percent): (f64, f64),
    settings: &GanttSettings,
) -> LayoutNode {
    let children = child_nodes(sprint, status, settings);
    let row_height_px = row_height(children.len(), settings);
    LayoutNode {
        id: sprint.id.clone(),
        name: sprint.name.clone(),
        status,
        left_percent,
        width_percent,
        row_height_px,
        children,
    }
}

fn child_nodes(parent: &Sprint, status: SprintStatus, settings: &GanttSettings) -> Vec<LayoutNode> {
    if parent.children.is_empty() {
        return Vec::new();
    }

    // A parent whose own dates cannot form a timeline (equal bounds) has no
    // inner extent to divide; its children fill the bar.
    let inner = parent
        .start
        .zip(parent.end)
        .and_then(|(start, end)| Timeline::new(start, end).ok());

    parent
        .children
        .iter()
        .filter_map(|child| {
            let (start, end) = child.start.zip(child.end)?;
            let span = match &inner {
                Some(timeline) => span_on(timeline, start, end),
                None => (0.0, 100.0),
            };
            Some(build_node(child, status, span, settings))
        })
        .collect()
}

fn span_on(timeline: &Timeline, start: NaiveDate, end: NaiveDate) -> (f64, f64) {
    let left = timeline.position(start);
    (left, timeline.position(end) - left)
}

fn row_height(child_count: usize, settings: &GanttSettings) -> f64 {
    (child_count as f64 * settings.row_unit_px).max(settings.min_bar_height_px)
}

#[cfg(test)]
#[path = "gantt_tests.rs"]
mod gantt_tests;

//! Public API surface for the analytics engine.
//!
//! This file consolidates the identifier newtypes and re-exports the DTO
//! types produced by the services. All types derive Serialize/Deserialize
//! for JSON serialization toward the rendering layer.

pub use crate::models::breakdown::Breakdown;
pub use crate::models::breakdown::BreakdownSlot;
pub use crate::models::breakdown::RankedRow;
pub use crate::models::bucket::Bucket;
pub use crate::models::bucket::BucketSeries;
pub use crate::models::bucket::Granularity;
pub use crate::models::dataset::Dataset;
pub use crate::models::dataset::parse_dataset_json_str;
pub use crate::models::reference::LabelIndex;
pub use crate::models::reference::LabeledRow;
pub use crate::models::reference::ProjectRecord;
pub use crate::models::reference::TaskRecord;
pub use crate::models::reference::UserRecord;
pub use crate::models::sprint::Sprint;
pub use crate::models::sprint::SprintStatus;
pub use crate::models::time_entry::HoursKind;
pub use crate::models::time_entry::TimeEntry;
pub use crate::services::aggregation::AggregationData;
pub use crate::services::aggregation::BucketRef;
pub use crate::services::aggregation::Dimensions;
pub use crate::services::aggregation::RangeSummary;
pub use crate::services::aggregation::Trend;
pub use crate::services::aggregation::TrendDirection;
pub use crate::services::gantt::LayoutNode;
pub use crate::services::sprint_status::ClassifiedSprint;
pub use crate::services::timeline::AxisMark;
pub use crate::services::timeline::Timeline;

use serde::{Deserialize, Serialize};

/// User identifier (opaque foreign key from the host application).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Task identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

/// Project identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub String);

/// Sprint identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SprintId(pub String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        UserId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TaskId {
    pub fn new(value: impl Into<String>) -> Self {
        TaskId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl ProjectId {
    pub fn new(value: impl Into<String>) -> Self {
        ProjectId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl SprintId {
    pub fn new(value: impl Into<String>) -> Self {
        SprintId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for SprintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

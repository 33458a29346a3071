//! Service layer for aggregation and layout computations.
//!
//! This module contains the computations the dashboard's screens share:
//! bucket construction, entry aggregation, timeline positioning, sprint
//! classification, and Gantt geometry. Everything here is a pure function
//! over the models; callers supply the collections and an explicit "today".

pub mod aggregation;

pub mod buckets;

pub mod gantt;

pub mod sprint_status;

pub mod timeline;

pub use aggregation::aggregate;
pub use buckets::build_buckets;
pub use gantt::layout;
pub use sprint_status::{classify, classify_and_sort, display_cmp};
pub use timeline::{position_percent, Timeline};

//! # Worklog Analytics
//!
//! Time-bucketed aggregation and timeline positioning for a
//! project/task/hour-tracking dashboard.
//!
//! Every analytical screen in the dashboard (hours overview, monthly
//! summary, trend chart, sprint Gantt, sprint timeline) reduces to the same
//! core: fold dated time entries into calendar-aligned buckets, summarize
//! them, and map dates onto a shared percentage axis so independently
//! rendered widgets stay pixel-aligned. This crate is that core. Fetching
//! records and rendering results belong to the host application.
//!
//! ## Features
//!
//! - **Bucketing**: contiguous, zero-filled day/week/month buckets over any
//!   inclusive date range
//! - **Aggregation**: per-bucket totals, per-user/task/project breakdowns,
//!   and range summary statistics (total, average, min, max, trend)
//! - **Timeline Positioning**: date-to-percentage mapping shared by bars,
//!   axis marks, and the today line
//! - **Sprint Classification**: upcoming/active/completed status with a
//!   stable display ordering
//! - **Gantt Layout**: nested left/width bar geometry with stacked row
//!   heights
//! - **Dataset Ingestion**: the query layer's camelCase JSON payload,
//!   with skip-and-warn handling of unusable records
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: identifier newtypes and the public DTO facade
//! - [`models`]: entities, date keys, buckets, and breakdown accumulators
//! - [`services`]: pure computations over the models
//! - [`config`]: chart geometry settings loaded from TOML
//! - [`error`]: the failure taxonomy shared across the crate
//!
//! All computations take an explicit reference date where "today" matters,
//! so results are deterministic and clock-independent.

pub mod api;

pub mod config;
pub mod error;
pub mod models;

pub mod services;

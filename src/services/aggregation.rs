//! Entry aggregation over bucket series.
//!
//! The fold assigns each entry to its bucket by direct calendar arithmetic
//! (never by scanning the bucket list), accumulates per-dimension
//! breakdowns, and derives the range summary the chart headers show. Inputs
//! are never mutated; each call returns fresh values, so re-aggregating on
//! every refresh is idempotent.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::bucket::{Bucket, BucketSeries};
use crate::models::time_entry::{HoursKind, TimeEntry};

/// Which breakdown dimensions the fold maintains per bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub user: bool,
    pub task: bool,
    pub project: bool,
}

impl Dimensions {
    /// All three dimensions.
    pub fn all() -> Self {
        Self {
            user: true,
            task: true,
            project: true,
        }
    }

    /// Totals only, no breakdowns.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Direction of the midpoint trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// Midpoint trend over the ordered bucket sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    /// Percent change of the second-half average over the first-half
    /// average; zero when the first half averages zero
    pub percent: f64,
}

/// Reference to one bucket inside a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketRef {
    /// Position in the series
    pub index: usize,
    /// The bucket's display label
    pub label: String,
    /// The bucket's accumulated hours
    pub total_hours: f64,
}

/// Range-level summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSummary {
    /// Hours accumulated across all buckets
    pub total_hours: f64,
    /// Mean hours per bucket, zero for an empty series
    pub average_per_bucket: f64,
    /// Highest bucket; earliest wins ties
    pub max_bucket: Option<BucketRef>,
    /// Lowest bucket; earliest wins ties
    pub min_bucket: Option<BucketRef>,
    /// Midpoint trend
    pub trend: Trend,
}

/// Aggregated series plus its range summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationData {
    pub series: BucketSeries,
    pub summary: RangeSummary,
}

/// Fold entries into a copy of the zero-filled series.
///
/// Only entries in the population selected by `kind` contribute; spent and
/// planning hours are never mixed in one result. Entries with non-positive
/// hours or a date outside the requested range are dropped, as documented,
/// without error. Assignment is O(1) per entry via
/// [`BucketSeries::bucket_index_for`].
pub fn aggregate(
    entries: &[TimeEntry],
    series: &BucketSeries,
    dimensions: Dimensions,
    kind: HoursKind,
) -> AggregationData {
    let mut series = series.clone();

    for entry in entries {
        if !kind.includes(entry) {
            continue;
        }
        if !entry.hours.is_finite() || entry.hours <= 0.0 {
            continue;
        }
        if !series.range_contains(entry.date) {
            continue;
        }
        let Some(index) = series.bucket_index_for(entry.date) else {
            continue;
        };

        let bucket = &mut series.buckets[index];
        bucket.total_hours += entry.hours;
        if dimensions.user {
            bucket.by_user.add(entry.user_id.clone(), entry);
        }
        if dimensions.task {
            bucket.by_task.add(entry.task_id.clone(), entry);
        }
        if dimensions.project {
            bucket.by_project.add(entry.project_id.clone(), entry);
        }
    }

    let summary = summarize(&series.buckets);
    AggregationData { series, summary }
}

/// Compute the range summary for an aggregated bucket sequence.
pub(crate) fn summarize(buckets: &[Bucket]) -> RangeSummary {
    let total_hours: f64 = buckets.iter().map(|b| b.total_hours).sum();
    let average_per_bucket = if buckets.is_empty() {
        0.0
    } else {
        total_hours / buckets.len() as f64
    };

    let mut max_bucket: Option<BucketRef> = None;
    let mut min_bucket: Option<BucketRef> = None;
    for (index, bucket) in buckets.iter().enumerate() {
        let beats_max = max_bucket
            .as_ref()
            .map_or(true, |current| bucket.total_hours > current.total_hours);
        if beats_max {
            max_bucket = Some(bucket_ref(index, bucket));
        }

        let beats_min = min_bucket
            .as_ref()
            .map_or(true, |current| bucket.total_hours < current.total_hours);
        if beats_min {
            min_bucket = Some(bucket_ref(index, bucket));
        }
    }

    RangeSummary {
        total_hours,
        average_per_bucket,
        max_bucket,
        min_bucket,
        trend: compute_trend(buckets),
    }
}

/// Split the bucket sequence at its midpoint and compare half averages.
///
/// Odd-length sequences give the extra bucket to the second half, so the
/// more recent data weighs the comparison.
pub(crate) fn compute_trend(buckets: &[Bucket]) -> Trend {
    let (first, second) = buckets.split_at(buckets.len() / 2);
    let first_avg = half_average(first);
    let second_avg = half_average(second);

    let direction = match second_avg.partial_cmp(&first_avg) {
        Some(Ordering::Greater) => TrendDirection::Up,
        Some(Ordering::Less) => TrendDirection::Down,
        _ => TrendDirection::Stable,
    };
    let percent = if first_avg == 0.0 {
        0.0
    } else {
        (second_avg - first_avg) / first_avg * 100.0
    };

    Trend { direction, percent }
}

fn half_average(buckets: &[Bucket]) -> f64 {
    if buckets.is_empty() {
        return 0.0;
    }
    buckets.iter().map(|b| b.total_hours).sum::<f64>() / buckets.len() as f64
}

fn bucket_ref(index: usize, bucket: &Bucket) -> BucketRef {
    BucketRef {
        index,
        label: bucket.label.clone(),
        total_hours: bucket.total_hours,
    }
}

#[cfg(test)]
#[path = "aggregation_tests.rs"]
mod aggregation_tests;

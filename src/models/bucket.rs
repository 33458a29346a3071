//! Calendar-aligned buckets.
//!
//! A bucket series covers a requested date range with contiguous day, week
//! or month buckets. Entry lookup is direct calendar arithmetic on the
//! series start, never a scan over the bucket list.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::{ProjectId, TaskId, UserId};
use crate::models::breakdown::Breakdown;
use crate::models::date_key;

/// Bucket width for a time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    /// Start of the bucket containing `date`.
    ///
    /// Weeks anchor to the Sunday on or before the date, months to the
    /// first of the month, days to the date itself.
    pub fn align(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => date,
            Granularity::Week => date_key::week_start(date),
            Granularity::Month => date_key::month_start(date),
        }
    }

    /// Last day (inclusive) of the bucket starting at `start`.
    pub fn bucket_end(&self, start: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => start,
            Granularity::Week => start + Duration::days(6),
            Granularity::Month => month_end(start),
        }
    }

    /// Start of the bucket following the one starting at `start`.
    pub fn advance(&self, start: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => start + Duration::days(1),
            Granularity::Week => start + Duration::days(7),
            Granularity::Month => month_end(start) + Duration::days(1),
        }
    }

    /// Display label for the bucket starting at `start`.
    pub fn label(&self, start: NaiveDate) -> String {
        match self {
            Granularity::Day => start.format("%b %-d").to_string(),
            Granularity::Week => format!("Week of {}", start.format("%b %-d")),
            Granularity::Month => start.format("%B %Y").to_string(),
        }
    }
}

fn month_end(start: NaiveDate) -> NaiveDate {
    let (year, month) = if start.month() == 12 {
        (start.year() + 1, 1)
    } else {
        (start.year(), start.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first_of_next| first_of_next - Duration::days(1))
        .unwrap_or(start)
}

/// One calendar-aligned bucket of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// First day covered
    pub start: NaiveDate,
    /// Last day covered (inclusive); equals `start` for day buckets
    pub end: NaiveDate,
    /// Display label ("Jun 3", "Week of Jun 2", "June 2024")
    pub label: String,
    /// Hours accumulated in this bucket
    pub total_hours: f64,
    /// Hours split by user, when that dimension was requested
    #[serde(default, skip_serializing_if = "Breakdown::is_empty")]
    pub by_user: Breakdown<UserId>,
    /// Hours split by task, when that dimension was requested
    #[serde(default, skip_serializing_if = "Breakdown::is_empty")]
    pub by_task: Breakdown<TaskId>,
    /// Hours split by project, when that dimension was requested
    #[serde(default, skip_serializing_if = "Breakdown::is_empty")]
    pub by_project: Breakdown<ProjectId>,
}

impl Bucket {
    /// Create a zero-hour bucket spanning `[start, end]`.
    pub fn empty(start: NaiveDate, end: NaiveDate, label: String) -> Self {
        Self {
            start,
            end,
            label,
            total_hours: 0.0,
            by_user: Breakdown::new(),
            by_task: Breakdown::new(),
            by_project: Breakdown::new(),
        }
    }

    /// Whether `date` falls within this bucket's span.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// An ordered, contiguous bucket sequence covering a requested range.
///
/// The first bucket starts on or before `range_start` and the last ends on
/// or after `range_end`; week buckets may overhang the range on both sides
/// since they stay anchored to Sundays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSeries {
    /// Bucket width
    pub granularity: Granularity,
    /// Requested range start
    pub range_start: NaiveDate,
    /// Requested range end (inclusive)
    pub range_end: NaiveDate,
    /// Buckets in ascending date order
    pub buckets: Vec<Bucket>,
}

impl BucketSeries {
    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Whether `date` lies inside the requested range (not the bucket span).
    pub fn range_contains(&self, date: NaiveDate) -> bool {
        self.range_start <= date && date <= self.range_end
    }

    /// Index of the bucket containing `date`, in O(1) calendar arithmetic.
    ///
    /// Returns `None` when the date falls outside the bucket span. Dates in
    /// a week bucket's overhang still resolve to that bucket; callers apply
    /// their own range filter first when they need one.
    pub fn bucket_index_for(&self, date: NaiveDate) -> Option<usize> {
        let first = self.buckets.first()?;
        let offset = match self.granularity {
            Granularity::Day => date_key::days_between(first.start, date),
            // Both dates align to Sundays, so the difference is an exact
            // multiple of seven.
            Granularity::Week => date_key::days_between(first.start, date_key::week_start(date)) / 7,
            Granularity::Month => {
                let years = date.year() as i64 - first.start.year() as i64;
                years * 12 + date.month() as i64 - first.start.month() as i64
            }
        };
        let index = usize::try_from(offset).ok()?;
        (index < self.buckets.len()).then_some(index)
    }
}

//! Timeline positioning.
//!
//! One validated range maps dates to horizontal percentages for every chart.
//! Bars, the today line and the axis columns all read the same scale, which
//! is what keeps independently rendered widgets pixel-aligned.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::bucket::Granularity;
use crate::models::date_key;

/// A validated timeline range mapping dates onto `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    start: NaiveDate,
    end: NaiveDate,
}

impl Timeline {
    /// Validate and build a timeline over `[start, end]`.
    ///
    /// A zero-length range fails with [`AnalyticsError::DegenerateRange`]
    /// rather than dividing by zero later; an inverted range fails with
    /// [`AnalyticsError::InvalidRange`].
    pub fn new(start: NaiveDate, end: NaiveDate) -> AnalyticsResult<Self> {
        if start == end {
            return Err(AnalyticsError::degenerate_range(start));
        }
        if start > end {
            return Err(AnalyticsError::invalid_range(start, end));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Horizontal position of `date` as a percentage of the range.
    ///
    /// Whole-day arithmetic on calendar dates, so time-of-day drift can not
    /// occur. The value is not clamped: dates outside the range land below
    /// zero or above one hundred and callers clip or filter before display.
    pub fn position(&self, date: NaiveDate) -> f64 {
        let span = date_key::days_between(self.start, self.end) as f64;
        date_key::days_between(self.start, date) as f64 / span * 100.0
    }

    /// Position for the today line, present only when it falls on the
    /// visible scale.
    pub fn today_marker(&self, today: NaiveDate) -> Option<f64> {
        let position = self.position(today);
        (0.0..=100.0).contains(&position).then_some(position)
    }

    /// Axis marks at aligned calendar boundaries inside the range.
    pub fn axis_marks(&self, granularity: Granularity) -> Vec<AxisMark> {
        let mut marks = Vec::new();
        let mut cursor = granularity.align(self.start);
        if cursor < self.start {
            cursor = granularity.advance(cursor);
        }
        while cursor <= self.end {
            marks.push(AxisMark {
                date: cursor,
                position: self.position(cursor),
                label: granularity.label(cursor),
            });
            cursor = granularity.advance(cursor);
        }
        marks
    }
}

/// One date-marker column on a chart axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisMark {
    /// The boundary date
    pub date: NaiveDate,
    /// Percent position on the shared scale
    pub position: f64,
    /// Display label for the column header
    pub label: String,
}

/// One-shot position computation for callers without a retained timeline.
pub fn position_percent(
    date: NaiveDate,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> AnalyticsResult<f64> {
    Ok(Timeline::new(range_start, range_end)?.position(date))
}

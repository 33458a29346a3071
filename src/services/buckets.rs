//! Bucket construction.

use chrono::NaiveDate;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::bucket::{Bucket, BucketSeries, Granularity};
use crate::models::date_key;

/// Build the contiguous, zero-filled bucket series covering `[start, end]`.
///
/// Day buckets run one per calendar day. Week buckets anchor to the Sunday
/// on or before `start` and stay seven days wide, so the first and last may
/// overhang the requested range. Month buckets cover every month the range
/// touches. A zero-entry bucket still appears with zero hours; `start ==
/// end` yields exactly one bucket.
pub fn build_buckets(
    start: NaiveDate,
    end: NaiveDate,
    granularity: Granularity,
) -> AnalyticsResult<BucketSeries> {
    if start > end {
        return Err(AnalyticsError::invalid_range(start, end));
    }

    let first = granularity.align(start);
    let mut buckets = Vec::with_capacity(estimate_bucket_count(first, end, granularity));

    let mut cursor = first;
    while cursor <= end {
        buckets.push(Bucket::empty(
            cursor,
            granularity.bucket_end(cursor),
            granularity.label(cursor),
        ));
        cursor = granularity.advance(cursor);
    }

    Ok(BucketSeries {
        granularity,
        range_start: start,
        range_end: end,
        buckets,
    })
}

fn estimate_bucket_count(first: NaiveDate, end: NaiveDate, granularity: Granularity) -> usize {
    let span_days = date_key::days_between(first, end).max(0);
    let estimate = match granularity {
        Granularity::Day => span_days + 1,
        Granularity::Week => span_days / 7 + 1,
        Granularity::Month => span_days / 28 + 1,
    };
    estimate as usize
}

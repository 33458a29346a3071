use worklog_analytics::api::{
    parse_dataset_json_str, Dimensions, Granularity, HoursKind, SprintStatus, Timeline,
    TrendDirection, UserId,
};
use worklog_analytics::config::ChartConfig;
use worklog_analytics::services::{
    aggregate, build_buckets, classify_and_sort, layout, position_percent,
};

mod support;
use support::{dashboard_dataset_json, date};

#[test]
fn test_ingestion_applies_skip_rules() {
    let dataset = parse_dataset_json_str(dashboard_dataset_json()).unwrap();

    // Nine records arrive, two are unusable (bad date, negative hours).
    assert_eq!(dataset.time_entries.len(), 7);
    assert!(dataset.time_entries.iter().all(|e| e.hours > 0.0));

    // The timestamped record lands on its calendar date.
    let suffixed = dataset
        .time_entries
        .iter()
        .find(|e| e.user_id.value() == "u2" && e.task_id.value() == "t3")
        .unwrap();
    assert_eq!(suffixed.date, date(2024, 6, 10));
}

#[test]
fn test_weekly_aggregation_end_to_end() {
    let dataset = parse_dataset_json_str(dashboard_dataset_json()).unwrap();
    let series = build_buckets(date(2024, 6, 2), date(2024, 6, 15), Granularity::Week).unwrap();
    let data = aggregate(
        &dataset.time_entries,
        &series,
        Dimensions::all(),
        HoursKind::Spent,
    );

    assert_eq!(data.series.len(), 2);
    assert_eq!(data.series.buckets[0].total_hours, 6.5);
    assert_eq!(data.series.buckets[1].total_hours, 7.5);
    assert_eq!(data.summary.total_hours, 14.0);
    assert_eq!(data.summary.average_per_bucket, 7.0);
    assert_eq!(data.summary.trend.direction, TrendDirection::Up);

    // The planning entry on Jun 4 must not leak into the spent view.
    let first = &data.series.buckets[0];
    assert_eq!(first.by_user.get(&UserId::new("u1")).unwrap().total_hours, 3.5);
    assert_eq!(first.by_user.get(&UserId::new("u2")).unwrap().total_hours, 3.0);
}

#[test]
fn test_planning_hours_aggregate_separately() {
    let dataset = parse_dataset_json_str(dashboard_dataset_json()).unwrap();
    let series = build_buckets(date(2024, 6, 1), date(2024, 6, 30), Granularity::Month).unwrap();

    let spent = aggregate(
        &dataset.time_entries,
        &series,
        Dimensions::none(),
        HoursKind::Spent,
    );
    let planning = aggregate(
        &dataset.time_entries,
        &series,
        Dimensions::none(),
        HoursKind::Planning,
    );

    assert_eq!(spent.summary.total_hours, 14.0);
    assert_eq!(planning.summary.total_hours, 8.0);
}

#[test]
fn test_monthly_breakdown_resolves_display_labels() {
    let dataset = parse_dataset_json_str(dashboard_dataset_json()).unwrap();
    let labels = dataset.label_index();
    let series = build_buckets(date(2024, 6, 1), date(2024, 6, 30), Granularity::Month).unwrap();
    let data = aggregate(
        &dataset.time_entries,
        &series,
        Dimensions::all(),
        HoursKind::Spent,
    );

    assert_eq!(data.series.len(), 1);
    assert_eq!(data.series.buckets[0].label, "June 2024");

    let rows = labels.labeled_project_rows(&data.series.buckets[0].by_project);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key, "p1");
    assert_eq!(rows[0].label, "Compiler");
    assert_eq!(rows[0].total_hours, 10.5);
    assert_eq!(rows[0].entry_count, 4);
    assert_eq!(rows[1].label, "Tooling");
    assert_eq!(rows[1].total_hours, 3.5);
}

#[test]
fn test_daily_trend_over_busier_second_half() {
    let dataset = parse_dataset_json_str(dashboard_dataset_json()).unwrap();
    let series = build_buckets(date(2024, 6, 9), date(2024, 6, 12), Granularity::Day).unwrap();
    let data = aggregate(
        &dataset.time_entries,
        &series,
        Dimensions::none(),
        HoursKind::Spent,
    );

    // Daily totals 0 / 3 / 4.5 / 0: halves average 1.5 and 2.25.
    assert_eq!(data.series.len(), 4);
    assert_eq!(data.series.buckets[1].total_hours, 3.0);
    assert_eq!(data.series.buckets[2].total_hours, 4.5);
    assert_eq!(data.summary.trend.direction, TrendDirection::Up);
    assert_eq!(data.summary.trend.percent, 50.0);

    let max = data.summary.max_bucket.as_ref().unwrap();
    assert_eq!(max.index, 2);
    assert_eq!(max.total_hours, 4.5);
    let min = data.summary.min_bucket.as_ref().unwrap();
    assert_eq!(min.index, 0);
}

#[test]
fn test_sprint_board_classification_and_order() {
    let dataset = parse_dataset_json_str(dashboard_dataset_json()).unwrap();
    let classified = classify_and_sort(dataset.sprints, date(2024, 6, 5));

    let ids: Vec<&str> = classified.iter().map(|c| c.sprint.id.value()).collect();
    assert_eq!(ids, vec!["s1", "s2", "s3"]);

    assert_eq!(classified[0].status, SprintStatus::Active);
    assert_eq!(classified[1].status, SprintStatus::Upcoming);
    assert_eq!(classified[2].status, SprintStatus::Upcoming);
}

#[test]
fn test_gantt_layout_from_dataset() {
    let dataset = parse_dataset_json_str(dashboard_dataset_json()).unwrap();
    let classified = classify_and_sort(dataset.sprints, date(2024, 6, 5));
    let timeline = Timeline::new(date(2024, 6, 1), date(2024, 7, 21)).unwrap();
    let config = ChartConfig::default();

    let nodes = layout(&classified, &timeline, &config.gantt);

    // Icebox has no dates and is not drawn.
    assert_eq!(nodes.len(), 2);

    let foundation = &nodes[0];
    assert_eq!(foundation.id.value(), "s1");
    assert_eq!(foundation.status, SprintStatus::Active);
    assert_eq!(foundation.left_percent, 0.0);
    assert_eq!(foundation.width_percent, 28.0);
    assert_eq!(foundation.row_height_px, 48.0);
    assert_eq!(foundation.children.len(), 2);
    assert_eq!(foundation.children[0].left_percent, 0.0);
    assert_eq!(foundation.children[0].width_percent, 50.0);
    assert_eq!(foundation.children[1].left_percent, 50.0);
    assert_eq!(foundation.children[1].width_percent, 50.0);

    let polish = &nodes[1];
    assert_eq!(polish.id.value(), "s2");
    assert_eq!(polish.left_percent, 60.0);
    assert_eq!(polish.width_percent, 22.0);
    assert_eq!(polish.row_height_px, 32.0);
}

#[test]
fn test_axis_marks_and_bars_share_position_math() {
    let timeline = Timeline::new(date(2024, 6, 1), date(2024, 7, 21)).unwrap();

    let marks = timeline.axis_marks(Granularity::Month);
    assert_eq!(marks.len(), 2);
    assert_eq!(marks[0].position, 0.0);
    assert_eq!(marks[0].label, "June 2024");
    assert_eq!(marks[1].position, 60.0);
    assert_eq!(marks[1].label, "July 2024");

    for mark in &marks {
        assert_eq!(mark.position, timeline.position(mark.date));
        assert_eq!(
            mark.position,
            position_percent(mark.date, timeline.start(), timeline.end()).unwrap()
        );
    }

    assert_eq!(timeline.today_marker(date(2024, 6, 5)), Some(8.0));
    assert_eq!(timeline.today_marker(date(2024, 9, 1)), None);
}

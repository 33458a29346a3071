use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// One June-2024 dashboard payload shared by the scenarios.
///
/// Contents, so the per-test arithmetic is checkable at a glance:
/// - six spent entries totalling 14.0h (6.5h in the week of Jun 2, 7.5h in
///   the week of Jun 9), one 8.0h planning entry, and two records ingestion
///   must drop (unparseable date, negative hours)
/// - a sprint tree: "Foundation" (Jun 1-15) with two week-long child
///   groups, "Polish" (Jul 1-12), and the unscheduled "Icebox"
/// - identity records for both users, all three tasks, and both projects
pub fn dashboard_dataset_json() -> &'static str {
    r#"{
        "timeEntries": [
            { "date": "2024-06-03", "hours": 2.0, "userId": "u1", "taskId": "t1", "projectId": "p1" },
            { "date": "2024-06-03", "hours": 3.0, "userId": "u2", "taskId": "t2", "projectId": "p1" },
            { "date": "2024-06-05", "hours": 1.5, "userId": "u1", "taskId": "t3", "projectId": "p2" },
            { "date": "2024-06-10", "hours": 1.0, "userId": "u1", "taskId": "t1", "projectId": "p1" },
            { "date": "2024-06-11", "hours": 4.5, "userId": "u2", "taskId": "t2", "projectId": "p1" },
            { "date": "2024-06-10T08:30:00Z", "hours": 2.0, "userId": "u2", "taskId": "t3", "projectId": "p2" },
            { "date": "2024-06-04", "hours": 8.0, "userId": "u1", "taskId": "t1", "projectId": "p1", "isPlanningHours": true },
            { "date": "June 5th", "hours": 3.0, "userId": "u1", "taskId": "t1", "projectId": "p1" },
            { "date": "2024-06-05", "hours": -1.0, "userId": "u2", "taskId": "t2", "projectId": "p1" }
        ],
        "sprints": [
            {
                "id": "s1",
                "name": "Foundation",
                "startDate": "2024-06-01",
                "endDate": "2024-06-15",
                "taskIds": ["t1", "t2"],
                "children": [
                    { "id": "s1-a", "name": "Week One", "startDate": "2024-06-01", "endDate": "2024-06-08", "taskIds": ["t1"] },
                    { "id": "s1-b", "name": "Week Two", "startDate": "2024-06-08", "endDate": "2024-06-15", "taskIds": ["t2"] }
                ]
            },
            { "id": "s2", "name": "Polish", "startDate": "2024-07-01", "endDate": "2024-07-12", "taskIds": ["t3"] },
            { "id": "s3", "name": "Icebox" }
        ],
        "users": [
            { "id": "u1", "name": "Ada Lovelace" },
            { "id": "u2", "name": "Grace Hopper" }
        ],
        "tasks": [
            { "id": "t1", "name": "Parser" },
            { "id": "t2", "name": "Codegen" },
            { "id": "t3", "name": "Docs" }
        ],
        "projects": [
            { "id": "p1", "name": "Compiler" },
            { "id": "p2", "name": "Tooling" }
        ]
    }"#
}

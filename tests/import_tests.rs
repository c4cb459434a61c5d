// File: tests/import_tests.rs
use coursedeck::cli;
use coursedeck::context::{AppContext, TestContext};
use coursedeck::model::adapter::courses_from_ics;
use coursedeck::storage::MemoryStorage;
use coursedeck::store::{Action, CourseStore};
use std::fs;

fn analysis_ics() -> String {
    r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:-//Test//Test//EN
BEGIN:VEVENT
UID:lecture-1
SUMMARY:Analysis I (V) - Müller
DTSTART:20250303T081500Z
DTEND:20250303T100000Z
END:VEVENT
BEGIN:VEVENT
UID:lecture-2
SUMMARY:Analysis I (U) - Müller
DTSTART:20250304T120000Z
DTEND:20250304T140000Z
END:VEVENT
END:VCALENDAR"#
        .to_string()
}

#[test]
fn test_analysis_titles_group_into_one_course() {
    let imported = courses_from_ics(&analysis_ics());
    // Raw grouping is by exact title.
    assert_eq!(imported.len(), 2);

    let port = MemoryStorage::new();
    let mut store = CourseStore::open(Box::new(port.clone()));
    store.dispatch(Action::BulkAdd(imported)).unwrap();

    assert_eq!(store.courses().len(), 1);
    let course = &store.courses()[0];
    assert_eq!(course.id, "Analysis I  - Müller");
    assert_eq!(course.lectures.len(), 2);

    let lecture = &course.lectures[0];
    assert_eq!(lecture.types, vec!["V"]);
    assert_eq!(lecture.instructor.as_deref(), Some("Müller"));
    assert!(lecture.display);
    assert!(!lecture.is_done);

    let exercise = &course.lectures[1];
    assert_eq!(exercise.types, vec!["U"]);
    assert!(!exercise.display, "Only (V) lectures are shown by default");

    assert_eq!(port.snapshot(), store.courses());
}

#[test]
fn test_untyped_lectures_are_displayed() {
    let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:-//Test//Test//EN
BEGIN:VEVENT
UID:seminar
SUMMARY:Seminar 2025-03-05
DTSTART:20250305T090000Z
DTEND:20250305T100000Z
END:VEVENT
END:VCALENDAR"#;
    let mut store = CourseStore::open(Box::new(MemoryStorage::new()));
    store
        .dispatch(Action::BulkAdd(courses_from_ics(ics)))
        .unwrap();

    let course = store.get("Seminar").expect("date suffix is stripped");
    assert!(course.lectures[0].types.is_empty());
    assert!(course.lectures[0].display);
    assert_eq!(course.lecture_types(), vec!["Other"]);
}

#[test]
fn test_events_without_start_are_skipped() {
    let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:-//Test//Test//EN
BEGIN:VEVENT
UID:broken
SUMMARY:No Start (V)
END:VEVENT
BEGIN:VTODO
UID:todo
SUMMARY:Not a lecture
END:VTODO
END:VCALENDAR"#;
    let imported = courses_from_ics(ics);
    assert!(imported.is_empty());
}

#[test]
fn test_missing_end_defaults_to_start() {
    let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:-//Test//Test//EN
BEGIN:VEVENT
UID:a
SUMMARY:Physik (V)
DTSTART:20250306T080000Z
END:VEVENT
END:VCALENDAR"#;
    let imported = courses_from_ics(ics);
    let lecture = &imported[0].lectures[0];
    assert_eq!(lecture.start, lecture.end);
}

#[test]
fn test_bulk_add_replaces_previous_collection() {
    let mut store = CourseStore::open(Box::new(MemoryStorage::new()));
    store
        .dispatch(Action::BulkAdd(courses_from_ics(&analysis_ics())))
        .unwrap();
    let start = store.courses()[0].lectures[0].start;
    store.toggle_lecture("Analysis I  - Müller", start).unwrap();
    assert!(store.courses()[0].lectures[0].is_done);

    store
        .dispatch(Action::BulkAdd(courses_from_ics(&analysis_ics())))
        .unwrap();
    assert_eq!(store.courses().len(), 1);
    assert!(
        !store.courses()[0].lectures[0].is_done,
        "A fresh import starts from fresh records"
    );
}

#[test]
fn test_cli_import_writes_course_file() {
    let ctx = TestContext::new();
    let ics_path = ctx.root.join("lectures.ics");
    fs::write(&ics_path, analysis_ics()).unwrap();

    let count = cli::import_file(&ctx, &ics_path).unwrap();
    assert_eq!(count, 1);

    let stored = ctx.get_courses_path().unwrap();
    assert!(stored.exists());

    let courses = cli::load_courses(&ctx).unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].lectures.len(), 2);

    let lines = cli::list_lines(&courses);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Analysis I  - Müller"));
    assert!(lines[0].contains("2 lectures"));
}

#[test]
fn test_cli_import_rejects_calendar_without_events() {
    let ctx = TestContext::new();
    let ics_path = ctx.root.join("empty.ics");
    fs::write(
        &ics_path,
        "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//Test//Test//EN\nEND:VCALENDAR",
    )
    .unwrap();

    let err = cli::import_file(&ctx, &ics_path).unwrap_err();
    assert!(err.to_string().contains("No events"));
    assert!(cli::load_courses(&ctx).unwrap().is_empty());
}

#[test]
fn test_garbage_input_yields_no_courses() {
    assert!(courses_from_ics("this is not a calendar").is_empty());
    assert!(courses_from_ics("").is_empty());
}

#[test]
fn test_cli_import_missing_file() {
    let ctx = TestContext::new();
    let result = cli::import_file(&ctx, &ctx.root.join("missing.ics"));
    assert!(result.is_err());
}

#[test]
fn test_list_without_courses() {
    assert_eq!(cli::list_lines(&[]), vec!["No courses imported"]);
}

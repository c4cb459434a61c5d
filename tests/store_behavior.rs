// File: tests/store_behavior.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use coursedeck::context::{AppContext, TestContext};
use coursedeck::model::{CourseRecord, LectureItem, SeriesItem, SeriesMode};
use coursedeck::storage::{LocalStorage, MemoryStorage};
use coursedeck::store::{Action, CourseStore, Persistence, reduce};
use std::fs;

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
}

fn lecture(name: &str, start: DateTime<Utc>, types: &[&str]) -> LectureItem {
    let mut l = LectureItem::new(name, start, start + chrono::Duration::hours(2));
    l.types = types.iter().map(|t| t.to_string()).collect();
    l.display = LectureItem::shown_by_default(&l.types);
    l
}

fn sample_course() -> CourseRecord {
    let mut c = CourseRecord::new("Signale");
    c.lectures.push(lecture("Signale (V)", at(3, 8), &["V"]));
    c.lectures.push(lecture("Signale (U)", at(4, 12), &["U"]));
    c.lectures.push(lecture("Signale (V)", at(10, 8), &["V"]));
    c
}

fn make_store() -> (CourseStore, MemoryStorage) {
    let port = MemoryStorage::with_courses(vec![sample_course()]);
    (CourseStore::open(Box::new(port.clone())), port)
}

#[test]
fn test_toggle_twice_restores_state() {
    let (mut store, _) = make_store();
    let before = store.courses().to_vec();

    store.toggle_lecture("Signale", at(3, 8)).unwrap();
    assert!(store.get("Signale").unwrap().lectures[0].is_done);
    assert!(!store.get("Signale").unwrap().lectures[2].is_done);

    store.toggle_lecture("Signale", at(3, 8)).unwrap();
    assert_eq!(store.courses(), before.as_slice());
}

#[test]
fn test_toggle_needs_exact_start_time() {
    let (mut store, port) = make_store();
    let before = store.courses().to_vec();

    store
        .toggle_lecture("Signale", at(3, 8) + Duration::milliseconds(1))
        .unwrap();
    store
        .toggle_lecture("Signale", at(3, 8) - Duration::milliseconds(1))
        .unwrap();

    let lectures = &store.get("Signale").unwrap().lectures;
    assert!(lectures.iter().all(|l| !l.is_done));
    assert_eq!(store.courses(), before.as_slice());
    assert_eq!(port.snapshot(), before);
}

#[test]
fn test_toggle_only_flips_done_flag() {
    let (mut store, _) = make_store();
    let before = store.get("Signale").unwrap().clone();

    store.toggle_lecture("Signale", at(4, 12)).unwrap();
    let after = store.get("Signale").unwrap();

    let toggled = &after.lectures[1];
    let original = &before.lectures[1];
    assert!(toggled.is_done);
    assert_eq!(toggled.name, original.name);
    assert_eq!(toggled.start, original.start);
    assert_eq!(toggled.end, original.end);
    assert_eq!(toggled.types, original.types);
    assert_eq!(toggled.instructor, original.instructor);
    assert_eq!(toggled.display, original.display);

    assert_eq!(after.lectures[0], before.lectures[0]);
    assert_eq!(after.lectures[2], before.lectures[2]);
    assert_eq!(after.series, before.series);
    assert_eq!(after.id, before.id);
}

#[test]
fn test_unknown_course_is_noop() {
    let (mut store, _) = make_store();
    let before = store.courses().to_vec();
    store.toggle_lecture("Nope", at(3, 8)).unwrap();
    assert_eq!(store.courses(), before.as_slice());

    assert!(!store.toggle_series_done("Nope", 0).unwrap());
    assert!(!store.clear_series("Nope").unwrap());
}

#[test]
fn test_every_dispatch_is_persisted() {
    let (mut store, port) = make_store();
    assert_eq!(port.save_count(), 0, "Opening does not write");

    store.toggle_lecture("Signale", at(4, 12)).unwrap();
    store.set_type_display("Signale", "U", true).unwrap();
    assert_eq!(port.save_count(), 2);
    assert_eq!(port.snapshot(), store.courses());
}

#[test]
fn test_reduce_load_replaces_state() {
    let state = vec![sample_course()];
    let next = reduce(state, Action::Load(vec![]));
    assert!(next.is_empty());
}

#[test]
fn test_update_event_splices_by_id() {
    let mut other = CourseRecord::new("Physik");
    other.lectures.push(lecture("Physik (V)", at(5, 8), &["V"]));
    let state = vec![sample_course(), other.clone()];

    let mut updated = sample_course();
    updated.series_mode = SeriesMode::Manual;
    let next = reduce(state, Action::UpdateEvent(updated.clone()));

    assert_eq!(next.len(), 2);
    assert_eq!(next[0], updated);
    assert_eq!(next[1], other);
}

#[test]
fn test_type_display_flags() {
    let (mut store, _) = make_store();
    let course = store.get("Signale").unwrap();
    assert!(course.type_display_status("V"));
    assert!(!course.type_display_status("U"));
    assert_eq!(course.lecture_types(), vec!["V", "U"]);

    store.set_type_display("Signale", "V", false).unwrap();
    let course = store.get("Signale").unwrap();
    assert!(!course.type_display_status("V"));
    assert!(course.lectures.iter().all(|l| !l.display));
}

#[test]
fn test_manual_series_editing() {
    let (mut store, _) = make_store();
    assert!(store.add_manual_series("Signale", at(7, 23)).unwrap());
    assert!(store.add_manual_series("Signale", at(14, 23)).unwrap());

    let course = store.get("Signale").unwrap();
    assert_eq!(course.series_mode, SeriesMode::Manual);
    assert_eq!(course.series.len(), 2);
    assert_eq!(course.series[0].name, "New Series");

    let renamed = SeriesItem {
        name: "Serie A".to_string(),
        ..course.series[1].clone()
    };
    store.update_series("Signale", 1, renamed).unwrap();
    store.toggle_series_done("Signale", 1).unwrap();
    store.delete_series("Signale", 0).unwrap();

    let course = store.get("Signale").unwrap();
    assert_eq!(course.series.len(), 1);
    assert_eq!(course.series[0].name, "Serie A");
    assert!(course.series[0].is_done);

    store.clear_series("Signale").unwrap();
    let course = store.get("Signale").unwrap();
    assert!(course.series.is_empty());
    assert_eq!(course.series_mode, SeriesMode::None);
}

#[test]
fn test_progress_counts_lectures_and_series() {
    let (mut store, _) = make_store();
    store.toggle_lecture("Signale", at(3, 8)).unwrap();
    store.add_manual_series("Signale", at(7, 23)).unwrap();
    store.toggle_series_done("Signale", 0).unwrap();
    assert_eq!(store.get("Signale").unwrap().progress(), (2, 4));
}

#[test]
fn test_local_storage_roundtrip() {
    let ctx = TestContext::new();
    let storage = LocalStorage::from_context(&ctx).unwrap();

    {
        let mut store = CourseStore::open(Box::new(storage.clone()));
        store.dispatch(Action::Load(vec![sample_course()])).unwrap();
        store.toggle_lecture("Signale", at(10, 8)).unwrap();
    }

    let reopened = CourseStore::open(Box::new(storage));
    assert_eq!(reopened.courses().len(), 1);
    assert!(reopened.get("Signale").unwrap().lectures[2].is_done);
}

#[test]
fn test_missing_file_loads_empty() {
    let ctx = TestContext::new();
    let storage = LocalStorage::from_context(&ctx).unwrap();
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn test_corrupt_file_starts_empty_and_is_kept_aside() {
    let ctx = TestContext::new();
    let path = ctx.get_courses_path().unwrap();
    fs::write(&path, "{ this is not json").unwrap();

    let store = CourseStore::open(Box::new(LocalStorage::new(path.clone())));
    assert!(store.is_empty());
    assert!(!path.exists(), "Unreadable data is moved out of the way");

    let data_dir = ctx.get_data_dir().unwrap();
    let kept = fs::read_dir(data_dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .any(|e| e.file_name().to_string_lossy().contains("corrupt"));
    assert!(kept);
}

#[test]
fn test_stored_file_is_versioned_json() {
    let ctx = TestContext::new();
    let storage = LocalStorage::from_context(&ctx).unwrap();
    storage.save(&[sample_course()]).unwrap();

    let raw = fs::read_to_string(storage.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["courses"][0]["id"], "Signale");
}

#[test]
fn test_old_records_get_field_defaults() {
    let ctx = TestContext::new();
    let path = ctx.get_courses_path().unwrap();
    fs::write(
        &path,
        r#"{"courses":[{"id":"Alt","lectures":[{"name":"Alt","start":"2025-03-03T08:00:00Z","end":"2025-03-03T10:00:00Z"}]}]}"#,
    )
    .unwrap();

    let courses = LocalStorage::new(path).load().unwrap();
    let lecture = &courses[0].lectures[0];
    assert!(lecture.display);
    assert!(!lecture.is_done);
    assert_eq!(courses[0].series_mode, SeriesMode::None);
}

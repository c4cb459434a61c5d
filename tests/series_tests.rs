// File: tests/series_tests.rs
use chrono::{
    Datelike, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc, Weekday,
};
use coursedeck::model::adapter::parse_ics_datetime_in;
use coursedeck::model::series::{generate_weekly_series, start_of_day};
use coursedeck::model::{CourseRecord, LectureItem, SeriesMode};
use coursedeck::storage::MemoryStorage;
use coursedeck::store::CourseStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A course whose last lecture ends on `last_day` at 10:00 UTC.
fn course_ending(last_day: NaiveDate) -> CourseRecord {
    let mut c = CourseRecord::new("NuS II");
    let first = Utc.with_ymd_and_hms(2025, 2, 17, 8, 0, 0).unwrap();
    c.lectures.push(LectureItem::new("NuS II (V)", first, first));
    let last_start = Utc
        .from_utc_datetime(&last_day.and_hms_opt(8, 0, 0).unwrap());
    let last_end = Utc.from_utc_datetime(&last_day.and_hms_opt(10, 0, 0).unwrap());
    c.lectures.push(LectureItem::new("NuS II (V)", last_start, last_end));
    c
}

#[test]
fn test_weekly_series_until_last_lecture() {
    // Start Monday 2025-02-17, last lecture Friday 2025-03-14.
    let course = course_ending(date(2025, 3, 14));
    let series = generate_weekly_series(&course, date(2025, 2, 17), false, &Utc);

    let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Serie 1", "Serie 2", "Serie 3", "Serie 4"]);

    for (i, s) in series.iter().enumerate() {
        let due = s.due;
        assert_eq!(due.date_naive(), date(2025, 2, 17) + chrono::Duration::weeks(i as i64));
        assert_eq!(due.weekday(), Weekday::Mon);
        assert_eq!((due.hour(), due.minute(), due.second()), (23, 59, 59));
        assert!(!s.is_done);
        assert!(!s.obligatory);
    }
}

#[test]
fn test_start_on_last_lecture_day_counts() {
    // Midnight of the last lecture day is still before the lecture ends.
    let course = course_ending(date(2025, 3, 14));
    let series = generate_weekly_series(&course, date(2025, 3, 14), true, &Utc);
    assert_eq!(series.len(), 1);
    assert!(series[0].obligatory);
}

#[test]
fn test_start_after_last_lecture_yields_nothing() {
    let course = course_ending(date(2025, 3, 14));
    assert!(generate_weekly_series(&course, date(2025, 3, 15), false, &Utc).is_empty());
    assert!(generate_weekly_series(&course, date(2025, 6, 1), false, &Utc).is_empty());
}

#[test]
fn test_course_without_lectures_yields_nothing() {
    let course = CourseRecord::new("Empty");
    assert!(generate_weekly_series(&course, date(2025, 2, 17), false, &Utc).is_empty());
}

#[test]
fn test_last_lecture_is_by_sequence_position() {
    let mut course = course_ending(date(2025, 3, 14));
    // Moving an early lecture to the end shortens the range.
    course.lectures.swap(0, 1);
    let series = generate_weekly_series(&course, date(2025, 2, 10), false, &Utc);
    assert_eq!(series.len(), 2);
}

#[test]
fn test_store_generate_replaces_series() {
    let port = MemoryStorage::with_courses(vec![course_ending(date(2025, 3, 14))]);
    let mut store = CourseStore::open(Box::new(port.clone()));

    store
        .add_manual_series("NuS II", Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
        .unwrap();
    let generated = store
        .generate_weekly("NuS II", date(2025, 2, 17), true, &Utc)
        .unwrap();
    assert_eq!(generated, 4);

    let course = store.get("NuS II").unwrap();
    assert_eq!(course.series_mode, SeriesMode::Weekly);
    assert_eq!(course.weekly_start, Some(date(2025, 2, 17)));
    assert_eq!(course.series.len(), 4);
    assert!(course.series.iter().all(|s| s.obligatory));
    assert_eq!(port.snapshot()[0].series.len(), 4);
}

#[test]
fn test_generate_for_unknown_course() {
    let mut store = CourseStore::open(Box::new(MemoryStorage::new()));
    let generated = store
        .generate_weekly("Missing", date(2025, 2, 17), false, &Utc)
        .unwrap();
    assert_eq!(generated, 0);
    assert!(store.is_empty());
}

/// UTC-4 until 2025-09-07 04:00 UTC, then UTC-3. Local times from
/// 2025-09-07 00:00 to 00:59 do not exist.
#[derive(Debug, Clone, Copy)]
struct MidnightJumpZone;

impl MidnightJumpZone {
    fn before() -> FixedOffset {
        FixedOffset::west_opt(4 * 3600).unwrap()
    }

    fn after() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }
}

impl TimeZone for MidnightJumpZone {
    type Offset = FixedOffset;

    fn from_offset(_offset: &FixedOffset) -> Self {
        MidnightJumpZone
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
        self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
        let gap_start = date(2025, 9, 7).and_hms_opt(0, 0, 0).unwrap();
        let gap_end = date(2025, 9, 7).and_hms_opt(1, 0, 0).unwrap();
        if *local < gap_start {
            LocalResult::Single(Self::before())
        } else if *local >= gap_end {
            LocalResult::Single(Self::after())
        } else {
            LocalResult::None
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
        self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
        if *utc < date(2025, 9, 7).and_hms_opt(4, 0, 0).unwrap() {
            Self::before()
        } else {
            Self::after()
        }
    }
}

#[test]
fn test_series_continue_past_skipped_midnight() {
    // Sundays from 2025-08-31; the 2025-09-07 midnight is skipped.
    let course = course_ending(date(2025, 9, 28));
    let series = generate_weekly_series(&course, date(2025, 8, 31), false, &MidnightJumpZone);

    let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Serie 1", "Serie 2", "Serie 3", "Serie 4", "Serie 5"]
    );
    // 23:59:59.999 at UTC-3.
    assert_eq!(
        series[1].due,
        Utc.with_ymd_and_hms(2025, 9, 8, 2, 59, 59).unwrap() + chrono::Duration::milliseconds(999)
    );
}

#[test]
fn test_skipped_midnight_starts_at_first_existing_time() {
    assert_eq!(
        start_of_day(date(2025, 9, 7), &MidnightJumpZone),
        Some(Utc.with_ymd_and_hms(2025, 9, 7, 4, 0, 0).unwrap())
    );
    assert_eq!(
        start_of_day(date(2025, 9, 6), &MidnightJumpZone),
        Some(Utc.with_ymd_and_hms(2025, 9, 6, 4, 0, 0).unwrap())
    );
}

#[test]
fn test_ics_times_inside_gap_are_kept() {
    assert_eq!(
        parse_ics_datetime_in("20250907T003000", &MidnightJumpZone),
        Some(Utc.with_ymd_and_hms(2025, 9, 7, 4, 0, 0).unwrap())
    );
    assert_eq!(
        parse_ics_datetime_in("20250907", &MidnightJumpZone),
        Some(Utc.with_ymd_and_hms(2025, 9, 7, 4, 0, 0).unwrap())
    );
    assert_eq!(
        parse_ics_datetime_in("20250908T090000", &MidnightJumpZone),
        Some(Utc.with_ymd_and_hms(2025, 9, 8, 12, 0, 0).unwrap())
    );
}

// File: ./src/model/series.rs
// Weekly exercise series generation.
use crate::model::item::{CourseRecord, SeriesItem};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Longest stretch of local time a zone transition can skip.
const MAX_GAP_MINUTES: i64 = 24 * 60;

/// Generates "Serie 1", "Serie 2", ... one week apart, starting on `start`.
///
/// Stepping stops as soon as the cursor (midnight of the current week's day in `tz`)
/// reaches the end of the course's last lecture. Each due timestamp is the end of
/// that day in `tz`. A course without lectures yields nothing.
///
/// Days whose midnight is skipped by a DST jump start at the first local time
/// that exists.
pub fn generate_weekly_series<Tz: TimeZone>(
    course: &CourseRecord,
    start: NaiveDate,
    obligatory: bool,
    tz: &Tz,
) -> Vec<SeriesItem> {
    let mut series = Vec::new();
    let Some(end) = course.last_lecture_end() else {
        return series;
    };

    let mut day = start;
    let mut count = 1;
    while let Some(cursor) = start_of_day(day, tz) {
        if cursor >= end {
            break;
        }
        if let Some(due) = end_of_day(day, tz) {
            series.push(SeriesItem::new(&format!("Serie {}", count), due, obligatory));
            count += 1;
        }
        day += Duration::days(7);
    }
    series
}

pub fn start_of_day<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Option<DateTime<Utc>> {
    earliest_at_or_after(&day.and_time(NaiveTime::MIN), tz)
}

pub fn end_of_day<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Option<DateTime<Utc>> {
    let last = day.and_hms_milli_opt(23, 59, 59, 999)?;
    latest_at_or_before(&last, tz)
}

/// Resolves a wall-clock time in `tz`. Inside a DST gap this moves forward
/// minute by minute to the first time that exists.
pub fn earliest_at_or_after<Tz: TimeZone>(
    local: &NaiveDateTime,
    tz: &Tz,
) -> Option<DateTime<Utc>> {
    (0..=MAX_GAP_MINUTES).find_map(|m| {
        tz.from_local_datetime(&(*local + Duration::minutes(m)))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
    })
}

/// Like `earliest_at_or_after`, moving backward to the last time that exists.
pub fn latest_at_or_before<Tz: TimeZone>(
    local: &NaiveDateTime,
    tz: &Tz,
) -> Option<DateTime<Utc>> {
    (0..=MAX_GAP_MINUTES).find_map(|m| {
        tz.from_local_datetime(&(*local - Duration::minutes(m)))
            .latest()
            .map(|dt| dt.with_timezone(&Utc))
    })
}

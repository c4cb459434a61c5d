// File: ./src/model/adapter.rs
// Handles ICS import of lecture events and export of series deadlines.
use crate::model::item::{CourseRecord, LectureItem};
use crate::model::parser::strip_date_suffix;
use crate::model::series::earliest_at_or_after;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use icalendar::{Calendar, CalendarComponent, Component, Todo, TodoStatus};

/// Parses an ICS date value as found in DTSTART/DTEND.
///
/// `Z`-suffixed values are UTC. Floating and TZID-qualified values are read in the
/// local time zone, all-day values as local midnight.
pub fn parse_ics_datetime(val: &str) -> Option<DateTime<Utc>> {
    parse_ics_datetime_in(val, &Local)
}

/// `parse_ics_datetime` with floating values read in `tz`. Times skipped by a
/// DST jump resolve to the first time after the gap.
pub fn parse_ics_datetime_in<Tz: TimeZone>(val: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let val = val.trim();
    if val.len() == 8 {
        let date = NaiveDate::parse_from_str(val, "%Y%m%d").ok()?;
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return earliest_at_or_after(&midnight, tz);
    }
    if let Some(stripped) = val.strip_suffix('Z') {
        return NaiveDateTime::parse_from_str(stripped, "%Y%m%dT%H%M%S")
            .ok()
            .map(|d| Utc.from_utc_datetime(&d));
    }
    let naive = NaiveDateTime::parse_from_str(val, "%Y%m%dT%H%M%S").ok()?;
    earliest_at_or_after(&naive, tz)
}

/// Reads every VEVENT of an ICS document and groups them by exact title.
///
/// The returned records are not normalized yet: their id is the raw title and
/// every lecture is untyped. `store::Action::BulkAdd` does the parsing.
/// Unparseable input yields no records.
pub fn courses_from_ics(raw_ics: &str) -> Vec<CourseRecord> {
    let calendar: Calendar = match raw_ics.parse() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Could not parse calendar file: {}", e);
            return Vec::new();
        }
    };

    let mut grouped: Vec<CourseRecord> = Vec::new();

    for component in &calendar.components {
        let CalendarComponent::Event(event) = component else {
            continue;
        };

        let summary = event.get_summary().unwrap_or("").trim();
        let title = strip_date_suffix(summary).to_string();

        let Some(start) = event
            .properties()
            .get("DTSTART")
            .and_then(|p| parse_ics_datetime(p.value()))
        else {
            log::debug!("Skipping event '{}' without a usable DTSTART", title);
            continue;
        };
        let end = event
            .properties()
            .get("DTEND")
            .and_then(|p| parse_ics_datetime(p.value()))
            .unwrap_or(start);

        let lecture = LectureItem::new(&title, start, end);

        if let Some(existing) = grouped.iter_mut().find(|c| c.id == title) {
            existing.lectures.push(lecture);
        } else {
            let mut record = CourseRecord::new(&title);
            record.lectures.push(lecture);
            grouped.push(record);
        }
    }

    log::debug!(
        "Read {} lecture titles ({} events) from ICS",
        grouped.len(),
        grouped.iter().map(|c| c.lectures.len()).sum::<usize>()
    );
    grouped
}

/// Exports every series deadline as a VTODO so other task managers can pick them up.
pub fn series_to_ics(courses: &[CourseRecord]) -> String {
    let mut calendar = Calendar::new();
    for course in courses {
        for (idx, serie) in course.series.iter().enumerate() {
            let mut todo = Todo::new();
            todo.uid(&format!("{}-{}", slug(&course.id), idx + 1));
            todo.summary(&format!("{}: {}", course.id, serie.name));
            todo.timestamp(Utc::now());
            todo.add_property("DUE", serie.due.format("%Y%m%dT%H%M%SZ").to_string());
            if serie.obligatory {
                todo.priority(1);
            }
            if serie.is_done {
                todo.status(TodoStatus::Completed);
            } else {
                todo.status(TodoStatus::NeedsAction);
            }
            calendar.push(todo);
        }
    }
    calendar.to_string()
}

fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

// File: ./src/model/display.rs
// Flattens course records into the entries shown on the calendar.
use crate::model::item::CourseRecord;
use crate::model::series::start_of_day;
use chrono::{DateTime, Local, NaiveDate, Utc};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Lecture,
    Series,
}

/// Background tone of an entry, mirroring the calendar legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryTone {
    Done,
    Obligatory,
    Series,
    Lecture,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    pub course_id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub all_day: bool,
    pub kind: EntryKind,
    pub is_done: bool,
    pub obligatory: bool,
    pub instructor: Option<String>,
    pub types: Vec<String>,
    /// Index into the course's lecture or series list, depending on `kind`.
    pub index: usize,
}

impl CalendarEntry {
    pub fn tone(&self) -> EntryTone {
        if self.is_done {
            EntryTone::Done
        } else if self.kind == EntryKind::Series {
            if self.obligatory {
                EntryTone::Obligatory
            } else {
                EntryTone::Series
            }
        } else {
            EntryTone::Lecture
        }
    }

    pub fn local_day(&self) -> NaiveDate {
        self.start.with_timezone(&Local).date_naive()
    }
}

/// Displayed lectures followed by all series items, sorted by start time.
///
/// Lectures with `display == false` are left out. Series are all-day entries
/// spanning the day of their due date.
pub fn calendar_entries(courses: &[CourseRecord]) -> Vec<CalendarEntry> {
    let mut entries = Vec::new();
    for course in courses {
        for (index, lecture) in course.lectures.iter().enumerate() {
            if !lecture.display {
                continue;
            }
            entries.push(CalendarEntry {
                course_id: course.id.clone(),
                title: lecture.name.clone(),
                start: lecture.start,
                end: lecture.end,
                all_day: false,
                kind: EntryKind::Lecture,
                is_done: lecture.is_done,
                obligatory: false,
                instructor: lecture.instructor.clone(),
                types: lecture.types.clone(),
                index,
            });
        }
        for (index, serie) in course.series.iter().enumerate() {
            let day = serie.due_date_local();
            let start = start_of_day(day, &Local).unwrap_or(serie.due);
            entries.push(CalendarEntry {
                course_id: course.id.clone(),
                title: serie.name.clone(),
                start,
                end: serie.due,
                all_day: true,
                kind: EntryKind::Series,
                is_done: serie.is_done,
                obligatory: serie.obligatory,
                instructor: None,
                types: Vec::new(),
                index,
            });
        }
    }
    entries.sort_by(|a, b| a.start.cmp(&b.start).then(a.title.cmp(&b.title)));
    entries
}

/// Groups entries by local day for the agenda view.
pub fn group_by_day(entries: &[CalendarEntry]) -> BTreeMap<NaiveDate, Vec<&CalendarEntry>> {
    let mut days: BTreeMap<NaiveDate, Vec<&CalendarEntry>> = BTreeMap::new();
    for entry in entries {
        days.entry(entry.local_day()).or_default().push(entry);
    }
    days
}

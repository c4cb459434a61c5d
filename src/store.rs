// File: src/store.rs
use crate::model::item::{CourseRecord, LectureItem, SeriesItem, SeriesMode};
use crate::model::parser::parse_lecture_line;
use crate::model::series::generate_weekly_series;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Where the course collection lives between runs.
///
/// `load` is called once when the store opens, `save` after every committed action.
pub trait Persistence: Send + std::fmt::Debug {
    fn load(&self) -> Result<Vec<CourseRecord>>;
    fn save(&self, courses: &[CourseRecord]) -> Result<()>;
}

#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the whole collection.
    Load(Vec<CourseRecord>),
    /// Flip `is_done` of the lecture starting exactly at `lecture_start`.
    ToggleLecture {
        course_id: String,
        lecture_start: DateTime<Utc>,
    },
    /// Group freshly imported records by parsed course name and replace the collection.
    BulkAdd(Vec<CourseRecord>),
    /// Splice in a full replacement record with the same id.
    UpdateEvent(CourseRecord),
}

/// Pure transition function. The store wraps it with persistence.
pub fn reduce(state: Vec<CourseRecord>, action: Action) -> Vec<CourseRecord> {
    match action {
        Action::Load(courses) => courses,
        Action::ToggleLecture {
            course_id,
            lecture_start,
        } => state
            .into_iter()
            .map(|mut course| {
                if course.id == course_id {
                    for lecture in course
                        .lectures
                        .iter_mut()
                        .filter(|l| l.start.timestamp_millis() == lecture_start.timestamp_millis())
                    {
                        lecture.is_done = !lecture.is_done;
                    }
                }
                course
            })
            .collect(),
        Action::BulkAdd(imported) => group_imported(imported),
        Action::UpdateEvent(updated) => state
            .into_iter()
            .map(|course| {
                if course.id == updated.id {
                    updated.clone()
                } else {
                    course
                }
            })
            .collect(),
    }
}

fn group_imported(imported: Vec<CourseRecord>) -> Vec<CourseRecord> {
    let mut grouped: Vec<CourseRecord> = Vec::new();

    for record in imported {
        for lecture in record.lectures {
            let parsed = parse_lecture_line(&lecture.name);
            let display = LectureItem::shown_by_default(&parsed.lecture_types);
            let lecture = LectureItem {
                types: parsed.lecture_types,
                instructor: parsed.instructor,
                display,
                ..lecture
            };

            if let Some(course) = grouped.iter_mut().find(|c| c.id == parsed.course_name) {
                course.lectures.push(lecture);
            } else {
                let mut course = CourseRecord::new(&parsed.course_name);
                course.lectures.push(lecture);
                grouped.push(course);
            }
        }
    }
    grouped
}

#[derive(Debug)]
pub struct CourseStore {
    courses: Vec<CourseRecord>,
    port: Box<dyn Persistence>,
}

impl CourseStore {
    /// Opens the store, reading the persisted collection once.
    /// An unreadable collection starts the store empty.
    pub fn open(port: Box<dyn Persistence>) -> Self {
        let courses = match port.load() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Could not load stored courses, starting empty: {:#}", e);
                Vec::new()
            }
        };
        log::info!("Opened course store with {} courses", courses.len());
        Self { courses, port }
    }

    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    pub fn get(&self, course_id: &str) -> Option<&CourseRecord> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Applies one action and writes the result through the persistence port.
    ///
    /// The new state is kept even if writing fails; the error is returned so the
    /// caller can report it.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let state = std::mem::take(&mut self.courses);
        self.courses = reduce(state, action);
        self.port.save(&self.courses)
    }

    // --- Settings panel helpers (all expressed as UpdateEvent) ---

    fn update_with<F>(&mut self, course_id: &str, f: F) -> Result<bool>
    where
        F: FnOnce(&mut CourseRecord),
    {
        let Some(mut course) = self.get(course_id).cloned() else {
            return Ok(false);
        };
        f(&mut course);
        self.dispatch(Action::UpdateEvent(course))?;
        Ok(true)
    }

    pub fn toggle_lecture(&mut self, course_id: &str, lecture_start: DateTime<Utc>) -> Result<()> {
        self.dispatch(Action::ToggleLecture {
            course_id: course_id.to_string(),
            lecture_start,
        })
    }

    /// Series items are addressed by position; names are not unique once edited.
    pub fn toggle_series_done(&mut self, course_id: &str, index: usize) -> Result<bool> {
        self.update_with(course_id, |course| {
            if let Some(serie) = course.series.get_mut(index) {
                serie.is_done = !serie.is_done;
            }
        })
    }

    pub fn add_manual_series(&mut self, course_id: &str, due: DateTime<Utc>) -> Result<bool> {
        self.update_with(course_id, |course| {
            course.series.push(SeriesItem::new("New Series", due, false));
            if course.series_mode == SeriesMode::None {
                course.series_mode = SeriesMode::Manual;
            }
        })
    }

    pub fn update_series(&mut self, course_id: &str, index: usize, item: SeriesItem) -> Result<bool> {
        self.update_with(course_id, |course| {
            if let Some(slot) = course.series.get_mut(index) {
                *slot = item;
            }
        })
    }

    pub fn delete_series(&mut self, course_id: &str, index: usize) -> Result<bool> {
        self.update_with(course_id, |course| {
            if index < course.series.len() {
                course.series.remove(index);
            }
        })
    }

    pub fn clear_series(&mut self, course_id: &str) -> Result<bool> {
        self.update_with(course_id, |course| {
            course.series_mode = SeriesMode::None;
            course.series.clear();
            course.weekly_start = None;
        })
    }

    /// Replaces the course's series with a generated weekly sequence.
    pub fn generate_weekly<Tz: TimeZone>(
        &mut self,
        course_id: &str,
        start: NaiveDate,
        obligatory: bool,
        tz: &Tz,
    ) -> Result<usize> {
        let mut generated = 0;
        self.update_with(course_id, |course| {
            let series = generate_weekly_series(course, start, obligatory, tz);
            generated = series.len();
            course.series_mode = SeriesMode::Weekly;
            course.weekly_start = Some(start);
            course.series = series;
        })?;
        Ok(generated)
    }

    /// Shows or hides every lecture of one type ("Other" addresses untyped lectures).
    pub fn set_type_display(&mut self, course_id: &str, tag: &str, display: bool) -> Result<bool> {
        self.update_with(course_id, |course| {
            for lecture in course.lectures.iter_mut().filter(|l| l.has_type(tag)) {
                lecture.display = display;
            }
        })
    }
}

// File: ./src/model/item.rs
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{Display, EnumIter};

/// Tag used for lectures that carry no parenthesized type.
pub const UNTYPED_LECTURE_TAG: &str = "Other";

/// Lectures carrying this tag are shown on the calendar by default.
pub const DEFAULT_VISIBLE_TAG: &str = "V";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureItem {
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default = "default_display")]
    pub display: bool,
}

fn default_display() -> bool {
    true
}

impl LectureItem {
    /// A freshly imported lecture: not done, untyped, displayed.
    pub fn new(name: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            start,
            end,
            is_done: false,
            types: Vec::new(),
            instructor: None,
            display: true,
        }
    }

    /// Type tags used for grouping in the settings panel.
    /// Untyped lectures fall into the "Other" bucket.
    pub fn effective_types(&self) -> Vec<&str> {
        if self.types.is_empty() {
            vec![UNTYPED_LECTURE_TAG]
        } else {
            self.types.iter().map(String::as_str).collect()
        }
    }

    pub fn has_type(&self, tag: &str) -> bool {
        self.effective_types().contains(&tag)
    }

    pub fn shown_by_default(types: &[String]) -> bool {
        types.is_empty() || types.iter().any(|t| t == DEFAULT_VISIBLE_TAG)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesItem {
    pub name: String,
    pub due: DateTime<Utc>,
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub obligatory: bool,
}

impl SeriesItem {
    pub fn new(name: &str, due: DateTime<Utc>, obligatory: bool) -> Self {
        Self {
            name: name.to_string(),
            due,
            is_done: false,
            obligatory,
        }
    }

    pub fn due_date_local(&self) -> NaiveDate {
        self.due.with_timezone(&Local).date_naive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter, Display)]
pub enum SeriesMode {
    #[default]
    #[strum(to_string = "none")]
    None,
    #[strum(to_string = "manual")]
    Manual,
    #[strum(to_string = "weekly")]
    Weekly,
}

/// All lectures and exercise series belonging to one course.
///
/// `id` is the course name with type tags stripped; it is unique within a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    #[serde(default)]
    pub lectures: Vec<LectureItem>,
    #[serde(default)]
    pub series_mode: SeriesMode,
    #[serde(default)]
    pub series: Vec<SeriesItem>,
    #[serde(default)]
    pub weekly_start: Option<NaiveDate>,
}

impl CourseRecord {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            lectures: Vec::new(),
            series_mode: SeriesMode::None,
            series: Vec::new(),
            weekly_start: None,
        }
    }

    /// End of the last lecture in sequence order (not the latest end overall).
    pub fn last_lecture_end(&self) -> Option<DateTime<Utc>> {
        self.lectures.last().map(|l| l.end)
    }

    /// Distinct lecture types in first-seen order, "Other" for untyped lectures.
    pub fn lecture_types(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut ordered = Vec::new();
        for lecture in &self.lectures {
            for t in lecture.effective_types() {
                if seen.insert(t.to_string()) {
                    ordered.push(t.to_string());
                }
            }
        }
        ordered
    }

    /// A type counts as displayed when at least one lecture of that type is.
    pub fn type_display_status(&self, tag: &str) -> bool {
        self.lectures
            .iter()
            .filter(|l| l.has_type(tag))
            .any(|l| l.display)
    }

    /// (done, total) over lectures and series together.
    pub fn progress(&self) -> (usize, usize) {
        let done = self.lectures.iter().filter(|l| l.is_done).count()
            + self.series.iter().filter(|s| s.is_done).count();
        (done, self.lectures.len() + self.series.len())
    }
}

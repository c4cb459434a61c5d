// Defines actions and events for TUI interaction and state updates.
use crate::materials::Page;
use crate::model::CourseRecord;
use std::path::PathBuf;

/// Requests from the key handlers that the main loop carries out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Navigate(Page),
    Import(PathBuf),
}

/// Results coming back from background tasks.
#[derive(Debug)]
pub enum AppEvent {
    Imported {
        path: PathBuf,
        courses: Vec<CourseRecord>,
    },
    Error(String),
    Status(String),
}

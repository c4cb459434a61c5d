// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::config::Config;
use crate::context::AppContext;
use crate::epicycle::{Complex, Epicycle};
use crate::leaderboard::{self, Standing};
use crate::materials::{Lesson, Page};
use crate::model::display::{CalendarEntry, EntryKind, calendar_entries};
use crate::model::{CourseRecord, LectureItem, SeriesItem};
use crate::phasor::PhasorSimulator;
use crate::storage::LocalStorage;
use crate::store::{CourseStore, Persistence};
use crate::ticker::Ticker;
use chrono::NaiveDate;
use ratatui::widgets::ListState;
use std::sync::Arc;
use tokio::time::Instant;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    ImportPath,
    GoTo,
    EditingWeeklyStart,
    EditingSeriesName,
    EditingSeriesDue,
    SearchingPlayer,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CalendarFocus {
    Courses,
    Settings,
    Agenda,
}

/// The dialog opened from an agenda entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Lecture { course_id: String, index: usize },
    Series { course_id: String, index: usize },
}

/// One row of the expanded course settings panel.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsRow {
    Type(String),
    WeeklyStart,
    Obligatory,
    Generate,
    AddSeries,
    ClearSeries,
    Series(usize),
}

pub fn settings_rows(course: &CourseRecord) -> Vec<SettingsRow> {
    let mut rows: Vec<SettingsRow> = course
        .lecture_types()
        .into_iter()
        .map(SettingsRow::Type)
        .collect();
    rows.extend([
        SettingsRow::WeeklyStart,
        SettingsRow::Obligatory,
        SettingsRow::Generate,
        SettingsRow::AddSeries,
        SettingsRow::ClearSeries,
    ]);
    rows.extend((0..course.series.len()).map(SettingsRow::Series));
    rows
}

pub struct AppState {
    // Data
    pub ctx: Arc<dyn AppContext>,
    pub config: Config,
    pub store: CourseStore,
    pub entries: Vec<CalendarEntry>,

    // Navigation
    pub page: Page,
    pub mode: InputMode,
    pub message: String,
    pub loading: bool,
    pub show_full_help: bool,

    // Input Buffers
    pub input_buffer: String,
    pub cursor_position: usize,

    // Home / lesson pages
    pub lesson_state: ListState,
    pub week_state: ListState,

    // Calendar
    pub calendar_focus: CalendarFocus,
    pub course_state: ListState,
    pub agenda_state: ListState,
    pub settings_state: ListState,
    pub expanded_course: Option<String>,
    pub weekly_start: Option<NaiveDate>,
    pub obligatory: bool,
    pub modal: Option<Modal>,

    // Animation
    pub phasor: PhasorSimulator,
    pub phasor_selected: usize,
    pub epicycle: Epicycle,
    /// Bounding box of the signature, computed once.
    pub epicycle_extent: (Complex, Complex),
    pub ticker: Option<Ticker>,
    pub last_frame: Option<Instant>,

    // Leaderboard
    pub standings: Vec<Standing>,
    pub player_query: String,
}

impl AppState {
    /// State backed by the course file of `ctx`.
    pub fn new(ctx: Arc<dyn AppContext>, config: Config) -> anyhow::Result<Self> {
        let storage = LocalStorage::from_context(ctx.as_ref())?;
        Ok(Self::with_persistence(ctx, config, Box::new(storage)))
    }

    pub fn with_persistence(
        ctx: Arc<dyn AppContext>,
        config: Config,
        port: Box<dyn Persistence>,
    ) -> Self {
        let store = CourseStore::open(port);
        let mut lesson_state = ListState::default();
        lesson_state.select(Some(0));
        let epicycle = Epicycle::new(config.epicycle_trace_len);
        let epicycle_extent = epicycle.path_extent();

        let mut state = Self {
            ctx,
            store,
            entries: Vec::new(),
            page: Page::Home,
            mode: InputMode::Normal,
            message: String::new(),
            loading: false,
            show_full_help: false,
            input_buffer: String::new(),
            cursor_position: 0,
            lesson_state,
            week_state: ListState::default(),
            calendar_focus: CalendarFocus::Courses,
            course_state: ListState::default(),
            agenda_state: ListState::default(),
            settings_state: ListState::default(),
            expanded_course: None,
            weekly_start: None,
            obligatory: config.default_obligatory,
            modal: None,
            phasor: {
                let mut sim = PhasorSimulator::new(config.clamped_frequency());
                sim.show_sum = config.show_sum;
                sim
            },
            phasor_selected: 0,
            epicycle,
            epicycle_extent,
            ticker: None,
            last_frame: None,
            standings: leaderboard::standings(&leaderboard::default_players()),
            player_query: String::new(),
            config,
        };
        state.refresh_entries();
        state
    }

    // --- DATA ---

    /// Rebuilds the agenda after any store change and clamps selections.
    pub fn refresh_entries(&mut self) {
        self.entries = calendar_entries(self.store.courses());
        clamp(&mut self.agenda_state, self.entries.len());
        clamp(&mut self.course_state, self.store.courses().len());

        let stale = self
            .expanded_course
            .as_deref()
            .is_some_and(|id| self.store.get(id).is_none());
        if stale {
            self.expanded_course = None;
            self.calendar_focus = CalendarFocus::Courses;
        }
        let rows = self.current_settings_rows().len();
        clamp(&mut self.settings_state, rows);

        if self.store.is_empty() {
            self.message = "No courses imported".to_string();
        }
    }

    /// Reports the outcome of a store mutation in the status bar.
    pub fn report(&mut self, result: anyhow::Result<()>, ok: &str) {
        match result {
            Ok(()) => self.message = ok.to_string(),
            Err(e) => {
                log::error!("Store update failed: {:#}", e);
                self.message = format!("Error: {}", e);
            }
        }
        self.refresh_entries();
    }

    pub fn selected_course(&self) -> Option<&CourseRecord> {
        self.course_state
            .selected()
            .and_then(|i| self.store.courses().get(i))
    }

    pub fn expanded(&self) -> Option<&CourseRecord> {
        self.expanded_course.as_deref().and_then(|id| self.store.get(id))
    }

    pub fn current_settings_rows(&self) -> Vec<SettingsRow> {
        self.expanded().map(settings_rows).unwrap_or_default()
    }

    pub fn selected_settings_row(&self) -> Option<SettingsRow> {
        let rows = self.current_settings_rows();
        self.settings_state.selected().and_then(|i| rows.get(i).cloned())
    }

    pub fn selected_entry(&self) -> Option<&CalendarEntry> {
        self.agenda_state.selected().and_then(|i| self.entries.get(i))
    }

    pub fn open_selected_entry(&mut self) {
        let Some((course_id, index, kind)) = self
            .selected_entry()
            .map(|e| (e.course_id.clone(), e.index, e.kind))
        else {
            return;
        };
        self.modal = Some(match kind {
            EntryKind::Lecture => Modal::Lecture { course_id, index },
            EntryKind::Series => Modal::Series { course_id, index },
        });
    }

    pub fn modal_lecture(&self) -> Option<(&CourseRecord, &LectureItem)> {
        match &self.modal {
            Some(Modal::Lecture { course_id, index }) => {
                let course = self.store.get(course_id)?;
                course.lectures.get(*index).map(|l| (course, l))
            }
            _ => None,
        }
    }

    pub fn modal_series(&self) -> Option<(&CourseRecord, &SeriesItem)> {
        match &self.modal {
            Some(Modal::Series { course_id, index }) => {
                let course = self.store.get(course_id)?;
                course.series.get(*index).map(|s| (course, s))
            }
            _ => None,
        }
    }

    /// Expands the settings panel of the selected course, collapsing any other.
    pub fn toggle_expanded(&mut self) {
        let Some((id, weekly_start)) = self
            .selected_course()
            .map(|c| (c.id.clone(), c.weekly_start))
        else {
            return;
        };
        if self.expanded_course.as_deref() == Some(id.as_str()) {
            self.expanded_course = None;
            self.calendar_focus = CalendarFocus::Courses;
            return;
        }
        self.weekly_start = weekly_start;
        self.expanded_course = Some(id);
        self.calendar_focus = CalendarFocus::Settings;
        self.settings_state.select(Some(0));
    }

    // --- PAGES & ANIMATION ---

    pub fn navigate(&mut self, page: Page) {
        if self.page != page {
            log::debug!("Navigate {} -> {}", self.page.route(), page.route());
        }
        self.page = page;
        self.modal = None;
        if let Page::Lesson(lesson) = page {
            let weeks = crate::materials::lesson_info(lesson).weeks.len();
            self.week_state.select(if weeks > 0 { Some(0) } else { None });
        }
        self.sync_ticker();
    }

    pub fn next_page(&mut self) {
        self.cycle_page(1);
    }

    pub fn previous_page(&mut self) {
        self.cycle_page(-1);
    }

    fn cycle_page(&mut self, delta: isize) {
        let pages = Page::navigable();
        let len = pages.len() as isize;
        let current = pages.iter().position(|p| *p == self.page).unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.navigate(pages[next]);
    }

    pub fn selected_lesson(&self) -> Option<Lesson> {
        use strum::IntoEnumIterator;
        self.lesson_state
            .selected()
            .and_then(|i| Lesson::iter().nth(i))
    }

    /// The animated page currently needs frames.
    pub fn wants_frames(&self) -> bool {
        match self.page {
            Page::Home => true,
            Page::Phasors => self.phasor.is_running(),
            _ => false,
        }
    }

    /// Starts or stops the ticker so it runs only while something animates.
    /// Must be called from inside the tokio runtime.
    pub fn sync_ticker(&mut self) {
        match (self.wants_frames(), self.ticker.is_some()) {
            (true, false) => {
                self.ticker = Some(Ticker::start(self.config.frame_rate));
                self.last_frame = None;
            }
            (false, true) => {
                self.ticker = None;
                self.last_frame = None;
            }
            _ => {}
        }
    }

    pub fn toggle_phasor_running(&mut self) {
        self.phasor.toggle_running();
        self.sync_ticker();
    }

    /// Advances whatever is on screen by the real time since the last frame.
    pub fn on_tick(&mut self, now: Instant) {
        let dt = self
            .last_frame
            .map(|prev| now.saturating_duration_since(prev).as_secs_f64())
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        match self.page {
            Page::Phasors => {
                self.phasor.frame(dt);
            }
            Page::Home => {
                self.epicycle.step(1.0);
            }
            _ => {}
        }
    }

    // --- LEADERBOARD ---

    pub fn found_player(&self) -> Option<&Standing> {
        leaderboard::find(&self.standings, &self.player_query)
    }

    // --- INPUT HELPERS ---
    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }
    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }
    pub fn enter_char(&mut self, new_char: char) {
        let byte_index = self
            .input_buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input_buffer.len());

        self.input_buffer.insert(byte_index, new_char);
        self.move_cursor_right();
    }
    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let before = self.input_buffer.chars().take(current_index - 1);
            let after = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before.chain(after).collect();
            self.move_cursor_left();
        }
    }
    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
    pub fn start_input(&mut self, mode: InputMode, initial: &str) {
        self.mode = mode;
        self.input_buffer = initial.to_string();
        self.cursor_position = self.input_buffer.chars().count();
    }
    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }
}

/// Moves a list selection by `delta`, wrapping around.
pub fn step_selection(list: &mut ListState, len: usize, delta: isize) {
    if len == 0 {
        list.select(None);
        return;
    }
    let current = list.selected().unwrap_or(0) as isize;
    let next = (current + delta).rem_euclid(len as isize) as usize;
    list.select(Some(next));
}

fn clamp(list: &mut ListState, len: usize) {
    if len == 0 {
        list.select(None);
    } else {
        let current = list.selected().unwrap_or(0);
        list.select(Some(current.min(len - 1)));
    }
}

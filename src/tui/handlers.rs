// File: src/tui/handlers.rs
// Handles keyboard input and background events for the TUI.
use crate::materials::{self, Page};
use crate::model::series::end_of_day;
use crate::tui::action::{Action, AppEvent};
use crate::tui::state::{AppState, CalendarFocus, InputMode, Modal, SettingsRow, step_selection};
use chrono::{Local, NaiveDate, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

const AMPLITUDE_STEP: f64 = 5.0;
const PHASE_STEP_DEG: f64 = 15.0;

pub fn handle_app_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Status(s) => state.message = s,
        AppEvent::Error(s) => {
            log::warn!("{}", s);
            state.message = format!("Error: {}", s);
            state.loading = false;
        }
        AppEvent::Imported { path, courses } => {
            state.loading = false;
            if courses.is_empty() {
                state.message = format!("No events found in {}", path.display());
                return;
            }
            let result = state
                .store
                .dispatch(crate::store::Action::BulkAdd(courses));
            let summary = format!("Imported {} courses", state.store.courses().len());
            state.expanded_course = None;
            state.calendar_focus = CalendarFocus::Courses;
            state.report(result, &summary);
        }
    }
}

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if state.mode != InputMode::Normal {
        return handle_input_mode(key, state);
    }

    if state.modal.is_some() {
        handle_modal(key, state);
        return None;
    }

    match key.code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Tab => state.next_page(),
        KeyCode::BackTab => state.previous_page(),
        KeyCode::Char('?') => state.show_full_help = !state.show_full_help,
        KeyCode::Char('g') => {
            let route = state.page.route();
            state.start_input(InputMode::GoTo, route);
        }
        _ => {
            return match state.page {
                Page::Home => handle_home(key, state),
                Page::Lesson(_) => handle_lesson(key, state),
                Page::Calendar => handle_calendar(key, state),
                Page::Phasors => {
                    handle_phasors(key, state);
                    None
                }
                Page::Leaderboard => {
                    handle_leaderboard(key, state);
                    None
                }
                Page::NotFound => match key.code {
                    KeyCode::Enter | KeyCode::Esc => Some(Action::Navigate(Page::Home)),
                    _ => None,
                },
            };
        }
    }
    None
}

fn handle_input_mode(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match key.code {
        KeyCode::Esc => {
            state.mode = InputMode::Normal;
            state.reset_input();
            None
        }
        KeyCode::Enter => {
            let input = state.input_buffer.trim().to_string();
            let mode = state.mode;
            state.mode = InputMode::Normal;
            state.reset_input();
            commit_input(state, mode, &input)
        }
        KeyCode::Backspace => {
            state.delete_char();
            live_update(state);
            None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            None
        }
        KeyCode::Char(c) => {
            state.enter_char(c);
            live_update(state);
            None
        }
        _ => None,
    }
}

/// Player search filters while typing.
fn live_update(state: &mut AppState) {
    if state.mode == InputMode::SearchingPlayer {
        state.player_query = state.input_buffer.clone();
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

fn commit_input(state: &mut AppState, mode: InputMode, input: &str) -> Option<Action> {
    match mode {
        InputMode::Normal => None,
        InputMode::ImportPath => {
            if input.is_empty() {
                return None;
            }
            state.loading = true;
            state.message = format!("Importing {}...", input);
            Some(Action::Import(PathBuf::from(input)))
        }
        InputMode::GoTo => Some(Action::Navigate(Page::from_route(input))),
        InputMode::SearchingPlayer => {
            state.player_query = input.to_string();
            None
        }
        InputMode::EditingWeeklyStart => {
            if input.is_empty() {
                state.weekly_start = None;
            } else if let Some(date) = parse_date(input) {
                state.weekly_start = Some(date);
            } else {
                state.message = "Invalid date, use YYYY-MM-DD".to_string();
            }
            None
        }
        InputMode::EditingSeriesName => {
            if let Some((course_id, index)) = selected_series(state)
                && !input.is_empty()
            {
                edit_series(state, &course_id, index, |s| s.name = input.to_string());
            }
            None
        }
        InputMode::EditingSeriesDue => {
            let due = parse_date(input).and_then(|d| end_of_day(d, &Local));
            match (selected_series(state), due) {
                (Some((course_id, index)), Some(due)) => {
                    edit_series(state, &course_id, index, |s| s.due = due);
                }
                _ => state.message = "Invalid date, use YYYY-MM-DD".to_string(),
            }
            None
        }
    }
}

fn handle_modal(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => state.modal = None,
        KeyCode::Char(' ') | KeyCode::Enter => {
            let result = match state.modal.clone() {
                Some(Modal::Lecture { course_id, index }) => {
                    let start = state
                        .store
                        .get(&course_id)
                        .and_then(|c| c.lectures.get(index))
                        .map(|l| l.start);
                    match start {
                        Some(start) => state.store.toggle_lecture(&course_id, start),
                        None => Ok(()),
                    }
                }
                Some(Modal::Series { course_id, index }) => {
                    state.store.toggle_series_done(&course_id, index).map(|_| ())
                }
                None => Ok(()),
            };
            state.report(result, "Saved");
        }
        _ => {}
    }
}

fn handle_home(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    let lessons = <materials::Lesson as strum::IntoEnumIterator>::iter().count();
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => step_selection(&mut state.lesson_state, lessons, 1),
        KeyCode::Up | KeyCode::Char('k') => step_selection(&mut state.lesson_state, lessons, -1),
        KeyCode::Enter => {
            return state
                .selected_lesson()
                .map(|l| Action::Navigate(Page::Lesson(l)));
        }
        _ => {}
    }
    None
}

fn handle_lesson(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    let Page::Lesson(lesson) = state.page else {
        return None;
    };
    let info = materials::lesson_info(lesson);
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            step_selection(&mut state.week_state, info.weeks.len(), 1)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            step_selection(&mut state.week_state, info.weeks.len(), -1)
        }
        KeyCode::Enter => {
            return state
                .week_state
                .selected()
                .and_then(|i| info.weeks.get(i))
                .and_then(|w| w.extra.as_ref())
                .map(|(_, page)| Action::Navigate(*page));
        }
        KeyCode::Esc | KeyCode::Backspace => return Some(Action::Navigate(Page::Home)),
        _ => {}
    }
    None
}

fn handle_calendar(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    if key.code == KeyCode::Char('i') {
        state.start_input(InputMode::ImportPath, "");
        return None;
    }

    match state.calendar_focus {
        CalendarFocus::Courses => {
            let len = state.store.courses().len();
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => step_selection(&mut state.course_state, len, 1),
                KeyCode::Up | KeyCode::Char('k') => step_selection(&mut state.course_state, len, -1),
                KeyCode::Enter => state.toggle_expanded(),
                KeyCode::Right | KeyCode::Char('l') => state.calendar_focus = CalendarFocus::Agenda,
                _ => {}
            }
        }
        CalendarFocus::Agenda => {
            let len = state.entries.len();
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => step_selection(&mut state.agenda_state, len, 1),
                KeyCode::Up | KeyCode::Char('k') => step_selection(&mut state.agenda_state, len, -1),
                KeyCode::Enter => state.open_selected_entry(),
                KeyCode::Left | KeyCode::Char('h') => {
                    state.calendar_focus = if state.expanded_course.is_some() {
                        CalendarFocus::Settings
                    } else {
                        CalendarFocus::Courses
                    }
                }
                _ => {}
            }
        }
        CalendarFocus::Settings => handle_settings(key, state),
    }
    None
}

fn handle_settings(key: KeyEvent, state: &mut AppState) {
    let len = state.current_settings_rows().len();
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => step_selection(&mut state.settings_state, len, 1),
        KeyCode::Up | KeyCode::Char('k') => step_selection(&mut state.settings_state, len, -1),
        KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
            state.expanded_course = None;
            state.calendar_focus = CalendarFocus::Courses;
        }
        KeyCode::Right | KeyCode::Char('l') => state.calendar_focus = CalendarFocus::Agenda,
        KeyCode::Enter | KeyCode::Char(' ') => activate_settings_row(state),
        KeyCode::Char('e') => {
            if let Some((course_id, index)) = selected_series(state)
                && let Some(name) = state
                    .store
                    .get(&course_id)
                    .and_then(|c| c.series.get(index))
                    .map(|s| s.name.clone())
            {
                state.start_input(InputMode::EditingSeriesName, &name);
            }
        }
        KeyCode::Char('D') => {
            if let Some((course_id, index)) = selected_series(state)
                && let Some(day) = state
                    .store
                    .get(&course_id)
                    .and_then(|c| c.series.get(index))
                    .map(|s| s.due_date_local())
            {
                state.start_input(InputMode::EditingSeriesDue, &day.format("%Y-%m-%d").to_string());
            }
        }
        KeyCode::Char('o') => {
            if let Some((course_id, index)) = selected_series(state) {
                edit_series(state, &course_id, index, |s| s.obligatory = !s.obligatory);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some((course_id, index)) = selected_series(state) {
                let result = state.store.delete_series(&course_id, index).map(|_| ());
                state.report(result, "Series deleted");
            }
        }
        _ => {}
    }
}

fn activate_settings_row(state: &mut AppState) {
    let Some(course_id) = state.expanded_course.clone() else {
        return;
    };
    let Some(row) = state.selected_settings_row() else {
        return;
    };

    match row {
        SettingsRow::Type(tag) => {
            let shown = state
                .store
                .get(&course_id)
                .is_some_and(|c| c.type_display_status(&tag));
            let result = state
                .store
                .set_type_display(&course_id, &tag, !shown)
                .map(|_| ());
            let msg = format!("{} lectures {}", tag, if shown { "hidden" } else { "shown" });
            state.report(result, &msg);
        }
        SettingsRow::WeeklyStart => {
            let current = state
                .weekly_start
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            state.start_input(InputMode::EditingWeeklyStart, &current);
        }
        SettingsRow::Obligatory => state.obligatory = !state.obligatory,
        SettingsRow::Generate => {
            let Some(start) = state.weekly_start else {
                state.message = "Pick a start date first".to_string();
                return;
            };
            match state
                .store
                .generate_weekly(&course_id, start, state.obligatory, &Local)
            {
                Ok(n) => state.report(Ok(()), &format!("Generated {} series", n)),
                Err(e) => state.report(Err(e), ""),
            }
        }
        SettingsRow::AddSeries => {
            let result = state.store.add_manual_series(&course_id, Utc::now()).map(|_| ());
            state.report(result, "Series added");
        }
        SettingsRow::ClearSeries => {
            let result = state.store.clear_series(&course_id).map(|_| ());
            state.weekly_start = None;
            state.report(result, "Series cleared");
        }
        SettingsRow::Series(index) => {
            let result = state.store.toggle_series_done(&course_id, index).map(|_| ());
            state.report(result, "Saved");
        }
    }
}

fn selected_series(state: &AppState) -> Option<(String, usize)> {
    match (state.expanded_course.clone(), state.selected_settings_row()) {
        (Some(id), Some(SettingsRow::Series(index))) => Some((id, index)),
        _ => None,
    }
}

fn edit_series<F>(state: &mut AppState, course_id: &str, index: usize, f: F)
where
    F: FnOnce(&mut crate::model::SeriesItem),
{
    let Some(mut item) = state
        .store
        .get(course_id)
        .and_then(|c| c.series.get(index))
        .cloned()
    else {
        return;
    };
    f(&mut item);
    let result = state.store.update_series(course_id, index, item).map(|_| ());
    state.report(result, "Saved");
}

fn handle_phasors(key: KeyEvent, state: &mut AppState) {
    let count = state.phasor.phasors.len();
    let i = state.phasor_selected;
    match key.code {
        KeyCode::Char(' ') => state.toggle_phasor_running(),
        KeyCode::Char('s') => state.phasor.toggle_sum(),
        KeyCode::Down | KeyCode::Char('j') if count > 0 => {
            state.phasor_selected = (i + 1) % count;
        }
        KeyCode::Up | KeyCode::Char('k') if count > 0 => {
            state.phasor_selected = (i + count - 1) % count;
        }
        KeyCode::Char('v') => state.phasor.toggle_visibility(i),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            if let Some(a) = state.phasor.phasors.get(i).map(|p| p.amplitude) {
                state.phasor.set_amplitude(i, a + AMPLITUDE_STEP);
            }
        }
        KeyCode::Char('-') => {
            if let Some(a) = state.phasor.phasors.get(i).map(|p| p.amplitude) {
                state.phasor.set_amplitude(i, a - AMPLITUDE_STEP);
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if let Some(d) = state.phasor.phasors.get(i).map(|p| p.phase_degrees()) {
                state.phasor.set_phase_degrees(i, d + PHASE_STEP_DEG);
            }
        }
        KeyCode::Left | KeyCode::Char('h') => {
            if let Some(d) = state.phasor.phasors.get(i).map(|p| p.phase_degrees()) {
                state.phasor.set_phase_degrees(i, d - PHASE_STEP_DEG);
            }
        }
        KeyCode::Char(']') => state.phasor.step_frequency(1),
        KeyCode::Char('[') => state.phasor.step_frequency(-1),
        _ => {}
    }
}

fn handle_leaderboard(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('/') => {
            let query = state.player_query.clone();
            state.start_input(InputMode::SearchingPlayer, &query);
        }
        KeyCode::Esc => state.player_query.clear(),
        _ => {}
    }
}

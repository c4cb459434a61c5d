// File: ./src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod handlers;
pub mod import;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::context::AppContext;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc;

pub async fn run(ctx: Arc<dyn AppContext>, config: Config) -> Result<()> {
    // --- 1. STATE INIT ---
    // Loaded before touching the terminal so store errors print normally.
    let mut app_state = AppState::new(ctx, config)?;
    app_state.sync_ticker();

    // --- 2. TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, mut event_rx) = mpsc::channel(10);

    // --- 3. UI LOOP ---
    loop {
        terminal.draw(|f| draw(f, &mut app_state))?;

        // A. Background results
        while let Ok(event) = event_rx.try_recv() {
            handlers::handle_app_event(&mut app_state, event);
        }

        // B. Animation frames
        if let Some(tick) = app_state.ticker.as_mut().and_then(|t| t.try_latest()) {
            app_state.on_tick(tick.0);
        }

        // C. Input Events
        let timeout = if app_state.ticker.is_some() {
            Duration::from_millis(10)
        } else {
            Duration::from_millis(50)
        };
        if crossterm::event::poll(timeout)? {
            let event = event::read()?;
            let action = match event {
                Event::Mouse(mouse) => {
                    let code = match mouse.kind {
                        MouseEventKind::ScrollDown => Some(KeyCode::Down),
                        MouseEventKind::ScrollUp => Some(KeyCode::Up),
                        _ => None,
                    };
                    code.and_then(|c| {
                        handlers::handle_key_event(KeyEvent::new(c, KeyModifiers::NONE), &mut app_state)
                    })
                }
                Event::Key(key) => {
                    // Filter out KeyRelease events to prevent double input on Windows
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }
                    handlers::handle_key_event(key, &mut app_state)
                }
                _ => None,
            };

            match action {
                Some(Action::Quit) => break,
                Some(Action::Navigate(page)) => app_state.navigate(page),
                Some(Action::Import(path)) => {
                    import::spawn_import(path, event_tx.clone());
                }
                None => {}
            }
        }
    }

    // --- 4. CLEANUP ---
    app_state.ticker = None;
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

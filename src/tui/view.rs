// File: src/tui/view.rs
use crate::color_utils;
use crate::leaderboard;
use crate::materials::{self, Page};
use crate::model::display::{EntryKind, group_by_day};
use crate::phasor::{MAX_AMPLITUDE, VectorState, WAVEFORM_SPAN};
use crate::tui::state::{AppState, CalendarFocus, InputMode, SettingsRow};
use chrono::Local;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, List, ListItem, Paragraph, Row, Table, Tabs, Wrap,
        canvas::{Canvas, Circle, Line as CanvasLine, Points},
    },
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let footer_height = if state.show_full_help {
        Constraint::Length(help_lines().len() as u16 + 2)
    } else {
        Constraint::Length(3)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), footer_height])
        .split(f.area());

    draw_tabs(f, state, v_chunks[0]);

    match state.page {
        Page::Home => draw_home(f, state, v_chunks[1]),
        Page::Lesson(_) => draw_lesson(f, state, v_chunks[1]),
        Page::Calendar => draw_calendar(f, state, v_chunks[1]),
        Page::Phasors => draw_phasors(f, state, v_chunks[1]),
        Page::Leaderboard => draw_leaderboard(f, state, v_chunks[1]),
        Page::NotFound => draw_not_found(f, v_chunks[1]),
    }

    draw_footer(f, state, v_chunks[2]);

    if state.modal.is_some() {
        draw_modal(f, state);
    }
}

fn draw_tabs(f: &mut Frame, state: &AppState, area: Rect) {
    let pages = Page::navigable();
    let titles: Vec<Line> = pages.iter().map(|p| Line::from(p.title())).collect();
    let selected = pages.iter().position(|p| *p == state.page);
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", materials::SITE_TITLE)),
        )
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

// --- HOME ---

fn draw_home(f: &mut Frame, state: &mut AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
        ])
        .split(area);

    draw_epicycle(f, state, chunks[0]);

    let welcome = Paragraph::new(materials::WELCOME_TEXT)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(welcome, chunks[1]);

    use strum::IntoEnumIterator;
    let items: Vec<ListItem> = materials::Lesson::iter()
        .map(|l| ListItem::new(format!("  {}  ({})", l, l.route())))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Courses "))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));
    f.render_stateful_widget(list, chunks[2], &mut state.lesson_state);

    let contact = Paragraph::new(vec![
        Line::from(materials::CONTACT_TEXT),
        Line::from(Span::styled(
            materials::CONTACT_EMAIL,
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(contact, chunks[3]);
}

fn draw_epicycle(f: &mut Frame, state: &AppState, area: Rect) {
    let (min, max) = state.epicycle_extent;
    let pad_x = (max.re - min.re).abs() * 0.1 + 1.0;
    let pad_y = (max.im - min.im).abs() * 0.1 + 1.0;
    let joints = state.epicycle.chain(1.0);
    let trace: Vec<(f64, f64)> = state.epicycle.trace().map(|p| (p.re, -p.im)).collect();

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL))
        .marker(Marker::Braille)
        .x_bounds([min.re - pad_x, max.re + pad_x])
        // The signature is drawn with y pointing down.
        .y_bounds([-max.im - pad_y, -min.im + pad_y])
        .paint(move |ctx| {
            for joint in &joints {
                if joint.radius > 0.5 {
                    ctx.draw(&Circle {
                        x: joint.center.re,
                        y: -joint.center.im,
                        radius: joint.radius,
                        color: Color::DarkGray,
                    });
                }
                ctx.draw(&CanvasLine {
                    x1: joint.center.re,
                    y1: -joint.center.im,
                    x2: joint.tip.re,
                    y2: -joint.tip.im,
                    color: Color::Gray,
                });
            }
            ctx.draw(&Points {
                coords: &trace,
                color: Color::Rgb(255, 27, 27),
            });
        });
    f.render_widget(canvas, area);
}

// --- LESSON PAGES ---

fn draw_lesson(f: &mut Frame, state: &mut AppState, area: Rect) {
    let Page::Lesson(lesson) = state.page else {
        return;
    };
    let info = materials::lesson_info(lesson);

    let mut header = Vec::new();
    for line in [&info.location, &info.time].into_iter().flatten() {
        header.push(Line::from(line.as_str()));
    }
    if let Some(link) = &info.share_link {
        header.push(Line::from(vec![
            Span::styled(
                format!("{}: ", link.label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(link.href.clone(), Style::default().fg(Color::LightBlue)),
        ]));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header.len() as u16 + 2), Constraint::Min(0)])
        .split(area);

    f.render_widget(
        Paragraph::new(header)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(format!(" {} ", lesson))),
        chunks[0],
    );

    if info.weeks.is_empty() {
        f.render_widget(
            Paragraph::new("No materials yet.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );
        return;
    }

    let prefix = state.config.path_prefix.clone();
    let items: Vec<ListItem> = info
        .weeks
        .iter()
        .map(|week| {
            let mut lines = vec![Line::from(Span::styled(
                week.week.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            for link in week.links(&prefix) {
                lines.push(Line::from(vec![
                    Span::raw(format!("  {}: ", link.label)),
                    Span::styled(link.href, Style::default().fg(Color::LightBlue)),
                ]));
            }
            if let Some((label, _)) = &week.extra {
                lines.push(Line::from(Span::styled(
                    format!("  » {} (Enter)", label),
                    Style::default().fg(Color::Magenta),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Material "))
        .highlight_style(Style::default().bg(Color::DarkGray));
    f.render_stateful_widget(list, chunks[1], &mut state.week_state);
}

// --- CALENDAR ---

fn focused_block(title: String, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(style)
}

fn draw_calendar(f: &mut Frame, state: &mut AppState, area: Rect) {
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(area);

    let left = if state.expanded_course.is_some() {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(h_chunks[0])
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(100)])
            .split(h_chunks[0])
    };

    // Courses
    let course_items: Vec<ListItem> = state
        .store
        .courses()
        .iter()
        .map(|c| {
            let (r, g, b) = color_utils::generate_color_u8(&c.id);
            let (done, total) = c.progress();
            let marker = if state.expanded_course.as_deref() == Some(c.id.as_str()) {
                "▾"
            } else {
                "▸"
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", marker)),
                Span::styled(c.id.clone(), Style::default().fg(Color::Rgb(r, g, b))),
                Span::styled(
                    format!("  {}/{}", done, total),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    let courses_title = if state.store.is_empty() {
        " Lectures Overview (i: import) ".to_string()
    } else {
        " Lectures Overview ".to_string()
    };
    let courses = List::new(course_items)
        .block(focused_block(
            courses_title,
            state.calendar_focus == CalendarFocus::Courses,
        ))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));
    f.render_stateful_widget(courses, left[0], &mut state.course_state);

    if state.expanded_course.is_some() && left.len() > 1 {
        draw_settings(f, state, left[1]);
    }

    // Agenda
    let mut items = Vec::new();
    for (day, entries) in group_by_day(&state.entries) {
        for (n, entry) in entries.iter().enumerate() {
            let day_label = if n == 0 {
                day.format("%a %d.%m.%Y").to_string()
            } else {
                String::new()
            };
            let time = if entry.all_day {
                "all day    ".to_string()
            } else {
                format!(
                    "{}-{}",
                    entry.start.with_timezone(&Local).format("%H:%M"),
                    entry.end.with_timezone(&Local).format("%H:%M")
                )
            };
            let (r, g, b) = color_utils::tone_rgb(entry.tone());
            let kind = match entry.kind {
                EntryKind::Lecture => "",
                EntryKind::Series => " ✎",
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(format!("{:<15}", day_label), Style::default().fg(Color::Cyan)),
                Span::raw(format!("{} ", time)),
                Span::styled(
                    format!(" {}{} ", entry.title, kind),
                    Style::default().bg(Color::Rgb(r, g, b)).fg(
                        if color_utils::is_dark(r, g, b) {
                            Color::White
                        } else {
                            Color::Black
                        },
                    ),
                ),
            ])));
        }
    }
    let agenda_title = " Your Lesson Calendar ".to_string();
    let agenda = List::new(items)
        .block(focused_block(
            agenda_title,
            state.calendar_focus == CalendarFocus::Agenda,
        ))
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    f.render_stateful_widget(agenda, h_chunks[1], &mut state.agenda_state);
}

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

fn draw_settings(f: &mut Frame, state: &mut AppState, area: Rect) {
    let Some(course) = state.expanded() else {
        return;
    };
    let rows = state.current_settings_rows();

    let mut items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let text = match row {
                SettingsRow::Type(tag) => {
                    format!("{} Show {} lectures", checkbox(course.type_display_status(tag)), tag)
                }
                SettingsRow::WeeklyStart => format!(
                    "Start date: {}",
                    state
                        .weekly_start
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| "not set".to_string())
                ),
                SettingsRow::Obligatory => {
                    format!("{} Set all as obligatory", checkbox(state.obligatory))
                }
                SettingsRow::Generate => "» Generate weekly series".to_string(),
                SettingsRow::AddSeries => "+ Add series".to_string(),
                SettingsRow::ClearSeries => "✕ Clear series".to_string(),
                SettingsRow::Series(i) => match course.series.get(*i) {
                    Some(s) => format!(
                        "{} {}  due {}{}",
                        checkbox(s.is_done),
                        s.name,
                        s.due_date_local().format("%d.%m.%Y"),
                        if s.obligatory { "  (obligatory)" } else { "" }
                    ),
                    None => String::new(),
                },
            };
            ListItem::new(text)
        })
        .collect();

    if course.series.is_empty() {
        items.push(ListItem::new(Span::styled(
            "No series yet.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let title = format!(" {} · Series Tools ({}) ", course.id, course.series_mode);
    let list = List::new(items)
        .block(focused_block(
            title,
            state.calendar_focus == CalendarFocus::Settings,
        ))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));
    f.render_stateful_widget(list, area, &mut state.settings_state);
}

fn draw_modal(f: &mut Frame, state: &AppState) {
    let area = centered_rect(60, 40, f.area());
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let (title, lines) = if let Some((course, lecture)) = state.modal_lecture() {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(lecture.name.clone(), bold)),
            Line::from(format!("Course: {}", course.id)),
            Line::from(format!(
                "{} - {}",
                lecture.start.with_timezone(&Local).format("%a %d.%m.%Y %H:%M"),
                lecture.end.with_timezone(&Local).format("%H:%M")
            )),
        ];
        if let Some(instructor) = &lecture.instructor {
            lines.push(Line::from(format!("Instructor: {}", instructor)));
        }
        if !lecture.types.is_empty() {
            lines.push(Line::from(format!("Type: {}", lecture.types.join(", "))));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(format!("{} Is Done", checkbox(lecture.is_done))));
        (" Lecture ", lines)
    } else if let Some((course, serie)) = state.modal_series() {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(serie.name.clone(), bold)),
            Line::from(format!("Course: {}", course.id)),
            Line::from(format!(
                "Due: {}",
                serie.due.with_timezone(&Local).format("%a %d.%m.%Y %H:%M")
            )),
        ];
        if serie.obligatory {
            lines.push(Line::from(Span::styled(
                "This is an obligatory assignment!",
                Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(format!("{} Is Done", checkbox(serie.is_done))));
        (" Series ", lines)
    } else {
        return;
    };

    let mut lines = lines;
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" [Space] ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw("Toggle done    "),
        Span::styled(" [Esc] ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw("Close"),
    ]));

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightBlue));
    let p = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(p, area);
}

// --- PHASORS ---

fn hex_color(hex: &str) -> Color {
    color_utils::parse_hex_to_u8(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}

fn draw_phasors(f: &mut Frame, state: &AppState, area: Rect) {
    let frame = state.phasor.snapshot();
    let mut shown: Vec<&VectorState> = frame.vectors.iter().collect();
    if let Some(sum) = &frame.sum {
        shown.push(sum);
    }

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(h_chunks[0]);

    // Rotating phasors. Amplitudes are in volts; the circle is 100 V.
    let limit = MAX_AMPLITUDE * 1.6;
    let diagram = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(" Electrical Circuit Phasors "))
        .marker(Marker::Braille)
        .x_bounds([-limit, limit])
        .y_bounds([-MAX_AMPLITUDE * 1.2, MAX_AMPLITUDE * 1.2])
        .paint(|ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: MAX_AMPLITUDE,
                color: Color::DarkGray,
            });
            ctx.draw(&CanvasLine {
                x1: -limit,
                y1: 0.0,
                x2: limit,
                y2: 0.0,
                color: Color::DarkGray,
            });
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: -MAX_AMPLITUDE * 1.2,
                x2: 0.0,
                y2: MAX_AMPLITUDE * 1.2,
                color: Color::DarkGray,
            });
            ctx.print(MAX_AMPLITUDE + 4.0, -8.0, "100V");
            for v in &shown {
                let color = hex_color(&v.color);
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: v.tip.0,
                    y2: v.tip.1,
                    color,
                });
                // Projection onto the real axis.
                let dots: Vec<(f64, f64)> = (0..8).map(|i| (v.projection, -2.0 * i as f64)).collect();
                ctx.draw(&Points {
                    coords: &dots,
                    color,
                });
                ctx.print(
                    v.tip.0 * 1.1,
                    v.tip.1 * 1.1,
                    Line::styled(v.name.clone(), Style::default().fg(color)),
                );
            }
        });
    f.render_widget(diagram, left[0]);

    // Time-domain traces.
    let graph = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(" Time Domain Representation "))
        .marker(Marker::Braille)
        .x_bounds([0.0, WAVEFORM_SPAN])
        .y_bounds([-MAX_AMPLITUDE * 1.1, MAX_AMPLITUDE * 1.1])
        .paint(|ctx| {
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: 0.0,
                x2: WAVEFORM_SPAN,
                y2: 0.0,
                color: Color::DarkGray,
            });
            for (i, label) in ["0", "π/2", "π", "3π/2", "2π", "5π/2"].iter().enumerate() {
                ctx.print(
                    i as f64 * std::f64::consts::FRAC_PI_2,
                    -MAX_AMPLITUDE,
                    *label,
                );
            }
            for v in &shown {
                let color = hex_color(&v.color);
                for pair in v.waveform.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: pair[0].0,
                        y1: pair[0].1,
                        x2: pair[1].0,
                        y2: pair[1].1,
                        color,
                    });
                }
                ctx.draw(&Points {
                    coords: &[v.time_point],
                    color,
                });
                ctx.draw(&CanvasLine {
                    x1: v.time_point.0,
                    y1: v.time_point.1,
                    x2: v.time_point.0,
                    y2: -MAX_AMPLITUDE,
                    color,
                });
            }
        });
    f.render_widget(graph, left[1]);

    // Controls
    let run_label = if state.phasor.is_running() { "Running" } else { "Paused" };
    let mut lines = vec![
        Line::from(Span::styled(
            "Simulation Controls",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("State: {}  (Space)", run_label)),
        Line::from(format!("Frequency: {:.1} Hz  ([ / ])", state.phasor.frequency())),
        Line::from(format!("Time: {:.2} s", state.phasor.time())),
        Line::from(""),
    ];
    for (i, p) in state.phasor.phasors.iter().enumerate() {
        let selected = i == state.phasor_selected;
        let style = if selected {
            Style::default().bg(Color::DarkGray).fg(hex_color(&p.color))
        } else {
            Style::default().fg(hex_color(&p.color))
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{} {}  {:>3.0} V  {:>4.0}°",
                checkbox(p.show),
                p.name,
                p.amplitude,
                p.phase_degrees()
            ),
            style,
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("{} Show Sum  (s)", checkbox(state.phasor.show_sum)),
        Style::default().fg(hex_color(crate::phasor::SUM_COLOR)),
    )));
    lines.push(Line::from(""));
    for v in &shown {
        lines.push(Line::from(Span::styled(
            v.label.clone(),
            Style::default().fg(hex_color(&v.color)),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("j/k select  v show/hide"));
    lines.push(Line::from("+/- amplitude  h/l phase"));

    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        h_chunks[1],
    );
}

// --- LEADERBOARD ---

fn draw_leaderboard(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let query = if state.mode == InputMode::SearchingPlayer {
        state.input_buffer.as_str()
    } else {
        state.player_query.as_str()
    };
    let search = Paragraph::new(if query.is_empty() {
        Span::styled("Enter your name... (/)", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(query.to_string())
    })
    .block(Block::default().borders(Borders::ALL).title(" Leaderboard "));
    f.render_widget(search, chunks[0]);

    let info = match state.found_player() {
        Some(p) => vec![
            Line::from(vec![
                Span::raw("Hello, "),
                Span::styled(p.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("!"),
            ]),
            Line::from(format!("Your Rank: {}", p.rank)),
            Line::from(format!("Total Matches: {}", p.total_matches)),
            Line::from(format!("Total Score: {}", p.total_score)),
        ],
        None if !state.player_query.trim().is_empty() => vec![Line::from(Span::styled(
            leaderboard::NOT_FOUND,
            Style::default().fg(Color::LightRed),
        ))],
        None => Vec::new(),
    };
    f.render_widget(Paragraph::new(info), chunks[1]);

    let header = Row::new(vec!["Ranking", "Player Name", "Matches", "Scored In", "Total Points"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = state
        .standings
        .iter()
        .map(|s| {
            Row::new(vec![
                s.rank.to_string(),
                s.name.clone(),
                s.total_matches.to_string(),
                s.scoring_matches.to_string(),
                s.total_score.to_string(),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(12),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(table, chunks[2]);
}

// --- 404 ---

fn draw_not_found(f: &mut Frame, area: Rect) {
    let p = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            materials::NOT_FOUND_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} (Enter)", materials::NOT_FOUND_BACK),
            Style::default().fg(Color::LightBlue),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(p, area);
}

// --- FOOTER ---

fn help_lines() -> Vec<Line<'static>> {
    let heading = |s: &'static str, c: Color| {
        Span::styled(s, Style::default().fg(c).add_modifier(Modifier::BOLD))
    };
    vec![
        Line::from(vec![
            heading(" GLOBAL ", Color::Cyan),
            Span::raw(" Tab/Shift+Tab:Page  g:Go to route  ?:Toggle Help  q:Quit"),
        ]),
        Line::from(vec![
            heading(" CALENDAR ", Color::Green),
            Span::raw(" i:Import ICS  h/l:Focus  Enter:Open/Expand  Space:Toggle"),
        ]),
        Line::from(vec![
            heading(" SERIES ", Color::Magenta),
            Span::raw(" e:Rename  D:Due date  o:Obligatory  d:Delete"),
        ]),
        Line::from(vec![
            heading(" PHASORS ", Color::Yellow),
            Span::raw(" Space:Run/Pause  s:Sum  v:Show  +/-:Amplitude  h/l:Phase  [/]:Frequency"),
        ]),
    ]
}

fn draw_footer(f: &mut Frame, state: &AppState, area: Rect) {
    f.render_widget(Clear, area);

    if state.mode != InputMode::Normal && state.mode != InputMode::SearchingPlayer {
        let prompt = match state.mode {
            InputMode::ImportPath => " Import ICS file ",
            InputMode::GoTo => " Go to ",
            InputMode::EditingWeeklyStart => " Weekly start (YYYY-MM-DD) ",
            InputMode::EditingSeriesName => " Series name ",
            InputMode::EditingSeriesDue => " Due date (YYYY-MM-DD) ",
            _ => " Input ",
        };
        let input = Paragraph::new(state.input_buffer.as_str())
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title(prompt));
        f.render_widget(input, area);
        let cursor_x = area.x + 1 + state.cursor_position as u16;
        f.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
        return;
    }

    if state.show_full_help {
        let help = Paragraph::new(help_lines())
            .block(Block::default().borders(Borders::ALL).title(" Help "));
        f.render_widget(help, area);
        return;
    }

    let status_style = if state.message.starts_with("Error") {
        Style::default().fg(Color::LightRed)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let status_text = if state.loading {
        "Loading...".to_string()
    } else {
        state.message.clone()
    };
    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(Block::default().borders(Borders::ALL).title(" Status "));

    let hint = match state.page {
        Page::Home => "j/k:Select  Enter:Open course",
        Page::Lesson(_) => "j/k:Week  Enter:Open link  Esc:Home",
        Page::Calendar => "i:Import  Enter:Open  h/l:Focus  ?:Help",
        Page::Phasors => "Space:Run/Pause  s:Sum  ?:Help",
        Page::Leaderboard => "/:Search  Esc:Clear",
        Page::NotFound => "Enter:Home",
    };
    let help = Paragraph::new(hint)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL).title(" Actions "));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    f.render_widget(status, chunks[0]);
    f.render_widget(help, chunks[1]);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

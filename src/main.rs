mod app;
mod calendar;
mod components;
mod config;
mod error;
mod event;
mod logging;
mod theme;
mod tui;

use std::time::Duration;

use app::{App, InputMode};
use chrono::Local;
use color_eyre::Result;
use components::category_form::CategoryField;
use components::event_form::EventField;
use config::Config;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;
use tracing::{info, warn};

fn main() -> Result<()> {
    color_eyre::install()?;
    let _log_guard = match logging::init() {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("logging disabled: {err}");
            None
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            warn!(%err, "falling back to default config");
            eprintln!("{err}; using defaults");
            Config::default()
        }
    };
    let theme = config.theme.to_theme();
    info!(
        path = ?config::config_path(),
        theme = %theme.name,
        seeded_categories = config.categories.len(),
        "starting"
    );
    theme::install(theme);

    let mut app = App::new(&config, Local::now().date_naive());

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| draw(frame, app))?;

        let Some(key) = event::next_key_press(Duration::from_millis(250))? else {
            continue;
        };

        // A notice blocks everything until dismissed
        if app.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                app.dismiss_notice();
            }
            continue;
        }

        if app.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                app.show_help = false;
            }
            continue;
        }

        app.status_message = None;

        match app.input_mode {
            InputMode::Normal => handle_normal_input(app, key.code, key.modifiers),
            InputMode::Filter => handle_filter_input(app, key.code),
            InputMode::EventForm => handle_event_form_input(app, key.code),
            InputMode::CategoryForm => handle_category_form_input(app, key.code),
        }
    }

    Ok(())
}

fn handle_normal_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.running = false;
        }
        (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.prev_day(),
        (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.next_day(),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.prev_week(),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.next_week(),
        (KeyCode::Char('['), _) => app.prev_month(),
        (KeyCode::Char(']'), _) => app.next_month(),
        (KeyCode::Char('t'), _) => app.go_to_today(),
        (KeyCode::Char('n'), _) => app.open_event_form(),
        (KeyCode::Char('c'), _) => app.open_category_form(),
        (KeyCode::Char('f'), _) => app.focus_filter(),
        (KeyCode::Char('x'), _) => app.clear_filter(),
        (KeyCode::Char('?'), _) => app.show_help = true,
        _ => {}
    }
}

fn handle_filter_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('f') => app.close_popup(),
        KeyCode::Up | KeyCode::Char('k') => app.filter_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.filter_cursor_down(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_category_at_cursor(),
        KeyCode::Char('x') => app.clear_filter(),
        _ => {}
    }
}

fn handle_event_form_input(app: &mut App, code: KeyCode) {
    let on_category = app.event_form.active_field == EventField::Category;
    match code {
        KeyCode::Esc => app.close_popup(),
        KeyCode::Enter => app.add_event(),
        KeyCode::Tab | KeyCode::BackTab => {
            app.event_form.active_field = app.event_form.active_field.toggle();
        }
        KeyCode::Backspace => app.event_form.backspace(),
        KeyCode::Char(' ') | KeyCode::Right if on_category => {
            app.event_form.next_category(&app.categories);
        }
        KeyCode::Left if on_category => app.event_form.prev_category(&app.categories),
        KeyCode::Char(c) => app.event_form.input_char(c),
        _ => {}
    }
}

fn handle_category_form_input(app: &mut App, code: KeyCode) {
    let on_color = app.category_form.active_field == CategoryField::Color;
    match code {
        KeyCode::Esc => app.close_popup(),
        KeyCode::Enter => app.add_category(),
        KeyCode::Tab | KeyCode::BackTab => {
            app.category_form.active_field = app.category_form.active_field.toggle();
        }
        KeyCode::Backspace => app.category_form.backspace(),
        KeyCode::Char(' ') if on_color => app.category_form.cycle_color(),
        KeyCode::Char(c) => app.category_form.input_char(c),
        _ => {}
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

    if area.width < 60 {
        render_narrow(frame, layout[0], app);
    } else {
        render_wide(frame, layout[0], app);
    }

    let date_label = app.format_date(app.selected_date);
    match app.input_mode {
        InputMode::EventForm => components::EventForm::render(
            frame,
            area,
            &app.event_form,
            &app.categories,
            &date_label,
        ),
        InputMode::CategoryForm => {
            components::CategoryForm::render(frame, area, &app.category_form)
        }
        InputMode::Normal | InputMode::Filter => {}
    }

    if let Some(ref notice) = app.notice {
        components::NoticePopup::render(frame, area, notice);
    }

    if app.show_help {
        components::Help::render(frame, area);
    }

    components::StatusBar::render(frame, layout[1], app);
}

fn render_wide(frame: &mut Frame, area: Rect, app: &App) {
    let month_w = if area.width >= 100 { 44 } else { 30 };
    let columns = Layout::horizontal([Constraint::Length(month_w), Constraint::Min(20)]).split(area);
    let left = Layout::vertical([
        Constraint::Length(components::MonthView::HEIGHT),
        Constraint::Min(3),
    ])
    .split(columns[0]);

    render_month(frame, left[0], app);
    render_filter(frame, left[1], app);
    render_day(frame, columns[1], app);
}

fn render_narrow(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::vertical([
        Constraint::Length(components::MonthView::HEIGHT),
        Constraint::Min(3),
        Constraint::Length(app.categories.len() as u16 + 2),
    ])
    .split(area);

    render_month(frame, rows[0], app);
    render_day(frame, rows[1], app);
    render_filter(frame, rows[2], app);
}

fn render_month(frame: &mut Frame, area: Rect, app: &App) {
    components::MonthView::render(
        frame,
        area,
        app.selected_date,
        app.today,
        app.week_start,
        |date| app.day_markers(date),
    );
}

fn render_day(frame: &mut Frame, area: Rect, app: &App) {
    components::DayView::render(
        frame,
        area,
        &app.format_date(app.selected_date),
        &app.day_list(),
    );
}

fn render_filter(frame: &mut Frame, area: Rect, app: &App) {
    components::CategoryPanel::render(
        frame,
        area,
        &app.categories,
        &app.filter,
        app.filter_cursor,
        app.input_mode == InputMode::Filter,
    );
}

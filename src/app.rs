use std::fmt::Write;

use chrono::{Days, Months, NaiveDate, Weekday};
use ratatui::style::Color;
use tracing::{debug, info, warn};

use crate::calendar::{CategoryFilter, CategoryRegistry, DayEvents, Event, EventStore};
use crate::components::category_form::CategoryFormState;
use crate::components::event_form::EventFormState;
use crate::config::{Config, DEFAULT_DATE_FORMAT};
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Filter,
    EventForm,
    CategoryForm,
}

/// Blocking message shown until the user dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// One row of the day list.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub title: String,
    pub category: String,
    /// `None` when the category is no longer registered.
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DayList {
    NoEvents,
    Entries { entries: Vec<DayEntry>, hidden: usize },
}

pub struct App {
    pub running: bool,
    pub input_mode: InputMode,
    pub selected_date: NaiveDate,
    pub today: NaiveDate,
    pub week_start: Weekday,
    pub date_format: String,
    pub store: EventStore,
    pub categories: CategoryRegistry,
    pub filter: CategoryFilter,
    pub filter_cursor: usize,
    pub event_form: EventFormState,
    pub category_form: CategoryFormState,
    pub notice: Option<Notice>,
    pub status_message: Option<String>,
    pub show_help: bool,
}

impl App {
    pub fn new(config: &Config, today: NaiveDate) -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            selected_date: today,
            today,
            week_start: config.week_start.weekday(),
            date_format: config.date_format.clone(),
            store: EventStore::new(),
            categories: config.category_registry(),
            filter: CategoryFilter::new(),
            filter_cursor: 0,
            event_form: EventFormState::default(),
            category_form: CategoryFormState::default(),
            notice: None,
            status_message: None,
            show_help: false,
        }
    }

    /// Falls back to the default format if the configured one cannot render a date.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            out.clear();
            let _ = write!(out, "{}", date.format(DEFAULT_DATE_FORMAT));
        }
        out
    }

    // ── Date selection ──

    /// Make `date` the current date. Every navigation key ends up here.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn next_day(&mut self) {
        self.select_date(self.selected_date.succ_opt().unwrap_or(self.selected_date));
    }

    pub fn prev_day(&mut self) {
        self.select_date(self.selected_date.pred_opt().unwrap_or(self.selected_date));
    }

    pub fn next_week(&mut self) {
        let date = self
            .selected_date
            .checked_add_days(Days::new(7))
            .unwrap_or(self.selected_date);
        self.select_date(date);
    }

    pub fn prev_week(&mut self) {
        let date = self
            .selected_date
            .checked_sub_days(Days::new(7))
            .unwrap_or(self.selected_date);
        self.select_date(date);
    }

    /// chrono clamps the day to the length of the target month.
    pub fn next_month(&mut self) {
        let date = self
            .selected_date
            .checked_add_months(Months::new(1))
            .unwrap_or(self.selected_date);
        self.select_date(date);
    }

    pub fn prev_month(&mut self) {
        let date = self
            .selected_date
            .checked_sub_months(Months::new(1))
            .unwrap_or(self.selected_date);
        self.select_date(date);
    }

    pub fn go_to_today(&mut self) {
        self.select_date(self.today);
    }

    // ── Events ──

    pub fn open_event_form(&mut self) {
        self.input_mode = InputMode::EventForm;
    }

    /// Add the event from the form buffers to the selected date. On
    /// success the buffers are cleared; on failure nothing changes and
    /// a notice explains why.
    pub fn add_event(&mut self) {
        let result = self.store.add(
            self.selected_date,
            &self.event_form.title,
            self.event_form.category.as_deref(),
            &self.categories,
        )
        .cloned();

        match result {
            Ok(event) => {
                debug!(
                    date = %self.selected_date,
                    title = %event.title,
                    category = %event.category,
                    total = self.store.total_events(),
                    "event added"
                );
                self.status_message = Some(format!(
                    "Added \"{}\" on {}",
                    event.title,
                    self.format_date(self.selected_date)
                ));
                self.event_form.clear();
                self.input_mode = InputMode::Normal;
            }
            Err(err) => self.reject("Cannot add event", err),
        }
    }

    /// Marker colors for a grid day under the current filter.
    pub fn day_markers(&self, date: NaiveDate) -> Vec<Color> {
        self.store.markers_on(date, &self.filter, &self.categories)
    }

    /// Events of the selected date that pass the filter, with colors resolved.
    pub fn day_list(&self) -> DayList {
        match self.store.day_events(self.selected_date, &self.filter) {
            DayEvents::Empty => DayList::NoEvents,
            DayEvents::Listed { visible, hidden } => DayList::Entries {
                entries: visible.into_iter().map(|e| self.entry(e)).collect(),
                hidden,
            },
        }
    }

    fn entry(&self, event: &Event) -> DayEntry {
        DayEntry {
            title: event.title.clone(),
            category: event.category.clone(),
            color: self.categories.color_of(&event.category),
        }
    }

    // ── Categories ──

    pub fn open_category_form(&mut self) {
        self.input_mode = InputMode::CategoryForm;
    }

    pub fn add_category(&mut self) {
        let result = self
            .categories
            .add(&self.category_form.name, &self.category_form.color)
            .cloned();

        match result {
            Ok(category) => {
                info!(name = %category.name, color = %category.color, "category added");
                self.status_message = Some(format!("Category \"{}\" added", category.name));
                self.category_form.reset();
                self.input_mode = InputMode::Normal;
            }
            Err(err) => self.reject("Category already exists or the name is empty", err),
        }
    }

    // ── Filter ──

    /// Flip `name` in the filter. Unknown names are accepted and simply
    /// never match an event.
    pub fn toggle_category(&mut self, name: &str) {
        let selected = self.filter.toggle(name);
        debug!(name, selected, "filter toggled");
    }

    pub fn toggle_category_at_cursor(&mut self) {
        if let Some(name) = self
            .categories
            .get_index(self.filter_cursor)
            .map(|c| c.name.clone())
        {
            self.toggle_category(&name);
        }
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.status_message = Some("Showing all categories".to_string());
    }

    pub fn focus_filter(&mut self) {
        self.filter_cursor = self.filter_cursor.min(self.categories.len().saturating_sub(1));
        self.input_mode = InputMode::Filter;
    }

    pub fn filter_cursor_down(&mut self) {
        if self.filter_cursor + 1 < self.categories.len() {
            self.filter_cursor += 1;
        }
    }

    pub fn filter_cursor_up(&mut self) {
        self.filter_cursor = self.filter_cursor.saturating_sub(1);
    }

    // ── Feedback ──

    fn reject(&mut self, title: &str, err: ValidationError) {
        warn!(%err, "input rejected");
        self.notice = Some(Notice {
            title: title.to_string(),
            message: err.to_string(),
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn close_popup(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{popup_area, render_field};
use crate::calendar::CategoryRegistry;
use crate::theme;

pub const NO_CATEGORY_LABEL: &str = "Choose a category";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventField {
    #[default]
    Title,
    Category,
}

impl EventField {
    pub fn toggle(self) -> Self {
        match self {
            EventField::Title => EventField::Category,
            EventField::Category => EventField::Title,
        }
    }
}

/// Input buffers of the new-event popup.
#[derive(Debug, Clone, Default)]
pub struct EventFormState {
    pub title: String,
    pub category: Option<String>,
    pub active_field: EventField,
}

impl EventFormState {
    pub fn input_char(&mut self, c: char) {
        if self.active_field == EventField::Title {
            self.title.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.active_field == EventField::Title {
            self.title.pop();
        }
    }

    /// Step through "no category", then each registered category in order.
    pub fn next_category(&mut self, categories: &CategoryRegistry) {
        let next = match self.selected_position(categories) {
            None => 0,
            Some(idx) => idx + 1,
        };
        self.category = categories.get_index(next).map(|c| c.name.clone());
    }

    pub fn prev_category(&mut self, categories: &CategoryRegistry) {
        let prev = match self.selected_position(categories) {
            None => categories.len().checked_sub(1),
            Some(idx) => idx.checked_sub(1),
        };
        self.category = prev
            .and_then(|idx| categories.get_index(idx))
            .map(|c| c.name.clone());
    }

    fn selected_position(&self, categories: &CategoryRegistry) -> Option<usize> {
        self.category
            .as_deref()
            .and_then(|name| categories.position(name))
    }

    /// Reset after a successful add.
    pub fn clear(&mut self) {
        self.title.clear();
        self.category = None;
        self.active_field = EventField::Title;
    }
}

pub struct EventForm;

impl EventForm {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &EventFormState,
        categories: &CategoryRegistry,
        date_label: &str,
    ) {
        let form_area = popup_area(area, 50, 8);
        frame.render_widget(Clear, form_area);

        let block = Block::default()
            .title(format!(" New Event · {} ", date_label))
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));

        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let rows = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Length(1), // category
            Constraint::Length(1), // spacer
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        render_field(
            frame,
            rows[0],
            "Title:",
            Span::raw(state.title.clone()),
            state.active_field == EventField::Title,
        );

        let category = match state.category.as_deref() {
            Some(name) => {
                let color = categories.color_of(name).unwrap_or(Color::Reset);
                Span::styled(format!("\u{25c0} {} \u{25b6}", name), Style::default().fg(color))
            }
            None => Span::styled(
                format!("\u{25c0} {} \u{25b6}", NO_CATEGORY_LABEL),
                theme::current().dim,
            ),
        };
        render_field(
            frame,
            rows[1],
            "Cat:",
            category,
            state.active_field == EventField::Category,
        );

        let help = Line::from(vec![
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Field ", theme::current().dim),
            Span::styled("Space", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Category ", theme::current().dim),
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Add ", theme::current().dim),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Close", theme::current().dim),
        ]);
        frame.render_widget(Paragraph::new(help), rows[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_cycle_wraps_through_none() {
        let categories = CategoryRegistry::with_defaults();
        let mut form = EventFormState::default();

        form.next_category(&categories);
        assert_eq!(form.category.as_deref(), Some("Работа"));
        for _ in 0..3 {
            form.next_category(&categories);
        }
        assert_eq!(form.category.as_deref(), Some("Учеба"));
        form.next_category(&categories);
        assert_eq!(form.category, None);

        form.prev_category(&categories);
        assert_eq!(form.category.as_deref(), Some("Учеба"));
    }

    #[test]
    fn test_typing_only_reaches_title() {
        let mut form = EventFormState::default();
        form.input_char('S');
        form.input_char('x');
        form.backspace();
        form.active_field = form.active_field.toggle();
        form.input_char('!');
        form.backspace();
        assert_eq!(form.title, "S");
    }

    #[test]
    fn test_clear_resets_buffers() {
        let mut form = EventFormState {
            title: "Standup".to_string(),
            category: Some("Работа".to_string()),
            active_field: EventField::Category,
        };
        form.clear();
        assert!(form.title.is_empty());
        assert_eq!(form.category, None);
        assert_eq!(form.active_field, EventField::Title);
    }
}

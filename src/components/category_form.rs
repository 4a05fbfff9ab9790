use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{popup_area, render_field};
use crate::calendar::category::DEFAULT_COLOR;
use crate::calendar::HexColor;
use crate::theme;

/// Colors offered by Space in the color field.
pub const PALETTE: [&str; 8] = [
    "#000000", "#ff5733", "#33c1ff", "#75ff33", "#ff33a1", "#ffd133", "#8e44ad", "#ffffff",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryField {
    #[default]
    Name,
    Color,
}

impl CategoryField {
    pub fn toggle(self) -> Self {
        match self {
            CategoryField::Name => CategoryField::Color,
            CategoryField::Color => CategoryField::Name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CategoryFormState {
    pub name: String,
    pub color: String,
    pub active_field: CategoryField,
}

impl Default for CategoryFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: DEFAULT_COLOR.to_string(),
            active_field: CategoryField::Name,
        }
    }
}

impl CategoryFormState {
    pub fn input_char(&mut self, c: char) {
        match self.active_field {
            CategoryField::Name => self.name.push(c),
            CategoryField::Color => {
                let is_digit = c.is_ascii_hexdigit() && self.color.len() < 7;
                if self.color.is_empty() && (c == '#' || is_digit) {
                    self.color.push('#');
                }
                if is_digit {
                    self.color.push(c.to_ascii_lowercase());
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.active_field {
            CategoryField::Name => {
                self.name.pop();
            }
            CategoryField::Color => {
                self.color.pop();
            }
        }
    }

    /// Move to the palette entry after the current color.
    pub fn cycle_color(&mut self) {
        let current = PALETTE.iter().position(|c| c.eq_ignore_ascii_case(&self.color));
        let next = current.map_or(0, |idx| (idx + 1) % PALETTE.len());
        self.color = PALETTE[next].to_string();
    }

    /// Clear the name and reset the color after a successful add.
    pub fn reset(&mut self) {
        self.name.clear();
        self.color = DEFAULT_COLOR.to_string();
        self.active_field = CategoryField::Name;
    }
}

pub struct CategoryForm;

impl CategoryForm {
    pub fn render(frame: &mut Frame, area: Rect, state: &CategoryFormState) {
        let form_area = popup_area(area, 46, 8);
        frame.render_widget(Clear, form_area);

        let block = Block::default()
            .title(" New Category ")
            .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));

        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let rows = Layout::vertical([
            Constraint::Length(1), // name
            Constraint::Length(1), // color
            Constraint::Length(1), // spacer
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        render_field(
            frame,
            rows[0],
            "Name:",
            Span::raw(state.name.clone()),
            state.active_field == CategoryField::Name,
        );

        let swatch = match HexColor::parse(&state.color) {
            Ok(color) => Span::styled("  ", Style::default().bg(color.to_color())),
            Err(_) => Span::styled("??", theme::current().notice),
        };
        let color_area = Layout::horizontal([Constraint::Length(3), Constraint::Min(1)]).split(rows[1]);
        render_field(
            frame,
            color_area[1],
            "Color:",
            Span::raw(state.color.clone()),
            state.active_field == CategoryField::Color,
        );
        frame.render_widget(Paragraph::new(Line::from(swatch)), color_area[0]);

        let help = Line::from(vec![
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Field ", theme::current().dim),
            Span::styled("Space", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Palette ", theme::current().dim),
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
    fn test_color_field_accepts_only_hex() {
        let mut form = CategoryFormState {
            active_field: CategoryField::Color,
            ..Default::default()
        };
        form.color.clear();
        for c in "#zAb1C2d3".chars() {
            form.input_char(c);
        }
        assert_eq!(form.color, "#ab1c2d");
    }

    #[test]
    fn test_cycle_color_walks_palette() {
        let mut form = CategoryFormState::default();
        form.cycle_color();
        assert_eq!(form.color, PALETTE[1]);

        form.color = "#123456".to_string();
        form.cycle_color();
        assert_eq!(form.color, PALETTE[0]);

        form.color = PALETTE[PALETTE.len() - 1].to_string();
        form.cycle_color();
        assert_eq!(form.color, PALETTE[0]);
    }

    #[test]
    fn test_reset_restores_default_color() {
        let mut form = CategoryFormState {
            name: "Дом".to_string(),
            color: "#123456".to_string(),
            active_field: CategoryField::Color,
        };
        form.reset();
        assert!(form.name.is_empty());
        assert_eq!(form.color, DEFAULT_COLOR);
        assert_eq!(form.active_field, CategoryField::Name);
    }
}

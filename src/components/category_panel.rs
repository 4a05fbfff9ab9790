use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::calendar::{CategoryFilter, CategoryRegistry};
use crate::theme;

/// Filter checkboxes, one per registered category.
pub struct CategoryPanel;

impl CategoryPanel {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        categories: &CategoryRegistry,
        filter: &CategoryFilter,
        cursor: usize,
        focused: bool,
    ) {
        let t = theme::current();
        let title = if filter.is_empty() {
            " Filter: all ".to_string()
        } else {
            format!(" Filter: {}/{} ", filter.len(), categories.len())
        };

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            t.border
        };

        let block = Block::default()
            .title(title)
            .title_style(t.header)
            .borders(Borders::ALL)
            .border_style(border_style);

        let items: Vec<ListItem> = categories
            .iter()
            .map(|category| {
                let checkbox = if filter.contains(&category.name) {
                    "[x] "
                } else {
                    "[ ] "
                };
                ListItem::new(Line::from(vec![
                    Span::raw(checkbox),
                    Span::styled(category.name.clone(), Style::default().fg(category.color())),
                ]))
            })
            .collect();

        let mut state = ListState::default();
        if focused {
            state.select(Some(cursor));
        }

        let list = List::new(items)
            .block(block)
            .highlight_style(t.highlight.add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, area, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::{buffer_text, draw};

    #[test]
    fn test_checkboxes_reflect_filter() {
        let categories = CategoryRegistry::with_defaults();
        let mut filter = CategoryFilter::new();
        filter.toggle("Спорт");

        let buffer = draw(30, 6, |frame| {
            let area = frame.area();
            CategoryPanel::render(frame, area, &categories, &filter, 0, false);
        });
        let text = buffer_text(&buffer);

        assert!(text.contains("Filter: 1/4"));
        assert!(text.contains("[ ] Работа"));
        assert!(text.contains("[x] Спорт"));
        assert_eq!(buffer[(5, 1)].fg, Color::Rgb(0xff, 0x57, 0x33));
    }
}

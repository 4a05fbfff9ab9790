use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{DayEntry, DayList};
use crate::theme;

pub const NO_EVENTS: &str = "No events this day.";
pub const ALL_HIDDEN: &str = "All events hidden by the filter";

pub struct DayView;

impl DayView {
    pub fn render(frame: &mut Frame, area: Rect, date_label: &str, list: &DayList) {
        let t = theme::current();

        let count_str = match list {
            DayList::Entries { entries, hidden } if *hidden > 0 => {
                format!(" {} shown, {} hidden ", entries.len(), hidden)
            }
            DayList::Entries { entries, .. } => {
                let n = entries.len();
                format!(" {} event{} ", n, if n == 1 { "" } else { "s" })
            }
            DayList::NoEvents => String::new(),
        };

        let block = Block::default()
            .title(format!(" Events on {} ", date_label))
            .title_style(t.header)
            .title_bottom(Line::from(Span::styled(count_str, t.dim)))
            .borders(Borders::ALL)
            .border_style(t.border);

        let entries = match list {
            DayList::NoEvents => {
                let inner = block.inner(area);
                frame.render_widget(block, area);
                frame.render_widget(Paragraph::new(NO_EVENTS).style(t.dim), inner);
                return;
            }
            DayList::Entries { entries, .. } if entries.is_empty() => {
                let inner = block.inner(area);
                frame.render_widget(block, area);
                frame.render_widget(Paragraph::new(ALL_HIDDEN).style(t.dim), inner);
                return;
            }
            DayList::Entries { entries, .. } => entries,
        };

        let items: Vec<ListItem> = entries.iter().map(format_entry).collect();
        frame.render_widget(List::new(items).block(block), area);
    }
}

/// Title and category in the category color, dimmed if the category is gone.
fn format_entry(entry: &DayEntry) -> ListItem<'static> {
    let style = match entry.color {
        Some(color) => Style::default().fg(color),
        None => theme::current().dim,
    };

    ListItem::new(Line::from(vec![
        Span::styled("\u{25a0} ", style),
        Span::styled(entry.title.clone(), style.add_modifier(Modifier::BOLD)),
        Span::styled(" \u{2014} ", style),
        Span::styled(
            entry.category.clone(),
            style.add_modifier(Modifier::ITALIC),
        ),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::{buffer_text, draw};
    use ratatui::style::Color;

    fn render(list: &DayList) -> ratatui::buffer::Buffer {
        draw(40, 6, |frame| {
            let area = frame.area();
            DayView::render(frame, area, "01.06.2024", list);
        })
    }

    #[test]
    fn test_placeholder_when_day_has_no_bucket() {
        let text = buffer_text(&render(&DayList::NoEvents));
        assert!(text.contains("Events on 01.06.2024"));
        assert!(text.contains(NO_EVENTS));
    }

    #[test]
    fn test_entry_uses_category_color() {
        let color = Color::Rgb(0xff, 0x57, 0x33);
        let list = DayList::Entries {
            entries: vec![DayEntry {
                title: "Standup".to_string(),
                category: "Работа".to_string(),
                color: Some(color),
            }],
            hidden: 0,
        };
        let buffer = render(&list);
        let text = buffer_text(&buffer);

        assert!(text.contains("Standup — Работа"));
        assert!(text.contains("1 event "));
        assert!(!text.contains(NO_EVENTS));
        // Row 1, after the border and the "■ " prefix.
        assert_eq!(buffer[(3, 1)].symbol(), "S");
        assert_eq!(buffer[(3, 1)].fg, color);
    }

    #[test]
    fn test_filtered_out_day_is_not_the_placeholder() {
        let list = DayList::Entries { entries: vec![], hidden: 2 };
        let text = buffer_text(&render(&list));
        assert!(text.contains(ALL_HIDDEN));
        assert!(text.contains("0 shown, 2 hidden"));
        assert!(!text.contains(NO_EVENTS));
    }

    #[test]
    fn test_orphaned_category_renders_dimmed() {
        let list = DayList::Entries {
            entries: vec![DayEntry {
                title: "Old".to_string(),
                category: "Gone".to_string(),
                color: None,
            }],
            hidden: 0,
        };
        let buffer = render(&list);
        assert!(buffer_text(&buffer).contains("Old — Gone"));
        assert_eq!(buffer[(3, 1)].fg, theme::current().dim.fg.unwrap());
    }
}

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::popup_area;
use crate::theme;

const SECTIONS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Calendar",
        &[
            ("h/l \u{2190}/\u{2192}", "Previous/next day"),
            ("k/j \u{2191}/\u{2193}", "Previous/next week"),
            ("[/]", "Previous/next month"),
            ("t", "Jump to today"),
        ],
    ),
    (
        "Events & categories",
        &[
            ("n", "Add event on selected day"),
            ("c", "Add category"),
            ("Tab", "Switch form field"),
            ("Space", "Cycle category / palette"),
        ],
    ),
    (
        "Filter",
        &[
            ("f", "Focus category filter"),
            ("Space", "Toggle category"),
            ("x", "Show all categories"),
        ],
    ),
];

pub struct Help;

impl Help {
    pub fn render(frame: &mut Frame, area: Rect) {
        let popup = popup_area(area, 52, 22);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Keybindings ")
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));

        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

        let mut lines = Vec::new();
        for (title, keys) in SECTIONS {
            lines.push(Line::from(Span::styled(title, section_style)));
            for (key, desc) in keys {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<12}", key), key_style),
                    Span::raw(*desc),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled("  q / Ctrl-C    ", key_style),
            Span::styled("Quit", theme::current().dim),
        ]));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}

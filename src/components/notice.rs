use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::popup_area;
use crate::app::Notice;
use crate::theme;

pub struct NoticePopup;

impl NoticePopup {
    pub fn render(frame: &mut Frame, area: Rect, notice: &Notice) {
        let t = theme::current();
        let popup = popup_area(area, 52, 7);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(format!(" {} ", notice.title))
            .title_style(t.notice)
            .borders(Borders::ALL)
            .border_style(t.notice.remove_modifier(Modifier::BOLD));

        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let lines = vec![
            Line::from(notice.message.clone()),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(" / ", t.dim),
                Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(" to dismiss", t.dim),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}

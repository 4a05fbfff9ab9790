pub mod category_form;
pub mod category_panel;
pub mod day_view;
pub mod event_form;
pub mod help;
pub mod month_view;
pub mod notice;
pub mod status_bar;

pub use category_form::CategoryForm;
pub use category_panel::CategoryPanel;
pub use day_view::DayView;
pub use event_form::EventForm;
pub use help::Help;
pub use month_view::MonthView;
pub use notice::NoticePopup;
pub use status_bar::StatusBar;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;

/// Center a `width` x `height` popup in `area`, shrinking it to fit.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

/// One labelled form row; the active row gets a cursor.
fn render_field(frame: &mut Frame, area: Rect, label: &str, value: Span<'static>, active: bool) {
    let mut spans = vec![Span::styled(format!("{:<7}", label), theme::current().dim)];

    if active {
        let style = if value.style == Style::default() {
            Style::default().fg(Color::Cyan)
        } else {
            value.style
        };
        spans.push(value.style(style));
        spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
    } else {
        spans.push(value);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
pub(crate) mod test_util {
    use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

    /// Render into an off-screen terminal and return the resulting buffer.
    pub fn draw(width: u16, height: u16, render: impl FnOnce(&mut Frame)) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(render).unwrap();
        terminal.backend().buffer().clone()
    }

    pub fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}

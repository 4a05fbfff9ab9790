use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, InputMode};
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let w = area.width as usize;
        let style = theme::current().status;

        let mode_str = match app.input_mode {
            InputMode::Normal => "",
            InputMode::Filter => " [Filter]",
            InputMode::EventForm => " [New Event]",
            InputMode::CategoryForm => " [New Category]",
        };
        let filter_str = if app.filter.is_empty() {
            "all".to_string()
        } else {
            app.filter.iter().collect::<Vec<_>>().join(",")
        };
        let left = format!(" {}{} | {} ", app.format_date(app.selected_date), mode_str, filter_str);

        let right = if let Some(ref msg) = app.status_message {
            format!(" {} ", msg)
        } else {
            hints(app.input_mode, w).to_string()
        };

        let padding = " ".repeat(w.saturating_sub(left.chars().count() + right.chars().count()));
        let line = Line::from(vec![
            Span::styled(left, style),
            Span::styled(padding, style),
            Span::styled(right, style),
        ]);

        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}

fn hints(mode: InputMode, w: usize) -> &'static str {
    match mode {
        InputMode::Normal if w >= 90 => {
            " hjkl:Nav [/]:Mon t:Today n:Event c:Category f:Filter x:All ?:Help q:Quit "
        }
        InputMode::Normal if w >= 50 => " n:Event c:Category f:Filter ?:Help q:Quit ",
        InputMode::Filter if w >= 50 => " jk:Move Space:Toggle x:All Esc:Back ",
        InputMode::EventForm | InputMode::CategoryForm if w >= 50 => {
            " Tab:Field Enter:Add Esc:Close "
        }
        _ => " ?:Help q:Quit ",
    }
}

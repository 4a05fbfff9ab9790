use chrono::{Datelike, NaiveDate, Weekday};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme;

const MARKER: &str = "\u{2022}";
const OVERFLOW: &str = "+";

pub struct MonthView;

impl MonthView {
    /// Borders, weekday header and up to six week rows.
    pub const HEIGHT: u16 = 9;

    /// Draw the month of `selected_date`. `decorate` returns the marker
    /// colors of a day, one per event to show.
    pub fn render<F>(
        frame: &mut Frame,
        area: Rect,
        selected_date: NaiveDate,
        today: NaiveDate,
        week_start: Weekday,
        decorate: F,
    ) where
        F: Fn(NaiveDate) -> Vec<Color>,
    {
        let t = theme::current();
        let title = format!(" {} ", selected_date.format("%B %Y"));

        let block = Block::default()
            .title(title)
            .title_style(t.header)
            .borders(Borders::ALL)
            .border_style(t.border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cell_w = (inner.width / 7).clamp(4, 8) as usize;
        let mut lines = vec![header_line(week_start, cell_w)];

        let Some(first) = selected_date.with_day(1) else {
            return;
        };
        let lead = (7 + first.weekday().num_days_from_monday()
            - week_start.num_days_from_monday())
            % 7;

        let mut week: Vec<Span> = Vec::new();
        if lead > 0 {
            week.push(Span::raw(" ".repeat(cell_w * lead as usize)));
        }
        let mut col = lead;
        let mut day = Some(first);
        while let Some(date) = day.filter(|d| d.month() == first.month()) {
            week.extend(day_cell(date, selected_date, today, cell_w, &decorate(date)));
            col += 1;
            if col == 7 {
                lines.push(Line::from(std::mem::take(&mut week)));
                col = 0;
            }
            day = date.succ_opt();
        }
        if !week.is_empty() {
            lines.push(Line::from(week));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn header_line(week_start: Weekday, cell_w: usize) -> Line<'static> {
    let mut weekday = week_start;
    let mut spans = Vec::with_capacity(7);
    for _ in 0..7 {
        let name = weekday_name(weekday);
        let name = if cell_w < 5 { &name[..2] } else { name };
        spans.push(Span::styled(
            format!("{:^width$}", name, width = cell_w),
            theme::current().header,
        ));
        weekday = weekday.succ();
    }
    Line::from(spans)
}

/// Day number followed by one marker per event; `+` when they don't fit.
fn day_cell(
    date: NaiveDate,
    selected_date: NaiveDate,
    today: NaiveDate,
    cell_w: usize,
    markers: &[Color],
) -> Vec<Span<'static>> {
    let t = theme::current();
    let style = if date == selected_date {
        t.selected.add_modifier(Modifier::BOLD)
    } else if date == today {
        t.today
    } else {
        Style::default()
    };
    let number = Span::styled(format!(" {:>2}", date.day()), style);

    let slots = cell_w - 3;
    let shown = if markers.len() > slots { slots - 1 } else { markers.len() };

    let mut spans = Vec::with_capacity(slots + 2);
    spans.push(number);
    spans.extend(
        markers[..shown]
            .iter()
            .map(|&c| Span::styled(MARKER, Style::default().fg(c))),
    );
    if shown < markers.len() {
        spans.push(Span::styled(OVERFLOW, t.dim));
    }
    let used = spans.len() - 1;
    spans.push(Span::raw(" ".repeat(slots - used)));
    spans
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::{buffer_text, draw};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_markers_are_colored_per_event() {
        let red = Color::Rgb(0xff, 0x57, 0x33);
        let blue = Color::Rgb(0x33, 0xc1, 0xff);
        let marked = date(2024, 6, 1);

        let buffer = draw(44, 9, |frame| {
            let area = frame.area();
            MonthView::render(frame, area, marked, date(2024, 6, 20), Weekday::Sun, |d| {
                if d == marked {
                    vec![red, blue]
                } else {
                    vec![]
                }
            });
        });

        assert!(buffer_text(&buffer).contains("June 2024"));
        // June 1st 2024 is a Saturday: last column of the first week row.
        assert_eq!(buffer[(39, 2)].symbol(), "1");
        assert_eq!(buffer[(40, 2)].symbol(), MARKER);
        assert_eq!(buffer[(40, 2)].fg, red);
        assert_eq!(buffer[(41, 2)].symbol(), MARKER);
        assert_eq!(buffer[(41, 2)].fg, blue);
    }

    #[test]
    fn test_overflowing_markers_collapse_to_plus() {
        let marked = date(2024, 6, 3);
        let buffer = draw(44, 9, |frame| {
            let area = frame.area();
            MonthView::render(frame, area, marked, marked, Weekday::Mon, |d| {
                if d == marked {
                    vec![Color::Red; 5]
                } else {
                    vec![]
                }
            });
        });

        // Monday start: June 3rd opens the second week row.
        assert!(buffer_text(&buffer).lines().nth(1).unwrap().contains("Mon"));
        assert_eq!(buffer[(3, 3)].symbol(), "3");
        assert_eq!(buffer[(4, 3)].symbol(), MARKER);
        assert_eq!(buffer[(5, 3)].symbol(), MARKER);
        assert_eq!(buffer[(6, 3)].symbol(), OVERFLOW);
    }
}

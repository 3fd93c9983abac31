use ratatui::prelude::*;

use crate::widgets::CycleHoliday;

use super::{button, render_panel};

pub fn render(frame: &mut Frame, area: Rect, widget: &CycleHoliday) {
    let holiday = widget.holiday();
    let lines = vec![
        Line::from(vec![
            Span::styled("Holiday: ", Style::default().fg(Color::Gray)),
            Span::raw(holiday.emoji()),
        ]),
        Line::from(holiday.name().fg(Color::DarkGray)),
    ];

    render_panel(
        frame,
        area,
        lines,
        vec![
            button('a', "Advance by Alphabet", true),
            button('y', "Advance by Year", true),
        ],
    );
}

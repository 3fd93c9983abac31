use ratatui::prelude::*;

use crate::widgets::StartAttempt;

use super::{button, render_panel};

pub fn render(frame: &mut Frame, area: Rect, widget: &StartAttempt) {
    let status = if widget.in_progress() {
        Span::styled("Quiz in progress", Style::default().fg(Color::Green))
    } else {
        Span::styled("Not started", Style::default().fg(Color::DarkGray))
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("Attempts: {}", widget.attempts()),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(status),
    ];

    render_panel(
        frame,
        area,
        lines,
        vec![
            button('s', "Start Quiz", widget.can_start()),
            button('t', "Stop Quiz", widget.can_stop()),
            button('m', "Mulligan", widget.can_mulligan()),
        ],
    );
}

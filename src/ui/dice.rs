use ratatui::prelude::*;

use crate::widgets::{DiceOutcome, TwoDice};

use super::{button, render_panel};

pub fn render(frame: &mut Frame, area: Rect, widget: &TwoDice) {
    let outcome = match widget.outcome() {
        DiceOutcome::Lose => Span::styled("Lose", Style::default().fg(Color::Red).bold()),
        DiceOutcome::Win => Span::styled("Win", Style::default().fg(Color::Green).bold()),
        DiceOutcome::Pending => Span::raw(""),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Left: ", Style::default().fg(Color::Gray)),
            Span::styled(
                widget.left().to_string(),
                Style::default().fg(Color::Yellow).bold(),
            ),
            Span::styled("   Right: ", Style::default().fg(Color::Gray)),
            Span::styled(
                widget.right().to_string(),
                Style::default().fg(Color::Yellow).bold(),
            ),
        ]),
        Line::from(outcome),
    ];

    render_panel(
        frame,
        area,
        lines,
        vec![button('1', "Roll Left", true), button('2', "Roll Right", true)],
    );
}

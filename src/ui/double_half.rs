use ratatui::prelude::*;

use crate::widgets::DoubleHalf;

use super::{button, render_panel};

pub fn render(frame: &mut Frame, area: Rect, widget: &DoubleHalf) {
    let lines = vec![Line::from(vec![
        Span::styled("The current value is: ", Style::default().fg(Color::Gray)),
        Span::styled(
            widget.value().to_string(),
            Style::default().fg(Color::Yellow).bold(),
        ),
    ])];

    render_panel(
        frame,
        area,
        lines,
        vec![button('d', "Double", true), button('h', "Halve", true)],
    );
}

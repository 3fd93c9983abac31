use ratatui::prelude::*;

use crate::widgets::ChangeType;

use super::{button, render_panel};

pub fn render(frame: &mut Frame, area: Rect, widget: &ChangeType) {
    let lines = vec![Line::from(Span::styled(
        widget.kind().label(),
        Style::default().fg(Color::Yellow).bold(),
    ))];

    render_panel(frame, area, lines, vec![button('c', "Change Type", true)]);
}

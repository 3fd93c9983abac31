mod attempt;
mod change_type;
mod dice;
mod double_half;
mod holiday;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
};

use crate::app::App;
use crate::models::Tab;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_tabs(frame, chunks[0], app.tab);

    let body = widget_block(app.tab.title());
    let inner = body.inner(chunks[1]);
    frame.render_widget(body, chunks[1]);

    match app.tab {
        Tab::DoubleHalf => double_half::render(frame, inner, &app.double_half),
        Tab::CycleHoliday => holiday::render(frame, inner, &app.cycle_holiday),
        Tab::ChangeType => change_type::render(frame, inner, &app.change_type),
        Tab::StartAttempt => attempt::render(frame, inner, &app.start_attempt),
        Tab::TwoDice => dice::render(frame, inner, &app.two_dice),
    }

    render_controls(frame, chunks[2]);
}

fn render_tabs(frame: &mut Frame, area: Rect, selected: Tab) {
    let titles: Vec<&str> = Tab::ALL.iter().map(|tab| tab.title()).collect();
    let widget = Tabs::new(titles)
        .select(selected.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Cyan).bold())
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

fn widget_block(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(Color::Cyan).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .padding(Padding::uniform(1))
}

/// A `[key] label` button, dimmed when disabled.
fn button(key: char, label: &str, enabled: bool) -> Line<'static> {
    let (key_style, label_style) = if enabled {
        (
            Style::default().fg(Color::Green).bold(),
            Style::default().fg(Color::Gray),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray).crossed_out(),
        )
    };

    Line::from(vec![
        Span::styled(format!("[{}] ", key), key_style),
        Span::styled(label.to_string(), label_style),
    ])
}

/// Stacks the widget's state lines above a blank line and its buttons.
fn render_panel(
    frame: &mut Frame,
    area: Rect,
    mut lines: Vec<Line<'static>>,
    buttons: Vec<Line<'static>>,
) {
    lines.push(Line::from(""));
    lines.extend(buttons);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("tab/←→ switch widget  ·  r reset  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_selected_widget() {
        let mut app = App::with_seed(3);
        let screen = rendered(&app);
        assert!(screen.contains("The current value is: 10"));
        assert!(screen.contains("[d] Double"));

        app.tab = Tab::StartAttempt;
        app.start_attempt.start();
        let screen = rendered(&app);
        assert!(screen.contains("Attempts: 3"));
        assert!(screen.contains("Quiz in progress"));
    }

    #[test]
    fn test_renders_question_type_label() {
        let mut app = App::with_seed(3);
        app.tab = Tab::ChangeType;
        app.change_type.swap();
        assert!(rendered(&app).contains("Multiple Choice"));
    }
}

//! Help text and self-check report opened from the main menu.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{presentation::theme::Theme, state::SideView};

pub fn render(frame: &mut Frame, area: Rect, view: &SideView, theme: &Theme) {
    let lines: Vec<Line> = match view {
        SideView::Help(text) => text.iter().map(|line| Line::from(line.as_str())).collect(),
        SideView::SelfChecks(checks) => checks
            .iter()
            .map(|check| {
                let (tag, color) = if check.passed {
                    ("PASS", Color::Green)
                } else {
                    ("FAIL", Color::Red)
                };
                Line::from(vec![
                    Span::styled(format!("[{tag}] "), Style::default().fg(color)),
                    Span::raw(check.name),
                ])
            })
            .collect(),
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(view.title(), theme.title())),
    );
    frame.render_widget(paragraph, area);
}

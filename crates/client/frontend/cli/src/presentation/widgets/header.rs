//! Header widget displaying the current screen, difficulty and seed.

use game_core::SessionSnapshot;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot, theme: &Theme) {
    let seed = snapshot
        .seed
        .map(|seed| seed.to_string())
        .unwrap_or_else(|| "random".to_string());

    let text = Line::from(vec![
        Span::styled(snapshot.state.to_string(), theme.title()),
        Span::raw(" | Difficulty: "),
        Span::styled(
            snapshot.difficulty.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | Seed: "),
        Span::styled(seed, Style::default().fg(Color::LightGreen)),
    ]);

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Party vs Boss"));

    frame.render_widget(paragraph, area);
}

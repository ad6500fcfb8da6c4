//! Title panel for the pre-battle menus, with the boss table.

use game_core::{Difficulty, MenuState, SessionSnapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot, theme: &Theme) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("PARTY VS BOSS", theme.title())),
        Line::from(Span::styled(
            "Draft four heroes. Defeat the Dark Overlord.",
            theme.dimmed(),
        )),
        Line::from(""),
    ];

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let profile = difficulty.boss_profile();
        let style = if snapshot.state != MenuState::MainMenu && difficulty == snapshot.difficulty {
            theme.key()
        } else {
            ratatui::style::Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{:<7} {} HP / {} ATK / {} DEF",
                difficulty.to_string(),
                profile.health,
                profile.attack,
                profile.defense
            ),
            style,
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(theme.title()));
    frame.render_widget(paragraph, area);
}

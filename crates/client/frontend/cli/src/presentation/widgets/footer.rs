//! Footer widget: context-sensitive key hints or the last input error.

use game_core::MenuState;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{presentation::theme::Theme, state::AppState};

pub fn render(frame: &mut Frame, area: Rect, state: MenuState, app_state: &AppState, theme: &Theme) {
    let line = match &app_state.status {
        Some(status) if !app_state.is_side_view() => {
            Line::from(Span::styled(format!("Invalid input: {status}"), theme.error()))
        }
        _ => Line::from(Span::raw(hint(state, app_state.is_side_view()))),
    };

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn hint(state: MenuState, side_view_open: bool) -> &'static str {
    if side_view_open {
        return "[any key] Close | [Ctrl+C] Quit";
    }
    match state {
        MenuState::MainMenu => "[1-3] Select | [0/q] Exit",
        MenuState::SeedMenu => "[digits] Type seed | [Enter] Confirm (empty = random) | [Esc] Back",
        MenuState::PartySelection => "[1-6] Toggle hero | [0] Start | [b/Esc] Back",
        MenuState::Battle => "[1-5] Choose action | [Ctrl+C] Quit",
        MenuState::Victory | MenuState::Defeat => "[any key] Return to main menu",
        _ => "[digits] Select | [0/Esc] Back",
    }
}

//! Frame layout and panel composition.
//!
//! Every frame is rebuilt from a [`SessionSnapshot`] plus frontend state;
//! nothing here mutates the session.
use anyhow::Result;
use game_core::{MenuState, SessionSnapshot};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::{terminal::Tui, theme::Theme, widgets};
use crate::{
    config::UiConfig,
    state::{AppMode, AppState},
};

pub fn render(
    terminal: &mut Tui,
    snapshot: &SessionSnapshot,
    app_state: &AppState,
    config: &UiConfig,
) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, snapshot, app_state, config))?;
    Ok(())
}

fn render_frame(frame: &mut Frame, snapshot: &SessionSnapshot, app_state: &AppState, config: &UiConfig) {
    let theme = Theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(config.log_panel_height),
            Constraint::Length(3),
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], snapshot, &theme);
    match &app_state.mode {
        AppMode::SideView(view) => widgets::side_view::render(frame, chunks[1], view, &theme),
        AppMode::Normal => render_body(frame, chunks[1], snapshot, app_state, &theme),
    }
    widgets::messages::render(frame, chunks[2], &snapshot.log, &theme);
    widgets::footer::render(frame, chunks[3], snapshot.state, app_state, &theme);
}

fn render_body(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SessionSnapshot,
    app_state: &AppState,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    widgets::menu::render(frame, chunks[0], snapshot, &app_state.input_buffer, theme);

    match snapshot.state {
        state if state.is_in_battle() || state.is_terminal() => {
            widgets::battlefield::render(frame, chunks[1], snapshot, theme)
        }
        MenuState::PartySelection => widgets::roster::render(frame, chunks[1], snapshot, theme),
        _ => widgets::title::render(frame, chunks[1], snapshot, theme),
    }
}

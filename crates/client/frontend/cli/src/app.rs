//! Terminal application: owns the session and runs the input/render loop.
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use game_core::{
    GameConfig, GameError, GameSession, MenuState, SideEffect, help_lines, run_self_checks,
};

use crate::{
    config::CliConfig,
    input::{InputHandler, KeyAction},
    presentation::{terminal, ui},
    state::{AppState, SideView},
};

const POLL_INTERVAL_MS: u64 = 250;

/// Terminal frontend driving one [`GameSession`].
pub struct CliFrontend {
    config: CliConfig,
    session: GameSession,
    input: InputHandler,
    app_state: AppState,
}

impl CliFrontend {
    pub fn new(config: CliConfig) -> Self {
        Self {
            config,
            session: GameSession::new(GameConfig::default()),
            input: InputHandler,
            app_state: AppState::default(),
        }
    }

    /// Runs until the player exits. The terminal is restored on every path out.
    pub fn run(mut self) -> Result<()> {
        // Armed first so a failure part-way through init still restores the terminal.
        let _guard = terminal::TerminalGuard;
        let mut tui = terminal::init()?;
        tracing::info!("frontend started");

        loop {
            let snapshot = self.session.snapshot();
            ui::render(&mut tui, &snapshot, &self.app_state, &self.config.ui)?;

            if !term_event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                continue;
            }
            let TermEvent::Key(key) = term_event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let action = self.input.handle_key(
                key,
                self.session.state(),
                self.app_state.is_side_view(),
            );
            if self.apply(action) {
                break;
            }
        }

        tracing::info!("frontend stopped");
        Ok(())
    }

    /// Applies one key action. Returns `true` when the app should exit.
    fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => true,
            KeyAction::Dismiss => {
                self.app_state.close_side_view();
                false
            }
            KeyAction::Push(c) => {
                self.app_state.input_buffer.push(c);
                false
            }
            KeyAction::Backspace => {
                self.app_state.input_buffer.pop();
                false
            }
            KeyAction::SubmitBuffer => {
                let code = std::mem::take(&mut self.app_state.input_buffer);
                self.submit(&code)
            }
            KeyAction::Submit(code) => self.submit(&code),
            KeyAction::None => false,
        }
    }

    fn submit(&mut self, code: &str) -> bool {
        let transition = match self.session.handle_input(code) {
            Ok(transition) => transition,
            Err(err) => {
                tracing::debug!(
                    state = %self.session.state(),
                    code,
                    error = %err,
                    error_code = err.error_code(),
                    severity = err.severity().as_str(),
                    "input rejected"
                );
                self.app_state.status = Some(err.to_string());
                return false;
            }
        };
        self.app_state.status = None;

        if transition.state == MenuState::SeedMenu {
            if let Some(seed) = self.config.seed {
                self.app_state.input_buffer = seed.to_string();
            }
        }

        match transition.effect {
            SideEffect::None => false,
            SideEffect::ShowHelp => {
                self.app_state.open(SideView::Help(help_lines()));
                false
            }
            SideEffect::ShowSelfChecks => {
                let checks = run_self_checks();
                let failed = checks.iter().filter(|check| !check.passed).count();
                tracing::info!(total = checks.len(), failed, "self-check run");
                self.app_state.open(SideView::SelfChecks(checks));
                false
            }
            SideEffect::Exit => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frontend(seed: Option<i64>) -> CliFrontend {
        CliFrontend::new(CliConfig {
            seed,
            ..CliConfig::default()
        })
    }

    #[test]
    fn rejected_input_sets_status_until_next_accepted_input() {
        let mut app = frontend(None);
        assert!(!app.apply(KeyAction::Submit("7".to_string())));
        assert!(app.app_state.status.is_some());
        assert!(!app.apply(KeyAction::Submit("1".to_string())));
        assert!(app.app_state.status.is_none());
        assert_eq!(app.session.state(), MenuState::DifficultyMenu);
    }

    #[test]
    fn configured_seed_prefills_the_prompt() {
        let mut app = frontend(Some(42));
        app.apply(KeyAction::Submit("1".to_string()));
        app.apply(KeyAction::Submit("1".to_string()));
        assert_eq!(app.app_state.input_buffer, "42");

        app.apply(KeyAction::SubmitBuffer);
        assert_eq!(app.session.state(), MenuState::PartySelection);
        assert_eq!(app.session.seed(), Some(42));
        assert!(app.app_state.input_buffer.is_empty());
    }

    #[test]
    fn help_opens_a_side_view_and_exit_quits() {
        let mut app = frontend(None);
        app.apply(KeyAction::Submit("2".to_string()));
        assert!(app.app_state.is_side_view());
        app.apply(KeyAction::Dismiss);
        assert!(!app.app_state.is_side_view());
        assert!(app.apply(KeyAction::Submit("0".to_string())));
    }
}

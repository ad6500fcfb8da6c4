//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-code mapping so the rest of the
//! application stays agnostic about concrete key bindings or the specifics
//! of `crossterm` events. The session only ever sees the raw codes a player
//! would type at a prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::MenuState;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Feed this code to the session.
    Submit(String),
    /// Append a character to the text buffer.
    Push(char),
    /// Delete the last buffered character.
    Backspace,
    /// Submit the text buffer.
    SubmitBuffer,
    /// Close the open side view.
    Dismiss,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into session input codes.
///
/// Single-key menus submit immediately. The seed prompt buffers typed text
/// until Enter.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(&self, key: KeyEvent, state: MenuState, side_view_open: bool) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }
        if side_view_open {
            return KeyAction::Dismiss;
        }

        match state {
            MenuState::SeedMenu => self.handle_seed_prompt(key),
            MenuState::Victory | MenuState::Defeat => KeyAction::Submit(String::new()),
            _ => self.handle_menu(key, state),
        }
    }

    fn handle_seed_prompt(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter => KeyAction::SubmitBuffer,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Esc => KeyAction::Submit("b".to_string()),
            KeyCode::Char(c) if !c.is_control() => KeyAction::Push(c),
            _ => KeyAction::None,
        }
    }

    fn handle_menu(&self, key: KeyEvent, state: MenuState) -> KeyAction {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => KeyAction::Submit(c.to_string()),
            KeyCode::Char('b') | KeyCode::Esc => back_code(state)
                .map(|code| KeyAction::Submit(code.to_string()))
                .unwrap_or(KeyAction::None),
            KeyCode::Char('q') if state == MenuState::MainMenu => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

/// Code that leaves `state` for its parent menu, if it has one.
fn back_code(state: MenuState) -> Option<&'static str> {
    match state {
        MenuState::PartySelection => Some("b"),
        MenuState::DifficultyMenu
        | MenuState::AttackMenu
        | MenuState::SkillsMenu
        | MenuState::SwitchMenu => Some("0"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_submit_immediately_in_menus() {
        let handler = InputHandler;
        assert_eq!(
            handler.handle_key(press(KeyCode::Char('3')), MenuState::Battle, false),
            KeyAction::Submit("3".to_string())
        );
        assert_eq!(
            handler.handle_key(press(KeyCode::Char('x')), MenuState::Battle, false),
            KeyAction::None
        );
    }

    #[test]
    fn escape_maps_to_each_menus_back_code() {
        let handler = InputHandler;
        assert_eq!(
            handler.handle_key(press(KeyCode::Esc), MenuState::SkillsMenu, false),
            KeyAction::Submit("0".to_string())
        );
        assert_eq!(
            handler.handle_key(press(KeyCode::Esc), MenuState::PartySelection, false),
            KeyAction::Submit("b".to_string())
        );
        assert_eq!(
            handler.handle_key(press(KeyCode::Esc), MenuState::Battle, false),
            KeyAction::None
        );
    }

    #[test]
    fn seed_prompt_buffers_text() {
        let handler = InputHandler;
        assert_eq!(
            handler.handle_key(press(KeyCode::Char('4')), MenuState::SeedMenu, false),
            KeyAction::Push('4')
        );
        assert_eq!(
            handler.handle_key(press(KeyCode::Enter), MenuState::SeedMenu, false),
            KeyAction::SubmitBuffer
        );
    }

    #[test]
    fn any_key_acknowledges_the_result() {
        let handler = InputHandler;
        assert_eq!(
            handler.handle_key(press(KeyCode::Char('z')), MenuState::Victory, false),
            KeyAction::Submit(String::new())
        );
    }

    #[test]
    fn side_view_swallows_keys_but_not_ctrl_c() {
        let handler = InputHandler;
        assert_eq!(
            handler.handle_key(press(KeyCode::Char('1')), MenuState::MainMenu, true),
            KeyAction::Dismiss
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handler.handle_key(ctrl_c, MenuState::MainMenu, true),
            KeyAction::Quit
        );
    }
}

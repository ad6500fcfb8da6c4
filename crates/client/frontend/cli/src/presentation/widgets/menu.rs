//! Menu widget listing the input codes valid on the current screen.

use game_core::{MenuState, SessionSnapshot};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::theme::Theme;

/// One selectable line: the code to press, its label, and whether it can succeed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub code: String,
    pub label: String,
    pub enabled: bool,
}

impl MenuEntry {
    fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            enabled: true,
        }
    }

    fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Data-driven entries first, then the state's fixed options.
pub fn entries(snapshot: &SessionSnapshot) -> Vec<MenuEntry> {
    let mut entries = Vec::new();

    match snapshot.state {
        MenuState::PartySelection => {
            for (i, entry) in snapshot.pool.iter().enumerate() {
                let mark = if entry.selected { "[x]" } else { "[ ]" };
                entries.push(MenuEntry::new(
                    (i + 1).to_string(),
                    format!("{mark} {}", entry.archetype),
                ));
            }
        }
        MenuState::SkillsMenu => {
            for (i, skill) in snapshot.skills.iter().enumerate() {
                entries.push(
                    MenuEntry::new(
                        (i + 1).to_string(),
                        format!("{} ({} MP)", skill.name, skill.mana_cost),
                    )
                    .enabled(skill.affordable),
                );
            }
        }
        MenuState::SwitchMenu => {
            for (i, hero) in snapshot.party.iter().enumerate() {
                let lead = if hero.is_protagonist { " *" } else { "" };
                entries.push(
                    MenuEntry::new((i + 1).to_string(), format!("{}{lead}", hero.name))
                        .enabled(hero.alive),
                );
            }
        }
        _ => {}
    }

    entries.extend(
        snapshot
            .state
            .options()
            .iter()
            .map(|(code, label)| MenuEntry::new(*code, *label)),
    );
    entries
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SessionSnapshot,
    input_buffer: &str,
    theme: &Theme,
) {
    let mut items: Vec<ListItem> = Vec::new();

    if snapshot.state == MenuState::SeedMenu {
        items.push(ListItem::new(Line::from(vec![
            Span::raw("Seed: "),
            Span::styled(format!("{input_buffer}_"), theme.key()),
        ])));
        items.push(ListItem::new(""));
    }

    for entry in entries(snapshot) {
        let code = if entry.code.is_empty() {
            "Enter".to_string()
        } else {
            entry.code.clone()
        };
        let label_style = if entry.enabled {
            ratatui::style::Style::default()
        } else {
            theme.dimmed()
        };
        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!("[{code}] "), theme.key()),
            Span::styled(entry.label, label_style),
        ])));
    }

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Menu"));
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::GameSession;

    fn session_after(codes: &[&str]) -> GameSession {
        let mut session = GameSession::default();
        for code in codes {
            session.handle_input(code).unwrap();
        }
        session
    }

    #[test]
    fn party_selection_lists_pool_then_fixed_options() {
        let session = session_after(&["1", "1", "3", "2"]);
        let entries = entries(&session.snapshot());
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[1].label, "[x] Mage");
        assert_eq!(entries[0].label, "[ ] Warrior");
        assert_eq!(entries[6].code, "0");
        assert_eq!(entries[7].code, "b");
    }

    #[test]
    fn switch_menu_marks_the_lead() {
        let session = session_after(&["1", "1", "3", "1", "2", "3", "4", "0", "3"]);
        let entries = entries(&session.snapshot());
        assert_eq!(entries[0].label, "Warrior *");
        assert!(entries.iter().all(|entry| entry.enabled));
        assert_eq!(entries.last().map(|e| e.code.as_str()), Some("0"));
    }
}

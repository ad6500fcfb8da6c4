//! Colors and styling rules for the terminal UI.
use game_core::Difficulty;
use ratatui::style::{Color, Modifier, Style};

/// How a battle log line should be styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTone {
    /// The boss dealt damage.
    Hostile,
    /// Mana shortfalls and failed actions.
    Warning,
    /// Victory, defeat and surrender.
    Outcome,
    Normal,
}

impl LogTone {
    pub fn classify(line: &str) -> Self {
        if line.starts_with(Difficulty::BOSS_NAME) {
            if line.ends_with("is defeated!") {
                LogTone::Outcome
            } else {
                LogTone::Hostile
            }
        } else if line.contains("not have enough mana")
            || line.ends_with("cannot attack")
            || line.ends_with("could not use skill")
        {
            LogTone::Warning
        } else if line.starts_with("The party") {
            LogTone::Outcome
        } else {
            LogTone::Normal
        }
    }
}

/// Consistent styling for every widget.
pub struct Theme;

impl Theme {
    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dimmed(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(Color::LightRed)
    }

    /// Green above half, yellow above a quarter, red below.
    pub fn health(&self, current: i32, max: i32) -> Style {
        let color = if current <= 0 {
            Color::DarkGray
        } else if current * 2 > max {
            Color::Green
        } else if current * 4 > max {
            Color::Yellow
        } else {
            Color::Red
        };
        Style::default().fg(color)
    }

    pub fn mana(&self) -> Style {
        Style::default().fg(Color::LightBlue)
    }

    pub fn log_line(&self, line: &str) -> Style {
        match LogTone::classify(line) {
            LogTone::Hostile => Style::default().fg(Color::LightRed),
            LogTone::Warning => Style::default().fg(Color::Yellow),
            LogTone::Outcome => Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            LogTone::Normal => Style::default().fg(Color::White),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_log_lines() {
        assert_eq!(
            LogTone::classify("Dark Overlord attacks Mage! Damage: 12"),
            LogTone::Hostile
        );
        assert_eq!(LogTone::classify("Dark Overlord is defeated!"), LogTone::Outcome);
        assert_eq!(
            LogTone::classify("Mage does not have enough mana for any skill"),
            LogTone::Warning
        );
        assert_eq!(LogTone::classify("The party surrenders"), LogTone::Outcome);
        assert_eq!(LogTone::classify("Warrior attacks! Damage: 21"), LogTone::Normal);
    }

    #[test]
    fn health_color_bands() {
        let theme = Theme;
        assert_eq!(theme.health(100, 100).fg, Some(Color::Green));
        assert_eq!(theme.health(40, 100).fg, Some(Color::Yellow));
        assert_eq!(theme.health(10, 100).fg, Some(Color::Red));
        assert_eq!(theme.health(0, 100).fg, Some(Color::DarkGray));
    }
}

//! Menu/battle states and the result of a transition.

/// Every screen the session can be on. `MainMenu` is the initial state.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuState {
    #[default]
    MainMenu,
    DifficultyMenu,
    SeedMenu,
    PartySelection,
    Battle,
    AttackMenu,
    SkillsMenu,
    SwitchMenu,
    Victory,
    Defeat,
}

impl MenuState {
    /// States in which a battle exists and the party is locked in.
    pub const fn is_in_battle(self) -> bool {
        matches!(
            self,
            MenuState::Battle
                | MenuState::AttackMenu
                | MenuState::SkillsMenu
                | MenuState::SwitchMenu
        )
    }

    /// Victory and defeat end the battle; only an acknowledgement leaves them.
    pub const fn is_terminal(self) -> bool {
        matches!(self, MenuState::Victory | MenuState::Defeat)
    }

    /// Fixed options a frontend should list for this state, as `(code, label)`.
    ///
    /// Party selection, skills and switch menus are data-driven; only their
    /// fixed entries are listed here.
    pub const fn options(self) -> &'static [(&'static str, &'static str)] {
        match self {
            MenuState::MainMenu => &[
                ("1", "New game"),
                ("2", "Help"),
                ("3", "Self-check"),
                ("0", "Exit"),
            ],
            MenuState::DifficultyMenu => &[
                ("1", "Easy"),
                ("2", "Medium"),
                ("3", "Hard"),
                ("0", "Back"),
            ],
            MenuState::SeedMenu => &[("", "Random seed"), ("b", "Back")],
            MenuState::PartySelection => &[("0", "Start battle"), ("b", "Back")],
            MenuState::Battle => &[
                ("1", "Attack"),
                ("2", "Skills"),
                ("3", "Switch hero"),
                ("4", "Skip turn"),
                ("5", "Surrender"),
            ],
            MenuState::AttackMenu => &[
                ("1", "Normal attack"),
                ("2", "Strong attack (5 MP)"),
                ("0", "Back"),
            ],
            MenuState::SkillsMenu | MenuState::SwitchMenu => &[("0", "Back")],
            MenuState::Victory | MenuState::Defeat => &[("", "Return to main menu")],
        }
    }
}

/// Out-of-band requests the frontend must act on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SideEffect {
    #[default]
    None,
    /// Show the rules text, then stay on the main menu.
    ShowHelp,
    /// Show the self-check report, then stay on the main menu.
    ShowSelfChecks,
    /// The player chose to leave; the frontend should shut down.
    Exit,
}

/// Accepted input: the state after the transition plus any side effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub state: MenuState,
    pub effect: SideEffect,
}

impl Transition {
    pub const fn to(state: MenuState) -> Self {
        Self {
            state,
            effect: SideEffect::None,
        }
    }

    pub const fn with_effect(state: MenuState, effect: SideEffect) -> Self {
        Self { state, effect }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn battle_and_terminal_states_do_not_overlap() {
        for state in MenuState::iter() {
            assert!(!(state.is_in_battle() && state.is_terminal()), "{state}");
        }
        assert_eq!(MenuState::iter().filter(|s| s.is_in_battle()).count(), 4);
    }

    #[test]
    fn state_names_render_as_screaming_snake() {
        assert_eq!(MenuState::PartySelection.to_string(), "PARTY_SELECTION");
        assert_eq!(MenuState::default(), MenuState::MainMenu);
    }
}

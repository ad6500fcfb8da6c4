//! Fixed boss stat tables keyed by difficulty.

/// Difficulty tag chosen before the battle; selects the boss stat line.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Base stats a boss is constructed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossProfile {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
}

impl Difficulty {
    /// Display name shared by the boss at every difficulty.
    pub const BOSS_NAME: &'static str = "Dark Overlord";

    /// Health / attack / defense line for this difficulty.
    pub const fn boss_profile(self) -> BossProfile {
        match self {
            Difficulty::Easy => BossProfile {
                health: 300,
                attack: 20,
                defense: 5,
            },
            Difficulty::Medium => BossProfile {
                health: 500,
                attack: 30,
                defense: 10,
            },
            Difficulty::Hard => BossProfile {
                health: 800,
                attack: 40,
                defense: 15,
            },
        }
    }

    /// Maps the difficulty menu code (`1`-`3`) to a difficulty.
    pub const fn from_menu_index(index: usize) -> Option<Self> {
        match index {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn stat_lines_match_difficulty() {
        assert_eq!(
            Difficulty::Easy.boss_profile(),
            BossProfile {
                health: 300,
                attack: 20,
                defense: 5
            }
        );
        assert_eq!(Difficulty::Medium.boss_profile().health, 500);
        assert_eq!(Difficulty::Hard.boss_profile().defense, 15);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(Difficulty::from_str("HARD"), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert_eq!(Difficulty::from_menu_index(4), None);
    }
}

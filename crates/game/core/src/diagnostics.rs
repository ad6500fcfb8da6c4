//! Main-menu side views: rules text and the in-game self-check.
//!
//! The self-check runs the core combat rules on scratch data so a player can
//! confirm a build behaves (damage floor, caps, log eviction, seeded replay)
//! without leaving the game.

use crate::config::GameConfig;
use crate::env::{Difficulty, HeroArchetype, PcgRng, RngOracle};
use crate::session::{GameSession, MenuState};
use crate::state::{BattleLog, CombatStats, Combatant, Hero};

/// Result of one self-check.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelfCheck {
    pub name: &'static str,
    pub passed: bool,
}

/// Rules summary shown from the main menu.
pub fn help_lines() -> Vec<String> {
    let mut lines = vec![
        "Draft exactly four heroes from the pool of six, then face the boss.".to_string(),
        "Each round: your lead hero acts, every living hero regains mana, the boss strikes back.".to_string(),
        "Normal attack rolls attack-5..attack+5. Strong attack rolls attack..attack+10 for 5 MP.".to_string(),
        "Defense reduces every hit, but at least 1 damage always lands.".to_string(),
        "Switching the lead hero is free; skipping still ends the round.".to_string(),
        "Enter a seed to replay the exact same battle.".to_string(),
        String::new(),
        "Bosses:".to_string(),
    ];
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let profile = difficulty.boss_profile();
        lines.push(format!(
            "  {difficulty}: {} HP, {} ATK, {} DEF",
            profile.health, profile.attack, profile.defense
        ));
    }
    lines
}

/// Runs every self-check and reports pass/fail per check.
pub fn run_self_checks() -> Vec<SelfCheck> {
    vec![
        SelfCheck {
            name: "damage floor of 1",
            passed: check_damage_floor(),
        },
        SelfCheck {
            name: "heal and mana caps",
            passed: check_caps(),
        },
        SelfCheck {
            name: "battle log eviction",
            passed: check_log_eviction(),
        },
        SelfCheck {
            name: "seeded replay",
            passed: check_seeded_replay(),
        },
    ]
}

fn check_damage_floor() -> bool {
    let mut stats = CombatStats::new(50, 10, 1_000);
    stats.take_damage(5) == 1 && stats.health == 49
}

fn check_caps() -> bool {
    let mut hero = Hero::new(HeroArchetype::Priest);
    hero.stats.health -= 10;
    hero.mana -= 3;
    hero.heal(500);
    hero.restore_mana(500);
    hero.stats.health == hero.stats.max_health && hero.mana == hero.max_mana
}

fn check_log_eviction() -> bool {
    let mut log = BattleLog::default();
    for i in 0..(GameConfig::DEFAULT_LOG_CAPACITY + 3) {
        log.push(i.to_string());
    }
    log.len() == GameConfig::DEFAULT_LOG_CAPACITY && log.iter().next().map(String::as_str) == Some("3")
}

fn check_seeded_replay() -> bool {
    let mut a = PcgRng::new(0);
    let mut b = PcgRng::new(1);
    a.set_seed(42);
    b.set_seed(42);
    if (0..32).any(|_| a.next_u32() != b.next_u32()) {
        return false;
    }

    let script = ["1", "1", "42", "1", "2", "3", "4", "0", "1", "1", "4", "1", "1"];
    let play = || {
        let mut session = GameSession::default();
        for code in script {
            if session.handle_input(code).is_err() {
                return None;
            }
        }
        Some((session.state(), session.log().iter().cloned().collect::<Vec<_>>()))
    };
    match (play(), play()) {
        (Some(first), Some(second)) => first == second && first.0 != MenuState::MainMenu,
        _ => false,
    }
}

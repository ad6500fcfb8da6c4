//! Read-only view of a session for frontends.
use strum::IntoEnumIterator;

use crate::config::GameConfig;
use crate::env::{Difficulty, HeroArchetype};
use crate::state::{Boss, Combatant, Hero};

use super::{GameSession, MenuState};

/// Everything a frontend needs to draw the current screen.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    pub state: MenuState,
    pub difficulty: Difficulty,
    pub seed: Option<i64>,
    /// Recruitable archetypes in menu order with draft membership.
    pub pool: Vec<PoolEntry>,
    pub party: Vec<HeroView>,
    pub protagonist: Option<usize>,
    pub boss: Option<BossView>,
    /// Last few log lines, oldest first.
    pub log: Vec<String>,
    /// Protagonist's skills in menu order.
    pub skills: Vec<SkillView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolEntry {
    pub archetype: HeroArchetype,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroView {
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub mana: i32,
    pub max_mana: i32,
    pub attack: i32,
    pub defense: i32,
    pub alive: bool,
    pub is_protagonist: bool,
}

impl From<&Hero> for HeroView {
    fn from(hero: &Hero) -> Self {
        Self {
            name: hero.name().to_string(),
            health: hero.stats.health.max(0),
            max_health: hero.stats.max_health,
            mana: hero.mana,
            max_mana: hero.max_mana,
            attack: hero.stats.attack,
            defense: hero.stats.defense,
            alive: hero.is_alive(),
            is_protagonist: hero.is_protagonist,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossView {
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub attack: i32,
    pub defense: i32,
}

impl From<&Boss> for BossView {
    fn from(boss: &Boss) -> Self {
        Self {
            name: boss.name.clone(),
            health: boss.stats.health.max(0),
            max_health: boss.stats.max_health,
            attack: boss.stats.attack,
            defense: boss.stats.defense,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillView {
    pub name: String,
    pub mana_cost: i32,
    pub affordable: bool,
}

impl GameSession {
    /// Captures the current session for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        let pool = HeroArchetype::iter()
            .map(|archetype| PoolEntry {
                archetype,
                selected: self.draft().contains(archetype),
            })
            .collect();

        let battle = self.battle();
        let party = battle
            .map(|b| b.party.heroes().iter().map(HeroView::from).collect())
            .unwrap_or_default();
        let skills = battle
            .map(|b| {
                let hero = b.party.protagonist();
                hero.skills
                    .iter()
                    .map(|skill| SkillView {
                        name: skill.name.to_string(),
                        mana_cost: skill.mana_cost,
                        affordable: hero.mana >= skill.mana_cost,
                    })
                    .collect()
            })
            .unwrap_or_default();

        SessionSnapshot {
            state: self.state(),
            difficulty: self.difficulty(),
            seed: self.seed(),
            pool,
            party,
            protagonist: battle.map(|b| b.party.protagonist_index()),
            boss: battle.map(|b| BossView::from(&b.boss)),
            log: self.log().recent(GameConfig::LOG_VISIBLE).cloned().collect(),
            skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_snapshot_has_pool_but_no_battle() {
        let session = GameSession::default();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.state, MenuState::MainMenu);
        assert_eq!(snapshot.pool.len(), 6);
        assert!(snapshot.pool.iter().all(|entry| !entry.selected));
        assert!(snapshot.party.is_empty());
        assert!(snapshot.boss.is_none());
        assert!(snapshot.skills.is_empty());
    }

    #[test]
    fn battle_snapshot_lists_protagonist_skills() {
        let mut session = GameSession::default();
        for code in ["1", "1", "7", "2", "1", "3", "4", "0"] {
            session.handle_input(code).unwrap();
        }
        let snapshot = session.snapshot();
        assert_eq!(snapshot.state, MenuState::Battle);
        assert_eq!(snapshot.seed, Some(7));
        assert_eq!(snapshot.party[0].name, "Mage");
        assert_eq!(snapshot.protagonist, Some(0));
        let names: Vec<_> = snapshot.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Fireball", "Ice Lance"]);
        assert!(snapshot.skills.iter().all(|s| s.affordable));
        assert_eq!(snapshot.boss.unwrap().health, 300);
        assert_eq!(snapshot.log, ["Battle started!"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshot_exports_as_json() {
        let mut session = GameSession::default();
        for code in ["1", "2", "99", "5", "6", "1", "4", "0"] {
            session.handle_input(code).unwrap();
        }
        let snapshot = session.snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["state"], "Battle");
        assert_eq!(json["difficulty"], "Medium");
        assert_eq!(json["seed"], 99);
        assert_eq!(json["party"][1]["name"], "Paladin");
        assert_eq!(json["boss"]["health"], 500);

        let back: SessionSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot);
    }
}

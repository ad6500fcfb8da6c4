//! Party drafting and the active party during battle.

use crate::config::GameConfig;
use crate::env::HeroArchetype;

use super::combatant::{Combatant, Hero};

/// Result of toggling an archetype in the draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftChange {
    Added,
    Removed,
    /// Party already full; nothing changed.
    Full,
}

/// Heroes picked so far on the party-selection screen, in pick order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartyDraft {
    picks: Vec<HeroArchetype>,
}

impl PartyDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the archetype if absent and there is room, removes it if present.
    pub fn toggle(&mut self, archetype: HeroArchetype) -> DraftChange {
        if let Some(pos) = self.picks.iter().position(|&pick| pick == archetype) {
            self.picks.remove(pos);
            return DraftChange::Removed;
        }
        if self.picks.len() >= GameConfig::PARTY_SIZE {
            return DraftChange::Full;
        }
        self.picks.push(archetype);
        DraftChange::Added
    }

    pub fn contains(&self, archetype: HeroArchetype) -> bool {
        self.picks.contains(&archetype)
    }

    pub fn picks(&self) -> &[HeroArchetype] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.picks.len() == GameConfig::PARTY_SIZE
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }
}

/// The locked-in party. Exactly one hero is the protagonist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Party {
    heroes: Vec<Hero>,
    protagonist: usize,
}

impl Party {
    /// Builds fresh heroes from a complete draft; `None` unless the size is exact.
    pub fn from_draft(draft: &PartyDraft) -> Option<Self> {
        if !draft.is_complete() {
            return None;
        }
        Self::from_heroes(draft.picks().iter().copied().map(Hero::new).collect())
    }

    /// Wraps prepared heroes; the first one leads. `None` for an empty list.
    pub fn from_heroes(heroes: Vec<Hero>) -> Option<Self> {
        if heroes.is_empty() {
            return None;
        }
        let mut party = Self {
            heroes,
            protagonist: 0,
        };
        party.set_protagonist(0);
        Some(party)
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn hero(&self, index: usize) -> Option<&Hero> {
        self.heroes.get(index)
    }

    pub fn hero_mut(&mut self, index: usize) -> Option<&mut Hero> {
        self.heroes.get_mut(index)
    }

    pub fn heroes_mut(&mut self) -> impl Iterator<Item = &mut Hero> {
        self.heroes.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn protagonist_index(&self) -> usize {
        self.protagonist
    }

    pub fn protagonist(&self) -> &Hero {
        &self.heroes[self.protagonist]
    }

    pub fn protagonist_mut(&mut self) -> &mut Hero {
        &mut self.heroes[self.protagonist]
    }

    /// Moves the protagonist flag to `index`. Returns false if out of range.
    pub fn set_protagonist(&mut self, index: usize) -> bool {
        if index >= self.heroes.len() {
            return false;
        }
        if let Some(current) = self.heroes.get_mut(self.protagonist) {
            current.is_protagonist = false;
        }
        self.heroes[index].is_protagonist = true;
        self.protagonist = index;
        true
    }

    /// Hands control to the next living hero after the current one, wrapping.
    ///
    /// The current hero is considered last, so a lone survivor keeps the lead.
    /// Returns `None` (index unchanged) when nobody is alive.
    pub fn advance_protagonist(&mut self) -> Option<usize> {
        let len = self.heroes.len();
        let next = (1..=len)
            .map(|offset| (self.protagonist + offset) % len)
            .find(|&index| self.heroes[index].is_alive())?;
        self.set_protagonist(next);
        Some(next)
    }

    pub fn living_indices(&self) -> Vec<usize> {
        self.heroes
            .iter()
            .enumerate()
            .filter(|(_, hero)| hero.is_alive())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn all_dead(&self) -> bool {
        self.heroes.iter().all(|hero| !hero.is_alive())
    }

    /// Living hero with the lowest health fraction; ties go to the lower index.
    pub fn weakest_living(&self) -> Option<usize> {
        self.heroes
            .iter()
            .enumerate()
            .filter(|(_, hero)| hero.is_alive())
            .min_by(|(_, a), (_, b)| {
                // a.health / a.max < b.health / b.max, compared without division
                let lhs = a.stats.health as i64 * b.stats.max_health as i64;
                let rhs = b.stats.health as i64 * a.stats.max_health as i64;
                lhs.cmp(&rhs)
            })
            .map(|(index, _)| index)
    }
}

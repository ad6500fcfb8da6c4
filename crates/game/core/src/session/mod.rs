//! Battle state machine.
//!
//! [`GameSession`] owns everything a playthrough needs and exposes a single
//! entry point, [`GameSession::handle_input`], which validates one raw input
//! code against the current [`MenuState`] and applies the transition. The
//! session never blocks and never performs I/O; a frontend renders
//! [`GameSession::snapshot`] and feeds the next code.
//!
//! Error handling follows three tiers:
//! - malformed input returns [`InputError`] and leaves the session untouched
//! - resource shortfalls (mana) become battle log lines, state unchanged
//! - invariant violations (confirming a short party) are silent no-ops

mod menu;
mod snapshot;

pub use menu::{MenuState, SideEffect, Transition};
pub use snapshot::{BossView, HeroView, PoolEntry, SessionSnapshot, SkillView};

use crate::action::{ActionError, AttackStyle};
use crate::config::GameConfig;
use crate::engine::{BattleEngine, RoundOutcome, TurnAction};
use crate::env::{Difficulty, HeroArchetype, PcgRng, RngOracle};
use crate::error::{GameError, InputError};
use crate::state::{Battle, BattleLog, Combatant, DraftChange, Party, PartyDraft};

/// One playthrough: menus, party draft, battle and log.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    state: MenuState,
    difficulty: Difficulty,
    seed: Option<i64>,
    rng: PcgRng,
    draft: PartyDraft,
    battle: Option<Battle>,
    log: BattleLog,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let log = BattleLog::new(config.log_capacity);
        Self {
            config,
            state: MenuState::MainMenu,
            difficulty: Difficulty::default(),
            seed: None,
            rng: PcgRng::from_entropy(),
            draft: PartyDraft::new(),
            battle: None,
            log,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Seed entered by the player, if the session is seeded.
    pub fn seed(&self) -> Option<i64> {
        self.seed
    }

    pub fn draft(&self) -> &PartyDraft {
        &self.draft
    }

    pub fn battle(&self) -> Option<&Battle> {
        self.battle.as_ref()
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Applies one input code to the current state.
    ///
    /// Input is trimmed; keywords match case-insensitively.
    pub fn handle_input(&mut self, code: &str) -> Result<Transition, InputError> {
        let code = code.trim();
        let from = self.state;
        let transition = match from {
            MenuState::MainMenu => self.on_main_menu(code)?,
            MenuState::DifficultyMenu => self.on_difficulty_menu(code)?,
            MenuState::SeedMenu => self.on_seed_menu(code)?,
            MenuState::PartySelection => self.on_party_selection(code)?,
            MenuState::Battle => self.on_battle_menu(code)?,
            MenuState::AttackMenu => self.on_attack_menu(code)?,
            MenuState::SkillsMenu => self.on_skills_menu(code)?,
            MenuState::SwitchMenu => self.on_switch_menu(code)?,
            MenuState::Victory | MenuState::Defeat => {
                self.reset_playthrough();
                Transition::to(MenuState::MainMenu)
            }
        };

        if transition.state != from {
            tracing::debug!(%from, to = %transition.state, "state transition");
        }
        self.state = transition.state;
        Ok(transition)
    }

    fn on_main_menu(&mut self, code: &str) -> Result<Transition, InputError> {
        match parse_choice(code)? {
            1 => {
                self.reset_playthrough();
                Ok(Transition::to(MenuState::DifficultyMenu))
            }
            2 => Ok(Transition::with_effect(
                MenuState::MainMenu,
                SideEffect::ShowHelp,
            )),
            3 => Ok(Transition::with_effect(
                MenuState::MainMenu,
                SideEffect::ShowSelfChecks,
            )),
            0 => Ok(Transition::with_effect(MenuState::MainMenu, SideEffect::Exit)),
            index => Err(InputError::OutOfRange { index, max: 3 }),
        }
    }

    fn on_difficulty_menu(&mut self, code: &str) -> Result<Transition, InputError> {
        match parse_choice(code)? {
            0 => Ok(Transition::to(MenuState::MainMenu)),
            index => {
                let difficulty =
                    Difficulty::from_menu_index(index).ok_or(InputError::OutOfRange { index, max: 3 })?;
                self.difficulty = difficulty;
                Ok(Transition::to(MenuState::SeedMenu))
            }
        }
    }

    fn on_seed_menu(&mut self, code: &str) -> Result<Transition, InputError> {
        if is_back(code) {
            return Ok(Transition::to(MenuState::DifficultyMenu));
        }
        if code.is_empty() {
            self.seed = None;
            self.rng = PcgRng::from_entropy();
        } else {
            let seed = parse_seed(code)?;
            self.seed = Some(seed);
            self.rng.set_seed(seed as u64);
        }
        Ok(Transition::to(MenuState::PartySelection))
    }

    fn on_party_selection(&mut self, code: &str) -> Result<Transition, InputError> {
        if is_back(code) {
            return Ok(Transition::to(MenuState::SeedMenu));
        }
        // This menu also takes keywords, so free text is an unknown command.
        let choice: usize = code
            .parse()
            .map_err(|_| InputError::UnknownCommand(code.to_string()))?;
        match choice {
            0 => Ok(Transition::to(self.start_battle())),
            index => {
                let archetype = HeroArchetype::from_pool_index(index).ok_or(
                    InputError::OutOfRange {
                        index,
                        max: <HeroArchetype as strum::EnumCount>::COUNT,
                    },
                )?;
                if self.draft.toggle(archetype) == DraftChange::Full {
                    tracing::debug!(%archetype, "party full, pick ignored");
                }
                Ok(Transition::to(MenuState::PartySelection))
            }
        }
    }

    /// Locks in the draft. A draft of the wrong size is silently rejected.
    fn start_battle(&mut self) -> MenuState {
        let Some(party) = Party::from_draft(&self.draft) else {
            return MenuState::PartySelection;
        };
        self.battle = Some(Battle::new(party, self.difficulty));
        self.log.clear();
        self.log.push("Battle started!");
        tracing::info!(
            difficulty = %self.difficulty,
            seed = ?self.seed,
            party = ?self.draft.picks(),
            "battle started"
        );
        MenuState::Battle
    }

    fn on_battle_menu(&mut self, code: &str) -> Result<Transition, InputError> {
        let choice = parse_choice(code)?;
        let Some(battle) = self.battle.as_ref() else {
            return Ok(self.lost_battle());
        };
        let hero = battle.party.protagonist();
        let next = match choice {
            1 => MenuState::AttackMenu,
            2 if hero.can_cast_any() => MenuState::SkillsMenu,
            2 => {
                let message = format!("{} does not have enough mana for any skill", hero.name());
                self.log.push(message);
                MenuState::Battle
            }
            3 => MenuState::SwitchMenu,
            4 => return Ok(self.resolve_turn(TurnAction::Skip)),
            5 => {
                self.log.push("The party surrenders");
                tracing::info!("party surrendered");
                MenuState::Defeat
            }
            index => return Err(InputError::OutOfRange { index, max: 5 }),
        };
        Ok(Transition::to(next))
    }

    fn on_attack_menu(&mut self, code: &str) -> Result<Transition, InputError> {
        let style = match parse_choice(code)? {
            0 => return Ok(Transition::to(MenuState::Battle)),
            1 => AttackStyle::Normal,
            2 => AttackStyle::Strong,
            index => return Err(InputError::OutOfRange { index, max: 2 }),
        };
        Ok(self.resolve_turn(TurnAction::Attack(style)))
    }

    fn on_skills_menu(&mut self, code: &str) -> Result<Transition, InputError> {
        let choice = parse_choice(code)?;
        if choice == 0 {
            return Ok(Transition::to(MenuState::Battle));
        }
        let Some(battle) = self.battle.as_ref() else {
            return Ok(self.lost_battle());
        };
        let max = battle.party.protagonist().skills.len();
        if choice > max {
            return Err(InputError::OutOfRange { index: choice, max });
        }
        Ok(self.resolve_turn(TurnAction::Skill(choice - 1)))
    }

    fn on_switch_menu(&mut self, code: &str) -> Result<Transition, InputError> {
        let choice = parse_choice(code)?;
        if choice == 0 {
            return Ok(Transition::to(MenuState::Battle));
        }
        let Some(battle) = self.battle.as_mut() else {
            return Ok(self.lost_battle());
        };
        let max = battle.party.len();
        let index = choice - 1;
        let hero = battle
            .party
            .hero(index)
            .ok_or(InputError::OutOfRange { index: choice, max })?;
        if !hero.is_alive() {
            return Err(InputError::DeadHero(hero.name().to_string()));
        }
        let name = hero.name().to_string();
        battle.party.set_protagonist(index);
        self.log.push(format!("{name} takes the lead"));
        Ok(Transition::to(MenuState::Battle))
    }

    /// Runs a turn-ending action through the engine and maps the outcome to a state.
    fn resolve_turn(&mut self, action: TurnAction) -> Transition {
        let Some(battle) = self.battle.as_mut() else {
            return self.lost_battle();
        };
        let hero_name = battle.party.protagonist().name().to_string();
        let mut engine = BattleEngine::new(battle, &mut self.log, &mut self.rng, &self.config);

        match engine.take_turn(&action) {
            Ok(RoundOutcome::Continue) => Transition::to(MenuState::Battle),
            Ok(RoundOutcome::Victory) => Transition::to(MenuState::Victory),
            Ok(RoundOutcome::Defeat) => Transition::to(MenuState::Defeat),
            Err(err) => {
                tracing::debug!(error = %err, code = err.error_code(), ?action, "action rejected");
                let message = match (&action, &err) {
                    (TurnAction::Attack(AttackStyle::Strong), ActionError::InsufficientMana { .. }) => {
                        format!("{hero_name} does not have enough mana for a strong attack")
                    }
                    (TurnAction::Attack(_), _) => format!("{hero_name} cannot attack"),
                    _ => format!("{hero_name} could not use skill"),
                };
                self.log.push(message);
                Transition::to(self.state)
            }
        }
    }

    /// Battle states without a battle should be unreachable; recover to the main menu.
    fn lost_battle(&mut self) -> Transition {
        tracing::warn!(state = %self.state, "battle state without an active battle");
        self.reset_playthrough();
        Transition::to(MenuState::MainMenu)
    }

    /// Clears party, battle and log. Difficulty and seed are re-chosen next game.
    fn reset_playthrough(&mut self) {
        self.draft.clear();
        self.battle = None;
        self.log.clear();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn parse_choice(code: &str) -> Result<usize, InputError> {
    code.parse()
        .map_err(|_| InputError::NotANumber(code.to_string()))
}

/// Any whole number seeds the RNG. Negative values share the bit pattern of
/// their `u64` counterpart, so either spelling replays the same battle.
fn parse_seed(code: &str) -> Result<i64, InputError> {
    code.parse::<i64>()
        .or_else(|_| code.parse::<u64>().map(|seed| seed as i64))
        .map_err(|_| InputError::SeedNotNumeric(code.to_string()))
}

fn is_back(code: &str) -> bool {
    code.eq_ignore_ascii_case("b") || code.eq_ignore_ascii_case("back")
}

use game_core::{
    AttackStyle, Battle, BattleEngine, BattleLog, Difficulty, GameConfig, GameSession, Hero,
    HeroArchetype, InputError, MenuState, Party, PcgRng, RoundOutcome, SessionSnapshot,
    TurnAction,
};

fn feed(session: &mut GameSession, codes: &[&str]) {
    for code in codes {
        session
            .handle_input(code)
            .unwrap_or_else(|err| panic!("input {code:?} rejected: {err}"));
    }
}

/// New game on easy with the given seed and the first four archetypes.
fn seeded_battle(seed: &str) -> GameSession {
    let mut session = GameSession::default();
    feed(&mut session, &["1", "1", seed, "1", "2", "3", "4", "0"]);
    assert_eq!(session.state(), MenuState::Battle);
    session
}

/// Attacks until the battle ends, recording every snapshot along the way.
fn play_out(session: &mut GameSession) -> Vec<SessionSnapshot> {
    let mut frames = vec![session.snapshot()];
    for _ in 0..500 {
        if session.state().is_terminal() {
            break;
        }
        feed(session, &["1", "1"]);
        frames.push(session.snapshot());
    }
    frames
}

#[test]
fn seed_42_first_normal_attack() {
    let mut session = seeded_battle("42");
    feed(&mut session, &["1", "1"]);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.state, MenuState::Battle);
    // Warrior rolls 26 in [20, 30]; easy boss defense 5.
    assert_eq!(snapshot.boss.as_ref().unwrap().health, 279);
    assert_eq!(
        snapshot.log,
        [
            "Battle started!",
            "Warrior attacks! Damage: 21",
            "Dark Overlord attacks Archer! Damage: 22",
        ]
    );
    assert_eq!(snapshot.party[2].health, 68);
    assert_eq!(snapshot.protagonist, Some(1));
}

#[test]
fn same_seed_same_inputs_replay_identically() {
    let first = play_out(&mut seeded_battle("1337"));
    let second = play_out(&mut seeded_battle("1337"));

    assert_eq!(first, second);
    let last = first.last().unwrap();
    assert!(matches!(last.state, MenuState::Victory | MenuState::Defeat));
}

#[test]
fn different_seeds_diverge() {
    let logs = |seed: &str| -> Vec<Vec<String>> {
        play_out(&mut seeded_battle(seed))
            .into_iter()
            .map(|frame| frame.log)
            .collect()
    };
    assert_ne!(logs("1"), logs("2"));
}

#[test]
fn party_confirmation_boundaries() {
    let mut session = GameSession::default();
    feed(&mut session, &["1", "3", "9"]);

    // Zero heroes
    assert_eq!(session.handle_input("0").unwrap().state, MenuState::PartySelection);

    // Three heroes
    feed(&mut session, &["1", "5", "6"]);
    assert_eq!(session.handle_input("0").unwrap().state, MenuState::PartySelection);
    assert!(session.battle().is_none());

    // A fifth pick never lands, so the draft cannot exceed four.
    feed(&mut session, &["2", "3"]);
    assert_eq!(session.draft().len(), 4);
    assert!(!session.draft().contains(HeroArchetype::Archer));

    assert_eq!(session.handle_input("0").unwrap().state, MenuState::Battle);
    let boss = &session.battle().unwrap().boss;
    assert_eq!(boss.difficulty, Difficulty::Hard);
    assert_eq!(boss.stats.health, 800);
}

#[test]
fn skills_with_no_mana_stay_in_battle() {
    let mut session = seeded_battle("5");

    // Warrior casts Power Strike five times (30 MP, +5 regen a round),
    // taking the lead back after each round.
    for _ in 0..5 {
        feed(&mut session, &["2", "1", "3", "1"]);
    }
    let hero = session.battle().unwrap().party.protagonist().clone();
    assert_eq!(hero.archetype, HeroArchetype::Warrior);
    assert_eq!(hero.mana, 5);

    let before = session.snapshot();
    let log_before: Vec<String> = session.log().iter().cloned().collect();

    assert_eq!(session.handle_input("2").unwrap().state, MenuState::Battle);

    let after = session.snapshot();
    let log_after: Vec<String> = session.log().iter().cloned().collect();
    assert_eq!(
        log_after.last().map(String::as_str),
        Some("Warrior does not have enough mana for any skill")
    );
    // Exactly one line was appended (the log is full, so the oldest rolled off).
    assert_eq!(log_before.len(), 10);
    assert_eq!(log_after.len(), 10);
    assert_eq!(&log_after[..9], &log_before[1..]);
    assert_eq!(after.party, before.party);
    assert_eq!(after.boss, before.boss);
}

#[test]
fn strong_attack_with_exact_mana_lands() {
    let mut session = seeded_battle("9");
    // Burn the Warrior's mana on skills first.
    for _ in 0..5 {
        feed(&mut session, &["2", "1", "3", "1"]);
    }
    let boss_before = session.snapshot().boss;

    assert_eq!(session.battle().unwrap().party.protagonist().mana, 5);

    feed(&mut session, &["1"]);
    assert_eq!(session.state(), MenuState::AttackMenu);
    // 5 MP is exactly enough for one strong attack.
    assert_eq!(session.handle_input("2").unwrap().state, MenuState::Battle);
    assert!(session.log().iter().any(|line| line.starts_with("Warrior uses a strong attack!")));
    assert_ne!(session.snapshot().boss, boss_before);
}

#[test]
fn switching_is_free_and_rejects_the_fallen() {
    let mut session = seeded_battle("3");
    let boss_before = session.snapshot().boss;

    feed(&mut session, &["3", "4"]);
    assert_eq!(session.state(), MenuState::Battle);
    let party = &session.battle().unwrap().party;
    assert_eq!(party.protagonist_index(), 3);
    assert!(party.protagonist().is_protagonist);
    assert!(!party.hero(0).unwrap().is_protagonist);
    assert_eq!(session.log().last(), Some("Priest takes the lead"));
    assert_eq!(session.snapshot().boss, boss_before);

    feed(&mut session, &["3"]);
    assert_eq!(
        session.handle_input("5"),
        Err(InputError::OutOfRange { index: 5, max: 4 })
    );
    assert_eq!(session.state(), MenuState::SwitchMenu);
    assert_eq!(session.handle_input("0").unwrap().state, MenuState::Battle);
}

#[test]
fn surrender_is_immediate_defeat_and_acknowledgement_resets() {
    let mut session = seeded_battle("11");
    assert_eq!(session.handle_input("5").unwrap().state, MenuState::Defeat);
    assert_eq!(session.log().last(), Some("The party surrenders"));
    // Boss was untouched: surrender bypasses the round.
    assert_eq!(session.battle().unwrap().boss.stats.health, 300);

    assert_eq!(session.handle_input("").unwrap().state, MenuState::MainMenu);
    assert!(session.log().is_empty());
    assert!(session.battle().is_none());
    assert!(session.draft().is_empty());
    assert_eq!(session.snapshot().pool.len(), 6);
}

#[test]
fn skip_consumes_a_round() {
    let mut session = seeded_battle("42");
    feed(&mut session, &["4"]);
    let log: Vec<_> = session.log().iter().cloned().collect();
    assert_eq!(log[1], "Warrior skips the turn");
    assert!(log[2].starts_with("Dark Overlord attacks "));
    assert_eq!(session.battle().unwrap().party.protagonist_index(), 1);
}

#[test]
fn killing_blow_wins_before_party_check() {
    let heroes = [HeroArchetype::Rogue, HeroArchetype::Mage]
        .into_iter()
        .map(Hero::new)
        .collect();
    let mut battle = Battle::new(Party::from_heroes(heroes).unwrap(), Difficulty::Easy);
    battle.boss.stats.health = 1;
    battle.party.hero_mut(1).unwrap().stats.health = 0;

    let mut log = BattleLog::default();
    let mut rng = PcgRng::new(42);
    let config = GameConfig::default();
    let outcome = BattleEngine::new(&mut battle, &mut log, &mut rng, &config)
        .take_turn(&TurnAction::Attack(AttackStyle::Normal))
        .unwrap();

    assert_eq!(outcome, RoundOutcome::Victory);
    // Boss never counter-attacked.
    assert_eq!(battle.party.hero(0).unwrap().stats.health, 85);
    assert_eq!(log.last(), Some("Dark Overlord is defeated!"));
}

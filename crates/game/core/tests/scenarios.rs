//! End-to-end matches driven through `GameEngine::tick` with explicit `dt`.

use arena_core::effect::EffectKind;
use arena_core::state::{LifeState, MinionKind};
use arena_core::{
    AbilityKind, EffectDuration, EffectType, EntityId, GameEngine, GameEvent, GameState,
    GameplayConfig, Intent, Position, StructureKind, Team, TickOutcome,
};

const DT: u64 = 50;

struct Match {
    state: GameState,
    config: GameplayConfig,
    events: Vec<GameEvent>,
}

impl Match {
    fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            config: GameplayConfig::default(),
            events: Vec::new(),
        }
    }

    fn hero(&mut self, team: Team, ability: AbilityKind, x: f64) -> EntityId {
        self.state
            .spawn_hero(&self.config, team, ability, Position::new(x, 750.0))
    }

    fn tick(&mut self, intents: Vec<Intent>) -> TickOutcome {
        let outcome = GameEngine::new(&mut self.state, &self.config).tick(DT, intents);
        self.events.extend(outcome.events.iter().cloned());
        outcome
    }

    fn run(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick(Vec::new());
        }
    }

    fn position(&self, id: EntityId) -> Position {
        self.state.combatant(id).unwrap().position
    }

    fn health(&self, id: EntityId) -> f64 {
        self.state.combatant(id).unwrap().health
    }

    fn has_effect(&self, id: EntityId, effect_type: EffectType) -> bool {
        self.state
            .combatant(id)
            .unwrap()
            .has_effect(effect_type, self.state.game_time)
    }
}

#[test]
fn hookshot_stuns_and_pulls_target_to_caster() {
    let mut arena = Match::new(1);
    let caster = arena.hero(Team::Blue, AbilityKind::Hookshot, 500.0);
    let target = arena.hero(Team::Red, AbilityKind::Default, 800.0);
    let full = arena.health(target);

    arena.tick(vec![Intent::UseAbility {
        hero: caster,
        target: Position::new(800.0, 750.0),
    }]);
    // 27.5px per tick; the hook reaches the target's edge on the tenth tick.
    arena.run(9);
    assert!(arena.state.projectiles.is_empty());
    assert!(arena.has_effect(target, EffectType::Stun));
    assert!(arena.has_effect(target, EffectType::Move));
    assert!(arena.health(target) < full);

    arena.run(14);
    let gap = arena.position(caster).distance(arena.position(target));
    assert!(gap < 40.0, "target still {gap} away");
}

#[test]
fn hookshot_scales_with_caster_level() {
    let mut arena = Match::new(11);
    let caster = arena.hero(Team::Blue, AbilityKind::Hookshot, 500.0);
    let target = arena.hero(Team::Red, AbilityKind::Default, 800.0);
    arena.state.hero_mut(caster).unwrap().level = 3;

    arena.tick(vec![Intent::UseAbility {
        hero: caster,
        target: Position::new(800.0, 750.0),
    }]);
    // Two levels above the first: +8% projectile speed, +10% stun.
    let speed = arena.state.projectiles.values().next().unwrap().speed;
    assert!((speed - 550.0 * 1.08).abs() < 1e-9, "speed {speed}");

    for _ in 0..12 {
        arena.tick(Vec::new());
        if arena.state.projectiles.is_empty() {
            break;
        }
    }
    let stun = arena
        .state
        .combatant(target)
        .unwrap()
        .effects
        .iter()
        .find(|effect| effect.effect_type() == EffectType::Stun)
        .map(|effect| effect.duration);
    assert_eq!(stun, Some(EffectDuration::Timed(880)));
}

#[test]
fn hookshot_never_drags_structures() {
    let mut arena = Match::new(12);
    let caster = arena.hero(Team::Blue, AbilityKind::Hookshot, 500.0);
    let turret = arena.state.spawn_structure(
        &arena.config,
        Team::Red,
        StructureKind::Turret,
        Position::new(800.0, 750.0),
    );
    let full = arena.health(turret);

    arena.tick(vec![Intent::UseAbility {
        hero: caster,
        target: Position::new(800.0, 750.0),
    }]);
    arena.run(30);

    assert!(arena.health(turret) < full);
    assert_eq!(arena.position(turret), Position::new(800.0, 750.0));
    assert!(!arena.has_effect(turret, EffectType::Move));
    assert!(!arena.has_effect(turret, EffectType::NoCollision));
}

#[test]
fn pyromancer_fireball_leaves_burning_zone() {
    let mut arena = Match::new(2);
    let caster = arena.hero(Team::Blue, AbilityKind::Pyromancer, 500.0);
    let target = arena.hero(Team::Red, AbilityKind::Default, 800.0);
    let full = arena.health(target);

    arena.tick(vec![Intent::UseAbility {
        hero: caster,
        target: Position::new(800.0, 750.0),
    }]);
    assert!(arena.state.zones.is_empty());

    arena.run(30);
    assert!(arena.state.projectiles.is_empty());
    assert_eq!(arena.state.zones.len(), 1);
    assert!(arena.has_effect(target, EffectType::Burning));
    assert!(arena.health(target) < full);
    assert!(arena.state.round_stats[&caster].damage_dealt > 0.0);

    arena.run(70);
    assert!(arena.state.zones.is_empty());
}

#[test]
fn thorndive_lands_and_taunts_nearby_enemies() {
    let mut arena = Match::new(3);
    let diver = arena.hero(Team::Blue, AbilityKind::Thorndive, 500.0);
    let warrior = arena.state.spawn_minion(
        &arena.config,
        Team::Red,
        MinionKind::Warrior,
        Position::new(740.0, 750.0),
        false,
        None,
    );
    let full = arena.health(warrior);

    arena.tick(vec![Intent::UseAbility {
        hero: diver,
        target: Position::new(740.0, 750.0),
    }]);
    assert!(arena.has_effect(diver, EffectType::Reflect));
    assert!(arena.has_effect(diver, EffectType::NoCollision));

    let cast_time = arena.state.game_time;

    let mut landed_at = None;
    for _ in 0..5 {
        arena.tick(Vec::new());
        if landed_at.is_none() && arena.state.projectiles.is_empty() {
            landed_at = Some(arena.state.game_time);
        }
    }
    let landed_at = landed_at.expect("landing strike never fired");
    assert!(landed_at > cast_time);

    assert_eq!(arena.position(diver), Position::new(740.0, 750.0));
    assert!(arena.health(warrior) < full);
    let now = arena.state.game_time;
    let warrior_state = arena.state.combatant(warrior).unwrap();
    assert_eq!(warrior_state.taunted_by(now), Some(diver));
    let taunt = warrior_state
        .effects
        .iter()
        .find(|effect| effect.effect_type() == EffectType::Taunt)
        .unwrap();
    assert_eq!(taunt.applied_at, landed_at);
}

#[test]
fn sniper_recoils_caster_away_from_shot() {
    let mut arena = Match::new(4);
    let sniper = arena.hero(Team::Blue, AbilityKind::Sniper, 500.0);
    arena.tick(vec![Intent::UseAbility {
        hero: sniper,
        target: Position::new(1_100.0, 750.0),
    }]);
    arena.run(10);
    assert!(arena.position(sniper).x < 500.0);
    assert!(!arena.has_effect(sniper, EffectType::Move));
}

#[test]
fn mercenary_buff_strengthens_auto_attacks() {
    let mut arena = Match::new(5);
    let mercenary = arena.hero(Team::Blue, AbilityKind::Mercenary, 500.0);
    let base = arena.state.combatant(mercenary).unwrap().stat(arena_core::StatKind::AttackStrength);
    arena.tick(vec![Intent::UseAbility {
        hero: mercenary,
        target: Position::new(600.0, 750.0),
    }]);
    let buffed = arena
        .state
        .combatant(mercenary)
        .unwrap()
        .stat(arena_core::StatKind::AttackStrength);
    assert!(buffed > base);

    arena.run(120);
    let expired = arena
        .state
        .combatant(mercenary)
        .unwrap()
        .stat(arena_core::StatKind::AttackStrength);
    assert_eq!(expired, base);
}

#[test]
fn hero_kill_grants_experience_and_respawns_victim() {
    let mut arena = Match::new(6);
    let killer = arena.hero(Team::Blue, AbilityKind::Default, 500.0);
    let victim = arena.hero(Team::Red, AbilityKind::Default, 600.0);
    arena.state.combatant_mut(victim).unwrap().health = 1.0;

    arena.run(10);
    assert!(arena.events.contains(&GameEvent::CombatantKilled {
        victim,
        category: arena_core::CombatantCategory::Hero,
        killer: Some(killer),
    }));
    assert!(matches!(
        arena.state.combatant(victim).unwrap().life,
        LifeState::Respawning { .. }
    ));
    assert!(arena.events.contains(&GameEvent::LevelUp { hero: killer, level: 2 }));
    assert_eq!(arena.state.round_stats[&killer].hero_kills, 1);
    assert_eq!(arena.state.round_stats[&victim].deaths, 1);

    arena.run(140);
    let spawn = arena.config.map.spawn_point(Team::Red);
    assert!(arena.events.contains(&GameEvent::HeroRespawned { hero: victim, position: spawn }));
    let victim_state = arena.state.combatant(victim).unwrap();
    assert!(victim_state.is_alive());
    assert_eq!(victim_state.health, victim_state.max_health());
}

#[test]
fn reward_offer_is_resolved_through_intents() {
    let mut arena = Match::new(7);
    let hero = arena.hero(Team::Blue, AbilityKind::Default, 500.0);
    let config = arena.config.clone();
    arena_core::grant_experience(&mut arena.state, &config, hero, 100.0);
    let offer = arena.state.hero(hero).unwrap().pending_rewards.front().cloned().unwrap();
    assert_eq!(offer.chest, "ability");
    assert!(!offer.options.is_empty());

    let outcome = arena.tick(vec![Intent::ChooseReward {
        hero,
        reward: "not-offered".to_string(),
    }]);
    assert!(outcome.events.iter().any(|event| matches!(
        event,
        GameEvent::IntentRejected { code, .. } if code == "INTENT_REWARD_NOT_OFFERED"
    )));

    let choice = offer.options[0].clone();
    let outcome = arena.tick(vec![Intent::ChooseReward {
        hero,
        reward: choice.clone(),
    }]);
    assert!(outcome.events.contains(&GameEvent::RewardApplied { hero, reward: choice }));
    assert!(arena.state.hero(hero).unwrap().pending_rewards.is_empty());
}

#[test]
fn destroying_cradle_ends_match() {
    let mut arena = Match::new(8);
    let hero = arena.hero(Team::Blue, AbilityKind::Default, 2_500.0);
    let cradle = arena.state.spawn_structure(
        &arena.config,
        Team::Red,
        StructureKind::Cradle,
        Position::new(2_650.0, 750.0),
    );
    arena.state.combatant_mut(cradle).unwrap().health = 1.0;

    arena.run(10);
    assert!(arena.events.contains(&GameEvent::MatchWon { team: Team::Blue }));
    assert_eq!(arena.state.winner, Some(Team::Blue));
    assert!(arena.state.combatant(cradle).is_none());
    assert_eq!(arena.state.round_stats[&hero].cradle_kills, 1);

    let frozen = arena.state.game_time;
    let outcome = arena.tick(Vec::new());
    assert_eq!(outcome.game_time, frozen);
}

#[test]
fn stunned_hero_walks_once_stun_expires() {
    let mut arena = Match::new(9);
    let hero = arena.hero(Team::Blue, AbilityKind::Default, 500.0);
    {
        let combatant = arena.state.combatant_mut(hero).unwrap();
        arena_core::attach_effect(
            combatant,
            arena_core::Effect::new(EffectKind::Stun, arena_core::EffectDuration::Timed(500), 0),
        );
    }
    arena.tick(vec![Intent::MoveTo {
        hero,
        target: Position::new(900.0, 750.0),
    }]);
    arena.run(8);
    assert_eq!(arena.position(hero), Position::new(500.0, 750.0));
    arena.run(10);
    assert!(arena.position(hero).x > 500.0);
}

fn scripted_match(seed: u64) -> (GameState, Vec<TickOutcome>) {
    let mut arena = Match::new(seed);
    let blue = [
        arena.hero(Team::Blue, AbilityKind::Hookshot, 900.0),
        arena.hero(Team::Blue, AbilityKind::Pyromancer, 900.0),
    ];
    let red = [
        arena.hero(Team::Red, AbilityKind::Thorndive, 1_300.0),
        arena.hero(Team::Red, AbilityKind::Sniper, 1_300.0),
    ];
    for offset in [0.0, 0.0, 30.0] {
        arena.state.spawn_minion(
            &arena.config,
            Team::Blue,
            MinionKind::Warrior,
            Position::new(950.0 + offset, 700.0),
            false,
            Some(Position::new(2_000.0, 700.0)),
        );
        arena.state.spawn_minion(
            &arena.config,
            Team::Red,
            MinionKind::Archer,
            Position::new(1_250.0 - offset, 700.0),
            true,
            Some(Position::new(500.0, 700.0)),
        );
    }

    let mut outcomes = Vec::new();
    for tick in 0..400 {
        let mut intents = Vec::new();
        if tick % 40 == 0 {
            for hero in blue {
                intents.push(Intent::UseAbility {
                    hero,
                    target: Position::new(1_300.0, 750.0),
                });
            }
            for hero in red {
                intents.push(Intent::UseAbility {
                    hero,
                    target: Position::new(900.0, 750.0),
                });
            }
        }
        for hero in blue.into_iter().chain(red) {
            let offer = arena
                .state
                .hero(hero)
                .and_then(|h| h.pending_rewards.front())
                .and_then(|offer| offer.options.first().cloned());
            if let Some(reward) = offer {
                intents.push(Intent::ChooseReward { hero, reward });
            }
        }
        outcomes.push(arena.tick(intents));
    }
    (arena.state, outcomes)
}

#[test]
fn replay_from_same_seed_is_identical() {
    let (first_state, first_outcomes) = scripted_match(42);
    let (second_state, second_outcomes) = scripted_match(42);
    assert_eq!(first_outcomes, second_outcomes);
    assert_eq!(first_state, second_state);
    assert!(first_outcomes.iter().any(|outcome| !outcome.events.is_empty()));
}

//! Authoritative match state.
//!
//! [`GameState`] exclusively owns every combatant, projectile and zone, each
//! in a `BTreeMap` keyed by [`EntityId`] so iteration (and with it every
//! tie-break) is deterministic. Cross-references between entities are ids,
//! never references, so removing an entity cannot leave anything dangling.
pub mod types;

use std::collections::BTreeMap;

pub use types::{
    AttackState, Combatant, CombatantCategory, CombatantKind, EntityId, Hero, HitEffect,
    LifeState, Minion, MinionKind, Position, Projectile, ProjectileBound, ProjectileSpec,
    REWARD_OPTIONS, RewardOffer, RoundStats, StructureKind, Team, Timestamp, WindUp, Zone,
    ZoneDescriptor,
};

use crate::ability::{Ability, AbilityKind};
use crate::config::{CombatantStats, GameplayConfig};
use crate::event::GameEvent;
use crate::rng::{PcgRng, RngOracle, compute_seed};

/// Canonical snapshot of one match.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Set once at match creation; mixed into every random draw.
    pub game_seed: u64,
    /// Monotonic game clock in milliseconds.
    pub game_time: Timestamp,
    /// Number of random draws made so far.
    pub rng_nonce: u64,
    /// Shared id allocator for combatants, projectiles and zones.
    next_entity_id: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub combatants: BTreeMap<EntityId, Combatant>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub projectiles: BTreeMap<EntityId, Projectile>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub zones: BTreeMap<EntityId, Zone>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub round_stats: BTreeMap<EntityId, RoundStats>,
    pub winner: Option<Team>,
    /// Events raised during the current tick; drained by the engine.
    #[cfg_attr(feature = "serde", serde(skip))]
    events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl GameState {
    pub fn new(game_seed: u64) -> Self {
        Self {
            game_seed,
            game_time: 0,
            rng_nonce: 0,
            next_entity_id: 1,
            combatants: BTreeMap::new(),
            projectiles: BTreeMap::new(),
            zones: BTreeMap::new(),
            round_stats: BTreeMap::new(),
            winner: None,
            events: Vec::new(),
        }
    }

    /// Allocates a never-used id.
    pub fn allocate_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id = self.next_entity_id.saturating_add(1);
        id
    }

    pub fn combatant(&self, id: EntityId) -> Option<&Combatant> {
        self.combatants.get(&id)
    }

    pub fn combatant_mut(&mut self, id: EntityId) -> Option<&mut Combatant> {
        self.combatants.get_mut(&id)
    }

    pub fn hero(&self, id: EntityId) -> Option<&Hero> {
        self.combatant(id).and_then(Combatant::hero)
    }

    pub fn hero_mut(&mut self, id: EntityId) -> Option<&mut Hero> {
        self.combatant_mut(id).and_then(Combatant::hero_mut)
    }

    pub fn combatant_ids(&self) -> Vec<EntityId> {
        self.combatants.keys().copied().collect()
    }

    /// Spawns a level-1 hero carrying a fresh `ability`.
    pub fn spawn_hero(
        &mut self,
        config: &GameplayConfig,
        team: Team,
        ability: AbilityKind,
        position: Position,
    ) -> EntityId {
        let id = self.allocate_entity_id();
        let hero = Hero::new(
            Ability::create(ability, &config.abilities),
            config.progression.base_experience,
        );
        let combatant = Combatant::new(
            id,
            team,
            CombatantKind::Hero(Box::new(hero)),
            position,
            config.heroes.clone(),
        );
        self.combatants.insert(id, combatant);
        self.round_stats.insert(id, RoundStats::default());
        id
    }

    /// Spawns a lane minion. Buffed minions get the super-minion multipliers.
    pub fn spawn_minion(
        &mut self,
        config: &GameplayConfig,
        team: Team,
        kind: MinionKind,
        position: Position,
        buffed: bool,
        waypoint: Option<Position>,
    ) -> EntityId {
        let id = self.allocate_entity_id();
        let mut stats = match kind {
            MinionKind::Warrior => config.minions.warrior.clone(),
            MinionKind::Archer => config.minions.archer.clone(),
        };
        if buffed {
            stats.max_health *= config.minions.buffed_health_multiplier;
            stats.attack_strength *= config.minions.buffed_damage_multiplier;
        }
        let minion = Minion {
            kind,
            buffed,
            waypoint,
        };
        let combatant = Combatant::new(id, team, CombatantKind::Minion(minion), position, stats);
        self.combatants.insert(id, combatant);
        id
    }

    pub fn spawn_structure(
        &mut self,
        config: &GameplayConfig,
        team: Team,
        kind: StructureKind,
        position: Position,
    ) -> EntityId {
        let id = self.allocate_entity_id();
        let stats = CombatantStats {
            move_speed: 0.0,
            ..match kind {
                StructureKind::Turret => config.structures.turret.clone(),
                StructureKind::Cradle => config.structures.cradle.clone(),
            }
        };
        let combatant = Combatant::new(id, team, CombatantKind::Structure(kind), position, stats);
        self.combatants.insert(id, combatant);
        id
    }

    pub fn spawn_projectile(&mut self, spec: ProjectileSpec) -> EntityId {
        let id = self.allocate_entity_id();
        let projectile = Projectile::from_spec(id, self.game_time, spec);
        self.projectiles.insert(id, projectile);
        id
    }

    pub fn spawn_zone(
        &mut self,
        owner: EntityId,
        team: Team,
        position: Position,
        descriptor: &ZoneDescriptor,
    ) -> EntityId {
        let id = self.allocate_entity_id();
        let zone = Zone::from_descriptor(id, owner, team, position, self.game_time, descriptor);
        self.zones.insert(id, zone);
        id
    }

    /// Whether `id` is a live combatant hostile to `team`.
    pub fn is_valid_target(&self, id: EntityId, team: Team) -> bool {
        self.combatant(id)
            .is_some_and(|target| target.is_alive() && target.team != team)
    }

    /// Live enemies of `team` whose edge lies within `radius` of `center`,
    /// paired with their center distance, in id order.
    pub fn enemies_within(
        &self,
        team: Team,
        center: Position,
        radius: f64,
    ) -> Vec<(EntityId, f64)> {
        self.combatants
            .values()
            .filter(|candidate| candidate.is_alive() && candidate.team != team)
            .filter_map(|candidate| {
                let distance = center.distance(candidate.position);
                (distance <= radius + candidate.size()).then_some((candidate.id, distance))
            })
            .collect()
    }

    /// Nearest enemy within `radius + size`; ties go to the lowest id.
    pub fn nearest_enemy_within(
        &self,
        team: Team,
        center: Position,
        radius: f64,
    ) -> Option<EntityId> {
        self.enemies_within(team, center, radius)
            .into_iter()
            .fold(None, |best: Option<(EntityId, f64)>, (id, distance)| match best {
                Some((_, best_distance)) if best_distance <= distance => best,
                _ => Some((id, distance)),
            })
            .map(|(id, _)| id)
    }

    pub fn round_stats_mut(&mut self, id: EntityId) -> Option<&mut RoundStats> {
        self.round_stats.get_mut(&id)
    }

    /// Uniform draw in `[0, 1)` for `entity`, advancing the draw counter.
    pub fn roll_unit(&mut self, entity: EntityId, context: u32) -> f64 {
        let seed = compute_seed(self.game_seed, self.rng_nonce, entity.0, context);
        self.rng_nonce += 1;
        PcgRng.unit(seed)
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

//! Projectile flight and hit resolution.
//!
//! Each tick a projectile moves `speed * dt`, then the following checks run
//! in order: duration expiry, map bounds, range, destination, collision. The
//! first check that fires decides the projectile's fate; expiry, bounds and
//! range remove it with no side effects, while destination and collision
//! trigger its hit effects first.

use super::{apply_hit_effects, owner_team};
use crate::config::GameplayConfig;
use crate::engine::SimError;
use crate::state::{EntityId, GameState, Position, Projectile, ProjectileBound};

/// What happened to a projectile this tick.
#[derive(Clone, Debug, PartialEq)]
enum Flight {
    Flying,
    Expired,
    /// Triggered at `at`, hitting `targets` (possibly none).
    Triggered { at: Position, targets: Vec<EntityId> },
}

/// Advances every projectile by `dt` milliseconds.
pub fn update_projectiles(state: &mut GameState, config: &GameplayConfig, dt: u64) {
    let ids: Vec<EntityId> = state.projectiles.keys().copied().collect();
    for id in ids {
        if let Err(err) = update_projectile(state, config, id, dt) {
            tracing::warn!(projectile = %id, %err, "projectile dropped");
            state.projectiles.remove(&id);
        }
    }
}

fn update_projectile(
    state: &mut GameState,
    config: &GameplayConfig,
    id: EntityId,
    dt: u64,
) -> Result<(), SimError> {
    let now = state.game_time;
    let projectile = state
        .projectiles
        .get_mut(&id)
        .ok_or(SimError::MissingEntity(id))?;
    let previous = projectile.position;
    let step = projectile.speed * dt as f64 / 1_000.0;
    projectile.position = previous + projectile.direction.scale(step);

    let snapshot = projectile.clone();
    if owner_team(state, snapshot.owner).is_none() {
        return Err(SimError::MissingOwner {
            entity: id,
            owner: snapshot.owner,
        });
    }

    match resolve_flight(state, config, &snapshot, previous, step, now) {
        Flight::Flying => Ok(()),
        Flight::Expired => {
            state.projectiles.remove(&id);
            Ok(())
        }
        Flight::Triggered { at, targets } => {
            state.projectiles.remove(&id);
            for target in &targets {
                tracing::trace!(projectile = %id, %target, kind = %snapshot.kind, "projectile hit");
                apply_hit_effects(state, config, snapshot.owner, *target, &snapshot.effects);
            }
            if let Some(zone) = &snapshot.zone {
                state.spawn_zone(snapshot.owner, snapshot.team, at, zone);
            }
            Ok(())
        }
    }
}

fn resolve_flight(
    state: &GameState,
    config: &GameplayConfig,
    projectile: &Projectile,
    previous: Position,
    step: f64,
    now: u64,
) -> Flight {
    if projectile.is_expired(now) {
        return Flight::Expired;
    }
    if !config.map.contains(projectile.position) {
        return Flight::Expired;
    }
    match projectile.bound {
        ProjectileBound::Free => {}
        ProjectileBound::Range { start, range } => {
            if start.distance(projectile.position) > range {
                return Flight::Expired;
            }
        }
        ProjectileBound::Destination(destination) => {
            // Also catches stepping past the destination within one tick.
            if previous.distance(destination) <= step {
                return Flight::Triggered {
                    at: destination,
                    targets: area_targets(state, projectile, destination),
                };
            }
        }
    }

    if !projectile.collides {
        return Flight::Flying;
    }
    let targets = match projectile.aoe_radius {
        Some(_) => area_targets(state, projectile, projectile.position),
        None => state
            .nearest_enemy_within(projectile.team, projectile.position, projectile.radius)
            .into_iter()
            .collect(),
    };
    if targets.is_empty() {
        Flight::Flying
    } else {
        Flight::Triggered {
            at: projectile.position,
            targets,
        }
    }
}

/// Every live enemy within the projectile's AOE radius of `center`.
/// Non-AOE projectiles hit nothing on arrival.
fn area_targets(state: &GameState, projectile: &Projectile, center: Position) -> Vec<EntityId> {
    match projectile.aoe_radius {
        Some(radius) => state
            .enemies_within(projectile.team, center, radius)
            .into_iter()
            .map(|(id, _)| id)
            .collect(),
        None => Vec::new(),
    }
}

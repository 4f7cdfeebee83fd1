//! Attack rolls and damage resolution.

use super::{FrameContext, GameEvent};
use crate::env::{RngOracle, compute_seed, rng_context};
use crate::state::{EntitiesState, EntityId, PlayerState, UnitRole, UnitState};

/// Rolls an attack's damage.
///
/// A ready unit restarts its cooldown and rolls uniformly in `[0, damage]`.
/// A unit still cooling down deals 0 and keeps its timer.
pub fn roll_attack<R>(unit: &mut UnitState, ctx: &FrameContext, rng: &R) -> u32
where
    R: RngOracle + ?Sized,
{
    if !unit.is_ready() {
        return 0;
    }
    unit.cooldown_elapsed = 0;
    let seed = compute_seed(ctx.game_seed, ctx.nonce, unit.id.0, rng_context::DAMAGE);
    rng.range(seed, 0, unit.stats.damage)
}

fn as_hp(damage: u32) -> i32 {
    i32::try_from(damage).unwrap_or(i32::MAX)
}

/// Applies a blow to a non-player unit, removing it when its health drops below one.
pub fn strike_unit(
    entities: &mut EntitiesState,
    target: EntityId,
    attacker: EntityId,
    damage: u32,
    events: &mut Vec<GameEvent>,
) {
    let Some(unit) = entities.units.iter_mut().find(|unit| unit.id == target) else {
        return;
    };

    unit.stats.hp = unit.stats.hp.saturating_sub(as_hp(damage));
    if let UnitRole::Passive(passive) = &mut unit.role {
        passive.safe_elapsed = 0;
    }
    events.push(GameEvent::UnitAttacked {
        attacker,
        target,
        damage,
        remaining_hp: unit.stats.hp,
    });

    if !unit.stats.is_dead() {
        return;
    }
    if let Some(slain) = entities.remove_unit(target) {
        events.push(GameEvent::UnitSlain {
            unit: slain.id,
            name: slain.name,
            by: attacker,
        });
    }
}

/// Applies a blow to the player. A killing blow sends the player back to the
/// respawn point at full health.
pub fn strike_player(
    player: &mut PlayerState,
    attacker: EntityId,
    damage: u32,
    ctx: &FrameContext,
    events: &mut Vec<GameEvent>,
) {
    let unit = &mut player.unit;
    unit.stats.hp = unit.stats.hp.saturating_sub(as_hp(damage));
    events.push(GameEvent::UnitAttacked {
        attacker,
        target: unit.id,
        damage,
        remaining_hp: unit.stats.hp,
    });

    if unit.stats.is_dead() {
        unit.position = ctx.config.respawn;
        unit.stats.hp = unit.stats.max_hp;
        events.push(GameEvent::PlayerRespawned {
            position: unit.position,
        });
    }
}

/// The player swings at every monster in range.
///
/// Only the first swing of a ready player rolls damage; it consumes the
/// cooldown, so the remaining monsters take 0. Every monster is still struck,
/// which sends passive ones fleeing.
pub fn player_attack<R>(
    entities: &mut EntitiesState,
    ctx: &FrameContext,
    rng: &R,
    events: &mut Vec<GameEvent>,
) where
    R: RngOracle + ?Sized,
{
    let origin = entities.player.unit.position;
    let targets: Vec<EntityId> = entities
        .units_near(origin, ctx.config.interact_range)
        .into_iter()
        .filter(|id| entities.unit(*id).is_some_and(|unit| unit.kind().is_monster()))
        .collect();

    for target in targets {
        let damage = roll_attack(&mut entities.player.unit, ctx, rng);
        strike_unit(entities, target, EntityId::PLAYER, damage, events);
    }
}

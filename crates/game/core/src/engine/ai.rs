//! Per-frame monster and villager behaviour.
//!
//! Each function decides the movement direction for one unit and applies any
//! side effects (attacks, timers) before the unit is stepped.

use super::combat::{roll_attack, strike_player};
use super::{FrameContext, GameEvent};
use crate::env::{RngOracle, compute_seed, rng_context};
use crate::state::{
    Direction, EntityId, PassiveState, PlayerState, Position, UnitState, VillagerState,
};

/// Chase the player inside `walk_range`, strike inside `attack_range`.
pub fn aggressive<R>(
    unit: &mut UnitState,
    player: &mut PlayerState,
    ctx: &FrameContext,
    rng: &R,
    events: &mut Vec<GameEvent>,
) -> Direction
where
    R: RngOracle + ?Sized,
{
    let target = player.unit.position;
    let distance = unit.position.distance(target);

    if distance > ctx.config.attack_range && distance <= ctx.config.walk_range {
        Direction::toward(unit.position, target, distance, 1.0)
    } else {
        // Blows on cooldown deal 0 and are not reported.
        if distance <= ctx.config.attack_range && unit.is_ready() {
            let damage = roll_attack(unit, ctx, rng);
            strike_player(player, unit.id, damage, ctx, events);
        }
        Direction::ZERO
    }
}

/// Flee from the player after being hit, otherwise wander on a timer.
pub fn passive<R>(
    id: EntityId,
    position: Position,
    passive: &mut PassiveState,
    player: &PlayerState,
    ctx: &FrameContext,
    rng: &R,
) -> Direction
where
    R: RngOracle + ?Sized,
{
    let config = &ctx.config;
    if passive.is_fleeing(config.safe_time) {
        passive.safe_elapsed = passive
            .safe_elapsed
            .saturating_add(ctx.delta)
            .min(config.safe_time);
        let target = player.unit.position;
        let distance = position.distance(target);
        return Direction::toward(position, target, distance, -1.0);
    }

    if passive.wander_elapsed < config.wander_time {
        passive.wander_elapsed = passive.wander_elapsed.saturating_add(ctx.delta);
    } else {
        passive.wander_elapsed = 0;
        let seed_x = compute_seed(ctx.game_seed, ctx.nonce, id.0, rng_context::WANDER_X);
        let seed_y = compute_seed(ctx.game_seed, ctx.nonce, id.0, rng_context::WANDER_Y);
        passive.wander = Direction::new(rng.sign(seed_x), rng.sign(seed_y));
    }
    passive.wander
}

/// Advances a villager's talk timer; a line that has been up for `talk_time`
/// is cleared on the following frame.
pub fn villager(villager: &mut VillagerState, ctx: &FrameContext) {
    let talk_time = ctx.config.talk_time;
    if villager.is_talking(talk_time) {
        villager.talk_elapsed = villager
            .talk_elapsed
            .saturating_add(ctx.delta)
            .min(talk_time);
    } else {
        villager.dialogue = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::PcgRng;
    use crate::state::{UnitRole, UnitStats};

    fn ctx(delta: u32) -> FrameContext {
        FrameContext {
            game_seed: 5,
            nonce: 1,
            delta,
            config: GameConfig::default(),
        }
    }

    fn player_at(x: f64, y: f64) -> PlayerState {
        PlayerState::new(UnitState::new(
            EntityId::PLAYER,
            "Player",
            Position::new(x, y),
            UnitStats::new(100, 10, 600, 0.25),
            UnitRole::Player,
        ))
    }

    fn bandit() -> UnitState {
        UnitState::new(
            EntityId(4),
            "Bandit",
            Position::new(0.0, 0.0),
            UnitStats::new(40, 10, 800, 0.25),
            UnitRole::Aggressive,
        )
    }

    #[test]
    fn aggressive_chases_inside_walk_range() {
        let mut unit = bandit();
        let mut player = player_at(100.0, 0.0);
        let mut events = Vec::new();
        let direction = aggressive(&mut unit, &mut player, &ctx(16), &PcgRng, &mut events);
        assert_eq!(direction, Direction::new(1.0, 0.0));
        assert!(events.is_empty());
    }

    #[test]
    fn aggressive_ignores_distant_players() {
        let mut unit = bandit();
        let mut player = player_at(151.0, 0.0);
        let mut events = Vec::new();
        let direction = aggressive(&mut unit, &mut player, &ctx(16), &PcgRng, &mut events);
        assert_eq!(direction, Direction::ZERO);
        assert!(events.is_empty());
    }

    #[test]
    fn aggressive_attacks_at_attack_range() {
        let mut unit = bandit();
        let mut player = player_at(50.0, 0.0);
        let mut events = Vec::new();
        let direction = aggressive(&mut unit, &mut player, &ctx(16), &PcgRng, &mut events);
        assert_eq!(direction, Direction::ZERO);
        assert!(matches!(
            events.first(),
            Some(GameEvent::UnitAttacked { target: EntityId::PLAYER, .. })
        ));
        assert_eq!(unit.cooldown_elapsed, 0);
    }

    #[test]
    fn passive_flees_then_counts_safe_time() {
        let unit = bandit();
        let player = player_at(0.0, 30.0);
        let config = GameConfig::default();
        let mut state = PassiveState::calm(config.wander_time, config.safe_time);
        state.safe_elapsed = 0;

        let direction = passive(unit.id, unit.position, &mut state, &player, &ctx(1000), &PcgRng);
        assert_eq!(direction, Direction::new(0.0, -1.0));
        assert_eq!(state.safe_elapsed, 1000);

        state.safe_elapsed = config.safe_time - 10;
        passive(unit.id, unit.position, &mut state, &player, &ctx(1000), &PcgRng);
        assert_eq!(state.safe_elapsed, config.safe_time);
    }

    #[test]
    fn passive_keeps_wander_direction_until_timer_expires() {
        let unit = bandit();
        let player = player_at(500.0, 500.0);
        let config = GameConfig::default();
        let mut state = PassiveState::calm(config.wander_time, config.safe_time);

        let first = passive(unit.id, unit.position, &mut state, &player, &ctx(16), &PcgRng);
        assert_eq!(state.wander_elapsed, 0);
        assert!([-1.0, 0.0, 1.0].contains(&first.dx));
        assert!([-1.0, 0.0, 1.0].contains(&first.dy));

        let second = passive(unit.id, unit.position, &mut state, &player, &ctx(16), &PcgRng);
        assert_eq!(second, first);
        assert_eq!(state.wander_elapsed, 16);
    }

    #[test]
    fn villager_line_clears_after_talk_time() {
        let mut state = VillagerState {
            dialogue: Some("Hello".into()),
            talk_elapsed: 3990,
        };
        villager(&mut state, &ctx(16));
        assert_eq!(state.talk_elapsed, 4000);
        assert!(state.dialogue.is_some());

        villager(&mut state, &ctx(16));
        assert!(state.dialogue.is_none());
    }
}

//! Units: the player, monsters and villagers.
//!
//! Every unit shares movement and combat stats; behaviour that differs per
//! kind lives in the [`UnitRole`] payload.

use strum::{Display, EnumIter};

use super::{Direction, EntityId, Facing, Position};

/// Payload-free discriminant of [`UnitRole`], used by templates and views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitKind {
    Player,
    Villager,
    AggressiveMonster,
    PassiveMonster,
}

impl UnitKind {
    pub fn is_monster(self) -> bool {
        matches!(self, Self::AggressiveMonster | Self::PassiveMonster)
    }
}

/// Movement and combat attributes.
///
/// `hp` is signed: a blow may push it below zero before the death check runs.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitStats {
    pub hp: i32,
    pub max_hp: i32,
    /// Upper bound of a damage roll.
    pub damage: u32,
    /// Milliseconds between attacks.
    pub cooldown: u32,
    /// Pixels per millisecond.
    pub speed: f64,
}

impl UnitStats {
    /// Stats at full health.
    pub fn new(max_hp: i32, damage: u32, cooldown: u32, speed: f64) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            damage,
            cooldown,
            speed,
        }
    }

    pub fn is_full_health(&self) -> bool {
        self.hp >= self.max_hp
    }

    pub fn is_dead(&self) -> bool {
        self.hp < 1
    }

    /// Health as a fraction of maximum, clamped to `[0, 1]`.
    pub fn health_ratio(&self) -> f64 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        (f64::from(self.hp) / f64::from(self.max_hp)).clamp(0.0, 1.0)
    }
}

/// Dialogue bookkeeping for a villager.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VillagerState {
    /// Line currently shown above the villager.
    pub dialogue: Option<String>,
    /// Time since the villager last started talking.
    pub talk_elapsed: u32,
}

impl VillagerState {
    /// A villager that is silent and ready to talk.
    pub fn idle(talk_time: u32) -> Self {
        Self {
            dialogue: None,
            talk_elapsed: talk_time,
        }
    }

    pub fn is_talking(&self, talk_time: u32) -> bool {
        self.talk_elapsed < talk_time
    }
}

/// Timers for a passive monster's wander/flee behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveState {
    pub wander: Direction,
    pub wander_elapsed: u32,
    /// Time since the monster was last hit; it flees until this reaches `safe_time`.
    pub safe_elapsed: u32,
}

impl PassiveState {
    /// A monster that feels safe and will choose a wander direction on its next frame.
    pub fn calm(wander_time: u32, safe_time: u32) -> Self {
        Self {
            wander: Direction::ZERO,
            wander_elapsed: wander_time,
            safe_elapsed: safe_time,
        }
    }

    pub fn is_fleeing(&self, safe_time: u32) -> bool {
        self.safe_elapsed < safe_time
    }
}

/// Per-kind behaviour state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitRole {
    Player,
    Villager(VillagerState),
    Aggressive,
    Passive(PassiveState),
}

impl UnitRole {
    pub fn kind(&self) -> UnitKind {
        match self {
            Self::Player => UnitKind::Player,
            Self::Villager(_) => UnitKind::Villager,
            Self::Aggressive => UnitKind::AggressiveMonster,
            Self::Passive(_) => UnitKind::PassiveMonster,
        }
    }
}

/// A unit living in the world.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitState {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub facing: Facing,
    pub stats: UnitStats,
    /// Time since the last attack, capped at `stats.cooldown`.
    pub cooldown_elapsed: u32,
    pub role: UnitRole,
}

impl UnitState {
    /// Creates a unit that is ready to attack immediately.
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        position: Position,
        stats: UnitStats,
        role: UnitRole,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            facing: Facing::default(),
            cooldown_elapsed: stats.cooldown,
            stats,
            role,
        }
    }

    pub fn kind(&self) -> UnitKind {
        self.role.kind()
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown_elapsed >= self.stats.cooldown
    }

    /// Advances the attack cooldown, never past the full period.
    pub fn tick_cooldown(&mut self, delta: u32) {
        self.cooldown_elapsed = self
            .cooldown_elapsed
            .saturating_add(delta)
            .min(self.stats.cooldown);
    }

    /// Current dialogue line, for villagers that are speaking.
    pub fn dialogue(&self) -> Option<&str> {
        match &self.role {
            UnitRole::Villager(villager) => villager.dialogue.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(cooldown: u32) -> UnitState {
        UnitState::new(
            EntityId(1),
            "Bandit",
            Position::ORIGIN,
            UnitStats::new(40, 8, cooldown, 0.25),
            UnitRole::Aggressive,
        )
    }

    #[test]
    fn new_units_start_ready_at_full_health() {
        let unit = unit(600);
        assert!(unit.is_ready());
        assert!(unit.stats.is_full_health());
        assert_eq!(unit.kind(), UnitKind::AggressiveMonster);
    }

    #[test]
    fn cooldown_is_capped_at_its_period() {
        let mut unit = unit(600);
        unit.cooldown_elapsed = 0;
        unit.tick_cooldown(400);
        assert!(!unit.is_ready());
        unit.tick_cooldown(400);
        assert_eq!(unit.cooldown_elapsed, 600);
        assert!(unit.is_ready());
    }

    #[test]
    fn health_ratio_clamps_overkill() {
        let mut stats = UnitStats::new(100, 10, 500, 0.2);
        stats.hp = -15;
        assert_eq!(stats.health_ratio(), 0.0);
        assert!(stats.is_dead());
    }
}

//! Unit templates and their oracle.
//!
//! Templates are keyed by a short string (`"player"`, `"bandit"`, `"elvira"`)
//! and turned into live [`UnitState`]s when a scenario is instantiated.

use crate::config::GameConfig;
use crate::state::{
    EntityId, PassiveState, Position, UnitKind, UnitRole, UnitState, UnitStats, VillagerState,
};

/// Provides unit templates by key.
pub trait UnitOracle: Send + Sync {
    fn template(&self, key: &str) -> Option<UnitTemplate>;
}

/// Data needed to spawn one unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitTemplate {
    pub kind: UnitKind,
    pub name: String,
    pub max_hp: i32,
    pub damage: u32,
    pub cooldown: u32,
}

impl UnitTemplate {
    pub fn new(
        kind: UnitKind,
        name: impl Into<String>,
        max_hp: i32,
        damage: u32,
        cooldown: u32,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            max_hp,
            damage,
            cooldown,
        }
    }

    /// Builds a unit at full health with speed and role timers taken from `config`.
    ///
    /// The returned unit carries a placeholder ID; callers assign the real one.
    pub fn instantiate(&self, position: Position, config: &GameConfig) -> UnitState {
        let stats = UnitStats::new(
            self.max_hp,
            self.damage,
            self.cooldown,
            config.speed_for(self.kind),
        );
        let role = match self.kind {
            UnitKind::Player => UnitRole::Player,
            UnitKind::Villager => UnitRole::Villager(VillagerState::idle(config.talk_time)),
            UnitKind::AggressiveMonster => UnitRole::Aggressive,
            UnitKind::PassiveMonster => {
                UnitRole::Passive(PassiveState::calm(config.wander_time, config.safe_time))
            }
        };
        UnitState::new(EntityId::PLAYER, self.name.clone(), position, stats, role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instantiate_uses_kind_speed_and_calm_timers() {
        let config = GameConfig::default();
        let template = UnitTemplate::new(UnitKind::PassiveMonster, "Deer", 30, 0, 1000);
        let unit = template.instantiate(Position::new(5.0, 6.0), &config);

        assert_eq!(unit.stats.hp, 30);
        assert_eq!(unit.stats.speed, config.passive_speed);
        match unit.role {
            UnitRole::Passive(passive) => {
                assert!(!passive.is_fleeing(config.safe_time));
                assert_eq!(passive.wander_elapsed, config.wander_time);
            }
            other => panic!("unexpected role {other:?}"),
        }
    }

    #[test]
    fn villagers_never_move() {
        let config = GameConfig::default();
        let template = UnitTemplate::new(UnitKind::Villager, "Elvira", 1, 0, 0);
        let unit = template.instantiate(Position::ORIGIN, &config);
        assert_eq!(unit.stats.speed, 0.0);
        assert_eq!(unit.dialogue(), None);
    }
}

//! Item pickup and villager conversations.

use super::{ExecuteError, FrameContext, GameEvent};
use crate::env::{DialogueOracle, ItemEffect, ItemOracle, VillagerScript};
use crate::state::{EntitiesState, EntityId, PlayerState, UnitRole, UnitState};

/// Collects every item within reach while the inventory has room.
pub fn collect_items<I>(
    entities: &mut EntitiesState,
    ctx: &FrameContext,
    items: &I,
    events: &mut Vec<GameEvent>,
) -> Result<(), ExecuteError>
where
    I: ItemOracle + ?Sized,
{
    let origin = entities.player.unit.position;
    for id in entities.items_near(origin, ctx.config.interact_range) {
        if entities.player.inventory.is_full() {
            break;
        }
        let Some(item) = entities.items.iter().find(|item| item.id == id).copied() else {
            continue;
        };
        let definition = items
            .definition(item.handle)
            .ok_or_else(|| ExecuteError::item_definition_missing(item.id, item.handle, ctx.nonce))?;

        entities.remove_item(item.id);
        entities.player.inventory.push(item.handle)?;
        apply_effect(&mut entities.player.unit, definition.effect);

        events.push(GameEvent::ItemCollected {
            item: item.id,
            handle: item.handle,
            name: definition.name,
            effect: definition.effect,
        });
    }
    Ok(())
}

fn apply_effect(player: &mut UnitState, effect: ItemEffect) {
    let stats = &mut player.stats;
    match effect {
        ItemEffect::MaxHealth(amount) => {
            stats.max_hp = stats.max_hp.saturating_add(amount);
            stats.hp = stats.hp.saturating_add(amount);
        }
        ItemEffect::Damage(amount) => stats.damage = stats.damage.saturating_add(amount),
        ItemEffect::CooldownReduction(amount) => {
            stats.cooldown = stats.cooldown.saturating_sub(amount);
            player.cooldown_elapsed = player.cooldown_elapsed.min(stats.cooldown);
        }
        ItemEffect::Quest => {}
    }
}

/// Talks to every villager within reach whose previous line has expired.
pub fn talk_to_villagers<D>(
    entities: &mut EntitiesState,
    ctx: &FrameContext,
    dialogue: &D,
    events: &mut Vec<GameEvent>,
) where
    D: DialogueOracle + ?Sized,
{
    let origin = entities.player.unit.position;
    for id in entities.units_near(origin, ctx.config.interact_range) {
        let Some(unit) = entities.unit(id) else {
            continue;
        };
        let UnitRole::Villager(villager) = &unit.role else {
            continue;
        };
        if villager.is_talking(ctx.config.talk_time) {
            continue;
        }
        let Some(script) = dialogue.script(&unit.name) else {
            continue;
        };
        let quest_item_in_world = match &script {
            VillagerScript::QuestGiver { wants, .. } => entities.contains_item(*wants),
            _ => false,
        };

        let line = respond(&script, id, &mut entities.player, quest_item_in_world, events);
        let Some(unit) = entities.unit_mut(id) else {
            continue;
        };
        if let UnitRole::Villager(villager) = &mut unit.role {
            villager.dialogue = Some(line.clone());
            villager.talk_elapsed = 0;
        }
        events.push(GameEvent::VillagerSpoke {
            villager: id,
            name: unit.name.clone(),
            line,
        });
    }
}

/// Chooses a villager's line and applies its side effects to the player.
fn respond(
    script: &VillagerScript,
    villager: EntityId,
    player: &mut PlayerState,
    quest_item_in_world: bool,
    events: &mut Vec<GameEvent>,
) -> String {
    match script {
        VillagerScript::Healer {
            full_health,
            healed,
        } => {
            let stats = &mut player.unit.stats;
            if stats.is_full_health() {
                return full_health.clone();
            }
            let amount = stats.max_hp - stats.hp;
            stats.hp = stats.max_hp;
            events.push(GameEvent::PlayerHealed {
                by: villager,
                amount,
            });
            healed.clone()
        }
        VillagerScript::QuestGiver {
            wants,
            delivered,
            waiting,
        } => {
            if player.inventory.remove(*wants).is_ok() {
                events.push(GameEvent::QuestItemDelivered {
                    villager,
                    handle: *wants,
                });
                delivered.clone()
            } else if !quest_item_in_world {
                delivered.clone()
            } else {
                waiting.clone()
            }
        }
        VillagerScript::Guide { hints, complete } => hints
            .iter()
            .find(|(handle, _)| !player.inventory.contains(*handle))
            .map(|(_, hint)| hint.clone())
            .unwrap_or_else(|| complete.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::ItemDefinition;
    use crate::state::{ItemHandle, ItemState, Position, UnitStats, VillagerState};

    struct Catalog;

    impl ItemOracle for Catalog {
        fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
            let (name, effect) = match handle.0 {
                0 => ("Amulet of Vitality", ItemEffect::MaxHealth(80)),
                1 => ("Sword of Strength", ItemEffect::Damage(30)),
                2 => ("Tome of Agility", ItemEffect::CooldownReduction(300)),
                3 => ("Elixir of Life", ItemEffect::Quest),
                _ => return None,
            };
            Some(ItemDefinition::new(handle, name, effect))
        }

        fn all_definitions(&self) -> Vec<ItemDefinition> {
            (0..4).filter_map(|i| self.definition(ItemHandle(i))).collect()
        }
    }

    struct Scripts;

    impl DialogueOracle for Scripts {
        fn script(&self, villager: &str) -> Option<VillagerScript> {
            match villager {
                "Elvira" => Some(VillagerScript::Healer {
                    full_health: "Return to me if you ever need healing.".into(),
                    healed: "You're looking much healthier now.".into(),
                }),
                "Prince Aldric" => Some(VillagerScript::QuestGiver {
                    wants: ItemHandle(3),
                    delivered: "The elixir! My father is cured! Thankyou!".into(),
                    waiting: "Please seek out the Elixir of Life to cure the king.".into(),
                }),
                "Garth" => Some(VillagerScript::Guide {
                    hints: vec![
                        (ItemHandle(0), "amulet".into()),
                        (ItemHandle(1), "sword".into()),
                        (ItemHandle(2), "tome".into()),
                    ],
                    complete: "all found".into(),
                }),
                _ => None,
            }
        }
    }

    fn ctx() -> FrameContext {
        FrameContext {
            game_seed: 0,
            nonce: 0,
            delta: 16,
            config: GameConfig::default(),
        }
    }

    fn world() -> EntitiesState {
        let player = UnitState::new(
            EntityId::PLAYER,
            "Player",
            Position::new(500.0, 500.0),
            UnitStats::new(100, 20, 600, 0.25),
            UnitRole::Player,
        );
        EntitiesState::new(PlayerState::new(player))
    }

    fn add_villager(entities: &mut EntitiesState, id: u32, name: &str) {
        entities.units.push(UnitState::new(
            EntityId(id),
            name,
            Position::new(510.0, 500.0),
            UnitStats::new(1, 0, 0, 0.0),
            UnitRole::Villager(VillagerState::idle(GameConfig::DEFAULT_TALK_TIME)),
        ));
    }

    fn line_of(entities: &EntitiesState, id: u32) -> Option<String> {
        entities
            .unit(EntityId(id))
            .and_then(|unit| unit.dialogue())
            .map(str::to_owned)
    }

    #[test]
    fn pickup_applies_item_effects() {
        let mut entities = world();
        for (id, handle) in [(10, 0), (11, 1), (12, 2), (13, 3)] {
            entities.items.push(ItemState::new(
                EntityId(id),
                ItemHandle(handle),
                Position::new(520.0, 500.0),
            ));
        }
        let mut events = Vec::new();
        collect_items(&mut entities, &ctx(), &Catalog, &mut events).unwrap();

        let stats = entities.player.unit.stats;
        assert_eq!((stats.hp, stats.max_hp), (180, 180));
        assert_eq!(stats.damage, 50);
        assert_eq!(stats.cooldown, 300);
        assert!(entities.items.is_empty());
        assert_eq!(entities.player.inventory.len(), 4);
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn pickup_ignores_items_out_of_reach() {
        let mut entities = world();
        entities.items.push(ItemState::new(
            EntityId(10),
            ItemHandle(0),
            Position::new(550.0, 500.0),
        ));
        let mut events = Vec::new();
        collect_items(&mut entities, &ctx(), &Catalog, &mut events).unwrap();
        assert_eq!(entities.items.len(), 1);
        assert!(events.is_empty());
    }

    #[test]
    fn full_inventory_leaves_items_on_the_ground() {
        let mut entities = world();
        for _ in 0..GameConfig::MAX_INVENTORY_SLOTS {
            entities.player.inventory.push(ItemHandle(3)).unwrap();
        }
        entities.items.push(ItemState::new(
            EntityId(10),
            ItemHandle(1),
            Position::new(510.0, 500.0),
        ));
        let before = entities.player.unit.stats;

        let mut events = Vec::new();
        collect_items(&mut entities, &ctx(), &Catalog, &mut events).unwrap();

        assert_eq!(entities.items.len(), 1);
        assert!(entities.contains_item(ItemHandle(1)));
        assert!(events.is_empty());
        assert_eq!(entities.player.unit.stats, before);
        assert_eq!(
            entities.player.inventory.len(),
            GameConfig::MAX_INVENTORY_SLOTS
        );
    }

    #[test]
    fn unknown_item_definition_is_an_error() {
        let mut entities = world();
        entities.items.push(ItemState::new(
            EntityId(10),
            ItemHandle(42),
            Position::new(500.0, 500.0),
        ));
        let result = collect_items(&mut entities, &ctx(), &Catalog, &mut Vec::new());
        assert!(matches!(
            result,
            Err(ExecuteError::ItemDefinitionMissing { handle: ItemHandle(42), .. })
        ));
    }

    #[test]
    fn tome_never_underflows_cooldown() {
        let mut unit = world().player.unit;
        unit.stats.cooldown = 200;
        apply_effect(&mut unit, ItemEffect::CooldownReduction(300));
        assert_eq!(unit.stats.cooldown, 0);
        assert!(unit.is_ready());
    }

    #[test]
    fn healer_restores_health_once() {
        let mut entities = world();
        add_villager(&mut entities, 1, "Elvira");
        entities.player.unit.stats.hp = 40;

        let mut events = Vec::new();
        talk_to_villagers(&mut entities, &ctx(), &Scripts, &mut events);
        assert_eq!(entities.player.unit.stats.hp, 100);
        assert_eq!(
            line_of(&entities, 1).as_deref(),
            Some("You're looking much healthier now.")
        );
        assert!(events.contains(&GameEvent::PlayerHealed {
            by: EntityId(1),
            amount: 60
        }));

        // still talking: a second request is ignored
        events.clear();
        talk_to_villagers(&mut entities, &ctx(), &Scripts, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn healer_at_full_health_only_talks() {
        let mut entities = world();
        add_villager(&mut entities, 1, "Elvira");
        talk_to_villagers(&mut entities, &ctx(), &Scripts, &mut Vec::new());
        assert_eq!(
            line_of(&entities, 1).as_deref(),
            Some("Return to me if you ever need healing.")
        );
    }

    #[test]
    fn quest_giver_takes_the_elixir() {
        let mut entities = world();
        add_villager(&mut entities, 1, "Prince Aldric");
        entities.player.inventory.push(ItemHandle(3)).unwrap();

        let mut events = Vec::new();
        talk_to_villagers(&mut entities, &ctx(), &Scripts, &mut events);
        assert!(!entities.player.inventory.contains(ItemHandle(3)));
        assert_eq!(
            line_of(&entities, 1).as_deref(),
            Some("The elixir! My father is cured! Thankyou!")
        );
        assert!(events.contains(&GameEvent::QuestItemDelivered {
            villager: EntityId(1),
            handle: ItemHandle(3)
        }));
    }

    #[test]
    fn quest_giver_waits_while_elixir_lies_in_the_world() {
        let mut entities = world();
        add_villager(&mut entities, 1, "Prince Aldric");
        entities.items.push(ItemState::new(
            EntityId(9),
            ItemHandle(3),
            Position::new(2000.0, 2000.0),
        ));
        talk_to_villagers(&mut entities, &ctx(), &Scripts, &mut Vec::new());
        assert_eq!(
            line_of(&entities, 1).as_deref(),
            Some("Please seek out the Elixir of Life to cure the king.")
        );
    }

    #[test]
    fn quest_giver_is_satisfied_once_elixir_is_gone() {
        let mut entities = world();
        add_villager(&mut entities, 1, "Prince Aldric");
        talk_to_villagers(&mut entities, &ctx(), &Scripts, &mut Vec::new());
        assert_eq!(
            line_of(&entities, 1).as_deref(),
            Some("The elixir! My father is cured! Thankyou!")
        );
    }

    #[test]
    fn guide_points_to_the_first_missing_item() {
        let mut entities = world();
        add_villager(&mut entities, 1, "Garth");
        entities.player.inventory.push(ItemHandle(0)).unwrap();
        talk_to_villagers(&mut entities, &ctx(), &Scripts, &mut Vec::new());
        assert_eq!(line_of(&entities, 1).as_deref(), Some("sword"));

        let mut entities = world();
        add_villager(&mut entities, 1, "Garth");
        for handle in 0..3 {
            entities.player.inventory.push(ItemHandle(handle)).unwrap();
        }
        talk_to_villagers(&mut entities, &ctx(), &Scripts, &mut Vec::new());
        assert_eq!(line_of(&entities, 1).as_deref(), Some("all found"));
    }

    #[test]
    fn villagers_without_a_script_stay_silent() {
        let mut entities = world();
        add_villager(&mut entities, 1, "Stranger");
        let mut events = Vec::new();
        talk_to_villagers(&mut entities, &ctx(), &Scripts, &mut events);
        assert!(events.is_empty());
        assert_eq!(line_of(&entities, 1), None);
    }
}

//! Human-readable text for game events.

use std::collections::HashMap;

use game_core::{EntityId, GameEvent, GameState, ItemEffect, ItemHandle, ItemOracle};

use crate::message::MessageLevel;

/// Display names for units and items referenced by events.
///
/// Units that die are removed from the state in the same frame that reports
/// the killing blow, so names are remembered rather than looked up live.
#[derive(Clone, Debug, Default)]
pub struct NameBook {
    units: HashMap<EntityId, String>,
    items: HashMap<ItemHandle, String>,
}

impl NameBook {
    pub fn new<I>(state: &GameState, items: &I) -> Self
    where
        I: ItemOracle + ?Sized,
    {
        let mut book = Self {
            units: HashMap::new(),
            items: items
                .all_definitions()
                .into_iter()
                .map(|def| (def.handle, def.name))
                .collect(),
        };
        book.remember(state);
        book
    }

    /// Records the names of every unit currently alive.
    pub fn remember(&mut self, state: &GameState) {
        for unit in state.entities.units.iter() {
            self.units
                .entry(unit.id)
                .or_insert_with(|| unit.name.clone());
        }
    }

    pub fn unit(&self, id: EntityId) -> &str {
        if id.is_player() {
            return "you";
        }
        self.units.get(&id).map_or("someone", String::as_str)
    }

    pub fn item(&self, handle: ItemHandle) -> &str {
        self.items.get(&handle).map_or("item", String::as_str)
    }
}

/// Message text and style for an event.
pub fn describe(event: &GameEvent, names: &NameBook) -> (String, MessageLevel) {
    match event {
        GameEvent::ItemCollected { name, effect, .. } => {
            let text = match effect {
                ItemEffect::MaxHealth(amount) => {
                    format!("You picked up the {name} (+{amount} max HP).")
                }
                ItemEffect::Damage(amount) => format!("You picked up the {name} (+{amount} damage)."),
                ItemEffect::CooldownReduction(amount) => {
                    format!("You picked up the {name} (-{amount} ms cooldown).")
                }
                ItemEffect::Quest => format!("You picked up the {name}."),
            };
            (text, MessageLevel::Info)
        }
        GameEvent::UnitAttacked {
            attacker,
            target,
            damage,
            remaining_hp,
        } => {
            let text = match (attacker.is_player(), *damage) {
                (true, 0) => format!("You miss the {}.", names.unit(*target)),
                (true, damage) => format!(
                    "You hit the {} for {damage} ({} HP left).",
                    names.unit(*target),
                    (*remaining_hp).max(0)
                ),
                (false, 0) => format!("The {} misses you.", names.unit(*attacker)),
                (false, damage) => {
                    format!("The {} hits you for {damage}.", names.unit(*attacker))
                }
            };
            (text, MessageLevel::Combat)
        }
        GameEvent::UnitSlain { name, by, .. } => {
            let text = if by.is_player() {
                format!("You defeated the {name}.")
            } else {
                format!("The {name} is slain.")
            };
            (text, MessageLevel::Combat)
        }
        GameEvent::PlayerRespawned { .. } => (
            "You were slain, and wake up back in the village.".to_string(),
            MessageLevel::Warning,
        ),
        GameEvent::VillagerSpoke { name, line, .. } => {
            (format!("{name}: \"{line}\""), MessageLevel::Dialogue)
        }
        GameEvent::PlayerHealed { by, amount } => (
            format!("{} restores {amount} HP.", capitalize(names.unit(*by))),
            MessageLevel::Info,
        ),
        GameEvent::QuestItemDelivered { villager, handle } => (
            format!(
                "You hand the {} to {}.",
                names.item(*handle),
                names.unit(*villager)
            ),
            MessageLevel::Info,
        ),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

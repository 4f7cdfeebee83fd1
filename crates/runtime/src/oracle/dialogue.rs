//! Villager scripts served through [`game_core::DialogueOracle`].

use std::collections::HashMap;

use game_core::{DialogueOracle, VillagerScript};

/// Scripts keyed by the villager's display name.
pub struct DialogueOracleImpl {
    scripts: HashMap<String, VillagerScript>,
}

impl DialogueOracleImpl {
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
        }
    }

    pub fn add(&mut self, villager: impl Into<String>, script: VillagerScript) {
        self.scripts.insert(villager.into(), script);
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

impl Default for DialogueOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>> FromIterator<(K, VillagerScript)> for DialogueOracleImpl {
    fn from_iter<T: IntoIterator<Item = (K, VillagerScript)>>(iter: T) -> Self {
        let mut oracle = Self::new();
        for (villager, script) in iter {
            oracle.add(villager, script);
        }
        oracle
    }
}

impl DialogueOracle for DialogueOracleImpl {
    fn script(&self, villager: &str) -> Option<VillagerScript> {
        self.scripts.get(villager).cloned()
    }
}

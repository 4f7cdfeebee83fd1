//! Unit oracle implementing [`game_core::UnitOracle`].

use std::collections::HashMap;

use game_core::{UnitOracle, UnitTemplate};

/// Oracle providing unit templates keyed by content id (`"zombie"`, `"player"`).
pub struct UnitOracleImpl {
    templates: HashMap<String, UnitTemplate>,
}

impl UnitOracleImpl {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    pub fn add(&mut self, key: impl Into<String>, template: UnitTemplate) {
        self.templates.insert(key.into(), template);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.templates.keys()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for UnitOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>> FromIterator<(K, UnitTemplate)> for UnitOracleImpl {
    fn from_iter<T: IntoIterator<Item = (K, UnitTemplate)>>(iter: T) -> Self {
        let mut oracle = Self::new();
        for (key, template) in iter {
            oracle.add(key, template);
        }
        oracle
    }
}

impl UnitOracle for UnitOracleImpl {
    fn template(&self, key: &str) -> Option<UnitTemplate> {
        self.templates.get(key).cloned()
    }
}

//! Builds the runtime, oracles, and config bundle used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use game_content::ContentFactory;
use runtime::{Runtime, Scenario};

use crate::config::BootstrapConfig;
use crate::oracles::{ContentOracleFactory, OracleBundle, OracleFactory};

/// Builder that assembles runtime state, oracles, and configuration for clients.
pub struct RuntimeBuilder {
    config: BootstrapConfig,
    oracle_factory: Option<Arc<dyn OracleFactory>>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            config: BootstrapConfig::default(),
            oracle_factory: None,
        }
    }

    pub fn config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide a custom oracle factory instead of loading the scenario's map
    /// from the content directory.
    pub fn oracle_factory(mut self, factory: impl OracleFactory + 'static) -> Self {
        self.oracle_factory = Some(Arc::new(factory));
        self
    }

    pub fn build(self) -> Result<RuntimeSetup> {
        let content = ContentFactory::new(&self.config.data_dir);
        let scenario_path = content.scenario_path(&self.config.scenario);
        let scenario = Scenario::load_from_file(&scenario_path)
            .with_context(|| format!("Failed to load scenario '{}'", self.config.scenario))?;

        let oracles = match &self.oracle_factory {
            Some(factory) => factory.build()?,
            None => ContentOracleFactory::new(&self.config.data_dir, &scenario.map_id).build()?,
        };

        let runtime = Runtime::builder()
            .config(self.config.runtime_config())
            .oracles(oracles.clone())
            .scenario(scenario)
            .build()
            .context("Failed to build runtime from scenario")?;

        Ok(RuntimeSetup {
            config: self.config,
            oracles,
            runtime,
        })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RuntimeSetup {
    pub config: BootstrapConfig,
    pub oracles: OracleBundle,
    pub runtime: Runtime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_bundled_overworld() {
        let config = BootstrapConfig {
            game_seed: Some(9),
            ..BootstrapConfig::default()
        };
        let setup = RuntimeBuilder::new().config(config).build().unwrap();

        let state = setup.runtime.state();
        assert_eq!(state.game_seed, 9);
        assert_eq!(state.entities.player.unit.name, "Player");
        assert_eq!(state.entities.items.len(), 4);
        assert!(
            state
                .entities
                .units
                .iter()
                .any(|unit| unit.name == "Prince Aldric")
        );
    }

    #[test]
    fn unknown_scenario_fails_with_context() {
        let config = BootstrapConfig {
            scenario: "nowhere".into(),
            ..BootstrapConfig::default()
        };
        let error = RuntimeBuilder::new().config(config).build().err().unwrap();
        assert!(format!("{error:#}").contains("nowhere"));
    }
}

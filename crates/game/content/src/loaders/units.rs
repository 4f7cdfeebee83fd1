//! Unit template loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::{UnitKind, UnitTemplate};

use crate::loaders::{LoadResult, read_file};

/// Loader for unit templates from RON files.
///
/// RON format: `Vec<(String, UnitTemplate)>`, keyed by template name.
pub struct UnitLoader;

impl UnitLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<(String, UnitTemplate)>> {
        let content = read_file(path)?;
        let templates: Vec<(String, UnitTemplate)> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit catalog RON: {}", e))?;

        let mut keys = HashSet::new();
        for (key, template) in &templates {
            if !keys.insert(key.as_str()) {
                anyhow::bail!("Duplicate unit template '{}'", key);
            }
            if template.max_hp < 1 {
                anyhow::bail!("Unit template '{}' must have max_hp >= 1", key);
            }
        }

        if !templates
            .iter()
            .any(|(_, template)| template.kind == UnitKind::Player)
        {
            anyhow::bail!("Unit catalog {} has no player template", path.display());
        }

        Ok(templates)
    }
}

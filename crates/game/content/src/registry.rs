//! Named preset lookup.

use std::collections::BTreeMap;

use arena_core::{ConfigError, GameplayConfig, Preset};
use strum::IntoEnumIterator;

/// Validated configurations keyed by preset name.
///
/// Starts out with the built-in presets; files loaded later under the same
/// name replace them.
#[derive(Clone, Debug)]
pub struct PresetRegistry {
    presets: BTreeMap<String, GameplayConfig>,
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PresetRegistry {
    /// Registry holding every built-in preset.
    pub fn builtin() -> Self {
        let presets = Preset::iter()
            .map(|preset| (preset.to_string(), GameplayConfig::from_preset(preset)))
            .collect();
        Self { presets }
    }

    /// Validates `config` and registers it under `name`.
    ///
    /// The stored config's `name` is set to `name`. Returns the config it
    /// replaced, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        mut config: GameplayConfig,
    ) -> Result<Option<GameplayConfig>, ConfigError> {
        config.validate()?;
        let name = name.into();
        config.name = name.clone();
        Ok(self.presets.insert(name, config))
    }

    pub fn get(&self, name: &str) -> Result<&GameplayConfig, ConfigError> {
        self.presets
            .get(name)
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Preset names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.presets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

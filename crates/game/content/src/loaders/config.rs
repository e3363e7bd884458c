//! Gameplay configuration loader.

use std::path::Path;

use arena_core::GameplayConfig;

use crate::loaders::{LoadResult, read_file};

/// On-disk formats a config file may use, picked by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Ron,
    Toml,
}

impl ConfigFormat {
    /// Format for `path`, or `None` when the extension is not recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("ron") {
            Some(Self::Ron)
        } else if extension.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else {
            None
        }
    }
}

/// Loader for gameplay configuration from RON or TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a config file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a `.ron` or `.toml` file containing a GameplayConfig
    ///
    /// Missing fields keep their default-preset values.
    pub fn load(path: &Path) -> LoadResult<GameplayConfig> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            anyhow::anyhow!(
                "Unsupported config format for {} (expected .ron or .toml)",
                path.display()
            )
        })?;
        let content = read_file(path)?;
        Self::parse(&content, format)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse and validate config text in the given format.
    pub fn parse(content: &str, format: ConfigFormat) -> LoadResult<GameplayConfig> {
        let config: GameplayConfig = match format {
            ConfigFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config RON: {}", e))?,
            ConfigFormat::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("presets/arena.RON")),
            Some(ConfigFormat::Ron)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("arena.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("arena.json")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("arena")), None);
    }

    #[test]
    fn partial_toml_patches_defaults() {
        let file = write_temp(
            ".toml",
            r#"
name = "practice"

[combat]
respawn_base_ms = 1500
passive_heal_percent_per_second = 0.05

[abilities.sniper]
damage = 120.0
"#,
        );
        let config = ConfigLoader::load(file.path()).unwrap();
        let defaults = GameplayConfig::default();

        assert_eq!(config.name, "practice");
        assert_eq!(config.combat.respawn_base_ms, 1_500);
        assert_eq!(config.combat.passive_heal_percent_per_second, 0.05);
        assert_eq!(config.abilities.sniper.damage, 120.0);
        assert_eq!(config.abilities.sniper.range, defaults.abilities.sniper.range);
        assert_eq!(config.heroes, defaults.heroes);
        assert_eq!(config.rewards, defaults.rewards);
    }

    #[test]
    fn partial_ron_patches_defaults() {
        let file = write_temp(
            ".ron",
            r#"(
    map: (
        width: 2000.0,
        height: 1000.0,
        blue_spawn: (x: 100.0, y: 500.0),
        red_spawn: (x: 1900.0, y: 500.0),
    ),
    progression: (max_level: 10),
)"#,
        );
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.map.width, 2_000.0);
        assert_eq!(config.progression.max_level, 10);
        assert_eq!(
            config.progression.level_up_multiplier,
            GameplayConfig::default().progression.level_up_multiplier
        );
    }

    #[test]
    fn invalid_values_fail_validation() {
        let file = write_temp(".toml", "[map]\nwidth = 0.0\n");
        let err = ConfigLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("map.width"), "{err}");
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let file = write_temp(".ron", "(combat: (armor_floor: ");
        let err = ConfigLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("RON"), "{err}");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = write_temp(".yaml", "name: nope");
        assert!(ConfigLoader::load(file.path()).is_err());
    }
}

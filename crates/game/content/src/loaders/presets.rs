//! Preset directory loader.
//!
//! Every `.ron` or `.toml` file in a directory becomes one preset named after
//! its file stem. Other files are ignored.
//!
//! ```text
//! presets/
//!   ├── tournament.toml   → "tournament"
//!   └── sandbox.ron       → "sandbox"
//! ```

use std::path::{Path, PathBuf};

use crate::PresetRegistry;
use crate::loaders::{ConfigFormat, ConfigLoader, LoadResult};

impl PresetRegistry {
    /// Built-in presets plus every config file in `dir`.
    pub fn from_dir(dir: &Path) -> LoadResult<Self> {
        let mut registry = Self::builtin();
        registry.load_dir(dir)?;
        Ok(registry)
    }

    /// Loads every config file in `dir` into the registry, in file name
    /// order. Returns how many presets were loaded.
    ///
    /// Stops at the first file that fails to parse or validate.
    pub fn load_dir(&mut self, dir: &Path) -> LoadResult<usize> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read preset dir {}: {}", dir.display(), e))?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.is_file() && ConfigFormat::from_path(path).is_some())
            .collect();
        files.sort();

        for path in &files {
            let name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .ok_or_else(|| anyhow::anyhow!("Invalid preset file name {}", path.display()))?;
            let config = ConfigLoader::load(path)?;
            self.insert(name, config)?;
        }
        Ok(files.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_presets_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/presets");
        let registry = PresetRegistry::from_dir(&dir).unwrap();

        let tournament = registry.get("tournament").unwrap();
        assert_eq!(tournament.name, "tournament");
        assert_eq!(tournament.combat.respawn_base_ms, 8_000);

        let sandbox = registry.get("sandbox").unwrap();
        assert_eq!(sandbox.abilities.hookshot.cooldown_ms, 1_000);
        assert!(registry.contains("default"));
    }

    #[test]
    fn directory_files_override_builtins_and_skip_others() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("arcade.toml"),
            "[combat]\nrespawn_base_ms = 100\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a preset").unwrap();
        std::fs::create_dir(dir.path().join("nested.ron")).unwrap();

        let mut registry = PresetRegistry::builtin();
        let loaded = registry.load_dir(dir.path()).unwrap();

        assert_eq!(loaded, 1);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("arcade").unwrap().combat.respawn_base_ms, 100);
    }

    #[test]
    fn invalid_file_aborts_loading() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.toml"), "[heroes]\nsize = -1.0\n").unwrap();
        let err = PresetRegistry::from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("heroes.size"), "{err}");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PresetRegistry::from_dir(&dir.path().join("absent")).is_err());
    }
}

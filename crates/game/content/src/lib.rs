//! Data-driven gameplay configuration.
//!
//! This crate turns preset names and RON/TOML data files into validated
//! [`GameplayConfig`](arena_core::GameplayConfig) values:
//! - Built-in presets (`default`, `arcade`, `hardcore`)
//! - Single config files (`.ron` or `.toml`), patched over the default preset
//! - Preset directories, one config file per preset keyed by file stem
//!
//! Content is consumed once at match creation and never appears in game state.

pub mod registry;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use registry::PresetRegistry;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigFormat, ConfigLoader, LoadResult};

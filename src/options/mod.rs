//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (dataset shape, animation stride, step rate,
//! keybindings) are consolidated here. Options serialize to/from TOML so
//! presets can live next to the host application's other config.

mod animation;
mod dataset;
mod timing;

use std::path::Path;

pub use animation::AnimationOptions;
pub use dataset::DatasetOptions;
use serde::{Deserialize, Serialize};
pub use timing::TimingOptions;

use crate::error::SortvizError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[timing]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Dataset generation parameters.
    pub dataset: DatasetOptions,
    /// Swap animation parameters.
    pub animation: AnimationOptions,
    /// Step clock parameters.
    pub timing: TimingOptions,
    /// Keyboard binding map.
    pub keybindings: KeyBindings,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`SortvizError::Io`] if the file cannot be read,
    /// [`SortvizError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, SortvizError> {
        let content =
            std::fs::read_to_string(path).map_err(SortvizError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SortvizError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`SortvizError::OptionsParse`] if serialization fails,
    /// [`SortvizError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SortvizError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SortvizError::OptionsParse(e.to_string()))?;
        std::fs::write(path, content).map_err(SortvizError::Io)
    }
}

//! Converts raw key presses into engine commands.
//!
//! The host's event loop owns the window and the keyboard; this module is
//! the only thing between its raw key strings and
//! [`SortEngine::execute`](crate::engine::SortEngine::execute).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmKind;
use crate::engine::SortCommand;

/// Serializable tag for the key-boundable subset of [`SortCommand`]
/// (discrete, parameterless operations).
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// Space = "toggle_pause"
/// Digit1 = "select_selection"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Run selection sort.
    SelectSelection,
    /// Run insertion sort (reserved).
    SelectInsertion,
    /// Run bubble sort (reserved).
    SelectBubble,
    /// Run quicksort (reserved).
    SelectQuick,
    /// Run merge sort (reserved).
    SelectMerge,
    /// Run shell sort (reserved).
    SelectShell,
    /// Toggle pause.
    TogglePause,
    /// Raise the step rate.
    IncreaseSpeed,
    /// Lower the step rate.
    DecreaseSpeed,
    /// Regenerate the dataset.
    Restart,
    /// Ask the host loop to shut down.
    Exit,
}

impl KeyCommandTag {
    /// Convert to the corresponding [`SortCommand`].
    const fn to_command(self) -> SortCommand {
        match self {
            Self::SelectSelection => SortCommand::SelectAlgorithm {
                kind: AlgorithmKind::Selection,
            },
            Self::SelectInsertion => SortCommand::SelectAlgorithm {
                kind: AlgorithmKind::Insertion,
            },
            Self::SelectBubble => SortCommand::SelectAlgorithm {
                kind: AlgorithmKind::Bubble,
            },
            Self::SelectQuick => SortCommand::SelectAlgorithm {
                kind: AlgorithmKind::Quick,
            },
            Self::SelectMerge => SortCommand::SelectAlgorithm {
                kind: AlgorithmKind::Merge,
            },
            Self::SelectShell => SortCommand::SelectAlgorithm {
                kind: AlgorithmKind::Shell,
            },
            Self::TogglePause => SortCommand::TogglePause,
            Self::IncreaseSpeed => SortCommand::IncreaseSpeed,
            Self::DecreaseSpeed => SortCommand::DecreaseSpeed,
            Self::Restart => SortCommand::Restart,
            Self::Exit => SortCommand::Exit,
        }
    }
}

/// Maps physical key strings to commands.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format (`"Digit1"`,
/// `"Space"`, `"ArrowLeft"`, ...), though any convention the host settles
/// on works — the map never interprets the strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("Digit1".into(), KeyCommandTag::SelectSelection),
            ("Digit2".into(), KeyCommandTag::SelectInsertion),
            ("Digit3".into(), KeyCommandTag::SelectBubble),
            ("Digit4".into(), KeyCommandTag::SelectQuick),
            ("Digit5".into(), KeyCommandTag::SelectMerge),
            ("Digit6".into(), KeyCommandTag::SelectShell),
            ("Space".into(), KeyCommandTag::TogglePause),
            ("ArrowLeft".into(), KeyCommandTag::IncreaseSpeed),
            ("ArrowRight".into(), KeyCommandTag::DecreaseSpeed),
            ("KeyR".into(), KeyCommandTag::Restart),
            ("Escape".into(), KeyCommandTag::Exit),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<SortCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind (or rebind) a key to a command tag.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }
}

/// Thin processor between host key events and the engine.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_key_press("Digit1") {
///     engine.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Processor with the default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processor with custom key bindings.
    #[must_use]
    pub const fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self { key_bindings }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub const fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<SortCommand> {
        self.key_bindings.lookup(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_mirror_the_classic_layout() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.handle_key_press("Digit1"),
            Some(SortCommand::SelectAlgorithm {
                kind: AlgorithmKind::Selection
            })
        );
        assert_eq!(
            processor.handle_key_press("Space"),
            Some(SortCommand::TogglePause)
        );
        assert_eq!(
            processor.handle_key_press("ArrowLeft"),
            Some(SortCommand::IncreaseSpeed)
        );
        assert_eq!(
            processor.handle_key_press("ArrowRight"),
            Some(SortCommand::DecreaseSpeed)
        );
        assert_eq!(
            processor.handle_key_press("Escape"),
            Some(SortCommand::Exit)
        );
        assert_eq!(processor.handle_key_press("KeyZ"), None);
    }

    #[test]
    fn test_rebinding_a_key() {
        let mut processor = InputProcessor::new();
        processor
            .key_bindings_mut()
            .bind("KeyP", KeyCommandTag::TogglePause);
        assert_eq!(
            processor.handle_key_press("KeyP"),
            Some(SortCommand::TogglePause)
        );
    }

    #[test]
    fn test_bindings_toml_round_trip() {
        let bindings = KeyBindings::default();
        let toml_str = toml::to_string(&bindings).unwrap();
        let parsed: KeyBindings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, bindings);
    }

    #[test]
    fn test_partial_bindings_keep_serde_default() {
        // An empty table falls back to the full default map.
        let parsed: KeyBindings = toml::from_str("").unwrap();
        assert_eq!(parsed, KeyBindings::default());
    }
}

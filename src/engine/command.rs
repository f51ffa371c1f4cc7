//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a key press, a GUI
//! button, or a programmatic call — is represented as a [`SortCommand`].
//! Consumers construct commands and pass them to
//! [`SortEngine::execute`](super::SortEngine::execute); the engine never
//! cares *how* a command was triggered.

use crate::algorithm::AlgorithmKind;

/// A discrete operation the engine can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCommand {
    /// Start (or replace) the running sort with the given algorithm.
    /// Unimplemented kinds are logged and ignored.
    SelectAlgorithm {
        /// Which state machine to run.
        kind: AlgorithmKind,
    },

    /// Toggle pause. The step clock freezes while paused; resuming does
    /// not replay the paused time.
    TogglePause,

    /// Raise the logical step rate by one step per second.
    IncreaseSpeed,

    /// Lower the logical step rate by one step per second (floor 1).
    DecreaseSpeed,

    /// Regenerate the dataset and discard any running sort.
    Restart,

    /// Ask the host loop to shut down.
    Exit,
}

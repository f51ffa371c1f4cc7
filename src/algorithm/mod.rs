//! Incremental sorting state machines.
//!
//! Every algorithm variant exposes the same capability set through
//! [`SortStepper`]: advance by one unit of work, report completion, and
//! classify bars for highlighting. Variants are selected by the
//! [`AlgorithmKind`] tag and dispatched through the [`ActiveSort`] enum —
//! no trait objects, no subclass hierarchies.
//!
//! Only selection sort is implemented today. The remaining kinds are part
//! of the interactive vocabulary (the input map binds keys for them) but
//! [`AlgorithmKind::build`] returns `None` for them.

mod selection;

pub use selection::{Phase, SelectionSort};
use serde::{Deserialize, Serialize};

use crate::dataset::Bar;
use crate::error::SortvizError;
use crate::options::AnimationOptions;
use crate::render::ColorRole;

/// Capability set shared by all stepwise sorting state machines.
///
/// A stepper never blocks and never completes the whole sort in one call;
/// each [`advance`](Self::advance) performs exactly one discrete unit of
/// work. It receives the dataset by mutable reference per call and retains
/// no references between calls.
pub trait SortStepper {
    /// Advance the sort by exactly one unit of work.
    ///
    /// Calling after the terminal phase is reached is a no-op.
    ///
    /// # Errors
    ///
    /// [`SortvizError::InvariantViolation`] if the cursor invariants do
    /// not hold, which means the dataset was mutated out of band.
    fn advance(&mut self, bars: &mut [Bar]) -> Result<(), SortvizError>;

    /// Whether the sort has reached its terminal phase.
    fn is_done(&self) -> bool;

    /// Highlight classification for the bar at `index` this frame.
    fn color_role(&self, index: usize) -> ColorRole;
}

/// Tag naming an algorithm variant.
///
/// Serde serializes as `snake_case` strings so TOML keybindings stay
/// readable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    /// Selection sort — the one implemented variant.
    Selection,
    /// Insertion sort (reserved, unimplemented).
    Insertion,
    /// Bubble sort (reserved, unimplemented).
    Bubble,
    /// Quicksort (reserved, unimplemented).
    Quick,
    /// Merge sort (reserved, unimplemented).
    Merge,
    /// Shell sort (reserved, unimplemented).
    Shell,
}

impl AlgorithmKind {
    /// Human-readable name for log messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Bubble => "bubble",
            Self::Quick => "quick",
            Self::Merge => "merge",
            Self::Shell => "shell",
        }
    }

    /// Build a fresh state machine for this kind, or `None` if the kind
    /// is not implemented.
    #[must_use]
    pub fn build(self, animation: &AnimationOptions) -> Option<ActiveSort> {
        match self {
            Self::Selection => Some(ActiveSort::Selection(
                SelectionSort::new(animation.stride),
            )),
            Self::Insertion
            | Self::Bubble
            | Self::Quick
            | Self::Merge
            | Self::Shell => None,
        }
    }
}

/// Enum-dispatched container for the currently running state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveSort {
    /// Incremental selection sort.
    Selection(SelectionSort),
}

impl SortStepper for ActiveSort {
    fn advance(&mut self, bars: &mut [Bar]) -> Result<(), SortvizError> {
        match self {
            Self::Selection(sort) => sort.advance(bars),
        }
    }

    fn is_done(&self) -> bool {
        match self {
            Self::Selection(sort) => sort.is_done(),
        }
    }

    fn color_role(&self, index: usize) -> ColorRole {
        match self {
            Self::Selection(sort) => sort.color_role(index),
        }
    }
}

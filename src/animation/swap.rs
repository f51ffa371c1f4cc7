//! Stride-based convergence toward captured swap targets.

use crate::dataset::Bar;

/// Distance a swapping bar travels per nudge, in rendering units.
pub const DEFAULT_STRIDE: f32 = 25.0;

/// Animates one pending swap.
///
/// Both participants move toward each other's coordinates (captured at the
/// moment the swap was initiated) by a fixed stride per nudge. Convergence
/// uses a reached-or-crossed comparison rather than exact equality, so a
/// stride that does not evenly divide the distance still terminates; the
/// commit snaps both bars to their exact targets to erase any overshoot.
///
/// Only the `x` coordinates of the two involved bars are mutated; the
/// sequence itself is never reordered until [`commit`](Self::commit).
#[derive(Debug, Clone, PartialEq)]
pub struct SwapAnimation {
    /// Index of the bar leaving the boundary slot.
    dest: usize,
    /// Index of the minimum bar moving into the boundary slot.
    min: usize,
    /// Where the destination bar ends up: the minimum's captured x.
    dest_target: f32,
    /// Where the minimum bar ends up: the destination's captured x.
    min_target: f32,
    /// Sign of the destination bar's direction of travel.
    direction: f32,
    /// Distance moved per nudge.
    stride: f32,
}

impl SwapAnimation {
    /// Capture swap targets for the bars at `dest` and `min`.
    ///
    /// When `dest == min` (the boundary already holds the minimum) the
    /// distance is zero and the first nudge reports convergence.
    #[must_use]
    pub fn begin(bars: &[Bar], dest: usize, min: usize, stride: f32) -> Self {
        let dest_x = bars[dest].x();
        let min_x = bars[min].x();
        Self {
            dest,
            min,
            dest_target: min_x,
            min_target: dest_x,
            direction: (min_x - dest_x).signum(),
            stride,
        }
    }

    /// Move both bars one stride toward their targets.
    ///
    /// Returns `true` once the destination bar has reached or crossed its
    /// target.
    pub fn nudge(&self, bars: &mut [Bar]) -> bool {
        bars[self.dest].shift_x(self.stride * self.direction);
        bars[self.min].shift_x(-self.stride * self.direction);
        (bars[self.dest].x() - self.dest_target) * self.direction >= 0.0
    }

    /// Snap both bars to their exact targets and exchange them in the
    /// sequence. Call once, after [`nudge`](Self::nudge) reports
    /// convergence.
    pub fn commit(&self, bars: &mut [Bar]) {
        bars[self.dest].set_x(self.dest_target);
        bars[self.min].set_x(self.min_target);
        bars.swap(self.dest, self.min);
    }

    /// Index of the bar leaving the boundary slot.
    #[must_use]
    pub const fn dest_index(&self) -> usize {
        self.dest
    }

    /// Index of the minimum bar moving into the boundary slot.
    #[must_use]
    pub const fn min_index(&self) -> usize {
        self.min
    }
}

//! Incremental selection sort.
//!
//! The O(n²) algorithm is decomposed into micro-steps so the host can
//! render between any two of them: one comparison per step while scanning,
//! one position nudge per step while a swap is animating. Logical progress
//! (which pair is mid-swap) stays a single committed fact the whole time —
//! the dataset is only reordered when the animation converges.

use super::SortStepper;
use crate::animation::SwapAnimation;
use crate::dataset::Bar;
use crate::error::SortvizError;
use crate::render::ColorRole;

/// Phase of the stepwise sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Created but not yet stepped.
    #[default]
    Idle,
    /// Scanning the unsorted region for its minimum.
    Scanning,
    /// Animating the pending swap toward its captured targets.
    Swapping,
    /// Terminal: the dataset is sorted. Further steps have no effect.
    Done,
}

/// The incremental selection-sort state machine.
///
/// Cursor invariant while scanning:
/// `boundary <= candidate_min <= probe < len`. The Swapping phase is the
/// one exception — `boundary` has already advanced past the swap
/// destination, which is held by the [`SwapAnimation`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSort {
    phase: Phase,
    /// First unsorted index. Non-decreasing for the sort's lifetime.
    boundary: usize,
    /// Scanning cursor within the unsorted region.
    probe: usize,
    /// Index of the smallest value seen since `boundary`.
    candidate_min: usize,
    /// Pending animated swap. Present only while `Swapping`.
    swap: Option<SwapAnimation>,
    /// Distance each nudge moves a swapping bar.
    stride: f32,
}

impl SelectionSort {
    /// Fresh machine with all cursors at zero.
    ///
    /// Non-finite or non-positive `stride` values fall back to
    /// [`crate::animation::DEFAULT_STRIDE`].
    #[must_use]
    pub fn new(stride: f32) -> Self {
        let stride = if stride.is_finite() && stride > 0.0 {
            stride
        } else {
            crate::animation::DEFAULT_STRIDE
        };
        Self {
            phase: Phase::Idle,
            boundary: 0,
            probe: 0,
            candidate_min: 0,
            swap: None,
            stride,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// First unsorted index.
    #[must_use]
    pub const fn boundary(&self) -> usize {
        self.boundary
    }

    /// Current comparison index.
    #[must_use]
    pub const fn probe(&self) -> usize {
        self.probe
    }

    /// Index holding the smallest value seen in the current scan pass.
    #[must_use]
    pub const fn candidate_min(&self) -> usize {
        self.candidate_min
    }

    /// One comparison: move `probe` right, track the minimum, and hand
    /// off to the swap animation when the pass is complete.
    fn scan_step(&mut self, bars: &mut [Bar]) -> Result<(), SortvizError> {
        if self.candidate_min < self.boundary {
            return Err(SortvizError::InvariantViolation(format!(
                "candidate_min {} behind boundary {}",
                self.candidate_min, self.boundary
            )));
        }
        if self.probe + 1 >= bars.len() {
            return Err(SortvizError::InvariantViolation(format!(
                "probe {} ran past the end of {} bars",
                self.probe,
                bars.len()
            )));
        }
        self.phase = Phase::Scanning;
        self.probe += 1;
        // Strictly-less keeps the first occurrence among equal minima.
        if bars[self.probe].value() < bars[self.candidate_min].value() {
            self.candidate_min = self.probe;
        }
        if self.probe == bars.len() - 1 {
            // Pass complete. Capture the swap targets and mark the new
            // boundary; the data exchange itself is deferred until the
            // animation converges.
            self.swap = Some(SwapAnimation::begin(
                bars,
                self.boundary,
                self.candidate_min,
                self.stride,
            ));
            self.phase = Phase::Swapping;
            self.boundary += 1;
        }
        Ok(())
    }

    /// One animation nudge; commits the exchange on convergence.
    fn swap_step(&mut self, bars: &mut [Bar]) -> Result<(), SortvizError> {
        let Some(swap) = self.swap.as_ref() else {
            return Err(SortvizError::InvariantViolation(
                "swapping phase with no captured swap target".into(),
            ));
        };
        if swap.min_index() >= bars.len() {
            return Err(SortvizError::InvariantViolation(format!(
                "swap target index {} past the end of {} bars",
                swap.min_index(),
                bars.len()
            )));
        }
        if swap.nudge(bars) {
            swap.commit(bars);
            self.swap = None;
            self.candidate_min = self.boundary;
            self.probe = self.boundary;
            self.phase = Phase::Scanning;
        }
        Ok(())
    }
}

impl SortStepper for SelectionSort {
    fn advance(&mut self, bars: &mut [Bar]) -> Result<(), SortvizError> {
        if self.phase == Phase::Done {
            return Ok(());
        }
        // A pending swap always commits before the sort can terminate:
        // entering the final pass's swap is what pushes `boundary` to
        // `len - 1`, so the termination check below must not see it.
        if self.phase == Phase::Swapping {
            return self.swap_step(bars);
        }
        // Termination check. Degenerate datasets (len <= 1) are already
        // sorted and reach the terminal phase on the first call.
        if bars.len() <= 1 || self.boundary == bars.len() - 1 {
            self.phase = Phase::Done;
            return Ok(());
        }
        self.scan_step(bars)
    }

    fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    fn color_role(&self, index: usize) -> ColorRole {
        match self.phase {
            Phase::Done => ColorRole::Normal,
            Phase::Swapping => self.swap.as_ref().map_or(
                ColorRole::Normal,
                |swap| {
                    if index == swap.min_index() {
                        ColorRole::CandidateMinimum
                    } else if index == swap.dest_index()
                        || index == self.probe
                    {
                        ColorRole::ActiveComparison
                    } else {
                        ColorRole::Normal
                    }
                },
            ),
            Phase::Idle | Phase::Scanning => {
                if index == self.candidate_min
                    && self.candidate_min != self.boundary
                {
                    ColorRole::CandidateMinimum
                } else if index == self.boundary || index == self.probe {
                    ColorRole::ActiveComparison
                } else {
                    ColorRole::Normal
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::DEFAULT_STRIDE;

    fn bars_from(values: &[u32]) -> Vec<Bar> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Bar::new(v, 60.0 + 30.0 * i as f32))
            .collect()
    }

    fn run_to_done(sort: &mut SelectionSort, bars: &mut [Bar]) {
        for _ in 0..100_000 {
            sort.advance(bars).unwrap();
            if sort.is_done() {
                assert!(
                    bars.windows(2).all(|w| w[0].value() <= w[1].value()),
                    "terminal state is not sorted: {:?}",
                    values(bars)
                );
                return;
            }
        }
        panic!("sort did not terminate");
    }

    fn values(bars: &[Bar]) -> Vec<u32> {
        bars.iter().map(Bar::value).collect()
    }

    #[test]
    fn test_full_run_sorts_and_permutes() {
        for input in [
            vec![5, 3, 4],
            vec![6, 5, 4, 3, 2, 1],
            vec![3, 1, 2, 1, 3, 0],
            vec![1, 2, 3, 4],
            vec![9],
            vec![],
        ] {
            let mut bars = bars_from(&input);
            let mut sort = SelectionSort::new(DEFAULT_STRIDE);
            run_to_done(&mut sort, &mut bars);

            let mut expected = input.clone();
            expected.sort_unstable();
            assert_eq!(values(&bars), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_positions_are_restored_after_full_run() {
        let mut bars = bars_from(&[6, 5, 4, 3, 2, 1]);
        let original_xs: Vec<f32> = bars.iter().map(Bar::x).collect();
        let mut sort = SelectionSort::new(DEFAULT_STRIDE);
        run_to_done(&mut sort, &mut bars);
        let final_xs: Vec<f32> = bars.iter().map(Bar::x).collect();
        assert_eq!(final_xs, original_xs);
    }

    #[test]
    fn test_scenario_a_candidate_min_after_first_pass() {
        // [5,3,4]: when the probe first reaches the end, the candidate
        // minimum must be index 1 (value 3) and the swap must be pending.
        let mut bars = bars_from(&[5, 3, 4]);
        let mut sort = SelectionSort::new(DEFAULT_STRIDE);
        sort.advance(&mut bars).unwrap();
        assert_eq!(sort.phase(), Phase::Scanning);
        assert_eq!(sort.candidate_min(), 1);
        sort.advance(&mut bars).unwrap();
        assert_eq!(sort.phase(), Phase::Swapping);
        assert_eq!(sort.candidate_min(), 1);
        assert_eq!(sort.boundary(), 1);

        run_to_done(&mut sort, &mut bars);
        assert_eq!(values(&bars), vec![3, 4, 5]);
    }

    #[test]
    fn test_scenario_b_single_element_done_in_one_step() {
        let mut bars = bars_from(&[1]);
        let mut sort = SelectionSort::new(DEFAULT_STRIDE);
        sort.advance(&mut bars).unwrap();
        assert!(sort.is_done());
        assert_eq!(values(&bars), vec![1]);
    }

    #[test]
    fn test_empty_dataset_done_in_one_step() {
        let mut bars = bars_from(&[]);
        let mut sort = SelectionSort::new(DEFAULT_STRIDE);
        sort.advance(&mut bars).unwrap();
        assert!(sort.is_done());
    }

    #[test]
    fn test_scenario_c_ties_resolve_to_earliest_index() {
        let mut bars = bars_from(&[2, 2, 2]);
        let mut sort = SelectionSort::new(DEFAULT_STRIDE);
        // Scan the whole first pass: the candidate minimum must stay at
        // the boundary despite equal values at every probe position.
        sort.advance(&mut bars).unwrap();
        assert_eq!(sort.candidate_min(), 0);
        sort.advance(&mut bars).unwrap();
        assert_eq!(sort.candidate_min(), 0);
        assert_eq!(sort.phase(), Phase::Swapping);

        run_to_done(&mut sort, &mut bars);
        assert_eq!(values(&bars), vec![2, 2, 2]);
    }

    #[test]
    fn test_advance_after_done_is_idempotent() {
        let mut bars = bars_from(&[2, 1]);
        let mut sort = SelectionSort::new(DEFAULT_STRIDE);
        run_to_done(&mut sort, &mut bars);
        assert_eq!(values(&bars), vec![1, 2]);

        let snapshot = sort.clone();
        let bars_snapshot = bars.clone();
        for _ in 0..5 {
            sort.advance(&mut bars).unwrap();
        }
        assert_eq!(sort, snapshot);
        assert_eq!(bars, bars_snapshot);
    }

    #[test]
    fn test_final_pass_swap_commits_before_done() {
        // The final pass's swap is the one that pushes `boundary` to
        // `len - 1`; termination must wait for it to commit instead of
        // discarding it.
        let mut bars = bars_from(&[2, 1]);
        let mut sort = SelectionSort::new(DEFAULT_STRIDE);
        sort.advance(&mut bars).unwrap();
        assert_eq!(sort.phase(), Phase::Swapping);
        assert_eq!(sort.boundary(), 1);

        let mut nudges = 0;
        while sort.phase() == Phase::Swapping {
            sort.advance(&mut bars).unwrap();
            nudges += 1;
            assert!(nudges < 100, "swap did not converge");
        }
        assert_eq!(sort.phase(), Phase::Scanning);
        assert_eq!(values(&bars), vec![1, 2]);

        sort.advance(&mut bars).unwrap();
        assert!(sort.is_done());
        assert_eq!(values(&bars), vec![1, 2]);
    }

    #[test]
    fn test_zero_distance_swap_converges_immediately() {
        // Already-sorted pass: boundary is its own minimum, so the swap
        // targets coincide and the animation must commit on its first
        // nudge rather than drifting forever.
        let mut bars = bars_from(&[1, 2]);
        let mut sort = SelectionSort::new(DEFAULT_STRIDE);
        sort.advance(&mut bars).unwrap();
        assert_eq!(sort.phase(), Phase::Swapping);
        sort.advance(&mut bars).unwrap();
        assert_eq!(sort.phase(), Phase::Scanning);
        assert_eq!(values(&bars), vec![1, 2]);
    }

    #[test]
    fn test_out_of_band_truncation_is_an_invariant_violation() {
        let mut bars = bars_from(&[5, 3, 4]);
        let mut sort = SelectionSort::new(DEFAULT_STRIDE);
        sort.advance(&mut bars).unwrap();

        // The driver hands the machine a shorter slice mid-pass.
        let mut truncated = bars[..2].to_vec();
        assert!(matches!(
            sort.advance(&mut truncated),
            Err(SortvizError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_truncation_during_swap_is_an_invariant_violation() {
        let mut bars = bars_from(&[5, 3, 4]);
        let mut sort = SelectionSort::new(DEFAULT_STRIDE);
        sort.advance(&mut bars).unwrap();
        sort.advance(&mut bars).unwrap();
        assert_eq!(sort.phase(), Phase::Swapping);

        // The swap of indices 0 and 1 is pending; a slice that no longer
        // contains them must be rejected, not indexed.
        let mut truncated = bars[..1].to_vec();
        assert!(matches!(
            sort.advance(&mut truncated),
            Err(SortvizError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_color_roles_while_scanning() {
        let mut bars = bars_from(&[5, 3, 4]);
        let mut sort = SelectionSort::new(DEFAULT_STRIDE);
        sort.advance(&mut bars).unwrap();
        // boundary=0, probe=1, candidate_min=1.
        assert_eq!(sort.color_role(0), ColorRole::ActiveComparison);
        assert_eq!(sort.color_role(1), ColorRole::CandidateMinimum);
        assert_eq!(sort.color_role(2), ColorRole::Normal);
    }

    #[test]
    fn test_color_roles_while_swapping_and_done() {
        let mut bars = bars_from(&[5, 3, 4]);
        let mut sort = SelectionSort::new(DEFAULT_STRIDE);
        sort.advance(&mut bars).unwrap();
        sort.advance(&mut bars).unwrap();
        assert_eq!(sort.phase(), Phase::Swapping);
        // Swap destination 0, candidate minimum 1, probe 2.
        assert_eq!(sort.color_role(0), ColorRole::ActiveComparison);
        assert_eq!(sort.color_role(1), ColorRole::CandidateMinimum);
        assert_eq!(sort.color_role(2), ColorRole::ActiveComparison);

        run_to_done(&mut sort, &mut bars);
        for i in 0..3 {
            assert_eq!(sort.color_role(i), ColorRole::Normal);
        }
    }

    #[test]
    fn test_boundary_is_non_decreasing() {
        let mut bars = bars_from(&[4, 1, 3, 2]);
        let mut sort = SelectionSort::new(DEFAULT_STRIDE);
        let mut last_boundary = 0;
        for _ in 0..100_000 {
            sort.advance(&mut bars).unwrap();
            assert!(sort.boundary() >= last_boundary);
            last_boundary = sort.boundary();
            if sort.is_done() {
                return;
            }
        }
        panic!("sort did not terminate");
    }

    #[test]
    fn test_invalid_stride_falls_back_to_default() {
        for bad in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let mut bars = bars_from(&[2, 1]);
            let mut sort = SelectionSort::new(bad);
            run_to_done(&mut sort, &mut bars);
            assert_eq!(values(&bars), vec![1, 2]);
        }
    }
}

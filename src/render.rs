//! Maps state-machine output to a drawable sprite list.
//!
//! This is the crate's only output surface: a read-only query the host's
//! drawing code consumes once per frame. Nothing here mutates sort state.

use crate::algorithm::{ActiveSort, SortStepper};
use crate::dataset::Bar;

/// Highlight classification for one bar in the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorRole {
    /// Not involved in the current step.
    #[default]
    Normal,
    /// Member of the comparison pair being examined (or mid-swap).
    ActiveComparison,
    /// Smallest value seen so far in the current scan pass.
    CandidateMinimum,
}

/// Everything the drawing collaborator needs for one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSprite {
    /// Bar height datum.
    pub value: u32,
    /// Horizontal rendering coordinate.
    pub x: f32,
    /// Highlight classification.
    pub role: ColorRole,
}

/// Build the draw list for the current frame.
///
/// `active` is the running state machine, or `None` when no sort is in
/// progress — in which case every bar is [`ColorRole::Normal`].
#[must_use]
pub fn frame(bars: &[Bar], active: Option<&ActiveSort>) -> Vec<BarSprite> {
    bars.iter()
        .enumerate()
        .map(|(i, bar)| BarSprite {
            value: bar.value(),
            x: bar.x(),
            role: active.map_or(ColorRole::Normal, |a| a.color_role(i)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::AlgorithmKind;
    use crate::error::SortvizError;
    use crate::options::AnimationOptions;

    fn bars_from(values: &[u32]) -> Vec<Bar> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Bar::new(v, 60.0 + 30.0 * i as f32))
            .collect()
    }

    #[test]
    fn test_frame_without_active_sort_is_all_normal() {
        let bars = bars_from(&[5, 3, 4]);
        let sprites = frame(&bars, None);
        assert_eq!(sprites.len(), 3);
        for (sprite, bar) in sprites.iter().zip(&bars) {
            assert_eq!(sprite.value, bar.value());
            assert_eq!(sprite.x, bar.x());
            assert_eq!(sprite.role, ColorRole::Normal);
        }
    }

    #[test]
    fn test_frame_reflects_scan_highlights() -> Result<(), SortvizError> {
        let mut bars = bars_from(&[5, 3, 4]);
        let mut active = AlgorithmKind::Selection
            .build(&AnimationOptions::default())
            .ok_or_else(|| SortvizError::Config("unbuildable".into()))?;
        active.advance(&mut bars)?;

        let roles: Vec<ColorRole> =
            frame(&bars, Some(&active)).iter().map(|s| s.role).collect();
        assert_eq!(
            roles,
            vec![
                ColorRole::ActiveComparison,
                ColorRole::CandidateMinimum,
                ColorRole::Normal,
            ]
        );
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::animation::DEFAULT_STRIDE;

/// Swap animation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationOptions {
    /// Distance each nudge moves a swapping bar, in rendering units.
    /// Larger strides converge in fewer frames. Non-positive values fall
    /// back to the default at sort start.
    pub stride: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            stride: DEFAULT_STRIDE,
        }
    }
}

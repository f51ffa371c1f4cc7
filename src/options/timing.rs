use serde::{Deserialize, Serialize};

/// Step clock parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimingOptions {
    /// Initial logical step rate in steps per second. Floor-clamped to 1
    /// when the clock is built.
    pub speed: u32,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self { speed: 10 }
    }
}

use serde::{Deserialize, Serialize};

/// Dataset generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetOptions {
    /// Number of bars. Zero is legal and sorts immediately.
    pub size: usize,
    /// Smallest generated value (inclusive).
    pub min_value: u32,
    /// Largest generated value (inclusive).
    pub max_value: u32,
    /// Horizontal coordinate of the first bar.
    pub origin_x: f32,
    /// Distance between adjacent bars.
    pub spacing: f32,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            size: 20,
            min_value: 1,
            max_value: 100,
            origin_x: 60.0,
            spacing: 30.0,
        }
    }
}

//! Bar elements and pseudorandom dataset generation.
//!
//! The dataset is rebuilt fresh at engine start (and on restart) from an
//! explicitly passed random source, so tests can seed it deterministically.

use rand::Rng;

use crate::error::SortvizError;
use crate::options::DatasetOptions;

/// One array slot being visualized.
///
/// The value is immutable once created; the rendering coordinate `x` is
/// mutated only by the swap animation while a swap is in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    value: u32,
    x: f32,
}

impl Bar {
    /// Create a bar with the given value and rendering coordinate.
    #[must_use]
    pub const fn new(value: u32, x: f32) -> Self {
        Self { value, x }
    }

    /// The bar's height datum.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Current horizontal rendering coordinate.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    pub(crate) fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    pub(crate) fn shift_x(&mut self, delta: f32) {
        self.x += delta;
    }
}

/// Generate `opts.size` bars with uniform random values, laid out left to
/// right from `opts.origin_x` with `opts.spacing` between neighbors.
///
/// A zero-size dataset is legal (the sort completes immediately).
///
/// # Errors
///
/// [`SortvizError::Config`] if the value range is empty.
pub fn generate<R: Rng + ?Sized>(
    opts: &DatasetOptions,
    rng: &mut R,
) -> Result<Vec<Bar>, SortvizError> {
    if opts.min_value > opts.max_value {
        return Err(SortvizError::Config(format!(
            "empty value range: min {} > max {}",
            opts.min_value, opts.max_value
        )));
    }

    let mut bars = Vec::with_capacity(opts.size);
    let mut x = opts.origin_x;
    for _ in 0..opts.size {
        let value = rng.random_range(opts.min_value..=opts.max_value);
        bars.push(Bar::new(value, x));
        x += opts.spacing;
    }
    Ok(bars)
}

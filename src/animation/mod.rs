//! Animated swap transitions.
//!
//! Decouples "logical swap decided" from "visual swap completed": once a
//! scan pass finds its minimum, the two participating bars drift toward
//! each other's captured coordinates over many frames while the state
//! machine's logical progress remains a single committed fact. Nudging
//! happens only during the dedicated swapping phase, never at render time.

mod swap;

pub use swap::{SwapAnimation, DEFAULT_STRIDE};

//! Platform abstraction layer
//!
//! Browser-facing pieces that can still be exercised natively:
//! - Input events -> flap requests

pub mod input;

pub use input::{InputBoundary, RawInput};

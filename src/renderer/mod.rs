//! WebGPU rendering module
//!
//! Flat-colored triangles: every game element is a quad built on the CPU
//! from the current `GameState` snapshot.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::scene;
pub use vertex::{Palette, Vertex};

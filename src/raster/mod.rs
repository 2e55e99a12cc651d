//! Circle rasterization on the integer block lattice
//!
//! All outline geometry lives here. This module must stay pure and
//! deterministic:
//! - Integer arithmetic only (the lone float is the √2 bounding the octant walk)
//! - No I/O, no world access
//! - Same inputs, same outline, regardless of cache state
//!
//! `CircleGenerator` is the entry point; `plane` and `sqrt` hold the
//! geometry and arithmetic it leans on.

mod circle;
pub mod generator;
pub mod plane;
pub mod sqrt;

pub use generator::{CircleGenerator, CircleStyle};
pub use plane::Plane;
pub use sqrt::SqrtTable;

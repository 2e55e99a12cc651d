//! Block Rings - rasterized circle outlines on the block lattice
//!
//! Core modules:
//! - `raster`: Deterministic circle generation (octant walk, memo cache, integer square roots)
//! - `world`: Block positions, materials, and an in-memory world store
//! - `effects`: Temporary ring effects (draw, hold, restore)
//! - `settings`: JSON-backed effect configuration
//! - `error`: Shared error type

pub mod effects;
pub mod error;
pub mod raster;
pub mod settings;
pub mod world;

pub use effects::{RingReport, TemporaryRings};
pub use error::RingError;
pub use raster::{CircleGenerator, CircleStyle, Plane};
pub use settings::RingSettings;
pub use world::{Material, World, WorldId, WorldPoint};

/// Geometry and effect constants
pub mod consts {
    /// Largest radius the generator accepts; the square-root table covers
    /// every value up to `MAX_RADIUS²`
    pub const MAX_RADIUS: i32 = 1000;
    /// Default hold before a ring effect restores the world (milliseconds)
    pub const DEFAULT_HOLD_MS: u64 = 1000;
}

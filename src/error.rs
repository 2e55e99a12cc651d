//! Error type shared by circle generation and ring effects
//!
//! Every variant is a rejected precondition. Once validation passes, the
//! octant walk, the cache, and the effect pipeline are total: they either
//! finish or never started.

use thiserror::Error;

use crate::world::WorldId;

/// Failures surfaced by the generator and the temporary ring effect.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// Radii count blocks outward from the center; negatives have no shape.
    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(i32),

    /// The square-root table only covers radii up to the supported maximum.
    #[error("radius {radius} exceeds the supported maximum of {max}")]
    RadiusTooLarge { radius: i32, max: i32 },

    #[error("ring count must be non-negative, got {0}")]
    NegativeRings(i32),

    /// The innermost ring of the stack would need a negative radius.
    #[error("{rings} rings starting at radius {radius} would shrink below radius zero")]
    RingsExceedRadius { radius: i32, rings: i32 },

    /// A ring effect only mutates the world its center is anchored in.
    #[error("effect center is anchored in {center:?} but ran against {world:?}")]
    WorldMismatch { center: WorldId, world: WorldId },
}

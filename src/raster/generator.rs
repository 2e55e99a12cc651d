//! Memoizing circle generator
//!
//! Outlines are cached per `(plane, ignore_enclosed, radius)` behind a
//! concurrent map, so any radius is rasterized at most once per generator
//! no matter how many threads ask for it. Only the untrimmed geometry is
//! ever stored; burr trimming works on a fresh copy every time, so a cached
//! master can never be observed changing.

use std::collections::HashSet;
use std::sync::Arc;

use dashmap::DashMap;
use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_RADIUS;
use crate::error::RingError;
use crate::world::WorldPoint;

use super::circle;
use super::plane::Plane;
use super::sqrt::SqrtTable;

/// Shape switches for a generated outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CircleStyle {
    /// Drop points whose forward neighbors are both present; thins the
    /// staircase without breaking the outline.
    pub ignore_enclosed: bool,
    /// Keep the single blocks jutting out at the four cardinal extremes.
    pub allow_burrs: bool,
}

impl Default for CircleStyle {
    /// Raw rasterization: nothing pruned, tips kept.
    fn default() -> Self {
        Self {
            ignore_enclosed: false,
            allow_burrs: true,
        }
    }
}

/// Cache key: one master outline per plane, pruning mode, and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct RingKey {
    plane: Plane,
    ignore_enclosed: bool,
    radius: i32,
}

/// Rasterizes circle outlines on the block lattice, memoizing every one.
///
/// Shared by reference across threads; all methods take `&self`.
pub struct CircleGenerator {
    sqrt: SqrtTable,
    rings: DashMap<RingKey, Arc<HashSet<IVec3>>>,
}

impl CircleGenerator {
    /// Build a generator and its square-root table.
    pub fn new() -> Self {
        Self {
            sqrt: SqrtTable::new(),
            rings: DashMap::new(),
        }
    }

    /// Generate the outline of a circle of `radius` around `center`.
    ///
    /// Every output point carries the center's world handle unchanged;
    /// nothing is read from or written to any world here.
    ///
    /// # Errors
    ///
    /// `NegativeRadius` below zero, `RadiusTooLarge` past
    /// [`MAX_RADIUS`](crate::consts::MAX_RADIUS).
    pub fn generate(
        &self,
        center: WorldPoint,
        radius: i32,
        plane: Plane,
        style: CircleStyle,
    ) -> Result<HashSet<WorldPoint>, RingError> {
        Ok(self
            .offsets(radius, plane, style)?
            .into_iter()
            .map(|offset| WorldPoint::new(center.world, center.pos + offset))
            .collect())
    }

    /// Origin-centered variant: the raw lattice offsets of the outline.
    ///
    /// Always an independent copy, never a view into the cache.
    pub fn offsets(
        &self,
        radius: i32,
        plane: Plane,
        style: CircleStyle,
    ) -> Result<HashSet<IVec3>, RingError> {
        if radius < 0 {
            return Err(RingError::NegativeRadius(radius));
        }
        if radius > MAX_RADIUS {
            return Err(RingError::RadiusTooLarge {
                radius,
                max: MAX_RADIUS,
            });
        }

        let master = self.master(radius, plane, style.ignore_enclosed);
        let mut points = (*master).clone();
        if !style.allow_burrs {
            circle::trim_burrs(&mut points, radius, plane);
        }
        Ok(points)
    }

    /// Fetch or compute the cached master for one key. At most one
    /// rasterization per key ever runs; concurrent callers for the same key
    /// block on the map shard until it lands.
    fn master(&self, radius: i32, plane: Plane, ignore_enclosed: bool) -> Arc<HashSet<IVec3>> {
        let key = RingKey {
            plane,
            ignore_enclosed,
            radius,
        };
        self.rings
            .entry(key)
            .or_insert_with(|| {
                Arc::new(circle::base_outline(&self.sqrt, radius, plane, ignore_enclosed))
            })
            .value()
            .clone()
    }

    /// Number of distinct outlines rasterized so far.
    pub fn cached_outlines(&self) -> usize {
        self.rings.len()
    }
}

impl Default for CircleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

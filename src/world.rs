//! Worlds, block positions, and materials
//!
//! The generator treats worlds as opaque: a `WorldPoint` is coordinates
//! plus the handle of the world they belong to, echoed through untouched.
//! `World` is the mutable half, a sparse in-memory block store the ring
//! effects actually swap materials in, with seeded demo terrain for the
//! CLI and tests.

use std::collections::HashMap;

use glam::IVec3;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Opaque handle naming a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldId(pub u32);

/// A block position anchored to a specific world.
///
/// Only `pos` takes part in geometry; `world` rides along so consumers know
/// which store a generated point refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldPoint {
    pub world: WorldId,
    pub pos: IVec3,
}

impl WorldPoint {
    pub fn new(world: WorldId, pos: IVec3) -> Self {
        Self { world, pos }
    }
}

/// Block materials the demo world and ring effects deal in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Material {
    #[default]
    Air,
    Stone,
    Dirt,
    Grass,
    Sand,
    Water,
    Glass,
}

/// An in-memory block store: a sparse overlay over an all-air void.
#[derive(Debug, Clone)]
pub struct World {
    id: WorldId,
    blocks: HashMap<IVec3, Material>,
}

impl World {
    /// An empty (all-air) world.
    pub fn new(id: WorldId) -> Self {
        Self {
            id,
            blocks: HashMap::new(),
        }
    }

    /// Flat demo terrain: a square slab of side `2 * half_extent + 1`
    /// centered on the origin, surface at y = 0, three blocks deep.
    /// Same seed, same terrain.
    pub fn with_terrain(id: WorldId, seed: u64, half_extent: i32) -> Self {
        let mut world = Self::new(id);
        let mut rng = Pcg32::seed_from_u64(seed);
        for x in -half_extent..=half_extent {
            for z in -half_extent..=half_extent {
                let surface = match rng.random_range(0..10) {
                    0 => Material::Sand,
                    1 => Material::Water,
                    2..=3 => Material::Dirt,
                    _ => Material::Grass,
                };
                world.set_block(IVec3::new(x, 0, z), surface);
                world.set_block(IVec3::new(x, -1, z), Material::Dirt);
                world.set_block(IVec3::new(x, -2, z), Material::Stone);
            }
        }
        world
    }

    pub fn id(&self) -> WorldId {
        self.id
    }

    /// Material at `pos`; air wherever nothing was ever placed.
    pub fn block(&self, pos: IVec3) -> Material {
        self.blocks.get(&pos).copied().unwrap_or_default()
    }

    /// Place `material` at `pos`, returning what was there before.
    /// Placing air clears the slot, keeping the store sparse.
    pub fn set_block(&mut self, pos: IVec3, material: Material) -> Material {
        let previous = if material == Material::Air {
            self.blocks.remove(&pos)
        } else {
            self.blocks.insert(pos, material)
        };
        previous.unwrap_or_default()
    }

    /// Anchor a position in this world.
    pub fn anchor(&self, pos: IVec3) -> WorldPoint {
        WorldPoint::new(self.id, pos)
    }

    /// Number of non-air blocks placed.
    pub fn placed_blocks(&self) -> usize {
        self.blocks.len()
    }
}

//! Axis-aligned raster planes
//!
//! A circle is rasterized on one of the three axis-aligned planes through
//! its center. The plane decides which two coordinates vary, which one is
//! pinned to zero, and how the directly computed octant reflects into the
//! other seven.

use glam::IVec3;
use serde::{Deserialize, Serialize};

/// The three planes a circle can be rasterized on.
///
/// The axis missing from the name is the unchanging axis: every generated
/// offset carries a zero there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Plane {
    /// Horizontal plane - varies x and z
    #[default]
    XZ,
    /// Vertical plane - varies x and y
    XY,
    /// Vertical plane - varies z and y
    ZY,
}

impl Plane {
    pub const ALL: [Plane; 3] = [Plane::XZ, Plane::XY, Plane::ZY];

    pub fn as_str(&self) -> &'static str {
        match self {
            Plane::XZ => "xz",
            Plane::XY => "xy",
            Plane::ZY => "zy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "xz" => Some(Plane::XZ),
            "xy" => Some(Plane::XY),
            "zy" => Some(Plane::ZY),
            _ => None,
        }
    }

    /// Place an octant point: `ind` steps along the independent axis,
    /// `dep` along the dependent axis, the unchanging axis stays zero.
    #[inline]
    pub fn octant_point(&self, ind: i32, dep: i32) -> IVec3 {
        match self {
            Plane::XZ => IVec3::new(ind, 0, dep),
            Plane::XY => IVec3::new(ind, dep, 0),
            Plane::ZY => IVec3::new(0, dep, ind),
        }
    }

    /// The two forward neighbors of `p`: one step further along each of the
    /// plane's varying axes. A point with both present adds nothing to the
    /// outline.
    #[inline]
    pub fn forward_neighbors(&self, p: IVec3) -> [IVec3; 2] {
        match self {
            Plane::XZ => [
                IVec3::new(p.x + 1, p.y, p.z),
                IVec3::new(p.x, p.y, p.z + 1),
            ],
            Plane::XY => [
                IVec3::new(p.x + 1, p.y, p.z),
                IVec3::new(p.x, p.y + 1, p.z),
            ],
            Plane::ZY => [
                IVec3::new(p.x, p.y, p.z + 1),
                IVec3::new(p.x, p.y + 1, p.z),
            ],
        }
    }

    /// The seven reflections of an octant point across the plane's
    /// symmetry axes. Together with the point itself they cover the full
    /// circle; duplicates on the axes collapse in the output set.
    pub fn reflections(&self, p: IVec3) -> [IVec3; 7] {
        let IVec3 { x, y, z } = p;
        match self {
            Plane::XZ => [
                IVec3::new(z, y, x),
                IVec3::new(-x, y, z),
                IVec3::new(-z, y, x),
                IVec3::new(-z, y, -x),
                IVec3::new(-x, y, -z),
                IVec3::new(x, y, -z),
                IVec3::new(z, y, -x),
            ],
            Plane::XY => [
                IVec3::new(y, x, z),
                IVec3::new(-x, y, z),
                IVec3::new(-y, x, z),
                IVec3::new(-y, -x, z),
                IVec3::new(-x, -y, z),
                IVec3::new(x, -y, z),
                IVec3::new(y, -x, z),
            ],
            Plane::ZY => [
                IVec3::new(x, z, y),
                IVec3::new(x, -y, z),
                IVec3::new(x, -z, y),
                IVec3::new(x, -z, -y),
                IVec3::new(x, -y, -z),
                IVec3::new(x, y, -z),
                IVec3::new(x, z, -y),
            ],
        }
    }

    /// The four cardinal tips at `±radius`, each paired with the trimmed
    /// replacement one block closer to center.
    pub fn burr_tips(&self, radius: i32) -> [(IVec3, IVec3); 4] {
        let r = radius;
        match self {
            Plane::XZ => [
                (IVec3::new(0, 0, r), IVec3::new(0, 0, r - 1)),
                (IVec3::new(0, 0, -r), IVec3::new(0, 0, -r + 1)),
                (IVec3::new(r, 0, 0), IVec3::new(r - 1, 0, 0)),
                (IVec3::new(-r, 0, 0), IVec3::new(-r + 1, 0, 0)),
            ],
            Plane::XY => [
                (IVec3::new(0, r, 0), IVec3::new(0, r - 1, 0)),
                (IVec3::new(0, -r, 0), IVec3::new(0, -r + 1, 0)),
                (IVec3::new(r, 0, 0), IVec3::new(r - 1, 0, 0)),
                (IVec3::new(-r, 0, 0), IVec3::new(-r + 1, 0, 0)),
            ],
            Plane::ZY => [
                (IVec3::new(0, r, 0), IVec3::new(0, r - 1, 0)),
                (IVec3::new(0, -r, 0), IVec3::new(0, -r + 1, 0)),
                (IVec3::new(0, 0, r), IVec3::new(0, 0, r - 1)),
                (IVec3::new(0, 0, -r), IVec3::new(0, 0, -r + 1)),
            ],
        }
    }

    /// Coordinate on the unchanging axis (always zero for generated offsets)
    #[inline]
    pub fn unchanging_coord(&self, p: IVec3) -> i32 {
        match self {
            Plane::XZ => p.y,
            Plane::XY => p.z,
            Plane::ZY => p.x,
        }
    }

    /// The two coordinates of `p` that vary on this plane
    #[inline]
    pub fn varying_coords(&self, p: IVec3) -> (i32, i32) {
        match self {
            Plane::XZ => (p.x, p.z),
            Plane::XY => (p.x, p.y),
            Plane::ZY => (p.z, p.y),
        }
    }
}

//! Integer square roots from a precomputed table
//!
//! The octant walk needs `floor(sqrt(radius² − ind²))` once or twice per
//! column, for every radius it ever rasterizes. Rather than trust float
//! rounding near perfect squares, the table is filled exactly: perfect
//! squares first, then a single sweep that carries the last exact root
//! forward over the gaps between them.

use crate::consts::MAX_RADIUS;

/// Marks table slots the perfect-square pass did not assign.
const UNSET: u16 = u16::MAX;

/// Lookup table mapping `n` to `floor(sqrt(n))` for `0 ≤ n ≤ MAX_RADIUS²`.
pub struct SqrtTable {
    roots: Vec<u16>,
}

impl SqrtTable {
    /// Build the full table. Costs a few megabytes and a pass over
    /// `MAX_RADIUS²` entries, paid once per generator.
    pub fn new() -> Self {
        let len = (MAX_RADIUS * MAX_RADIUS) as usize + 1;
        let mut roots = vec![UNSET; len];

        // Exact roots at the perfect squares
        for i in 0..=MAX_RADIUS as usize {
            roots[i * i] = i as u16;
        }

        // Between consecutive squares the floor root is the last exact one
        let mut root = 0;
        for slot in roots.iter_mut() {
            if *slot == UNSET {
                *slot = root;
            } else {
                root = *slot;
            }
        }

        Self { roots }
    }

    /// `floor(sqrt(n))`.
    ///
    /// Callers keep `n` within `0..=MAX_RADIUS²`; anything outside panics
    /// on the table lookup. The walk guarantees this whenever
    /// `0 < radius ≤ MAX_RADIUS`.
    #[inline]
    pub fn floor_sqrt(&self, n: i32) -> i32 {
        self.roots[n as usize] as i32
    }
}

impl Default for SqrtTable {
    fn default() -> Self {
        Self::new()
    }
}

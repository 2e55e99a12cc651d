//! Circle outline rasterization
//!
//! One octant is computed directly, from the 90° tip down to just past the
//! 45° diagonal, and mirrored into the other seven. Each column of the walk
//! fills every dependent value between its own rim and the previous
//! column's, so consecutive columns always share or touch a block and the
//! outline never gaps.

use std::collections::HashSet;

use glam::IVec3;

use super::plane::Plane;
use super::sqrt::SqrtTable;

/// Walk one octant of a circle of `radius` around the origin.
///
/// Returns the octant set together with the last point emitted; the
/// enclosed-pruning pass removes that one unconditionally, since the 45°
/// end of the walk always lands one step inside the outline.
pub(crate) fn walk_octant(
    table: &SqrtTable,
    radius: i32,
    plane: Plane,
) -> (HashSet<IVec3>, Option<IVec3>) {
    debug_assert!(radius >= 1);
    let radius_sq = radius * radius;
    // First column past the 45° diagonal; everything beyond mirrors back
    let stop = (radius as f64 / std::f64::consts::SQRT_2) as i32 + 1;

    let mut octant = HashSet::new();
    let mut last = None;
    for ind in 0..stop {
        let prev_dep = table.floor_sqrt(radius_sq - ind * ind);
        let next_dep = table.floor_sqrt(radius_sq - (ind + 1) * (ind + 1));
        // Descend from the previous column's rim to this column's
        for dep in (next_dep..=prev_dep).rev() {
            let point = plane.octant_point(ind, dep);
            octant.insert(point);
            last = Some(point);
        }
    }

    (octant, last)
}

/// Drop points the outline does not need: the walk's final point, then
/// every point whose two forward neighbors are both still present.
///
/// Enclosed points are never forward neighbors of each other (consecutive
/// columns overlap at exactly one dependent value), so testing against a
/// snapshot removes the same set as testing one by one.
pub(crate) fn prune_enclosed(octant: &mut HashSet<IVec3>, last: Option<IVec3>, plane: Plane) {
    if let Some(last) = last {
        octant.remove(&last);
    }
    let snapshot = octant.clone();
    octant.retain(|p| {
        let [a, b] = plane.forward_neighbors(*p);
        !(snapshot.contains(&a) && snapshot.contains(&b))
    });
}

/// Mirror the octant across the plane's symmetry axes and union everything.
pub(crate) fn mirror_octant(octant: &HashSet<IVec3>, plane: Plane) -> HashSet<IVec3> {
    let mut full = octant.clone();
    for &p in octant {
        full.extend(plane.reflections(p));
    }
    full
}

/// Swap the four cardinal tips for points one block closer to center.
///
/// No-op at radius 0, where the only tip is the center itself.
pub(crate) fn trim_burrs(points: &mut HashSet<IVec3>, radius: i32, plane: Plane) {
    if radius == 0 {
        return;
    }
    for (tip, replacement) in plane.burr_tips(radius) {
        points.remove(&tip);
        points.insert(replacement);
    }
}

/// Build the full origin-centered outline for one cache entry.
pub(crate) fn base_outline(
    table: &SqrtTable,
    radius: i32,
    plane: Plane,
    ignore_enclosed: bool,
) -> HashSet<IVec3> {
    // A zero-radius circle is the center block alone
    if radius == 0 {
        return HashSet::from([IVec3::ZERO]);
    }

    let (mut octant, last) = walk_octant(table, radius, plane);
    if ignore_enclosed {
        prune_enclosed(&mut octant, last, plane);
    }
    mirror_octant(&octant, plane)
}

//! 3D rotation utilities.
//!
//! A cube has 24 possible orientations in 3D space (the rotation group of a
//! cube): 6 ways to choose which face points up, times 4 rotations around
//! the vertical axis.

use crate::pieces::Coord;

/// All 24 rotation functions for a cube.
///
/// Organized as 6 face-up choices x 4 rotations around vertical, in the
/// canonical order +Z, +Y, +X, -Z, -Y, -X. The identity is index 0.
///
/// Ordering note: an orientation lock restricts a piece to a prefix of this
/// table, so the order is part of the observable behavior.
pub const ROTATIONS: [fn(Coord) -> Coord; 24] = [
    // +Z face up (identity orientation), rotate around Z axis
    |(x, y, z)| (x, y, z),      // 0 degrees
    |(x, y, z)| (-y, x, z),     // 90 degrees
    |(x, y, z)| (-x, -y, z),    // 180 degrees
    |(x, y, z)| (y, -x, z),     // 270 degrees
    // +Y face up, rotate around Y axis
    |(x, y, z)| (x, -z, y),
    |(x, y, z)| (z, x, y),
    |(x, y, z)| (-x, z, y),
    |(x, y, z)| (-z, -x, y),
    // +X face up, rotate around X axis
    |(x, y, z)| (z, y, -x),
    |(x, y, z)| (-y, z, -x),
    |(x, y, z)| (-z, -y, -x),
    |(x, y, z)| (y, -z, -x),
    // -Z face up, rotate around Z axis
    |(x, y, z)| (x, -y, -z),
    |(x, y, z)| (y, x, -z),
    |(x, y, z)| (-x, y, -z),
    |(x, y, z)| (-y, -x, -z),
    // -Y face up, rotate around Y axis
    |(x, y, z)| (x, z, -y),
    |(x, y, z)| (-z, x, -y),
    |(x, y, z)| (-x, -z, -y),
    |(x, y, z)| (z, -x, -y),
    // -X face up, rotate around X axis
    |(x, y, z)| (-z, y, x),
    |(x, y, z)| (-y, -z, x),
    |(x, y, z)| (z, -y, x),
    |(x, y, z)| (y, z, x),
];

/// Rotates an axis-aligned bounding box and re-canonicalizes it.
///
/// A rotation maps the two extreme corners to two opposite corners of the
/// rotated box; taking the componentwise min and max restores the
/// lo <= hi form.
pub fn rotated_bounds(rotate: fn(Coord) -> Coord, lo: Coord, hi: Coord) -> (Coord, Coord) {
    let a = rotate(lo);
    let b = rotate(hi);
    (
        (a.0.min(b.0), a.1.min(b.1), a.2.min(b.2)),
        (a.0.max(b.0), a.1.max(b.1), a.2.max(b.2)),
    )
}

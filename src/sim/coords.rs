//! Integer grid coordinates and step directions
//!
//! The grid plane uses `glam::IVec2`: x grows rightward, y grows downward
//! (matching row-major indexing in the grid store). An arm's heading vector
//! encodes both its direction and its extension length.

use glam::IVec2;

/// A grid coordinate or direction vector.
pub type Coords = IVec2;

/// Unit step toward `d`, taken independently per axis.
///
/// Produces one of the 8 compass directions (diagonals included), or zero
/// for the zero vector. Extending an arm adds this to its heading, so a
/// diagonal heading lengthens along both axes at once.
#[inline]
pub fn direction(d: Coords) -> Coords {
    d.signum()
}

/// Axis-priority variant of [`direction`]: the y component is dropped
/// whenever x is nonzero.
#[inline]
pub fn cardinal(d: Coords) -> Coords {
    IVec2::new(d.x.signum(), if d.x != 0 { 0 } else { d.y.signum() })
}

//! Affine transform helpers.

use crate::foundation::core::{Affine, Point, Vec2};

#[inline]
/// Translation by `(dx, dy)`.
pub fn translate(dx: f64, dy: f64) -> Affine {
    Affine::translate(Vec2::new(dx, dy))
}

#[inline]
/// Rotation by `degrees` about `pivot`.
///
/// With y pointing down, positive angles turn clockwise on screen.
pub fn rotate_degrees_about(degrees: f64, pivot: Point) -> Affine {
    Affine::rotate_about(degrees.to_radians(), pivot)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/transform.rs"]
mod tests;

//! Narrow-phase overlap queries over collision shapes.

use glam::Vec2;

use crate::geometry::shape::Shape;

/// Candidate separating axes contributed by `shape` when tested against
/// `other`. A polygon contributes every edge normal; a circle contributes
/// its single nearest-feature axis toward the other shape.
fn candidate_axes(shape: &Shape, other: &Shape) -> Vec<Vec2> {
    match shape {
        Shape::Polygon(polygon) => polygon.normals(),
        Shape::Circle(circle) => vec![circle.normal_toward(other)],
    }
}

/// Separating-axis overlap test. Two convex shapes are disjoint iff some
/// candidate axis separates their projections; the first separating axis
/// proves separation, and if every axis shows overlap the shapes intersect.
///
/// Axes are normalized before projecting: polygon projections are
/// scale-invariant, but a circle widens its projection by the raw radius,
/// which is only comparable on a unit axis. A zero-length candidate (a
/// duplicate-vertex edge, or a circle centered exactly on its nearest
/// feature) has no direction to separate along and is skipped.
///
/// Polygons are non-empty by construction, so both sides always contribute
/// at least one axis.
pub fn overlaps(a: &Shape, b: &Shape) -> bool {
    for axis in candidate_axes(a, b)
        .into_iter()
        .chain(candidate_axes(b, a))
    {
        let axis = axis.normalize_or_zero();
        if axis == Vec2::ZERO {
            continue;
        }
        if !a.project(axis).overlaps(&b.project(axis)) {
            return false;
        }
    }
    true
}

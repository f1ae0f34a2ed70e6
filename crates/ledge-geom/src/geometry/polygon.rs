use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::{Bounds, Dimensions};
use super::path::PathCommand;
use super::shape::{Projection, ShapeError};

/// Closed polygon over an ordered vertex list; the last vertex connects back
/// to the first. Insertion order defines the edges. At least one vertex is
/// required, which `new` (and the serde path) enforce, so the query methods
/// never see an empty vertex set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec2>", into = "Vec<Vec2>")]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl TryFrom<Vec<Vec2>> for Polygon {
    type Error = ShapeError;

    fn try_from(vertices: Vec<Vec2>) -> Result<Self, Self::Error> {
        Polygon::new(vertices)
    }
}

impl From<Polygon> for Vec<Vec2> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, ShapeError> {
        if vertices.is_empty() {
            return Err(ShapeError::EmptyPolygon);
        }
        Ok(Self { vertices })
    }

    /// Axis-aligned rectangle with its top-left corner at the origin.
    /// Corners land on `(w-1, h-1)`: right/bottom name the last occupied
    /// pixel, matching the inclusive-pixel bounds convention.
    pub fn rect(width: f32, height: f32) -> Self {
        Self {
            vertices: vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(width - 1.0, 0.0),
                Vec2::new(width - 1.0, height - 1.0),
                Vec2::new(0.0, height - 1.0),
            ],
        }
    }

    /// Rectangle spanning a bounds box.
    pub fn from_bounds(bounds: &Bounds) -> Self {
        Self {
            vertices: vec![
                Vec2::new(bounds.left, bounds.top),
                Vec2::new(bounds.right, bounds.top),
                Vec2::new(bounds.right, bounds.bottom),
                Vec2::new(bounds.left, bounds.bottom),
            ],
        }
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Move every vertex by `(dx, dy)` in place.
    pub fn translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        for v in &mut self.vertices {
            v.x += dx;
            v.y += dy;
        }
        self
    }

    /// Rotate every vertex around the shape's origin-relative center
    /// `(width/2, height/2)`. A NaN or exactly-zero angle is a no-op.
    ///
    /// The pivot is derived from the current dimensions, not the bounds
    /// midpoint, so rotate-then-translate and translate-then-rotate give
    /// different results; the shape factory always rotates first.
    pub fn rotate(&mut self, theta: f32) -> &mut Self {
        if theta.is_nan() || theta == 0.0 {
            return self;
        }
        let dim = self.dimensions();
        let pivot = Vec2::new(dim.width / 2.0, dim.height / 2.0);
        let (s, c) = theta.sin_cos();
        for v in &mut self.vertices {
            // Both new coordinates come from the pre-rotation pair.
            let d = *v - pivot;
            *v = Vec2::new(c * d.x - s * d.y, s * d.x + c * d.y) + pivot;
        }
        self
    }

    /// One un-normalized edge perpendicular per vertex, in vertex order.
    /// Edge `i` runs from vertex `i-1` to vertex `i`, with the first edge
    /// wrapping from the last vertex. Magnitude is irrelevant for SAT.
    pub fn normals(&self) -> Vec<Vec2> {
        let mut prev = self.vertices[self.vertices.len() - 1];
        let mut normals = Vec::with_capacity(self.vertices.len());
        for &v in &self.vertices {
            normals.push(Vec2::new(v.y - prev.y, prev.x - v.x));
            prev = v;
        }
        normals
    }

    /// Project every vertex onto an axis, returning the covered interval.
    pub fn project(&self, axis: Vec2) -> Projection {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for v in &self.vertices {
            let dot = v.dot(axis);
            min = min.min(dot);
            max = max.max(dot);
        }
        Projection { min, max }
    }

    /// Axis-aligned bounds; each extreme is taken independently per
    /// coordinate (min-x and min-y need not come from the same vertex).
    pub fn bounds(&self) -> Bounds {
        let mut left = f32::INFINITY;
        let mut right = f32::NEG_INFINITY;
        let mut top = f32::INFINITY;
        let mut bottom = f32::NEG_INFINITY;
        for v in &self.vertices {
            left = left.min(v.x);
            right = right.max(v.x);
            top = top.min(v.y);
            bottom = bottom.max(v.y);
        }
        Bounds { left, right, top, bottom }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.bounds().dimensions()
    }

    /// Topmost (smallest-y) surface height among the edges whose x-extent
    /// overlaps `[left, right]`. Returns `f32::INFINITY` when no edge
    /// qualifies; callers must treat that as "no surface here", not a
    /// coordinate.
    ///
    /// Used to snap a falling entity onto flat or sloped platform edges
    /// given its horizontal footprint. This is a height lookup, not a swept
    /// collision test.
    pub fn minimum(&self, left: f32, right: f32) -> f32 {
        let mut min = f32::INFINITY;
        for (i, &a) in self.vertices.iter().enumerate() {
            let b = self.vertices[(i + 1) % self.vertices.len()];
            if a.x.min(b.x) > right || a.x.max(b.x) < left {
                continue;
            }
            if a.x == b.x || a.y == b.y {
                // Vertical edges have a single x, horizontal edges a single
                // height; either way the min endpoint y is the surface.
                min = min.min(a.y.min(b.y));
            } else {
                let slope = (b.y - a.y) / (b.x - a.x);
                let intercept = a.y - slope * a.x;
                // Samples outside the edge's own span are capped at its
                // topmost point rather than extrapolated past it.
                let cap = a.y.min(b.y);
                let at_left = (slope * left + intercept).max(cap);
                let at_right = (slope * right + intercept).max(cap);
                min = min.min(at_left.min(at_right));
            }
        }
        min
    }

    /// Boundary description for rendering. Starts from the last vertex so
    /// the loop comes back around closed even when the renderer does not
    /// auto-close subpaths.
    pub fn path(&self) -> Vec<PathCommand> {
        let last = self.vertices[self.vertices.len() - 1];
        let mut commands = Vec::with_capacity(self.vertices.len() + 1);
        commands.push(PathCommand::MoveTo(last));
        for &v in &self.vertices {
            commands.push(PathCommand::LineTo(v));
        }
        commands
    }
}

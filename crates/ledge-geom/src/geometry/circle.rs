use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::{Bounds, Dimensions};
use super::path::PathCommand;
use super::shape::{Projection, Shape};

/// Circle primitive: center plus non-negative radius. Kept analytic rather
/// than approximated as a many-sided polygon; projection and the
/// circle-circle axis have exact closed forms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f32,
    pub center: Vec2,
}

impl Circle {
    pub fn new(radius: f32, x: f32, y: f32) -> Self {
        Self {
            radius,
            center: Vec2::new(x, y),
        }
    }

    /// Move the center by `(dx, dy)` in place.
    pub fn translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.center.x += dx;
        self.center.y += dy;
        self
    }

    /// Always a no-op: a circle is rotation-invariant around its own center.
    /// Rotating a circle around any other point is not supported by this
    /// primitive; a parent transform has to translate it instead.
    pub fn rotate(&mut self, _theta: f32) -> &mut Self {
        self
    }

    /// The single candidate separating axis against another shape: the
    /// center-to-center vector for a circle, or the vector from this center
    /// to the nearest vertex for a polygon. Un-normalized, like polygon edge
    /// normals.
    pub fn normal_toward(&self, other: &Shape) -> Vec2 {
        match other {
            Shape::Circle(circle) => circle.center - self.center,
            Shape::Polygon(polygon) => {
                let mut nearest = Vec2::ZERO;
                let mut best = f32::INFINITY;
                for &v in polygon.vertices() {
                    let d = v - self.center;
                    let dist = d.length_squared();
                    if dist < best {
                        nearest = d;
                        best = dist;
                    }
                }
                // Polygons are non-empty, so the scan always assigns.
                nearest
            }
        }
    }

    /// Project the center onto an axis and widen by the radius.
    pub fn project(&self, axis: Vec2) -> Projection {
        let dot = self.center.dot(axis);
        Projection {
            min: dot - self.radius,
            max: dot + self.radius,
        }
    }

    /// Bounds under the inclusive-pixel convention: the box spans
    /// `radius * 2 - 1` pixels, so right/bottom sit one short of
    /// `center + radius`.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.center.x - self.radius,
            right: self.center.x + self.radius - 1.0,
            top: self.center.y - self.radius,
            bottom: self.center.y + self.radius - 1.0,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.radius * 2.0,
            height: self.radius * 2.0,
        }
    }

    /// Boundary description for rendering: one full ellipse command.
    pub fn path(&self) -> Vec<PathCommand> {
        vec![PathCommand::Ellipse {
            center: self.center,
            radius: self.radius,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::polygon::Polygon;

    #[test]
    fn bounds_use_inclusive_pixel_convention() {
        let circle = Circle::new(5.0, 10.0, 10.0);
        let bounds = circle.bounds();
        assert!((bounds.left - 5.0).abs() < 1e-6);
        assert!((bounds.right - 14.0).abs() < 1e-6);
        assert!((bounds.top - 5.0).abs() < 1e-6);
        assert!((bounds.bottom - 14.0).abs() < 1e-6);
    }

    #[test]
    fn dimensions_are_full_diameter() {
        let circle = Circle::new(5.0, 0.0, 0.0);
        let dim = circle.dimensions();
        assert!((dim.width - 10.0).abs() < 1e-6);
        assert!((dim.height - 10.0).abs() < 1e-6);
    }

    #[test]
    fn project_widens_center_dot_by_radius() {
        let circle = Circle::new(3.0, 10.0, 0.0);
        let proj = circle.project(Vec2::new(1.0, 0.0));
        assert!((proj.min - 7.0).abs() < 1e-6);
        assert!((proj.max - 13.0).abs() < 1e-6);
    }

    #[test]
    fn rotate_is_identity() {
        let mut circle = Circle::new(3.0, 10.0, 20.0);
        circle.rotate(1.5);
        assert_eq!(circle, Circle::new(3.0, 10.0, 20.0));
    }

    #[test]
    fn normal_toward_circle_connects_centers() {
        let a = Circle::new(2.0, 0.0, 0.0);
        let b = Shape::Circle(Circle::new(2.0, 3.0, 4.0));
        let axis = a.normal_toward(&b);
        assert!((axis.x - 3.0).abs() < 1e-6);
        assert!((axis.y - 4.0).abs() < 1e-6);
    }

    #[test]
    fn normal_toward_polygon_picks_euclidean_nearest_vertex() {
        // (3,0) is nearest by true distance (3 vs 7 vs ~14). A distance that
        // reused the vertex x for the y term would score (0,7) as zero and
        // pick the wrong vertex.
        let circle = Circle::new(1.0, 0.0, 0.0);
        let polygon = Shape::Polygon(
            Polygon::new(vec![
                Vec2::new(0.0, 7.0),
                Vec2::new(3.0, 0.0),
                Vec2::new(10.0, 10.0),
            ])
            .unwrap(),
        );
        let axis = circle.normal_toward(&polygon);
        assert!((axis.x - 3.0).abs() < 1e-6);
        assert!((axis.y - 0.0).abs() < 1e-6);
    }
}

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::{Bounds, Dimensions};
use super::circle::Circle;
use super::path::PathCommand;
use super::polygon::Polygon;
use crate::components::position::PositionComponent;

/// Degenerate-geometry error. Validation happens at construction (and on the
/// serde path), which keeps the geometry queries themselves infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// A polygon needs at least one vertex for bounds/path to be defined.
    EmptyPolygon,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::EmptyPolygon => write!(f, "polygon has no vertices"),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Interval covered by a shape's shadow on a 1-D axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub min: f32,
    pub max: f32,
}

impl Projection {
    /// Whether two intervals overlap; touching endpoints count.
    pub fn overlaps(&self, other: &Projection) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

/// Collision shape: the closed set of primitives the engine collides. Every
/// operation dispatches with an exhaustive match, so an unsupported shape
/// pairing cannot be expressed.
///
/// Each shape is exclusively owned by the query that created it; `clone` is
/// the only way to branch state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Polygon(Polygon),
    Circle(Circle),
}

impl Shape {
    /// Parse a shape (e.g. a collision mask in a scene manifest) from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Move the shape by `(dx, dy)` in place.
    pub fn translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        match self {
            Shape::Polygon(polygon) => {
                polygon.translate(dx, dy);
            }
            Shape::Circle(circle) => {
                circle.translate(dx, dy);
            }
        }
        self
    }

    /// Rotate the shape in place; see `Polygon::rotate` for the pivot and
    /// ordering contract. Circles are unaffected.
    pub fn rotate(&mut self, theta: f32) -> &mut Self {
        match self {
            Shape::Polygon(polygon) => {
                polygon.rotate(theta);
            }
            Shape::Circle(circle) => {
                circle.rotate(theta);
            }
        }
        self
    }

    pub fn project(&self, axis: Vec2) -> Projection {
        match self {
            Shape::Polygon(polygon) => polygon.project(axis),
            Shape::Circle(circle) => circle.project(axis),
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::Polygon(polygon) => polygon.bounds(),
            Shape::Circle(circle) => circle.bounds(),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        match self {
            Shape::Polygon(polygon) => polygon.dimensions(),
            Shape::Circle(circle) => circle.dimensions(),
        }
    }

    /// Ground-height query over `[left, right]`; see `Polygon::minimum`.
    /// Ground queries only apply to polygonal platforms, so circles report
    /// no surface.
    pub fn minimum(&self, left: f32, right: f32) -> f32 {
        match self {
            Shape::Polygon(polygon) => polygon.minimum(left, right),
            Shape::Circle(_) => f32::INFINITY,
        }
    }

    pub fn path(&self) -> Vec<PathCommand> {
        match self {
            Shape::Polygon(polygon) => polygon.path(),
            Shape::Circle(circle) => circle.path(),
        }
    }
}

/// Build the world-space collision shape for an entity's position snapshot.
///
/// An explicit mask is cloned; otherwise an implicit rectangle is
/// synthesized from width/height. The shape is rotated first (around its own
/// local center) and then translated to `(x, y)`. A circle mask gets one
/// extra `(radius, radius)` translate so `(x, y)` reads as the top-left
/// bounding-box origin for every shape kind.
///
/// The snapshot is read once; the returned shape is freshly owned and shares
/// no state with the entity or with previous queries.
pub fn shape_for(position: &PositionComponent) -> Shape {
    let mut shape = match &position.mask {
        Some(mask) => mask.clone(),
        None => {
            if position.width <= 0.0 || position.height <= 0.0 {
                log::warn!(
                    "implicit collision rect with degenerate size {}x{}",
                    position.width,
                    position.height
                );
            }
            Shape::Polygon(Polygon::rect(position.width, position.height))
        }
    };

    shape
        .rotate(position.rotation)
        .translate(position.pos.x, position.pos.y);

    if let Shape::Circle(circle) = &mut shape {
        let radius = circle.radius;
        circle.translate(radius, radius);
    }

    shape
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_for_synthesizes_inclusive_rect() {
        let position = PositionComponent::new(10.0, 5.0).with_pos(Vec2::new(3.0, 4.0));
        let shape = shape_for(&position);
        let bounds = shape.bounds();
        assert!((bounds.left - 3.0).abs() < 1e-6);
        assert!((bounds.right - 12.0).abs() < 1e-6);
        assert!((bounds.top - 4.0).abs() < 1e-6);
        assert!((bounds.bottom - 8.0).abs() < 1e-6);
    }

    #[test]
    fn shape_for_clones_mask_without_mutating_entity() {
        let mask = Shape::Polygon(Polygon::rect(8.0, 8.0));
        let position = PositionComponent::new(8.0, 8.0)
            .with_pos(Vec2::new(50.0, 50.0))
            .with_mask(mask.clone());
        let shape = shape_for(&position);
        assert!((shape.bounds().left - 50.0).abs() < 1e-6);
        // The entity still holds the untranslated mask.
        assert_eq!(position.mask, Some(mask));
    }

    #[test]
    fn shape_for_anchors_circle_mask_at_top_left() {
        let mask = Shape::Circle(Circle::new(5.0, 0.0, 0.0));
        let position = PositionComponent::new(10.0, 10.0)
            .with_pos(Vec2::new(10.0, 10.0))
            .with_mask(mask);
        let shape = shape_for(&position);
        let bounds = shape.bounds();
        assert!((bounds.left - 10.0).abs() < 1e-6);
        assert!((bounds.top - 10.0).abs() < 1e-6);
        assert!((bounds.right - 19.0).abs() < 1e-6);
        assert!((bounds.bottom - 19.0).abs() < 1e-6);
    }

    #[test]
    fn shape_for_rotates_before_translating() {
        // 11x21 rect turned a quarter: width and height swap around the
        // local (5, 10) pivot, and only then does the shape move to (100, 50).
        let position = PositionComponent::new(11.0, 21.0)
            .with_pos(Vec2::new(100.0, 50.0))
            .with_rotation(std::f32::consts::FRAC_PI_2);
        let shape = shape_for(&position);
        let bounds = shape.bounds();
        assert!((bounds.left - 95.0).abs() < 1e-3);
        assert!((bounds.right - 115.0).abs() < 1e-3);
        assert!((bounds.top - 55.0).abs() < 1e-3);
        assert!((bounds.bottom - 65.0).abs() < 1e-3);
    }

    #[test]
    fn projection_overlap_is_endpoint_inclusive() {
        let a = Projection { min: 0.0, max: 5.0 };
        let b = Projection { min: 5.0, max: 9.0 };
        let c = Projection { min: 5.1, max: 9.0 };
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn mask_json_round_trip() {
        let circle = Shape::from_json(r#"{"circle":{"radius":5.0,"center":[10.0,10.0]}}"#)
            .unwrap();
        assert_eq!(circle, Shape::Circle(Circle::new(5.0, 10.0, 10.0)));

        let polygon =
            Shape::from_json(r#"{"polygon":[[0.0,0.0],[9.0,0.0],[9.0,9.0],[0.0,9.0]]}"#)
                .unwrap();
        let json = serde_json::to_string(&polygon).unwrap();
        assert_eq!(Shape::from_json(&json).unwrap(), polygon);
    }

    #[test]
    fn mask_json_rejects_empty_polygon() {
        assert!(Shape::from_json(r#"{"polygon":[]}"#).is_err());
    }
}

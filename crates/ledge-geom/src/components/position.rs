use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geometry::shape::Shape;

/// Position snapshot consumed by the shape factory: the interface boundary
/// with the entity layer. `(pos, width, height)` describe the entity's
/// top-left-anchored bounding box; `mask` overrides the implicit rectangle
/// with an explicit collision shape.
///
/// The factory reads a snapshot once per query and never retains a
/// reference to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionComponent {
    /// Top-left origin of the entity's bounding box in world space.
    pub pos: Vec2,
    /// Bounding-box width in pixels.
    pub width: f32,
    /// Bounding-box height in pixels.
    pub height: f32,
    /// Rotation in radians, applied around the shape's local center.
    #[serde(default)]
    pub rotation: f32,
    /// Explicit collision mask; when absent the factory synthesizes a
    /// rectangle from width/height.
    #[serde(default)]
    pub mask: Option<Shape>,
}

impl PositionComponent {
    /// Create a snapshot of the given size at the origin.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            width,
            height,
            rotation: 0.0,
            mask: None,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_mask(mut self, mask: Shape) -> Self {
        self.mask = Some(mask);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::circle::Circle;

    #[test]
    fn builder_fills_fields() {
        let position = PositionComponent::new(16.0, 32.0)
            .with_pos(Vec2::new(100.0, 200.0))
            .with_rotation(0.5)
            .with_mask(Shape::Circle(Circle::new(8.0, 0.0, 0.0)));
        assert!((position.width - 16.0).abs() < 1e-6);
        assert!((position.pos.y - 200.0).abs() < 1e-6);
        assert!((position.rotation - 0.5).abs() < 1e-6);
        assert!(position.mask.is_some());
    }

    #[test]
    fn parses_from_scene_json() {
        let json = r#"{
            "pos": [10.0, 20.0],
            "width": 16.0,
            "height": 16.0,
            "mask": { "circle": { "radius": 8.0, "center": [0.0, 0.0] } }
        }"#;
        let position: PositionComponent = serde_json::from_str(json).unwrap();
        assert!((position.pos.x - 10.0).abs() < 1e-6);
        assert!((position.rotation - 0.0).abs() < 1e-6);
        assert_eq!(
            position.mask,
            Some(Shape::Circle(Circle::new(8.0, 0.0, 0.0)))
        );
    }
}

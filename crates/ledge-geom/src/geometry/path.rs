use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One step of a shape's boundary, for a renderer to replay onto its own
/// path type. The geometry core emits these instead of touching any canvas
/// or GPU backend directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Full circle outline around `center`.
    Ellipse { center: Vec2, radius: f32 },
}

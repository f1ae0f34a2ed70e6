pub mod components;
pub mod geometry;
pub mod systems;

// Re-export key types at crate root for convenience
pub use components::position::PositionComponent;
pub use geometry::bounds::{Bounds, Dimensions};
pub use geometry::circle::Circle;
pub use geometry::path::PathCommand;
pub use geometry::polygon::Polygon;
pub use geometry::shape::{shape_for, Projection, Shape, ShapeError};
pub use systems::collision::overlaps;

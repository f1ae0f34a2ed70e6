pub mod bounds;
pub mod circle;
pub mod path;
pub mod polygon;
pub mod shape;

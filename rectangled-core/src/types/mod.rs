//! Core data types of the rectangled crate.
//!
//! - **Geometry**: [`Rectangle`], a labeled axis-aligned box with all pairwise
//!   operations (overlap, touch, overlap region).
//! - **Edges**: [`Edge`] and [`EdgeCoordinates`], used to report where two
//!   rectangles touch.
//!
//! All types are serializable with Serde.

pub mod edge;
pub mod geometry;

pub use edge::{Edge, EdgeCoordinates};
pub use geometry::{Coordinate, Rectangle};

/// A rectangle with `i32` coordinates.
pub type RectangleI32<Id> = Rectangle<Id, i32>;
/// A rectangle with `i64` coordinates.
pub type RectangleI64<Id> = Rectangle<Id, i64>;

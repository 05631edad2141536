//! Rectangle sides and the segments two rectangles share along them.

use serde::{Deserialize, Serialize};
use std::fmt;

use num_traits::{WrappingAdd, WrappingSub};

use super::geometry::{Coordinate, Rectangle};

/// One of the four sides of a rectangle.
///
/// The declaration order is the canonical order used by
/// [`Rectangle::touches`]: `Top`, `Right`, `Bottom`, `Left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// All edges in canonical order.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// The edge on the other side of the rectangle.
    ///
    /// When two rectangles sit side by side, the edge one of them touches on is
    /// the opposite of the edge the other touches on.
    pub const fn opposite(self) -> Edge {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Right => Edge::Left,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
        }
    }

    /// Returns `true` for `Top` and `Bottom`, whose segments run along the x axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        };
        f.write_str(name)
    }
}

/// A boundary segment shared by two rectangles.
///
/// The segment is stored with the same `(x, y)-(w, z)` corner convention as
/// [`Rectangle`], so it is always a degenerate box: `y == z` for segments on a
/// top or bottom edge, `x == w` for segments on a left or right edge.
///
/// `id` names the rectangle that owns the segment, which is the *other*
/// rectangle passed to [`Rectangle::touch_coordinates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeCoordinates<Id, T = i64> {
    pub id: Id,
    pub x: T,
    pub y: T,
    pub w: T,
    pub z: T,
}

impl<Id, T: Coordinate> EdgeCoordinates<Id, T> {
    /// Length of the shared segment along its edge, wrapping on overflow.
    pub fn length(&self) -> T {
        self.w.wrapping_sub(&self.x).wrapping_add(&self.z.wrapping_sub(&self.y))
    }

    /// Converts the segment into a zero-area [`Rectangle`] with the same label and corners.
    pub fn into_rectangle(self) -> Rectangle<Id, T> {
        Rectangle::new(self.id, self.x, self.y, self.w, self.z)
    }
}

//! Labeled axis-aligned rectangles and the pairwise geometry between them.
//!
//! A [`Rectangle`] is stored as two arbitrary corners `(x, y)` and `(w, z)`.
//! Nothing about their order is enforced: every query works on the normalized
//! sides ([`left`](Rectangle::left), [`right`](Rectangle::right),
//! [`top`](Rectangle::top), [`bottom`](Rectangle::bottom)), so swapping the
//! corners never changes a result. y grows downwards, so `top` is the smaller y.
//!
//! There are two predicate families:
//!
//! - [`Rectangle::overlaps`] is a strict interior test. Sharing a boundary line
//!   is not an overlap.
//! - [`Rectangle::touches`] and [`Rectangle::touch_coordinates`] look for
//!   boundary lines that coincide and share a segment of positive length.
//!   Rectangles can touch and overlap at the same time (identical rectangles
//!   touch on all four edges), or touch without overlapping (neighbours).

use num_traits::{PrimInt, WrappingAdd, WrappingMul, WrappingSub, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::edge::{Edge, EdgeCoordinates};
use crate::error::ValidationError;

/// Integer types usable as rectangle coordinates.
///
/// Coordinate arithmetic (`width`, `height`, `area`, `offset`) wraps around on
/// overflow instead of panicking.
pub trait Coordinate: PrimInt + WrappingAdd + WrappingSub + WrappingMul {}

impl<T: PrimInt + WrappingAdd + WrappingSub + WrappingMul> Coordinate for T {}

/// An axis-aligned rectangle carrying a caller-supplied label.
///
/// # Type Parameters
///
/// * `Id`: An opaque label. It takes no part in any computation; it is carried
///   through so results can say which rectangle they belong to.
/// * `T`: The integer coordinate type, `i64` unless stated otherwise.
///
/// # Examples
///
/// ```
/// use rectangled_core::{Edge, Rectangle};
///
/// let upper = Rectangle::new("upper", 0, 0, 10, 10);
/// let lower = Rectangle::new("lower", 0, 10, 10, 20);
///
/// assert!(!upper.overlaps(&lower));
/// assert_eq!(upper.touches(&lower), vec![Edge::Bottom]);
/// assert_eq!(lower.touches(&upper), vec![Edge::Top]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rectangle<Id, T = i64> {
    /// Caller label.
    pub id: Id,
    /// x of the first corner.
    pub x: T,
    /// y of the first corner.
    pub y: T,
    /// x of the second corner.
    pub w: T,
    /// y of the second corner.
    pub z: T,
}

impl<Id, T: Coordinate> Rectangle<Id, T> {
    /// Creates a rectangle from two corners. No validation is performed.
    pub const fn new(id: Id, x: T, y: T, w: T, z: T) -> Self {
        Rectangle { id, x, y, w, z }
    }

    /// Returns the label.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Returns a rectangle with the same corners and a new label.
    pub fn with_id<NewId>(self, id: NewId) -> Rectangle<NewId, T> {
        Rectangle::new(id, self.x, self.y, self.w, self.z)
    }

    /// The smaller of the two x coordinates.
    pub fn left(&self) -> T {
        self.x.min(self.w)
    }

    /// The larger of the two x coordinates.
    pub fn right(&self) -> T {
        self.x.max(self.w)
    }

    /// The smaller of the two y coordinates.
    pub fn top(&self) -> T {
        self.y.min(self.z)
    }

    /// The larger of the two y coordinates.
    pub fn bottom(&self) -> T {
        self.y.max(self.z)
    }

    /// Horizontal extent. Never negative unless the span exceeds `T::MAX`, in
    /// which case it wraps.
    pub fn width(&self) -> T {
        self.right().wrapping_sub(&self.left())
    }

    /// Vertical extent. Never negative unless the span exceeds `T::MAX`, in
    /// which case it wraps.
    pub fn height(&self) -> T {
        self.bottom().wrapping_sub(&self.top())
    }

    /// `width * height`, wrapping on overflow. Zero when either dimension is zero.
    pub fn area(&self) -> T {
        self.width().wrapping_mul(&self.height())
    }

    /// Checks that the rectangle has a positive area and that its corners were
    /// given as top-left then bottom-right.
    ///
    /// Validation is never applied implicitly; every other operation accepts
    /// degenerate and flipped rectangles.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::ZeroArea`] if the normalized width or height is zero.
    ///   This takes precedence over `BadPoints`.
    /// - [`ValidationError::BadPoints`] if `x > w` or `y > z` on the raw corners.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.width().is_zero() || self.height().is_zero() {
            tracing::trace!(reason = "zero_area", "rectangle failed validation");
            return Err(ValidationError::ZeroArea);
        }

        if self.x > self.w || self.y > self.z {
            tracing::trace!(reason = "bad_points", "rectangle failed validation");
            return Err(ValidationError::BadPoints);
        }

        Ok(())
    }

    /// Shorthand for `self.validate().is_ok()`.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns the same rectangle with its corners reordered to
    /// `(left, top)-(right, bottom)`.
    pub fn normalized(&self) -> Self
    where
        Id: Clone,
    {
        Rectangle::new(self.id.clone(), self.left(), self.top(), self.right(), self.bottom())
    }

    /// Moves the rectangle by the first corner of `target`.
    ///
    /// `target.x` is added to `x`, `w` and `z`; `target.y` is added to `y` only.
    /// Note that `z` moves by `target.x`, not `target.y`.
    pub fn offset(&self, target: &Rectangle<Id, T>) -> Self
    where
        Id: Clone,
    {
        Rectangle::new(
            self.id.clone(),
            self.x.wrapping_add(&target.x),
            self.y.wrapping_add(&target.y),
            self.w.wrapping_add(&target.x),
            self.z.wrapping_add(&target.x),
        )
    }

    /// Returns `true` if the interiors of the two rectangles intersect.
    ///
    /// Comparisons are strict, so rectangles that only share an edge or a
    /// corner do not overlap. The relation is symmetric.
    pub fn overlaps(&self, other: &Rectangle<Id, T>) -> bool {
        self.shares_horizontal_span(other) && self.shares_vertical_span(other)
    }

    /// Lists the edges of `self` that lie on a boundary line of `other` and
    /// share a segment of positive length with it.
    ///
    /// An edge touches when its line coincides with either parallel side of
    /// `other` (a neighbour's opposite side, or the same side of an overlapping
    /// rectangle) and the perpendicular spans overlap with positive extent.
    /// Meeting at a single corner point is not a touch.
    ///
    /// Edges are returned in the order `Top`, `Right`, `Bottom`, `Left`.
    pub fn touches(&self, other: &Rectangle<Id, T>) -> Vec<Edge> {
        let edges: Vec<Edge> = Edge::ALL
            .into_iter()
            .filter(|edge| self.touches_on(other, *edge))
            .collect();

        tracing::trace!(count = edges.len(), "computed touching edges");
        edges
    }

    /// Returns the segment `self` shares with `other` on `edge`, or `None` if
    /// they do not touch there.
    ///
    /// The segment lies on `self`'s edge line and spans the intersection of the
    /// two rectangles' extents along that edge. It is labeled with `other`'s id.
    ///
    /// `edge` is in `self.touches(other)` exactly when this returns `Some`.
    pub fn touch_coordinates(
        &self,
        other: &Rectangle<Id, T>,
        edge: Edge,
    ) -> Option<EdgeCoordinates<Id, T>>
    where
        Id: Clone,
    {
        if !self.touches_on(other, edge) {
            return None;
        }

        let line = self.edge_line(edge);
        let coords = if edge.is_horizontal() {
            EdgeCoordinates {
                id: other.id.clone(),
                x: self.left().max(other.left()),
                y: line,
                w: self.right().min(other.right()),
                z: line,
            }
        } else {
            EdgeCoordinates {
                id: other.id.clone(),
                x: line,
                y: self.top().max(other.top()),
                w: line,
                z: self.bottom().min(other.bottom()),
            }
        };

        Some(coords)
    }

    /// Every touching edge of `self` paired with its shared segment, in
    /// canonical edge order.
    pub fn touching_edges(&self, other: &Rectangle<Id, T>) -> Vec<(Edge, EdgeCoordinates<Id, T>)>
    where
        Id: Clone,
    {
        Edge::ALL
            .into_iter()
            .filter_map(|edge| self.touch_coordinates(other, edge).map(|coords| (edge, coords)))
            .collect()
    }

    /// Returns the region covered by both rectangles, labeled with `other`'s
    /// id, or `None` if they do not overlap.
    ///
    /// The result is always normalized.
    pub fn overlapping_area(&self, other: &Rectangle<Id, T>) -> Option<Rectangle<Id, T>>
    where
        Id: Clone,
    {
        if !self.overlaps(other) {
            return None;
        }

        Some(Rectangle::new(
            other.id.clone(),
            self.left().max(other.left()),
            self.top().max(other.top()),
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        ))
    }

    fn edge_line(&self, edge: Edge) -> T {
        match edge {
            Edge::Top => self.top(),
            Edge::Right => self.right(),
            Edge::Bottom => self.bottom(),
            Edge::Left => self.left(),
        }
    }

    fn touches_on(&self, other: &Rectangle<Id, T>, edge: Edge) -> bool {
        let line = self.edge_line(edge);
        if edge.is_horizontal() {
            (line == other.top() || line == other.bottom()) && self.shares_horizontal_span(other)
        } else {
            (line == other.left() || line == other.right()) && self.shares_vertical_span(other)
        }
    }

    fn shares_horizontal_span(&self, other: &Rectangle<Id, T>) -> bool {
        spans_overlap(self.left(), self.right(), other.left(), other.right())
    }

    fn shares_vertical_span(&self, other: &Rectangle<Id, T>) -> bool {
        spans_overlap(self.top(), self.bottom(), other.top(), other.bottom())
    }
}

// Open intervals (a0, a1) and (b0, b1) intersect.
fn spans_overlap<T: Coordinate>(a0: T, a1: T, b0: T, b1: T) -> bool {
    a0 < b1 && b0 < a1
}

impl<Id: fmt::Display, T: fmt::Display> fmt::Display for Rectangle<Id, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})-({}, {})", self.id, self.x, self.y, self.w, self.z)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_rect() -> impl Strategy<Value = Rectangle<u8, i64>> {
        (any::<u8>(), -40i64..40, -40i64..40, -40i64..40, -40i64..40)
            .prop_map(|(id, x, y, w, z)| Rectangle::new(id, x, y, w, z))
    }

    // Positive area, corners in either order.
    fn solid_rect() -> impl Strategy<Value = Rectangle<u8, i64>> {
        (any::<u8>(), -40i64..40, -40i64..40, 1i64..30, 1i64..30, any::<bool>(), any::<bool>()).prop_map(
            |(id, x, y, width, height, flip_x, flip_y)| {
                let (x, w) = if flip_x { (x + width, x) } else { (x, x + width) };
                let (y, z) = if flip_y { (y + height, y) } else { (y, y + height) };
                Rectangle::new(id, x, y, w, z)
            },
        )
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in any_rect(), b in any_rect()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn touches_agrees_with_touch_coordinates(a in any_rect(), b in any_rect()) {
            let touching = a.touches(&b);
            for edge in Edge::ALL {
                prop_assert_eq!(touching.contains(&edge), a.touch_coordinates(&b, edge).is_some());
            }
            let pairs: Vec<Edge> = a.touching_edges(&b).into_iter().map(|(edge, _)| edge).collect();
            prop_assert_eq!(pairs, touching);
        }

        #[test]
        fn area_is_width_times_height(a in any_rect()) {
            prop_assert!(a.width() >= 0);
            prop_assert!(a.height() >= 0);
            prop_assert_eq!(a.area(), a.width() * a.height());
        }

        #[test]
        fn corner_order_does_not_matter(a in any_rect(), b in any_rect()) {
            let flipped = Rectangle::new(a.id, a.w, a.z, a.x, a.y);
            prop_assert_eq!(flipped.overlaps(&b), a.overlaps(&b));
            prop_assert_eq!(flipped.touches(&b), a.touches(&b));
            prop_assert_eq!(flipped.overlapping_area(&b), a.overlapping_area(&b));
            prop_assert_eq!(flipped.area(), a.area());
        }

        #[test]
        fn neighbours_touch_on_opposite_edges(a in solid_rect(), b in solid_rect()) {
            prop_assume!(!a.overlaps(&b));
            let forward = a.touches(&b);
            let reverse: Vec<Edge> = b.touches(&a).into_iter().map(Edge::opposite).collect();
            let mut reverse_sorted = reverse;
            reverse_sorted.sort();
            prop_assert_eq!(forward, reverse_sorted);
        }

        #[test]
        fn touch_segments_have_positive_length(a in solid_rect(), b in solid_rect()) {
            for (edge, coords) in a.touching_edges(&b) {
                prop_assert!(coords.length() > 0);
                prop_assert_eq!(coords.id, b.id);
                if edge.is_horizontal() {
                    prop_assert_eq!(coords.y, coords.z);
                } else {
                    prop_assert_eq!(coords.x, coords.w);
                }
            }
        }

        #[test]
        fn overlapping_area_lies_within_both(a in any_rect(), b in any_rect()) {
            match a.overlapping_area(&b) {
                Some(region) => {
                    prop_assert!(a.overlaps(&b));
                    prop_assert_eq!(region.id, b.id);
                    prop_assert!(region.area() > 0);
                    prop_assert!(region.left() >= a.left() && region.left() >= b.left());
                    prop_assert!(region.top() >= a.top() && region.top() >= b.top());
                    prop_assert!(region.right() <= a.right() && region.right() <= b.right());
                    prop_assert!(region.bottom() <= a.bottom() && region.bottom() <= b.bottom());
                    prop_assert_eq!(b.overlapping_area(&a).map(|r| r.with_id(b.id)), Some(region));
                }
                None => prop_assert!(!a.overlaps(&b)),
            }
        }
    }
}

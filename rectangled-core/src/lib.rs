//! # Rectangled Core Library (`rectangled-core`)
//!
//! Exact-integer geometry for labeled, axis-aligned rectangles.
//!
//! A [`Rectangle`] is two corner points plus an opaque label of any type. Given
//! two rectangles, the crate answers:
//!
//! - do their interiors overlap ([`Rectangle::overlaps`]), and where
//!   ([`Rectangle::overlapping_area`]);
//! - which of the receiver's edges lie along the other's boundary
//!   ([`Rectangle::touches`]), and on which exact segment
//!   ([`Rectangle::touch_coordinates`]);
//! - plus area, width, height, offsetting and validation.
//!
//! Corners may be given in either order; all queries normalize them first.
//! Every operation is a pure function of its inputs and never panics on
//! degenerate rectangles. [`Rectangle::validate`] is the only fallible call.
//!
//! ## Ambient services
//!
//! - **Error Handling**: [`CoreError`] wraps [`ValidationError`], [`ConfigError`]
//!   and [`LoggingError`].
//! - **Configuration**: TOML-based [`CoreConfig`] loaded by [`ConfigLoader`].
//! - **Logging**: geometry emits `tracing` events; [`init_logging`] and
//!   [`init_minimal_logging`] install a subscriber.
//!
//! ## Usage
//!
//! ```
//! use rectangled_core::{Edge, EdgeCoordinates, Rectangle};
//!
//! let below = Rectangle::new("below", 0, 10, 20, 20);
//! let above = Rectangle::new("above", 5, 0, 15, 10);
//!
//! assert_eq!(below.touches(&above), vec![Edge::Top]);
//! assert_eq!(
//!     below.touch_coordinates(&above, Edge::Top),
//!     Some(EdgeCoordinates { id: "above", x: 5, y: 10, w: 15, z: 10 }),
//! );
//!
//! let a = Rectangle::new("a", 0, 0, 10, 10);
//! let b = Rectangle::new("b", 5, 5, 15, 15);
//! assert_eq!(a.overlapping_area(&b), Some(Rectangle::new("b", 5, 5, 10, 10)));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

// Re-export key types for convenience
pub use config::{ConfigLoader, CoreConfig, LoggingConfig};
pub use error::{ConfigError, CoreError, LoggingError, ValidationError};
pub use logging::{init_logging, init_minimal_logging};
pub use types::{Coordinate, Edge, EdgeCoordinates, Rectangle, RectangleI32, RectangleI64};

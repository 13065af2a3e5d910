#![warn(missing_docs)]

//! Axis-aligned box model for simulation scripting.
//!
//! A [`RectBox`] normalizes a signed box definition into a minimum corner
//! and non-negative size, enumerates its 8 vertices, and answers face
//! queries as dimensioned coordinate strings that the modeler's
//! face-picking and boundary-assignment commands accept.
//!
//! # Example
//!
//! ```
//! use hfbox::{FaceDirection, RectBox};
//!
//! let cell = RectBox::new("Box1", "mm", [0.0, 0.0, -15.0], [10.8, 10.8, 50.0]);
//! assert_eq!(cell.face_point(FaceDirection::Up), ["5.4mm", "5.4mm", "35.0mm"]);
//!
//! let edges = cell.face_edge(FaceDirection::Down);
//! assert_eq!(edges[0], edges[2]);
//! ```

pub mod anchor;
pub mod coord;
pub mod direction;
pub mod document;
pub mod error;
pub mod rect_box;

pub use anchor::{Edge, FaceAnchor};
pub use coord::{dimension_point, format_number, format_point, Dimensioned, DimensionedPoint};
pub use direction::FaceDirection;
pub use document::{BoxSpec, CellDocument, DEFAULT_UNIT};
pub use error::{BoxError, Result};
pub use hfbox_math::{Axis, Point3, Tolerance, Vec3};
pub use rect_box::{FaceFrame, RectBox};

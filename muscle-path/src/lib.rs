//! Muscle path curves.
//!
//! A muscle path is the 3D centerline a muscle belly follows between its
//! attachment points. This crate builds one from current anchor positions:
//!
//! - [`MusclePath`] - straight segment (no guide) or quadratic Bézier bowed
//!   through a guide control point, with true arc-length integration and
//!   arc-length parameterized [`MusclePath::point_at`]
//! - [`QuadraticBezier`] - the underlying curve primitive
//!
//! Paths are throwaway values: rebuilt from fresh anchor positions every
//! frame, never stored across frames. Construction builds a cumulative
//! arc-length table once, so per-ring queries during tube generation are a
//! binary search plus a local linear interpolation.
//!
//! # Example
//!
//! ```
//! use muscle_path::MusclePath;
//! use nalgebra::Point3;
//!
//! let path = MusclePath::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(2.0, 0.0, 0.0),
//!     Some(Point3::new(1.0, 2.0, 0.0)),
//! );
//!
//! assert!(path.length() > 2.0); // bowed, so longer than the chord
//! let mid = path.point_at(0.5);
//! assert!(mid.y > 0.0);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::suboptimal_flops
)]

mod bezier;
mod path;

pub use bezier::QuadraticBezier;
pub use path::{MusclePath, MIN_LENGTH};

pub use nalgebra::{Point3, Vector3};

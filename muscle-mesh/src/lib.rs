//! Procedural muscle deformation.
//!
//! Everything between a muscle's path and the triangles a renderer uploads:
//!
//! - [`bulge_factor`] - the length-to-swelling physiology curve
//! - [`Profile`] - tendon/belly radius and color zoning along the tube
//! - [`generate_tube`] - the per-frame tube mesh generator
//! - [`MuscleMesh`] - the output buffer: positions, colors, normals, indices
//!
//! # Design
//!
//! Mesh generation is a pure function of the current path, parameters, and
//! bulge factor. There is no incremental update: every call rebuilds all
//! vertex data from scratch, so nothing can drift or accumulate between
//! frames. Tube topology (ring and side counts) is fixed per muscle, which
//! keeps the index buffer constant and lets a renderer reuse it.
//!
//! Degenerate geometry is handled by flooring and clamping, not by errors;
//! the only fallible part is parameter validation in [`generate_tube`].
//!
//! # Example
//!
//! ```
//! use muscle_mesh::{bulge_factor, generate_tube, Rgb, TubeParams};
//! use muscle_path::MusclePath;
//! use nalgebra::Point3;
//!
//! let path = MusclePath::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, -3.0, 0.0),
//!     Some(Point3::new(0.3, -1.5, 0.5)),
//! );
//!
//! let params = TubeParams {
//!     max_radius: 0.45,
//!     tendon_start: 0.05,
//!     tendon_end: 0.15,
//!     base_color: Rgb::new(225, 29, 72),
//!     ..TubeParams::default()
//! };
//!
//! let bulge = bulge_factor(path.length(), 3.3, 2.2);
//! let mesh = generate_tube(&path, &params, bulge)?;
//! assert_eq!(mesh.vertex_count(), params.rings * params.sides);
//! # Ok::<(), muscle_mesh::MeshError>(())
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::suboptimal_flops
)]

mod error;
mod frame;
mod mesh;
pub mod physiology;
mod profile;
mod tube;

pub use error::{MeshError, MeshResult};
pub use frame::{parallel_transport_frames, Frame};
pub use mesh::{MuscleMesh, Rgb};
pub use physiology::bulge_factor;
pub use profile::{Profile, BELLY_AMPLITUDE, BELLY_RADIUS, COLOR_BAND, TENDON_RADIUS, TENDON_TAPER};
pub use tube::{generate_tube, TubeParams, DEFAULT_RINGS, DEFAULT_SIDES, TENDON_COLOR};

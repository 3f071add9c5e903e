//! Tube mesh generation along a muscle path.

use muscle_path::MusclePath;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::frame::parallel_transport_frames;
use crate::mesh::{MuscleMesh, Rgb};
use crate::profile::Profile;

/// Default tendon color, a pale off-white.
pub const TENDON_COLOR: Rgb = Rgb::new(253, 251, 247);

/// Default number of rings along the path.
///
/// 64 segments, so `u = 0`, `0.5`, and `1` all land exactly on rings.
pub const DEFAULT_RINGS: usize = 65;

/// Default number of sides per ring.
pub const DEFAULT_SIDES: usize = 16;

/// Parameters for generating one muscle's tube mesh.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TubeParams {
    /// Number of rings along the path (minimum 2).
    pub rings: usize,
    /// Number of sides per ring (minimum 3).
    pub sides: usize,
    /// Cross-section radius at the belly peak with unit profile.
    pub max_radius: f64,
    /// Fraction of the tube occupied by the origin-side tendon.
    pub tendon_start: f64,
    /// Fraction of the tube occupied by the insertion-side tendon.
    pub tendon_end: f64,
    /// Color of the muscle belly.
    pub base_color: Rgb,
    /// Color of the tendon zones.
    pub tendon_color: Rgb,
}

impl Default for TubeParams {
    fn default() -> Self {
        Self {
            rings: DEFAULT_RINGS,
            sides: DEFAULT_SIDES,
            max_radius: 1.0,
            tendon_start: 0.0,
            tendon_end: 0.0,
            base_color: Rgb::new(255, 0, 0),
            tendon_color: TENDON_COLOR,
        }
    }
}

/// Generate an uncapped tube mesh along a muscle path.
///
/// Rings are placed at arc-length fractions `u = i / (rings - 1)`, so they
/// stay evenly spaced along the curve however it bends. Each ring's
/// cross-section sits in a parallel-transported frame (no twist between
/// rings), with radius and color taken from the tendon/belly [`Profile`]
/// scaled by `max_radius` and the given bulge factor.
///
/// Vertex normals are recomputed from the final positions, area-weighted
/// over adjacent triangles, so lighting tracks the bulge instead of the
/// analytic cylinder.
///
/// # Errors
///
/// Returns an error if `rings < 2`, `sides < 3`, or `max_radius` is not a
/// positive finite number. Geometric degeneracy (coincident anchors) is
/// not an error; the path already floors its length.
pub fn generate_tube(
    path: &MusclePath,
    params: &TubeParams,
    bulge_factor: f64,
) -> MeshResult<MuscleMesh> {
    if params.rings < 2 {
        return Err(MeshError::TooFewRings {
            min: 2,
            actual: params.rings,
        });
    }
    if params.sides < 3 {
        return Err(MeshError::TooFewSides {
            min: 3,
            actual: params.sides,
        });
    }
    if params.max_radius <= 0.0 || !params.max_radius.is_finite() {
        return Err(MeshError::InvalidRadius(params.max_radius));
    }

    let n_rings = params.rings;
    let n_sides = params.sides;
    let profile = Profile::new(params.tendon_start, params.tendon_end);

    let mut centers = Vec::with_capacity(n_rings);
    let mut tangents = Vec::with_capacity(n_rings);
    for i in 0..n_rings {
        #[allow(clippy::cast_precision_loss)]
        let u = i as f64 / (n_rings - 1) as f64;
        centers.push(path.point_at(u));
        tangents.push(path.tangent_at(u));
    }
    let frames = parallel_transport_frames(&tangents);

    let mut mesh = MuscleMesh::with_capacity(n_rings * n_sides, (n_rings - 1) * n_sides * 2);

    for (ring_idx, (center, frame)) in centers.iter().zip(frames.iter()).enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let u = ring_idx as f64 / (n_rings - 1) as f64;
        let radius = params.max_radius * profile.relative_radius(u, bulge_factor);
        let color = params
            .tendon_color
            .lerp(params.base_color, profile.color_mix(u));

        for side_idx in 0..n_sides {
            #[allow(clippy::cast_precision_loss)]
            let angle = 2.0 * std::f64::consts::PI * side_idx as f64 / n_sides as f64;
            let radial = frame.normal * angle.cos() + frame.binormal * angle.sin();

            mesh.positions.push(Point3::from(center.coords + radial * radius));
            mesh.colors.push(color);

            if ring_idx < n_rings - 1 {
                #[allow(clippy::cast_possible_truncation)]
                let (curr, next_side, next_ring, next_both) = (
                    (ring_idx * n_sides + side_idx) as u32,
                    (ring_idx * n_sides + (side_idx + 1) % n_sides) as u32,
                    ((ring_idx + 1) * n_sides + side_idx) as u32,
                    ((ring_idx + 1) * n_sides + (side_idx + 1) % n_sides) as u32,
                );

                // Two triangles per quad, counter-clockwise from outside.
                mesh.indices.push([curr, next_ring, next_side]);
                mesh.indices.push([next_side, next_ring, next_both]);
            }
        }
    }

    mesh.recompute_normals();

    Ok(mesh)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use muscle_path::Point3;
    use nalgebra::Vector3;

    use super::*;
    use crate::profile::{BELLY_AMPLITUDE, BELLY_RADIUS, TENDON_RADIUS};

    fn straight_path() -> MusclePath {
        MusclePath::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, -4.0, 0.0),
            None,
        )
    }

    fn biceps_params() -> TubeParams {
        TubeParams {
            max_radius: 0.45,
            tendon_start: 0.05,
            tendon_end: 0.15,
            base_color: Rgb::new(225, 29, 72),
            ..TubeParams::default()
        }
    }

    fn ring_radius(mesh: &MuscleMesh, path: &MusclePath, params: &TubeParams, ring: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let u = ring as f64 / (params.rings - 1) as f64;
        let center = path.point_at(u);
        (mesh.positions[ring * params.sides] - center).norm()
    }

    #[test]
    fn vertex_and_triangle_counts_are_fixed_by_topology() {
        let path = straight_path();
        let params = biceps_params();
        let mesh = generate_tube(&path, &params, 1.0).unwrap();

        assert_eq!(mesh.vertex_count(), params.rings * params.sides);
        assert_eq!(mesh.triangle_count(), (params.rings - 1) * params.sides * 2);
        assert_eq!(mesh.normals.len(), mesh.vertex_count());
        assert_eq!(mesh.colors.len(), mesh.vertex_count());
    }

    #[test]
    fn tips_have_pure_tendon_radius_for_any_bulge() {
        let path = straight_path();
        let params = biceps_params();

        for bulge in [0.25, 1.0, 6.0] {
            let mesh = generate_tube(&path, &params, bulge).unwrap();
            let tip = ring_radius(&mesh, &path, &params, 0);
            let tail = ring_radius(&mesh, &path, &params, params.rings - 1);
            assert_relative_eq!(tip, params.max_radius * TENDON_RADIUS, epsilon = 1e-9);
            assert_relative_eq!(tail, params.max_radius * TENDON_RADIUS, epsilon = 1e-9);
        }
    }

    #[test]
    fn belly_midpoint_radius_is_exact() {
        let path = straight_path();
        // Symmetric tendon zones put the belly midpoint at u = 0.5,
        // exactly on the middle ring of an odd ring count.
        let params = TubeParams {
            max_radius: 0.45,
            tendon_start: 0.1,
            tendon_end: 0.1,
            base_color: Rgb::new(225, 29, 72),
            ..TubeParams::default()
        };

        for bulge in [0.25, 1.0, 2.8, 6.0] {
            let mesh = generate_tube(&path, &params, bulge).unwrap();
            let mid = ring_radius(&mesh, &path, &params, (params.rings - 1) / 2);
            assert_relative_eq!(
                mid,
                params.max_radius * (BELLY_RADIUS + BELLY_AMPLITUDE * bulge),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn straight_tube_normals_point_radially_outward() {
        let path = straight_path();
        let params = biceps_params();
        let mesh = generate_tube(&path, &params, 1.0).unwrap();

        // Interior rings only; the open ends see half a fan of faces and
        // the taper tilts their normals along the axis.
        for ring in 20..=40 {
            for side in 0..params.sides {
                let idx = ring * params.sides + side;
                let normal = mesh.normals[idx];
                assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-9);

                #[allow(clippy::cast_precision_loss)]
                let u = ring as f64 / (params.rings - 1) as f64;
                let radial = (mesh.positions[idx] - path.point_at(u)).normalize();
                // Belly slope tilts normals along the axis, but the radial
                // component must dominate.
                assert!(normal.dot(&radial) > 0.7, "ring {ring} side {side}");
            }
        }
    }

    #[test]
    fn colors_split_tendon_and_belly() {
        let path = straight_path();
        let params = biceps_params();
        let mesh = generate_tube(&path, &params, 1.0).unwrap();

        assert_eq!(mesh.colors[0], params.tendon_color);
        assert_eq!(mesh.colors[mesh.vertex_count() - 1], params.tendon_color);

        let mid = (params.rings / 2) * params.sides;
        assert_eq!(mesh.colors[mid], params.base_color);
    }

    #[test]
    fn bulge_swells_only_the_belly() {
        let path = straight_path();
        let params = biceps_params();

        let neutral = generate_tube(&path, &params, 1.0).unwrap();
        let swollen = generate_tube(&path, &params, 3.0).unwrap();

        let mid = params.rings / 2;
        assert!(
            ring_radius(&swollen, &path, &params, mid)
                > ring_radius(&neutral, &path, &params, mid) + 0.3
        );
        assert_relative_eq!(
            ring_radius(&swollen, &path, &params, 0),
            ring_radius(&neutral, &path, &params, 0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn guided_path_rings_follow_the_curve() {
        let path = MusclePath::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Some(Point3::new(1.0, 2.0, 0.0)),
        );
        let params = biceps_params();
        let mesh = generate_tube(&path, &params, 1.0).unwrap();

        // Middle ring centers on the curve apex, not the chord.
        let mid_ring = (params.rings - 1) / 2;
        let mut center = Vector3::zeros();
        for side in 0..params.sides {
            center += mesh.positions[mid_ring * params.sides + side].coords;
        }
        #[allow(clippy::cast_precision_loss)]
        let center = center / params.sides as f64;
        assert_relative_eq!(center.y, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn degenerate_path_still_generates_finite_geometry() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let path = MusclePath::new(p, p, Some(p));
        let mesh = generate_tube(&path, &biceps_params(), 6.0).unwrap();

        for position in &mesh.positions {
            assert!(position.coords.norm().is_finite());
        }
        for normal in &mesh.normals {
            assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn rejects_invalid_parameters() {
        let path = straight_path();

        let too_few_rings = TubeParams {
            rings: 1,
            ..biceps_params()
        };
        assert!(matches!(
            generate_tube(&path, &too_few_rings, 1.0),
            Err(MeshError::TooFewRings { .. })
        ));

        let too_few_sides = TubeParams {
            sides: 2,
            ..biceps_params()
        };
        assert!(matches!(
            generate_tube(&path, &too_few_sides, 1.0),
            Err(MeshError::TooFewSides { .. })
        ));

        for bad_radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let params = TubeParams {
                max_radius: bad_radius,
                ..biceps_params()
            };
            assert!(matches!(
                generate_tube(&path, &params, 1.0),
                Err(MeshError::InvalidRadius(_))
            ));
        }
    }

    #[test]
    fn regeneration_is_deterministic() {
        let path = MusclePath::new(
            Point3::new(-1.3, 2.5, 0.4),
            Point3::new(-0.95, -1.14, 0.28),
            Some(Point3::new(-0.9, 0.7, 0.4)),
        );
        let params = biceps_params();

        let a = generate_tube(&path, &params, 1.7).unwrap();
        let b = generate_tube(&path, &params, 1.7).unwrap();
        assert_eq!(a, b);
    }
}

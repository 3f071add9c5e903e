//! Mesh container with per-vertex positions, colors, and normals.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Create a new color from RGB components.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from floating point values in [0, 1], clamped.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_float(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: (r.clamp(0.0, 1.0) * 255.0) as u8,
            g: (g.clamp(0.0, 1.0) * 255.0) as u8,
            b: (b.clamp(0.0, 1.0) * 255.0) as u8,
        }
    }

    /// Convert to floating point values in [0, 1].
    #[inline]
    #[must_use]
    pub fn to_float(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Linearly interpolate toward another color by `t ∈ [0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let (r0, g0, b0) = self.to_float();
        let (r1, g1, b1) = other.to_float();
        Self::from_float(
            r0 + (r1 - r0) * t,
            g0 + (g1 - g0) * t,
            b0 + (b1 - b0) * t,
        )
    }
}

/// An indexed triangle mesh with per-vertex color and normal.
///
/// This is the per-frame output buffer of the tube generator: positions,
/// colors, and normals are fully overwritten each regeneration, while the
/// triangle indexing is fixed by the tube topology and only depends on the
/// ring and side counts.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MuscleMesh {
    /// Vertex positions.
    pub positions: Vec<Point3<f64>>,
    /// Unit vertex normals, parallel to `positions`.
    pub normals: Vec<Vector3<f64>>,
    /// Vertex colors, parallel to `positions`.
    pub colors: Vec<Rgb>,
    /// Triangles as vertex index triples, counter-clockwise from outside.
    pub indices: Vec<[u32; 3]>,
}

impl MuscleMesh {
    /// Create an empty mesh with pre-allocated buffers.
    #[must_use]
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(triangles),
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Recompute smooth vertex normals from the current positions.
    ///
    /// Each triangle's raw cross product is accumulated onto its three
    /// vertices; its magnitude is twice the triangle area, so larger faces
    /// weigh more. Vertices with no area (fully degenerate fan) keep a +Y
    /// normal rather than a NaN.
    pub fn recompute_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.positions.len(), Vector3::zeros());

        for triangle in &self.indices {
            let [a, b, c] = triangle.map(|i| i as usize);
            let cross = (self.positions[b] - self.positions[a])
                .cross(&(self.positions[c] - self.positions[a]));

            self.normals[a] += cross;
            self.normals[b] += cross;
            self.normals[c] += cross;
        }

        for normal in &mut self.normals {
            *normal = normal.try_normalize(f64::EPSILON).unwrap_or(Vector3::y());
        }
    }

    /// Positions flattened to `f32` triples for GPU upload.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn positions_f32(&self) -> Vec<[f32; 3]> {
        self.positions
            .iter()
            .map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Normals flattened to `f32` triples for GPU upload.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn normals_f32(&self) -> Vec<[f32; 3]> {
        self.normals
            .iter()
            .map(|n| [n.x as f32, n.y as f32, n.z as f32])
            .collect()
    }

    /// Colors flattened to normalized `f32` triples for GPU upload.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn colors_f32(&self) -> Vec<[f32; 3]> {
        self.colors
            .iter()
            .map(|c| {
                let (r, g, b) = c.to_float();
                [r as f32, g as f32, b as f32]
            })
            .collect()
    }

    /// Indices flattened to a single index buffer.
    #[must_use]
    pub fn indices_flat(&self) -> Vec<u32> {
        self.indices.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn color_round_trip() {
        let color = Rgb::new(253, 251, 247);
        let (r, g, b) = color.to_float();
        assert_eq!(Rgb::from_float(r, g, b), color);
    }

    #[test]
    fn color_lerp_endpoints_and_midpoint() {
        let tendon = Rgb::new(253, 251, 247);
        let muscle = Rgb::new(225, 29, 72);

        assert_eq!(tendon.lerp(muscle, 0.0), tendon);
        assert_eq!(tendon.lerp(muscle, 1.0), muscle);

        let mid = tendon.lerp(muscle, 0.5);
        assert_eq!(mid.r, 239);
        assert_eq!(mid.g, 140);
    }

    #[test]
    fn recomputed_normals_face_away_from_a_quad() {
        // Unit square in the XY plane, CCW seen from +Z.
        let mut mesh = MuscleMesh {
            positions: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            normals: Vec::new(),
            colors: vec![Rgb::new(255, 255, 255); 4],
            indices: vec![[0, 1, 2], [0, 2, 3]],
        };
        mesh.recompute_normals();

        for normal in &mesh.normals {
            assert_relative_eq!(*normal, Vector3::z(), epsilon = 1e-12);
        }
    }

    #[test]
    fn area_weighting_favors_the_larger_face() {
        // Vertex 0 is shared by a large +Z face and a tiny +X face.
        let mut mesh = MuscleMesh {
            positions: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(10.0, 0.0, 0.0),
                Point3::new(0.0, 10.0, 0.0),
                Point3::new(0.0, 0.1, 0.0),
                Point3::new(0.0, 0.0, 0.1),
            ],
            normals: Vec::new(),
            colors: vec![Rgb::new(255, 255, 255); 5],
            indices: vec![[0, 1, 2], [0, 3, 4]],
        };
        mesh.recompute_normals();

        assert!(mesh.normals[0].z > 0.99);
        assert!(mesh.normals[0].x.abs() < 0.01);
    }

    #[test]
    fn degenerate_faces_leave_a_unit_fallback() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let mut mesh = MuscleMesh {
            positions: vec![p, p, p],
            normals: Vec::new(),
            colors: vec![Rgb::new(0, 0, 0); 3],
            indices: vec![[0, 1, 2]],
        };
        mesh.recompute_normals();

        for normal in &mesh.normals {
            assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn gpu_flattening_preserves_counts() {
        let mut mesh = MuscleMesh::with_capacity(4, 2);
        mesh.positions.push(Point3::new(1.0, 2.0, 3.0));
        mesh.normals.push(Vector3::y());
        mesh.colors.push(Rgb::new(10, 20, 30));
        mesh.indices.push([0, 0, 0]);

        assert_eq!(mesh.positions_f32(), vec![[1.0, 2.0, 3.0]]);
        assert_eq!(mesh.normals_f32(), vec![[0.0, 1.0, 0.0]]);
        assert_eq!(mesh.indices_flat(), vec![0, 0, 0]);
        assert_eq!(mesh.colors_f32().len(), 1);
    }
}

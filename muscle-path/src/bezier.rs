//! Quadratic Bézier curve primitive.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A quadratic Bézier curve defined by 3 control points.
///
/// The curve passes through the first and last control points, while the
/// middle control point "pulls" the curve toward it. Muscle paths use the
/// guide anchor as that middle point.
///
/// # Equation
///
/// ```text
/// B(t) = (1-t)²P₀ + 2(1-t)tP₁ + t²P₂
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadraticBezier {
    /// Start point.
    pub p0: Point3<f64>,
    /// Control point.
    pub p1: Point3<f64>,
    /// End point.
    pub p2: Point3<f64>,
}

impl QuadraticBezier {
    /// Create a new quadratic Bézier curve.
    #[must_use]
    pub const fn new(p0: Point3<f64>, p1: Point3<f64>, p2: Point3<f64>) -> Self {
        Self { p0, p1, p2 }
    }

    /// Evaluate the curve position at parameter `t`, clamped to [0, 1].
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;

        Point3::from(
            self.p0.coords * (s * s) + self.p1.coords * (2.0 * s * t) + self.p2.coords * (t * t),
        )
    }

    /// First derivative (velocity) at parameter `t`, clamped to [0, 1].
    #[must_use]
    pub fn derivative_at(&self, t: f64) -> Vector3<f64> {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;

        // B'(t) = 2(1-t)(P₁-P₀) + 2t(P₂-P₁)
        (self.p1 - self.p0) * (2.0 * s) + (self.p2 - self.p1) * (2.0 * t)
    }

    /// Unit tangent at parameter `t`.
    ///
    /// Falls back to the chord direction when the derivative vanishes
    /// (control point coincident with an endpoint), and to +Y when the
    /// whole curve is degenerate.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Vector3<f64> {
        let d = self.derivative_at(t);
        let norm = d.norm();
        if norm > 1e-10 {
            return d / norm;
        }

        let chord = self.p2 - self.p0;
        let chord_norm = chord.norm();
        if chord_norm > 1e-10 {
            chord / chord_norm
        } else {
            Vector3::y()
        }
    }
}

//! Anchor-to-anchor muscle paths with arc-length parameterization.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bezier::QuadraticBezier;

/// Number of parameter segments in the cumulative arc-length table.
///
/// 64 segments put a table knot on every tube ring of a 65-ring mesh, so
/// ring queries land on (or between) directly integrated values.
const ARC_SEGMENTS: usize = 64;

/// Smallest effective path length.
///
/// [`MusclePath::length`] never reports less than this, so downstream
/// ratios (physiology, ring spacing) are safe to divide by even when the
/// origin and insertion anchors coincide.
pub const MIN_LENGTH: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum Shape {
    /// Straight segment between the attachment points.
    Segment {
        start: Point3<f64>,
        end: Point3<f64>,
    },
    /// Quadratic Bézier bowed through a guide control point, with a
    /// cumulative arc-length table over `t = i / ARC_SEGMENTS`.
    Curve {
        curve: QuadraticBezier,
        arc_table: Vec<f64>,
    },
}

/// A muscle centerline between an origin and an insertion anchor.
///
/// Built fresh from world-space anchor positions each frame. Without a
/// guide the path is the straight segment; with one it is a quadratic
/// Bézier using the guide as the control point, which bows the belly
/// around the bone the way a retinaculum or pulley would.
///
/// [`MusclePath::point_at`] is parameterized by **arc-length fraction**,
/// not raw curve parameter: `u = 0.5` is the halfway point by distance
/// along the path. This keeps tube rings evenly spaced as the curve
/// reshapes. The inversion runs off a table integrated at construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MusclePath {
    shape: Shape,
    length: f64,
}

impl MusclePath {
    /// Build a path from anchor positions, guided if a guide is given.
    #[must_use]
    pub fn new(origin: Point3<f64>, insertion: Point3<f64>, guide: Option<Point3<f64>>) -> Self {
        match guide {
            Some(guide) => Self::guided(origin, guide, insertion),
            None => Self::straight(origin, insertion),
        }
    }

    /// Build a straight path between two anchors.
    #[must_use]
    pub fn straight(origin: Point3<f64>, insertion: Point3<f64>) -> Self {
        Self {
            shape: Shape::Segment {
                start: origin,
                end: insertion,
            },
            length: (insertion - origin).norm(),
        }
    }

    /// Build a quadratic path bowed through a guide control point.
    ///
    /// Arc length is integrated with composite Simpson quadrature on the
    /// derivative norm, one 3-point panel per table segment:
    ///
    /// ```text
    /// len(tᵢ, tᵢ₊₁) ≈ h/6 · (|B'(tᵢ)| + 4|B'(tᵢ₊ₕ/₂)| + |B'(tᵢ₊₁)|)
    /// ```
    #[must_use]
    pub fn guided(origin: Point3<f64>, guide: Point3<f64>, insertion: Point3<f64>) -> Self {
        let curve = QuadraticBezier::new(origin, guide, insertion);

        let mut arc_table = Vec::with_capacity(ARC_SEGMENTS + 1);
        arc_table.push(0.0);

        let h = 1.0 / ARC_SEGMENTS as f64;
        let mut cumulative = 0.0;
        for i in 0..ARC_SEGMENTS {
            let t0 = i as f64 * h;
            let t1 = t0 + h;
            let f0 = curve.derivative_at(t0).norm();
            let fm = curve.derivative_at(t0 + h / 2.0).norm();
            let f1 = curve.derivative_at(t1).norm();
            cumulative += h / 6.0 * (f0 + 4.0 * fm + f1);
            arc_table.push(cumulative);
        }

        Self {
            shape: Shape::Curve { curve, arc_table },
            length: cumulative,
        }
    }

    /// True arc length of the path, floored to [`MIN_LENGTH`].
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length.max(MIN_LENGTH)
    }

    /// Start of the path (the origin anchor).
    #[must_use]
    pub fn origin(&self) -> Point3<f64> {
        match &self.shape {
            Shape::Segment { start, .. } => *start,
            Shape::Curve { curve, .. } => curve.p0,
        }
    }

    /// End of the path (the insertion anchor).
    #[must_use]
    pub fn insertion(&self) -> Point3<f64> {
        match &self.shape {
            Shape::Segment { end, .. } => *end,
            Shape::Curve { curve, .. } => curve.p2,
        }
    }

    /// Position at arc-length fraction `u ∈ [0, 1]`, clamped.
    #[must_use]
    pub fn point_at(&self, u: f64) -> Point3<f64> {
        let u = u.clamp(0.0, 1.0);
        match &self.shape {
            Shape::Segment { start, end } => Point3::from(start.coords.lerp(&end.coords, u)),
            Shape::Curve { curve, .. } => curve.point_at(self.parameter_at(u)),
        }
    }

    /// Unit tangent at arc-length fraction `u ∈ [0, 1]`, clamped.
    ///
    /// Degenerate paths (coincident anchors) fall back to +Y so frame
    /// construction downstream always has a direction to work with.
    #[must_use]
    pub fn tangent_at(&self, u: f64) -> Vector3<f64> {
        let u = u.clamp(0.0, 1.0);
        match &self.shape {
            Shape::Segment { start, end } => {
                let direction = end - start;
                let norm = direction.norm();
                if norm > MIN_LENGTH {
                    direction / norm
                } else {
                    Vector3::y()
                }
            }
            Shape::Curve { curve, .. } => curve.tangent_at(self.parameter_at(u)),
        }
    }

    /// Invert arc-length fraction to raw curve parameter via the table.
    fn parameter_at(&self, u: f64) -> f64 {
        let Shape::Curve { arc_table, .. } = &self.shape else {
            return u;
        };

        if self.length < MIN_LENGTH {
            // Collapsed curve, the parameterizations coincide anyway.
            return u;
        }

        let target = u * self.length;
        // First knot at or beyond the target distance.
        let idx = arc_table.partition_point(|&s| s < target);
        if idx == 0 {
            return 0.0;
        }
        if idx > ARC_SEGMENTS {
            return 1.0;
        }

        let s0 = arc_table[idx - 1];
        let s1 = arc_table[idx];
        let span = s1 - s0;
        let frac = if span > 0.0 { (target - s0) / span } else { 0.0 };
        ((idx - 1) as f64 + frac) / ARC_SEGMENTS as f64
    }
}

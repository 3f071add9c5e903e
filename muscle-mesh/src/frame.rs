//! Rotation-minimizing frames along the muscle centerline.

use nalgebra::{UnitQuaternion, Vector3};

/// An orthonormal reference frame at a point on the centerline.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Tangent direction (forward along the path).
    pub tangent: Vector3<f64>,
    /// Normal direction (perpendicular to tangent).
    pub normal: Vector3<f64>,
    /// Binormal direction (perpendicular to both).
    pub binormal: Vector3<f64>,
}

impl Frame {
    /// Create an initial frame from a tangent vector.
    #[must_use]
    pub fn from_tangent(tangent: Vector3<f64>) -> Self {
        let tangent = tangent.try_normalize(f64::EPSILON).unwrap_or(Vector3::y());
        let normal = find_perpendicular(tangent);
        let binormal = tangent.cross(&normal);

        Self {
            tangent,
            normal,
            binormal,
        }
    }

    /// Transport this frame onto a new tangent with the minimal rotation.
    ///
    /// The rotation taking the old tangent to the new one is applied to the
    /// normal and binormal, so the cross-section never twists around the
    /// centerline between rings.
    #[must_use]
    pub fn transport_to(&self, new_tangent: Vector3<f64>) -> Self {
        let new_tangent = new_tangent
            .try_normalize(f64::EPSILON)
            .unwrap_or(self.tangent);

        match UnitQuaternion::rotation_between(&self.tangent, &new_tangent) {
            Some(rotation) => Self {
                tangent: new_tangent,
                normal: rotation * self.normal,
                binormal: rotation * self.binormal,
            },
            // Antiparallel tangents: flip the cross-section.
            None => Self {
                tangent: new_tangent,
                normal: -self.normal,
                binormal: -self.binormal,
            },
        }
    }
}

/// Compute parallel transport frames for a sequence of unit tangents.
///
/// The first frame seeds an arbitrary but deterministic normal; every
/// subsequent frame is the previous one transported onto the next tangent.
#[must_use]
pub fn parallel_transport_frames(tangents: &[Vector3<f64>]) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::with_capacity(tangents.len());

    for &tangent in tangents {
        let frame = match frames.last() {
            Some(previous) => previous.transport_to(tangent),
            None => Frame::from_tangent(tangent),
        };
        frames.push(frame);
    }

    frames
}

/// Find a unit vector perpendicular to the given unit vector.
fn find_perpendicular(v: Vector3<f64>) -> Vector3<f64> {
    let abs_x = v.x.abs();
    let abs_y = v.y.abs();
    let abs_z = v.z.abs();

    // Cross against the axis most perpendicular to v.
    let reference = if abs_x <= abs_y && abs_x <= abs_z {
        Vector3::x()
    } else if abs_y <= abs_z {
        Vector3::y()
    } else {
        Vector3::z()
    };

    v.cross(&reference)
        .try_normalize(f64::EPSILON)
        .unwrap_or(Vector3::x())
}

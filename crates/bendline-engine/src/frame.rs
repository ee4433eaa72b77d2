//! The moving reference frame carried across YBCR records.

use bendline_math::{arbitrary_perpendicular, Dir3, Point3, Vec3, NORM_EPS};

/// The tube tip's position and local orientation.
///
/// `direction` is the tangent the next feed advances along; `up`
/// spans the next bend's plane together with `direction`. Invariant:
/// both are unit length and mutually orthogonal before and after
/// every record. The frame is owned by exactly one run at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Current tip position.
    pub point: Point3,
    /// Unit tangent direction.
    pub direction: Dir3,
    /// Unit up vector spanning the local bend plane.
    pub up: Dir3,
}

impl Frame {
    /// The frame every run starts from: origin, tangent +X, up +Z
    /// (orthogonal by construction, initial bend plane is XZ-spanned).
    pub fn initial() -> Self {
        Self {
            point: Point3::origin(),
            direction: Dir3::new_normalize(Vec3::x()),
            up: Dir3::new_normalize(Vec3::z()),
        }
    }

    /// Absolute value of `direction · up`. Zero when the frame
    /// invariant holds exactly.
    pub fn skew(&self) -> f64 {
        self.direction.dot(self.up.as_ref()).abs()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::initial()
    }
}

/// Re-enforce orthogonality of a freshly rotated up vector against
/// `direction`: subtract the projection onto `direction` (Gram-Schmidt)
/// and renormalize.
///
/// If the orthogonal residual collapses below [`NORM_EPS`], the rotated
/// up has become numerically parallel to the tangent. The original
/// pipeline kept the stale up and let the invariant stay broken for the
/// rest of the run; here a fresh canonical perpendicular is derived
/// instead, and the recovery is reported through a `tracing` warning so
/// the condition stays visible to callers.
pub fn orthonormal_up(raw_up: Vec3, direction: &Dir3) -> Dir3 {
    let residual = raw_up - raw_up.dot(direction.as_ref()) * direction.as_ref();
    match Dir3::try_new(residual, NORM_EPS) {
        Some(up) => up,
        None => {
            let up = arbitrary_perpendicular(direction);
            tracing::warn!(
                ?raw_up,
                direction = ?direction.as_ref(),
                recovered_up = ?up.as_ref(),
                "rotated up vector is parallel to direction; substituting a canonical perpendicular"
            );
            up
        }
    }
}

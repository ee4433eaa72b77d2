#![warn(missing_docs)]

//! Math types for the bendline centerline engine.
//!
//! Thin wrappers around nalgebra providing the 3D point and vector
//! types used throughout the engine, the axis-angle rotation
//! primitive every bend and plane rotation is built on, and the
//! tolerance constants shared by all degeneracy checks.

use nalgebra::{Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Norm below which a vector is treated as degenerate (zero rotation
/// axis, collapsed direction, feed distance indistinguishable from zero).
pub const NORM_EPS: f64 = 1e-9;

/// Angle magnitude in degrees below which a bend or plane rotation
/// is treated as a no-op.
pub const ANGLE_EPS_DEG: f64 = 1e-6;

/// Rotate `v` about `axis` by `angle` radians using Rodrigues' formula:
///
/// ```text
/// v' = v·cosθ + (â × v)·sinθ + â·(â · v)·(1 − cosθ)
/// ```
///
/// The axis does not need to be normalized. A near-zero axis
/// (norm below [`NORM_EPS`]) has no well-defined rotation; the vector
/// is returned unchanged and the caller decides whether that counts
/// as an error.
pub fn rotate_about_axis(v: Vec3, axis: Vec3, angle: f64) -> Vec3 {
    let norm = axis.norm();
    if norm < NORM_EPS {
        return v;
    }
    let a = axis / norm;
    let (s, c) = angle.sin_cos();
    v * c + a.cross(&v) * s + a * a.dot(&v) * (1.0 - c)
}

/// A unit vector perpendicular to `dir`, chosen canonically.
///
/// Crosses `dir` with whichever of the X or Y axes it is less aligned
/// with, so the construction is well-conditioned for any direction.
pub fn arbitrary_perpendicular(dir: &Dir3) -> Dir3 {
    let seed = if dir.x.abs() < 0.9 { Vec3::x() } else { Vec3::y() };
    Dir3::new_normalize(seed.cross(dir.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_rotate_quarter_turn_about_z() {
        // Rotate (1,0,0) by 90° about Z → (0,1,0)
        let r = rotate_about_axis(Vec3::x(), Vec3::z(), PI / 2.0);
        assert!(r.x.abs() < 1e-12);
        assert!((r.y - 1.0).abs() < 1e-12);
        assert!(r.z.abs() < 1e-12);
    }

    #[test]
    fn test_rotate_unnormalized_axis() {
        // Axis length must not affect the result
        let a = rotate_about_axis(Vec3::x(), Vec3::new(0.0, 0.0, 7.5), PI / 2.0);
        let b = rotate_about_axis(Vec3::x(), Vec3::z(), PI / 2.0);
        assert!((a - b).norm() < 1e-12);
    }

    #[test]
    fn test_rotate_half_turn_about_diagonal() {
        // 180° about (1,1,0)/√2 swaps x and y and negates z
        let r = rotate_about_axis(Vec3::new(1.0, 0.0, 2.0), Vec3::new(1.0, 1.0, 0.0), PI);
        assert!(r.x.abs() < 1e-12);
        assert!((r.y - 1.0).abs() < 1e-12);
        assert!((r.z + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_preserves_norm() {
        let v = Vec3::new(3.0, -4.0, 12.0);
        let r = rotate_about_axis(v, Vec3::new(0.3, 0.2, -0.9), 1.234);
        assert!((r.norm() - v.norm()).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_degenerate_axis_is_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let r = rotate_about_axis(v, Vec3::new(0.0, 0.0, 1e-12), PI / 3.0);
        assert_eq!(r, v);
    }

    #[test]
    fn test_arbitrary_perpendicular_is_orthogonal() {
        for dir in [
            Vec3::x(),
            Vec3::y(),
            Vec3::z(),
            Vec3::new(0.95, 0.1, 0.2),
            Vec3::new(-1.0, 1.0, 1.0),
        ] {
            let d = Dir3::new_normalize(dir);
            let p = arbitrary_perpendicular(&d);
            assert!(d.dot(p.as_ref()).abs() < 1e-12, "not orthogonal for {dir:?}");
            assert!((p.norm() - 1.0).abs() < 1e-12);
        }
    }
}

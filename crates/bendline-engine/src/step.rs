//! The three primitive YBCR operations: feed, bend, plane rotation.
//!
//! Each operation is a pure function from an owned [`Frame`] (plus the
//! record's scalars) to a new frame, the polyline points it produced,
//! and the segment it should be audited as. Polyline index bookkeeping
//! lives in the run driver, so each operation can be tested in
//! isolation.

use bendline_math::{rotate_about_axis, Dir3, Point3, ANGLE_EPS_DEG, NORM_EPS};

use crate::arc::sample_arc;
use crate::error::EngineError;
use crate::frame::{orthonormal_up, Frame};

/// What a feed or bend contributes to the audit trail, before the run
/// driver attaches polyline index ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentKind {
    /// Straight feed of the given signed length.
    Feed {
        /// Signed feed distance.
        value: f64,
    },
    /// Circular bend.
    Bend {
        /// Bend angle in degrees.
        angle: f64,
        /// Bend radius.
        radius: f64,
    },
}

/// The outcome of one feed or bend operation.
#[derive(Debug, Clone, PartialEq)]
pub struct StepEffect {
    /// Frame after the operation.
    pub frame: Frame,
    /// Points to append to the polyline, in order.
    pub new_points: Vec<Point3>,
    /// Segment to record, if the operation was not a no-op.
    pub segment: Option<SegmentKind>,
}

impl StepEffect {
    fn noop(frame: Frame) -> Self {
        Self {
            frame,
            new_points: Vec::new(),
            segment: None,
        }
    }
}

/// Feed: translate the tip along the tangent by `y`.
///
/// A feed with `|y| <= 1e-9` is a legitimate no-op: no point is
/// produced and no segment is recorded.
pub fn feed(frame: Frame, y: f64) -> StepEffect {
    if y.abs() <= NORM_EPS {
        return StepEffect::noop(frame);
    }
    let mut frame = frame;
    frame.point += y * frame.direction.as_ref();
    StepEffect {
        new_points: vec![frame.point],
        segment: Some(SegmentKind::Feed { value: y }),
        frame,
    }
}

/// Bend: curve the tube along a circular arc of `radius` and `b_deg`
/// degrees inside the plane spanned by the frame's direction and up.
///
/// The arc rotates about the up vector; its center sits at
/// `point + radius * normalize(up × direction)`. The arc is sampled
/// into `arc_points` line segments, then the tangent is rotated by the
/// full bend angle and renormalized.
///
/// No-ops (skipped without error): `|b_deg| <= 1e-6`, and a nonzero
/// angle with `radius < 1e-9` (geometrically unrealizable; reported as
/// a warning so the rest of the record still executes).
///
/// # Errors
///
/// `record` is the 1-based record position used for error attribution.
/// Fails with [`EngineError::DegenerateBendPlane`] when direction and
/// up are parallel, and [`EngineError::DirectionCollapsed`] if the
/// rotated tangent normalizes to near-zero.
pub fn bend(
    frame: Frame,
    record: usize,
    b_deg: f64,
    radius: f64,
    arc_points: u32,
) -> Result<StepEffect, EngineError> {
    if b_deg.abs() <= ANGLE_EPS_DEG {
        return Ok(StepEffect::noop(frame));
    }
    if radius < NORM_EPS {
        tracing::warn!(record, radius, "bend skipped: radius too small to bend");
        return Ok(StepEffect::noop(frame));
    }

    let perp = frame.up.cross(frame.direction.as_ref());
    let Some(to_center) = Dir3::try_new(perp, NORM_EPS) else {
        return Err(EngineError::DegenerateBendPlane { record });
    };

    let b_rad = b_deg.to_radians();
    let axis = frame.up.into_inner();
    let center = frame.point + radius * to_center.as_ref();
    let start_offset = frame.point - center;

    let new_points = sample_arc(center, start_offset, axis, b_rad, arc_points);

    // The arc's last sample is the full rotation of start_offset, so the
    // end point is reproducible without touching the sample list.
    let end_point = center + rotate_about_axis(start_offset, axis, b_rad);
    let rotated_dir = rotate_about_axis(frame.direction.into_inner(), axis, b_rad);
    let direction = Dir3::try_new(rotated_dir, NORM_EPS)
        .ok_or(EngineError::DirectionCollapsed { record })?;

    Ok(StepEffect {
        frame: Frame {
            point: end_point,
            direction,
            up: frame.up,
        },
        new_points,
        segment: Some(SegmentKind::Bend {
            angle: b_deg,
            radius,
        }),
    })
}

/// Plane rotation: spin the up vector about the current tangent by
/// `c_deg` degrees, changing the next bend's plane without moving the
/// tip or producing geometry.
///
/// `|c_deg| <= 1e-6` leaves the frame untouched. The rotated up is
/// re-orthogonalized against the tangent (see [`orthonormal_up`]).
pub fn rotate(frame: Frame, c_deg: f64) -> Frame {
    if c_deg.abs() <= ANGLE_EPS_DEG {
        return frame;
    }
    let raw = rotate_about_axis(
        frame.up.into_inner(),
        frame.direction.into_inner(),
        c_deg.to_radians(),
    );
    Frame {
        up: orthonormal_up(raw, &frame.direction),
        ..frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bendline_math::Vec3;

    #[test]
    fn test_feed_advances_along_tangent() {
        let effect = feed(Frame::initial(), 100.0);
        assert_eq!(effect.new_points.len(), 1);
        assert!((effect.frame.point.x - 100.0).abs() < 1e-12);
        assert!(effect.frame.point.y.abs() < 1e-12);
        assert!(matches!(effect.segment, Some(SegmentKind::Feed { value }) if value == 100.0));
    }

    #[test]
    fn test_feed_negative_distance() {
        let effect = feed(Frame::initial(), -25.0);
        assert!((effect.frame.point.x + 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_feed_zero_is_noop() {
        let frame = Frame::initial();
        let effect = feed(frame.clone(), 0.0);
        assert_eq!(effect.frame, frame);
        assert!(effect.new_points.is_empty());
        assert!(effect.segment.is_none());
    }

    #[test]
    fn test_bend_quarter_circle() {
        // From (0,0,0) heading +X with up +Z: perp = up × dir = +Y, so the
        // 90° bend of radius 50 curves toward +Y and ends at (50,50,0).
        let effect = bend(Frame::initial(), 1, 90.0, 50.0, 30).unwrap();
        assert_eq!(effect.new_points.len(), 30);
        let p = effect.frame.point;
        assert!((p.x - 50.0).abs() < 1e-9);
        assert!((p.y - 50.0).abs() < 1e-9);
        assert!(p.z.abs() < 1e-9);
        // Tangent rotated by the full bend angle: +X → +Y
        let d = effect.frame.direction;
        assert!(d.x.abs() < 1e-9);
        assert!((d.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_bend_preserves_angle_between_directions() {
        let frame = Frame::initial();
        let before = frame.direction;
        let effect = bend(frame, 1, 37.5, 40.0, 12).unwrap();
        let dot = effect.frame.direction.dot(before.as_ref());
        assert!((dot - 37.5f64.to_radians().cos()).abs() < 1e-9);
    }

    #[test]
    fn test_bend_zero_angle_is_noop() {
        let effect = bend(Frame::initial(), 1, 0.0, 50.0, 30).unwrap();
        assert!(effect.new_points.is_empty());
        assert!(effect.segment.is_none());
    }

    #[test]
    fn test_bend_zero_radius_skipped_not_fatal() {
        let effect = bend(Frame::initial(), 1, 90.0, 0.0, 30).unwrap();
        assert!(effect.new_points.is_empty());
        assert!(effect.segment.is_none());
    }

    #[test]
    fn test_bend_parallel_frame_is_fatal() {
        let mut frame = Frame::initial();
        frame.up = frame.direction;
        let err = bend(frame, 4, 90.0, 50.0, 30).unwrap_err();
        assert_eq!(err, EngineError::DegenerateBendPlane { record: 4 });
    }

    #[test]
    fn test_bend_up_stays_orthogonal() {
        let effect = bend(Frame::initial(), 1, 123.0, 20.0, 8).unwrap();
        assert!(effect.frame.skew() < 1e-9);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        // Up +Z rotated 90° about tangent +X lands on -Y.
        let frame = rotate(Frame::initial(), 90.0);
        assert!(frame.up.x.abs() < 1e-9);
        assert!((frame.up.y + 1.0).abs() < 1e-9);
        assert!(frame.up.z.abs() < 1e-9);
        assert!(frame.skew() < 1e-12);
        assert_eq!(frame.point, Frame::initial().point);
    }

    #[test]
    fn test_rotate_zero_is_noop() {
        let frame = Frame::initial();
        assert_eq!(rotate(frame.clone(), 0.0), frame);
    }

    #[test]
    fn test_rotate_after_bend_uses_new_tangent() {
        // Bend 90° (tangent +X → +Y), then rotate 90°: up +Z spins about
        // +Y onto +X.
        let bent = bend(Frame::initial(), 1, 90.0, 50.0, 4).unwrap();
        let frame = rotate(bent.frame, 90.0);
        assert!((frame.up.x - 1.0).abs() < 1e-9);
        assert!(frame.up.y.abs() < 1e-9);
        assert!(frame.up.z.abs() < 1e-9);
    }

    #[test]
    fn test_rotated_plane_changes_bend_direction() {
        // C=90 first: up +Z → -Y. A subsequent bend then curves in the
        // XZ plane instead of XY: perp = up × dir = (-Y) × X = +Z.
        let frame = rotate(Frame::initial(), 90.0);
        let effect = bend(frame, 2, 90.0, 50.0, 30).unwrap();
        let p = effect.frame.point;
        assert!((p.x - 50.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
        assert!((p.z - 50.0).abs() < 1e-9);
        let d = effect.frame.direction;
        assert!((Vec3::new(d.x, d.y, d.z) - Vec3::z()).norm() < 1e-9);
    }
}

//! The run driver: walks a YBCR program record by record and packages
//! the result into the boundary contract.

use bendline_ir::{BendProgram, CenterlineOutput, SegmentInfo, DEFAULT_ARC_POINTS, DEFAULT_DIAMETER};
use bendline_math::Point3;

use crate::error::EngineError;
use crate::frame::Frame;
use crate::step::{self, SegmentKind};

/// The geometry produced by a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct Centerline {
    /// Ordered polyline points, starting at the fixed origin.
    pub points: Vec<Point3>,
    /// One audit-trail entry per non-degenerate feed or bend.
    pub segments: Vec<SegmentInfo>,
    /// Frame after the last record.
    pub frame: Frame,
    /// Tube diameter (configuration pass-through).
    pub diameter: f64,
}

/// Compute the tube centerline for a YBCR program.
///
/// Records are processed in order, Feed → Bend → Rotate within each
/// record, with the frame threaded through every step. The first fatal
/// condition aborts the run; partial geometry never escapes.
///
/// An empty program is not an error: it yields the single-point
/// polyline `[(0,0,0)]`, no segments, and the initial frame.
///
/// # Errors
///
/// See [`EngineError`] for the fatal conditions (negative radius,
/// degenerate bend plane, collapsed direction).
pub fn compute_centerline(program: &BendProgram) -> Result<Centerline, EngineError> {
    let diameter = resolve_diameter(program);
    run_records(program, diameter)
}

/// Compute a centerline and package it into the wire-shaped
/// [`CenterlineOutput`], success or failure.
///
/// This is the boundary form consumed by the surrounding API layer:
/// a failed run collapses to the error template (message, empty
/// geometry, default frame, configured diameter).
pub fn compute_output(program: &BendProgram) -> CenterlineOutput {
    let diameter = resolve_diameter(program);
    match run_records(program, diameter) {
        Ok(run) => {
            let frame = &run.frame;
            CenterlineOutput {
                error: None,
                centerline_points: run.points.iter().map(as_triple).collect(),
                segment_info: run.segments,
                final_point: as_triple(&frame.point),
                final_direction: [frame.direction.x, frame.direction.y, frame.direction.z],
                final_up_vector: Some([frame.up.x, frame.up.y, frame.up.z]),
                diameter: run.diameter,
            }
        }
        Err(err) => CenterlineOutput::failure(err.to_string(), diameter),
    }
}

fn as_triple(p: &Point3) -> [f64; 3] {
    [p.x, p.y, p.z]
}

/// Effective tube diameter: the configured value when positive,
/// otherwise the default (with a warning, matching how unusable
/// diameters have always been tolerated rather than rejected).
fn resolve_diameter(program: &BendProgram) -> f64 {
    match program.diameter {
        Some(d) if d > 0.0 => d,
        Some(d) => {
            tracing::warn!(
                diameter = d,
                "configured diameter is not positive; using default {DEFAULT_DIAMETER}"
            );
            DEFAULT_DIAMETER
        }
        None => DEFAULT_DIAMETER,
    }
}

/// Effective arc sample count, clamped to at least one sample so the
/// discretizer's partial-angle division stays well-defined.
fn resolve_arc_points(program: &BendProgram) -> u32 {
    let n = program.num_arc_points.unwrap_or(DEFAULT_ARC_POINTS);
    if n == 0 {
        tracing::warn!("NumArcPoints of 0 clamped to 1");
        1
    } else {
        n
    }
}

fn run_records(program: &BendProgram, diameter: f64) -> Result<Centerline, EngineError> {
    let arc_points = resolve_arc_points(program);

    let mut frame = Frame::initial();
    let mut points = vec![frame.point];
    let mut segments: Vec<SegmentInfo> = Vec::new();
    // Start index for the next segment: the last recorded segment's end.
    let mut seg_start = 0usize;

    for (i, rec) in program.ybc.iter().enumerate() {
        let record = i + 1;
        if rec.radius < 0.0 {
            return Err(EngineError::NegativeRadius {
                record,
                radius: rec.radius,
            });
        }
        tracing::debug!(record, y = rec.y, b = rec.b, c = rec.c, r = rec.radius, "processing record");

        let effect = step::feed(frame, rec.y);
        frame = append_effect(effect, &mut points, &mut segments, &mut seg_start);

        let effect = step::bend(frame, record, rec.b, rec.radius, arc_points)?;
        frame = append_effect(effect, &mut points, &mut segments, &mut seg_start);

        frame = step::rotate(frame, rec.c);
    }

    Ok(Centerline {
        points,
        segments,
        frame,
        diameter,
    })
}

/// Fold one step's effect into the run state, attaching polyline index
/// ranges to the segment it recorded.
fn append_effect(
    effect: step::StepEffect,
    points: &mut Vec<Point3>,
    segments: &mut Vec<SegmentInfo>,
    seg_start: &mut usize,
) -> Frame {
    points.extend(effect.new_points);
    if let Some(kind) = effect.segment {
        let end_idx = points.len() - 1;
        segments.push(match kind {
            SegmentKind::Feed { value } => SegmentInfo::Feed {
                value,
                start_idx: *seg_start,
                end_idx,
            },
            SegmentKind::Bend { angle, radius } => SegmentInfo::Bend {
                angle,
                radius,
                start_idx: *seg_start,
                end_idx,
            },
        });
        *seg_start = end_idx;
    }
    effect.frame
}

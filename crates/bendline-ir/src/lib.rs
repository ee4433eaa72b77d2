#![warn(missing_docs)]

//! Wire-format types for the bendline boundary contract.
//!
//! This crate defines the JSON shapes exchanged with the callers of the
//! centerline engine: the YBCR instruction program on the way in, and the
//! centerline/segment payload on the way out. It is purely declarative —
//! no geometry, just serde types. Field names match the external contract
//! exactly (`Y`, `B`, `C`, `Radius`, `YBC`, ...), so the surrounding API
//! layer can serialize results verbatim.

use serde::{Deserialize, Serialize};

/// Tube diameter used when the program does not supply a usable one.
pub const DEFAULT_DIAMETER: f64 = 30.0;

/// Number of line segments a bend arc is discretized into by default.
pub const DEFAULT_ARC_POINTS: u32 = 30;

/// One YBCR manufacturing instruction.
///
/// Ordering within the program is significant: the sequence of records
/// defines the tube shape. Records are immutable once read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendRecord {
    /// Feed distance along the current tangent (signed).
    #[serde(rename = "Y")]
    pub y: f64,
    /// Bend angle in degrees (signed).
    #[serde(rename = "B")]
    pub b: f64,
    /// Bend-plane rotation angle in degrees (signed).
    #[serde(rename = "C")]
    pub c: f64,
    /// Bend radius. Must be >= 0; omitted means 0 (no bend possible).
    #[serde(rename = "Radius", default)]
    pub radius: f64,
}

/// A full YBCR program: the ordered record list plus run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendProgram {
    /// Ordered instruction list.
    #[serde(rename = "YBC")]
    pub ybc: Vec<BendRecord>,
    /// Tube diameter (pass-through, not derived from geometry).
    /// Values <= 0 fall back to [`DEFAULT_DIAMETER`].
    #[serde(rename = "Diameter", skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    /// Number of sample points per bend arc. Clamped to at least 1.
    #[serde(rename = "NumArcPoints", skip_serializing_if = "Option::is_none")]
    pub num_arc_points: Option<u32>,
}

impl BendProgram {
    /// Create a program from a record list with default configuration.
    pub fn new(ybc: Vec<BendRecord>) -> Self {
        Self {
            ybc,
            diameter: None,
            num_arc_points: None,
        }
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Audit-trail descriptor for one non-degenerate feed or bend.
///
/// `start_idx..=end_idx` indexes into `centerline_points`; downstream
/// consumers use the ranges to color and label sub-paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SegmentInfo {
    /// A straight feed segment.
    #[serde(rename = "Y")]
    Feed {
        /// Signed feed distance.
        value: f64,
        /// Index of the segment's first polyline point.
        start_idx: usize,
        /// Index of the segment's last polyline point.
        end_idx: usize,
    },
    /// A circular bend segment.
    #[serde(rename = "B")]
    Bend {
        /// Bend angle in degrees.
        angle: f64,
        /// Bend radius.
        radius: f64,
        /// Index of the segment's first polyline point.
        start_idx: usize,
        /// Index of the segment's last polyline point.
        end_idx: usize,
    },
}

/// The terminal artifact of a centerline run, in wire shape.
///
/// On success `error` is absent and the geometry fields are populated.
/// On failure `error` carries a record-attributable message, the geometry
/// arrays are empty (all-or-nothing: no partial polyline escapes), the
/// frame fields hold the safe defaults, and `final_up_vector` is omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterlineOutput {
    /// Human-readable failure description, absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Ordered centerline points from the fixed start `(0,0,0)`.
    pub centerline_points: Vec<[f64; 3]>,
    /// One descriptor per non-degenerate feed or bend, in order.
    pub segment_info: Vec<SegmentInfo>,
    /// Tube tip position after the last record.
    pub final_point: [f64; 3],
    /// Unit tangent after the last record.
    pub final_direction: [f64; 3],
    /// Unit up vector after the last record, absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_up_vector: Option<[f64; 3]>,
    /// Tube diameter (configuration pass-through).
    pub diameter: f64,
}

impl CenterlineOutput {
    /// The failure shape: error message, no geometry, default frame.
    pub fn failure(message: impl Into<String>, diameter: f64) -> Self {
        Self {
            error: Some(message.into()),
            centerline_points: Vec::new(),
            segment_info: Vec::new(),
            final_point: [0.0, 0.0, 0.0],
            final_direction: [1.0, 0.0, 0.0],
            final_up_vector: None,
            diameter,
        }
    }

    /// Serialize to compact JSON (the on-the-wire form).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

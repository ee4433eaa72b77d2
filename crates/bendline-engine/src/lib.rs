#![warn(missing_docs)]

//! YBCR tube-centerline engine.
//!
//! Computes the 3D centerline of a bent tube from a sequence of
//! manufacturing instructions (feed distance Y, bend angle B, plane
//! rotation C, bend radius R — the notation used by CNC tube benders).
//! A moving reference frame (tip position, unit tangent, unit up
//! vector) is advanced through Feed → Bend → Rotate per record,
//! accumulating a polyline plus per-segment audit metadata.
//!
//! The engine is pure in-memory arithmetic: no I/O, no shared state
//! between runs. Diagnostics are emitted as `tracing` events; the
//! subscriber decides what to do with them.
//!
//! # Example
//!
//! ```
//! use bendline_engine::compute_centerline;
//! use bendline_ir::{BendProgram, BendRecord};
//!
//! let program = BendProgram::new(vec![BendRecord {
//!     y: 100.0,
//!     b: 90.0,
//!     c: 0.0,
//!     radius: 50.0,
//! }]);
//! let run = compute_centerline(&program).unwrap();
//! assert_eq!(run.points.len(), 32); // origin + feed + 30 arc samples
//! ```

mod arc;
mod error;
mod frame;
mod run;
mod step;

pub use arc::sample_arc;
pub use error::EngineError;
pub use frame::{orthonormal_up, Frame};
pub use run::{compute_centerline, compute_output, Centerline};
pub use step::{bend, feed, rotate, SegmentKind, StepEffect};

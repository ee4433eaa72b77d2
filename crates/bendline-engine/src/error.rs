//! Error types for centerline computation.

use thiserror::Error;

/// Errors that abort a centerline run.
///
/// Every variant is fatal: the engine does not continue past the
/// offending record and no partial geometry is returned. The `record`
/// field is the 1-based position of the record in the program, matching
/// how operators count rows in a bend table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A record carries a negative bend radius.
    #[error("Invalid data: Radius cannot be negative ({radius}) in record {record}")]
    NegativeRadius {
        /// 1-based record position.
        record: usize,
        /// The offending radius value.
        radius: f64,
    },

    /// Direction and up entered a bend parallel to each other, so the
    /// bend-center direction is undefined.
    #[error("Cannot bend in record {record}: direction and up vectors are parallel")]
    DegenerateBendPlane {
        /// 1-based record position.
        record: usize,
    },

    /// The tangent direction normalized to near-zero after a bend.
    /// Unreachable from unit-length inputs unless NaNs propagated in.
    #[error("Zero-norm direction after bend in record {record}")]
    DirectionCollapsed {
        /// 1-based record position.
        record: usize,
    },
}

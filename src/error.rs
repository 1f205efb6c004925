//! Error taxonomy for the finite-element function-space core.

use thiserror::Error;

/// Everything that can go wrong while looking up a function space,
/// resolving degrees of freedom, or building a layout matrix.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FeSpaceError {
    /// No static descriptor matches the requested `(name, grade)` pair.
    #[error("function space '{name}' on grade {grade} not found")]
    LookupFailure {
        /// The requested space name, e.g. `"CG2"`.
        name: String,
        /// The requested grade.
        grade: usize,
    },

    /// A `LINE`/`AREA` instruction did not resolve to a unique subelement.
    #[error("subelement {sid} did not resolve to a unique mesh element")]
    SubelementMatchFailure {
        /// The local subelement slot that failed to resolve.
        sid: usize,
    },

    /// The mesh cannot supply a connectivity table needed by an element definition.
    #[error("mesh has no connectivity from grade {from} to grade {to}")]
    MissingConnectivity {
        /// Source grade of the missing connectivity table.
        from: usize,
        /// Target grade of the missing connectivity table.
        to: usize,
    },

    /// The field has no storage row for a `(grade, id, indx)` DOF triple.
    #[error("field has no storage index for (grade {grade}, id {id}, indx {indx})")]
    MissingFieldIndex {
        /// Grade of the degree of freedom that could not be located.
        grade: usize,
        /// Subelement (or vertex) id of the degree of freedom.
        id: usize,
        /// Position within the subelement's local degree-of-freedom cluster.
        indx: usize,
    },

    /// The output sparse layout matrix could not be sized.
    #[error("failed to size sparse layout matrix ({rows}x{cols}, nnz={nnz})")]
    AllocationFailure {
        /// Requested row count (field size).
        rows: usize,
        /// Requested column count (number of top-grade elements).
        cols: usize,
        /// Requested nonzero count.
        nnz: usize,
    },

    /// The host-facing constructor was called with the wrong argument shape.
    #[error("function space must be initialized with a label and a grade")]
    ArgumentError,

    /// A static element definition table is internally inconsistent.
    ///
    /// This is a programmer error in the static tables, not a malformed
    /// mesh; it should only ever surface from `debug_assert!`s run over
    /// the registry, never from processing real mesh data.
    #[error("unreachable: {0}")]
    Unreachable(String),
}

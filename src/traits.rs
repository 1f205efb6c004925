//! Collaborator interfaces.
//!
//! The mesh, field and sparse-matrix storage this crate operates on are
//! owned by the host application; this crate consumes only the abstract
//! operations listed here, mirroring how the teacher crate exposes its own
//! external collaborators (`Grid`, `Geometry`) as traits in its own
//! `traits` module rather than depending on one concrete storage type.

/// An opaque handle to one of a mesh's connectivity tables (e.g. vertex→edge,
/// vertex→face). The core never inspects a connectivity table directly; it
/// only passes the handle back to [`Mesh::get_connectivity`] and
/// [`Mesh::match_elements`].
pub trait Connectivity {
    /// Number of elements represented by this connectivity table's target grade.
    fn n_elements(&self) -> usize;
}

/// Read-only access to mesh connectivity and element-vertex incidence.
pub trait Mesh {
    /// The concrete connectivity-table handle type this mesh hands back.
    type Conn: Connectivity + ?Sized;

    /// The sparsity pattern connecting `from_grade`-elements to
    /// `to_grade`-elements, or `None` if the mesh cannot supply it.
    fn connectivity(&self, from_grade: usize, to_grade: usize) -> Option<&Self::Conn>;

    /// Number of top-grade elements of the given grade.
    fn n_elements(&self, grade: usize) -> usize;

    /// The vertex ids incident to mesh element `elem_id` within `conn`,
    /// or `None` if `elem_id` is out of range for `conn`.
    fn get_connectivity<'a>(&'a self, conn: &'a Self::Conn, elem_id: usize) -> Option<&'a [usize]>;

    /// Resolve a tuple of `targets.len()` local vertex ids to the unique
    /// subelement id in `conn` whose vertex set matches `targets`, or
    /// `None` if no unique match exists.
    fn match_elements(&self, conn: &Self::Conn, targets: &[usize]) -> Option<usize>;
}

/// Read-only access to a field's degree-of-freedom storage layout.
pub trait Field {
    /// Total number of scalar storage rows in the field (used to size a
    /// layout matrix's row count).
    fn nelements(&self) -> usize;

    /// Map a `(grade, id, indx)` degree-of-freedom triple to a flat storage
    /// row, or `None` if the field has no such location.
    fn get_index(&self, grade: usize, id: usize, indx: usize) -> Option<usize>;
}

//! The host-facing veneer: a `FiniteElementSpace` wraps a `&'static FeSpace`
//! looked up by label and grade, and exposes the one operation a host needs
//! beyond raw basis evaluation — building a DOF layout against its own mesh
//! and field.

use crate::element::{registry, FeSpace};
use crate::error::FeSpaceError;
use crate::layout;
use crate::sparse::Ccs;
use crate::traits::{Field, Mesh};

/// A named, graded finite element function space, ready to build layouts.
///
/// Constructed from a label (e.g. `"CG2"`) and a grade; everything else is
/// delegated to the matching static [`FeSpace`] descriptor.
pub struct FiniteElementSpace {
    descriptor: &'static FeSpace,
}

impl FiniteElementSpace {
    /// Look up the space named `label` on `grade`.
    ///
    /// Returns [`FeSpaceError::ArgumentError`] for a grade of zero (no
    /// element family in this crate is defined on grade 0), and
    /// [`FeSpaceError::LookupFailure`] when no static descriptor matches.
    pub fn new(label: &str, grade: usize) -> Result<Self, FeSpaceError> {
        if grade == 0 {
            return Err(FeSpaceError::ArgumentError);
        }
        let descriptor = registry::find(label, grade)?;
        Ok(Self { descriptor })
    }

    /// The underlying static descriptor.
    pub fn descriptor(&self) -> &'static FeSpace {
        self.descriptor
    }

    /// Build the DOF layout matrix over `mesh`, indexing into `field`.
    pub fn layout<M: Mesh, F: Field>(&self, mesh: &M, field: &F) -> Result<Ccs, FeSpaceError> {
        layout::layout(mesh, field, self.descriptor)
    }

    /// A companion space usable on a lower grade, if this space defines one.
    pub fn lower(&self, target_grade: usize) -> Option<Self> {
        self.descriptor
            .lower(target_grade)
            .map(|descriptor| Self { descriptor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockField, MockMesh};

    #[test]
    fn new_finds_a_registered_space() {
        let space = FiniteElementSpace::new("CG1", 1).unwrap();
        assert_eq!(space.descriptor().name, "CG1");
        assert_eq!(space.descriptor().grade, 1);
    }

    #[test]
    fn new_rejects_grade_zero() {
        let err = FiniteElementSpace::new("CG1", 0).unwrap_err();
        assert_eq!(err, FeSpaceError::ArgumentError);
    }

    #[test]
    fn new_reports_lookup_failure_for_unknown_label() {
        let err = FiniteElementSpace::new("CG9", 1).unwrap_err();
        assert_eq!(
            err,
            FeSpaceError::LookupFailure {
                name: "CG9".to_string(),
                grade: 1
            }
        );
    }

    #[test]
    fn layout_delegates_to_the_layout_builder() {
        let mut mesh = MockMesh::new();
        mesh.add_top_element(1, vec![0, 1]);
        mesh.add_top_element(1, vec![1, 2]);
        let mut field = MockField::new(3);
        field.assign_sequential(&[(0, 0), (0, 1), (0, 2)]);

        let space = FiniteElementSpace::new("CG1", 1).unwrap();
        let ccs = space.layout(&mesh, &field).unwrap();
        assert_eq!(ccs.rix(), &[0, 1, 1, 2]);
    }

    #[test]
    fn lower_finds_a_companion_space_on_a_lower_grade() {
        let space = FiniteElementSpace::new("CG1", 3).unwrap();
        let companion = space.lower(2).unwrap();
        assert_eq!(companion.descriptor().grade, 2);
        assert!(space.lower(0).is_none());
    }
}

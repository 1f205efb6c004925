//! The layout builder: walks every top-grade mesh element, resolves its
//! local degrees of freedom via the [`crate::interpreter`], and assembles
//! the result into a CCS sparse matrix mapping `(element, local slot)` to
//! global field row.

use crate::element::FeSpace;
use crate::error::FeSpaceError;
use crate::interpreter::dof_to_field_index;
use crate::sparse::Ccs;
use crate::traits::{Field, Mesh};
use crate::types::FieldIndex;

/// Build the DOF layout matrix for `space` over `mesh`, indexing into `field`.
///
/// On any failure (missing connectivity, an unresolved subelement, or a
/// field index that the field cannot supply) no partial matrix is returned;
/// ownership of any in-progress storage stays local to this call and is
/// simply dropped.
pub fn layout<M: Mesh, F: Field>(
    mesh: &M,
    field: &F,
    space: &FeSpace,
) -> Result<Ccs, FeSpaceError> {
    let top_conn = mesh
        .connectivity(0, space.grade)
        .ok_or(FeSpaceError::MissingConnectivity {
            from: 0,
            to: space.grade,
        })?;
    let nel = mesh.n_elements(space.grade);
    let nnodes = space.nnodes;

    let mut ccs = Ccs::new();
    ccs.resize(field.nelements(), nel, nel * nnodes)
        .map_err(|_| FeSpaceError::AllocationFailure {
            rows: field.nelements(),
            cols: nel,
            nnz: nel * nnodes,
        })?;

    for (e, cptr) in ccs.cptr_mut()[..nel].iter_mut().enumerate() {
        *cptr = e * nnodes;
    }

    let mut findx = vec![FieldIndex::default(); nnodes];
    for e in 0..nel {
        let vids = mesh
            .get_connectivity(top_conn, e)
            .ok_or(FeSpaceError::MissingConnectivity {
                from: 0,
                to: space.grade,
            })?;

        dof_to_field_index(mesh, space, vids, &mut findx)?;

        let base = e * nnodes;
        for (i, fi) in findx.iter().enumerate() {
            let row = field
                .get_index(fi.grade, fi.id, fi.indx)
                .ok_or(FeSpaceError::MissingFieldIndex {
                    grade: fi.grade,
                    id: fi.id,
                    indx: fi.indx,
                })?;
            ccs.rix_mut()[base + i] = row;
        }
    }
    *ccs.cptr_mut().last_mut().unwrap() = nel * nnodes;

    log::debug!(
        "built layout for {} on grade {}: {} elements x {} nodes",
        space.name,
        space.grade,
        nel,
        nnodes
    );

    Ok(ccs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{CG1_1D, CG2_2D};
    use crate::testing::{MockField, MockMesh};

    /// A 3-vertex, 2-edge segment: element 0 = (0,1), element 1 = (1,2).
    fn segment_mesh() -> MockMesh {
        let mut mesh = MockMesh::new();
        mesh.add_top_element(1, vec![0, 1]);
        mesh.add_top_element(1, vec![1, 2]);
        mesh
    }

    #[test]
    fn cg1_on_segment_matches_concrete_scenario() {
        let mesh = segment_mesh();
        let mut field = MockField::new(3);
        field.assign_sequential(&[(0, 0), (0, 1), (0, 2)]);

        let ccs = layout(&mesh, &field, &CG1_1D).unwrap();
        assert_eq!(ccs.rix(), &[0, 1, 1, 2]);
        assert_eq!(ccs.cptr(), &[0, 2, 4]);
    }

    #[test]
    fn layout_sizing_invariants_hold() {
        let mesh = segment_mesh();
        let mut field = MockField::new(3);
        field.assign_sequential(&[(0, 0), (0, 1), (0, 2)]);

        let ccs = layout(&mesh, &field, &CG1_1D).unwrap();
        let n = mesh.n_elements(1);
        assert_eq!(ccs.cptr()[0], 0);
        assert_eq!(ccs.cptr()[n], n * CG1_1D.nnodes);
        for e in 0..n {
            assert_eq!(ccs.cptr()[e + 1] - ccs.cptr()[e], CG1_1D.nnodes);
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let mesh = segment_mesh();
        let mut field = MockField::new(3);
        field.assign_sequential(&[(0, 0), (0, 1), (0, 2)]);

        let first = layout(&mesh, &field, &CG1_1D).unwrap();
        let second = layout(&mesh, &field, &CG1_1D).unwrap();
        assert_eq!(first.rix(), second.rix());
        assert_eq!(first.cptr(), second.cptr());
    }

    #[test]
    fn cg1_round_trip_matches_vertex_field_index() {
        let mesh = segment_mesh();
        let mut field = MockField::new(3);
        field.assign_sequential(&[(0, 0), (0, 1), (0, 2)]);

        let ccs = layout(&mesh, &field, &CG1_1D).unwrap();
        for e in 0..mesh.n_elements(1) {
            let vids = mesh
                .get_connectivity(mesh.connectivity(0, 1).unwrap(), e)
                .unwrap();
            for (i, &v) in vids.iter().enumerate() {
                let expected = field.get_index(0, v, 0).unwrap();
                assert_eq!(ccs.rix()[e * CG1_1D.nnodes + i], expected);
            }
        }
    }

    #[test]
    fn missing_edge_connectivity_fails_layout_for_cg2() {
        let mut mesh = MockMesh::new();
        mesh.add_top_element(2, vec![0, 1, 2]); // no vertex->edge table registered
        let field = MockField::new(3);

        let err = layout(&mesh, &field, &CG2_2D).unwrap_err();
        assert!(matches!(err, FeSpaceError::MissingConnectivity { from: 0, to: 1 }));
    }

    #[test]
    fn unresolved_edge_fails_layout_for_cg2() {
        let mut mesh = MockMesh::new();
        mesh.add_top_element(2, vec![0, 1, 2]);
        mesh.add_edge(1, 2); // only one of the three edges is registered
        let field = MockField::new(3);

        let err = layout(&mesh, &field, &CG2_2D).unwrap_err();
        assert!(matches!(err, FeSpaceError::SubelementMatchFailure { .. }));
    }

    #[test]
    fn field_with_no_storage_for_a_dof_fails_layout() {
        let mesh = segment_mesh();
        let field = MockField::new(3); // no indices assigned at all

        let err = layout(&mesh, &field, &CG1_1D).unwrap_err();
        assert_eq!(
            err,
            FeSpaceError::MissingFieldIndex {
                grade: 0,
                id: 0,
                indx: 0
            }
        );
    }
}

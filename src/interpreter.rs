//! The definition interpreter: walks a space's element-definition
//! instruction stream, resolving `Line`/`Area` subelement identifications
//! against mesh connectivity and emitting `Quantity` field-index triples.

use crate::eldefn::Instruction;
use crate::element::FeSpace;
use crate::error::FeSpaceError;
use crate::traits::Mesh;
use crate::types::FieldIndex;

/// Resolve one top-grade mesh element's local degrees of freedom to field
/// index triples, in the exact textual order of `Quantity` instructions in
/// `space.eldefn`.
///
/// `findx` must be exactly `space.nnodes` long; it is fully overwritten on
/// success and left in an unspecified state on failure.
pub fn dof_to_field_index<M: Mesh>(
    mesh: &M,
    space: &FeSpace,
    vids: &[usize],
    findx: &mut [FieldIndex],
) -> Result<(), FeSpaceError> {
    debug_assert_eq!(findx.len(), space.nnodes);

    // Subelement ids identified so far, indexed by local `sid`.
    let mut subel = vec![0usize; space.nsubel.max(1)];
    let mut k = 0usize;

    for instr in space.eldefn {
        match *instr {
            Instruction::Line { sid, v } => {
                log::debug!("resolving LINE subelement sid={sid} v={v:?}");
                let conn = mesh
                    .connectivity(0, 1)
                    .ok_or(FeSpaceError::MissingConnectivity { from: 0, to: 1 })?;
                let targets: Vec<usize> = v.iter().map(|&i| vids[i]).collect();
                let id = mesh
                    .match_elements(conn, &targets)
                    .ok_or(FeSpaceError::SubelementMatchFailure { sid })?;
                subel[sid] = id;
            }
            Instruction::Area { sid, v } => {
                log::debug!("resolving AREA subelement sid={sid} v={v:?}");
                let conn = mesh
                    .connectivity(0, 2)
                    .ok_or(FeSpaceError::MissingConnectivity { from: 0, to: 2 })?;
                let targets: Vec<usize> = v.iter().map(|&i| vids[i]).collect();
                let id = mesh
                    .match_elements(conn, &targets)
                    .ok_or(FeSpaceError::SubelementMatchFailure { sid })?;
                subel[sid] = id;
            }
            Instruction::Quantity { grade, sid, indx } => {
                let id = if grade == 0 { vids[sid] } else { subel[sid] };
                findx[k] = FieldIndex::new(grade, id, indx);
                k += 1;
            }
            Instruction::End => break,
        }
    }

    debug_assert_eq!(k, space.nnodes, "eldefn emitted fewer quantities than nnodes");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{CG1_1D, CG2_2D};
    use crate::testing::MockMesh;

    #[test]
    fn cg1_emits_raw_vertex_ids_in_order() {
        let mesh = MockMesh::new();
        let mut findx = [FieldIndex::default(); 2];
        dof_to_field_index(&mesh, &CG1_1D, &[7, 9], &mut findx).unwrap();
        assert_eq!(findx[0], FieldIndex::new(0, 7, 0));
        assert_eq!(findx[1], FieldIndex::new(0, 9, 0));
    }

    #[test]
    fn cg2_triangle_resolves_edges_before_emitting_quantities() {
        let mut mesh = MockMesh::new();
        mesh.add_edge(0, 1); // edge 0: (0,1)
        mesh.add_edge(1, 2); // edge 1: (1,2)
        mesh.add_edge(2, 0); // edge 2: (2,0)

        let mut findx = [FieldIndex::default(); 6];
        dof_to_field_index(&mesh, &CG2_2D, &[0, 1, 2], &mut findx).unwrap();

        assert_eq!(findx[0], FieldIndex::new(0, 0, 0));
        assert_eq!(findx[1], FieldIndex::new(0, 1, 0));
        assert_eq!(findx[2], FieldIndex::new(0, 2, 0));
        assert_eq!(findx[3], FieldIndex::new(1, 0, 0));
        assert_eq!(findx[4], FieldIndex::new(1, 1, 0));
        assert_eq!(findx[5], FieldIndex::new(1, 2, 0));
    }

    #[test]
    fn missing_edge_is_a_subelement_match_failure() {
        let mut mesh = MockMesh::new();
        mesh.add_edge(1, 2); // registers a (0,1) table, but not edge (0,1)
        let mut findx = [FieldIndex::default(); 6];
        let err = dof_to_field_index(&mesh, &CG2_2D, &[0, 1, 2], &mut findx).unwrap_err();
        assert_eq!(err, FeSpaceError::SubelementMatchFailure { sid: 0 });
    }
}

//! CG3 on a grade-1 edge: vertex degrees of freedom plus two interior nodes
//! at 1/3 and 2/3 along the edge.

use super::FeSpace;
use crate::eldefn::Instruction;

fn cg3_1d_interpolate(lambda: &[f64], wts: &mut [f64]) {
    let (l0, l1) = (lambda[0], lambda[1]);
    let a = 4.5 * l0 * l1;
    wts[0] = l0 * (1.0 - a);
    wts[1] = l1 * (1.0 - a);
    wts[2] = a * (2.0 * l0 - l1);
    wts[3] = a * (2.0 * l1 - l0);
}

/// The source omits a gradient function for CG3. This is the analytic
/// derivative of `cg3_1d_interpolate`, obtained by differentiating
/// `a = 4.5 * lambda0 * lambda1` and each `wts[i]` with respect to
/// `lambda0` and `lambda1` independently (column-major, `nnodes=4`, `nbary=2`).
fn cg3_1d_gradient(lambda: &[f64], grad: &mut [f64]) {
    let (l0, l1) = (lambda[0], lambda[1]);
    let col0 = [
        1.0 - 9.0 * l0 * l1,
        -4.5 * l1 * l1,
        18.0 * l0 * l1 - 4.5 * l1 * l1,
        9.0 * l1 * l1 - 9.0 * l0 * l1,
    ];
    let col1 = [
        -4.5 * l0 * l0,
        1.0 - 9.0 * l0 * l1,
        9.0 * l0 * l0 - 9.0 * l0 * l1,
        18.0 * l0 * l1 - 4.5 * l0 * l0,
    ];
    grad[0..4].copy_from_slice(&col0);
    grad[4..8].copy_from_slice(&col1);
}

/// `0 - 2 - 3 - 1`: one degree of freedom per vertex, two interior to the edge.
static CG3_1D_SHAPE: [usize; 2] = [1, 2];
static CG3_1D_NODES: [f64; 4] = [0.0, 1.0, 1.0 / 3.0, 2.0 / 3.0];
static CG3_1D_ELDEFN: [Instruction; 6] = [
    Instruction::line(0, 0, 1),
    Instruction::quantity(0, 0, 0),
    Instruction::quantity(0, 1, 0),
    Instruction::quantity(1, 0, 0),
    Instruction::quantity(1, 0, 1),
    Instruction::End,
];

/// CG3 on a grade-1 edge.
pub static CG3_1D: FeSpace = FeSpace {
    name: "CG3",
    grade: 1,
    shape: &CG3_1D_SHAPE,
    degree: 3,
    nnodes: 4,
    nsubel: 1,
    nodes: &CG3_1D_NODES,
    ifn: cg3_1d_interpolate,
    gfn: cg3_1d_gradient,
    eldefn: &CG3_1D_ELDEFN,
    lower: &[],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cg3_1d_interior_node_at_one_third() {
        // lambda = (2/3, 1/3): a = 4.5 * 2/9 = 1, interior node at 1/3.
        let mut wts = [0.0; 4];
        cg3_1d_interpolate(&[2.0 / 3.0, 1.0 / 3.0], &mut wts);
        let expected = [0.0, 0.0, 1.0, 0.0];
        for (w, e) in wts.iter().zip(expected.iter()) {
            assert!((w - e).abs() < 1e-12, "{:?} vs {:?}", wts, expected);
        }
    }

    #[test]
    fn cg3_1d_gradient_columns_sum_to_one() {
        let mut grad = [0.0; 8];
        cg3_1d_gradient(&[0.4, 0.6], &mut grad);
        let col0_sum: f64 = grad[0..4].iter().sum();
        let col1_sum: f64 = grad[4..8].iter().sum();
        assert!((col0_sum - 1.0).abs() < 1e-12);
        assert!((col1_sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cg3_1d_partition_of_unity_on_simplex() {
        let mut wts = [0.0; 4];
        for l0 in [0.0, 0.2, 0.5, 0.75, 1.0] {
            cg3_1d_interpolate(&[l0, 1.0 - l0], &mut wts);
            let sum: f64 = wts.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "sum={sum} at l0={l0}");
        }
    }
}

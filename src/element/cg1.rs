//! CG1: one degree of freedom per vertex, on grades 1, 2 and 3.

use super::FeSpace;
use crate::eldefn::Instruction;

fn cg1_interpolate(lambda: &[f64], wts: &mut [f64]) {
    wts[..lambda.len()].copy_from_slice(lambda);
}

/// Gradient of CG1 is the identity: `d(wts[i])/d(lambda[j]) == delta_ij`.
fn cg1_gradient(lambda: &[f64], grad: &mut [f64]) {
    let n = lambda.len();
    grad[..n * n].fill(0.0);
    for i in 0..n {
        grad[i * n + i] = 1.0;
    }
}

/// One degree of freedom per vertex: `0 - 1`.
static CG1_1D_SHAPE: [usize; 2] = [1, 0];
static CG1_1D_NODES: [f64; 2] = [0.0, 1.0];
static CG1_1D_ELDEFN: [Instruction; 3] = [
    Instruction::quantity(0, 0, 0),
    Instruction::quantity(0, 1, 0),
    Instruction::End,
];

/// CG1 on a grade-1 edge.
pub static CG1_1D: FeSpace = FeSpace {
    name: "CG1",
    grade: 1,
    shape: &CG1_1D_SHAPE,
    degree: 1,
    nnodes: 2,
    nsubel: 0,
    nodes: &CG1_1D_NODES,
    ifn: cg1_interpolate,
    gfn: cg1_gradient,
    eldefn: &CG1_1D_ELDEFN,
    lower: &[],
};

/// One degree of freedom per vertex on a triangle:
/// ```text
///   2
///   |\
///   0-1
/// ```
static CG1_2D_SHAPE: [usize; 3] = [1, 0, 0];
static CG1_2D_NODES: [f64; 6] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
static CG1_2D_ELDEFN: [Instruction; 4] = [
    Instruction::quantity(0, 0, 0),
    Instruction::quantity(0, 1, 0),
    Instruction::quantity(0, 2, 0),
    Instruction::End,
];
static CG1_2D_LOWER: [&FeSpace; 1] = [&CG1_1D];

/// CG1 on a grade-2 triangle.
pub static CG1_2D: FeSpace = FeSpace {
    name: "CG1",
    grade: 2,
    shape: &CG1_2D_SHAPE,
    degree: 1,
    nnodes: 3,
    nsubel: 0,
    nodes: &CG1_2D_NODES,
    ifn: cg1_interpolate,
    gfn: cg1_gradient,
    eldefn: &CG1_2D_ELDEFN,
    lower: &CG1_2D_LOWER,
};

/// One degree of freedom per vertex on a tetrahedron.
static CG1_3D_SHAPE: [usize; 4] = [1, 0, 0, 0];
static CG1_3D_NODES: [f64; 12] = [
    0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0,
];
static CG1_3D_ELDEFN: [Instruction; 5] = [
    Instruction::quantity(0, 0, 0),
    Instruction::quantity(0, 1, 0),
    Instruction::quantity(0, 2, 0),
    Instruction::quantity(0, 3, 0),
    Instruction::End,
];
static CG1_3D_LOWER: [&FeSpace; 2] = [&CG1_2D, &CG1_1D];

/// CG1 on a grade-3 tetrahedron.
pub static CG1_3D: FeSpace = FeSpace {
    name: "CG1",
    grade: 3,
    shape: &CG1_3D_SHAPE,
    degree: 1,
    nnodes: 4,
    nsubel: 0,
    nodes: &CG1_3D_NODES,
    ifn: cg1_interpolate,
    gfn: cg1_gradient,
    eldefn: &CG1_3D_ELDEFN,
    lower: &CG1_3D_LOWER,
};

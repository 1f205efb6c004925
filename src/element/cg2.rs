//! CG2: adds a midpoint degree of freedom per edge, on grades 1, 2 and 3.

use super::FeSpace;
use crate::eldefn::Instruction;

/// `0 - 2 - 1`: one degree of freedom per vertex, one at the midpoint.
fn cg2_1d_interpolate(lambda: &[f64], wts: &mut [f64]) {
    let dl = lambda[0] - lambda[1];
    wts[0] = lambda[0] * dl;
    wts[1] = -lambda[1] * dl;
    wts[2] = 4.0 * lambda[0] * lambda[1];
}

fn cg2_1d_gradient(lambda: &[f64], grad: &mut [f64]) {
    let (l0, l1) = (lambda[0], lambda[1]);
    // column-major, nnodes=3, nbary=2: grad[j*3+i] = d(wts[i])/d(lambda[j])
    let g = [
        2.0 * l0 - l1,
        -l1,
        4.0 * l1,
        -l0,
        2.0 * l1 - l0,
        4.0 * l0,
    ];
    grad[..6].copy_from_slice(&g);
}

static CG2_1D_SHAPE: [usize; 2] = [1, 1];
static CG2_1D_NODES: [f64; 3] = [0.0, 1.0, 0.5];
static CG2_1D_ELDEFN: [Instruction; 5] = [
    Instruction::line(0, 0, 1),
    Instruction::quantity(0, 0, 0),
    Instruction::quantity(0, 1, 0),
    Instruction::quantity(1, 0, 0),
    Instruction::End,
];

/// CG2 on a grade-1 edge.
pub static CG2_1D: FeSpace = FeSpace {
    name: "CG2",
    grade: 1,
    shape: &CG2_1D_SHAPE,
    degree: 2,
    nnodes: 3,
    nsubel: 1,
    nodes: &CG2_1D_NODES,
    ifn: cg2_1d_interpolate,
    gfn: cg2_1d_gradient,
    eldefn: &CG2_1D_ELDEFN,
    lower: &[],
};

/// ```text
///   2
///   |\
///   5 4
///   |  \
///   0-3-1
/// ```
fn cg2_2d_interpolate(lambda: &[f64], wts: &mut [f64]) {
    let (l0, l1, l2) = (lambda[0], lambda[1], lambda[2]);
    wts[0] = l0 * (2.0 * l0 - 1.0);
    wts[1] = l1 * (2.0 * l1 - 1.0);
    wts[2] = l2 * (2.0 * l2 - 1.0);
    wts[3] = 4.0 * l0 * l1;
    wts[4] = 4.0 * l1 * l2;
    wts[5] = 4.0 * l2 * l0;
}

fn cg2_2d_gradient(lambda: &[f64], grad: &mut [f64]) {
    let (l0, l1, l2) = (lambda[0], lambda[1], lambda[2]);
    // column-major, nnodes=6, nbary=3
    let g = [
        4.0 * l0 - 1.0, 0.0, 0.0, 4.0 * l1, 0.0, 4.0 * l2,
        0.0, 4.0 * l1 - 1.0, 0.0, 4.0 * l0, 4.0 * l2, 0.0,
        0.0, 0.0, 4.0 * l2 - 1.0, 0.0, 4.0 * l1, 4.0 * l0,
    ];
    grad[..18].copy_from_slice(&g);
}

static CG2_2D_SHAPE: [usize; 3] = [1, 1, 0];
static CG2_2D_NODES: [f64; 12] = [
    0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.5, 0.0, 0.5, 0.5, 0.0, 0.5,
];
static CG2_2D_ELDEFN: [Instruction; 10] = [
    Instruction::line(0, 0, 1),
    Instruction::line(1, 1, 2),
    Instruction::line(2, 2, 0),
    Instruction::quantity(0, 0, 0),
    Instruction::quantity(0, 1, 0),
    Instruction::quantity(0, 2, 0),
    Instruction::quantity(1, 0, 0),
    Instruction::quantity(1, 1, 0),
    Instruction::quantity(1, 2, 0),
    Instruction::End,
];
static CG2_2D_LOWER: [&FeSpace; 1] = [&CG2_1D];

/// CG2 on a grade-2 triangle.
pub static CG2_2D: FeSpace = FeSpace {
    name: "CG2",
    grade: 2,
    shape: &CG2_2D_SHAPE,
    degree: 2,
    nnodes: 6,
    nsubel: 3,
    nodes: &CG2_2D_NODES,
    ifn: cg2_2d_interpolate,
    gfn: cg2_2d_gradient,
    eldefn: &CG2_2D_ELDEFN,
    lower: &CG2_2D_LOWER,
};

/// Vertex degrees of freedom plus one midpoint per edge, on a tetrahedron.
/// Edges in definition order: (0,1),(1,2),(2,0),(0,3),(1,3),(2,3).
const CG2_3D_EDGES: [(usize, usize); 6] = [(0, 1), (1, 2), (2, 0), (0, 3), (1, 3), (2, 3)];

fn cg2_3d_interpolate(lambda: &[f64], wts: &mut [f64]) {
    for i in 0..4 {
        wts[i] = lambda[i] * (2.0 * lambda[i] - 1.0);
    }
    for (k, &(a, b)) in CG2_3D_EDGES.iter().enumerate() {
        wts[4 + k] = 4.0 * lambda[a] * lambda[b];
    }
}

/// Derived analytically from `wts[i] = lambda[i] * (2 lambda[i] - 1)` for the
/// four vertex nodes and `wts[k] = 4 * lambda[a] * lambda[b]` for the six
/// edge-midpoint nodes; the source's published 40-entry literal table is
/// self-inconsistent and is not reproduced.
fn cg2_3d_gradient(lambda: &[f64], grad: &mut [f64]) {
    const NNODES: usize = 10;
    grad[..NNODES * 4].fill(0.0);
    for j in 0..4 {
        for i in 0..4 {
            if i == j {
                grad[j * NNODES + i] = 4.0 * lambda[i] - 1.0;
            }
        }
        for (k, &(a, b)) in CG2_3D_EDGES.iter().enumerate() {
            let entry = if j == a {
                4.0 * lambda[b]
            } else if j == b {
                4.0 * lambda[a]
            } else {
                0.0
            };
            grad[j * NNODES + 4 + k] = entry;
        }
    }
}

static CG2_3D_SHAPE: [usize; 4] = [1, 1, 0, 0];
#[rustfmt::skip]
static CG2_3D_NODES: [f64; 30] = [
    0.0, 0.0, 0.0,
    1.0, 0.0, 0.0,
    0.0, 1.0, 0.0,
    0.0, 0.0, 1.0,
    0.5, 0.0, 0.0,
    0.5, 0.5, 0.0,
    0.0, 0.5, 0.0,
    0.0, 0.0, 0.5,
    0.5, 0.0, 0.5,
    0.0, 0.5, 0.5,
];
static CG2_3D_ELDEFN: [Instruction; 17] = [
    Instruction::line(0, 0, 1),
    Instruction::line(1, 1, 2),
    Instruction::line(2, 2, 0),
    Instruction::line(3, 0, 3),
    Instruction::line(4, 1, 3),
    Instruction::line(5, 2, 3),
    Instruction::quantity(0, 0, 0),
    Instruction::quantity(0, 1, 0),
    Instruction::quantity(0, 2, 0),
    Instruction::quantity(0, 3, 0),
    Instruction::quantity(1, 0, 0),
    Instruction::quantity(1, 1, 0),
    Instruction::quantity(1, 2, 0),
    Instruction::quantity(1, 3, 0),
    Instruction::quantity(1, 4, 0),
    Instruction::quantity(1, 5, 0),
    Instruction::End,
];
static CG2_3D_LOWER: [&FeSpace; 2] = [&CG2_2D, &CG2_1D];

/// CG2 on a grade-3 tetrahedron.
pub static CG2_3D: FeSpace = FeSpace {
    name: "CG2",
    grade: 3,
    shape: &CG2_3D_SHAPE,
    degree: 2,
    nnodes: 10,
    nsubel: 6,
    nodes: &CG2_3D_NODES,
    ifn: cg2_3d_interpolate,
    gfn: cg2_3d_gradient,
    eldefn: &CG2_3D_ELDEFN,
    lower: &CG2_3D_LOWER,
};

//! The basis evaluator: a thin dispatcher to a space's interpolation and
//! gradient callbacks, plus the barycentric-to-reference-coordinate
//! reduction for gradients.

use rlst::prelude::*;
use rlst::{rlst_dynamic_array2, DynamicArray};

use crate::element::FeSpace;

/// Interpolation weights at `lambda`, written into `wts` (length `space.nnodes`).
pub fn interpolate(space: &FeSpace, lambda: &[f64], wts: &mut [f64]) {
    (space.ifn)(lambda, wts)
}

/// The reference-coordinate gradient of every basis function at `lambda`:
/// an `nnodes x grade` dense array.
///
/// Internally computes the `nnodes x (grade + 1)` barycentric-coordinate
/// gradient via `space.gfn`, then eliminates the dependent barycentric
/// coordinate by subtracting its column from the rest — the standard
/// reduction since `sum(lambda) == 1` makes one of the `grade + 1`
/// coordinates a function of the others.
pub fn gradient(space: &FeSpace, lambda: &[f64]) -> DynamicArray<f64, 2> {
    let nnodes = space.nnodes;
    let nbary = space.nbary();

    let mut gdata = vec![0.0; nnodes * nbary];
    (space.gfn)(lambda, &mut gdata);

    let mut g = rlst_dynamic_array2!(f64, [nnodes, space.grade]);
    for j in 0..space.grade {
        for i in 0..nnodes {
            g[[i, j]] = gdata[(j + 1) * nnodes + i] - gdata[i];
        }
    }
    g
}

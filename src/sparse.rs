//! Compressed-column (CCS) storage for a DOF layout matrix.
//!
//! This is deliberately narrow: the layout matrix this crate produces has
//! an exact, fixed shape (every column holds precisely `nnodes` rows, in
//! definition order, never sorted) so a general-purpose sparse linear
//! algebra type would be the wrong tool. `Ccs` only models that one
//! contract.

use crate::error::FeSpaceError;

/// A compressed-column sparse matrix whose rows hold global field indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ccs {
    rows: usize,
    cols: usize,
    /// Column pointers, length `cols + 1`. `cptr[e]..cptr[e+1]` indexes into `rix`.
    cptr: Vec<usize>,
    /// Row indices (global field indices), length `cptr[cols]`.
    rix: Vec<usize>,
}

impl Ccs {
    /// An empty matrix with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate storage for `rows x cols` with `nnz` nonzero row slots.
    /// `rix` is zero-filled; callers overwrite every slot before reading.
    pub fn resize(&mut self, rows: usize, cols: usize, nnz: usize) -> Result<(), FeSpaceError> {
        self.rows = rows;
        self.cols = cols;
        self.cptr = vec![0; cols + 1];
        self.rix = vec![0; nnz];
        Ok(())
    }

    /// Row count (size of the field this layout indexes into).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count (number of top-grade mesh elements).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Column pointer array, length `cols() + 1`.
    pub fn cptr(&self) -> &[usize] {
        &self.cptr
    }

    /// Mutable column pointer array.
    pub fn cptr_mut(&mut self) -> &mut [usize] {
        &mut self.cptr
    }

    /// Row index array, length `cptr()[cols()]`.
    pub fn rix(&self) -> &[usize] {
        &self.rix
    }

    /// Mutable row index array.
    pub fn rix_mut(&mut self) -> &mut [usize] {
        &mut self.rix
    }

    /// The row indices belonging to column `e`, in definition order.
    pub fn column(&self, e: usize) -> &[usize] {
        &self.rix[self.cptr[e]..self.cptr[e + 1]]
    }
}

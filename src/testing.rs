//! Minimal in-memory `Mesh`/`Field` implementations used by this crate's own
//! tests and available to downstream integration tests, so the Definition
//! Interpreter and Layout Builder can be exercised without a real host mesh.

use std::collections::HashMap;

use crate::traits::{Connectivity, Field, Mesh};

/// A connectivity table: element id -> incident vertex ids, in local order.
#[derive(Debug, Default, Clone)]
pub struct MockConnectivity {
    elements: Vec<Vec<usize>>,
}

impl Connectivity for MockConnectivity {
    fn n_elements(&self) -> usize {
        self.elements.len()
    }
}

/// A tiny mesh backed by explicit connectivity tables, keyed `(from_grade, to_grade)`.
#[derive(Debug, Default)]
pub struct MockMesh {
    conn: HashMap<(usize, usize), MockConnectivity>,
}

impl MockMesh {
    /// An empty mesh with no elements of any grade.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a grade-1 subelement (edge) spanning vertices `(a, b)`;
    /// returns its id.
    pub fn add_edge(&mut self, a: usize, b: usize) -> usize {
        self.push(0, 1, vec![a, b])
    }

    /// Register a grade-2 subelement (triangular face) spanning vertices
    /// `(a, b, c)`; returns its id.
    pub fn add_face(&mut self, a: usize, b: usize, c: usize) -> usize {
        self.push(0, 2, vec![a, b, c])
    }

    /// Register a top-grade element with the given local-order vertex ids;
    /// returns its id.
    pub fn add_top_element(&mut self, grade: usize, vids: Vec<usize>) -> usize {
        self.push(0, grade, vids)
    }

    fn push(&mut self, from: usize, to: usize, vids: Vec<usize>) -> usize {
        let table = self.conn.entry((from, to)).or_default();
        table.elements.push(vids);
        table.elements.len() - 1
    }
}

impl Mesh for MockMesh {
    type Conn = MockConnectivity;

    fn connectivity(&self, from_grade: usize, to_grade: usize) -> Option<&MockConnectivity> {
        self.conn.get(&(from_grade, to_grade))
    }

    fn n_elements(&self, grade: usize) -> usize {
        self.conn
            .get(&(0, grade))
            .map(|c| c.n_elements())
            .unwrap_or(0)
    }

    fn get_connectivity<'a>(&'a self, conn: &'a MockConnectivity, elem_id: usize) -> Option<&'a [usize]> {
        conn.elements.get(elem_id).map(|v| v.as_slice())
    }

    fn match_elements(&self, conn: &MockConnectivity, targets: &[usize]) -> Option<usize> {
        let mut wanted = targets.to_vec();
        wanted.sort_unstable();

        let mut found: Option<usize> = None;
        for (id, vids) in conn.elements.iter().enumerate() {
            let mut sorted = vids.clone();
            sorted.sort_unstable();
            if sorted == wanted {
                if found.is_some() {
                    return None; // ambiguous match
                }
                found = Some(id);
            }
        }
        found
    }
}

/// A field whose degree-of-freedom storage is an explicit `(grade, id, indx)
/// -> row` map, with a fixed total row count.
#[derive(Debug, Default)]
pub struct MockField {
    nelements: usize,
    index: HashMap<(usize, usize, usize), usize>,
}

impl MockField {
    /// A field with `nelements` scalar storage rows and no index mappings yet.
    pub fn new(nelements: usize) -> Self {
        Self {
            nelements,
            index: HashMap::new(),
        }
    }

    /// Map `(grade, id, indx)` to storage row `row`.
    pub fn set_index(&mut self, grade: usize, id: usize, indx: usize, row: usize) {
        self.index.insert((grade, id, indx), row);
    }

    /// Assign one scalar row per distinct `(grade, id)` pair seen so far,
    /// in insertion order, for `indx == 0` only. Convenient for CG1 tests.
    pub fn assign_sequential(&mut self, triples: &[(usize, usize)]) {
        for (i, &(grade, id)) in triples.iter().enumerate() {
            self.set_index(grade, id, 0, i);
        }
        self.nelements = self.nelements.max(triples.len());
    }
}

impl Field for MockField {
    fn nelements(&self) -> usize {
        self.nelements
    }

    fn get_index(&self, grade: usize, id: usize, indx: usize) -> Option<usize> {
        self.index.get(&(grade, id, indx)).copied()
    }
}

use std::collections::HashMap;
use std::fmt;

use super::{Coordinate, EdgeError, Graph, Weight};
use super::traits::{check_endpoints, check_weight};

/// Adjacency-matrix graph representing a maze.
///
/// Vertices are numbered in insertion order, and the weight of the edge
/// between vertices `i` and `j` lives at row `i`, column `j` of a square
/// matrix, with `0` meaning no edge. The matrix grows by one row and one
/// column per added vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde",
           serde(into = "crate::GraphSnapshot", try_from = "crate::GraphSnapshot"))]
pub struct AdjacencyMatrixGraph {
    rows: usize,
    cols: usize,
    vertices: Vec<Coordinate>,
    indices: HashMap<Coordinate, usize>,
    matrix: Vec<Vec<Weight>>,
}
// Invariants:
//  - self.indices[self.vertices[i]] == i
//  - self.matrix is square, with side self.vertices.len()
//  - self.matrix[i][j] == self.matrix[j][i]

impl AdjacencyMatrixGraph {
    // HELPERS

    fn index_pair(&self, u: Coordinate, v: Coordinate) -> Option<(usize, usize)> {
        let i = *self.indices.get(&u)?;
        let j = *self.indices.get(&v)?;
        Some((i, j))
    }

    fn cell(&self, i: usize, j: usize) -> Weight {
        self.matrix.get(i).and_then(|row| row.get(j)).cloned().unwrap_or(0)
    }

    // Writes both halves of the symmetric pair; a `weight` of 0 clears it.
    fn set_cell(&mut self, i: usize, j: usize, weight: Weight) {
        if let Some(slot) = self.matrix.get_mut(i).and_then(|row| row.get_mut(j)) {
            *slot = weight;
        }
        if let Some(slot) = self.matrix.get_mut(j).and_then(|row| row.get_mut(i)) {
            *slot = weight;
        }
    }
}

impl Graph for AdjacencyMatrixGraph {
    fn with_shape(rows: usize, cols: usize) -> Self {
        AdjacencyMatrixGraph {
            rows,
            cols,
            vertices: Vec::new(),
            indices: HashMap::new(),
            matrix: Vec::new(),
        }
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn add_vertex(&mut self, label: Coordinate) {
        if self.indices.contains_key(&label) {
            return;
        }

        let index = self.vertices.len();
        self.indices.insert(label, index);
        self.vertices.push(label);

        for row in &mut self.matrix {
            row.push(0);
        }
        self.matrix.push(vec![0; index + 1]);
    }

    fn has_vertex(&self, label: Coordinate) -> bool {
        self.indices.contains_key(&label)
    }

    fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    fn stored_weight(&self, u: Coordinate, v: Coordinate) -> Option<Weight> {
        let (i, j) = self.index_pair(u, v)?;
        match self.cell(i, j) {
            0 => None,
            weight => Some(weight),
        }
    }

    fn neighbours(&self, label: Coordinate) -> Vec<Coordinate> {
        let row = match self.indices.get(&label).and_then(|&i| self.matrix.get(i)) {
            Some(row) => row,
            None => return vec![],
        };

        row.iter()
            .zip(&self.vertices)
            .filter(|&(&weight, _)| weight > 0)
            .map(|(_, &neighbour)| neighbour)
            .collect()
    }

    fn try_add_edge(&mut self, u: Coordinate, v: Coordinate, weight: Weight)
                    -> Result<(), EdgeError> {
        check_endpoints(self, u, v)?;
        check_weight(weight)?;

        if self.stored_weight(u, v).is_some() {
            return Err(EdgeError::DuplicateEdge(u, v));
        }

        if let Some((i, j)) = self.index_pair(u, v) {
            self.set_cell(i, j, weight);
        }
        Ok(())
    }

    fn try_update_wall(&mut self,
                       u: Coordinate,
                       v: Coordinate,
                       has_wall: bool,
                       weight: Weight)
                       -> Result<(), EdgeError> {
        check_endpoints(self, u, v)?;

        if !has_wall {
            check_weight(weight)?;
        }

        if let Some((i, j)) = self.index_pair(u, v) {
            self.set_cell(i, j, if has_wall { 0 } else { weight });
        }
        Ok(())
    }
}

/// Same format as the list graph, with neighbours in vertex order.
impl fmt::Display for AdjacencyMatrixGraph {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for &u in &self.vertices {
            let edges = self.neighbours(u).into_iter()
                .map(|v| format!("{}, {}", v, self.weight(u, v)))
                .collect::<Vec<_>>();
            writeln!(formatter, "{} -> [{}]", u, edges.join("; "))?;
        }

        Ok(())
    }
}

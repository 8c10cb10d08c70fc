use std::collections::HashSet;

use tracing::trace;

use crate::{Coordinate, EdgeError};

/// The cost of crossing between two cells.
///
/// Only positive weights are ever stored; `0` means “wall” and is what
/// lookups report for absent edges.
pub type Weight = i32;

/// The weight callers pass when every passage costs the same.
pub const DEFAULT_WEIGHT: Weight = 1;

/// An undirected, weighted edge between two cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightedEdge {
    /// One endpoint.
    pub u: Coordinate,
    /// The other endpoint.
    pub v: Coordinate,
    /// The cost of the passage.
    pub weight: Weight,
}

impl WeightedEdge {
    /// Creates an edge between `u` and `v`.
    pub const fn new(u: Coordinate, v: Coordinate, weight: Weight) -> Self {
        WeightedEdge { u, v, weight }
    }

    /// The endpoints in canonical order, so that `u–v` and `v–u` share a
    /// key.
    pub fn key(&self) -> (Coordinate, Coordinate) {
        if self.u <= self.v {
            (self.u, self.v)
        } else {
            (self.v, self.u)
        }
    }
}

/// A maze as an undirected grid graph.
///
/// Vertices are cells; an edge is a passage between two orthogonally
/// adjacent cells, with a positive weight. The absence of an edge
/// between adjacent cells is a wall. Implementations must keep the edge
/// relation symmetric and never store more than one edge per pair of
/// cells.
///
/// Implementors supply storage and the checked mutators; everything else
/// is provided in terms of them.
pub trait Graph: Sized {
    /// Creates an empty graph for a maze of `rows` × `cols` cells.
    ///
    /// The shape is informational: vertices are not checked against it.
    fn with_shape(rows: usize, cols: usize) -> Self;

    /// The number of rows the graph was created with.
    fn rows(&self) -> usize;

    /// The number of columns the graph was created with.
    fn cols(&self) -> usize;

    /// Adds a vertex, if not already present.
    fn add_vertex(&mut self, label: Coordinate);

    /// Is `label` a vertex?
    fn has_vertex(&self, label: Coordinate) -> bool;

    /// The vertices, in insertion order.
    fn vertices(&self) -> &[Coordinate];

    /// The weight stored between `u` and `v`, if any.
    fn stored_weight(&self, u: Coordinate, v: Coordinate) -> Option<Weight>;

    /// The cells reachable from `label` through one passage.
    ///
    /// Returns an empty vector for unknown or isolated vertices.
    fn neighbours(&self, label: Coordinate) -> Vec<Coordinate>;

    /// Adds a passage of `weight` between `u` and `v`.
    ///
    /// Both cells must be vertices, adjacent, and not already joined, and
    /// `weight` must be positive. On failure the graph is unchanged.
    fn try_add_edge(&mut self, u: Coordinate, v: Coordinate, weight: Weight)
                    -> Result<(), EdgeError>;

    /// Puts up (`has_wall`) or knocks down a wall between `u` and `v`.
    ///
    /// Putting up a wall where there is none succeeds. Knocking one down
    /// inserts a passage of `weight`, or re-weights the existing one.
    fn try_update_wall(&mut self,
                       u: Coordinate,
                       v: Coordinate,
                       has_wall: bool,
                       weight: Weight)
                       -> Result<(), EdgeError>;

    /// The number of cells in the logical grid, saturating at
    /// `usize::MAX`.
    fn size(&self) -> usize {
        self.rows().saturating_mul(self.cols())
    }

    /// Creates an empty graph of the same type and shape.
    fn empty_like(&self) -> Self {
        Self::with_shape(self.rows(), self.cols())
    }

    /// Adds each vertex in order.
    fn add_vertices<I>(&mut self, labels: I)
        where I: IntoIterator<Item = Coordinate> {

        for label in labels {
            self.add_vertex(label);
        }
    }

    /// Adds a passage; see [`try_add_edge`](#tymethod.try_add_edge).
    ///
    /// Returns whether the graph changed.
    fn add_edge(&mut self, u: Coordinate, v: Coordinate, weight: Weight) -> bool {
        let result = self.try_add_edge(u, v, weight);
        accepted("add_edge", u, v, result)
    }

    /// Updates a wall; see [`try_update_wall`](#tymethod.try_update_wall).
    fn update_wall(&mut self,
                   u: Coordinate,
                   v: Coordinate,
                   has_wall: bool,
                   weight: Weight)
                   -> bool {
        let result = self.try_update_wall(u, v, has_wall, weight);
        accepted("update_wall", u, v, result)
    }

    /// Removes any passage between `u` and `v`.
    fn try_remove_edge(&mut self, u: Coordinate, v: Coordinate)
                       -> Result<(), EdgeError> {
        self.try_update_wall(u, v, true, DEFAULT_WEIGHT)
    }

    /// Removes any passage between `u` and `v`, i.e., puts up a wall.
    fn remove_edge(&mut self, u: Coordinate, v: Coordinate) -> bool {
        self.update_wall(u, v, true, DEFAULT_WEIGHT)
    }

    /// Is there a passage between `u` and `v`?
    fn has_edge(&self, u: Coordinate, v: Coordinate) -> bool {
        self.weight(u, v) > 0
    }

    /// Is there a wall between `u` and `v`?
    ///
    /// Non-adjacent cells and unknown vertices are always walled off.
    fn wall_status(&self, u: Coordinate, v: Coordinate) -> bool {
        !u.is_adjacent(v)
            || !self.has_vertex(u)
            || !self.has_vertex(v)
            || self.stored_weight(u, v).is_none()
    }

    /// The weight of the passage between `u` and `v`, or `0` if walled.
    fn weight(&self, u: Coordinate, v: Coordinate) -> Weight {
        match self.stored_weight(u, v) {
            Some(weight) if weight > 0 => weight,
            _ => 0,
        }
    }

    /// The distinct passages, each reported once.
    ///
    /// Edges are discovered by visiting vertices in insertion order and
    /// each vertex’s neighbours in storage order.
    fn edges(&self) -> Vec<WeightedEdge> {
        let mut seen = HashSet::new();
        let mut result = vec![];

        for &u in self.vertices() {
            for v in self.neighbours(u) {
                let edge = WeightedEdge::new(u, v, self.weight(u, v));
                if edge.weight > 0 && seen.insert(edge.key()) {
                    result.push(edge);
                }
            }
        }

        result
    }

    /// The number of distinct passages.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// The sum of the weights of all passages.
    fn total_weight(&self) -> i64 {
        self.edges().iter().map(|edge| i64::from(edge.weight)).sum()
    }
}

// Checks shared by every mutator: both endpoints present, and adjacent.
pub(crate) fn check_endpoints<G: Graph>(graph: &G, u: Coordinate, v: Coordinate)
                                        -> Result<(), EdgeError> {
    if !graph.has_vertex(u) {
        return Err(EdgeError::MissingVertex(u));
    }

    if !graph.has_vertex(v) {
        return Err(EdgeError::MissingVertex(v));
    }

    if !u.is_adjacent(v) {
        return Err(EdgeError::NotAdjacent(u, v));
    }

    Ok(())
}

pub(crate) fn check_weight(weight: Weight) -> Result<(), EdgeError> {
    if weight > 0 { Ok(()) } else { Err(EdgeError::NonPositiveWeight(weight)) }
}

fn accepted(operation: &'static str,
            u: Coordinate,
            v: Coordinate,
            result: Result<(), EdgeError>)
            -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            trace!(operation = operation, code = err.code(), %u, %v, "edge rejected");
            false
        }
    }
}

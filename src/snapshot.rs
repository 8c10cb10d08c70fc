use std::convert::TryFrom;

use super::{AdjacencyListGraph, AdjacencyMatrixGraph};
use super::{Coordinate, EdgeError, Graph, WeightedEdge};

/// A graph as plain values, independent of how it is stored.
///
/// With the `serde` feature, both graph types serialize through this
/// form, so a maze saved from one representation can be loaded into the
/// other.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraphSnapshot {
    /// Rows of the logical grid.
    pub rows: usize,
    /// Columns of the logical grid.
    pub cols: usize,
    /// Vertices in insertion order.
    pub vertices: Vec<Coordinate>,
    /// Each passage once.
    pub edges: Vec<WeightedEdge>,
}

impl GraphSnapshot {
    /// Captures the shape, vertices, and passages of `graph`.
    pub fn of<G: Graph>(graph: &G) -> Self {
        GraphSnapshot {
            rows: graph.rows(),
            cols: graph.cols(),
            vertices: graph.vertices().to_vec(),
            edges: graph.edges(),
        }
    }

    /// Rebuilds a graph from the snapshot.
    ///
    /// Fails on the first edge the graph rejects, e.g., a duplicate or
    /// one whose endpoints are not listed vertices.
    pub fn build<G: Graph>(&self) -> Result<G, EdgeError> {
        let mut graph = G::with_shape(self.rows, self.cols);
        graph.add_vertices(self.vertices.iter().cloned());

        for edge in &self.edges {
            graph.try_add_edge(edge.u, edge.v, edge.weight)?;
        }

        Ok(graph)
    }
}

macro_rules! snapshot_conversions {
    ($graph:ident) => {
        impl From<$graph> for GraphSnapshot {
            fn from(graph: $graph) -> Self {
                GraphSnapshot::of(&graph)
            }
        }

        impl TryFrom<GraphSnapshot> for $graph {
            type Error = EdgeError;

            fn try_from(snapshot: GraphSnapshot) -> Result<Self, EdgeError> {
                snapshot.build()
            }
        }
    }
}

snapshot_conversions!(AdjacencyListGraph);
snapshot_conversions!(AdjacencyMatrixGraph);

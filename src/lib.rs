#![doc(html_root_url = "https://docs.rs/maze-mst/0.1.0")]
//! Grid mazes as graphs, and their minimum spanning trees.
//!
//! A maze is a grid of cells. Neighbouring cells are either separated by
//! a wall or joined by a passage with a positive cost. The [`Graph`]
//! trait captures that model; it has two implementations:
//!
//! |           | storage | neighbour lookup |
//! | :-------- | :------ | :--------------- |
//! | [`AdjacencyListGraph`](struct.AdjacencyListGraph.html) | per-vertex `(neighbour, weight)` lists | scan of ≤ 4 entries |
//! | [`AdjacencyMatrixGraph`](struct.AdjacencyMatrixGraph.html) | square weight matrix | row scan |
//!
//! [`kruskal_mst`](fn.kruskal_mst.html) turns any `Graph` into a minimum
//! spanning tree of the same type, using the hash-based
//! [`UnionFind`](struct.UnionFind.html) to reject edges that would close a
//! cycle.
//!
//! [`Graph`]: trait.Graph.html
//!
//! # Usage
//!
//! Mutators report success as a `bool`; each has a `try_` form that says
//! why it failed:
//!
//! ```
//! use maze_mst::{AdjacencyListGraph, Coordinate, EdgeError, Graph};
//!
//! let (a, b) = (Coordinate::new(0, 0), Coordinate::new(1, 1));
//! let mut maze = AdjacencyListGraph::with_shape(2, 2);
//! maze.add_vertices(vec![a, b]);
//!
//! assert!(!maze.add_edge(a, b, 1));
//! assert_eq!(Err(EdgeError::NotAdjacent(a, b)), maze.try_add_edge(a, b, 1));
//! ```
//!
//! # Features
//!
//! - `serde`: serialization of coordinates, edges, and both graph types.
//!
//! # Examples
//!
//! Knocking down walls of a 3 × 3 maze and keeping only the cheapest
//! passages that still connect every cell:
//!
//! ```
//! use maze_mst::{kruskal_mst, AdjacencyListGraph, Coordinate, Graph};
//!
//! fn maze(weights: &[[i32; 2]; 3], vertical: &[[i32; 3]; 2])
//!         -> AdjacencyListGraph {
//!     let mut graph = AdjacencyListGraph::with_shape(3, 3);
//!     for row in 0..3 {
//!         for col in 0..3 {
//!             graph.add_vertex(Coordinate::new(row, col));
//!         }
//!     }
//!     for row in 0..3 {
//!         for col in 0..2 {
//!             graph.update_wall(Coordinate::new(row, col),
//!                               Coordinate::new(row, col + 1),
//!                               false, weights[row][col]);
//!         }
//!     }
//!     for row in 0..2 {
//!         for col in 0..3 {
//!             graph.update_wall(Coordinate::new(row, col),
//!                               Coordinate::new(row + 1, col),
//!                               false, vertical[row][col]);
//!         }
//!     }
//!     graph
//! }
//!
//! fn main() {
//!     // Maze to use:
//!     //
//!     //  + ---6--- + ---5--- +
//!     //  |         |         |
//!     //  8         1         4
//!     //  |         |         |
//!     //  + ---7--- + ---2--- +
//!     //  |         |         |
//!     //  3        12        11
//!     //  |         |         |
//!     //  + ---9--- + --10--- +
//!     let graph = maze(&[[6, 5], [7, 2], [9, 10]],
//!                      &[[8, 1, 4], [3, 12, 11]]);
//!
//!     let mst = kruskal_mst(&graph);
//!
//!     assert_eq!(12, graph.edge_count());
//!     assert_eq!(8, mst.edge_count());
//!     assert_eq!(1 + 2 + 3 + 4 + 6 + 7 + 9 + 10, mst.total_weight());
//! }
//! ```

#![warn(missing_docs)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

mod coordinate;
mod error;
mod traits;
mod list;
mod matrix;
mod snapshot;
mod union_find;
mod kruskal;

pub use coordinate::*;
pub use error::*;
pub use traits::{Graph, Weight, WeightedEdge, DEFAULT_WEIGHT};
pub use list::*;
pub use matrix::*;
pub use snapshot::*;
pub use union_find::*;
pub use kruskal::*;

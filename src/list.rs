use std::collections::HashMap;
use std::fmt;

use super::{Coordinate, EdgeError, Graph, Weight};
use super::traits::{check_endpoints, check_weight};

/// Adjacency-list graph representing a maze.
///
/// Each vertex keeps a list of `(neighbour, weight)` pairs, and every
/// edge appears in the lists of both its endpoints. Grid cells have at
/// most four neighbours, so lookups scan the list.
///
/// # Examples
///
/// ```
/// use maze_mst::{AdjacencyListGraph, Coordinate, Graph, DEFAULT_WEIGHT};
///
/// let a = Coordinate::new(0, 0);
/// let b = Coordinate::new(0, 1);
///
/// let mut maze = AdjacencyListGraph::with_shape(1, 2);
/// maze.add_vertices(vec![a, b]);
///
/// assert!(maze.wall_status(a, b));
/// assert!(maze.add_edge(a, b, DEFAULT_WEIGHT));
/// assert!(!maze.wall_status(a, b));
/// assert_eq!(vec![b], maze.neighbours(a));
///
/// assert_eq!("(0, 0) -> [(0, 1), 1]\n(0, 1) -> [(0, 0), 1]\n",
///            maze.to_string());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde",
           serde(into = "crate::GraphSnapshot", try_from = "crate::GraphSnapshot"))]
pub struct AdjacencyListGraph {
    rows: usize,
    cols: usize,
    vertices: Vec<Coordinate>,
    adj_list: HashMap<Coordinate, Vec<(Coordinate, Weight)>>,
}
// Invariant: self.vertices and self.adj_list have the same vertices.

impl AdjacencyListGraph {
    /// The `(neighbour, weight)` pairs stored for `label`, in insertion
    /// order.
    pub fn adjacency(&self, label: Coordinate) -> &[(Coordinate, Weight)] {
        self.adj_list.get(&label).map_or(&[][..], Vec::as_slice)
    }

    // HELPERS

    fn find_edge(&self, u: Coordinate, v: Coordinate) -> Option<Weight> {
        self.adjacency(u).iter()
            .find(|&&(neighbour, _)| neighbour == v)
            .map(|&(_, weight)| weight)
    }

    fn update_edge_in_list(&mut self, u: Coordinate, v: Coordinate, weight: Weight)
                           -> bool {
        let slot = self.adj_list.get_mut(&u)
            .and_then(|edges| edges.iter_mut().find(|(n, _)| *n == v));

        match slot {
            Some(slot) => {
                slot.1 = weight;
                true
            }
            None => false,
        }
    }

    fn remove_edge_from_list(&mut self, u: Coordinate, v: Coordinate) -> bool {
        match self.adj_list.get_mut(&u) {
            Some(edges) => {
                let before = edges.len();
                edges.retain(|&(neighbour, _)| neighbour != v);
                edges.len() < before
            }
            None => false,
        }
    }

    // PRECONDITION: both endpoints are vertices and not yet joined.
    fn insert_edge(&mut self, u: Coordinate, v: Coordinate, weight: Weight) {
        if let Some(edges) = self.adj_list.get_mut(&u) {
            edges.push((v, weight));
        }
        if let Some(edges) = self.adj_list.get_mut(&v) {
            edges.push((u, weight));
        }
    }
}

impl Graph for AdjacencyListGraph {
    fn with_shape(rows: usize, cols: usize) -> Self {
        AdjacencyListGraph {
            rows,
            cols,
            vertices: Vec::new(),
            adj_list: HashMap::new(),
        }
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn add_vertex(&mut self, label: Coordinate) {
        if !self.adj_list.contains_key(&label) {
            self.adj_list.insert(label, Vec::new());
            self.vertices.push(label);
        }
    }

    fn has_vertex(&self, label: Coordinate) -> bool {
        self.adj_list.contains_key(&label)
    }

    fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    fn stored_weight(&self, u: Coordinate, v: Coordinate) -> Option<Weight> {
        self.find_edge(u, v)
    }

    fn neighbours(&self, label: Coordinate) -> Vec<Coordinate> {
        self.adjacency(label).iter()
            .filter(|&&(_, weight)| weight > 0)
            .map(|&(neighbour, _)| neighbour)
            .collect()
    }

    fn try_add_edge(&mut self, u: Coordinate, v: Coordinate, weight: Weight)
                    -> Result<(), EdgeError> {
        check_endpoints(self, u, v)?;
        check_weight(weight)?;

        if self.find_edge(u, v).is_some() {
            return Err(EdgeError::DuplicateEdge(u, v));
        }

        self.insert_edge(u, v, weight);
        Ok(())
    }

    fn try_update_wall(&mut self,
                       u: Coordinate,
                       v: Coordinate,
                       has_wall: bool,
                       weight: Weight)
                       -> Result<(), EdgeError> {
        check_endpoints(self, u, v)?;

        if has_wall {
            self.remove_edge_from_list(u, v);
            self.remove_edge_from_list(v, u);
            return Ok(());
        }

        check_weight(weight)?;

        if self.find_edge(u, v).is_some() {
            self.update_edge_in_list(u, v, weight);
            self.update_edge_in_list(v, u, weight);
        } else {
            self.insert_edge(u, v, weight);
        }

        Ok(())
    }
}

/// One line per vertex in insertion order, as
/// `(row, col) -> [(row, col), weight; ...]`.
impl fmt::Display for AdjacencyListGraph {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for &u in &self.vertices {
            write!(formatter, "{} -> [", u)?;
            for (i, &(v, weight)) in self.adjacency(u).iter().enumerate() {
                if i > 0 {
                    write!(formatter, "; ")?;
                }
                write!(formatter, "{}, {}", v, weight)?;
            }
            writeln!(formatter, "]")?;
        }

        Ok(())
    }
}

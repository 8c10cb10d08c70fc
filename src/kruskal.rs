//! Kruskal’s minimum spanning tree over any [`Graph`](trait.Graph.html).

use tracing::{debug, instrument, trace};

use super::{Graph, UnionFind, WeightedEdge};

/// Computes a minimum spanning tree of `graph` using Kruskal’s algorithm.
///
/// The result has the same type and shape as `graph`, all of its
/// vertices, and only the tree edges. A disconnected maze yields a
/// minimum spanning forest: one tree per connected component. The input
/// is left untouched.
///
/// Among equal-weight edges, those discovered first (see
/// [`Graph::edges`](trait.Graph.html#method.edges)) are preferred.
///
/// # Examples
///
/// ```
/// use maze_mst::{kruskal_mst, AdjacencyListGraph, Coordinate, Graph};
///
/// let c = Coordinate::new;
/// let mut maze = AdjacencyListGraph::with_shape(2, 2);
/// maze.add_vertices(vec![c(0, 0), c(0, 1), c(1, 0), c(1, 1)]);
/// maze.add_edge(c(0, 0), c(0, 1), 1);
/// maze.add_edge(c(0, 0), c(1, 0), 4);
/// maze.add_edge(c(0, 1), c(1, 1), 2);
/// maze.add_edge(c(1, 0), c(1, 1), 1);
///
/// let mst = kruskal_mst(&maze);
/// assert_eq!(3, mst.edge_count());
/// assert_eq!(4, mst.total_weight());
/// assert!(!mst.has_edge(c(0, 0), c(1, 0)));
/// ```
#[instrument(level = "debug", skip(graph),
             fields(rows = graph.rows(), cols = graph.cols(),
                    vertices = graph.vertices().len()))]
pub fn kruskal_mst<G: Graph>(graph: &G) -> G {
    let mut mst = graph.empty_like();
    if graph.vertices().is_empty() {
        return mst;
    }

    mst.add_vertices(graph.vertices().iter().cloned());

    let edges = edges_by_weight(graph);
    debug!(candidates = edges.len(), "collected edges");

    let mut uf: UnionFind<_> = graph.vertices().iter().cloned().collect();
    let mut rejected = 0usize;

    for edge in edges {
        if uf.union(edge.u, edge.v) {
            mst.add_edge(edge.u, edge.v, edge.weight);
        } else {
            trace!(u = %edge.u, v = %edge.v, weight = edge.weight, "edge closes a cycle");
            rejected += 1;
        }
    }

    debug!(accepted = mst.edge_count(),
           rejected = rejected,
           components = uf.set_count(),
           total_weight = mst.total_weight(),
           "spanning tree complete");
    mst
}

/// The distinct passages of `graph`, lightest first.
///
/// The sort is stable, so equal weights keep discovery order.
pub fn edges_by_weight<G: Graph>(graph: &G) -> Vec<WeightedEdge> {
    let mut edges = graph.edges();
    edges.sort_by_key(|edge| edge.weight);
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdjacencyListGraph, AdjacencyMatrixGraph, Coordinate};

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    fn square<G: Graph>() -> G {
        let mut graph = G::with_shape(2, 2);
        graph.add_vertices(vec![c(0, 0), c(0, 1), c(1, 0), c(1, 1)]);
        graph.add_edge(c(0, 0), c(0, 1), 1);
        graph.add_edge(c(0, 0), c(1, 0), 4);
        graph.add_edge(c(0, 1), c(1, 1), 2);
        graph.add_edge(c(1, 0), c(1, 1), 1);
        graph
    }

    fn check_square<G: Graph>() {
        let graph = square::<G>();
        let mst = kruskal_mst(&graph);

        assert_eq!(3, mst.edge_count());
        assert_eq!(4, mst.total_weight());
        assert_eq!(1, mst.weight(c(0, 0), c(0, 1)));
        assert_eq!(2, mst.weight(c(0, 1), c(1, 1)));
        assert_eq!(1, mst.weight(c(1, 0), c(1, 1)));
        assert!(mst.wall_status(c(0, 0), c(1, 0)));

        assert_eq!(4, graph.edge_count());
        assert_eq!(8, graph.total_weight());
    }

    #[test]
    fn square_list() {
        check_square::<AdjacencyListGraph>();
    }

    #[test]
    fn square_matrix() {
        check_square::<AdjacencyMatrixGraph>();
    }

    #[test]
    fn empty_graph() {
        let graph = AdjacencyListGraph::with_shape(4, 5);
        let mst = kruskal_mst(&graph);
        assert_eq!(4, mst.rows());
        assert_eq!(5, mst.cols());
        assert!(mst.vertices().is_empty());
        assert_eq!(0, mst.edge_count());
    }

    #[test]
    fn isolated_vertices_are_kept() {
        let mut graph = AdjacencyMatrixGraph::with_shape(3, 3);
        graph.add_vertices(vec![c(2, 2), c(0, 0), c(1, 1)]);
        let mst = kruskal_mst(&graph);
        assert_eq!(&[c(2, 2), c(0, 0), c(1, 1)], mst.vertices());
        assert_eq!(0, mst.edge_count());
    }

    #[test]
    fn forest_of_disconnected_maze() {
        // Rows 0 and 2 are corridors; row 1 is walled off from both.
        let mut graph = AdjacencyListGraph::with_shape(3, 3);
        for row in 0 .. 3 {
            for col in 0 .. 3 {
                graph.add_vertex(c(row, col));
            }
        }
        for &row in &[0, 2] {
            graph.add_edge(c(row, 0), c(row, 1), 3);
            graph.add_edge(c(row, 1), c(row, 2), 1);
        }
        graph.add_edge(c(1, 0), c(1, 1), 5);

        let mst = kruskal_mst(&graph);
        // 9 vertices, 4 components: the two corridors, (1, 0)–(1, 1), (1, 2).
        assert_eq!(5, mst.edge_count());
        assert_eq!(13, mst.total_weight());
        assert!(mst.neighbours(c(1, 2)).is_empty());
    }

    #[test]
    fn cycle_closing_edge_is_dropped() {
        let mut graph = square::<AdjacencyListGraph>();
        graph.update_wall(c(0, 0), c(1, 0), false, 1);

        let mst = kruskal_mst(&graph);
        assert_eq!(3, mst.edge_count());
        assert_eq!(3, mst.total_weight());
        assert!(mst.wall_status(c(0, 1), c(1, 1)));
    }

    #[test]
    fn input_is_not_mutated() {
        let graph = square::<AdjacencyListGraph>();
        let before = graph.clone();
        kruskal_mst(&graph);
        assert_eq!(before, graph);
    }

    #[test]
    fn edges_by_weight_is_sorted_and_distinct() {
        let graph = square::<AdjacencyMatrixGraph>();
        let weights = edges_by_weight(&graph).iter()
            .map(|edge| edge.weight)
            .collect::<Vec<_>>();
        assert_eq!(vec![1, 1, 2, 4], weights);
    }
}

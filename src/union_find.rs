use std::cell::Cell;
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::iter::FromIterator;

/// Hash-based union-find representing disjoint sets of vertices.
///
/// Every vertex starts as its own root. [`union`](#method.union) hangs
/// the second argument’s root under the first argument’s root, and
/// [`find`](#method.find) compresses the path it walks so that every
/// vertex on it points straight at the root.
///
/// # Examples
///
/// ```
/// use maze_mst::{Coordinate, UnionFind};
///
/// let cells = (0..3).map(|col| Coordinate::new(0, col));
/// let mut uf: UnionFind<Coordinate> = cells.collect();
///
/// let (a, b, c) = (Coordinate::new(0, 0), Coordinate::new(0, 1),
///                  Coordinate::new(0, 2));
///
/// assert!(uf.union(a, b));
/// assert!(uf.union(b, c));
/// assert!(!uf.union(a, c));
/// assert_eq!(a, uf.find(c));
/// assert_eq!(1, uf.set_count());
/// ```
#[derive(Clone)]
pub struct UnionFind<Vertex: Copy + Eq + Hash> {
    parents: HashMap<Vertex, Cell<Vertex>>,
    set_count: usize,
}
// Invariant: self.set_count is the number of roots in self.parents.

impl<Vertex: Copy + Debug + Eq + Hash> Debug for UnionFind<Vertex> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "UnionFind({:?})", self.parents)
    }
}

impl<Vertex: Copy + Eq + Hash> Default for UnionFind<Vertex> {
    fn default() -> Self {
        UnionFind {
            parents: HashMap::new(),
            set_count: 0,
        }
    }
}

impl<Vertex: Copy + Eq + Hash> FromIterator<Vertex> for UnionFind<Vertex> {
    fn from_iter<I: IntoIterator<Item = Vertex>>(vertices: I) -> Self {
        let mut result = UnionFind::default();
        for vertex in vertices {
            result.insert(vertex);
        }
        result
    }
}

impl<Vertex: Copy + Eq + Hash> UnionFind<Vertex> {
    /// Creates a union-find with each of `vertices` in a singleton set.
    pub fn new<I: IntoIterator<Item = Vertex>>(vertices: I) -> Self {
        vertices.into_iter().collect()
    }

    /// The number of vertices in all the sets.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Is the union-find devoid of vertices?
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// The number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Is `vertex` known to the union-find?
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.parents.contains_key(&vertex)
    }

    /// Adds `vertex` in a singleton set, unless already present.
    ///
    /// Returns whether the vertex is new.
    pub fn insert(&mut self, vertex: Vertex) -> bool {
        if self.contains(vertex) {
            return false;
        }

        self.parents.insert(vertex, Cell::new(vertex));
        self.set_count += 1;
        true
    }

    /// Joins the sets of the two given vertices.
    ///
    /// Returns whether anything changed. That is, if the sets were
    /// different, it returns `true`, but if they were already the same
    /// then it returns `false`. Unknown vertices are inserted first.
    pub fn union(&mut self, a: Vertex, b: Vertex) -> bool {
        self.insert(a);
        self.insert(b);

        let a = self.find(a);
        let b = self.find(b);

        if a == b { return false; }

        self.set_parent(b, a);
        self.set_count -= 1;
        true
    }

    /// Finds the representative vertex for the given vertex’s set.
    ///
    /// A vertex the union-find has never seen is its own representative.
    pub fn find(&self, vertex: Vertex) -> Vertex {
        let mut root = vertex;
        loop {
            let parent = self.parent(root);
            if parent == root { break; }
            root = parent;
        }

        let mut vertex = vertex;
        while vertex != root {
            let parent = self.parent(vertex);
            self.set_parent(vertex, root);
            vertex = parent;
        }

        root
    }

    /// Determines whether two vertices are in the same set.
    pub fn equiv(&self, a: Vertex, b: Vertex) -> bool {
        self.find(a) == self.find(b)
    }

    // HELPERS

    fn parent(&self, vertex: Vertex) -> Vertex {
        self.parents.get(&vertex).map_or(vertex, Cell::get)
    }

    fn set_parent(&self, vertex: Vertex, parent: Vertex) {
        if let Some(cell) = self.parents.get(&vertex) {
            cell.set(parent);
        }
    }
}

use crate::{Coordinate, Weight};

/// Why a graph refused to add, update, or remove an edge.
///
/// The boolean graph operations collapse every variant to `false`; the
/// `try_` forms report which check failed first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum EdgeError {
    /// An endpoint is not a vertex of the graph.
    #[error("vertex {0} is not in the graph")]
    MissingVertex(Coordinate),
    /// The endpoints are not orthogonal neighbours.
    #[error("{0} and {1} are not adjacent")]
    NotAdjacent(Coordinate, Coordinate),
    /// Traversable edges need a positive weight.
    #[error("edge weight must be positive, got {0}")]
    NonPositiveWeight(Weight),
    /// The endpoints are already joined.
    #[error("an edge between {0} and {1} already exists")]
    DuplicateEdge(Coordinate, Coordinate),
}

impl EdgeError {
    /// A stable identifier for log fields.
    pub const fn code(&self) -> &'static str {
        match self {
            EdgeError::MissingVertex(_) => "MISSING_VERTEX",
            EdgeError::NotAdjacent(..) => "NOT_ADJACENT",
            EdgeError::NonPositiveWeight(_) => "NON_POSITIVE_WEIGHT",
            EdgeError::DuplicateEdge(..) => "DUPLICATE_EDGE",
        }
    }
}

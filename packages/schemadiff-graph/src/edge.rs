//! Edge model for the schema graph
//!
//! Edges are undirected and stored symmetrically: the "one"/"two" endpoint
//! naming carries no direction, and pairwise lookups are order-insensitive.

use serde::{Deserialize, Serialize};

use crate::vertex::VertexId;

/// Index identifying an edge within one graph's insertion-ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    /// Position in the edge sequence.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// An undirected, labeled relationship between exactly two vertices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint
    pub one: VertexId,

    /// Second endpoint
    pub two: VertexId,

    /// Relationship label (e.g. "implements", "field", "argument type")
    pub label: String,
}

impl Edge {
    pub fn new(one: VertexId, two: VertexId, label: impl Into<String>) -> Self {
        Self {
            one,
            two,
            label: label.into(),
        }
    }

    /// Whether `v` is one of this edge's endpoints
    #[inline]
    pub fn touches(&self, v: VertexId) -> bool {
        self.one == v || self.two == v
    }

    /// The endpoint opposite `v`, or `None` if `v` is not an endpoint.
    ///
    /// For a self-loop the opposite endpoint is `v` itself.
    #[inline]
    pub fn other_end(&self, v: VertexId) -> Option<VertexId> {
        if self.one == v {
            Some(self.two)
        } else if self.two == v {
            Some(self.one)
        } else {
            None
        }
    }
}

//! Schema graph container
//!
//! Insertion-ordered vertex/edge storage plus the indexes comparison
//! algorithms query repeatedly:
//! - name → vertex entry-point maps for types and directives
//! - unordered-pair → edge index for O(1) "are these connected, and how"
//! - per-vertex adjacency lists for deterministic incident-edge enumeration
//!
//! Build-then-read model: one builder populates the graph sequentially, after
//! which it is treated as immutable. No operation on a populated graph
//! mutates shared state, so a frozen graph can be read from many threads.
//!
//! Trust boundary: the container does not validate caller contracts
//! (duplicate vertices, re-inserting an already-indexed pair, name entries
//! for vertices never added). Violations are debug-asserted where cheap and
//! otherwise left to the builder.

use std::collections::HashMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::edge::{Edge, EdgeId};
use crate::vertex::{Vertex, VertexId, VertexKind};

/// Canonical key for the unordered pairwise index.
///
/// Keying on (min, max) makes lookups order-insensitive with a single entry
/// per pair, so the two directed entries of a literal table can never
/// diverge.
#[inline]
fn pair_key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// The labeled multigraph holding one schema snapshot
///
/// All index state is owned by the instance; there is no shared or static
/// state between graphs.
#[derive(Debug, Default)]
pub struct SchemaGraph {
    /// Insertion-ordered vertex arena; a [`VertexId`] is a position here
    vertices: Vec<Vertex>,

    /// Insertion-ordered edge sequence
    edges: Vec<Edge>,

    /// Type entry points (name → vertex)
    types_by_name: AHashMap<String, VertexId>,

    /// Directive entry points (name → vertex)
    directives_by_name: AHashMap<String, VertexId>,

    /// Unordered pair → latest edge indexed for that pair
    edge_by_pair: AHashMap<(VertexId, VertexId), EdgeId>,

    /// Incident edge ids per vertex, in edge-insertion order
    ///
    /// Parallel to `vertices`. Unlike `edge_by_pair` this keeps every
    /// inserted edge, so incident-edge queries stay exact even after a pair
    /// overwrite.
    adjacency: Vec<Vec<EdgeId>>,
}

impl SchemaGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with capacity hints for the build phase
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            types_by_name: AHashMap::new(),
            directives_by_name: AHashMap::new(),
            edge_by_pair: AHashMap::with_capacity(edges),
            adjacency: Vec::with_capacity(vertices),
        }
    }

    // ============================================================
    // Build phase
    // ============================================================

    /// Append a vertex and return its arena id.
    ///
    /// No duplicate check: adding the same payload twice creates two distinct
    /// vertices.
    pub fn add_vertex(&mut self, vertex: Vertex) -> VertexId {
        let id = VertexId(self.vertices.len());
        trace!("add_vertex {} kind={}", id, vertex.kind.as_str());
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        id
    }

    /// Append an edge and index it under the unordered endpoint pair.
    ///
    /// The pair index is last-write-wins: a second edge for an already
    /// indexed pair replaces the pairwise entry while the edge sequence and
    /// adjacency lists keep the earlier edge.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        debug_assert!(
            edge.one.index() < self.vertices.len() && edge.two.index() < self.vertices.len(),
            "edge endpoints must reference vertices already added"
        );

        let id = EdgeId(self.edges.len());
        let key = pair_key(edge.one, edge.two);
        if let Some(prior) = self.edge_by_pair.insert(key, id) {
            debug!(
                "add_edge {} overwrites pair index entry {} for ({}, {})",
                id.index(),
                prior.index(),
                edge.one,
                edge.two
            );
        }

        self.adjacency[edge.one.index()].push(id);
        if edge.one != edge.two {
            self.adjacency[edge.two.index()].push(id);
        }
        self.edges.push(edge);
        id
    }

    /// Register a type entry point. Re-registering a name silently replaces
    /// the prior association.
    pub fn add_type(&mut self, name: impl Into<String>, vertex: VertexId) {
        self.types_by_name.insert(name.into(), vertex);
    }

    /// Register a directive entry point. Re-registering a name silently
    /// replaces the prior association.
    pub fn add_directive(&mut self, name: impl Into<String>, vertex: VertexId) {
        self.directives_by_name.insert(name.into(), vertex);
    }

    // ============================================================
    // Read phase
    // ============================================================

    /// Vertex behind an arena id, `None` for a foreign id
    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// All vertices, insertion order
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges, insertion order
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edge behind an id
    #[inline]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// All edges incident to `from`, in per-vertex insertion order.
    ///
    /// Empty for an isolated or unknown vertex; never fails. Includes edges
    /// superseded in the pair index.
    pub fn edges_from(&self, from: VertexId) -> Vec<&Edge> {
        self.adjacency
            .get(from.index())
            .map(|edge_ids| {
                edge_ids
                    .iter()
                    .filter_map(|eid| self.edges.get(eid.index()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The edge indexed for the unordered pair, order-insensitive.
    ///
    /// `None` means no such edge was ever added; absence is a routine
    /// outcome, not an error.
    #[inline]
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<&Edge> {
        let id = self.edge_by_pair.get(&pair_key(a, b))?;
        self.edges.get(id.index())
    }

    /// Type entry point by name
    #[inline]
    pub fn get_type(&self, name: &str) -> Option<VertexId> {
        self.types_by_name.get(name).copied()
    }

    /// Directive entry point by name
    #[inline]
    pub fn get_directive(&self, name: &str) -> Option<VertexId> {
        self.directives_by_name.get(name).copied()
    }

    /// First adjacent vertex satisfying `predicate`, or `None`.
    ///
    /// Adjacency is enumerated in per-vertex edge-insertion order, which is
    /// deterministic for a fixed graph state. For a self-loop the adjacent
    /// vertex is `from` itself.
    pub fn find_adjacent<P>(&self, from: VertexId, predicate: P) -> Option<VertexId>
    where
        P: Fn(&Vertex) -> bool,
    {
        let edge_ids = self.adjacency.get(from.index())?;
        for eid in edge_ids {
            let edge = &self.edges[eid.index()];
            // edges in the adjacency list always touch `from`
            let candidate = match edge.other_end(from) {
                Some(v) => v,
                None => continue,
            };
            if predicate(&self.vertices[candidate.index()]) {
                return Some(candidate);
            }
        }
        None
    }

    /// Number of vertices (duplicates counted; no dedup is enforced)
    #[inline]
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges in the sequence
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Aggregate counts over the current graph state
    pub fn stats(&self) -> GraphStats {
        let mut vertices_by_kind = HashMap::new();
        for vertex in &self.vertices {
            *vertices_by_kind.entry(vertex.kind).or_insert(0) += 1;
        }

        let mut edges_by_label = HashMap::new();
        for edge in &self.edges {
            *edges_by_label.entry(edge.label.clone()).or_insert(0) += 1;
        }

        GraphStats {
            total_vertices: self.vertices.len(),
            total_edges: self.edges.len(),
            vertices_by_kind,
            edges_by_label,
        }
    }
}

/// Graph statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStats {
    pub total_vertices: usize,
    pub total_edges: usize,
    // std HashMap for serde compatibility
    pub vertices_by_kind: HashMap<VertexKind, usize>,
    pub edges_by_label: HashMap<String, usize>,
}

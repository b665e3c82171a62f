//! schemadiff-graph — labeled multigraph container for structural schema
//! comparison
//!
//! In-memory representation of a structured schema (types, fields,
//! directives and their relationships) queried by diffing algorithms such as
//! graph edit-distance computation. The crate provides storage and indexing
//! only:
//! - insertion-ordered vertex arena and edge sequence (stable indices)
//! - name → vertex entry-point maps for types and directives
//! - symmetric unordered-pair → edge index for O(1) adjacency lookups
//!
//! Building the graph from a schema source and comparing two graphs are
//! collaborators layered on top of this crate, not part of it.

mod edge;
mod graph;
mod vertex;

pub use edge::{Edge, EdgeId};
pub use graph::{GraphStats, SchemaGraph};
pub use vertex::{Vertex, VertexId, VertexKind};

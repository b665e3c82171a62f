//! Vertex model for the schema graph
//!
//! Identity is arena-based: a [`VertexId`] is the vertex's position in the
//! graph's insertion-ordered vertex sequence, and is the key used by every
//! index and adjacency result. Two vertices with equal attributes are still
//! distinct entities.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Arena index identifying a vertex within one graph instance.
///
/// Ids are only meaningful for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Position in the vertex sequence.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Schema element kind carried by a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexKind {
    Object,
    Interface,
    Union,
    Enum,
    EnumValue,
    Scalar,
    InputObject,
    Field,
    InputField,
    Argument,
    Directive,
    AppliedDirective,
    Schema,
}

impl VertexKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VertexKind::Object => "Object",
            VertexKind::Interface => "Interface",
            VertexKind::Union => "Union",
            VertexKind::Enum => "Enum",
            VertexKind::EnumValue => "EnumValue",
            VertexKind::Scalar => "Scalar",
            VertexKind::InputObject => "InputObject",
            VertexKind::InputField => "InputField",
            VertexKind::Field => "Field",
            VertexKind::Argument => "Argument",
            VertexKind::Directive => "Directive",
            VertexKind::AppliedDirective => "AppliedDirective",
            VertexKind::Schema => "Schema",
        }
    }

    /// Kinds that are named types in the schema's type system
    #[inline]
    pub fn is_named_type(&self) -> bool {
        matches!(
            self,
            VertexKind::Object
                | VertexKind::Interface
                | VertexKind::Union
                | VertexKind::Enum
                | VertexKind::Scalar
                | VertexKind::InputObject
        )
    }

    /// Kinds with member vertices (fields, input fields, enum values)
    #[inline]
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            VertexKind::Object | VertexKind::Interface | VertexKind::InputObject | VertexKind::Enum
        )
    }
}

/// A node in the structural schema graph
///
/// The container treats vertices as opaque identities plus an optional name;
/// `attrs` carries whatever payload comparison algorithms need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// Schema element kind
    pub kind: VertexKind,

    /// Simple name, if the element has one (used for entry-point indexing)
    pub name: Option<String>,

    /// Additional attributes (element-specific metadata)
    pub attrs: AHashMap<String, serde_json::Value>,
}

impl Vertex {
    pub fn new(kind: VertexKind) -> Self {
        Self {
            kind,
            name: None,
            attrs: AHashMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attrs.insert(key.into(), value);
        self
    }

    /// Name accessor that avoids the `Option` dance at call sites
    #[inline]
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_as_str_roundtrip_labels() {
        assert_eq!(VertexKind::Object.as_str(), "Object");
        assert_eq!(VertexKind::AppliedDirective.as_str(), "AppliedDirective");
    }

    #[test]
    fn test_named_type_predicate() {
        assert!(VertexKind::Object.is_named_type());
        assert!(VertexKind::Scalar.is_named_type());
        assert!(!VertexKind::Field.is_named_type());
        assert!(!VertexKind::Directive.is_named_type());
    }

    #[test]
    fn test_composite_predicate() {
        assert!(VertexKind::Object.is_composite());
        assert!(VertexKind::Enum.is_composite());
        // named types without member vertices are not composite
        assert!(!VertexKind::Scalar.is_composite());
        assert!(!VertexKind::Union.is_composite());
        assert!(!VertexKind::Field.is_composite());
    }

    #[test]
    fn test_vertex_builder() {
        let v = Vertex::new(VertexKind::Field)
            .with_name("id")
            .with_attr("deprecated", serde_json::Value::Bool(false));
        assert_eq!(v.name_or_empty(), "id");
        assert_eq!(v.attrs.len(), 1);
    }
}

//! Raw node map types consumed by the resolver.
//!
//! A [`NodeMap`] maps a node name to its [`RawNode`] record. Relations inside
//! a record are [`Reference`]s: usually plain names that are looked up in the
//! map again, or nodes that the caller has already resolved.
//!
//! Maps can be decoded from JSON or TOML:
//!
//! ```
//! # use lineage::input::NodeMap;
//! let map = NodeMap::from_json_str(r#"{"Class": {"parent": "Base", "mixes": ["Mixin"]}}"#).unwrap();
//! assert_eq!(map.get("Class").unwrap().mixins().len(), 1);
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use lineage_core::node::Node;

use crate::error::DiagramError;

/// A relation target inside a raw node record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    /// Name to look up in the node map.
    Name(String),
    /// A node that is already resolved and is used as-is.
    #[serde(skip_deserializing)]
    Resolved(Node),
}

impl Reference {
    /// Returns the referenced name.
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Resolved(node) => node.name(),
        }
    }
}

impl From<&str> for Reference {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Reference {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Node> for Reference {
    fn from(node: Node) -> Self {
        Self::Resolved(node)
    }
}

/// Raw data of one node as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawNode {
    parent: Option<Reference>,
    children: Vec<Reference>,
    #[serde(alias = "mixes")]
    mixins: Vec<Reference>,
    link: Option<String>,
    #[serde(skip)]
    resolved: Option<Node>,
}

impl RawNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a node that is already resolved; wherever its name is referenced
    /// the node is used unchanged.
    pub fn from_resolved(node: Node) -> Self {
        Self {
            link: node.link().map(str::to_string),
            resolved: Some(node),
            ..Self::default()
        }
    }

    pub fn with_parent(mut self, parent: impl Into<Reference>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_children<I, R>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Reference>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_mixins<I, R>(mut self, mixins: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Reference>,
    {
        self.mixins = mixins.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn parent(&self) -> Option<&Reference> {
        self.parent.as_ref()
    }

    pub fn children(&self) -> &[Reference] {
        &self.children
    }

    pub fn mixins(&self) -> &[Reference] {
        &self.mixins
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Returns the pre-resolved node this record wraps, if any.
    pub fn resolved(&self) -> Option<&Node> {
        self.resolved.as_ref()
    }
}

/// Insertion-ordered map from node name to its raw data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct NodeMap {
    nodes: IndexMap<String, RawNode>,
}

impl NodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry for `name` (builder style).
    pub fn with(mut self, name: impl Into<String>, node: RawNode) -> Self {
        self.insert(name, node);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, node: RawNode) {
        self.nodes.insert(name.into(), node);
    }

    pub fn get(&self, name: &str) -> Option<&RawNode> {
        self.nodes.get(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Decodes a node map from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::Input`] if the text is not a JSON object of node records.
    pub fn from_json_str(source: &str) -> Result<Self, DiagramError> {
        serde_json::from_str(source).map_err(|err| DiagramError::Input(err.to_string()))
    }

    /// Decodes a node map from a TOML document with one table per node.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::Input`] if the text is not a TOML document of node tables.
    pub fn from_toml_str(source: &str) -> Result<Self, DiagramError> {
        toml::from_str(source).map_err(|err| DiagramError::Input(err.to_string()))
    }
}

impl<K: Into<String>> FromIterator<(K, RawNode)> for NodeMap {
    fn from_iter<T: IntoIterator<Item = (K, RawNode)>>(iter: T) -> Self {
        Self {
            nodes: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

//! Resolved diagram graph and the resolver that builds it.
//!
//! The [`Graph`] owns every [`Node`] of one diagram build in a petgraph arena.
//! Edges are the connectors that will be drawn, kept in the order they were
//! discovered. Ordered relation lists (ancestor chain, children, mixins) are
//! stored next to the arena so that input order survives for layout.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

use lineage_core::node::{Node, RelationKind};

use crate::{
    error::DiagramError,
    input::{NodeMap, RawNode, Reference},
};

/// Kind of connector drawn between two nodes.
///
/// The connector always points from the source to the target of its edge:
/// from a node to its parent, from a child to its parent, and from an owner
/// to one of its mixins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    Parent,
    Child,
    Mixin,
}

impl Connection {
    /// Returns the CSS class of the connector path.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Mixin => "mixin",
        }
    }
}

/// Pipeline stage a graph has reached.
///
/// Each stage consumes the coordinates produced by the previous one, so the
/// stages must run exactly once and in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Built by the resolver; positions are not set yet.
    Resolved,
    /// Positions are grid coordinates.
    Positioned,
    /// Positions are pixel coordinates.
    Rendered,
}

/// One entry of the descendant work-list.
enum Step<'m> {
    /// Create the node for a reference and attach it below its parent.
    Visit(NodeIndex, &'m Reference),
    /// The subtree of a name is complete.
    Leave(&'m str),
}

#[derive(Debug, Default, Clone)]
struct Relations {
    descendants: Vec<NodeIndex>,
    mixins: Vec<NodeIndex>,
}

/// The resolved graph of one diagram build.
#[derive(Debug)]
pub struct Graph {
    graph: DiGraph<Node, Connection>,
    relations: Vec<Relations>,
    focus: NodeIndex,
    ancestors: Vec<NodeIndex>,
    stage: Stage,
}

impl Graph {
    fn new(focus: Node) -> Self {
        let mut graph = DiGraph::new();
        let focus = graph.add_node(focus);
        Self {
            graph,
            relations: vec![Relations::default()],
            focus,
            ancestors: Vec::new(),
            stage: Stage::Resolved,
        }
    }

    fn add_node(&mut self, node: Node) -> NodeIndex {
        let idx = self.graph.add_node(node);
        self.relations.push(Relations::default());
        idx
    }

    fn connect(&mut self, source: NodeIndex, target: NodeIndex, connection: Connection) {
        self.graph.add_edge(source, target, connection);
    }

    /// Returns the index of the node of interest.
    pub fn focus(&self) -> NodeIndex {
        self.focus
    }

    /// Returns the ancestor chain of the focus, nearest ancestor first.
    pub fn ancestors(&self) -> &[NodeIndex] {
        &self.ancestors
    }

    /// Returns the direct children of a node in input order.
    pub fn descendants(&self, idx: NodeIndex) -> &[NodeIndex] {
        self.relations
            .get(idx.index())
            .map_or(&[], |relations| &relations.descendants)
    }

    /// Returns the mixins of a node in input order.
    pub fn mixins(&self, idx: NodeIndex) -> &[NodeIndex] {
        self.relations
            .get(idx.index())
            .map_or(&[], |relations| &relations.mixins)
    }

    /// Returns the node stored at `idx`, or `None` if the index does not belong to this graph.
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        self.graph.node_weight(idx)
    }

    /// Returns the node stored at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if the index was not produced by this graph.
    pub fn node(&self, idx: NodeIndex) -> &Node {
        self.graph.node_weight(idx).expect("Node index should exist")
    }

    pub(crate) fn node_mut(&mut self, idx: NodeIndex) -> &mut Node {
        self.graph
            .node_weight_mut(idx)
            .expect("Node index should exist")
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Iterates over every node index of the graph.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    /// Iterates over connectors in the order they were discovered.
    pub fn connections(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, Connection)> + '_ {
        self.graph.edge_indices().filter_map(|edge: EdgeIndex| {
            let (source, target) = self.graph.edge_endpoints(edge)?;
            let connection = *self.graph.edge_weight(edge)?;
            Some((source, target, connection))
        })
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Fails with [`DiagramError::InvalidArgument`] unless the graph is at `expected`.
    pub(crate) fn expect_stage(&self, expected: Stage) -> Result<(), DiagramError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(DiagramError::InvalidArgument(format!(
                "graph is expected to be {expected:?}, but it is {:?}",
                self.stage
            )))
        }
    }

    pub(crate) fn advance(&mut self, stage: Stage) {
        self.stage = stage;
    }
}

/// Converts a raw node map into a resolved [`Graph`] for one node of interest.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    external_links: &'a HashMap<String, String>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver that fills links of undocumented names from `external_links`.
    pub fn new(external_links: &'a HashMap<String, String>) -> Self {
        Self { external_links }
    }

    /// Resolve the node of interest, its ancestor chain, its child subtree and
    /// the mixins of the focus and of every ancestor.
    ///
    /// # Errors
    ///
    /// - [`DiagramError::InvalidArgument`] if `focus` is empty.
    /// - [`DiagramError::NotFound`] if `focus` has no entry in `map`.
    /// - [`DiagramError::Cycle`] if a parent chain or child subtree loops back onto itself.
    pub fn resolve(&self, focus: &str, map: &NodeMap) -> Result<Graph, DiagramError> {
        if focus.is_empty() {
            return Err(DiagramError::InvalidArgument(
                "\"focus\" argument is expected to be a non-empty name".to_string(),
            ));
        }
        let focus_data = map
            .get(focus)
            .ok_or_else(|| DiagramError::NotFound(focus.to_string()))?;

        let focus_node = match focus_data.resolved() {
            Some(node) => node.clone().with_kind(RelationKind::Focus),
            None => Node::new(focus, RelationKind::Focus)
                .with_link(focus_data.link().map(str::to_string)),
        };
        let mut graph = Graph::new(focus_node);
        let focus_idx = graph.focus();

        let owners = self.resolve_ancestors(&mut graph, focus, focus_data, map)?;
        self.resolve_descendants(&mut graph, focus, focus_data, map)?;
        for (owner, data) in owners {
            self.resolve_mixins(&mut graph, owner, data, map);
        }

        debug!(
            focus,
            ancestors = graph.ancestors().len(),
            children = graph.descendants(focus_idx).len(),
            mixins = graph.mixins(focus_idx).len(),
            nodes = graph.node_count();
            "Graph resolved",
        );

        Ok(graph)
    }

    /// Follows `parent` references from the focus until the chain ends.
    ///
    /// Returns every node whose raw data is known, focus first, so their mixins can be resolved.
    fn resolve_ancestors<'m>(
        &self,
        graph: &mut Graph,
        focus: &'m str,
        focus_data: &'m RawNode,
        map: &'m NodeMap,
    ) -> Result<Vec<(NodeIndex, &'m RawNode)>, DiagramError> {
        let mut owners = vec![(graph.focus(), focus_data)];
        let mut visiting: HashSet<&str> = HashSet::from([focus]);
        let mut previous = graph.focus();
        let mut next = focus_data.parent();

        while let Some(reference) = next {
            let (node, data) = self.create_node(reference, map, RelationKind::Ancestor);
            if data.is_some() && !visiting.insert(reference.name()) {
                return Err(DiagramError::Cycle {
                    name: reference.name().to_string(),
                });
            }

            let idx = graph.add_node(node);
            graph.ancestors.push(idx);
            graph.connect(previous, idx, Connection::Parent);
            previous = idx;

            next = data.and_then(RawNode::parent);
            if let Some(data) = data {
                owners.push((idx, data));
            }
        }

        Ok(owners)
    }

    /// Expands the child subtree of the focus depth-first with an explicit
    /// work-list, so connectors follow a pre-order walk and siblings keep
    /// input order.
    ///
    /// `on_path` holds the names between the focus and the node being
    /// expanded; a name is removed again once its subtree is done.
    fn resolve_descendants<'m>(
        &self,
        graph: &mut Graph,
        focus: &'m str,
        focus_data: &'m RawNode,
        map: &'m NodeMap,
    ) -> Result<(), DiagramError> {
        let mut on_path: HashSet<&str> = HashSet::from([focus]);
        let mut pending: Vec<Step<'m>> = focus_data
            .children()
            .iter()
            .rev()
            .map(|reference| Step::Visit(graph.focus(), reference))
            .collect();

        while let Some(step) = pending.pop() {
            let (parent, reference) = match step {
                Step::Visit(parent, reference) => (parent, reference),
                Step::Leave(name) => {
                    on_path.remove(name);
                    continue;
                }
            };

            let (node, child_data) = self.create_node(reference, map, RelationKind::Descendant);
            if child_data.is_some() && on_path.contains(reference.name()) {
                return Err(DiagramError::Cycle {
                    name: reference.name().to_string(),
                });
            }

            let idx = graph.add_node(node);
            graph.relations[parent.index()].descendants.push(idx);
            graph.connect(idx, parent, Connection::Child);

            if let Some(child_data) = child_data.filter(|d| !d.children().is_empty()) {
                on_path.insert(reference.name());
                pending.push(Step::Leave(reference.name()));
                pending.extend(
                    child_data
                        .children()
                        .iter()
                        .rev()
                        .map(|grandchild| Step::Visit(idx, grandchild)),
                );
            }
        }

        Ok(())
    }

    /// Resolves the mixins of one owner; mixins are leaves.
    fn resolve_mixins(&self, graph: &mut Graph, owner: NodeIndex, data: &RawNode, map: &NodeMap) {
        for reference in data.mixins() {
            let (node, _) = self.create_node(reference, map, RelationKind::Mixin);
            let idx = graph.add_node(node);
            graph.relations[owner.index()].mixins.push(idx);
            graph.connect(owner, idx, Connection::Mixin);
        }
    }

    /// Creates the node for one reference.
    ///
    /// The raw data is returned only when the node should be expanded further,
    /// i.e. it was looked up by name and is not a pre-resolved entry.
    fn create_node<'m>(
        &self,
        reference: &'m Reference,
        map: &'m NodeMap,
        kind: RelationKind,
    ) -> (Node, Option<&'m RawNode>) {
        let name = match reference {
            Reference::Resolved(node) => return (node.clone(), None),
            Reference::Name(name) => name,
        };

        match map.get(name) {
            Some(data) => match data.resolved() {
                Some(node) => (node.clone(), None),
                None => (
                    Node::new(name.as_str(), kind).with_link(data.link().map(str::to_string)),
                    Some(data),
                ),
            },
            None => {
                let link = self.external_links.get(name).cloned();
                trace!(
                    name = name.as_str(),
                    kind = kind.css_class(),
                    external = link.is_some();
                    "Unresolved reference"
                );
                (Node::no_ref(name.as_str(), kind).with_link(link), None)
            }
        }
    }
}

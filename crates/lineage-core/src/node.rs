//! The node model: one named box in an inheritance diagram.
//!
//! A [`Node`] only carries what is needed to draw it: its name, how it relates
//! to the node of interest, whether documentation exists for it, an optional
//! link target and its current position. How nodes are connected is owned by
//! the graph that holds them.

use std::fmt;

use crate::geometry::Point;

/// How a node relates to the node of interest of a diagram.
///
/// The kind decides the CSS class of the rendered node and which connector
/// style joins it to its neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// The node of interest the diagram is built for.
    Focus,
    /// A parent, grandparent, ... of the node of interest.
    Ancestor,
    /// A child of the node of interest or of another descendant.
    Descendant,
    /// A node mixed into the node of interest or into an ancestor.
    Mixin,
}

impl RelationKind {
    /// Returns the CSS class name used for nodes of this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineage_core::node::RelationKind;
    /// assert_eq!(RelationKind::Focus.css_class(), "noi");
    /// assert_eq!(RelationKind::Ancestor.css_class(), "parent");
    /// ```
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Focus => "noi",
            Self::Ancestor => "parent",
            Self::Descendant => "child",
            Self::Mixin => "mixin",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// A single graph entity of an inheritance diagram.
///
/// `position` starts at the origin, is set in grid units by the layout stage
/// and is finally rescaled into pixels by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    kind: RelationKind,
    has_data: bool,
    link: Option<String>,
    position: Point,
}

impl Node {
    /// Creates a node that has an entry in the node map.
    pub fn new(name: impl Into<String>, kind: RelationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            has_data: true,
            link: None,
            position: Point::default(),
        }
    }

    /// Creates a node for a name that is referenced but has no entry in the node map.
    pub fn no_ref(name: impl Into<String>, kind: RelationKind) -> Self {
        Self {
            has_data: false,
            ..Self::new(name, kind)
        }
    }

    /// Sets the link target (builder style).
    pub fn with_link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }

    /// Sets the relation kind (builder style).
    pub fn with_kind(mut self, kind: RelationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    /// Returns `false` for names that were referenced without an entry in the node map.
    pub fn has_data(&self) -> bool {
        self.has_data
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Returns `true` when the node offers no link to follow.
    ///
    /// Such nodes are drawn with the `no-ref` style. The focus never is.
    pub fn is_no_ref(&self) -> bool {
        self.kind != RelationKind::Focus && self.link.is_none()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

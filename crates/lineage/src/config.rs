//! Configuration types for Lineage diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are resolved, laid out and styled. All types implement
//! [`serde::Deserialize`] for loading from external sources. Every section is
//! `#[serde(default)]`, so a partial document only overrides the keys it
//! names and leaves the rest at their defaults. Unknown keys are ignored.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`NodeConfig`] - Size, spacing and label offset of rendered nodes.
//! - [`LineConfig`] - Connector stroke and arrowhead settings.
//! - [`LayoutConfig`] - Grid layout tuning.
//! - [`StyleConfig`] - Extra CSS appended to the default stylesheet.
//!
//! # Example
//!
//! ```
//! # use lineage::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.node().dimensions().width(), 100.0);
//! assert!(config.line().color().is_ok());
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use lineage_core::{color::Color, geometry::Size};

/// Top-level configuration for a diagram build.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    node: NodeConfig,
    line: LineConfig,
    layout: LayoutConfig,
    style: StyleConfig,
    /// Link targets for names that are not part of the node map, e.g. 3rd-party classes.
    external_links: HashMap<String, String>,
}

impl AppConfig {
    /// Returns the node configuration.
    pub fn node(&self) -> &NodeConfig {
        &self.node
    }

    /// Returns the connector line configuration.
    pub fn line(&self) -> &LineConfig {
        &self.line
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the external link table keyed by node name.
    pub fn external_links(&self) -> &HashMap<String, String> {
        &self.external_links
    }

    /// Adds an external link target (builder style).
    pub fn with_external_link(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.external_links.insert(name.into(), url.into());
        self
    }

    /// Replaces the node configuration (builder style).
    pub fn with_node(mut self, node: NodeConfig) -> Self {
        self.node = node;
        self
    }

    /// Replaces the style configuration (builder style).
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }
}

/// Width and height of a rendered node, in pixels.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    width: f32,
    height: f32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 30.0,
        }
    }
}

impl Dimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn to_size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Empty space kept on each side of a node, in pixels.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Spacing {
    horizontal: f32,
    vertical: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            horizontal: 10.0,
            vertical: 20.0,
        }
    }
}

impl Spacing {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    pub fn vertical(&self) -> f32 {
        self.vertical
    }

    pub fn to_size(self) -> Size {
        Size::new(self.horizontal, self.vertical)
    }
}

/// Offset of the node label from the top-left corner of its box.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct TextOffset {
    dx: f32,
    dy: f32,
}

impl Default for TextOffset {
    fn default() -> Self {
        Self { dx: 10.0, dy: 20.0 }
    }
}

impl TextOffset {
    pub fn dx(&self) -> f32 {
        self.dx
    }

    pub fn dy(&self) -> f32 {
        self.dy
    }
}

/// Rendering properties of a node box.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    dimensions: Dimensions,
    spacing: Spacing,
    text: TextOffset,
}

impl NodeConfig {
    pub fn new(dimensions: Dimensions, spacing: Spacing) -> Self {
        Self {
            dimensions,
            spacing,
            text: TextOffset::default(),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    pub fn text(&self) -> TextOffset {
        self.text
    }
}

/// Size of the arrowhead drawn at the end of every connector.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct EndMarker {
    width: f32,
    height: f32,
}

impl Default for EndMarker {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 5.0,
        }
    }
}

impl EndMarker {
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Connector line properties.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineConfig {
    width: f32,
    /// Stroke color as a CSS color string.
    color: String,
    end_marker: EndMarker,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            width: 2.0,
            color: "black".to_string(),
            end_marker: EndMarker::default(),
        }
    }
}

impl LineConfig {
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn end_marker(&self) -> EndMarker {
        self.end_marker
    }

    /// Returns the parsed stroke [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid CSS color.
    pub fn color(&self) -> Result<Color, String> {
        Color::new(&self.color).map_err(|err| format!("Invalid line color in config: {err}"))
    }
}

/// Grid layout tuning.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Column, in grid units, that holds every mixin. Negative values place
    /// mixins left of the focus column; the fractional part adds a gap.
    mixin_offset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { mixin_offset: -1.3 }
    }
}

impl LayoutConfig {
    pub fn new(mixin_offset: f32) -> Self {
        Self { mixin_offset }
    }

    pub fn mixin_offset(&self) -> f32 {
        self.mixin_offset
    }
}

/// Visual styling added on top of the default stylesheet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    css: String,
}

impl StyleConfig {
    pub fn new(css: impl Into<String>) -> Self {
        Self { css: css.into() }
    }

    /// Returns the additional CSS text.
    pub fn css(&self) -> &str {
        &self.css
    }
}

//! Lineage - inheritance diagrams rendered as SVG.
//!
//! A diagram is built for one node of interest (the *focus*). Starting from a
//! flat map of node names to their relations, Lineage draws the focus, its
//! chain of ancestors, its tree of children and the mixins of the focus and
//! of every ancestor.
//!
//! Processing runs in strictly ordered stages, each consuming the whole
//! output of the previous one:
//!
//! 1. [`graph::Resolver`] turns the [`input::NodeMap`] into a [`graph::Graph`].
//! 2. A [`layout::LayoutEngine`] assigns grid cells and returns a [`layout::Grid`].
//! 3. [`render::Renderer`] converts cells to pixels and draws a [`render::Surface`].
//! 4. An [`export::Exporter`] inlines the stylesheet and serializes the result.
//!
//! [`DiagramBuilder`] drives all of them with one [`config::AppConfig`].

pub mod config;
pub mod export;
pub mod graph;
pub mod input;
pub mod layout;
pub mod render;

mod error;

pub use lineage_core::{color, geometry, node};

pub use error::DiagramError;

use std::path::Path;

use log::{debug, info};

use config::AppConfig;
use export::{Exporter, svg::SvgExporter};
use graph::{Graph, Resolver};
use input::NodeMap;
use layout::{GridEngine, LayoutEngine};
use render::{Renderer, Surface};

/// Builder for resolving and rendering inheritance diagrams.
///
/// A builder holds configuration only, so one instance can produce any
/// number of diagrams.
///
/// # Examples
///
/// ```rust
/// use lineage::{DiagramBuilder, input::{NodeMap, RawNode}};
///
/// let map = NodeMap::new()
///     .with("Button", RawNode::new().with_parent("Widget").with_mixins(["Clickable"]))
///     .with("Widget", RawNode::new().with_link("#Widget"));
///
/// let svg = DiagramBuilder::default()
///     .render_svg("Button", &map)
///     .expect("Failed to render");
///
/// assert!(svg.starts_with("<?xml"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolve `focus` and its relations from `map`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::InvalidArgument`] for an empty focus name,
    /// [`DiagramError::NotFound`] if the focus has no entry in `map`, and
    /// [`DiagramError::Cycle`] for cyclic parent or child references.
    pub fn resolve(&self, focus: &str, map: &NodeMap) -> Result<Graph, DiagramError> {
        info!(focus, nodes = map.len(); "Resolving node graph");
        let graph = Resolver::new(self.config.external_links()).resolve(focus, map)?;
        debug!(nodes = graph.node_count(); "Graph resolved");
        Ok(graph)
    }

    /// Resolve, lay out and render `focus` without serializing it.
    ///
    /// # Errors
    ///
    /// Returns any error of [`Self::resolve`], and
    /// [`DiagramError::Config`] if the configuration holds an invalid value.
    pub fn render(&self, focus: &str, map: &NodeMap) -> Result<Surface, DiagramError> {
        let renderer = Renderer::new(&self.config)?;
        let mut graph = self.resolve(focus, map)?;

        info!("Calculating layout");
        let grid = GridEngine::new(self.config.layout()).calculate(&mut graph)?;
        debug!(rows = grid.len(); "Layout calculated");

        info!("Rendering diagram");
        renderer.render(&grid, &mut graph)
    }

    /// Build the diagram for `focus` and return it as an SVG document.
    ///
    /// # Errors
    ///
    /// Returns any error of [`Self::render`], and [`DiagramError::Export`]
    /// if the document cannot be serialized.
    pub fn render_svg(&self, focus: &str, map: &NodeMap) -> Result<String, DiagramError> {
        let surface = self.render(focus, map)?;
        let svg = SvgExporter::new(self.config.style()).export(surface)?;

        info!(focus; "SVG rendered successfully");
        Ok(svg)
    }

    /// Build the diagram for `focus` and write it to `path`.
    ///
    /// # Errors
    ///
    /// Returns any error of [`Self::render_svg`], and
    /// [`DiagramError::Export`] if the file cannot be written.
    pub fn write_svg(
        &self,
        focus: &str,
        map: &NodeMap,
        path: impl AsRef<Path>,
    ) -> Result<(), DiagramError> {
        let surface = self.render(focus, map)?;
        SvgExporter::new(self.config.style()).write_to(surface, path)?;

        info!(focus; "SVG written successfully");
        Ok(())
    }
}

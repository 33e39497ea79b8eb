//! Rendering of a positioned graph into SVG elements.
//!
//! The [`Renderer`] is the last coordinate transform of the pipeline: it
//! turns grid cells into pixels, draws one group per node and one path per
//! connector, and hands the result over as a [`Surface`]. The surface is not
//! a finished file yet; stylesheet and XML prolog are added by an
//! [`Exporter`](crate::export::Exporter).

use log::{debug, trace};
use petgraph::graph::NodeIndex;
use svg::{
    Document,
    node::element::{Anchor, Definitions, Group, Marker, Path, Rectangle, Text},
};

use lineage_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
    node::{Node, RelationKind},
};

use crate::{
    config::{AppConfig, EndMarker, NodeConfig},
    error::DiagramError,
    graph::{Connection, Graph, Stage},
    layout::Grid,
};

const ARROW_MARKER_ID: &str = "Arrow";
const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Rounds a pixel value to a thousandth of a pixel so `f32` noise such as
/// `-218.99998` is written as `-219`.
fn snap(value: f32) -> f32 {
    // Scaled in f64 so large coordinates keep their precision; adding zero
    // turns `-0` into `0`.
    ((f64::from(value) * 1000.0).round() / 1000.0) as f32 + 0.0
}

/// A rendered diagram body, ready to be serialized by an exporter.
#[derive(Debug)]
pub struct Surface {
    defs: Definitions,
    diagram: Group,
    size: Size,
}

impl Surface {
    /// Size of the drawable area, used for the viewBox and the root
    /// width and height.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Adds an element to the `<defs>` block.
    pub fn with_definition<T>(mut self, node: T) -> Self
    where
        T: Into<Box<dyn svg::Node>>,
    {
        self.defs = self.defs.add(node);
        self
    }

    /// Assembles the root `<svg>` element.
    pub fn into_document(self) -> Document {
        let Self {
            defs,
            diagram,
            size,
        } = self;

        Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", size.width(), size.height()),
            )
            .set("width", size.width())
            .set("height", size.height())
            .set("xmlns:xlink", XLINK_NAMESPACE)
            .set("version", "1.1")
            .add(defs)
            .add(diagram)
    }
}

/// Draws positioned nodes and their connectors.
#[derive(Debug, Clone)]
pub struct Renderer {
    node: NodeConfig,
    line_width: f32,
    line_color: Color,
    end_marker: EndMarker,
}

impl Renderer {
    /// Creates a renderer from the node and line sections of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::Config`] if the configured line color is not
    /// a valid CSS color.
    pub fn new(config: &AppConfig) -> Result<Self, DiagramError> {
        let line = config.line();
        Ok(Self {
            node: config.node().clone(),
            line_width: line.width(),
            line_color: line.color().map_err(DiagramError::Config)?,
            end_marker: line.end_marker(),
        })
    }

    /// Pixel size of one grid cell: a node plus its margin on both sides.
    fn scale(&self) -> Size {
        self.node
            .dimensions()
            .to_size()
            .add_margin(self.node.spacing().to_size())
    }

    /// Renders every node of `grid` and every connector of `graph`.
    ///
    /// Node positions are rewritten in place from grid cells to pixels.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::InvalidArgument`] if the graph has not been
    /// laid out, was already rendered, or if `grid` is empty or refers to a
    /// node the graph does not contain.
    pub fn render(&self, grid: &Grid, graph: &mut Graph) -> Result<Surface, DiagramError> {
        graph.expect_stage(Stage::Positioned)?;
        let cells = Self::checked_cells(grid, graph)?;

        let scale = self.scale();
        let margin = self.node.spacing().to_size();
        let indices: Vec<NodeIndex> = graph.node_indices().collect();
        for idx in indices {
            let node = graph.node_mut(idx);
            let pixel = node.position().rescale(scale, margin);
            node.set_position(Point::new(snap(pixel.x()), snap(pixel.y())));
        }

        let mut bounds: Option<Bounds> = None;
        let mut diagram = Group::new();
        for &idx in &cells {
            let node = graph.node(idx);
            let position = node.position();
            bounds = Some(bounds.map_or_else(
                || Bounds::from_point(position),
                |bounds| bounds.include(position),
            ));
            diagram = diagram.add(self.render_node(node));
        }
        // Non-empty cells were checked above.
        let bounds = bounds.unwrap_or_default();

        let mut connectors = 0;
        for (source, target, connection) in graph.connections() {
            let path = self.render_connection(
                graph.node(source).position(),
                graph.node(target).position(),
                connection,
            );
            diagram = diagram.add(path);
            connectors += 1;
        }

        let diagram = diagram.set(
            "transform",
            format!(
                "translate({}, {})",
                snap(margin.width() - bounds.min_x()),
                snap(margin.height() - bounds.min_y())
            ),
        );
        let size = Size::new(
            snap(bounds.width() + scale.width()),
            snap(bounds.height() + scale.height()),
        );

        debug!(
            nodes = cells.len(),
            connectors,
            width = size.width(),
            height = size.height();
            "Diagram rendered"
        );
        graph.advance(Stage::Rendered);

        Ok(Surface {
            defs: Definitions::new().add(self.arrow_marker()),
            diagram,
            size,
        })
    }

    fn checked_cells(grid: &Grid, graph: &Graph) -> Result<Vec<NodeIndex>, DiagramError> {
        let cells: Vec<NodeIndex> = grid.occupied().collect();
        if cells.is_empty() {
            return Err(DiagramError::InvalidArgument(
                "\"grid\" argument should contain at least one node".to_string(),
            ));
        }
        if let Some(idx) = cells.iter().find(|&&idx| graph.get(idx).is_none()) {
            return Err(DiagramError::InvalidArgument(format!(
                "\"grid\" argument refers to node {} which is not part of the graph",
                idx.index()
            )));
        }
        Ok(cells)
    }

    /// Draws one node box. The focus is never wrapped in a link, even when
    /// its data has one, and is never marked `no-ref`.
    fn render_node(&self, node: &Node) -> Group {
        let dimensions = self.node.dimensions();
        let text = self.node.text();
        let position = node.position();

        let mut class = node.kind().css_class().to_string();
        if node.is_no_ref() {
            class.push_str(" no-ref");
        }
        trace!(name = node.name(), class = class.as_str(); "Rendering node");

        let rect = Rectangle::new()
            .set("width", dimensions.width())
            .set("height", dimensions.height());
        let label = Text::new(node.name())
            .set("dx", text.dx())
            .set("dy", text.dy());

        let group = Group::new().set("class", class).set(
            "transform",
            format!("translate({}, {})", position.x(), position.y()),
        );

        let link = node.link().filter(|_| node.kind() != RelationKind::Focus);
        match link {
            Some(link) => group.add(
                Anchor::new()
                    .set("xlink:href", link)
                    .add(rect)
                    .add(label),
            ),
            None => group.add(rect).add(label),
        }
    }

    fn render_connection(&self, from: Point, to: Point, connection: Connection) -> Path {
        let (transform, data) = match connection {
            Connection::Parent | Connection::Child => (
                self.vertical_offset(from),
                self.vertical_path(from, to),
            ),
            Connection::Mixin => (
                self.horizontal_offset(from),
                self.horizontal_path(from, to),
            ),
        };

        Path::new()
            .set("transform", transform)
            .set("d", data)
            .set("marker-end", format!("url(#{ARROW_MARKER_ID})"))
            .set("stroke-width", self.line_width)
            .set("stroke", &self.line_color)
            .set("fill", "none")
            .set("class", connection.css_class())
    }

    /// Top centre of the source node.
    fn vertical_offset(&self, from: Point) -> String {
        let width = self.node.dimensions().width();
        format!("translate({}, {})", snap(from.x() + width / 2.0), from.y())
    }

    /// Left middle of the source node.
    fn horizontal_offset(&self, from: Point) -> String {
        let height = self.node.dimensions().height();
        format!("translate({}, {})", from.x(), snap(from.y() + height / 2.0))
    }

    fn vertical_path(&self, from: Point, to: Point) -> String {
        let height = self.node.dimensions().height();
        let distance =
            snap(to.y() - from.y() + height + self.end_marker.height() * self.line_width);

        if from.x() == to.x() {
            format!("M 0 0 v {distance}")
        } else {
            format!(
                "M 0 0 v -{} h {} V {distance}",
                self.node.spacing().vertical(),
                snap(to.x() - from.x())
            )
        }
    }

    fn horizontal_path(&self, from: Point, to: Point) -> String {
        let width = self.node.dimensions().width();
        let end =
            snap(to.x() - from.x() + width + self.end_marker.width() * self.line_width);

        if from.y() == to.y() {
            format!("M 0 0 h {end}")
        } else {
            format!(
                "M 0 0 h {} v {} H {end}",
                snap(end + self.node.spacing().horizontal()),
                snap(to.y() - from.y())
            )
        }
    }

    fn arrow_marker(&self) -> Marker {
        let half_width = self.end_marker.width() / 2.0;
        let height = self.end_marker.height();

        Marker::new()
            .set("id", ARROW_MARKER_ID)
            .set("refY", half_width)
            .set("orient", "auto")
            .set("style", "overflow: visible")
            .add(Path::new().set(
                "d",
                format!("M 0 0 L {height} {half_width} L 0 {height} z"),
            ))
    }
}

//! Layout of a resolved graph onto a 2D grid.
//!
//! A layout engine assigns grid coordinates to every node of a [`Graph`] and
//! returns the [`Grid`] that the renderer walks. Grid units are node cells:
//! one unit on either axis is one node plus its spacing.

mod grid;
mod grid_engine;

pub use grid::Grid;
pub use grid_engine::GridEngine;

use crate::{error::DiagramError, graph::Graph};

/// Trait defining the interface for diagram layout engines
pub trait LayoutEngine {
    /// Calculate the grid position of every node in `graph`.
    ///
    /// Positions are written into the nodes of the graph, and the graph moves
    /// to the positioned stage.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::InvalidArgument`] if the graph is not freshly resolved.
    fn calculate(&self, graph: &mut Graph) -> Result<Grid, DiagramError>;
}

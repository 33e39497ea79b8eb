//! Grid layout engine.
//!
//! Nodes are placed on integer grid cells in five ordered phases:
//!
//! 1. The focus node goes to the first row, column 0.
//! 2. Descendants are placed breadth-first, one row per depth level. Siblings
//!    take consecutive columns in input order; a cell without children leaves
//!    an empty slot below it so columns stay aligned.
//! 3. Bottom-up, every node with children is centred over its first and last
//!    child. The growth this causes is carried to the right through a
//!    per-column offset table, so leaves further right move out of the way.
//! 4. Ancestors are stacked above the focus in its (centred) column. An
//!    ancestor with several mixins is lifted so its mixin stack fits.
//! 5. Mixins of the focus and of every ancestor share one column left of the
//!    tree and are stacked downward from their owner's row.

use std::iter;

use log::{debug, trace};
use petgraph::graph::NodeIndex;

use lineage_core::geometry::Point;

use super::{Grid, LayoutEngine};
use crate::{
    config::LayoutConfig,
    error::DiagramError,
    graph::{Graph, Stage},
};

/// Lays nodes out on a grid of whole cells; only the mixin column is fractional.
#[derive(Debug, Clone, Copy)]
pub struct GridEngine {
    mixin_offset: f32,
}

impl GridEngine {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            mixin_offset: config.mixin_offset(),
        }
    }

    fn place_focus(graph: &mut Graph, grid: &mut Grid) {
        let focus = graph.focus();
        let y = grid.len() as f32;
        graph.node_mut(focus).set_position(Point::new(0.0, y));
        grid.push_row(vec![Some(focus)]);
    }

    fn place_descendants(graph: &mut Graph, grid: &mut Grid) {
        while let Some(row) = grid.last_row() {
            let y = grid.len() as f32;
            let mut next_row = Vec::with_capacity(row.len());
            let mut any_children = false;

            for cell in row {
                let children = cell.map_or(&[][..], |idx| graph.descendants(idx)).to_vec();
                if children.is_empty() {
                    next_row.push(None);
                    continue;
                }

                any_children = true;
                for child in children {
                    let x = next_row.len() as f32;
                    graph.node_mut(child).set_position(Point::new(x, y));
                    next_row.push(Some(child));
                }
            }

            if !any_children {
                break;
            }
            grid.push_row(next_row);
        }
    }

    fn center(graph: &mut Graph, grid: &Grid) {
        let Some(last) = grid.last_row() else {
            return;
        };
        // Rows never get longer going up, so one extra slot covers `m + 1`.
        let mut offsets = vec![0.0_f32; last.len() + 1];

        // The deepest row is taken as is.
        for row in grid.rows().iter().rev().skip(1) {
            for (m, cell) in row.iter().enumerate() {
                if offsets[m] > offsets[m + 1] {
                    offsets[m + 1] = offsets[m];
                }

                let Some(idx) = *cell else {
                    continue;
                };

                let children = graph.descendants(idx);
                let span = children
                    .first()
                    .zip(children.last())
                    .map(|(&first, &last)| {
                        let first_x = graph.node(first).position().x();
                        let last_x = graph.node(last).position().x();
                        ((last_x + first_x) / 2.0, (children.len() - 1) as f32)
                    });

                let node = graph.node_mut(idx);
                let position = node.position();
                match span {
                    Some((x, dx)) => {
                        node.set_position(position.with_x(x));
                        offsets[m] += dx;
                        offsets[m + 1] += dx;
                    }
                    None => node.set_position(position.with_x(position.x() + offsets[m])),
                }
            }
        }
    }

    fn place_ancestors(graph: &mut Graph, grid: &mut Grid) {
        let origin = graph.node(graph.focus()).position();
        let ancestors = graph.ancestors().to_vec();
        let mut lift = 0.0;

        for (index, &idx) in ancestors.iter().enumerate() {
            let mixins = graph.mixins(idx).len();
            if mixins > 1 {
                lift += (mixins - 1) as f32;
            }

            let y = origin.y() - 1.0 - index as f32 - lift;
            graph.node_mut(idx).set_position(origin.with_y(y));
        }

        // The farthest ancestor becomes the top row.
        grid.prepend_rows(ancestors.into_iter().rev().map(|idx| vec![Some(idx)]));
    }

    fn place_mixins(&self, graph: &mut Graph, grid: &mut Grid) {
        let owners: Vec<NodeIndex> = iter::once(graph.focus())
            .chain(graph.ancestors().iter().copied())
            .collect();
        let mut row = Vec::new();

        for owner in owners {
            let owner_y = graph.node(owner).position().y();
            for (index, mixin) in graph.mixins(owner).to_vec().into_iter().enumerate() {
                let position = Point::new(self.mixin_offset, owner_y + index as f32);
                graph.node_mut(mixin).set_position(position);
                row.push(Some(mixin));
            }
        }

        if !row.is_empty() {
            grid.push_row(row);
        }
    }
}

impl LayoutEngine for GridEngine {
    fn calculate(&self, graph: &mut Graph) -> Result<Grid, DiagramError> {
        graph.expect_stage(Stage::Resolved)?;

        let mut grid = Grid::new();
        Self::place_focus(graph, &mut grid);
        Self::place_descendants(graph, &mut grid);
        Self::center(graph, &grid);
        Self::place_ancestors(graph, &mut grid);
        self.place_mixins(graph, &mut grid);

        for idx in grid.occupied() {
            let node = graph.node(idx);
            trace!(
                name = node.name(),
                x = node.position().x(),
                y = node.position().y();
                "Node positioned"
            );
        }
        debug!(rows = grid.len(), nodes = grid.occupied().count(); "Layout calculated");

        graph.advance(Stage::Positioned);
        Ok(grid)
    }
}

use petgraph::graph::NodeIndex;

/// One grid row; empty cells keep columns aligned with the row above.
pub type Row = Vec<Option<NodeIndex>>;

/// A sparse 2D arrangement of positioned nodes, top row first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid from already arranged rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the occupied cells, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.rows.iter().flatten().flatten().copied()
    }

    pub(crate) fn last_row(&self) -> Option<&Row> {
        self.rows.last()
    }

    pub(crate) fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Inserts `rows` above the current first row, keeping their order.
    pub(crate) fn prepend_rows(&mut self, rows: impl IntoIterator<Item = Row>) {
        self.rows.splice(0..0, rows);
    }
}

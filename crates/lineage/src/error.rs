//! Error types for Lineage operations.
//!
//! This module provides the main error type [`DiagramError`] which covers
//! every failure a diagram build can surface to its caller.
//!
//! References to names that have no entry in the node map are not errors:
//! they resolve to nodes without data and are drawn with their own style.

use std::io;

use thiserror::Error;

/// The main error type for Lineage operations.
#[derive(Debug, Error)]
pub enum DiagramError {
    /// Malformed input at a stage boundary, or a stage run out of order.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The node of interest has no entry in the node map.
    #[error("Node data for \"{0}\" does not exist in the provided node map")]
    NotFound(String),

    /// A name was reached again while it was still being expanded.
    #[error("Cyclic reference to \"{name}\"")]
    Cycle { name: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The node map could not be decoded.
    #[error("Input error: {0}")]
    Input(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for DiagramError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

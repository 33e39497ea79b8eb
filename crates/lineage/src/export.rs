//! Export of rendered diagrams.
//!
//! This module provides the [`Exporter`] trait that turns a rendered
//! [`Surface`] into its final textual form. It is the last stage of the
//! Lineage pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Node Map + Focus
//!     ↓ resolve
//! Graph
//!     ↓ layout
//! Grid (positioned nodes)
//!     ↓ render
//! Surface
//!     ↓ export (this module)
//! SVG text
//! ```
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`DiagramError::Export`] at the crate
//! boundary.
//!
//! [`DiagramError::Export`]: crate::DiagramError::Export

/// SVG export backend.
pub mod svg;

use std::{error, fmt, io};

use crate::render::Surface;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Serializes a rendered surface.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the surface cannot be converted to the
    /// target format.
    fn export(&self, surface: Surface) -> Result<String, Error>;
}

/// Errors that can occur during diagram export.
///
/// This type is converted into [`DiagramError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`DiagramError::Export`]: crate::DiagramError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

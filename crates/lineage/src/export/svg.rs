//! SVG export with an inlined stylesheet.

use std::{fs, path::Path};

use log::{debug, error, info};
use svg::{
    Node,
    node::{Blob, element::Element},
};

use super::{Error, Exporter};
use crate::{config::StyleConfig, render::Surface};

const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

/// Stylesheet every diagram starts from; configured CSS is appended to it.
pub const DEFAULT_CSS: &str = "rect {stroke-width: 2; stroke: black; fill: white;} \
    a {cursor: pointer;} \
    a text {fill: blue; text-decoration: underline;} \
    path {stroke-width: 2; stroke: black; fill: none;} \
    marker path {stroke-width:0; fill:black;} \
    .child rect, .parent rect {stroke: blue;} \
    .mixin rect {stroke: green;}";

/// Writes standalone SVG documents.
#[derive(Debug, Clone)]
pub struct SvgExporter {
    css: String,
}

impl SvgExporter {
    pub fn new(style: &StyleConfig) -> Self {
        Self {
            css: collapse_css(&format!("{DEFAULT_CSS} {}", style.css())),
        }
    }

    /// The stylesheet that will be inlined, already collapsed to one line.
    pub fn css(&self) -> &str {
        &self.css
    }

    /// Exports `surface` and writes the result to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written, or any error of
    /// [`Exporter::export`].
    pub fn write_to(&self, surface: Surface, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let content = self.export(surface)?;

        info!(path:? = path; "Creating SVG file");
        if let Err(err) = fs::write(path, content) {
            error!(path:? = path, err:err; "Failed to write SVG file");
            return Err(Error::Io(err));
        }

        Ok(())
    }

    fn style_element(&self) -> Result<Element, Error> {
        if self.css.contains("]]>") {
            return Err(Error::Render(
                "stylesheet must not contain the CDATA terminator `]]>`".to_string(),
            ));
        }

        let mut style = Element::new("style");
        style.assign("type", "text/css");
        style.append(Blob::new(format!("<![CDATA[{}]]>", self.css)));
        Ok(style)
    }
}

impl Exporter for SvgExporter {
    fn export(&self, surface: Surface) -> Result<String, Error> {
        let document = surface.with_definition(self.style_element()?).into_document();
        let output = format!("{XML_PROLOG}\n{document}");

        debug!(bytes = output.len(); "SVG document serialized");
        Ok(output)
    }
}

/// Joins a stylesheet into one line: newlines are dropped and every other
/// whitespace run becomes a single space.
fn collapse_css(css: &str) -> String {
    css.trim()
        .replace('\n', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

//! CLI logic for the Lineage diagram tool.
//!
//! Reads a node map, builds the diagram for one focus node and writes it as
//! an SVG file.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::{debug, info};

use lineage::{DiagramBuilder, DiagramError, input::NodeMap};

/// Run the Lineage CLI application
///
/// # Errors
///
/// Returns [`DiagramError`] for:
/// - File I/O errors
/// - Configuration loading errors
/// - Node map decoding errors
/// - Resolution errors (unknown focus, cyclic references)
/// - Rendering and export errors
pub fn run(args: &Args) -> Result<(), DiagramError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing node map"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let input = Path::new(&args.input);
    let map = read_node_map(input)?;
    let focus = match &args.focus {
        Some(focus) => focus.clone(),
        None => focus_from_path(input)?,
    };
    debug!(focus = focus.as_str(), nodes = map.len(); "Node map loaded");

    DiagramBuilder::new(app_config).write_svg(&focus, &map, &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Reads a node map, choosing the format by file extension.
fn read_node_map(path: &Path) -> Result<NodeMap, DiagramError> {
    let source = fs::read_to_string(path)?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => NodeMap::from_json_str(&source),
        _ => NodeMap::from_toml_str(&source),
    }
}

fn focus_from_path(path: &Path) -> Result<String, DiagramError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            DiagramError::InvalidArgument(format!(
                "cannot derive a focus name from \"{}\"; pass --focus",
                path.display()
            ))
        })
}

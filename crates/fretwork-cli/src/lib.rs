//! Fretwork CLI library
//!
//! This module contains the core CLI logic for the Fretwork scale diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use fretwork::{DiagramBuilder, FretworkError, semantic::FretWindow};

/// Splits a comma-separated list of pitch names.
///
/// An empty or blank list yields no names; entries are kept as given
/// otherwise, so an empty entry is reported as an invalid pitch.
fn split_names(list: &str) -> Vec<String> {
    if list.trim().is_empty() {
        return Vec::new();
    }
    list.split(',').map(|name| name.trim().to_string()).collect()
}

/// Run the Fretwork CLI application
///
/// This function resolves the requested tuning and scale, renders the
/// diagram and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `FretworkError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Unknown pitch names, an empty tuning or an inverted fret window
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), FretworkError> {
    info!(
        scale = args.scale,
        output_path = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let defaults = app_config.defaults();

    let tuning = match (&args.tuning, args.instrument) {
        (Some(tuning), _) => split_names(tuning),
        (None, Some(instrument)) => instrument
            .string_names()
            .iter()
            .map(|name| name.to_string())
            .collect(),
        (None, None) => defaults.tuning_names(),
    };
    let scale = split_names(&args.scale);
    let window = FretWindow::new(
        args.start.unwrap_or(defaults.start()),
        args.stop.unwrap_or(defaults.stop()),
    )?;

    let builder = DiagramBuilder::new(app_config);
    let diagram = builder.resolve(&tuning, &scale, window, args.title.as_deref())?;
    let svg = builder.render_svg(&diagram)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

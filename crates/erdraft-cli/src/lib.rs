//! CLI logic for the erdraft diagram tool.
//!
//! This module contains the core CLI logic: read the input, turn it into a
//! model, render the PNG, then write any requested secondary exports.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::{error, info, warn};

use erdraft::{
    DiagramBuilder, ErdraftError,
    export::{DiagramExporter, Renderer, SlideWriter, graphviz::GraphvizRenderer},
    model::Model,
};

/// Run the erdraft CLI application
///
/// Reads the input file, builds a model (through the configured text
/// generator unless `--structured` is given) and renders `<output>.png`.
/// Secondary exports requested with `--dot` / `--slide` are written next to
/// the image; their failures are logged but do not fail the run.
///
/// # Errors
///
/// Returns `ErdraftError` for:
/// - File I/O errors reading the input
/// - Configuration loading errors
/// - Generator client construction errors
/// - Raster export errors
pub fn run(args: &Args) -> Result<(), ErdraftError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing description"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let model = if args.structured {
        builder.parse(&source)
    } else {
        let generator = builder.generator()?;
        builder.extract(&source, &generator)
    };

    if model.is_empty() {
        warn!("No entities or relationships found; the text generator may have failed");
    }

    let mut exporter = builder.exporter(GraphvizRenderer::new());
    export(&mut exporter, &model, args)
}

/// Render the image, then the requested secondary exports.
fn export<R: Renderer, W: SlideWriter>(
    exporter: &mut DiagramExporter<R, W>,
    model: &Model,
    args: &Args,
) -> Result<(), ErdraftError> {
    let image = exporter.try_render(model, &args.output)?;
    info!(output_file = image.display().to_string(); "PNG exported successfully");

    if args.dot {
        secondary("DOT", &image.with_extension("dot"), |path| {
            exporter.export_description(model, path)
        });
    }

    if args.slide {
        secondary("PPTX", &image.with_extension("pptx"), |path| {
            exporter.export_slide(path)
        });
    }

    Ok(())
}

fn secondary<E: std::fmt::Display>(
    format: &str,
    path: &Path,
    export: impl FnOnce(&Path) -> Result<(), E>,
) {
    match export(path) {
        Ok(()) => info!(format, path = path.display().to_string(); "Secondary export written"),
        Err(err) => error!("Failed to export {format} to {}: {err}", path.display()),
    }
}

//! Export functionality for entity/relationship diagrams.
//!
//! This module provides the [`DiagramExporter`], which turns a [`Model`] into
//! a raster image and then offers secondary exports that either reuse that
//! image (slide deck) or rebuild the same structure from the model alone
//! (DOT description text).
//!
//! # Pipeline Position
//!
//! ```text
//! Model
//!     ↓ structure
//! DiagramGraph
//!     ↓ Renderer::layout
//! PNG bytes → <base>.png
//!     ↓ export_slide
//! PPTX
//! ```
//!
//! # Available Backends
//!
//! - [`graphviz`]: raster output through the Graphviz `dot` tool (feature `graphviz`)
//! - [`pptx`]: Office Open XML slide deck writer
//! - [`description`]: DOT text, independent of any backend
//!
//! # State
//!
//! An exporter starts [`ExportState::Unrendered`]. A successful
//! [`DiagramExporter::render`] moves it to [`ExportState::Rendered`]; a failed
//! one moves it back. [`DiagramExporter::export_slide`] is only allowed in
//! the rendered state.

pub mod description;
#[cfg(feature = "graphviz")]
pub mod graphviz;
pub mod png;
pub mod pptx;

use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use thiserror::Error;

use erdraft_core::model::Model;

use crate::structure::DiagramGraph;

pub use pptx::{Picture, PptxWriter, Slide};

/// Errors that can occur during diagram export.
///
/// [`ExportError::NotRendered`] is a precondition failure and is raised
/// before any filesystem access.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A relationship endpoint names no declared entity.
    #[error("relationship references unknown entity `{name}`")]
    UnknownEntity { name: String },

    /// Slide export was requested before a successful raster render.
    #[error("diagram must be rendered before exporting a slide")]
    NotRendered,

    /// The renderer reported success but left no output behind.
    #[error("rendered output not found at {}", .0.display())]
    MissingOutput(PathBuf),

    /// The layout backend failed.
    #[error("render failed: {0}")]
    Render(String),

    /// The rendered image could not be read as a PNG.
    #[error("invalid image: {0}")]
    Image(String),

    /// The slide package could not be assembled.
    #[error("slide archive error: {0}")]
    Archive(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Abstraction over graph layout engines.
///
/// Implementors lay out a [`DiagramGraph`] and return the encoded PNG.
/// See [`graphviz::GraphvizRenderer`] for the built-in implementation.
pub trait Renderer {
    /// Lay out `graph` and return the raster image bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Render`] if the backend fails.
    fn layout(&self, graph: &DiagramGraph) -> Result<Vec<u8>, ExportError>;
}

/// Abstraction over slide deck file writers.
pub trait SlideWriter {
    /// Write a single-slide deck to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] or [`ExportError::Archive`] if the file
    /// cannot be produced.
    fn write_slide(&self, slide: &Slide, path: &Path) -> Result<(), ExportError>;
}

/// Whether a raster image is available for slide export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExportState {
    #[default]
    Unrendered,
    Rendered {
        /// Path of the last successfully written image.
        image: PathBuf,
    },
}

impl ExportState {
    /// The rendered image path, or [`ExportError::NotRendered`].
    pub fn rendered_image(&self) -> Result<&Path, ExportError> {
        match self {
            ExportState::Rendered { image } => Ok(image),
            ExportState::Unrendered => Err(ExportError::NotRendered),
        }
    }
}

/// Slide geometry, in EMU (914400 per inch).
const EMU_PER_INCH: i64 = 914_400;
const SLIDE_IMAGE_LEFT: i64 = EMU_PER_INCH;
const SLIDE_IMAGE_TOP: i64 = EMU_PER_INCH;
const SLIDE_IMAGE_WIDTH: i64 = 8 * EMU_PER_INCH;
/// Slide title used unless configured otherwise.
pub const DEFAULT_SLIDE_TITLE: &str = "Entity-Relationship Diagram";

/// Renders a [`Model`] to PNG and derived formats.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "graphviz")]
/// # {
/// use erdraft::export::{DiagramExporter, graphviz::GraphvizRenderer};
///
/// let model = erdraft_parser::parse("Entity: Hotel [id*, name]");
/// let mut exporter = DiagramExporter::new(GraphvizRenderer::new());
///
/// if exporter.render(&model, "hotel") {
///     exporter.export_slide("hotel.pptx").expect("slide export");
/// }
/// # }
/// ```
pub struct DiagramExporter<R, W = PptxWriter> {
    renderer: R,
    slide_writer: W,
    slide_title: String,
    state: ExportState,
}

impl<R: Renderer> DiagramExporter<R> {
    /// Create an exporter that writes slides with [`PptxWriter`].
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            slide_writer: PptxWriter,
            slide_title: DEFAULT_SLIDE_TITLE.to_string(),
            state: ExportState::Unrendered,
        }
    }
}

impl<R: Renderer, W: SlideWriter> DiagramExporter<R, W> {
    /// Replace the slide writer.
    pub fn with_slide_writer<W2: SlideWriter>(self, slide_writer: W2) -> DiagramExporter<R, W2> {
        DiagramExporter {
            renderer: self.renderer,
            slide_writer,
            slide_title: self.slide_title,
            state: self.state,
        }
    }

    /// Set the title shown on exported slides.
    pub fn with_slide_title(mut self, title: impl Into<String>) -> Self {
        self.slide_title = title.into();
        self
    }

    pub fn state(&self) -> &ExportState {
        &self.state
    }

    /// Render `model` to `<base>.png`, reporting success as a boolean.
    ///
    /// Failures are logged and leave the exporter unrendered. Use
    /// [`try_render`](Self::try_render) to inspect the cause.
    pub fn render(&mut self, model: &Model, output: impl AsRef<Path>) -> bool {
        match self.try_render(model, output) {
            Ok(_) => true,
            Err(err) => {
                error!("Diagram generation failed: {err}");
                false
            }
        }
    }

    /// Render `model` to `<base>.png` and return the image path.
    ///
    /// A trailing `.png` on `output` is not doubled. After the renderer
    /// returns, the image must exist on disk and be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnknownEntity`] for dangling relationships,
    /// [`ExportError::Render`] for backend failures,
    /// [`ExportError::MissingOutput`] if no image was left behind, and
    /// [`ExportError::Io`] if writing fails.
    pub fn try_render(
        &mut self,
        model: &Model,
        output: impl AsRef<Path>,
    ) -> Result<PathBuf, ExportError> {
        let image = raster_path(output.as_ref());
        info!(path = image.display().to_string(); "Generating diagram");

        match self.write_image(model, &image) {
            Ok(()) => {
                info!(path = image.display().to_string(); "Diagram saved");
                self.state = ExportState::Rendered {
                    image: image.clone(),
                };
                Ok(image)
            }
            Err(err) => {
                self.state = ExportState::Unrendered;
                Err(err)
            }
        }
    }

    fn write_image(&self, model: &Model, image: &Path) -> Result<(), ExportError> {
        let graph = DiagramGraph::from_model(model)?;
        debug!(
            nodes = graph.nodes().len(),
            edges = graph.edges().len();
            "Diagram graph built"
        );

        let bytes = self.renderer.layout(&graph)?;
        fs::write(image, &bytes)?;

        match fs::metadata(image) {
            Ok(metadata) if metadata.is_file() && metadata.len() > 0 => Ok(()),
            _ => Err(ExportError::MissingOutput(image.to_path_buf())),
        }
    }

    /// Write the DOT description of `model` to `path`.
    ///
    /// Works in either state; the raster image is never consulted.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if the file cannot be written.
    pub fn export_description(
        &self,
        model: &Model,
        path: impl AsRef<Path>,
    ) -> Result<(), ExportError> {
        let path = path.as_ref();
        fs::write(path, description::describe(model))?;
        info!(path = path.display().to_string(); "DOT file saved");
        Ok(())
    }

    /// Write a one-slide deck embedding the last rendered image.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NotRendered`] without touching the filesystem
    /// if no render has succeeded. Otherwise propagates image decoding and
    /// writer failures.
    pub fn export_slide(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let image = self.state.rendered_image()?;
        let path = path.as_ref();

        let data = fs::read(image)?;
        let (width, height) = png::dimensions(&data)?;
        let picture = Picture::new(
            data,
            SLIDE_IMAGE_LEFT,
            SLIDE_IMAGE_TOP,
            SLIDE_IMAGE_WIDTH,
            scaled_height(SLIDE_IMAGE_WIDTH, width, height),
        );
        let slide = Slide::new(&self.slide_title, picture);

        self.slide_writer.write_slide(&slide, path)?;
        info!(path = path.display().to_string(); "Slide deck saved");
        Ok(())
    }
}

/// The image path for a requested output: `<base>.png`.
///
/// ```
/// # use std::path::Path;
/// # use erdraft::export::raster_path;
/// assert_eq!(raster_path(Path::new("out")), Path::new("out.png"));
/// assert_eq!(raster_path(Path::new("out.png")), Path::new("out.png"));
/// ```
pub fn raster_path(output: &Path) -> PathBuf {
    if output.extension().is_some_and(|ext| ext == "png") {
        return output.to_path_buf();
    }
    let mut path = OsString::from(output.as_os_str());
    path.push(".png");
    PathBuf::from(path)
}

/// Height that keeps a `width_px` × `height_px` image's aspect ratio at `width`.
fn scaled_height(width: i64, width_px: u32, height_px: u32) -> i64 {
    width * i64::from(height_px) / i64::from(width_px.max(1))
}

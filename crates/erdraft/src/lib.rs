//! Erdraft - turn entity/relationship descriptions into diagrams.
//!
//! Free-form text is rewritten into structured `Entity:` / `Relationship:`
//! lines by a text generator, parsed into a [`Model`], rendered to PNG, and
//! optionally exported as DOT text or a one-slide deck.

pub mod config;
pub mod export;
pub mod label;
pub mod ollama;
pub mod structure;

mod error;

pub use erdraft_core::model;
pub use erdraft_parser::{GenerateError, TextGenerator};

pub use error::ErdraftError;

use log::{info, trace};

use erdraft_core::model::Model;

use config::AppConfig;
use export::{DiagramExporter, Renderer};
use ollama::OllamaGenerator;

/// Builder for turning descriptions into models and exporters.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "graphviz")]
/// # {
/// use erdraft::{DiagramBuilder, config::AppConfig, export::graphviz::GraphvizRenderer};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Structured text can be parsed directly
/// let model = builder.parse("Entity: Hotel [id*, name]\nEntity: Room [id*]");
///
/// // Render it
/// let mut exporter = builder.exporter(GraphvizRenderer::new());
/// exporter.try_render(&model, "hotel").expect("Failed to render");
/// # }
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse structured text into a model, skipping malformed lines.
    pub fn parse(&self, source: &str) -> Model {
        info!("Parsing structured text");
        let model = erdraft_parser::parse(source);
        trace!(model:?; "Parsed model");
        model
    }

    /// Send free-form text through `generator` and parse its reply.
    ///
    /// Generator failures are logged and produce an empty model.
    pub fn extract(&self, text: &str, generator: &dyn TextGenerator) -> Model {
        erdraft_parser::extract(text, generator)
    }

    /// Build the configured Ollama text generator.
    ///
    /// # Errors
    ///
    /// Returns [`ErdraftError::Generate`] if the HTTP client cannot be built.
    pub fn generator(&self) -> Result<OllamaGenerator, ErdraftError> {
        Ok(OllamaGenerator::new(self.config.generator())?)
    }

    /// Create an exporter for `renderer` using the configured slide title.
    pub fn exporter<R: Renderer>(&self, renderer: R) -> DiagramExporter<R> {
        DiagramExporter::new(renderer).with_slide_title(self.config.slide().title())
    }
}

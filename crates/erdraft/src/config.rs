//! Configuration types for erdraft.
//!
//! All types implement [`serde::Deserialize`] and every section falls back
//! to its defaults when absent, so an empty file is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`GeneratorConfig`] - Where and how to reach the text-generation service.
//! - [`SlideConfig`] - Slide deck export options.
//!
//! # Example
//!
//! ```
//! # use erdraft::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.generator().model(), "llama3");
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::export::DEFAULT_SLIDE_TITLE;

const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "llama3";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Text generator section.
    #[serde(default)]
    generator: GeneratorConfig,

    /// Slide export section.
    #[serde(default)]
    slide: SlideConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(generator: GeneratorConfig, slide: SlideConfig) -> Self {
        Self { generator, slide }
    }

    /// Returns the text generator configuration.
    pub fn generator(&self) -> &GeneratorConfig {
        &self.generator
    }

    /// Returns the slide export configuration.
    pub fn slide(&self) -> &SlideConfig {
        &self.slide
    }
}

/// Connection settings for the text-generation service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    base_url: String,
    model: String,
    timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeneratorConfig {
    /// Creates a new [`GeneratorConfig`].
    ///
    /// # Arguments
    ///
    /// * `base_url` - Service root, without a trailing API path.
    /// * `model` - Model name passed through to the service.
    /// * `timeout` - Whole-request timeout.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            timeout_secs: timeout.as_secs(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Slide deck export options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SlideConfig {
    title: String,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_SLIDE_TITLE.to_string(),
        }
    }
}

impl SlideConfig {
    /// Creates a new [`SlideConfig`] with the given slide title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

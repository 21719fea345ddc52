//! Configuration types for parsing and graph construction.
//!
//! Follows a builder pattern for the top-level [`GeneratorConfig`] with validation.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Toggles for the edge-generation passes of the graph builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Derive a reverse Backlink edge for every Link edge
    pub include_backlinks: bool,
    /// Connect every pair of cards sharing a tag
    pub include_tags: bool,
    /// Attach `weight = 1` to every edge
    pub weight_by_frequency: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            include_backlinks: true,
            include_tags: true,
            weight_by_frequency: false,
        }
    }
}

impl GraphOptions {
    /// Weight to stamp on newly created edges
    pub fn edge_weight(&self) -> Option<f64> {
        self.weight_by_frequency.then_some(1.0)
    }
}

/// Default wikilink pattern: `[[Target]]`
pub const DEFAULT_LINK_PATTERN: &str = r"\[\[([^\]]+)\]\]";
/// Default inline tag pattern: `#tag`
pub const DEFAULT_TAG_PATTERN: &str = r"#([a-zA-Z0-9_-]+)";
/// Default title pattern: first level-one heading
pub const DEFAULT_TITLE_PATTERN: &str = r"(?m)^#\s+(.+)$";
/// Default markdown file extensions
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["md", "markdown", "mdown", "mkd"];

/// Patterns used to extract card data from markdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// First capture group is the link target
    pub link_pattern: String,
    /// First capture group is the tag name
    pub tag_pattern: String,
    /// First capture group is the title; also used to derive the card id
    pub title_pattern: String,
    /// Lowercase file extensions (without dot) treated as markdown
    pub extensions: Vec<String>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            link_pattern: DEFAULT_LINK_PATTERN.to_string(),
            tag_pattern: DEFAULT_TAG_PATTERN.to_string(),
            title_pattern: DEFAULT_TITLE_PATTERN.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ParserOptions {
    /// Compile a configured pattern, requiring at least one capture group
    pub fn compile(pattern: &str, name: &str) -> Result<Regex> {
        let regex = Regex::new(pattern)
            .map_err(|e| Error::config_error(format!("Invalid {} '{}': {}", name, pattern, e)))?;

        if regex.captures_len() < 2 {
            return Err(Error::config_error(format!(
                "{} '{}' must contain a capture group",
                name, pattern
            )));
        }

        Ok(regex)
    }

    /// Validate all patterns and extensions
    pub fn validate(&self) -> Result<()> {
        Self::compile(&self.link_pattern, "link_pattern")?;
        Self::compile(&self.tag_pattern, "tag_pattern")?;
        Self::compile(&self.title_pattern, "title_pattern")?;

        if self.extensions.is_empty() {
            return Err(Error::config_error(
                "At least one markdown extension must be configured",
            ));
        }

        Ok(())
    }
}

/// Top-level configuration for a graph generator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub parser: ParserOptions,
    pub graph: GraphOptions,
}

impl GeneratorConfig {
    /// Create a config builder
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.parser.validate()
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config_error(format!(
                "Failed to load config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: GeneratorConfig = serde_yaml::from_str(&content)
            .map_err(|e| Error::config_error(format!("Invalid configuration: {}", e)))?;
        config.validate()?;

        log::debug!("Loaded generator config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| Error::serialization_error(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, yaml).map_err(|e| {
            Error::config_error(format!(
                "Failed to save config to {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// Builder for GeneratorConfig
pub struct GeneratorConfigBuilder {
    parser: ParserOptions,
    graph: GraphOptions,
}

impl GeneratorConfigBuilder {
    /// Create a new builder with default options
    pub fn new() -> Self {
        Self {
            parser: ParserOptions::default(),
            graph: GraphOptions::default(),
        }
    }

    /// Toggle backlink edges
    pub fn include_backlinks(mut self, include: bool) -> Self {
        self.graph.include_backlinks = include;
        self
    }

    /// Toggle tag co-occurrence edges
    pub fn include_tags(mut self, include: bool) -> Self {
        self.graph.include_tags = include;
        self
    }

    /// Toggle edge weights
    pub fn weight_by_frequency(mut self, weighted: bool) -> Self {
        self.graph.weight_by_frequency = weighted;
        self
    }

    /// Override the link pattern
    pub fn link_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.parser.link_pattern = pattern.into();
        self
    }

    /// Override the tag pattern
    pub fn tag_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.parser.tag_pattern = pattern.into();
        self
    }

    /// Override the title pattern
    pub fn title_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.parser.title_pattern = pattern.into();
        self
    }

    /// Replace all graph options at once
    pub fn graph_options(mut self, options: GraphOptions) -> Self {
        self.graph = options;
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<GeneratorConfig> {
        let config = GeneratorConfig {
            parser: self.parser,
            graph: self.graph,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

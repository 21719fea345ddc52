//! Markdown card parser

use crate::ids::{link_target, sanitize_id};
use cardgraph_core::config::{
    DEFAULT_EXTENSIONS, DEFAULT_LINK_PATTERN, DEFAULT_TAG_PATTERN, DEFAULT_TITLE_PATTERN,
};
use cardgraph_core::prelude::*;
use regex::Regex;
use std::io;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(DEFAULT_LINK_PATTERN).unwrap());
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(DEFAULT_TAG_PATTERN).unwrap());
static TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_TITLE_PATTERN).unwrap());

/// Longest fallback title taken from the first body line, in characters
const MAX_FALLBACK_TITLE: usize = 100;

/// Parser that extracts [`Card`] records from markdown
#[derive(Debug, Clone)]
pub struct MarkdownParser {
    link_pattern: Regex,
    tag_pattern: Regex,
    title_pattern: Regex,
    extensions: Vec<String>,
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self {
            link_pattern: LINK_PATTERN.clone(),
            tag_pattern: TAG_PATTERN.clone(),
            title_pattern: TITLE_PATTERN.clone(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MarkdownParser {
    /// Create a parser from options, compiling its patterns
    pub fn new(options: ParserOptions) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            link_pattern: ParserOptions::compile(&options.link_pattern, "link_pattern")?,
            tag_pattern: ParserOptions::compile(&options.tag_pattern, "tag_pattern")?,
            title_pattern: ParserOptions::compile(&options.title_pattern, "title_pattern")?,
            extensions: options
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
        })
    }

    /// Parse a single markdown file from disk
    pub fn parse_file(&self, path: &Path) -> Result<Card> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::file_not_found(path),
            _ => Error::Io(e),
        })?;

        Ok(self.parse_content(&content, path))
    }

    /// Parse markdown content that came from `file_path`
    pub fn parse_content(&self, content: &str, file_path: impl AsRef<Path>) -> Card {
        let file_path = file_path.as_ref();
        let heading = self.heading(content);

        let id = match heading {
            Some(text) => sanitize_id(text),
            None => sanitize_id(
                &file_path
                    .file_stem()
                    .map(|s| s.to_string_lossy())
                    .unwrap_or_default(),
            ),
        };

        let title = match heading {
            Some(text) => text.trim().to_string(),
            None => fallback_title(content),
        };

        Card {
            id,
            title,
            content: content.to_string(),
            file_path: file_path.to_path_buf(),
            tags: self.extract_tags(content),
            links: self.extract_links(content),
            backlinks: Vec::new(),
        }
    }

    /// Parse every markdown file under `dir`.
    ///
    /// Entries are visited in file-name order. Files that cannot be read are
    /// logged and skipped.
    pub fn parse_directory(&self, dir: &Path, recursive: bool) -> Result<Vec<Card>> {
        if !dir.is_dir() {
            return Err(Error::file_not_found(dir));
        }

        let mut walker = WalkDir::new(dir)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name();
        if !recursive {
            walker = walker.max_depth(1);
        }

        let mut cards = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.is_markdown_file(entry.path()) {
                continue;
            }

            match self.parse_file(entry.path()) {
                Ok(card) => cards.push(card),
                Err(e) => log::warn!("Failed to parse {}: {}", entry.path().display(), e),
            }
        }

        log::debug!("Parsed {} cards from {}", cards.len(), dir.display());
        Ok(cards)
    }

    /// Check whether a path has one of the configured markdown extensions
    pub fn is_markdown_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .is_some_and(|ext| self.extensions.contains(&ext))
    }

    fn heading<'c>(&self, content: &'c str) -> Option<&'c str> {
        self.title_pattern
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn extract_links(&self, content: &str) -> Vec<String> {
        let mut links: Vec<String> = Vec::new();

        for caps in self.link_pattern.captures_iter(content) {
            let Some(raw) = caps.get(1) else { continue };
            let link = sanitize_id(link_target(raw.as_str()));
            // Same-note references like `[[#Heading]]` have no target
            if link.is_empty() {
                continue;
            }
            if !links.contains(&link) {
                links.push(link);
            }
        }

        links
    }

    fn extract_tags(&self, content: &str) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();

        for caps in self.tag_pattern.captures_iter(content) {
            let Some(raw) = caps.get(1) else { continue };
            let tag = raw.as_str().to_lowercase();
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        tags
    }
}

/// First non-empty line that is not a heading, or "Untitled"
fn fallback_title(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.chars().take(MAX_FALLBACK_TITLE).collect())
        .unwrap_or_else(|| "Untitled".to_string())
}

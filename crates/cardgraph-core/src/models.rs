//! Core data models for cards and the edges between them.
//!
//! These types are designed to be:
//! - **Serializable**: All types derive Serialize/Deserialize
//! - **Debuggable**: Derive Debug for easy inspection
//! - **Type-Safe**: [`EdgeKind`] replaces magic strings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A parsed markdown document.
///
/// `id` is the stable identity (lowercase kebab-case). `links` holds target
/// card ids, de-duplicated in first-occurrence order. `backlinks` is derived by
/// the graph builder and is overwritten on every build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub title: String,
    pub content: String,
    pub file_path: PathBuf,
    pub tags: Vec<String>,
    pub links: Vec<String>,
    pub backlinks: Vec<String>,
}

impl Card {
    /// Create an empty card with the given id and title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: String::new(),
            file_path: PathBuf::new(),
            tags: Vec::new(),
            links: Vec::new(),
            backlinks: Vec::new(),
        }
    }

    /// Set outgoing link targets
    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }

    /// Set tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set raw markdown content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the originating file path
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    /// Check whether the card carries a tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Kind of relationship an edge represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Explicit reference: `[[Target]]` written in the source card
    Link,
    /// Derived reverse of a link, pointing from the linked-to card back at the linker
    Backlink,
    /// Co-occurrence of a shared tag; always materialized in both directions
    Tag,
}

impl EdgeKind {
    /// Lowercase name, as used in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Link => "link",
            EdgeKind::Backlink => "backlink",
            EdgeKind::Tag => "tag",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed edge between two card ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Edge {
    /// Create a new edge
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        kind: EdgeKind,
        weight: Option<f64>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
            weight,
        }
    }

    /// Edge with the endpoints swapped, same kind and weight
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            kind: self.kind,
            weight: self.weight,
        }
    }
}

//! # Cardgraph Parser
//!
//! Turns markdown documents into [`Card`](cardgraph_core::Card) records.
//!
//! This crate provides:
//! - Card id and title extraction from the first `# Heading` (falling back to the file stem)
//! - Wikilink extraction: `[[Note]]`, `[[Note|Alias]]`, `[[Note#Heading]]`
//! - Inline tag extraction: `#tag`
//! - Single file, multi-file and directory parsing
//!
//! ## Quick Start
//!
//! ```
//! use cardgraph_parser::MarkdownParser;
//!
//! let parser = MarkdownParser::default();
//! let content = "# Rust Ownership\n\nSee [[Borrowing]] and [[Lifetimes]]. #rust";
//!
//! let card = parser.parse_content(content, "notes/ownership.md");
//! assert_eq!(card.id, "rust-ownership");
//! assert_eq!(card.title, "Rust Ownership");
//! assert_eq!(card.links, vec!["borrowing", "lifetimes"]);
//! assert_eq!(card.tags, vec!["rust"]);
//! ```
//!
//! ## Custom Patterns
//!
//! All three patterns are configurable through
//! [`ParserOptions`](cardgraph_core::ParserOptions). Each needs one capture group.
//!
//! ```
//! use cardgraph_core::ParserOptions;
//! use cardgraph_parser::MarkdownParser;
//!
//! let options = ParserOptions {
//!     tag_pattern: r"@([a-zA-Z0-9_-]+)".to_string(),
//!     ..Default::default()
//! };
//! let parser = MarkdownParser::new(options).unwrap();
//! let card = parser.parse_content("# Note\n\n@draft", "note.md");
//! assert_eq!(card.tags, vec!["draft"]);
//! ```

mod ids;
mod parser;

pub use ids::{link_target, sanitize_id};
pub use parser::MarkdownParser;

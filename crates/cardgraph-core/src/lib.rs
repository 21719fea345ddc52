//! # Cardgraph Core
//!
//! Core data models, error types, and configuration for the card graph system.
//! Every other crate in the workspace depends on the types defined here.
//!
//! ## Architecture Principles
//!
//! - **Plain Data In**: A [`Card`] is an already-parsed document. Nothing in this
//!   crate reads files or parses markdown.
//! - **Type-Driven Design**: [`EdgeKind`] replaces string edge types
//! - **Zero Panic in Libraries**: Fallible operations return [`Result<T>`]
//! - **Builder Pattern for Configuration**: [`GeneratorConfig::builder`]
//!
//! ## Core Modules
//!
//! - [`models`] - Cards, edges and edge kinds
//! - [`error`] - Error enum and Result alias
//! - [`config`] - Parser, graph and generator options
//! - [`utils`] - Serialization helpers
//!
//! ## Usage Examples
//!
//! ### Building Cards By Hand
//!
//! ```
//! use cardgraph_core::prelude::*;
//!
//! let card = Card::new("rust-ownership", "Rust Ownership")
//!     .with_links(["borrowing", "lifetimes"])
//!     .with_tags(["rust"]);
//!
//! assert_eq!(card.links.len(), 2);
//! assert!(card.backlinks.is_empty());
//! ```
//!
//! ### Configuration
//!
//! ```
//! use cardgraph_core::prelude::*;
//!
//! let config = GeneratorConfig::builder()
//!     .include_tags(false)
//!     .build()
//!     .unwrap();
//! assert!(config.graph.include_backlinks);
//! assert!(!config.graph.include_tags);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod utils;

pub use config::*;
pub use error::{Error, Result};
pub use models::*;
pub use utils::to_json_string;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{GeneratorConfig, GraphOptions, ParserOptions};
    pub use crate::error::{Error, Result};
    pub use crate::models::{Card, Edge, EdgeKind};
}

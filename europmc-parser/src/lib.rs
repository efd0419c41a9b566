#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Europe PMC Parser
//!
//! Data model and parser for the open-access article XML served by the
//! Europe PMC REST API (`fullTextXML`), a JATS-style schema.
//!
//! This crate has no network dependencies. It turns a byte stream, string or
//! file into a [`PaperDocument`] and offers accessors for the common
//! metadata fields: title, journal, authors, identifiers, license and
//! keywords. Missing elements never fail a parse; they surface as empty
//! strings, empty lists or `None`.
//!
//! ```
//! use europmc_parser::{parse_from_str, render_author};
//!
//! let xml = r#"<article><front><article-meta>
//!     <contrib-group><contrib><name>
//!         <surname>Dales</surname><given-names>Michael W.</given-names>
//!     </name></contrib></contrib-group>
//! </article-meta></front></article>"#;
//!
//! let paper = parse_from_str(xml)?;
//! assert_eq!(render_author(paper.first_author()), "Michael W. Dales");
//! assert!(paper.keywords().is_empty());
//! # Ok::<(), europmc_parser::ParseError>(())
//! ```

pub mod error;
pub mod models;
pub mod parser;
pub(crate) mod reader_utils;

// Re-export main types for convenience
pub use error::{ParseError, Result};
pub use models::{
    render_author, ArticleId, ArticleMeta, ArticleTitleGroup, ContribGroup, Contributor,
    ContributorName, Front, JournalMeta, JournalTitleGroup, KeywordGroup, License, PaperDocument,
    Permissions,
};
pub use parser::{parse_from_path, parse_from_reader, parse_from_str};

#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Europe PMC Client
//!
//! A blocking client for the Europe PMC REST API that builds full-text and
//! supplementary-files URLs for open-access articles and fetches and parses
//! their JATS XML.
//!
//! Parsing lives in the network-free [`europmc_parser`] crate, whose types
//! are re-exported here.
//!
//! ## Quick Start
//!
//! ```no_run
//! use europmc_client::{render_author, MetadataClient};
//!
//! let client = MetadataClient::new();
//! let paper = client.fetch_full_text("3213213")?;
//!
//! println!("Title: {}", paper.title());
//! println!("Journal: {}", paper.journal_title());
//! println!("First author: {}", render_author(paper.first_author()));
//! println!("License: {}", paper.license_url());
//! # Ok::<(), europmc_client::EuropePmcError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;

// Re-export main types for convenience
pub use client::{full_text_url, supplementary_files_url, MetadataClient};
pub use config::{ClientConfig, EUROPE_PMC_API_URL};
pub use error::{EuropePmcError, Result};
pub use europmc_parser::{
    parse_from_path, parse_from_reader, parse_from_str, render_author, ContributorName,
    PaperDocument, ParseError,
};

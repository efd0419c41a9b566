//! Data model for Europe PMC open-access article XML
//!
//! Every type mirrors one element of the JATS `<front>` matter. All fields
//! default to their zero value when the element is missing from the source,
//! so a sparse document still produces a fully populated tree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::parser::parse_from_str;

/// Name of a single contributor (`<contrib><name>`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorName {
    /// `<surname>`
    pub surname: String,
    /// `<given-names>`
    pub given_names: String,
}

impl fmt::Display for ContributorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.given_names, self.surname)
    }
}

/// Render an optional contributor name, using `<nil>` for a missing one.
///
/// # Example
///
/// ```
/// use europmc_parser::{render_author, ContributorName};
///
/// let name = ContributorName {
///     surname: "Dales".to_string(),
///     given_names: "Michael W.".to_string(),
/// };
/// assert_eq!(render_author(Some(&name)), "Michael W. Dales");
/// assert_eq!(render_author(None), "<nil>");
/// ```
pub fn render_author(name: Option<&ContributorName>) -> String {
    match name {
        Some(name) => name.to_string(),
        None => "<nil>".to_string(),
    }
}

/// A single `<contrib>` entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Role from the `contrib-type` attribute (e.g. "author", "editor")
    pub contrib_type: Option<String>,
    pub name: ContributorName,
}

/// A `<contrib-group>` holding contributors in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContribGroup {
    pub contributors: Vec<Contributor>,
}

/// Article `<title-group>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleTitleGroup {
    /// `<article-title>`
    pub article_title: String,
    /// `<alt-title>`
    pub alt_title: String,
}

/// `<journal-title-group>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalTitleGroup {
    pub journal_title: String,
}

/// `<journal-meta>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalMeta {
    pub title_group: JournalTitleGroup,
}

/// A tagged `<article-id>`, e.g. `<article-id pub-id-type="pmid">12312312</article-id>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleId {
    /// Value of the `pub-id-type` attribute ("pmcid", "pmid", "doi", ...)
    pub kind: String,
    /// Identifier text
    pub value: String,
}

/// `<license>` inside `<permissions>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// Value of the `href` attribute (usually `xlink:href`)
    pub link: String,
    /// Text of the `<license-p>` paragraphs, one per line
    pub text: String,
}

/// `<permissions>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub copyright_statement: String,
    pub copyright_year: String,
    pub license: License,
}

/// `<kwd-group>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup {
    /// `<title>` of the group
    pub title: String,
    /// Value of the `lang` attribute (usually `xml:lang`)
    pub language: String,
    /// `<kwd>` entries in document order
    pub keywords: Vec<String>,
}

/// `<article-meta>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMeta {
    pub ids: Vec<ArticleId>,
    pub title_group: ArticleTitleGroup,
    pub contributor_groups: Vec<ContribGroup>,
    pub permissions: Permissions,
    pub keyword_groups: Vec<KeywordGroup>,
}

/// `<front>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Front {
    pub journal_meta: JournalMeta,
    pub article_meta: ArticleMeta,
}

/// An open-access article as served by Europe PMC's `fullTextXML` endpoint
///
/// Only the `<front>` matter is modelled. Use [`crate::parse_from_reader`],
/// [`crate::parse_from_path`] or [`str::parse`] to build one.
///
/// # Example
///
/// ```
/// use europmc_parser::PaperDocument;
///
/// let xml = r#"<article><front><article-meta>
///     <article-id pub-id-type="pmid">12312312</article-id>
///     <title-group><article-title>Test title</article-title></title-group>
/// </article-meta></front></article>"#;
///
/// let paper: PaperDocument = xml.parse().unwrap();
/// assert_eq!(paper.title(), "Test title");
/// assert_eq!(paper.pmid(), Some("12312312"));
/// assert_eq!(paper.pmcid(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperDocument {
    pub front: Front,
}

impl PaperDocument {
    fn meta(&self) -> &ArticleMeta {
        &self.front.article_meta
    }

    /// Article title, empty if absent
    pub fn title(&self) -> &str {
        &self.meta().title_group.article_title
    }

    /// Alternative (usually short) title, empty if absent
    pub fn alt_title(&self) -> &str {
        &self.meta().title_group.alt_title
    }

    /// Journal title, empty if absent
    pub fn journal_title(&self) -> &str {
        &self.front.journal_meta.title_group.journal_title
    }

    /// First contributor of the first contributor group.
    ///
    /// Returns `None` when there are no contributor groups or the first
    /// group is empty.
    pub fn first_author(&self) -> Option<&ContributorName> {
        self.meta()
            .contributor_groups
            .first()?
            .contributors
            .first()
            .map(|contrib| &contrib.name)
    }

    /// Every contributor name across all contributor groups, in document order
    pub fn authors(&self) -> impl Iterator<Item = &ContributorName> {
        self.meta()
            .contributor_groups
            .iter()
            .flat_map(|group| group.contributors.iter())
            .map(|contrib| &contrib.name)
    }

    /// First article ID whose `pub-id-type` is exactly `kind`
    pub fn article_id(&self, kind: &str) -> Option<&str> {
        self.meta()
            .ids
            .iter()
            .find(|id| id.kind == kind)
            .map(|id| id.value.as_str())
    }

    pub fn pmcid(&self) -> Option<&str> {
        self.article_id("pmcid")
    }

    pub fn pmid(&self) -> Option<&str> {
        self.article_id("pmid")
    }

    pub fn doi(&self) -> Option<&str> {
        self.article_id("doi")
    }

    pub fn copyright_statement(&self) -> &str {
        &self.meta().permissions.copyright_statement
    }

    pub fn copyright_year(&self) -> &str {
        &self.meta().permissions.copyright_year
    }

    /// License link, empty if absent
    pub fn license_url(&self) -> &str {
        &self.meta().permissions.license.link
    }

    pub fn license_text(&self) -> &str {
        &self.meta().permissions.license.text
    }

    /// The first `<kwd-group>`, if any
    pub fn keyword_group(&self) -> Option<&KeywordGroup> {
        self.meta().keyword_groups.first()
    }

    /// Keywords from all keyword groups, in document order
    pub fn keywords(&self) -> Vec<&str> {
        self.meta()
            .keyword_groups
            .iter()
            .flat_map(|group| group.keywords.iter())
            .map(String::as_str)
            .collect()
    }
}

impl FromStr for PaperDocument {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from_str(s)
    }
}

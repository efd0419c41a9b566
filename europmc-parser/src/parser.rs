//! Parser for Europe PMC article XML
//!
//! Walks the `<front>` matter of a JATS article with a streaming reader and
//! fills a [`PaperDocument`]. Elements are matched by local name and anything
//! not modelled is skipped, so newer or richer documents still load.
//!
//! A repeated singleton element (two `<title-group>`s, say) is merged into
//! the same value: later children overwrite earlier ones and lists append.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{ParseError, Result};
use crate::models::{
    ArticleId, ArticleMeta, ArticleTitleGroup, ContribGroup, Contributor, ContributorName, Front,
    JournalMeta, JournalTitleGroup, KeywordGroup, License, PaperDocument, Permissions,
};
use crate::reader_utils::{get_attr, ElementReader};

/// Parse an article from any byte stream.
///
/// Fails with [`ParseError::XmlError`] on malformed XML or if reading the
/// stream fails. A bare `<article/>` parses to an empty document.
pub fn parse_from_reader<R: Read>(reader: R) -> Result<PaperDocument> {
    parse_buffered(BufReader::new(reader))
}

/// Parse an article held in memory.
pub fn parse_from_str(xml: &str) -> Result<PaperDocument> {
    parse_buffered(xml.as_bytes())
}

/// Load and parse an article from a file on disk.
///
/// # Errors
///
/// * `ParseError::NotFound` - If the file does not exist
/// * `ParseError::IoError` - If the file cannot be opened for another reason
/// * `ParseError::XmlError` - If the content is not well-formed XML
pub fn parse_from_path<P: AsRef<Path>>(path: P) -> Result<PaperDocument> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading article XML from file");

    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ParseError::NotFound {
            path: path.display().to_string(),
        },
        _ => ParseError::IoError {
            message: format!("{}: {err}", path.display()),
        },
    })?;

    parse_from_reader(file)
}

fn parse_buffered<R: BufRead>(inner: R) -> Result<PaperDocument> {
    let mut xml = ElementReader::new(inner);
    let root = xml.root()?;

    let mut paper = PaperDocument::default();
    while let Some(child) = xml.next_child()? {
        match child.local_name().as_ref() {
            b"front" => read_front(&mut xml, &mut paper.front)?,
            _ => xml.skip(&child)?,
        }
    }

    let meta = &paper.front.article_meta;
    debug!(
        root = %String::from_utf8_lossy(root.local_name().as_ref()),
        ids = meta.ids.len(),
        contrib_groups = meta.contributor_groups.len(),
        keyword_groups = meta.keyword_groups.len(),
        "Parsed article XML"
    );

    Ok(paper)
}

fn read_front<R: BufRead>(xml: &mut ElementReader<R>, front: &mut Front) -> Result<()> {
    while let Some(child) = xml.next_child()? {
        match child.local_name().as_ref() {
            b"journal-meta" => read_journal_meta(xml, &mut front.journal_meta)?,
            b"article-meta" => read_article_meta(xml, &mut front.article_meta)?,
            _ => xml.skip(&child)?,
        }
    }
    Ok(())
}

fn read_journal_meta<R: BufRead>(xml: &mut ElementReader<R>, meta: &mut JournalMeta) -> Result<()> {
    while let Some(child) = xml.next_child()? {
        match child.local_name().as_ref() {
            b"journal-title-group" => read_journal_title_group(xml, &mut meta.title_group)?,
            _ => xml.skip(&child)?,
        }
    }
    Ok(())
}

fn read_journal_title_group<R: BufRead>(
    xml: &mut ElementReader<R>,
    group: &mut JournalTitleGroup,
) -> Result<()> {
    while let Some(child) = xml.next_child()? {
        match child.local_name().as_ref() {
            b"journal-title" => group.journal_title = xml.read_text(&child)?,
            _ => xml.skip(&child)?,
        }
    }
    Ok(())
}

fn read_article_meta<R: BufRead>(xml: &mut ElementReader<R>, meta: &mut ArticleMeta) -> Result<()> {
    while let Some(child) = xml.next_child()? {
        match child.local_name().as_ref() {
            b"article-id" => {
                let kind = get_attr(&child, b"pub-id-type").unwrap_or_default();
                let value = xml.read_text(&child)?;
                meta.ids.push(ArticleId { kind, value });
            }
            b"title-group" => read_title_group(xml, &mut meta.title_group)?,
            b"contrib-group" => {
                let mut group = ContribGroup::default();
                read_contrib_group(xml, &mut group)?;
                meta.contributor_groups.push(group);
            }
            b"permissions" => read_permissions(xml, &mut meta.permissions)?,
            b"kwd-group" => {
                let mut group = KeywordGroup {
                    language: get_attr(&child, b"lang").unwrap_or_default(),
                    ..Default::default()
                };
                read_keyword_group(xml, &mut group)?;
                meta.keyword_groups.push(group);
            }
            _ => xml.skip(&child)?,
        }
    }
    Ok(())
}

fn read_title_group<R: BufRead>(
    xml: &mut ElementReader<R>,
    group: &mut ArticleTitleGroup,
) -> Result<()> {
    while let Some(child) = xml.next_child()? {
        match child.local_name().as_ref() {
            b"article-title" => group.article_title = xml.read_text(&child)?,
            b"alt-title" => group.alt_title = xml.read_text(&child)?,
            _ => xml.skip(&child)?,
        }
    }
    Ok(())
}

fn read_contrib_group<R: BufRead>(
    xml: &mut ElementReader<R>,
    group: &mut ContribGroup,
) -> Result<()> {
    while let Some(child) = xml.next_child()? {
        match child.local_name().as_ref() {
            b"contrib" => {
                let mut contrib = Contributor {
                    contrib_type: get_attr(&child, b"contrib-type"),
                    ..Default::default()
                };
                read_contributor(xml, &mut contrib)?;
                group.contributors.push(contrib);
            }
            _ => xml.skip(&child)?,
        }
    }
    Ok(())
}

fn read_contributor<R: BufRead>(
    xml: &mut ElementReader<R>,
    contrib: &mut Contributor,
) -> Result<()> {
    while let Some(child) = xml.next_child()? {
        match child.local_name().as_ref() {
            b"name" => read_name(xml, &mut contrib.name)?,
            _ => xml.skip(&child)?,
        }
    }
    Ok(())
}

fn read_name<R: BufRead>(xml: &mut ElementReader<R>, name: &mut ContributorName) -> Result<()> {
    while let Some(child) = xml.next_child()? {
        match child.local_name().as_ref() {
            b"surname" => name.surname = xml.read_text(&child)?,
            b"given-names" => name.given_names = xml.read_text(&child)?,
            _ => xml.skip(&child)?,
        }
    }
    Ok(())
}

fn read_permissions<R: BufRead>(
    xml: &mut ElementReader<R>,
    permissions: &mut Permissions,
) -> Result<()> {
    while let Some(child) = xml.next_child()? {
        match child.local_name().as_ref() {
            b"copyright-statement" => permissions.copyright_statement = xml.read_text(&child)?,
            b"copyright-year" => permissions.copyright_year = xml.read_text(&child)?,
            b"license" => {
                if let Some(link) = get_attr(&child, b"href") {
                    permissions.license.link = link;
                }
                read_license(xml, &mut permissions.license)?;
            }
            _ => xml.skip(&child)?,
        }
    }
    Ok(())
}

fn read_license<R: BufRead>(xml: &mut ElementReader<R>, license: &mut License) -> Result<()> {
    while let Some(child) = xml.next_child()? {
        match child.local_name().as_ref() {
            b"license-p" => {
                let paragraph = xml.read_text(&child)?;
                if !license.text.is_empty() {
                    license.text.push('\n');
                }
                license.text.push_str(&paragraph);
            }
            _ => xml.skip(&child)?,
        }
    }
    Ok(())
}

fn read_keyword_group<R: BufRead>(
    xml: &mut ElementReader<R>,
    group: &mut KeywordGroup,
) -> Result<()> {
    while let Some(child) = xml.next_child()? {
        match child.local_name().as_ref() {
            b"title" => group.title = xml.read_text(&child)?,
            b"kwd" => group.keywords.push(xml.read_text(&child)?),
            _ => xml.skip(&child)?,
        }
    }
    Ok(())
}

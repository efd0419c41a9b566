//! Fixture-based tests for loading article XML from disk and from streams

#[path = "../common/mod.rs"]
mod common;

use std::fs::{self, File};

use europmc_parser::{
    parse_from_path, parse_from_reader, parse_from_str, render_author, PaperDocument, ParseError,
};
use rstest::rstest;
use tracing_test::traced_test;

#[test]
#[traced_test]
fn test_load_test_xml() {
    let paper = parse_from_path(common::fixture_path("test1.xml"))
        .unwrap_or_else(|e| panic!("Failed to load test paper: {e}"));

    assert_eq!(paper.title(), "Test title");
    assert_eq!(paper.alt_title(), "Test");
    assert_eq!(
        paper.journal_title(),
        "International Proceedings of Test Data"
    );

    let author = paper.first_author().expect("first author should be present");
    assert_eq!(author.surname, "Dales");
    assert_eq!(author.given_names, "Michael W.");
    assert_eq!(render_author(Some(author)), "Michael W. Dales");

    assert_eq!(paper.pmcid(), Some("3213213"));
    assert_eq!(paper.pmid(), Some("12312312"));
    assert_eq!(paper.doi(), Some("10.1234/ipt.2019.001"));

    assert_eq!(
        paper.license_url(),
        "http://creativecommons.org/licenses/by/4.0/"
    );
    assert_eq!(
        paper.license_text(),
        "This is an open access article distributed under the terms of the \
         Creative Commons Attribution License."
    );
    assert_eq!(paper.copyright_statement(), "© 2019 Dales and Smith");
    assert_eq!(paper.copyright_year(), "2019");

    assert_eq!(paper.keywords(), vec!["test data", "parsing"]);
    let group = paper.keyword_group().expect("keyword group should be present");
    assert_eq!(group.title, "Keywords");
    assert_eq!(group.language, "en");

    let authors: Vec<String> = paper.authors().map(ToString::to_string).collect();
    assert_eq!(authors, vec!["Michael W. Dales", "Jane Smith"]);
}

#[test]
fn test_load_test_empty_xml() {
    let paper = parse_from_path(common::fixture_path("test2.xml"))
        .unwrap_or_else(|e| panic!("Failed to load test paper: {e}"));

    assert_eq!(paper.title(), "");
    assert_eq!(paper.journal_title(), "");
    assert!(paper.first_author().is_none());
    assert_eq!(render_author(paper.first_author()), "<nil>");
    assert!(paper.pmcid().is_none());
    assert!(paper.pmid().is_none());
    assert_eq!(paper.license_url(), "");
    assert!(paper.keywords().is_empty());
    assert_eq!(paper, PaperDocument::default());
}

#[rstest]
#[case::empty_article("test2.xml")]
#[case::front_without_article_meta("no_article_meta.xml")]
fn test_accessors_total_without_article_meta(#[case] filename: &str) {
    let paper = parse_from_str(&common::read_fixture(filename)).unwrap();

    assert_eq!(paper.title(), "");
    assert_eq!(paper.alt_title(), "");
    assert_eq!(paper.journal_title(), "");
    assert!(paper.first_author().is_none());
    assert_eq!(paper.authors().count(), 0);
    assert!(paper.article_id("pmcid").is_none());
    assert!(paper.doi().is_none());
    assert_eq!(paper.license_url(), "");
    assert_eq!(paper.copyright_statement(), "");
    assert!(paper.keyword_group().is_none());
    assert!(paper.keywords().is_empty());
}

#[test]
fn test_load_non_existent_file() {
    let result = parse_from_path("this/file/hopefully/does/not/exist.xml");

    match result {
        Err(ParseError::NotFound { path }) => {
            assert_eq!(path, "this/file/hopefully/does/not/exist.xml");
        }
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_load_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = parse_from_path(dir.path());

    // Opening a directory succeeds on some platforms and fails on others;
    // either way it never yields a document.
    assert!(matches!(
        result,
        Err(ParseError::IoError { .. }) | Err(ParseError::XmlError(_))
    ));
}

#[test]
fn test_reader_and_path_agree() {
    let from_path = parse_from_path(common::fixture_path("test1.xml")).unwrap();
    let file = File::open(common::fixture_path("test1.xml")).unwrap();
    let from_reader = parse_from_reader(file).unwrap();

    assert_eq!(from_path, from_reader);
}

#[test]
fn test_load_from_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paper.xml");
    fs::write(
        &path,
        r#"<article><front><article-meta>
            <article-id pub-id-type="pmcid">1</article-id>
            <article-id pub-id-type="pmcid">2</article-id>
        </article-meta></front></article>"#,
    )
    .unwrap();

    let paper = parse_from_path(&path).unwrap();
    assert_eq!(paper.pmcid(), Some("1"));
}

#[test]
fn test_document_serializes_to_json() {
    let paper = parse_from_path(common::fixture_path("test1.xml")).unwrap();
    let json = serde_json::to_value(&paper).unwrap();

    assert_eq!(
        json["front"]["article_meta"]["title_group"]["article_title"],
        "Test title"
    );
    assert_eq!(json["front"]["article_meta"]["ids"][0]["kind"], "pmcid");
    assert_eq!(
        json["front"]["article_meta"]["contributor_groups"][0]["contributors"][0]["contrib_type"],
        "author"
    );

    let round_trip: PaperDocument = serde_json::from_value(json).unwrap();
    assert_eq!(round_trip, paper);
}

//! Malformed and truncated inputs must fail with an XML error, never panic

#[path = "../common/mod.rs"]
mod common;

use std::io::{self, Read};

use europmc_parser::{parse_from_path, parse_from_reader, parse_from_str, ParseError};
use rstest::rstest;

const UNKNOWN_ENTITY: &str = "<article><front><article-meta>\
    <article-id pub-id-type=\"pmid\">&bogus;</article-id>\
    </article-meta></front></article>";

#[rstest]
#[case::empty("")]
#[case::whitespace_only("   \n  ")]
#[case::plain_text("this is not xml")]
#[case::mismatched_tags("<article><front></article></front>")]
#[case::unclosed_root("<article><front>")]
#[case::stray_end_tag("</article>")]
#[case::unknown_entity(UNKNOWN_ENTITY)]
fn test_malformed_xml_is_parse_error(#[case] xml: &str) {
    let result = parse_from_str(xml);
    assert!(
        matches!(result, Err(ParseError::XmlError(_))),
        "expected XmlError for {xml:?}, got {result:?}"
    );
}

#[test]
fn test_truncated_fixture_is_parse_error() {
    let result = parse_from_path(common::fixture_path("truncated.xml"));
    assert!(matches!(result, Err(ParseError::XmlError(_))));
}

/// A reader that yields a valid prefix and then fails
struct FailingReader {
    prefix: &'static [u8],
    served: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "stream broke"));
        }
        self.served = true;
        let n = self.prefix.len().min(buf.len());
        buf[..n].copy_from_slice(&self.prefix[..n]);
        Ok(n)
    }
}

#[test]
fn test_stream_failure_is_parse_error() {
    let reader = FailingReader {
        prefix: b"<article><front>",
        served: false,
    };

    let result = parse_from_reader(reader);
    match result {
        Err(ParseError::XmlError(message)) => assert!(message.contains("stream broke")),
        other => panic!("Expected XmlError, got {other:?}"),
    }
}

#[test]
fn test_trailing_content_after_root_is_ignored() {
    let paper = parse_from_str(
        "<article><front><article-meta><title-group>\
         <article-title>Kept</article-title></title-group></article-meta></front></article>\
         <!-- trailing comment -->",
    )
    .unwrap();
    assert_eq!(paper.title(), "Kept");
}

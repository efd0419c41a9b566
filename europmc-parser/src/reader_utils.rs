//! Reader-based XML walking utilities
//!
//! Provides a thin cursor over `quick_xml::Reader` that hands out child
//! elements one at a time. Callers either descend into a child, read its
//! text, or skip it, so the cursor always sits at a known depth.

use std::fmt;
use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{ParseError, Result};

/// Element-at-a-time cursor over a buffered XML stream.
///
/// Configuration:
/// - `expand_empty_elements(true)`: turns `<tag/>` into `Start` + `End` events,
///   so empty elements need no special casing
/// - `trim_text(false)`: preserves whitespace inside mixed content; text
///   readers trim the final collected string instead
pub(crate) struct ElementReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
}

impl<R: BufRead> ElementReader<R> {
    pub fn new(inner: R) -> Self {
        let mut reader = Reader::from_reader(inner);
        reader.config_mut().expand_empty_elements = true;
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Advance to the document's root element.
    ///
    /// Declarations, comments, doctype and whitespace before the root are skipped.
    /// A stream that ends without any element is an error.
    pub fn root(&mut self) -> Result<BytesStart<'static>> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(e)) => return Ok(e.into_owned()),
                Ok(Event::Eof) => {
                    return Err(xml_error(&self.reader, "document has no root element"));
                }
                Ok(_) => {}
                Err(e) => return Err(xml_error(&self.reader, e)),
            }
        }
    }

    /// Next child element of the element currently open.
    ///
    /// Returns `None` once the closing tag of the current element has been
    /// consumed. Text between children is discarded.
    pub fn next_child(&mut self) -> Result<Option<BytesStart<'static>>> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(e)) => return Ok(Some(e.into_owned())),
                Ok(Event::End(_)) => return Ok(None),
                Ok(Event::Eof) => {
                    return Err(xml_error(&self.reader, "unexpected end of document"));
                }
                Ok(_) => {}
                Err(e) => return Err(xml_error(&self.reader, e)),
            }
        }
    }

    /// Read all text content inside `start`, stripping child tags.
    ///
    /// The reader must have just handed out `start`. Consumes everything up
    /// to and including its closing tag and returns the concatenated,
    /// unescaped text trimmed at both ends.
    pub fn read_text(&mut self, start: &BytesStart<'_>) -> Result<String> {
        let mut text = String::new();
        let mut depth: u32 = 1;

        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(_)) => depth += 1,
                Ok(Event::End(_)) => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                Ok(Event::Text(e)) => match e.unescape() {
                    Ok(unescaped) => text.push_str(&unescaped),
                    Err(err) => return Err(xml_error(&self.reader, err)),
                },
                Ok(Event::CData(e)) => text.push_str(&String::from_utf8_lossy(&e)),
                Ok(Event::Eof) => {
                    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                    let message = format!("unexpected end of document inside <{name}>");
                    return Err(xml_error(&self.reader, message));
                }
                Ok(_) => {}
                Err(e) => return Err(xml_error(&self.reader, e)),
            }
        }

        Ok(text.trim().to_string())
    }

    /// Skip an entire element. The reader must have just handed out `start`.
    pub fn skip(&mut self, start: &BytesStart<'_>) -> Result<()> {
        self.buf.clear();
        self.reader
            .read_to_end_into(start.name(), &mut self.buf)
            .map_err(|e| xml_error(&self.reader, e))?;
        Ok(())
    }
}

fn xml_error<R>(reader: &Reader<R>, message: impl fmt::Display) -> ParseError {
    ParseError::XmlError(format!("{message} (at byte {})", reader.buffer_position()))
}

/// Extract an attribute value by local name, ignoring any namespace prefix.
///
/// `get_attr(e, b"href")` matches both `href="..."` and `xlink:href="..."`.
/// Returns `None` if no such attribute exists or its value cannot be unescaped.
pub(crate) fn get_attr(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == name)
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

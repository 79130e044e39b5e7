//! # sml
//!
//! A parser and serializer for SML (Simple Markup Language), a line-based tree format
//! built on WSV (Whitespace-Separated Values).
//!
//! ## What is SML?
//!
//! SML describes a tree of named elements and attributes without brackets or
//! significant indentation. Elements are closed with an end keyword that each document
//! chooses for itself:
//!
//! ```text
//! Root
//!   Person
//!     Name John
//!     Age 30
//!   End
//! End
//! ```
//!
//! ## Key Features
//!
//! - **Typed Tree**: [`Document`], [`Element`], [`Attribute`] and a closed [`Node`] enum
//! - **Case-Insensitive Lookup**: `element("person")` finds `Person`
//! - **End Keyword Detection**: `End`, `Ende`, `-` or any other keyword is picked up
//!   automatically
//! - **Formatting Retention**: optional preserving parse that writes documents back
//!   with their original whitespace, comments and empty lines
//! - **Minified Output**: the shortest text that parses back to the same tree
//! - **Positioned Errors**: every parse error carries its line number
//!
//! ## Quick Start
//!
//! ```rust
//! use sml::{from_str, to_string, to_string_minified};
//!
//! let text = "Root\n  Person\n    Name John\n    Age 30\n  End\nEnd";
//! let document = from_str(text).unwrap();
//!
//! let person = document.root().element("person").unwrap();
//! assert_eq!(person.string("name"), Some("John"));
//! assert_eq!(document.end_keyword(), Some("End"));
//!
//! assert_eq!(
//!     to_string(&document),
//!     "Root\n\tPerson\n\t\tName John\n\t\tAge 30\n\tEnd\nEnd"
//! );
//! assert_eq!(
//!     to_string_minified(&document),
//!     "Root\nPerson\nName John\nAge 30\n-\n-"
//! );
//! ```
//!
//! ### Building Documents
//!
//! ```rust
//! use sml::{sml, Document, Element};
//!
//! let mut root = Element::new("Root");
//! root.add_element("Person").add_string("Name", "John");
//!
//! assert_eq!(root, sml!("Root" { "Person" { "Name" => "John"; } }));
//! assert_eq!(
//!     Document::new(root).to_string(),
//!     "Root\n\tPerson\n\t\tName John\n\tEnd\nEnd"
//! );
//! ```
//!
//! ### Keeping the Original Formatting
//!
//! ```rust
//! use sml::{from_str_preserving, to_string};
//!
//! let text = "# settings\nRoot\n    Port 8080   # default\nEnd\n";
//! let document = from_str_preserving(text).unwrap();
//! assert_eq!(to_string(&document), text);
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Nesting depth is bounded while parsing, so hostile input fails with an error
//!   instead of exhausting the stack
//! - Attributes always hold at least one value; serialization cannot fail
//!
//! ## Format Specification
//!
//! See the [`format`] module for the grammar, value escaping and error messages.

pub mod cursor;
pub mod de;
pub mod document;
pub mod error;
pub mod format;
pub mod macros;
pub mod node;
pub mod options;
pub mod ser;
pub mod wsv;

pub use de::Parser;
pub use document::Document;
pub use error::{Error, ParseErrorKind, Result, WsvErrorKind};
pub use node::{Attribute, Element, IntoValue, Node, NodeLayout};
pub use options::{ParseOptions, SerializeOptions};
pub use ser::Serializer;
pub use wsv::LineLayout;

use std::io;
use tracing::debug;

/// Parses an SML document, keeping only its structure.
///
/// # Examples
///
/// ```rust
/// use sml::from_str;
///
/// let document = from_str("Root\n  Name John\nEnd").unwrap();
/// assert_eq!(document.root().string("Name"), Some("John"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Wsv`] if a line cannot be tokenized and [`Error::Parse`] if the
/// lines do not form a single, closed root element.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Document> {
    from_str_with_options(s, ParseOptions::default())
}

/// Parses an SML document, retaining whitespace, comments and empty lines.
///
/// Writing the result with [`to_string`] reproduces `s`, apart from values whose
/// quoting was not canonical.
///
/// # Errors
///
/// See [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_preserving(s: &str) -> Result<Document> {
    from_str_with_options(s, ParseOptions::preserving())
}

/// Parses an SML document with custom options.
///
/// # Examples
///
/// ```rust
/// use sml::{from_str_with_options, ParseOptions, ParseErrorKind};
///
/// let options = ParseOptions::new().with_max_depth(1);
/// let err = from_str_with_options("A\nB\nEnd\nEnd", options).unwrap_err();
/// assert_eq!(err.parse_kind(), Some(&ParseErrorKind::MaxDepthExceeded(1)));
/// ```
///
/// # Errors
///
/// See [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: ParseOptions) -> Result<Document> {
    debug!(
        bytes = s.len(),
        preserve = options.preserve_formatting,
        "parsing SML document"
    );
    let document = Parser::new(s, options)?.parse()?;
    debug!(end_keyword = ?document.end_keyword(), "parsed SML document");
    Ok(document)
}

/// Parses an SML document from UTF-8 bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not valid SML.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Document> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Parses an SML document from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use sml::from_reader;
/// use std::io::Cursor;
///
/// let document = from_reader(Cursor::new(b"Root\nEnd")).unwrap();
/// assert_eq!(document.root().name(), "Root");
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid SML.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Document>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Serializes a document with its indentation and end keyword.
///
/// Retained formatting from a preserving parse is written back as it was read.
#[must_use]
pub fn to_string(document: &Document) -> String {
    to_string_with_options(document, &SerializeOptions::default())
}

/// Serializes a document without indentation, closing every element with `-`.
///
/// # Examples
///
/// ```rust
/// use sml::{from_str, to_string_minified};
///
/// let document = from_str("Root\n  Person\n    Name John\n  End\nEnd").unwrap();
/// assert_eq!(to_string_minified(&document), "Root\nPerson\nName John\n-\n-");
/// ```
#[must_use]
pub fn to_string_minified(document: &Document) -> String {
    to_string_with_options(document, &SerializeOptions::minified())
}

/// Serializes a document with custom options.
#[must_use]
pub fn to_string_with_options(document: &Document, options: &SerializeOptions) -> String {
    debug!(
        minified = options.minified,
        preserve = options.preserve_formatting,
        "serializing SML document"
    );
    let mut serializer = Serializer::new(options.clone());
    serializer.serialize_document(document);
    serializer.into_inner()
}

/// Writes a document to a writer.
///
/// # Examples
///
/// ```rust
/// use sml::{to_writer, Document, Element};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Document::new(Element::new("Root"))).unwrap();
/// assert_eq!(buffer, b"Root\nEnd");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, document: &Document) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, document, &SerializeOptions::default())
}

/// Writes a document to a writer with custom options.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(
    mut writer: W,
    document: &Document,
    options: &SerializeOptions,
) -> Result<()>
where
    W: io::Write,
{
    let sml_string = to_string_with_options(document, options);
    writer
        .write_all(sml_string.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERSON: &str = "Root\n  Person\n    Name John\n    Age 30\n  End\nEnd";

    #[test]
    fn test_parse_person() {
        let document = from_str(PERSON).unwrap();
        let root = document.root();
        assert_eq!(root.name(), "Root");
        assert_eq!(root.nodes().len(), 1);

        let person = root.element("Person").unwrap();
        assert_eq!(person.string("Name"), Some("John"));
        assert_eq!(person.string("Age"), Some("30"));
        assert_eq!(document.end_keyword(), Some("End"));
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let document = from_str(PERSON).unwrap();
        let back = from_str(&to_string(&document)).unwrap();
        assert_eq!(document, back);
    }

    #[test]
    fn test_minified_roundtrip() {
        let document = from_str(PERSON).unwrap();
        let minified = to_string_minified(&document);
        let back = from_str(&minified).unwrap();
        assert_eq!(back.root(), document.root());
        assert_eq!(back.end_keyword(), None);
        assert_eq!(to_string_minified(&back), minified);
    }

    #[test]
    fn test_preserving_roundtrip() {
        let text = "Root  # the root\r\n\r\n\tPerson\r\n\t\tName John\r\n\tEnd\r\nEnd\r\n";
        let document = from_str_preserving(text).unwrap();
        assert_eq!(to_string(&document), text);
    }

    #[test]
    fn test_from_slice_and_reader() {
        let document = from_slice(PERSON.as_bytes()).unwrap();
        assert!(document.root().has_element("person"));

        let document = from_reader(std::io::Cursor::new(PERSON)).unwrap();
        assert!(document.root().has_element("person"));

        assert!(matches!(from_slice(&[0xff, 0xfe]), Err(Error::Custom(_))));
    }

    #[test]
    fn test_writer() {
        let document = from_str(PERSON).unwrap();
        let mut buffer = Vec::new();
        to_writer_with_options(&mut buffer, &document, &SerializeOptions::minified()).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), to_string_minified(&document));
    }
}

//! SML parsing.
//!
//! This module provides the [`Parser`] that rebuilds a [`Document`] from SML text.
//!
//! ## Grammar
//!
//! Every non-empty line is classified by its number of values:
//!
//! - one value equal to the end keyword (case-insensitive): closes the current element
//! - one value: opens an element with that name
//! - two or more values: an attribute, named by the first value
//!
//! The end keyword is detected from the last single-value line of the document, so
//! `End`, `Ende` or `-` all work as long as they are used consistently.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use sml::from_str;
//!
//! let document = from_str("Root\n  Person\n    Name John\n  End\nEnd").unwrap();
//! let person = document.root().element("person").unwrap();
//! assert_eq!(person.string("name"), Some("John"));
//! ```
//!
//! ## Formatting Retention
//!
//! With [`ParseOptions::preserve_formatting`] set, every node keeps the whitespace,
//! comments and empty lines it was written with, so the default serializer can
//! reproduce the original text.

use crate::cursor::LineCursor;
use crate::node::{eq_ignore_case, Attribute, Element, NodeLayout};
use crate::wsv::{self, LineLayout, WsvLine};
use crate::{Document, Error, ParseErrorKind, ParseOptions, Result};

/// What one non-empty line turned out to be.
#[derive(Debug)]
enum LineItem {
    Element(Element),
    Attribute(Attribute),
    End(Option<NodeLayout>),
}

/// The SML parser.
///
/// Created via [`Parser::new`], consumed by [`Parser::parse`].
pub struct Parser {
    cursor: LineCursor,
    options: ParseOptions,
    depth: usize,
}

impl Parser {
    /// Tokenizes `content` and prepares a parser over it.
    ///
    /// # Errors
    ///
    /// Returns an error if a line is not valid WSV, if the content holds no values
    /// at all ("Root element expected"), or if no end keyword can be detected.
    pub fn new(content: &str, options: ParseOptions) -> Result<Self> {
        let lines = wsv::parse_lines(content, options.preserve_formatting)?;
        if lines.iter().all(WsvLine::is_empty) {
            return Err(Error::parse(
                lines.len().max(1),
                ParseErrorKind::RootElementExpected,
            ));
        }

        Ok(Parser {
            cursor: LineCursor::new(lines)?,
            options,
            depth: 0,
        })
    }

    /// The end keyword detected for this document.
    #[must_use]
    pub fn end_keyword(&self) -> Option<&str> {
        self.cursor.end_keyword()
    }

    /// Parses the whole document.
    ///
    /// # Errors
    ///
    /// Returns the first grammar fault found, positioned at its 1-based line.
    pub fn parse(mut self) -> Result<Document> {
        let leading = self.skip_empty_lines();
        let Some(line) = self.cursor.next_line() else {
            return Err(self.cursor.error(ParseErrorKind::RootElementExpected));
        };

        let root = match self.read_node(line, leading)? {
            LineItem::Element(element) => element,
            LineItem::Attribute(_) | LineItem::End(_) => {
                return Err(self
                    .cursor
                    .last_line_error(ParseErrorKind::InvalidRootElementStart))
            }
        };

        let trailing = self.skip_empty_lines();
        if self.cursor.has_line() {
            return Err(self.cursor.error(ParseErrorKind::OnlyOneRootElementAllowed));
        }

        let mut document = Document::new(root);
        document.set_end_keyword(self.cursor.end_keyword());
        document.set_trailing_lines(trailing);
        Ok(document)
    }

    /// Consumes empty lines, returning their layouts when formatting is retained.
    fn skip_empty_lines(&mut self) -> Vec<LineLayout> {
        let mut layouts = Vec::new();
        while self.cursor.is_empty_line() {
            if let Some(layout) = self.cursor.next_line().and_then(|line| line.layout) {
                layouts.push(layout);
            }
        }
        layouts
    }

    fn is_end_keyword(&self, value: Option<&str>) -> bool {
        match (value, self.cursor.end_keyword()) {
            (Some(value), Some(keyword)) => eq_ignore_case(value, keyword),
            (value, keyword) => value == keyword,
        }
    }

    fn read_node(&mut self, line: WsvLine, leading: Vec<LineLayout>) -> Result<LineItem> {
        let layout = line.layout.map(|line| NodeLayout {
            empty_lines_before: leading,
            line,
        });
        let count = line.values.len();
        let mut values = line.values.into_iter();
        let first = values.next().flatten();

        if count == 1 && self.is_end_keyword(first.as_deref()) {
            return Ok(LineItem::End(layout));
        }

        if count == 1 {
            let name = first.ok_or_else(|| {
                self.cursor
                    .last_line_error(ParseErrorKind::NullElementName)
            })?;
            let mut element = Element::new(name);
            element.set_start_layout(layout);
            self.read_element_content(&mut element)?;
            Ok(LineItem::Element(element))
        } else {
            let name = first.ok_or_else(|| {
                self.cursor
                    .last_line_error(ParseErrorKind::NullAttributeName)
            })?;
            let mut attribute = Attribute::new(name, values.collect())?;
            attribute.set_layout(layout);
            Ok(LineItem::Attribute(attribute))
        }
    }

    fn read_element_content(&mut self, element: &mut Element) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(self
                .cursor
                .last_line_error(ParseErrorKind::MaxDepthExceeded(self.options.max_depth)));
        }

        loop {
            let leading = self.skip_empty_lines();
            let Some(line) = self.cursor.next_line() else {
                return Err(self.cursor.last_line_error(ParseErrorKind::ElementNotClosed(
                    element.name().to_string(),
                )));
            };

            match self.read_node(line, leading)? {
                LineItem::End(layout) => {
                    element.set_end_layout(layout);
                    break;
                }
                LineItem::Element(child) => element.add(child),
                LineItem::Attribute(attribute) => element.add(attribute),
            }
        }

        self.depth -= 1;
        Ok(())
    }
}

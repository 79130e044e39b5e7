//! SML serialization.
//!
//! This module provides the [`Serializer`] that writes a [`Document`] as SML text.
//!
//! ## Output Modes
//!
//! - **Default**: one line per node, indented with the document's indentation unit per
//!   nesting level and closed with its end keyword. Nodes that carry retained layout
//!   from a preserving parse are written exactly as they were read.
//! - **Canonical**: like the default, but retained layout is ignored.
//! - **Minified**: no indentation, no retained layout, and every end line is the null
//!   marker `-`. This is the shortest text that parses back to the same tree.
//!
//! Value escaping is left entirely to [`crate::wsv`].
//!
//! ## Usage
//!
//! ```rust
//! use sml::{Document, Element, SerializeOptions, Serializer};
//!
//! let mut root = Element::new("Root");
//! root.add_string("Name", "John Smith");
//! let document = Document::new(root);
//!
//! let mut serializer = Serializer::new(SerializeOptions::minified());
//! serializer.serialize_document(&document);
//! assert_eq!(serializer.into_inner(), "Root\nName \"John Smith\"\n-");
//! ```

use crate::node::{Attribute, Element, Node, NodeLayout};
use crate::wsv::{self, LineLayout};
use crate::{Document, SerializeOptions};
use std::iter;

/// The SML serializer.
///
/// Writes newline-terminated lines; [`Serializer::into_inner`] drops the final newline.
pub struct Serializer {
    output: String,
    options: SerializeOptions,
}

/// Per-document settings resolved from the options.
struct Style<'a> {
    indentation: &'a str,
    end_keyword: Option<&'a str>,
    preserve: bool,
}

impl Serializer {
    pub fn new(options: SerializeOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(mut self) -> String {
        if self.output.ends_with('\n') {
            self.output.pop();
        }
        self.output
    }

    pub fn serialize_document(&mut self, document: &Document) {
        let style = if self.options.minified {
            Style {
                indentation: "",
                end_keyword: None,
                preserve: false,
            }
        } else {
            Style {
                indentation: document.default_indentation(),
                end_keyword: document.end_keyword(),
                preserve: self.options.preserve_formatting,
            }
        };

        self.write_element(document.root(), 0, &style);

        if style.preserve {
            for line in document.trailing_lines() {
                self.write_empty_line(line);
            }
        }
    }

    fn write_element(&mut self, element: &Element, level: usize, style: &Style<'_>) {
        self.write_node_line(
            level,
            style,
            element.start_layout(),
            iter::once(Some(element.name())),
        );

        for child in element.nodes() {
            match child {
                Node::Element(child) => self.write_element(child, level + 1, style),
                Node::Attribute(attribute) => self.write_attribute(attribute, level + 1, style),
            }
        }

        self.write_node_line(
            level,
            style,
            element.end_layout(),
            iter::once(style.end_keyword),
        );
    }

    fn write_attribute(&mut self, attribute: &Attribute, level: usize, style: &Style<'_>) {
        let values = iter::once(Some(attribute.name()))
            .chain(attribute.values().iter().map(Option::as_deref));
        self.write_node_line(level, style, attribute.layout(), values);
    }

    fn write_node_line<'v, I>(
        &mut self,
        level: usize,
        style: &Style<'_>,
        layout: Option<&NodeLayout>,
        values: I,
    ) where
        I: IntoIterator<Item = Option<&'v str>>,
    {
        match layout.filter(|_| style.preserve) {
            Some(layout) => {
                for line in &layout.empty_lines_before {
                    self.write_empty_line(line);
                }
                wsv::write_line(&mut self.output, values, &layout.line);
            }
            None => {
                for _ in 0..level {
                    self.output.push_str(style.indentation);
                }
                wsv::write_values(&mut self.output, values);
            }
        }
        self.output.push('\n');
    }

    fn write_empty_line(&mut self, layout: &LineLayout) {
        wsv::write_line(&mut self.output, iter::empty(), layout);
        self.output.push('\n');
    }
}

//! The SML document: a root element plus serialization settings.

use crate::node::Element;
use crate::wsv::{self, LineLayout};
use crate::{Error, ParseOptions, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Indentation unit used when a document does not specify one.
pub const DEFAULT_INDENTATION: &str = "\t";

/// End keyword of newly created documents.
pub const DEFAULT_END_KEYWORD: &str = "End";

/// An SML document.
///
/// Owns exactly one root [`Element`]. The `default_indentation` is repeated once per
/// nesting level by the default serializer, and the `end_keyword` closes every element.
/// An end keyword of `None` writes the null marker `-` instead.
///
/// # Examples
///
/// ```rust
/// use sml::{Document, Element};
///
/// let mut root = Element::new("Root");
/// root.add_element("Person").add_string("Name", "John");
///
/// let document = Document::new(root);
/// assert_eq!(document.to_string(), "Root\n\tPerson\n\t\tName John\n\tEnd\nEnd");
/// assert_eq!(document.to_string_minified(), "Root\nPerson\nName John\n-\n-");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DocumentData")]
pub struct Document {
    root: Element,
    default_indentation: String,
    end_keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    trailing_lines: Vec<LineLayout>,
}

#[derive(Deserialize)]
struct DocumentData {
    root: Element,
    default_indentation: String,
    end_keyword: Option<String>,
    #[serde(default)]
    trailing_lines: Vec<LineLayout>,
}

impl TryFrom<DocumentData> for Document {
    type Error = Error;

    fn try_from(data: DocumentData) -> Result<Self> {
        let mut document = Document::new(data.root);
        document.set_default_indentation(&data.default_indentation)?;
        document.end_keyword = data.end_keyword;
        document.trailing_lines = data.trailing_lines;
        Ok(document)
    }
}

impl Document {
    #[must_use]
    pub fn new(root: Element) -> Self {
        Document {
            root,
            default_indentation: DEFAULT_INDENTATION.to_string(),
            end_keyword: Some(DEFAULT_END_KEYWORD.to_string()),
            trailing_lines: Vec::new(),
        }
    }

    /// Parses SML text, keeping only its structure.
    ///
    /// # Errors
    ///
    /// See [`crate::from_str`].
    pub fn parse(content: &str) -> Result<Self> {
        crate::from_str(content)
    }

    /// Parses SML text, retaining whitespace, comments and empty lines.
    ///
    /// # Errors
    ///
    /// See [`crate::from_str`].
    pub fn parse_preserving(content: &str) -> Result<Self> {
        crate::from_str_with_options(content, ParseOptions::preserving())
    }

    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    #[must_use]
    pub fn into_root(self) -> Element {
        self.root
    }

    #[must_use]
    pub fn default_indentation(&self) -> &str {
        &self.default_indentation
    }

    /// Sets the indentation unit. An empty string disables indentation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndentation`] if `indentation` contains anything
    /// but WSV whitespace.
    pub fn set_default_indentation(&mut self, indentation: &str) -> Result<()> {
        if !indentation.chars().all(wsv::is_whitespace) {
            return Err(Error::InvalidIndentation(indentation.to_string()));
        }
        self.default_indentation = indentation.to_string();
        Ok(())
    }

    #[must_use]
    pub fn end_keyword(&self) -> Option<&str> {
        self.end_keyword.as_deref()
    }

    pub fn set_end_keyword(&mut self, end_keyword: Option<&str>) {
        self.end_keyword = end_keyword.map(str::to_string);
    }

    /// Empty lines after the root element, retained by a preserving parse.
    #[must_use]
    pub fn trailing_lines(&self) -> &[LineLayout] {
        &self.trailing_lines
    }

    pub fn set_trailing_lines(&mut self, lines: Vec<LineLayout>) {
        self.trailing_lines = lines;
    }

    /// Serializes without indentation and with null end lines.
    #[must_use]
    pub fn to_string_minified(&self) -> String {
        crate::to_string_minified(self)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_string(self))
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Document::parse(s)
    }
}

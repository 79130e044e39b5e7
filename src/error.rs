//! Error types for SML parsing and tree construction.
//!
//! This module provides error reporting with the line information needed to locate
//! a fault in an SML document.
//!
//! ## Error Categories
//!
//! - **Parse Errors**: Structurally invalid SML, reported with a 1-based line number
//! - **WSV Errors**: A line could not be tokenized (bad quoting), with line and column
//! - **Construction Errors**: Misuse of the tree-building API, such as an attribute
//!   without values. These never carry a line.
//! - **I/O Errors**: Reading or writing failures
//!
//! ## Examples
//!
//! ```rust
//! use sml::{from_str, Error, ParseErrorKind};
//!
//! let err = from_str("").unwrap_err();
//! assert_eq!(err.line(), Some(1));
//! assert_eq!(err.parse_kind(), Some(&ParseErrorKind::RootElementExpected));
//! assert_eq!(err.to_string(), "Root element expected (1)");
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The token lines do not form a valid SML document.
    #[error("{kind} ({line})")]
    Parse { line: usize, kind: ParseErrorKind },

    /// A line could not be split into WSV values.
    #[error("{kind} ({line}, {column})")]
    Wsv {
        line: usize,
        column: usize,
        kind: WsvErrorKind,
    },

    /// An attribute was built without any value.
    #[error("Attribute \"{0}\" must contain at least one value")]
    EmptyAttribute(String),

    /// A default indentation containing non-whitespace characters.
    #[error("Indentation value {0:?} contains non-whitespace characters")]
    InvalidIndentation(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

/// The fixed set of SML grammar faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Root element expected")]
    RootElementExpected,

    #[error("Only one root element allowed")]
    OnlyOneRootElementAllowed,

    #[error("Invalid root element start")]
    InvalidRootElementStart,

    #[error("Null value as element name is not allowed")]
    NullElementName,

    #[error("Null value as attribute name is not allowed")]
    NullAttributeName,

    #[error("Element \"{0}\" not closed")]
    ElementNotClosed(String),

    #[error("End keyword could not be detected")]
    EndKeywordNotDetected,

    #[error("Maximum nesting depth of {0} exceeded")]
    MaxDepthExceeded(usize),
}

/// Faults raised while splitting a line into WSV values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WsvErrorKind {
    #[error("Invalid double quote in value")]
    InvalidDoubleQuote,

    #[error("String not closed")]
    StringNotClosed,

    #[error("Invalid character after string")]
    InvalidCharacterAfterString,
}

impl Error {
    /// Creates a parse error at a 1-based line number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sml::{Error, ParseErrorKind};
    ///
    /// let err = Error::parse(3, ParseErrorKind::OnlyOneRootElementAllowed);
    /// assert_eq!(err.to_string(), "Only one root element allowed (3)");
    /// ```
    pub fn parse(line: usize, kind: ParseErrorKind) -> Self {
        Error::Parse { line, kind }
    }

    /// Creates a tokenizer error at a 1-based line and column.
    pub fn wsv(line: usize, column: usize, kind: WsvErrorKind) -> Self {
        Error::Wsv { line, column, kind }
    }

    /// Creates the construction error for an attribute without values.
    pub fn empty_attribute(name: &str) -> Self {
        Error::EmptyAttribute(name.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the 1-based line the error points at, if it has one.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Parse { line, .. } | Error::Wsv { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns the grammar fault for parse errors.
    #[must_use]
    pub fn parse_kind(&self) -> Option<&ParseErrorKind> {
        match self {
            Error::Parse { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Read position over tokenized lines, with end keyword detection.
//!
//! The end keyword of a document is the token that closes the root element, which
//! the grammar places on the last non-empty line. [`LineCursor::new`] finds it once by
//! scanning backward for the first line holding exactly one token.
//!
//! ```rust
//! use sml::{cursor::LineCursor, wsv};
//!
//! let lines = wsv::parse_lines("Root\n  Name John\nStop\n", false).unwrap();
//! let mut cursor = LineCursor::new(lines).unwrap();
//! assert_eq!(cursor.end_keyword(), Some("Stop"));
//!
//! assert!(cursor.has_line());
//! assert_eq!(cursor.next_line().unwrap().values.len(), 1);
//! ```

use crate::wsv::WsvLine;
use crate::{Error, ParseErrorKind, Result};

/// Tokenized lines plus the index of the next line to read.
#[derive(Debug)]
pub struct LineCursor {
    lines: Vec<WsvLine>,
    index: usize,
    end_keyword: Option<String>,
}

impl LineCursor {
    /// Creates a cursor positioned on the first line.
    ///
    /// # Errors
    ///
    /// Returns a parse error at the last line if no end keyword can be detected:
    /// no line has exactly one token, or a line with several tokens comes after the
    /// last single-token line.
    pub fn new(lines: Vec<WsvLine>) -> Result<Self> {
        let end_keyword = detect_end_keyword(&lines)
            .ok_or_else(|| Error::parse(lines.len().max(1), ParseErrorKind::EndKeywordNotDetected))?;

        tracing::trace!(?end_keyword, lines = lines.len(), "detected end keyword");

        Ok(LineCursor {
            lines,
            index: 0,
            end_keyword,
        })
    }

    /// The detected end keyword; `None` when documents close with the null marker.
    #[must_use]
    pub fn end_keyword(&self) -> Option<&str> {
        self.end_keyword.as_deref()
    }

    #[must_use]
    pub fn has_line(&self) -> bool {
        self.index < self.lines.len()
    }

    /// Returns `true` if the current line exists and holds no values.
    #[must_use]
    pub fn is_empty_line(&self) -> bool {
        self.lines.get(self.index).is_some_and(WsvLine::is_empty)
    }

    /// Consumes the current line.
    pub fn next_line(&mut self) -> Option<WsvLine> {
        let line = self.lines.get_mut(self.index).map(std::mem::take)?;
        self.index += 1;
        Some(line)
    }

    /// Zero-based index of the next line to read.
    #[must_use]
    pub fn line_index(&self) -> usize {
        self.index
    }

    /// A parse error at the current line.
    pub(crate) fn error(&self, kind: ParseErrorKind) -> Error {
        Error::parse(self.line_number(self.index), kind)
    }

    /// A parse error at the most recently consumed line.
    pub(crate) fn last_line_error(&self, kind: ParseErrorKind) -> Error {
        Error::parse(self.line_number(self.index.saturating_sub(1)), kind)
    }

    // 1-based, clamped to the last line
    fn line_number(&self, index: usize) -> usize {
        index.min(self.lines.len().saturating_sub(1)) + 1
    }
}

fn detect_end_keyword(lines: &[WsvLine]) -> Option<Option<String>> {
    for line in lines.iter().rev() {
        match line.values.as_slice() {
            [] => continue,
            [keyword] => return Some(keyword.clone()),
            _ => return None,
        }
    }
    None
}

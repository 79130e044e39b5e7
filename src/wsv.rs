//! WSV (Whitespace-Separated Values) line tokenization.
//!
//! SML documents are sequences of WSV lines. This module splits text into lines and
//! every line into optional string values, and writes values back with WSV escaping.
//!
//! ## Value Syntax
//!
//! | Text | Value |
//! |------|-------|
//! | `abc` | `Some("abc")` |
//! | `-` | `None` (the null marker) |
//! | `""` | `Some("")` |
//! | `"a b"` | `Some("a b")` |
//! | `"say ""hi"""` | `Some("say \"hi\"")` |
//! | `"line1"/"line2"` | `Some("line1\nline2")` |
//!
//! Everything after an unquoted `#` is a comment.
//!
//! ## Examples
//!
//! ```rust
//! use sml::wsv;
//!
//! let lines = wsv::parse_lines("a \"b c\" - # note", false).unwrap();
//! assert_eq!(
//!     lines[0].values,
//!     vec![Some("a".to_string()), Some("b c".to_string()), None]
//! );
//!
//! assert_eq!(wsv::serialize_value(Some("b c")), "\"b c\"");
//! assert_eq!(wsv::serialize_value(None), "-");
//! ```

use crate::{Error, Result, WsvErrorKind};
use serde::{Deserialize, Serialize};

/// The textual form of a null value.
pub const NULL_MARKER: &str = "-";

/// Whitespace and comment retained for one line by a preserving parse.
///
/// `whitespaces[i]` is the whitespace written before value `i`; the entry after the
/// last value holds the trailing whitespace. `None` means no whitespace was present.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineLayout {
    pub whitespaces: Vec<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// One tokenized line.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct WsvLine {
    pub values: Vec<Option<String>>,
    /// Present only when the line was read in preserving mode.
    pub layout: Option<LineLayout>,
}

impl WsvLine {
    /// Returns `true` for blank and comment-only lines.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Returns `true` if `ch` separates WSV values.
#[inline]
#[must_use]
pub const fn is_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{0085}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Splits `content` into lines and every line into values.
///
/// With `preserve` set, every returned line carries its [`LineLayout`].
///
/// # Errors
///
/// Returns [`Error::Wsv`] for an unterminated string, a quote inside an unquoted
/// value, or a character glued to the end of a quoted string.
pub fn parse_lines(content: &str, preserve: bool) -> Result<Vec<WsvLine>> {
    content
        .split('\n')
        .enumerate()
        .map(|(index, line)| LineTokenizer::new(line, index + 1, preserve).tokenize())
        .collect()
}

struct LineTokenizer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    preserve: bool,
}

impl<'a> LineTokenizer<'a> {
    fn new(input: &'a str, line: usize, preserve: bool) -> Self {
        LineTokenizer {
            input,
            position: 0,
            line,
            preserve,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn error(&self, kind: WsvErrorKind) -> Error {
        let column = self.input[..self.position].chars().count() + 1;
        Error::wsv(self.line, column, kind)
    }

    fn tokenize(mut self) -> Result<WsvLine> {
        let mut values = Vec::new();
        let mut layout = LineLayout::default();

        loop {
            let whitespace = self.read_whitespace();
            layout.whitespaces.push(whitespace);

            match self.peek_char() {
                None => break,
                Some('#') => {
                    self.next_char();
                    layout.comment = Some(self.rest().to_string());
                    break;
                }
                Some('"') => values.push(Some(self.read_string()?)),
                Some(_) => values.push(self.read_value()?),
            }
        }

        Ok(WsvLine {
            values,
            layout: self.preserve.then_some(layout),
        })
    }

    fn read_whitespace(&mut self) -> Option<String> {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if !is_whitespace(ch) {
                break;
            }
            self.next_char();
        }

        if self.preserve && self.position > start {
            Some(self.input[start..self.position].to_string())
        } else {
            None
        }
    }

    fn read_string(&mut self) -> Result<String> {
        self.next_char(); // opening quote
        let mut result = String::new();

        loop {
            match self.next_char() {
                None => return Err(self.error(WsvErrorKind::StringNotClosed)),
                Some('"') => {
                    if self.rest().starts_with('"') {
                        self.next_char();
                        result.push('"');
                    } else if self.rest().starts_with("/\"") {
                        self.position += 2;
                        result.push('\n');
                    } else {
                        break;
                    }
                }
                Some(ch) => result.push(ch),
            }
        }

        match self.peek_char() {
            Some(ch) if !is_whitespace(ch) && ch != '#' => {
                Err(self.error(WsvErrorKind::InvalidCharacterAfterString))
            }
            _ => Ok(result),
        }
    }

    fn read_value(&mut self) -> Result<Option<String>> {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if is_whitespace(ch) || ch == '#' {
                break;
            }
            if ch == '"' {
                return Err(self.error(WsvErrorKind::InvalidDoubleQuote));
            }
            self.next_char();
        }

        let value = &self.input[start..self.position];
        Ok((value != NULL_MARKER).then(|| value.to_string()))
    }
}

#[inline]
fn needs_quotes(s: &str) -> bool {
    s.is_empty()
        || s == NULL_MARKER
        || s.chars()
            .any(|ch| ch == '"' || ch == '#' || ch == '\n' || is_whitespace(ch))
}

/// Appends one escaped value to `output`.
pub fn write_value(output: &mut String, value: Option<&str>) {
    match value {
        None => output.push_str(NULL_MARKER),
        Some(s) if !needs_quotes(s) => output.push_str(s),
        Some(s) => {
            output.push('"');
            for ch in s.chars() {
                match ch {
                    '"' => output.push_str("\"\""),
                    '\n' => output.push_str("\"/\""),
                    _ => output.push(ch),
                }
            }
            output.push('"');
        }
    }
}

/// Appends escaped values separated by single spaces.
pub fn write_values<'a, I>(output: &mut String, values: I)
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        write_value(output, value);
    }
}

/// Appends values using the whitespace and comment retained in `layout`.
///
/// Missing whitespace between values falls back to a single space, so a layout that
/// no longer matches the value count still produces a valid line.
pub fn write_line<'a, I>(output: &mut String, values: I, layout: &LineLayout)
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut count = 0;
    for (i, value) in values.into_iter().enumerate() {
        match layout.whitespaces.get(i) {
            Some(Some(whitespace)) => output.push_str(whitespace),
            _ if i > 0 => output.push(' '),
            _ => {}
        }
        write_value(output, value);
        count = i + 1;
    }

    if let Some(Some(whitespace)) = layout.whitespaces.get(count) {
        output.push_str(whitespace);
    }
    if let Some(comment) = &layout.comment {
        output.push('#');
        output.push_str(comment);
    }
}

/// Escapes a single value.
#[must_use]
pub fn serialize_value(value: Option<&str>) -> String {
    let mut output = String::new();
    write_value(&mut output, value);
    output
}

/// Escapes values and joins them into one line.
#[must_use]
pub fn serialize_values(values: &[Option<String>]) -> String {
    let mut output = String::new();
    write_values(&mut output, values.iter().map(Option::as_deref));
    output
}

/// Writes values back with their retained layout.
#[must_use]
pub fn serialize_line(values: &[Option<String>], layout: &LineLayout) -> String {
    let mut output = String::new();
    write_line(&mut output, values.iter().map(Option::as_deref), layout);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(line: &str) -> Vec<Option<String>> {
        parse_lines(line, false).unwrap().remove(0).values
    }

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_split_lines() {
        let lines = parse_lines("a b\n\n  # only a comment\nc", false).unwrap();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].values, vec![s("a"), s("b")]);
        assert!(lines[1].is_empty());
        assert!(lines[2].is_empty());
        assert_eq!(lines[3].values, vec![s("c")]);
        assert!(lines.iter().all(|line| line.layout.is_none()));
    }

    #[test]
    fn test_empty_content_is_one_empty_line() {
        let lines = parse_lines("", false).unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
    }

    #[test]
    fn test_null_and_empty_string() {
        assert_eq!(values("- \"\" \"-\""), vec![None, s(""), s("-")]);
    }

    #[test]
    fn test_quoted_escapes() {
        assert_eq!(values(r#""say ""hi""""#), vec![s("say \"hi\"")]);
        assert_eq!(values(r#""line1"/"line2""#), vec![s("line1\nline2")]);
        assert_eq!(values("\"a # b\""), vec![s("a # b")]);
    }

    #[test]
    fn test_comment_ends_unquoted_value() {
        assert_eq!(values("abc#comment"), vec![s("abc")]);
        assert_eq!(values("x y # z w"), vec![s("x"), s("y")]);
    }

    #[test]
    fn test_unicode_whitespace_separates() {
        assert_eq!(values("a\u{3000}b\u{00A0}c"), vec![s("a"), s("b"), s("c")]);
        assert_eq!(values("a\r"), vec![s("a")]);
    }

    #[test]
    fn test_errors() {
        let err = parse_lines("ok\nab\"c", false).unwrap_err();
        assert_eq!(err, Error::wsv(2, 3, WsvErrorKind::InvalidDoubleQuote));

        let err = parse_lines("\"open", false).unwrap_err();
        assert_eq!(err, Error::wsv(1, 6, WsvErrorKind::StringNotClosed));

        let err = parse_lines("\"a\"b", false).unwrap_err();
        assert_eq!(
            err,
            Error::wsv(1, 4, WsvErrorKind::InvalidCharacterAfterString)
        );
    }

    #[test]
    fn test_serialize_value() {
        assert_eq!(serialize_value(None), "-");
        assert_eq!(serialize_value(Some("")), "\"\"");
        assert_eq!(serialize_value(Some("-")), "\"-\"");
        assert_eq!(serialize_value(Some("plain")), "plain");
        assert_eq!(serialize_value(Some("two words")), "\"two words\"");
        assert_eq!(serialize_value(Some("#tag")), "\"#tag\"");
        assert_eq!(serialize_value(Some("a\"b")), "\"a\"\"b\"");
        assert_eq!(serialize_value(Some("a\nb")), "\"a\"/\"b\"");
        assert_eq!(serialize_value(Some("tab\there")), "\"tab\there\"");
    }

    #[test]
    fn test_serialize_values() {
        let line = serialize_values(&[s("Name"), s("John Smith"), None, s("")]);
        assert_eq!(line, "Name \"John Smith\" - \"\"");
        assert_eq!(values(&line), vec![s("Name"), s("John Smith"), None, s("")]);
    }

    #[test]
    fn test_preserved_layout() {
        let text = "\t Name   \"John Smith\"  # who  ";
        let line = parse_lines(text, true).unwrap().remove(0);
        let layout = line.layout.clone().unwrap();
        assert_eq!(
            layout.whitespaces,
            vec![s("\t "), s("   "), s("  ")]
        );
        assert_eq!(layout.comment, s(" who  "));
        assert_eq!(serialize_line(&line.values, &layout), text);
    }

    #[test]
    fn test_preserved_layout_of_empty_line() {
        for text in ["", "   ", "  #note", "#"] {
            let line = parse_lines(text, true).unwrap().remove(0);
            assert!(line.is_empty());
            assert_eq!(serialize_line(&[], line.layout.as_ref().unwrap()), text);
        }
    }

    #[test]
    fn test_layout_with_changed_values_falls_back_to_spaces() {
        let layout = LineLayout {
            whitespaces: vec![s("  "), None],
            comment: None,
        };
        assert_eq!(serialize_line(&[s("a"), s("b"), s("c")], &layout), "  a b c");
    }
}

//! SML Format Reference
//!
//! This module documents the SML (Simple Markup Language) format as implemented by
//! this library. It contains no code.
//!
//! # Overview
//!
//! SML is a line-oriented tree format. Every line is a WSV (Whitespace-Separated
//! Values) line, and the number of values on a line decides what the line means.
//! Indentation carries no meaning; elements are closed with an end keyword instead.
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
//! # Lines
//!
//! | Values on the line | Meaning |
//! |--------------------|---------|
//! | none (blank or comment only) | ignored |
//! | one, equal to the end keyword | closes the innermost open element |
//! | one | opens an element with that name |
//! | two or more | attribute: first value is the name, the rest are its values |
//!
//! Element and attribute names are matched case-insensitively by the lookup API and
//! when recognizing the end keyword. Names may not be null.
//!
//! # End Keyword
//!
//! The keyword is not fixed. Whatever single value closes the root element, which must
//! be the last non-empty line, is used as the keyword for the whole document:
//!
//! ```text
//! Wurzel
//!   Name Hans
//! Ende
//! ```
//!
//! Minified documents use the null marker as keyword:
//!
//! ```text
//! Root
//! Name John
//! -
//! ```
//!
//! # WSV Values
//!
//! | Syntax | Value |
//! |--------|-------|
//! | `text` | the string `text` |
//! | `-` | null |
//! | `""` | the empty string |
//! | `"two words"` | a string containing whitespace |
//! | `"a""b"` | `a"b` (doubled quote) |
//! | `"a"/"b"` | `a`, line feed, `b` |
//! | `# ...` | comment until the end of the line |
//!
//! Values that are empty, equal `-`, or contain whitespace, `"`, `#` or a line feed are
//! written quoted; all others are written bare.
//!
//! # Errors
//!
//! Parse errors report the 1-based line nearest to the fault:
//!
//! | Message | Cause |
//! |---------|-------|
//! | `Root element expected` | no non-empty line |
//! | `Invalid root element start` | first line is an attribute or the end keyword |
//! | `Only one root element allowed` | content after the root's end line |
//! | `Element "X" not closed` | input ends inside element `X` |
//! | `Null value as element name is not allowed` | a lone `-` that is not the keyword |
//! | `Null value as attribute name is not allowed` | attribute line starting with `-` |
//! | `End keyword could not be detected` | the last non-empty line is not a single value |
//! | `Maximum nesting depth of N exceeded` | deeper nesting than the configured limit |
//!
//! A missing end line deep inside the tree is reported against an outer element,
//! because end lines carry no depth information.

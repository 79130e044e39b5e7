//! Configuration options for SML parsing and serialization.
//!
//! This module provides types to customize how documents are read and written:
//!
//! - [`ParseOptions`]: Formatting retention and nesting limits for the parser
//! - [`SerializeOptions`]: Output mode for the serializer
//!
//! ## Examples
//!
//! ```rust
//! use sml::{from_str_with_options, to_string_with_options, ParseOptions, SerializeOptions};
//!
//! let text = "Root\n  # a comment\n  Name John\nEnd";
//!
//! // Keep comments and whitespace
//! let document = from_str_with_options(text, ParseOptions::preserving()).unwrap();
//! assert_eq!(to_string_with_options(&document, &SerializeOptions::new()), text);
//!
//! // Ignore them when writing
//! let canonical = SerializeOptions::new().with_preserve_formatting(false);
//! assert_eq!(
//!     to_string_with_options(&document, &canonical),
//!     "Root\n\tName John\nEnd"
//! );
//! ```

/// Nesting limit applied by [`ParseOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Configuration options for SML parsing.
///
/// # Examples
///
/// ```rust
/// use sml::ParseOptions;
///
/// let options = ParseOptions::new();
/// assert!(!options.preserve_formatting);
/// assert_eq!(options.max_depth, 100);
///
/// let options = ParseOptions::preserving().with_max_depth(16);
/// assert!(options.preserve_formatting);
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Retain whitespace, comments and empty lines on the parsed nodes.
    pub preserve_formatting: bool,
    /// Deepest element nesting accepted before failing with a parse error.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            preserve_formatting: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Creates default options (structure only, nesting limit of 100).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that retain the original formatting.
    #[must_use]
    pub fn preserving() -> Self {
        ParseOptions {
            preserve_formatting: true,
            ..Default::default()
        }
    }

    /// Sets whether whitespace, comments and empty lines are retained on the nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sml::ParseOptions;
    ///
    /// let options = ParseOptions::new().with_preserve_formatting(true);
    /// assert_eq!(options, ParseOptions::preserving());
    /// ```
    #[must_use]
    pub fn with_preserve_formatting(mut self, preserve: bool) -> Self {
        self.preserve_formatting = preserve;
        self
    }

    /// Sets the deepest element nesting the parser accepts.
    ///
    /// Default is 100. The root element counts as depth 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sml::{from_str_with_options, ParseOptions};
    ///
    /// let options = ParseOptions::new().with_max_depth(2);
    /// assert!(from_str_with_options("A\nB\nEnd\nEnd", options.clone()).is_ok());
    /// assert!(from_str_with_options("A\nB\nC\nEnd\nEnd\nEnd", options).is_err());
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Configuration options for SML serialization.
///
/// The default writes with the document's indentation and end keyword, and
/// reuses any formatting retained by a preserving parse. Minified output drops
/// indentation, replaces every end keyword with `-` and ignores retained formatting.
///
/// # Examples
///
/// ```rust
/// use sml::SerializeOptions;
///
/// let options = SerializeOptions::new();
/// assert!(!options.minified);
/// assert!(options.preserve_formatting);
///
/// let options = SerializeOptions::minified();
/// assert!(options.minified);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Drop indentation and close every element with `-`.
    pub minified: bool,
    /// Write retained whitespace, comments and empty lines when present.
    pub preserve_formatting: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        SerializeOptions {
            minified: false,
            preserve_formatting: true,
        }
    }
}

impl SerializeOptions {
    /// Creates default options (document layout, retained formatting reused).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sml::SerializeOptions;
    ///
    /// let options = SerializeOptions::new();
    /// assert!(!options.minified);
    /// assert!(options.preserve_formatting);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for minified output.
    ///
    /// Indentation and retained formatting are dropped and every end line is `-`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sml::{from_str, to_string_with_options, SerializeOptions};
    ///
    /// let document = from_str("Root\n  Name John\nEnd").unwrap();
    /// let text = to_string_with_options(&document, &SerializeOptions::minified());
    /// assert_eq!(text, "Root\nName John\n-");
    /// ```
    #[must_use]
    pub fn minified() -> Self {
        SerializeOptions {
            minified: true,
            preserve_formatting: false,
        }
    }

    /// Sets whether formatting retained by a preserving parse is written back.
    ///
    /// Has no effect on minified output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sml::{from_str_preserving, to_string_with_options, SerializeOptions};
    ///
    /// let document = from_str_preserving("Root\n    Name John # who\nEnd").unwrap();
    /// let canonical = SerializeOptions::new().with_preserve_formatting(false);
    /// assert_eq!(
    ///     to_string_with_options(&document, &canonical),
    ///     "Root\n\tName John\nEnd"
    /// );
    /// ```
    #[must_use]
    pub fn with_preserve_formatting(mut self, preserve: bool) -> Self {
        self.preserve_formatting = preserve;
        self
    }
}

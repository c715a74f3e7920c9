//! Error types for properties parsing.
//!
//! Every failure aborts the whole parse: no partial document is ever
//! returned alongside an error.
//!
//! ## Error Categories
//!
//! - **Malformed entries**: a significant line in hierarchical mode has no `=`
//! - **Malformed escapes**: a flat-mode `\uXXXX` escape is truncated or not hex
//! - **Encoding errors**: the input bytes are not valid UTF-8
//! - **I/O errors**: reading the input stream failed
//! - **Option errors**: a processor configuration object could not be read
//!
//! ## Examples
//!
//! ```rust
//! use serde_props::{parse, Error};
//!
//! let err = parse(false, b"name=props\nbroken line\n").unwrap_err();
//! assert!(matches!(err, Error::MalformedEntry { line: 2, .. }));
//! assert!(err.to_string().contains("line 2"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while reading properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error while reading the input stream
    #[error("IO error: {0}")]
    Io(String),

    /// Input bytes are not valid UTF-8
    #[error("Invalid UTF-8 input at byte offset {offset}")]
    InvalidEncoding { offset: usize },

    /// A significant line has no `=` separator
    #[error("Malformed entry at line {line}: expected `key=value`, found {content:?}\nHelp: comment the line out with `#` or `!` if it is not a property")]
    MalformedEntry { line: usize, content: String },

    /// A `\uXXXX` escape in flat mode is not followed by four hex digits
    #[error("Malformed \\uXXXX escape at line {line}")]
    MalformedEscape { line: usize },

    /// The processor configuration could not be read
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a malformed-entry error for the given 1-based line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_props::Error;
    ///
    /// let err = Error::malformed_entry(3, "oops");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn malformed_entry(line: usize, content: &str) -> Self {
        Error::MalformedEntry {
            line,
            content: content.to_string(),
        }
    }

    /// Creates a malformed-escape error for the given 1-based line.
    pub fn malformed_escape(line: usize) -> Self {
        Error::MalformedEscape { line }
    }

    /// Creates an invalid-options error.
    pub fn invalid_options<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidOptions(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for stream reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::InvalidEncoding {
            offset: err.valid_up_to(),
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

/// Result type for every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_error_keeps_offset() {
        let bytes = [b'a', b'=', 0xff];
        let err: Error = std::str::from_utf8(&bytes).unwrap_err().into();
        assert_eq!(err, Error::InvalidEncoding { offset: 2 });
    }

    #[test]
    fn test_malformed_entry_message() {
        let err = Error::malformed_entry(7, "no separator");
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("\"no separator\""));
    }
}

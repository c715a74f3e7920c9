//! Reader configuration.
//!
//! - [`ParseOptions`]: which reader to use and whether values are typed
//! - [`ReaderKind`]: the two reader strategies (flat or hierarchical)
//!
//! Options can be built in code or read from a processor configuration
//! object using the keys `hierarchical` and `raw-data`:
//!
//! ```rust
//! use serde_props::{ParseOptions, ReaderKind};
//!
//! let options: ParseOptions =
//!     serde_json::from_str(r#"{"hierarchical": true, "raw-data": true}"#).unwrap();
//! assert_eq!(options.reader(), ReaderKind::Hierarchical);
//! assert!(options.raw_data);
//!
//! let options = ParseOptions::new().with_hierarchical(true);
//! assert!(!options.raw_data);
//! ```

use serde::{Deserialize, Serialize};

/// The reader strategy used to turn lines into a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReaderKind {
    /// One document key per property key, no nesting.
    #[default]
    Flat,
    /// Dotted keys become nested objects.
    Hierarchical,
}

/// Configuration for reading properties.
///
/// Both flags default to `false`: the flat reader with type inference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ParseOptions {
    /// Nest dotted keys into objects.
    pub hierarchical: bool,
    /// Keep values as the trimmed source text instead of inferring types.
    pub raw_data: bool,
}

impl ParseOptions {
    /// Creates default options (flat reader, typed values).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for the hierarchical reader with typed values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_props::{ParseOptions, ReaderKind};
    ///
    /// assert_eq!(ParseOptions::hierarchical().reader(), ReaderKind::Hierarchical);
    /// ```
    #[must_use]
    pub fn hierarchical() -> Self {
        ParseOptions {
            hierarchical: true,
            ..Default::default()
        }
    }

    /// Selects the hierarchical reader (`true`) or the flat one (`false`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_props::{ParseOptions, ReaderKind};
    ///
    /// let options = ParseOptions::hierarchical().with_hierarchical(false);
    /// assert_eq!(options.reader(), ReaderKind::Flat);
    /// ```
    #[must_use]
    pub fn with_hierarchical(mut self, hierarchical: bool) -> Self {
        self.hierarchical = hierarchical;
        self
    }

    /// Keeps values as text instead of inferring their types.
    #[must_use]
    pub fn with_raw_data(mut self, raw_data: bool) -> Self {
        self.raw_data = raw_data;
        self
    }

    /// The reader these options select.
    #[must_use]
    pub const fn reader(&self) -> ReaderKind {
        if self.hierarchical {
            ReaderKind::Hierarchical
        } else {
            ReaderKind::Flat
        }
    }
}

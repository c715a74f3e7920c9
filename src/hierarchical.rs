//! Hierarchical properties reader.
//!
//! Each significant line `a.b.c = value` becomes one single-branch fragment
//! `{"a": {"b": {"c": value}}}`, and the fragments are deep-merged left to
//! right into the final document:
//!
//! ```text
//! raw lines -> significant lines -> entries -> fragments -> merged document
//! ```
//!
//! Siblings under a shared prefix are merged, and a later scalar overwrites
//! an earlier one under the same key.
//!
//! ```rust
//! use serde_props::{hierarchical::HierarchicalReader, props, Value};
//!
//! let doc = HierarchicalReader::read(false, "a.b=1\na.c=2\nd=x,y").unwrap();
//! assert_eq!(Value::Object(doc), props!({"a": {"b": 1, "c": 2}, "d": ["x", "y"]}));
//! ```
//!
//! ## Raw mode
//!
//! With `raw_data` set, values are kept as their trimmed source text and a
//! dotted key only nests **one** level: `a.b.c=5` yields `{"a": "5"}` and the
//! segments after the first are dropped. Typed mode nests through every
//! segment. This asymmetry is long-standing observable behavior and is kept
//! as is.

use crate::infer::infer;
use crate::lines::{significant_lines, trim_blank};
use crate::{Error, PropsMap, Result, Value};
use tracing::{debug, trace};

/// One `key=value` line split into its key path and trimmed value text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 1-based source line.
    pub line: usize,
    /// Key split on `.`; empty segments are kept.
    pub path: Vec<String>,
    /// Text after the first `=`, trimmed.
    pub value: String,
}

impl Entry {
    /// Splits `text` on its first `=`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEntry`] if the line has no `=`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_props::hierarchical::Entry;
    ///
    /// let entry = Entry::parse(1, " db.url = jdbc:h2:mem;a=b ").unwrap();
    /// assert_eq!(entry.path, vec!["db", "url"]);
    /// assert_eq!(entry.value, "jdbc:h2:mem;a=b");
    ///
    /// let entry = Entry::parse(2, ".a..b.=1").unwrap();
    /// assert_eq!(entry.path, vec!["", "a", "", "b", ""]);
    /// ```
    pub fn parse(line: usize, text: &str) -> Result<Entry> {
        let (key, value) = text
            .split_once('=')
            .ok_or_else(|| Error::malformed_entry(line, trim_blank(text)))?;
        Ok(Entry {
            line,
            path: trim_blank(key).split('.').map(str::to_string).collect(),
            value: trim_blank(value).to_string(),
        })
    }

    /// Resolves the leaf value: the raw text in raw mode, an inferred value otherwise.
    #[must_use]
    pub fn leaf(&self, raw_data: bool) -> Value {
        if raw_data {
            Value::String(self.value.clone())
        } else {
            infer(&self.value)
        }
    }

    /// Builds the single-branch fragment for this entry.
    #[must_use]
    pub fn into_fragment(self, raw_data: bool) -> PropsMap {
        let leaf = self.leaf(raw_data);
        fragment(&self.path, leaf, raw_data)
    }
}

/// Builds `{path[0]: ...}` for one entry.
///
/// A single segment maps straight to the value. With more segments, typed
/// mode nests through all of them while raw mode attaches the value under
/// the first segment and ignores the rest.
#[must_use]
pub fn fragment(path: &[String], value: Value, raw_data: bool) -> PropsMap {
    match path {
        [] => PropsMap::new(),
        [only] => PropsMap::singleton(only.as_str(), value),
        // Raw mode collapses multi-segment keys onto their first segment.
        [first, ..] if raw_data => PropsMap::singleton(first.as_str(), value),
        [first, rest @ ..] => {
            PropsMap::singleton(first.as_str(), Value::Object(nest(rest, value)))
        }
    }
}

fn nest(path: &[String], value: Value) -> PropsMap {
    match path {
        [] => PropsMap::new(),
        [last] => PropsMap::singleton(last.as_str(), value),
        [first, rest @ ..] => {
            PropsMap::singleton(first.as_str(), Value::Object(nest(rest, value)))
        }
    }
}

/// Reads properties text into a nested document.
#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchicalReader;

impl HierarchicalReader {
    /// Parses every significant line of `input` and folds the fragments.
    ///
    /// An input with no significant lines yields an empty document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEntry`] for the first significant line
    /// without `=`; no document is produced in that case.
    pub fn read(raw_data: bool, input: &str) -> Result<PropsMap> {
        debug!(raw_data, bytes = input.len(), "reading hierarchical properties");

        let mut entries = 0usize;
        let document = significant_lines(input).try_fold(
            PropsMap::new(),
            |mut document, (line, text)| {
                let entry = Entry::parse(line, text)?;
                trace!(line, path = ?entry.path, value = %entry.value, "entry");
                entries += 1;
                document.merge_in(entry.into_fragment(raw_data));
                Ok::<_, Error>(document)
            },
        )?;

        debug!(entries, keys = document.len(), "read hierarchical properties");
        Ok(document)
    }
}

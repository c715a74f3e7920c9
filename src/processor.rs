//! Properties processor.
//!
//! Entry point for pipelines that hand over a configuration object and a
//! byte buffer: the configuration picks the reader (flat or hierarchical)
//! and the value mode, then the buffer is decoded and read. The hierarchical
//! reader requires UTF-8; the flat reader falls back to ISO-8859-1.
//!
//! ```rust
//! use serde_json::json;
//! use serde_props::{props, PropertiesProcessor, Value};
//!
//! let processor = PropertiesProcessor::new();
//! let doc = processor
//!     .process(&json!({"hierarchical": true}), b"server.port=8080\n")
//!     .unwrap();
//! assert_eq!(Value::Object(doc), props!({"server": {"port": 8080}}));
//! ```
//!
//! Processing is synchronous and holds no shared state, so independent
//! inputs can be processed from any number of threads.

use crate::flat::{self, FlatReader};
use crate::hierarchical::HierarchicalReader;
use crate::{Error, ParseOptions, PropsMap, ReaderKind, Result};
use serde::Deserialize;
use std::borrow::Cow;
use tracing::debug;

impl ReaderKind {
    /// Reads decoded text with this reader.
    ///
    /// # Errors
    ///
    /// Propagates the selected reader's errors.
    pub fn read(self, raw_data: bool, input: &str) -> Result<PropsMap> {
        match self {
            ReaderKind::Flat => FlatReader::read(raw_data, input),
            ReaderKind::Hierarchical => HierarchicalReader::read(raw_data, input),
        }
    }
}

/// Converts properties input into a document according to its options.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertiesProcessor;

impl PropertiesProcessor {
    /// The format name this processor answers to.
    pub const NAME: &'static str = "properties";

    /// Creates a processor.
    #[must_use]
    pub fn new() -> Self {
        PropertiesProcessor
    }

    /// Returns [`Self::NAME`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Reads `input` using options taken from a JSON configuration object.
    ///
    /// A `null` configuration means default options; unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] if the configuration cannot be read,
    /// otherwise any error from [`PropertiesProcessor::process_with`].
    pub fn process(&self, config: &serde_json::Value, input: &[u8]) -> Result<PropsMap> {
        let options = if config.is_null() {
            ParseOptions::default()
        } else {
            ParseOptions::deserialize(config).map_err(Error::invalid_options)?
        };
        self.process_with(&options, input)
    }

    /// Reads `input` with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEncoding`] for non-UTF-8 hierarchical input and any error
    /// raised by the selected reader.
    pub fn process_with(&self, options: &ParseOptions, input: &[u8]) -> Result<PropsMap> {
        let reader = options.reader();
        debug!(?reader, raw_data = options.raw_data, "processing properties input");
        let text = match reader {
            ReaderKind::Flat => flat::decode(input),
            ReaderKind::Hierarchical => Cow::Borrowed(std::str::from_utf8(input)?),
        };
        reader.read(options.raw_data, &text)
    }
}

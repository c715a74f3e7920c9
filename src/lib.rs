//! # serde_props
//!
//! Converts classic `key=value` properties text into structured, JSON-like
//! documents.
//!
//! ## Key Features
//!
//! - **Dotted keys nest**: `a.b.c=5` becomes `{"a": {"b": {"c": 5}}}`
//! - **Deep merge**: entries sharing a prefix merge instead of clobbering
//!   siblings; a later value for the same leaf wins
//! - **Type inference**: booleans, arbitrary-precision integers and
//!   decimals, strings, and comma-separated arrays
//! - **Raw mode**: keep values as their source text
//! - **Flat mode**: one document key per property key, following the
//!   classic properties grammar (continuations, escapes, `:` separators)
//! - **Serde compatible**: read documents into your own types or write them
//!   out as JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_props::{parse, props, to_json_string, Value};
//!
//! let input = b"\
//! ## server settings
//! server.host = localhost
//! server.port = 8080
//! server.tags = web,api
//! ";
//!
//! let doc = parse(false, input).unwrap();
//! assert_eq!(
//!     Value::Object(doc.clone()),
//!     props!({"server": {"host": "localhost", "port": 8080, "tags": ["web", "api"]}})
//! );
//! assert_eq!(
//!     to_json_string(&doc).unwrap(),
//!     r#"{"server":{"host":"localhost","port":8080,"tags":["web","api"]}}"#
//! );
//! ```
//!
//! ### Typed configuration
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_props::from_str;
//!
//! #[derive(Deserialize)]
//! struct Pool { size: u32, timeout: f64 }
//!
//! let pool: Pool = from_str("size=8\ntimeout=2.5").unwrap();
//! assert_eq!(pool.size, 8);
//! assert_eq!(pool.timeout, 2.5);
//! ```
//!
//! ### Raw mode
//!
//! In raw mode values stay strings and a dotted key nests only one level:
//! everything after the first segment is dropped.
//!
//! ```rust
//! use serde_props::{parse, props, Value};
//!
//! let doc = parse(true, b"a.b.c=5").unwrap();
//! assert_eq!(Value::Object(doc), props!({"a": "5"}));
//! ```
//!
//! ## Errors
//!
//! Parsing either returns a complete document or fails; a significant line
//! without `=` fails the whole hierarchical parse with
//! [`Error::MalformedEntry`].
//!
//! ## Logging
//!
//! Readers emit `tracing` events (`debug` per parse, `trace` per entry).
//! Install any subscriber to see them.

pub mod de;
pub mod error;
pub mod flat;
pub mod hierarchical;
pub mod infer;
pub mod lines;
pub mod macros;
pub mod map;
pub mod number;
pub mod options;
pub mod processor;
pub mod value;

pub use de::from_value;
pub use error::{Error, Result};
pub use map::PropsMap;
pub use number::{Decimal, Number, ParseDecimalError};
pub use options::{ParseOptions, ReaderKind};
pub use processor::PropertiesProcessor;
pub use value::Value;

use serde::de::DeserializeOwned;
use std::io;

/// Parses properties bytes with the hierarchical reader.
///
/// `raw_data` keeps values as their trimmed source text instead of inferring
/// types (and collapses dotted keys onto their first segment).
///
/// # Examples
///
/// ```rust
/// use serde_props::{parse, props, Value};
///
/// let doc = parse(false, b"a.b=1\na.c=2").unwrap();
/// assert_eq!(Value::Object(doc), props!({"a": {"b": 1, "c": 2}}));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidEncoding`] if the bytes are not UTF-8 and
/// [`Error::MalformedEntry`] for a significant line without `=`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(raw_data: bool, input: &[u8]) -> Result<PropsMap> {
    let options = ParseOptions::hierarchical().with_raw_data(raw_data);
    parse_slice(input, &options)
}

/// Parses properties text with the given options.
///
/// # Examples
///
/// ```rust
/// use serde_props::{parse_str, props, ParseOptions, Value};
///
/// let doc = parse_str("a.b=1", &ParseOptions::new()).unwrap();
/// assert_eq!(Value::Object(doc), props!({"a.b": 1}));
/// ```
///
/// # Errors
///
/// Returns any error raised by the selected reader.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(input: &str, options: &ParseOptions) -> Result<PropsMap> {
    options.reader().read(options.raw_data, input)
}

/// Parses properties bytes with the given options.
///
/// # Errors
///
/// Returns [`Error::InvalidEncoding`] if hierarchical input is not UTF-8, or any
/// error raised by the selected reader.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(input: &[u8], options: &ParseOptions) -> Result<PropsMap> {
    PropertiesProcessor::new().process_with(options, input)
}

/// Reads a whole stream and parses it with the given options.
///
/// # Examples
///
/// ```rust
/// use serde_props::{parse_reader, ParseOptions};
/// use std::io::Cursor;
///
/// let doc = parse_reader(Cursor::new("a.b=true"), &ParseOptions::hierarchical()).unwrap();
/// assert!(doc.get("a").is_some());
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise as [`parse_slice`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R>(mut reader: R, options: &ParseOptions) -> Result<PropsMap>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse_slice(&bytes, options)
}

/// Deserializes an instance of `T` from hierarchical, typed properties text.
///
/// # Errors
///
/// Returns a parse error, or [`Error::Custom`] if the document does not
/// match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let document = parse_str(s, &ParseOptions::hierarchical())?;
    from_value(Value::Object(document))
}

/// Deserializes an instance of `T` from hierarchical, typed properties bytes.
///
/// # Errors
///
/// As [`from_str`], plus [`Error::InvalidEncoding`] for non-UTF-8 input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v)?;
    from_str(s)
}

/// Deserializes an instance of `T` from a stream of hierarchical, typed properties.
///
/// # Errors
///
/// As [`from_slice`], plus [`Error::Io`] if reading fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let document = parse_reader(reader, &ParseOptions::hierarchical())?;
    from_value(Value::Object(document))
}

/// Converts a document into a `serde_json::Value`, keeping key order and exact numbers.
///
/// # Errors
///
/// Returns [`Error::Custom`] if a number cannot be represented as JSON.
pub fn to_json_value(document: &PropsMap) -> Result<serde_json::Value> {
    serde_json::to_value(document).map_err(Error::custom)
}

/// Serializes a document as compact JSON text.
///
/// # Errors
///
/// Returns [`Error::Custom`] if a number cannot be represented as JSON.
pub fn to_json_string(document: &PropsMap) -> Result<String> {
    serde_json::to_string(document).map_err(Error::custom)
}

/// Serializes a document as pretty-printed JSON text.
///
/// # Errors
///
/// Returns [`Error::Custom`] if a number cannot be represented as JSON.
pub fn to_json_string_pretty(document: &PropsMap) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(Error::custom)
}

/// Writes a document as compact JSON to `writer`.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W>(writer: W, document: &PropsMap) -> Result<()>
where
    W: io::Write,
{
    serde_json::to_writer(writer, document).map_err(|e| {
        if e.is_io() {
            Error::io(&e.to_string())
        } else {
            Error::custom(e)
        }
    })
}

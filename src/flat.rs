//! Flat properties reader.
//!
//! Follows the classic properties-file grammar and attaches every key to the
//! document verbatim, with no dot nesting:
//!
//! - blank lines and lines starting with `#` or `!` are skipped
//! - the key ends at the first unescaped `=`, `:`, or whitespace
//! - a line ending in an odd number of backslashes continues on the next line
//! - `\t`, `\n`, `\r`, `\f`, `\uXXXX` are unescaped; any other `\c` is `c`
//! - a key without a value maps to the empty string
//!
//! In typed mode values go through [`infer_scalar`]: commas do not split.
//!
//! Byte input is read as UTF-8, falling back to ISO-8859-1 when the bytes are
//! not valid UTF-8 (see [`decode`]).
//!
//! ```rust
//! use serde_props::{flat::FlatReader, props, Value};
//!
//! let doc = FlatReader::read(false, "a.b = 1\nname: first\\\n  second\n").unwrap();
//! assert_eq!(Value::Object(doc), props!({"a.b": 1, "name": "firstsecond"}));
//! ```

use crate::infer::infer_scalar;
use crate::lines::Lines;
use crate::{Error, PropsMap, Result, Value};
use std::borrow::Cow;
use std::str::Chars;
use tracing::{debug, trace};

const BLANKS: [char; 3] = [' ', '\t', '\u{000C}'];

/// A logical line: one or more physical lines joined by trailing backslashes.
#[derive(Debug)]
struct LogicalLine {
    line: usize,
    text: String,
}

/// Joins continuation lines and drops comments and blank lines.
struct LogicalLines<'a> {
    lines: Lines<'a>,
}

impl<'a> LogicalLines<'a> {
    fn new(input: &'a str) -> Self {
        LogicalLines {
            lines: Lines::new(input),
        }
    }
}

fn continues(text: &str) -> bool {
    let backslashes = text.chars().rev().take_while(|c| *c == '\\').count();
    backslashes % 2 == 1
}

impl<'a> Iterator for LogicalLines<'a> {
    type Item = LogicalLine;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (line, raw) = self.lines.next()?;
            let text = raw.trim_start_matches(BLANKS);
            if text.is_empty() || text.starts_with('#') || text.starts_with('!') {
                continue;
            }

            let mut joined = text.to_string();
            while continues(&joined) {
                joined.pop();
                match self.lines.next() {
                    Some((_, next)) => joined.push_str(next.trim_start_matches(BLANKS)),
                    None => break,
                }
            }
            return Some(LogicalLine { line, text: joined });
        }
    }
}

/// Splits a logical line into its escaped key and value parts.
fn split_key_value(text: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = text.len();
    for (at, c) in text.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || BLANKS.contains(&c) {
            key_end = at;
            break;
        }
    }

    let key = &text[..key_end];
    let mut rest = text[key_end..].trim_start_matches(BLANKS);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches(BLANKS);
    }
    (key, rest)
}

/// Reads the four hex digits of a `\uXXXX` escape.
fn hex_unit(chars: &mut Chars<'_>, line: usize) -> Result<u16> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() != 4 || !hex.chars().all(|h| h.is_ascii_hexdigit()) {
        return Err(Error::malformed_escape(line));
    }
    u16::from_str_radix(&hex, 16).map_err(|_| Error::malformed_escape(line))
}

/// Turns a UTF-16 unit into a char, pairing a high surrogate with an
/// immediately following `\uXXXX` low surrogate. Unpaired surrogates become
/// U+FFFD.
fn decode_unit(unit: u16, chars: &mut Chars<'_>, line: usize) -> Result<char> {
    if (0xD800..0xDC00).contains(&unit) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            let low = hex_unit(&mut lookahead, line)?;
            if (0xDC00..0xE000).contains(&low) {
                *chars = lookahead;
                let code =
                    0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                return Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
        }
    }
    Ok(char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER))
}

/// Resolves backslash escapes.
fn unescape(text: &str, line: usize) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let unit = hex_unit(&mut chars, line)?;
                out.push(decode_unit(unit, &mut chars, line)?);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

/// Decodes flat properties bytes: UTF-8 when valid, ISO-8859-1 otherwise.
///
/// # Examples
///
/// ```rust
/// use serde_props::flat::decode;
///
/// assert_eq!(decode("café".as_bytes()), "café");
/// assert_eq!(decode(b"caf\xe9"), "café");
/// ```
#[must_use]
pub fn decode(input: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(input) {
        Ok(text) => Cow::Borrowed(text),
        Err(err) => {
            debug!(offset = err.valid_up_to(), "input is not UTF-8, reading as ISO-8859-1");
            Cow::Owned(input.iter().map(|&b| char::from(b)).collect())
        }
    }
}

/// Reads properties text into a document with one entry per key.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatReader;

impl FlatReader {
    /// Parses `input`; later duplicates overwrite earlier values in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEscape`] for a bad `\uXXXX` escape.
    pub fn read(raw_data: bool, input: &str) -> Result<PropsMap> {
        debug!(raw_data, bytes = input.len(), "reading flat properties");

        let mut document = PropsMap::new();
        for logical in LogicalLines::new(input) {
            let (key, value) = split_key_value(&logical.text);
            let key = unescape(key, logical.line)?;
            let value = unescape(value, logical.line)?;
            trace!(line = logical.line, key = %key, value = %value, "entry");

            let value = if raw_data {
                Value::String(value)
            } else {
                infer_scalar(&value)
            };
            document.insert(key, value);
        }

        debug!(keys = document.len(), "read flat properties");
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props;

    fn read(input: &str) -> Value {
        Value::Object(FlatReader::read(false, input).unwrap())
    }

    #[test]
    fn test_separators() {
        assert_eq!(
            read("a=1\nb:2\nc 3\nd = 4\ne\t:\t5"),
            props!({"a": 1, "b": 2, "c": 3, "d": 4, "e": 5})
        );
    }

    #[test]
    fn test_keys_are_not_nested() {
        assert_eq!(read("server.port=80"), props!({"server.port": 80}));
    }

    #[test]
    fn test_key_without_value() {
        assert_eq!(read("lonely\nspaced   "), props!({"lonely": "", "spaced": ""}));
    }

    #[test]
    fn test_value_keeps_separators_and_trailing_space() {
        assert_eq!(read("a==b"), props!({"a": "=b"}));
        assert_eq!(read("a = b c  "), props!({"a": "b c  "}));
    }

    #[test]
    fn test_comments() {
        assert_eq!(read("# x\n  ! y\n\na=1"), props!({"a": 1}));
    }

    #[test]
    fn test_continuation_lines() {
        assert_eq!(
            read("list = a,\\\n       b,\\\n       c\nnext=1"),
            props!({"list": "a,b,c", "next": 1})
        );
    }

    #[test]
    fn test_even_backslashes_do_not_continue() {
        assert_eq!(read("path=c:\\\\\nb=1"), props!({"path": "c:\\", "b": 1}));
    }

    #[test]
    fn test_continuation_at_end_of_input() {
        assert_eq!(read("a=1\\"), props!({"a": 1}));
    }

    #[test]
    fn test_escapes() {
        assert_eq!(
            read(r"key\ with\=sep = tab\there\u0041\q"),
            props!({"key with=sep": "tab\there\u{41}q"})
        );
    }

    #[test]
    fn test_surrogate_pair_escapes_join() {
        assert_eq!(read(r"emoji=\uD83D\uDE00"), props!({"emoji": "\u{1F600}"}));
        assert_eq!(read(r"mixed=a\uD834\uDD1Eb"), props!({"mixed": "a\u{1D11E}b"}));
    }

    #[test]
    fn test_unpaired_surrogates_are_replaced() {
        assert_eq!(read(r"hi=\uD83Dx"), props!({"hi": "\u{FFFD}x"}));
        assert_eq!(read(r"lo=\uDE00"), props!({"lo": "\u{FFFD}"}));
        assert_eq!(
            read(r"two=\uD83D\u0041"),
            props!({"two": "\u{FFFD}A"})
        );
    }

    #[test]
    fn test_malformed_unicode_escape() {
        let err = FlatReader::read(false, "ok=1\nbad=\\u12").unwrap_err();
        assert_eq!(err, Error::MalformedEscape { line: 2 });
        assert!(FlatReader::read(false, "bad=\\uZZZZ").is_err());
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let doc = FlatReader::read(false, "a=1\nb=2\na=3").unwrap();
        let keys: Vec<_> = doc.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(doc.get("a"), Some(&props!(3)));
    }

    #[test]
    fn test_decode_falls_back_to_latin1() {
        assert_eq!(decode(b"name=caf\xe9"), "name=caf\u{e9}");
        assert!(matches!(decode(b"plain=1"), Cow::Borrowed("plain=1")));
        assert_eq!(decode(&[0xff, 0x80]), "\u{ff}\u{80}");
    }

    #[test]
    fn test_raw_mode() {
        let doc = FlatReader::read(true, "a=1\nb=true").unwrap();
        assert_eq!(Value::Object(doc), props!({"a": "1", "b": "true"}));
    }
}

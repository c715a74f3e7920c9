//! Line splitting and comment filtering.
//!
//! Input text is split on `\n`, `\r\n`, and lone `\r`. Lines are numbered
//! from 1 so that errors can point back at the source.

/// Iterator over the physical lines of a text, paired with 1-based line numbers.
///
/// A trailing terminator does not produce an extra empty line.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
    number: usize,
}

impl<'a> Lines<'a> {
    /// Starts at line 1 of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Lines {
            rest: input,
            number: 0,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        self.number += 1;
        let (line, rest) = match self.rest.find(['\n', '\r']) {
            Some(end) => {
                let skip = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
                (&self.rest[..end], &self.rest[end + skip..])
            }
            None => (self.rest, ""),
        };
        self.rest = rest;
        Some((self.number, line))
    }
}

/// Strips ASCII spaces and control characters (everything up to U+0020)
/// from both ends. Other Unicode whitespace, such as U+00A0, is kept.
///
/// # Examples
///
/// ```rust
/// use serde_props::lines::trim_blank;
///
/// assert_eq!(trim_blank("\t 5 \u{0}"), "5");
/// assert_eq!(trim_blank("\u{a0}5"), "\u{a0}5");
/// ```
#[must_use]
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// Returns `true` for blank lines and `#`/`!` comments.
#[must_use]
pub fn is_ignorable(line: &str) -> bool {
    let trimmed = trim_blank(line);
    trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!')
}

/// Lazily yields the significant lines of `input`, in order, with their line numbers.
///
/// # Examples
///
/// ```rust
/// use serde_props::lines::significant_lines;
///
/// let input = "# header\n\n  ! note\na=1\r\nb=2";
/// let lines: Vec<_> = significant_lines(input).collect();
/// assert_eq!(lines, vec![(4, "a=1"), (5, "b=2")]);
/// ```
pub fn significant_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    Lines::new(input).filter(|(_, line)| !is_ignorable(line))
}

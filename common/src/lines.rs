//! Line splitting for input files.
//!
//! Lines end at `\n`, `\r\n`, or a lone `\r`. A terminator on the last line
//! does not produce a trailing empty line.

/// Iterator over the lines of a string. Created by [`split_lines`].
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

/// Split `text` into lines without their terminators.
///
/// # Examples
///
/// ```
/// use datacheck_common::split_lines;
///
/// let lines: Vec<&str> = split_lines("a\nb\r\nc\rd\n").collect();
/// assert_eq!(lines, ["a", "b", "c", "d"]);
/// ```
#[must_use]
pub const fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let Some(end) = self.rest.find(['\n', '\r']) else {
            return Some(std::mem::take(&mut self.rest));
        };
        let (line, terminator) = self.rest.split_at(end);
        self.rest = terminator
            .strip_prefix("\r\n")
            .or_else(|| terminator.get(1..))
            .unwrap_or_default();
        Some(line)
    }
}

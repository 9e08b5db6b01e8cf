//! Byte offset to line/column conversion for error reporting.

use std::fmt;

/// A zero-based line/column pair. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

/// Displays one-based, the way editors number lines.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Line index over a source text.
pub struct SourceLocation<'a> {
    source: &'a str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'a> SourceLocation<'a> {
    pub fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(at, _)| at + 1))
            .collect();
        SourceLocation {
            source,
            line_starts,
        }
    }

    /// Offsets past the end clamp to the end of the source.
    pub fn position(&self, byte_offset: usize) -> Position {
        let offset = self.clamp(byte_offset);
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i.saturating_sub(1));
        let start = self.line_starts[line];
        let column = self.source[start..offset].chars().count();
        Position::new(line, column)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The text of a line without its terminator.
    pub fn line(&self, line: usize) -> Option<&'a str> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map_or(self.source.len(), |next| next - 1);
        Some(self.source[start..end].trim_end_matches('\r'))
    }

    /// Numbered lines around `line`, the line itself marked with `>>`.
    pub fn context(&self, line: usize, context_lines: usize) -> String {
        let first = line.saturating_sub(context_lines);
        let last = (line + context_lines + 1).min(self.line_count());

        let mut out = String::new();
        for number in first..last {
            let marker = if number == line { ">>" } else { "  " };
            if let Some(text) = self.line(number) {
                out.push_str(&format!("{} {:3} | {}\n", marker, number + 1, text));
            }
        }
        out
    }

    fn clamp(&self, byte_offset: usize) -> usize {
        let mut offset = byte_offset.min(self.source.len());
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions() {
        let loc = SourceLocation::new("ab\ncd\n\nef");
        assert_eq!(loc.position(0), Position::new(0, 0));
        assert_eq!(loc.position(2), Position::new(0, 2));
        assert_eq!(loc.position(3), Position::new(1, 0));
        assert_eq!(loc.position(6), Position::new(2, 0));
        assert_eq!(loc.position(8), Position::new(3, 1));
        assert_eq!(loc.position(100), Position::new(3, 2));
    }

    #[test]
    fn test_columns_count_characters() {
        let loc = SourceLocation::new("é : x");
        assert_eq!(loc.position(3), Position::new(0, 2));
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Position::new(0, 4).to_string(), "1:5");
    }

    #[test]
    fn test_lines() {
        let loc = SourceLocation::new("one\r\ntwo\n");
        assert_eq!(loc.line_count(), 3);
        assert_eq!(loc.line(0), Some("one"));
        assert_eq!(loc.line(1), Some("two"));
        assert_eq!(loc.line(2), Some(""));
        assert_eq!(loc.line(3), None);
    }

    #[test]
    fn test_context_marks_the_line() {
        let loc = SourceLocation::new("l1\nl2\nl3\nl4\nl5\nl6");
        assert_eq!(
            loc.context(3, 1),
            "     3 | l3\n>>   4 | l4\n     5 | l5\n"
        );
        assert_eq!(loc.context(0, 2), ">>   1 | l1\n     2 | l2\n     3 | l3\n");
    }
}

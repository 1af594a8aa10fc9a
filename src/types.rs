//! Source positions inside language pack files.

use std::fmt;

/// A range in a pack file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceRange {
    /// Inclusive start
    pub start: SourcePosition,
    /// Exclusive end
    pub end: SourcePosition,
}

/// A position in a pack file (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    /// 0-indexed line
    pub line: u32,
    /// 0-indexed column
    pub character: u32,
}

impl From<tree_sitter::Point> for SourcePosition {
    #[allow(clippy::cast_possible_truncation)]
    fn from(point: tree_sitter::Point) -> Self {
        Self { line: point.row as u32, character: point.column as u32 }
    }
}

impl fmt::Display for SourcePosition {
    /// Renders as 1-indexed `line:column`, the way editors and compilers report it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", u64::from(self.line) + 1, u64::from(self.character) + 1)
    }
}

impl SourceRange {
    /// Range covered by a tree-sitter node.
    #[must_use]
    pub fn from_node(node: &tree_sitter::Node<'_>) -> Self {
        Self { start: node.start_position().into(), end: node.end_position().into() }
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    const fn pos(line: u32, character: u32) -> SourcePosition {
        SourcePosition { line, character }
    }

    #[rstest]
    #[case(pos(0, 0), "1:1")]
    #[case(pos(11, 2), "12:3")]
    fn display_is_one_indexed(#[case] position: SourcePosition, #[case] expected: &str) {
        assert_that!(position.to_string(), eq(expected));
    }
}

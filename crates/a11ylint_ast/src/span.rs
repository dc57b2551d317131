//! Position and location types for source ranges.
//!
//! Parsers report start-tag ranges in 1-indexed lines and 1-indexed columns.
//! Diagnostics carry these values through unchanged.

use serde::{Deserialize, Serialize};

/// A position in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A source range between two positions.
///
/// For elements this is always the range of the opening tag, never the
/// whole element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Start position.
    pub start: Position,
    /// End position.
    pub end: Position,
}

impl Location {
    /// Creates a new location.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Creates a location from raw line/column pairs.
    #[inline]
    pub const fn from_coords(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// Returns true if this location begins strictly before `other`.
    #[inline]
    pub fn starts_before(&self, other: &Location) -> bool {
        self.start < other.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1, 9) < Position::new(2, 1));
        assert!(Position::new(3, 2) < Position::new(3, 10));
        assert_eq!(Position::new(5, 5), Position::new(5, 5));
    }

    #[test]
    fn test_location_from_coords() {
        let loc = Location::from_coords(4, 1, 4, 20);

        assert_eq!(loc.start, Position::new(4, 1));
        assert_eq!(loc.end, Position::new(4, 20));
    }

    #[test]
    fn test_starts_before() {
        let first = Location::from_coords(1, 1, 1, 5);
        let second = Location::from_coords(1, 6, 1, 10);

        assert!(first.starts_before(&second));
        assert!(!second.starts_before(&first));
        assert!(!first.starts_before(&first));
    }

    #[test]
    fn test_location_serialization() {
        let loc = Location::from_coords(1, 1, 1, 10);
        let json = serde_json::to_string(&loc).unwrap();
        assert_eq!(
            json,
            r#"{"start":{"line":1,"column":1},"end":{"line":1,"column":10}}"#
        );
    }

    #[test]
    fn test_location_deserialization() {
        let json = r#"{"start": {"line": 2, "column": 3}, "end": {"line": 2, "column": 9}}"#;
        let loc: Location = serde_json::from_str(json).unwrap();
        assert_eq!(loc, Location::from_coords(2, 3, 2, 9));
    }
}

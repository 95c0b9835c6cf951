//! Source locations for AST nodes.
//!
//! ES|QL parsers report node positions as an inclusive `min..=max` pair of
//! character offsets into the query text.

use serde::{Deserialize, Serialize};

/// An inclusive range of character offsets in the query text.
///
/// Incomplete nodes synthesized by error recovery may carry `min == max == 0`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Location {
    /// First offset covered by the node (inclusive).
    pub min: u32,
    /// Last offset covered by the node (inclusive).
    pub max: u32,
}

impl Location {
    /// Creates a new location.
    #[inline]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Returns true if this location covers the given offset.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        self.min <= offset && offset <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_contains_is_inclusive() {
        let location = Location::new(6, 13);
        assert!(location.contains(6));
        assert!(location.contains(13));
        assert!(!location.contains(5));
        assert!(!location.contains(14));
    }

    #[test]
    fn test_location_serializes_as_min_max() {
        let json = serde_json::to_value(Location::new(0, 19)).unwrap();
        assert_eq!(json, serde_json::json!({ "min": 0, "max": 19 }));
    }
}

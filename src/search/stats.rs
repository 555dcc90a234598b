//! Search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one minimax search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Board states evaluated, including the root.
    pub nodes_visited: u64,

    /// Terminal boards scored with `utility`.
    pub terminal_leaves: u64,

    /// Deepest recursion reached (moves ahead of the root; at most 9).
    pub max_depth: u16,

    /// Total search time (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes evaluated per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats {
            nodes_visited: 100,
            terminal_leaves: 40,
            max_depth: 9,
            time_us: 1234,
        };
        stats.reset();
        assert_eq!(stats.nodes_visited, 0);
        assert_eq!(stats.terminal_leaves, 0);
        assert_eq!(stats.max_depth, 0);
        assert_eq!(stats.time_us, 0);
    }

    #[test]
    fn test_nodes_per_second() {
        let stats = SearchStats {
            nodes_visited: 1_000,
            time_us: 500_000,
            ..SearchStats::default()
        };
        assert!((stats.nodes_per_second() - 2_000.0).abs() < f64::EPSILON);

        // Zero elapsed time must not divide by zero
        assert_eq!(SearchStats::new().nodes_per_second(), 0.0);
    }

    #[test]
    fn test_stats_serialization() {
        let stats = SearchStats {
            nodes_visited: 7,
            terminal_leaves: 3,
            max_depth: 2,
            time_us: 10,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.nodes_visited, 7);
        assert_eq!(deserialized.max_depth, 2);
    }
}

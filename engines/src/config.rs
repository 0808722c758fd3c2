//! Search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Plies searched when no depth is given
pub const DEFAULT_DEPTH: u32 = 5;

/// Settings for [`crate::minimax::compute_move`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Fixed search depth in plies. Forced passes consume a ply too.
    pub depth: u32,
}

impl SearchConfig {
    pub fn with_depth(depth: u32) -> Self {
        SearchConfig { depth }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_depth() {
        assert_eq!(SearchConfig::default().depth, 5);
        assert_eq!(SearchConfig::with_depth(3).depth, 3);
    }
}

//! Sampling configuration.

use serde::{Deserialize, Serialize};

/// How the bracketing keyframe pair is located.
///
/// Every strategy yields the same segment; this only trades scan cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentSearch {
    Linear,
    Binary,
    /// Binary search once a track reaches `Config::binary_search_min_keys`.
    #[default]
    Auto,
}

/// Configuration for track stores and sampling.
/// Keep this minimal; numeric results never depend on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub segment_search: SegmentSearch,
    /// Key count at which `SegmentSearch::Auto` switches to binary search.
    pub binary_search_min_keys: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segment_search: SegmentSearch::Auto,
            binary_search_min_keys: 16,
        }
    }
}

impl Config {
    /// Resolve `Auto` for a track with `key_count` keyframes.
    #[inline]
    pub fn search_for(&self, key_count: usize) -> SegmentSearch {
        match self.segment_search {
            SegmentSearch::Auto if key_count >= self.binary_search_min_keys => {
                SegmentSearch::Binary
            }
            SegmentSearch::Auto => SegmentSearch::Linear,
            explicit => explicit,
        }
    }
}

use serde::{Deserialize, Serialize};

/// How a content size is shared out between the levels or sections a span
/// covers when it does not divide evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpanRounding {
    /// Round each share down (a 25px cell over 2 levels asks 12px of each)
    #[default]
    Floor,
    /// Round each share up (a 25px cell over 2 levels asks 13px of each)
    Ceil,
}

impl SpanRounding {
    /// Divide a non-negative `size` into `parts` shares.
    pub fn divide(self, size: i32, parts: usize) -> i32 {
        let parts = i32::try_from(parts.max(1)).unwrap_or(i32::MAX);
        let size = size.max(0);
        match self {
            Self::Floor => size / parts,
            Self::Ceil => size / parts + i32::from(size % parts != 0),
        }
    }
}

/// Configuration for a multi-level header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderConfig {
    /// Size of sections that have no explicit size (~100px default)
    pub default_section_size: i32,
    /// Lower bound for each level's thickness
    pub minimum_level_size: i32,
    /// Rounding used when dividing a merged cell's size across its span
    pub span_rounding: SpanRounding,
    /// Whether the host shows a sort indicator in header cells
    pub show_sort_indicator: bool,
    /// Main-axis room reserved for the sort indicator when shown
    pub sort_indicator_size: i32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            default_section_size: 100,
            minimum_level_size: 0,
            span_rounding: SpanRounding::Floor,
            show_sort_indicator: false,
            sort_indicator_size: 0,
        }
    }
}

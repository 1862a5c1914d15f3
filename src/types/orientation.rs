use serde::{Deserialize, Serialize};

/// Axis a header describes: columns (`Horizontal`) or rows (`Vertical`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    /// Header sits above the table and describes columns
    #[default]
    Horizontal,
    /// Header sits beside the table and describes rows
    Vertical,
}

/// A cell in the header grid.
///
/// `level` is the depth index in the header stack (0 = outermost),
/// `section` is the index of the data column (or row) underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPosition {
    pub level: usize,
    pub section: usize,
}

impl CellPosition {
    pub const fn new(level: usize, section: usize) -> Self {
        Self { level, section }
    }
}

impl From<(usize, usize)> for CellPosition {
    fn from((level, section): (usize, usize)) -> Self {
        Self { level, section }
    }
}

//! Cumulative per-level pixel boundaries.

/// Bottom edge (or right edge, for vertical headers) of every level.
///
/// `boundaries[i]` is the depth-axis pixel where level `i` ends, so level `i`
/// covers `[boundaries[i - 1] (or 0), boundaries[i])`. Entries never decrease.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelBoundaryTable {
    boundaries: Vec<i32>,
}

impl LevelBoundaryTable {
    /// Accumulate per-level thicknesses into boundaries. Negative thicknesses
    /// count as zero and the running total saturates at `i32::MAX`.
    pub fn from_thicknesses<I: IntoIterator<Item = i32>>(thicknesses: I) -> Self {
        let mut bottom = 0;
        let boundaries = thicknesses
            .into_iter()
            .map(|t| {
                bottom = t.max(0).saturating_add(bottom);
                bottom
            })
            .collect();
        Self { boundaries }
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.boundaries
    }

    /// Where `level` ends.
    pub fn boundary(&self, level: usize) -> Option<i32> {
        self.boundaries.get(level).copied()
    }

    /// Where `level` starts: the previous level's boundary, or 0.
    pub fn start_of(&self, level: usize) -> i32 {
        level
            .checked_sub(1)
            .and_then(|prev| self.boundary(prev))
            .unwrap_or(0)
    }

    pub fn thickness(&self, level: usize) -> Option<i32> {
        Some(self.boundary(level)? - self.start_of(level))
    }

    /// Full header thickness.
    pub fn total(&self) -> i32 {
        self.boundaries.last().copied().unwrap_or(0)
    }

    /// First level whose boundary lies strictly beyond `pixel`. A pixel on a
    /// boundary belongs to the level after it.
    pub fn level_at(&self, pixel: i32) -> Option<usize> {
        self.boundaries.iter().position(|bottom| *bottom > pixel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_thicknesses() {
        let table = LevelBoundaryTable::from_thicknesses([20, 15, 25]);
        assert_eq!(table.as_slice(), &[20, 35, 60]);
        assert_eq!(table.start_of(0), 0);
        assert_eq!(table.start_of(2), 35);
        assert_eq!(table.thickness(1), Some(15));
        assert_eq!(table.total(), 60);
    }

    #[test]
    fn test_negative_thickness_counts_as_zero() {
        let table = LevelBoundaryTable::from_thicknesses([10, -5, 10]);
        assert_eq!(table.as_slice(), &[10, 10, 20]);
    }

    #[test]
    fn test_huge_thicknesses_saturate() {
        let table = LevelBoundaryTable::from_thicknesses([i32::MAX, 1, i32::MAX]);
        assert_eq!(table.as_slice(), &[i32::MAX, i32::MAX, i32::MAX]);
        assert_eq!(table.thickness(1), Some(0));
        assert_eq!(table.level_at(i32::MAX - 1), Some(0));
    }

    #[test]
    fn test_level_at_uses_strict_boundary() {
        let table = LevelBoundaryTable::from_thicknesses([20, 20]);
        assert_eq!(table.level_at(0), Some(0));
        assert_eq!(table.level_at(19), Some(0));
        assert_eq!(table.level_at(20), Some(1));
        assert_eq!(table.level_at(40), None);
    }

    #[test]
    fn test_zero_thickness_level_is_never_hit() {
        let table = LevelBoundaryTable::from_thicknesses([10, 0, 10]);
        assert_eq!(table.level_at(10), Some(2));
    }
}

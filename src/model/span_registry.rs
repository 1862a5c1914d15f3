//! Merge regions per orientation, indexed by every cell they cover.

use std::collections::HashMap;

use crate::types::{CellPosition, Orientation};

/// A merged region anchored at its top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Top-left cell of the merge
    pub anchor: CellPosition,
    /// Number of levels covered (≥ 1)
    pub level_extent: usize,
    /// Number of sections covered (≥ 1)
    pub section_extent: usize,
}

impl Span {
    pub fn new(anchor: CellPosition, level_extent: usize, section_extent: usize) -> Self {
        Self {
            anchor,
            level_extent: level_extent.max(1),
            section_extent: section_extent.max(1),
        }
    }

    /// Last level covered (inclusive).
    pub fn last_level(&self) -> usize {
        self.anchor.level + self.level_extent - 1
    }

    /// Last section covered (inclusive).
    pub fn last_section(&self) -> usize {
        self.anchor.section + self.section_extent - 1
    }

    /// Whether `pos` lies inside this span.
    pub fn covers(&self, pos: CellPosition) -> bool {
        (self.anchor.level..=self.last_level()).contains(&pos.level)
            && (self.anchor.section..=self.last_section()).contains(&pos.section)
    }

    /// Every covered cell, level-major.
    pub fn cells(&self) -> impl Iterator<Item = CellPosition> + '_ {
        (self.anchor.level..=self.last_level()).flat_map(move |level| {
            (self.anchor.section..=self.last_section())
                .map(move |section| CellPosition::new(level, section))
        })
    }
}

/// Covered cell → owning span, kept separately for each orientation.
///
/// Bounds are not checked here; [`HeaderModel`](super::HeaderModel) clamps
/// spans before inserting them.
#[derive(Debug, Clone, Default)]
pub struct SpanRegistry {
    horizontal: HashMap<CellPosition, Span>,
    vertical: HashMap<CellPosition, Span>,
}

impl SpanRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn cells(&self, orientation: Orientation) -> &HashMap<CellPosition, Span> {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    fn cells_mut(&mut self, orientation: Orientation) -> &mut HashMap<CellPosition, Span> {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }

    /// Map every cell covered by `span` to it. Cells already covered by an
    /// earlier span are overwritten.
    pub fn insert(&mut self, orientation: Orientation, span: Span) {
        let cells = self.cells_mut(orientation);
        for pos in span.cells() {
            cells.insert(pos, span);
        }
    }

    /// Span covering `pos`, if any.
    pub fn get(&self, orientation: Orientation, pos: CellPosition) -> Option<&Span> {
        self.cells(orientation).get(&pos)
    }

    /// Drop every span of one orientation.
    pub fn clear(&mut self, orientation: Orientation) {
        self.cells_mut(orientation).clear();
    }

    /// Number of covered cells for an orientation.
    pub fn covered_cells(&self, orientation: Orientation) -> usize {
        self.cells(orientation).len()
    }

    pub fn is_empty(&self, orientation: Orientation) -> bool {
        self.cells(orientation).is_empty()
    }

    /// Distinct spans that still cover at least one cell, ordered by anchor
    /// then extents. A span whose anchor cell was taken over by a later span
    /// stays listed while its other cells still point at it.
    pub fn spans(&self, orientation: Orientation) -> Vec<Span> {
        let mut spans: Vec<Span> = self.cells(orientation).values().copied().collect();
        spans.sort_unstable();
        spans.dedup();
        spans
    }
}

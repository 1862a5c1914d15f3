//! Level and section sizing for merged headers.
//!
//! Merged cells report the natural size of the whole merge. Each level or
//! section a merge covers only claims its share of that size, so a cell
//! spanning two levels does not force both levels to its full height.

use log::debug;

use super::{ContentMeasurer, LevelBoundaryTable, SectionAxis};
use crate::model::{HeaderDataSource, HeaderModel};
use crate::types::{CellPosition, HeaderConfig, HeaderRole, Orientation, Size};

/// Everything a layout pass reads, borrowed from the view.
pub struct LayoutInputs<'a, S, M, A> {
    pub orientation: Orientation,
    pub model: &'a HeaderModel<S>,
    pub measurer: &'a M,
    pub axis: &'a A,
}

/// Computes level boundaries and section size hints, and caches the former.
///
/// The cache is explicit: [`invalidate`](Self::invalidate) marks it dirty and
/// [`ensure`](Self::ensure) rebuilds it before anything reads it.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: HeaderConfig,
    levels: LevelBoundaryTable,
    dirty: bool,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(HeaderConfig::default())
    }
}

impl LayoutEngine {
    pub fn new(config: HeaderConfig) -> Self {
        Self {
            config,
            levels: LevelBoundaryTable::default(),
            dirty: true,
        }
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Replace the configuration; the cached boundaries become stale.
    pub fn set_config(&mut self, config: HeaderConfig) {
        self.config = config;
        self.invalidate();
    }

    /// Mark the cached boundaries stale.
    pub fn invalidate(&mut self) {
        if !self.dirty {
            debug!("level boundaries invalidated");
        }
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rebuild the boundaries if stale and return them.
    pub fn ensure<S, M, A>(&mut self, inputs: &LayoutInputs<'_, S, M, A>) -> &LevelBoundaryTable
    where
        S: HeaderDataSource,
        M: ContentMeasurer,
        A: SectionAxis,
    {
        if self.dirty {
            self.levels = self.compute_level_boundaries(inputs);
            self.dirty = false;
            debug!(
                "level boundaries recomputed: {} levels x {} sections -> {:?}",
                self.levels.len(),
                inputs.axis.section_count(),
                self.levels.as_slice()
            );
        }
        &self.levels
    }

    /// Last computed boundaries. Stale while [`is_dirty`](Self::is_dirty).
    pub fn levels(&self) -> &LevelBoundaryTable {
        &self.levels
    }

    /// Natural size of an anchor cell: the explicit size hint if the cell has
    /// one, otherwise the measured content (transposed for rotated cells, plus
    /// room for the sort indicator). Never negative.
    pub fn cell_size<S, M, A>(&self, inputs: &LayoutInputs<'_, S, M, A>, anchor: CellPosition) -> Size
    where
        S: HeaderDataSource,
        M: ContentMeasurer,
    {
        let o = inputs.orientation;
        if let Some(hint) = inputs
            .model
            .header_data(o, anchor, HeaderRole::SizeHint)
            .and_then(|v| v.as_size())
        {
            return hint.clamped();
        }

        let mut size = inputs.measurer.content_size(inputs.model, o, anchor);
        if inputs.model.is_rotated(o, anchor) {
            size = size.transposed();
        }
        if self.config.show_sort_indicator {
            let main = size.main(o).saturating_add(self.config.sort_indicator_size);
            size = Size::from_axes(o, main, size.depth(o));
        }
        size.clamped()
    }

    /// Cumulative thickness of every level.
    ///
    /// Each cell's depth is divided by the number of levels its merge covers,
    /// then each level takes the maximum over all sections.
    pub fn compute_level_boundaries<S, M, A>(
        &self,
        inputs: &LayoutInputs<'_, S, M, A>,
    ) -> LevelBoundaryTable
    where
        S: HeaderDataSource,
        M: ContentMeasurer,
        A: SectionAxis,
    {
        let o = inputs.orientation;
        let level_count = inputs.model.level_count(o);
        let section_count = inputs.model.section_count(o).min(inputs.axis.section_count());

        LevelBoundaryTable::from_thicknesses((0..level_count).map(|level| {
            let widest = (0..section_count)
                .filter_map(|section| inputs.model.resolve_anchor(o, level, section))
                .map(|anchor| {
                    let (level_extent, _) = inputs.model.span_extents(o, anchor);
                    let depth = self.cell_size(inputs, anchor).depth(o);
                    self.config.span_rounding.divide(depth, level_extent)
                })
                .max()
                .unwrap_or(0);
            widest.max(self.config.minimum_level_size)
        }))
    }

    /// Size hint for one section across the whole depth of the header.
    ///
    /// The main-axis component is the widest share any level asks for; the
    /// depth component is the sum of every level's share. Hidden sections
    /// are zero.
    pub fn compute_section_extent<S, M, A>(
        &self,
        inputs: &LayoutInputs<'_, S, M, A>,
        section: usize,
    ) -> Size
    where
        S: HeaderDataSource,
        M: ContentMeasurer,
        A: SectionAxis,
    {
        if inputs.axis.is_section_hidden(section) {
            return Size::ZERO;
        }

        let o = inputs.orientation;
        let rounding = self.config.span_rounding;
        let mut main = 0;
        let mut depth = 0;
        for level in 0..inputs.model.level_count(o) {
            let Some(anchor) = inputs.model.resolve_anchor(o, level, section) else {
                continue;
            };
            let (level_extent, section_extent) = inputs.model.span_extents(o, anchor);
            let size = self.cell_size(inputs, anchor);
            main = main.max(rounding.divide(size.main(o), section_extent));
            depth = rounding.divide(size.depth(o), level_extent).saturating_add(depth);
        }
        Size::from_axes(o, main, depth)
    }
}

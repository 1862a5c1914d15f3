//! The multi-level header view.
//!
//! [`MultiLevelHeader`] ties a [`HeaderModel`] to the single-level section
//! geometry underneath it and owns the cached level boundaries. Every
//! structural change goes through a method here that invalidates the cache;
//! every geometry query takes `&mut self` and revalidates it first.
//!
//! Queries are split across submodules:
//! - `hit_test`: pixel → cell lookups
//! - `paint`: covering rectangles and paint descriptors
//! - `report`: serializable snapshots of the whole layout

mod paint;
mod report;

pub use hit_test::HelpKind;
pub use paint::{HeaderCellPaint, NoSelection, SelectionSource};
pub use report::{CellReport, LayoutReport, SectionReport};

use log::debug;

use crate::layout::{
    ContentMeasurer, LayoutEngine, LayoutInputs, LevelBoundaryTable, SectionAxis, SectionTrack,
};
use crate::model::{HeaderDataSource, HeaderModel};
use crate::types::{CellPosition, HeaderConfig, HeaderRole, HeaderValue, Orientation, Size};

/// A header with merged cells over `levels × sections`.
///
/// * `S` - header data source
/// * `M` - content measurer (size-hint callback)
/// * `A` - the single-level section axis underneath
#[derive(Debug, Clone)]
pub struct MultiLevelHeader<S, M, A> {
    orientation: Orientation,
    model: HeaderModel<S>,
    measurer: M,
    axis: A,
    engine: LayoutEngine,
}

impl<S, M, A> MultiLevelHeader<S, M, A>
where
    S: HeaderDataSource,
    M: ContentMeasurer,
    A: SectionAxis,
{
    pub fn new(
        orientation: Orientation,
        model: HeaderModel<S>,
        measurer: M,
        axis: A,
        config: HeaderConfig,
    ) -> Self {
        Self {
            orientation,
            model,
            measurer,
            axis,
            engine: LayoutEngine::new(config),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn model(&self) -> &HeaderModel<S> {
        &self.model
    }

    pub fn axis(&self) -> &A {
        &self.axis
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn config(&self) -> &HeaderConfig {
        self.engine.config()
    }

    fn inputs(&self) -> LayoutInputs<'_, S, M, A> {
        LayoutInputs {
            orientation: self.orientation,
            model: &self.model,
            measurer: &self.measurer,
            axis: &self.axis,
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Drop the cached level boundaries; the next query recomputes them.
    pub fn invalidate(&mut self) {
        self.engine.invalidate();
    }

    /// Swap in a new model, returning the old one.
    pub fn set_model(&mut self, model: HeaderModel<S>) -> HeaderModel<S> {
        debug!("{:?} header model replaced", self.orientation);
        self.invalidate();
        std::mem::replace(&mut self.model, model)
    }

    /// Model content changed wholesale.
    pub fn reset(&mut self) {
        self.invalidate();
    }

    /// Re-run layout from scratch now rather than on the next query.
    pub fn do_items_layout(&mut self) {
        self.invalidate();
        self.ensure_layout();
    }

    /// Fonts or style metrics changed; sizes must be re-measured.
    pub fn font_changed(&mut self) {
        self.invalidate();
    }

    pub fn set_config(&mut self, config: HeaderConfig) {
        self.engine.set_config(config);
    }

    pub fn set_measurer(&mut self, measurer: M) {
        self.measurer = measurer;
        self.invalidate();
    }

    /// Mutable access to the model's data source. The layout is invalidated
    /// because counts or cell contents may change.
    pub fn source_mut(&mut self) -> &mut S {
        self.invalidate();
        self.model.source_mut()
    }

    /// Mutable access to the section axis. The layout is invalidated because
    /// the section count may change.
    pub fn axis_mut(&mut self) -> &mut A {
        self.invalidate();
        &mut self.axis
    }

    // ------------------------------------------------------------------
    // Model access for the host
    // ------------------------------------------------------------------

    /// Merge cells of this header's orientation; see
    /// [`HeaderModel::register_span`].
    pub fn register_span(
        &mut self,
        level: usize,
        section: usize,
        level_extent: i32,
        section_extent: i32,
    ) {
        self.model
            .register_span(self.orientation, level, section, level_extent, section_extent);
        self.invalidate();
    }

    /// Remove every merge of this header's orientation.
    pub fn clear_spans(&mut self) {
        self.model.clear_spans(self.orientation);
        self.invalidate();
    }

    /// Anchor of the cell at `(level, section)`.
    pub fn header_index(&self, level: usize, section: usize) -> Option<CellPosition> {
        self.model.resolve_anchor(self.orientation, level, section)
    }

    /// Data for a cell in this header's orientation.
    pub fn header_data(&self, pos: CellPosition, role: HeaderRole) -> Option<HeaderValue> {
        self.model.header_data(self.orientation, pos, role)
    }

    pub fn level_count(&self) -> usize {
        self.model.level_count(self.orientation)
    }

    /// Sections known to both the model and the axis.
    pub fn section_count(&self) -> usize {
        self.model
            .section_count(self.orientation)
            .min(self.axis.section_count())
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Current level boundaries, recomputed if stale.
    pub fn ensure_layout(&mut self) -> &LevelBoundaryTable {
        let inputs = LayoutInputs {
            orientation: self.orientation,
            model: &self.model,
            measurer: &self.measurer,
            axis: &self.axis,
        };
        self.engine.ensure(&inputs)
    }

    /// Full header thickness across all levels.
    pub fn header_thickness(&mut self) -> i32 {
        self.ensure_layout().total()
    }

    /// Natural size of a section across the whole header depth.
    pub fn section_size_hint(&self, section: usize) -> Size {
        self.engine.compute_section_extent(&self.inputs(), section)
    }

    /// Natural size of the whole header: the sum of all section hints along
    /// the main axis and the level stack across it.
    pub fn size_hint(&mut self) -> Size {
        let main = (0..self.section_count())
            .map(|s| self.section_size_hint(s).main(self.orientation))
            .sum();
        let depth = self.header_thickness();
        Size::from_axes(self.orientation, main, depth)
    }
}

impl<S, M> MultiLevelHeader<S, M, SectionTrack>
where
    S: HeaderDataSource,
    M: ContentMeasurer,
{
    /// Size every visible section to its content hint, keeping `fallback`
    /// for sections whose hint is empty.
    pub fn resize_sections_to_contents(&mut self, fallback: i32) {
        let sizes: Vec<i32> = (0..self.section_count())
            .map(|s| self.section_size_hint(s).main(self.orientation))
            .collect();
        for (section, size) in sizes.into_iter().enumerate() {
            if self.axis.is_section_hidden(section) {
                continue;
            }
            let size = if size > 0 { size } else { fallback };
            self.axis.set_section_size(section, size);
        }
    }
}

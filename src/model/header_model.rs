//! A header data source combined with the merges drawn over it.

use log::debug;

use super::{HeaderDataSource, Span, SpanRegistry};
use crate::types::{CellPosition, HeaderRole, HeaderValue, Orientation};

/// Wraps a [`HeaderDataSource`] and owns the [`SpanRegistry`] for it.
///
/// All merge mutation goes through [`register_span`](Self::register_span) and
/// [`clear_spans`](Self::clear_spans); span roles are answered here and never
/// reach the source.
#[derive(Debug, Clone, Default)]
pub struct HeaderModel<S> {
    source: S,
    spans: SpanRegistry,
}

impl<S: HeaderDataSource> HeaderModel<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            spans: SpanRegistry::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the data source. Views showing this model must be
    /// reset afterwards if the grid dimensions changed.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn spans(&self) -> &SpanRegistry {
        &self.spans
    }

    pub fn level_count(&self, orientation: Orientation) -> usize {
        self.source.level_count(orientation)
    }

    pub fn section_count(&self, orientation: Orientation) -> usize {
        self.source.section_count(orientation)
    }

    /// Whether `(level, section)` lies inside the header grid.
    pub fn contains(&self, orientation: Orientation, level: usize, section: usize) -> bool {
        level < self.level_count(orientation) && section < self.section_count(orientation)
    }

    /// Anchor of the merge covering `(level, section)`, the cell itself when it
    /// is not merged, or `None` when it lies outside the grid.
    pub fn resolve_anchor(
        &self,
        orientation: Orientation,
        level: usize,
        section: usize,
    ) -> Option<CellPosition> {
        if !self.contains(orientation, level, section) {
            return None;
        }
        let pos = CellPosition::new(level, section);
        Some(
            self.spans
                .get(orientation, pos)
                .map_or(pos, |span| span.anchor),
        )
    }

    /// Merge `level_extent × section_extent` cells starting at `(level, section)`.
    ///
    /// Ignored when an extent is not positive or the anchor is outside the grid.
    /// Extents running past the grid are clamped. Cells already covered by
    /// another merge are taken over by this one.
    pub fn register_span(
        &mut self,
        orientation: Orientation,
        level: usize,
        section: usize,
        level_extent: i32,
        section_extent: i32,
    ) {
        let (Ok(levels), Ok(sections)) = (
            usize::try_from(level_extent),
            usize::try_from(section_extent),
        ) else {
            debug!("ignoring {orientation:?} span at ({level}, {section}): negative extent");
            return;
        };
        if levels == 0 || sections == 0 {
            debug!("ignoring {orientation:?} span at ({level}, {section}): zero extent");
            return;
        }
        if !self.contains(orientation, level, section) {
            debug!("ignoring {orientation:?} span at ({level}, {section}): anchor out of bounds");
            return;
        }

        let max_levels = self.level_count(orientation) - level;
        let max_sections = self.section_count(orientation) - section;
        if levels > max_levels || sections > max_sections {
            debug!(
                "clamping {orientation:?} span at ({level}, {section}) from {levels}x{sections} to {}x{}",
                levels.min(max_levels),
                sections.min(max_sections)
            );
        }

        let span = Span::new(
            CellPosition::new(level, section),
            levels.min(max_levels),
            sections.min(max_sections),
        );
        self.spans.insert(orientation, span);
    }

    /// Remove every merge of one orientation.
    pub fn clear_spans(&mut self, orientation: Orientation) {
        self.spans.clear(orientation);
    }

    /// Span covering `pos`, clamped to the current grid dimensions.
    pub fn span_at(&self, orientation: Orientation, pos: CellPosition) -> Option<Span> {
        let span = self.spans.get(orientation, pos)?;
        let max_levels = self
            .level_count(orientation)
            .saturating_sub(span.anchor.level);
        let max_sections = self
            .section_count(orientation)
            .saturating_sub(span.anchor.section);
        Some(Span::new(
            span.anchor,
            span.level_extent.min(max_levels),
            span.section_extent.min(max_sections),
        ))
    }

    /// `(level_extent, section_extent)` of the merge covering `pos`; `(1, 1)`
    /// when unmerged.
    pub fn span_extents(&self, orientation: Orientation, pos: CellPosition) -> (usize, usize) {
        self.span_at(orientation, pos)
            .map_or((1, 1), |span| (span.level_extent, span.section_extent))
    }

    /// Role-keyed data for a cell. Span roles come from the registry; all
    /// other roles are delegated to the source.
    pub fn header_data(
        &self,
        orientation: Orientation,
        pos: CellPosition,
        role: HeaderRole,
    ) -> Option<HeaderValue> {
        if !self.contains(orientation, pos.level, pos.section) {
            return None;
        }
        let (levels, sections) = self.span_extents(orientation, pos);
        match role {
            HeaderRole::SectionSpan => Some(HeaderValue::Int(extent_value(sections))),
            HeaderRole::LevelSpan => Some(HeaderValue::Int(extent_value(levels))),
            _ => self.source.data_for(orientation, pos, role),
        }
    }

    /// Display text of a cell, if any.
    pub fn text(&self, orientation: Orientation, pos: CellPosition) -> Option<String> {
        self.header_data(orientation, pos, HeaderRole::Display)
            .and_then(|v| v.as_text().map(str::to_string))
    }

    /// Whether the cell is flagged for rotated text.
    pub fn is_rotated(&self, orientation: Orientation, pos: CellPosition) -> bool {
        self.header_data(orientation, pos, HeaderRole::Rotation)
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }
}

fn extent_value(extent: usize) -> i32 {
    i32::try_from(extent).unwrap_or(i32::MAX)
}

//! Covering rectangles and paint descriptors for the external painter.
//!
//! Nothing is drawn here. Each merged cell gets one rectangle spanning from
//! the start of its first section to the end of its last, and from the top of
//! its first level to the bottom of its last, so the cells of a level tile the
//! level's strip exactly.

use serde::Serialize;

use super::MultiLevelHeader;
use crate::layout::{ContentMeasurer, SectionAxis};
use crate::model::HeaderDataSource;
use crate::types::{Alignment, CellPosition, FontSpec, HeaderRole, Rect};

/// Selection state the host exposes for highlight decisions.
pub trait SelectionSource {
    /// Whether every cell of a data column (or row) is selected.
    fn is_section_fully_selected(&self, section: usize) -> bool;
}

/// No selection model attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSelection;

impl SelectionSource for NoSelection {
    fn is_section_fully_selected(&self, _section: usize) -> bool {
        false
    }
}

impl<F: Fn(usize) -> bool> SelectionSource for F {
    fn is_section_fully_selected(&self, section: usize) -> bool {
        self(section)
    }
}

/// Everything a painter needs to draw one (possibly merged) header cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderCellPaint {
    pub anchor: CellPosition,
    pub rect: Rect,
    pub text: String,
    pub alignment: Alignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub rotated: bool,
    /// Both the first and last spanned sections are fully selected
    pub selected: bool,
}

impl<S, M, A> MultiLevelHeader<S, M, A>
where
    S: HeaderDataSource,
    M: ContentMeasurer,
    A: SectionAxis,
{
    /// Rectangle covered by the merged cell containing `pos`, in viewport
    /// coordinates. Covered cells resolve to their anchor first. `None` if
    /// `pos` is outside the header or the section axis has no geometry for it.
    pub fn covering_rect(&mut self, pos: CellPosition) -> Option<Rect> {
        let o = self.orientation;
        let anchor = self.header_index(pos.level, pos.section)?;
        let (level_extent, section_extent) = self.model.span_extents(o, anchor);
        let last_level = anchor.level + level_extent - 1;
        let last_section = (anchor.section + section_extent - 1)
            .min(self.axis.section_count().saturating_sub(1));

        let (main_start, _) = self.axis.section_span(anchor.section)?;
        let (last_start, last_size) = self.axis.section_span(last_section)?;
        let main_end = last_start.saturating_add(last_size);

        let levels = self.ensure_layout();
        let depth_start = levels.start_of(anchor.level);
        let depth_end = levels.boundary(last_level)?;

        Some(Rect::from_axes(
            o,
            main_start,
            main_end.saturating_sub(main_start),
            depth_start,
            depth_end - depth_start,
        ))
    }

    /// Paint descriptors for every level of one section, one per distinct
    /// anchor, outermost level first. Merged cells reaching into this section
    /// from elsewhere are included with their full rectangle.
    pub fn paint_cells<Sel: SelectionSource>(
        &mut self,
        section: usize,
        selection: &Sel,
    ) -> Vec<HeaderCellPaint> {
        let mut anchors: Vec<CellPosition> = Vec::new();
        for level in 0..self.level_count() {
            if let Some(anchor) = self.header_index(level, section) {
                if !anchors.contains(&anchor) {
                    anchors.push(anchor);
                }
            }
        }
        anchors
            .into_iter()
            .filter_map(|anchor| self.paint_cell(anchor, selection))
            .collect()
    }

    /// Paint descriptors for every distinct anchor in the header, ordered by
    /// level then section.
    pub fn paint_all<Sel: SelectionSource>(&mut self, selection: &Sel) -> Vec<HeaderCellPaint> {
        self.anchors()
            .into_iter()
            .filter_map(|anchor| self.paint_cell(anchor, selection))
            .collect()
    }

    /// Every distinct anchor, ordered by level then section.
    pub fn anchors(&self) -> Vec<CellPosition> {
        let mut anchors: Vec<CellPosition> = (0..self.level_count())
            .flat_map(|level| (0..self.section_count()).map(move |section| (level, section)))
            .filter_map(|(level, section)| self.header_index(level, section))
            .collect();
        anchors.sort();
        anchors.dedup();
        anchors
    }

    /// Paint descriptor for the merged cell containing `pos`.
    pub fn paint_cell<Sel: SelectionSource>(
        &mut self,
        pos: CellPosition,
        selection: &Sel,
    ) -> Option<HeaderCellPaint> {
        let anchor = self.header_index(pos.level, pos.section)?;
        let rect = self.covering_rect(anchor)?;
        let o = self.orientation;
        let data = |role| self.model.header_data(o, anchor, role);

        let (_, section_extent) = self.model.span_extents(o, anchor);
        let last_section = anchor.section + section_extent - 1;
        let selected = selection.is_section_fully_selected(anchor.section)
            && selection.is_section_fully_selected(last_section);

        Some(HeaderCellPaint {
            anchor,
            rect,
            text: data(HeaderRole::Display)
                .and_then(|v| v.as_text().map(str::to_string))
                .unwrap_or_default(),
            alignment: data(HeaderRole::TextAlignment)
                .and_then(|v| v.as_alignment())
                .unwrap_or_default(),
            font: data(HeaderRole::Font).and_then(|v| v.as_font().cloned()),
            icon: data(HeaderRole::Decoration).and_then(|v| v.as_icon().map(str::to_string)),
            foreground: data(HeaderRole::Foreground).and_then(|v| v.as_brush().map(str::to_string)),
            background: data(HeaderRole::Background).and_then(|v| v.as_brush().map(str::to_string)),
            rotated: data(HeaderRole::Rotation)
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            selected,
        })
    }
}

//! Serializable snapshot of a header layout, used by the CLI and the WASM
//! binding.

use serde::Serialize;

use super::MultiLevelHeader;
use crate::layout::{ContentMeasurer, SectionAxis};
use crate::model::HeaderDataSource;
use crate::types::{Orientation, Rect};

/// One section of the underlying single-level header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionReport {
    pub section: usize,
    pub start: i32,
    pub size: i32,
    pub hidden: bool,
}

/// One merged (or plain) header cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellReport {
    pub level: usize,
    pub section: usize,
    pub level_extent: usize,
    pub section_extent: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub rect: Rect,
}

/// The whole header: level boundaries, sections and every anchor's rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    pub orientation: Orientation,
    pub level_boundaries: Vec<i32>,
    pub thickness: i32,
    pub sections: Vec<SectionReport>,
    pub cells: Vec<CellReport>,
}

impl<S, M, A> MultiLevelHeader<S, M, A>
where
    S: HeaderDataSource,
    M: ContentMeasurer,
    A: SectionAxis,
{
    pub fn layout_report(&mut self) -> LayoutReport {
        let level_boundaries = self.ensure_layout().as_slice().to_vec();
        let thickness = level_boundaries.last().copied().unwrap_or(0);

        let sections = (0..self.section_count())
            .filter_map(|section| {
                let (start, size) = self.axis.section_span(section)?;
                Some(SectionReport {
                    section,
                    start,
                    size,
                    hidden: self.axis.is_section_hidden(section),
                })
            })
            .collect();

        let cells = self
            .anchors()
            .into_iter()
            .filter_map(|anchor| {
                let rect = self.covering_rect(anchor)?;
                let (level_extent, section_extent) =
                    self.model.span_extents(self.orientation, anchor);
                Some(CellReport {
                    level: anchor.level,
                    section: anchor.section,
                    level_extent,
                    section_extent,
                    text: self.model.text(self.orientation, anchor),
                    rect,
                })
            })
            .collect();

        LayoutReport {
            orientation: self.orientation,
            level_boundaries,
            thickness,
            sections,
            cells,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::layout::{SectionTrack, TextMetrics};
    use crate::model::{HeaderModel, StaticHeaderData};
    use crate::types::{CellPosition, HeaderConfig};

    #[test]
    fn test_report_serializes_camel_case() {
        let mut data = StaticHeaderData::horizontal(1, 2);
        data.table_mut(Orientation::Horizontal)
            .set_text(CellPosition::new(0, 0), "Name");
        let mut h = MultiLevelHeader::new(
            Orientation::Horizontal,
            HeaderModel::new(data),
            TextMetrics::default(),
            SectionTrack::new(2, 60),
            HeaderConfig::default(),
        );
        h.register_span(0, 0, 1, 2);

        let report = h.layout_report();
        assert_eq!(report.cells.len(), 1);
        assert_eq!(report.cells[0].rect, Rect::new(0, 0, 120, 24));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["levelBoundaries"], serde_json::json!([24]));
        assert_eq!(json["cells"][0]["sectionExtent"], 2);
        assert_eq!(json["cells"][0]["text"], "Name");
        assert_eq!(json["orientation"], "horizontal");
    }
}

//! JSON header definitions.
//!
//! A definition describes one header: its grid size, labels, per-cell
//! attributes, merges and section geometry.
//!
//! ```json
//! {
//!   "orientation": "horizontal",
//!   "levels": 2,
//!   "sections": 4,
//!   "labels": [["Region", "Sales", "", "Total"], ["", "Q1", "Q2", ""]],
//!   "spans": [
//!     { "level": 0, "section": 0, "levelExtent": 2, "sectionExtent": 1 },
//!     { "level": 0, "section": 1, "levelExtent": 1, "sectionExtent": 2 }
//!   ],
//!   "sectionSizes": [90],
//!   "hiddenSections": [],
//!   "config": { "spanRounding": "floor" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{HeaderError, Result};
use crate::layout::{SectionTrack, TextMetrics};
use crate::model::{CellAttributes, HeaderModel, StaticHeaderData};
use crate::types::{CellPosition, HeaderConfig, Orientation};
use crate::viewer::MultiLevelHeader;

/// A header built from a definition: static data, fixed-pitch text metrics and
/// a self-contained section track.
pub type StaticHeaderView = MultiLevelHeader<StaticHeaderData, TextMetrics, SectionTrack>;

/// A merge request as written in a definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanDefinition {
    pub level: usize,
    pub section: usize,
    pub level_extent: i32,
    pub section_extent: i32,
}

/// Attributes for one cell, beyond its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellDefinition {
    pub level: usize,
    pub section: usize,
    #[serde(flatten)]
    pub attributes: CellAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderDefinition {
    #[serde(default)]
    pub orientation: Orientation,
    pub levels: usize,
    pub sections: usize,
    /// One row of labels per level; empty strings leave the cell unlabeled
    #[serde(default)]
    pub labels: Vec<Vec<String>>,
    #[serde(default)]
    pub cells: Vec<CellDefinition>,
    #[serde(default)]
    pub spans: Vec<SpanDefinition>,
    /// Explicit section sizes by index; missing sections are sized to contents
    #[serde(default)]
    pub section_sizes: Vec<i32>,
    #[serde(default)]
    pub hidden_sections: Vec<usize>,
    #[serde(default)]
    pub config: HeaderConfig,
}

impl HeaderDefinition {
    pub fn from_json(json: &str) -> Result<Self> {
        let def: Self = serde_json::from_str(json)?;
        def.validate()?;
        Ok(def)
    }

    /// Check the definition is consistent with its own dimensions.
    ///
    /// Spans are deliberately not checked: out-of-range merges are ignored or
    /// clamped when registered, as for any other caller.
    pub fn validate(&self) -> Result<()> {
        if self.levels == 0 {
            return Err(HeaderError::InvalidDefinition(
                "a header needs at least one level".into(),
            ));
        }
        if self.labels.len() > self.levels {
            return Err(HeaderError::InvalidDefinition(format!(
                "{} label rows for {} levels",
                self.labels.len(),
                self.levels
            )));
        }
        if let Some((level, row)) = self
            .labels
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() > self.sections)
        {
            return Err(HeaderError::InvalidDefinition(format!(
                "label row {level} has {} entries for {} sections",
                row.len(),
                self.sections
            )));
        }
        if let Some(cell) = self
            .cells
            .iter()
            .find(|c| c.level >= self.levels || c.section >= self.sections)
        {
            return Err(HeaderError::InvalidDefinition(format!(
                "cell ({}, {}) is outside a {}x{} header",
                cell.level, cell.section, self.levels, self.sections
            )));
        }
        if self.section_sizes.len() > self.sections {
            return Err(HeaderError::InvalidDefinition(format!(
                "{} section sizes for {} sections",
                self.section_sizes.len(),
                self.sections
            )));
        }
        if let Some(section) = self.hidden_sections.iter().find(|s| **s >= self.sections) {
            return Err(HeaderError::InvalidDefinition(format!(
                "hidden section {section} does not exist"
            )));
        }
        Ok(())
    }

    /// Data source holding this definition's labels and cell attributes.
    pub fn data(&self) -> StaticHeaderData {
        let mut data = match self.orientation {
            Orientation::Horizontal => StaticHeaderData::horizontal(self.levels, self.sections),
            Orientation::Vertical => StaticHeaderData::vertical(self.levels, self.sections),
        };
        let table = data.table_mut(self.orientation);
        for (level, row) in self.labels.iter().enumerate() {
            for (section, label) in row.iter().enumerate() {
                if !label.is_empty() {
                    table.set_text(CellPosition::new(level, section), label.as_str());
                }
            }
        }
        for cell in &self.cells {
            let pos = CellPosition::new(cell.level, cell.section);
            // Attributes without text keep the label
            let text = cell
                .attributes
                .text
                .clone()
                .or_else(|| table.cell(pos).and_then(|c| c.text.clone()));
            table.set(
                pos,
                CellAttributes {
                    text,
                    ..cell.attributes.clone()
                },
            );
        }
        data
    }

    /// Build a ready-to-query header view.
    ///
    /// Sections without an explicit size are sized to their content hint,
    /// falling back to the configured default section size.
    pub fn build(&self, metrics: TextMetrics) -> Result<StaticHeaderView> {
        self.validate()?;

        let mut track = SectionTrack::new(self.sections, self.config.default_section_size);
        for section in &self.hidden_sections {
            track.set_section_hidden(*section, true);
        }

        let mut view = MultiLevelHeader::new(
            self.orientation,
            HeaderModel::new(self.data()),
            metrics,
            track,
            self.config.clone(),
        );
        for span in &self.spans {
            view.register_span(span.level, span.section, span.level_extent, span.section_extent);
        }

        view.resize_sections_to_contents(self.config.default_section_size);
        let track = view.axis_mut();
        for (section, size) in self.section_sizes.iter().enumerate() {
            track.set_section_size(section, *size);
        }
        Ok(view)
    }
}

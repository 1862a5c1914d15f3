//! Pluggable header data.
//!
//! A [`HeaderDataSource`] answers "how big is the header grid" and "what is
//! stored in this cell for this role". Merging is layered on top by
//! [`HeaderModel`](super::HeaderModel), so sources never see span roles.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Alignment, CellPosition, FontSpec, HeaderRole, HeaderValue, Orientation, Size};

/// Capability interface for anything that can feed a multi-level header.
pub trait HeaderDataSource {
    /// Number of levels (header depth) for an orientation.
    fn level_count(&self, orientation: Orientation) -> usize;

    /// Number of sections (data columns or rows) for an orientation.
    fn section_count(&self, orientation: Orientation) -> usize;

    /// Data for a cell. Positions are already bounds-checked.
    fn data_for(
        &self,
        orientation: Orientation,
        pos: CellPosition,
        role: HeaderRole,
    ) -> Option<HeaderValue>;
}

impl<T: HeaderDataSource + ?Sized> HeaderDataSource for &T {
    fn level_count(&self, orientation: Orientation) -> usize {
        (**self).level_count(orientation)
    }

    fn section_count(&self, orientation: Orientation) -> usize {
        (**self).section_count(orientation)
    }

    fn data_for(
        &self,
        orientation: Orientation,
        pos: CellPosition,
        role: HeaderRole,
    ) -> Option<HeaderValue> {
        (**self).data_for(orientation, pos, role)
    }
}

/// Attributes stored for one header cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CellAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_hint: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_tip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_tip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whats_this: Option<String>,
    pub rotated: bool,
}

impl CellAttributes {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    fn value(&self, role: HeaderRole) -> Option<HeaderValue> {
        match role {
            HeaderRole::Display => self.text.clone().map(HeaderValue::Text),
            HeaderRole::SizeHint => self.size_hint.map(HeaderValue::Size),
            HeaderRole::Font => self.font.clone().map(HeaderValue::Font),
            HeaderRole::Decoration => self.icon.clone().map(HeaderValue::Icon),
            HeaderRole::Foreground => self.foreground.clone().map(HeaderValue::Brush),
            HeaderRole::Background => self.background.clone().map(HeaderValue::Brush),
            HeaderRole::TextAlignment => self.alignment.map(HeaderValue::Alignment),
            HeaderRole::ToolTip => self.tool_tip.clone().map(HeaderValue::Text),
            HeaderRole::StatusTip => self.status_tip.clone().map(HeaderValue::Text),
            HeaderRole::WhatsThis => self.whats_this.clone().map(HeaderValue::Text),
            HeaderRole::Rotation => Some(HeaderValue::Bool(self.rotated)),
            HeaderRole::SectionSpan | HeaderRole::LevelSpan => None,
        }
    }
}

/// One orientation's grid of cell attributes.
#[derive(Debug, Clone, Default)]
pub struct HeaderTable {
    level_count: usize,
    section_count: usize,
    cells: HashMap<CellPosition, CellAttributes>,
}

impl HeaderTable {
    pub fn new(level_count: usize, section_count: usize) -> Self {
        Self {
            level_count,
            section_count,
            cells: HashMap::new(),
        }
    }

    pub fn level_count(&self) -> usize {
        self.level_count
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    /// Change the grid dimensions; cells outside the new bounds are dropped.
    pub fn resize(&mut self, level_count: usize, section_count: usize) {
        self.level_count = level_count;
        self.section_count = section_count;
        self.cells
            .retain(|pos, _| pos.level < level_count && pos.section < section_count);
    }

    /// Store attributes for a cell. Out-of-bounds positions are ignored.
    pub fn set(&mut self, pos: CellPosition, attrs: CellAttributes) {
        if pos.level < self.level_count && pos.section < self.section_count {
            self.cells.insert(pos, attrs);
        }
    }

    /// Set just the display text of a cell, keeping its other attributes.
    pub fn set_text(&mut self, pos: CellPosition, text: impl Into<String>) {
        if let Some(attrs) = self.cell_mut(pos) {
            attrs.text = Some(text.into());
        }
    }

    pub fn cell(&self, pos: CellPosition) -> Option<&CellAttributes> {
        self.cells.get(&pos)
    }

    /// Attributes of an in-bounds cell, created empty on first access.
    pub fn cell_mut(&mut self, pos: CellPosition) -> Option<&mut CellAttributes> {
        if pos.level < self.level_count && pos.section < self.section_count {
            Some(self.cells.entry(pos).or_default())
        } else {
            None
        }
    }
}

/// In-memory data source holding a [`HeaderTable`] per orientation.
#[derive(Debug, Clone, Default)]
pub struct StaticHeaderData {
    horizontal: HeaderTable,
    vertical: HeaderTable,
}

impl StaticHeaderData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source with a horizontal header of the given size and an empty vertical one.
    pub fn horizontal(level_count: usize, section_count: usize) -> Self {
        Self {
            horizontal: HeaderTable::new(level_count, section_count),
            vertical: HeaderTable::default(),
        }
    }

    /// Source with a vertical header of the given size and an empty horizontal one.
    pub fn vertical(level_count: usize, section_count: usize) -> Self {
        Self {
            horizontal: HeaderTable::default(),
            vertical: HeaderTable::new(level_count, section_count),
        }
    }

    pub fn table(&self, orientation: Orientation) -> &HeaderTable {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    pub fn table_mut(&mut self, orientation: Orientation) -> &mut HeaderTable {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }
}

impl HeaderDataSource for StaticHeaderData {
    fn level_count(&self, orientation: Orientation) -> usize {
        self.table(orientation).level_count()
    }

    fn section_count(&self, orientation: Orientation) -> usize {
        self.table(orientation).section_count()
    }

    fn data_for(
        &self,
        orientation: Orientation,
        pos: CellPosition,
        role: HeaderRole,
    ) -> Option<HeaderValue> {
        self.table(orientation)
            .cell(pos)
            .and_then(|attrs| attrs.value(role))
    }
}

//! Common test utilities for merged-header integration tests.
//!
//! Provides a small builder for headers with fixed per-cell content sizes and
//! geometry assertions shared across test files.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::collections::HashMap;

use merged_header::{
    CellPosition, ContentMeasurer, HeaderConfig, HeaderDataSource, HeaderModel, MultiLevelHeader,
    Orientation, Rect, SectionTrack, Size, StaticHeaderData,
};

// ============================================================================
// Measurer
// ============================================================================

/// Content sizes looked up per anchor, with a default for everything else.
#[derive(Debug, Clone)]
pub struct FixedSizes {
    pub default: Size,
    pub sizes: HashMap<CellPosition, Size>,
}

impl FixedSizes {
    pub fn uniform(default: Size) -> Self {
        Self {
            default,
            sizes: HashMap::new(),
        }
    }

    pub fn with(mut self, level: usize, section: usize, size: Size) -> Self {
        self.sizes.insert(CellPosition::new(level, section), size);
        self
    }
}

impl ContentMeasurer for FixedSizes {
    fn content_size<S: HeaderDataSource>(
        &self,
        _model: &HeaderModel<S>,
        _orientation: Orientation,
        anchor: CellPosition,
    ) -> Size {
        self.sizes.get(&anchor).copied().unwrap_or(self.default)
    }
}

pub type TestHeader = MultiLevelHeader<StaticHeaderData, FixedSizes, SectionTrack>;

// ============================================================================
// Builder
// ============================================================================

pub struct HeaderBuilder {
    orientation: Orientation,
    levels: usize,
    sections: usize,
    section_size: i32,
    measurer: FixedSizes,
    spans: Vec<(usize, usize, i32, i32)>,
    config: HeaderConfig,
}

impl HeaderBuilder {
    /// Horizontal header, 50px sections, every cell 20x20.
    pub fn new(levels: usize, sections: usize) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            levels,
            sections,
            section_size: 50,
            measurer: FixedSizes::uniform(Size::new(20, 20)),
            spans: Vec::new(),
            config: HeaderConfig::default(),
        }
    }

    pub fn vertical(mut self) -> Self {
        self.orientation = Orientation::Vertical;
        self
    }

    pub fn section_size(mut self, size: i32) -> Self {
        self.section_size = size;
        self
    }

    pub fn measurer(mut self, measurer: FixedSizes) -> Self {
        self.measurer = measurer;
        self
    }

    pub fn span(mut self, level: usize, section: usize, levels: i32, sections: i32) -> Self {
        self.spans.push((level, section, levels, sections));
        self
    }

    pub fn config(mut self, config: HeaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> TestHeader {
        let data = match self.orientation {
            Orientation::Horizontal => StaticHeaderData::horizontal(self.levels, self.sections),
            Orientation::Vertical => StaticHeaderData::vertical(self.levels, self.sections),
        };
        let mut header = MultiLevelHeader::new(
            self.orientation,
            HeaderModel::new(data),
            self.measurer,
            SectionTrack::new(self.sections, self.section_size),
            self.config,
        );
        for (level, section, levels, sections) in self.spans {
            header.register_span(level, section, levels, sections);
        }
        header
    }
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert the rectangles tile `strip` exactly: all inside it, no two
/// overlapping, and their areas summing to the strip's area.
pub fn assert_tiles(strip: Rect, rects: &[Rect]) {
    for r in rects {
        assert!(
            r.x >= strip.x && r.right() <= strip.right() && r.y >= strip.y && r.bottom() <= strip.bottom(),
            "{r:?} escapes {strip:?}"
        );
    }
    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
        }
    }
    let area: i64 = rects
        .iter()
        .map(|r| i64::from(r.width) * i64::from(r.height))
        .sum();
    assert_eq!(
        area,
        i64::from(strip.width) * i64::from(strip.height),
        "rectangles leave gaps in {strip:?}"
    );
}

//! End-to-end tests for merged multi-level headers
//!
//! These tests drive a header the way a host table would: register merges,
//! then ask for anchors, level boundaries, hit tests and covering rectangles,
//! checking the geometry stays consistent across merges.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use common::{assert_tiles, FixedSizes, HeaderBuilder};
use merged_header::{
    CellPosition, HeaderConfig, HeaderModel, HeaderRole, Orientation, Point, Rect, SectionAxis,
    Size, SpanRounding, StaticHeaderData,
};
use test_case::test_case;

const H: Orientation = Orientation::Horizontal;

// ============================================================================
// SPAN REGISTRY
// ============================================================================

#[test]
fn test_covered_cells_share_a_stable_anchor() {
    let mut header = HeaderBuilder::new(3, 6).span(0, 1, 2, 3).build();
    let anchor = CellPosition::new(0, 1);

    for _ in 0..3 {
        for level in 0..2 {
            for section in 1..4 {
                assert_eq!(header.header_index(level, section), Some(anchor));
            }
        }
    }
    assert_eq!(header.header_index(2, 1), Some(CellPosition::new(2, 1)));
    assert_eq!(header.header_index(0, 4), Some(CellPosition::new(0, 4)));

    // Layout queries do not disturb resolution
    header.ensure_layout();
    assert_eq!(header.header_index(1, 3), Some(anchor));
}

#[test]
fn test_level_extent_clamped_to_header_depth() {
    let header = HeaderBuilder::new(2, 4).span(0, 0, 3, 1).build();
    let anchor = CellPosition::new(0, 0);
    assert_eq!(
        header.header_data(anchor, HeaderRole::LevelSpan),
        Some(merged_header::HeaderValue::Int(2))
    );
    assert_eq!(header.model().span_extents(H, anchor), (2, 1));
}

#[test]
fn test_section_extent_clamped_to_section_count() {
    let header = HeaderBuilder::new(1, 4).span(0, 2, 1, 10).build();
    assert_eq!(header.model().span_extents(H, CellPosition::new(0, 2)), (1, 2));
}

#[test_case(0, 1 ; "zero level extent")]
#[test_case(1, 0 ; "zero section extent")]
#[test_case(-2, 2 ; "negative level extent")]
#[test_case(2, -1 ; "negative section extent")]
fn test_non_positive_extents_are_ignored(levels: i32, sections: i32) {
    let header = HeaderBuilder::new(2, 4).span(0, 1, levels, sections).build();
    assert!(header.model().spans().is_empty(H));
    assert_eq!(header.header_index(0, 1), Some(CellPosition::new(0, 1)));
}

#[test]
fn test_clear_spans_leaves_other_orientation() {
    let mut data = StaticHeaderData::horizontal(2, 4);
    data.table_mut(Orientation::Vertical).resize(2, 5);
    let mut model = HeaderModel::new(data);
    model.register_span(H, 0, 0, 2, 2);
    model.register_span(Orientation::Vertical, 0, 1, 1, 3);

    model.clear_spans(H);

    assert_eq!(model.resolve_anchor(H, 1, 1), Some(CellPosition::new(1, 1)));
    assert_eq!(
        model.resolve_anchor(Orientation::Vertical, 0, 3),
        Some(CellPosition::new(0, 1))
    );
    assert_eq!(
        model.header_data(
            Orientation::Vertical,
            CellPosition::new(0, 2),
            HeaderRole::SectionSpan
        ),
        Some(merged_header::HeaderValue::Int(3))
    );
}

#[test]
fn test_overlapping_spans_last_write_wins() {
    let header = HeaderBuilder::new(2, 5)
        .span(0, 0, 1, 3)
        .span(0, 2, 2, 2)
        .build();

    assert_eq!(header.header_index(0, 1), Some(CellPosition::new(0, 0)));
    assert_eq!(header.header_index(0, 2), Some(CellPosition::new(0, 2)));
    assert_eq!(header.header_index(1, 3), Some(CellPosition::new(0, 2)));
}

// ============================================================================
// LEVEL BOUNDARIES
// ============================================================================

#[test_case(1, 3, &[] ; "single level")]
#[test_case(3, 4, &[(0, 0, 3, 1)] ; "full depth merge")]
#[test_case(4, 6, &[(0, 1, 2, 2), (2, 0, 2, 6)] ; "mixed merges")]
#[test_case(2, 1, &[(1, 0, 5, 5)] ; "clamped merge")]
fn test_boundaries_have_one_entry_per_level_and_never_decrease(
    levels: usize,
    sections: usize,
    spans: &[(usize, usize, i32, i32)],
) {
    let mut builder = HeaderBuilder::new(levels, sections)
        .measurer(FixedSizes::uniform(Size::new(20, 17)).with(0, 1, Size::new(20, 61)));
    for &(level, section, l, s) in spans {
        builder = builder.span(level, section, l, s);
    }
    let mut header = builder.build();

    let table = header.ensure_layout().clone();
    assert_eq!(table.len(), levels);
    assert!(table.as_slice().windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_merged_depth_is_shared_between_levels() {
    // (0, 0) is 60 deep across 2 levels: each level needs 30, more than the
    // 20 any unmerged cell asks for
    let mut header = HeaderBuilder::new(3, 2)
        .span(0, 0, 2, 1)
        .measurer(FixedSizes::uniform(Size::new(20, 20)).with(0, 0, Size::new(20, 60)))
        .build();
    assert_eq!(header.ensure_layout().as_slice(), &[30, 60, 80]);
}

#[test]
fn test_unmerged_cell_can_outgrow_a_shared_level() {
    let mut header = HeaderBuilder::new(2, 2)
        .span(0, 0, 2, 1)
        .measurer(
            FixedSizes::uniform(Size::new(20, 20))
                .with(0, 0, Size::new(20, 60))
                .with(1, 1, Size::new(20, 45)),
        )
        .build();
    assert_eq!(header.ensure_layout().as_slice(), &[30, 75]);
}

#[test]
fn test_rounding_policy_applies_to_shares() {
    let build = |rounding| {
        HeaderBuilder::new(2, 1)
            .span(0, 0, 2, 1)
            .measurer(FixedSizes::uniform(Size::new(20, 25)))
            .config(HeaderConfig {
                span_rounding: rounding,
                ..HeaderConfig::default()
            })
            .build()
    };
    assert_eq!(build(SpanRounding::Floor).ensure_layout().as_slice(), &[12, 24]);
    assert_eq!(build(SpanRounding::Ceil).ensure_layout().as_slice(), &[13, 26]);
}

// ============================================================================
// HIT TESTING
// ============================================================================

#[test]
fn test_locate_matches_covering_rect_exactly() {
    let mut header = HeaderBuilder::new(3, 5)
        .section_size(30)
        .span(0, 1, 2, 3)
        .build();
    let anchor = CellPosition::new(0, 1);
    let rect = header.covering_rect(anchor).unwrap();
    assert_eq!(rect, Rect::new(30, 0, 90, 40));

    let thickness = header.header_thickness();
    for x in -5..(5 * 30 + 5) {
        for y in -5..(thickness + 5) {
            let hit = header.locate(x, y);
            if rect.contains(Point::new(x, y)) {
                assert_eq!(hit, Some(anchor), "({x}, {y}) inside {rect:?}");
            } else {
                assert_ne!(hit, Some(anchor), "({x}, {y}) outside {rect:?}");
            }
        }
    }
}

#[test]
fn test_pixel_on_level_boundary_belongs_to_lower_level() {
    let mut header = HeaderBuilder::new(2, 1).build();
    assert_eq!(header.locate(10, 19), Some(CellPosition::new(0, 0)));
    assert_eq!(header.locate(10, 20), Some(CellPosition::new(1, 0)));
    assert_eq!(header.locate(10, 40), None);
}

#[test]
fn test_locate_respects_scroll_offset_and_hidden_sections() {
    let mut header = HeaderBuilder::new(1, 4).span(0, 1, 1, 2).build();
    header.axis_mut().set_section_hidden(0, true);
    assert_eq!(header.locate(0, 0), Some(CellPosition::new(0, 1)));

    header.axis_mut().set_offset(60);
    assert_eq!(header.locate(0, 0), Some(CellPosition::new(0, 1)));
    assert_eq!(header.locate(45, 0), Some(CellPosition::new(0, 3)));
}

// ============================================================================
// COVERING RECTANGLES
// ============================================================================

#[test]
fn test_level_zero_is_tiled_with_a_merge() {
    let mut header = HeaderBuilder::new(2, 5).span(0, 1, 1, 2).build();
    let anchors: Vec<_> = header
        .anchors()
        .into_iter()
        .filter(|a| a.level == 0)
        .collect();
    assert_eq!(anchors.len(), 4);

    let rects: Vec<_> = anchors
        .iter()
        .map(|a| header.covering_rect(*a).unwrap())
        .collect();
    let levels = header.ensure_layout().clone();
    let strip = Rect::new(0, 0, header.axis().total_size(), levels.thickness(0).unwrap());
    assert_tiles(strip, &rects);
}

#[test]
fn test_every_level_is_tiled_with_mixed_merges() {
    let mut header = HeaderBuilder::new(3, 6)
        .span(0, 0, 1, 3)
        .span(0, 3, 3, 1)
        .span(1, 4, 2, 2)
        .measurer(FixedSizes::uniform(Size::new(20, 20)).with(0, 3, Size::new(20, 90)))
        .build();
    let levels = header.ensure_layout().clone();
    let width = header.axis().total_size();

    for level in 0..3 {
        // Merges reaching into this level from above are clipped to its strip
        let strip = Rect::new(0, levels.start_of(level), width, levels.thickness(level).unwrap());
        let mut rects: Vec<Rect> = Vec::new();
        for section in 0..6 {
            let anchor = header.header_index(level, section).unwrap();
            let r = header.covering_rect(anchor).unwrap();
            let clipped = Rect::new(r.x, strip.y, r.width, strip.height);
            if !rects.contains(&clipped) {
                rects.push(clipped);
            }
        }
        assert_tiles(strip, &rects);
    }
}

#[test]
fn test_vertical_covering_rects_transpose() {
    let mut header = HeaderBuilder::new(2, 3)
        .vertical()
        .section_size(25)
        .span(0, 0, 1, 2)
        .measurer(FixedSizes::uniform(Size::new(40, 10)))
        .build();
    assert_eq!(header.ensure_layout().as_slice(), &[40, 80]);
    assert_eq!(header.covering_rect(CellPosition::new(0, 0)), Some(Rect::new(0, 0, 40, 50)));
    assert_eq!(header.index_at(Point::new(39, 49)), Some(CellPosition::new(0, 0)));
    assert_eq!(header.index_at(Point::new(40, 49)), Some(CellPosition::new(1, 1)));
}

#[test]
fn test_vertical_level_span_divides_width() {
    let mut header = HeaderBuilder::new(3, 2)
        .vertical()
        .section_size(25)
        .span(0, 0, 2, 1)
        .measurer(FixedSizes::uniform(Size::new(30, 10)).with(0, 0, Size::new(80, 10)))
        .build();
    // 80 across two levels asks 40 of each, beating the unmerged 30
    assert_eq!(header.ensure_layout().as_slice(), &[40, 80, 110]);
    assert_eq!(header.covering_rect(CellPosition::new(0, 0)), Some(Rect::new(0, 0, 80, 25)));
    assert_eq!(header.covering_rect(CellPosition::new(2, 0)), Some(Rect::new(80, 0, 30, 25)));
    assert_eq!(header.index_at(Point::new(79, 10)), Some(CellPosition::new(0, 0)));
    assert_eq!(header.index_at(Point::new(80, 10)), Some(CellPosition::new(2, 0)));
    assert_eq!(header.index_at(Point::new(45, 30)), Some(CellPosition::new(1, 1)));
}

#[test]
fn test_covered_cells_report_the_merged_rect() {
    let mut header = HeaderBuilder::new(2, 4).span(0, 1, 2, 2).build();
    let merged = header.covering_rect(CellPosition::new(0, 1));
    assert_eq!(merged, Some(Rect::new(50, 0, 100, 40)));
    for pos in [(0, 2), (1, 1), (1, 2)] {
        assert_eq!(header.covering_rect(CellPosition::from(pos)), merged);
    }

    let mut rects: Vec<Rect> = Vec::new();
    for level in 0..2 {
        for section in 0..4 {
            let rect = header.covering_rect(CellPosition::new(level, section)).unwrap();
            if !rects.contains(&rect) {
                rects.push(rect);
            }
        }
    }
    assert_eq!(rects.len(), 5);
    assert_tiles(Rect::new(0, 0, 200, 40), &rects);
}

// ============================================================================
// OVERSIZED CONTENT
// ============================================================================

#[test]
fn test_huge_cells_saturate_instead_of_wrapping() {
    let mut header = HeaderBuilder::new(2, 3)
        .measurer(FixedSizes::uniform(Size::new(20, 1_500_000_000)))
        .build();
    assert_eq!(header.ensure_layout().as_slice(), &[1_500_000_000, i32::MAX]);
    assert_eq!(header.header_thickness(), i32::MAX);
    assert_eq!(header.index_at(Point::new(10, 2_000_000_000)), Some(CellPosition::new(1, 0)));
    assert_eq!(
        header.covering_rect(CellPosition::new(1, 2)),
        Some(Rect::new(100, 1_500_000_000, 50, i32::MAX - 1_500_000_000))
    );
}

// ============================================================================
// SCENARIO
// ============================================================================

#[test]
fn test_two_level_header_with_merged_pair() {
    let mut header = HeaderBuilder::new(2, 4)
        .span(0, 1, 1, 2)
        .measurer(FixedSizes::uniform(Size::new(10, 15)).with(0, 1, Size::new(40, 20)))
        .build();

    assert_eq!(
        header.header_data(CellPosition::new(0, 1), HeaderRole::SectionSpan),
        Some(merged_header::HeaderValue::Int(2))
    );
    assert_eq!(header.header_index(0, 2), Some(CellPosition::new(0, 1)));

    // 40 split across the two spanned sections
    assert_eq!(header.section_size_hint(1).width, 20);
    assert_eq!(header.section_size_hint(2).width, 20);
    assert_eq!(header.section_size_hint(0).width, 10);

    let levels = header.ensure_layout().clone();
    let sum: i32 = (0..2).map(|l| levels.thickness(l).unwrap()).sum();
    assert_eq!(levels.as_slice(), &[20, 35]);
    assert_eq!(header.header_thickness(), sum);
    assert_eq!(header.section_size_hint(1).height, sum);
}

#[test]
fn test_queries_after_span_change_see_new_layout() {
    let mut header = HeaderBuilder::new(2, 2)
        .measurer(FixedSizes::uniform(Size::new(20, 20)).with(0, 0, Size::new(20, 50)))
        .build();
    assert_eq!(header.ensure_layout().as_slice(), &[50, 70]);
    assert_eq!(header.locate(10, 55), Some(CellPosition::new(1, 0)));

    // The merge halves each level, so the header shrinks to 50
    header.register_span(0, 0, 2, 1);
    assert_eq!(header.locate(10, 55), None);
    assert_eq!(header.locate(10, 30), Some(CellPosition::new(0, 0)));
    assert_eq!(header.ensure_layout().as_slice(), &[25, 50]);

    header.clear_spans();
    assert_eq!(header.ensure_layout().as_slice(), &[50, 70]);
}

#[test]
fn test_paint_selection_needs_whole_span() {
    let mut header = HeaderBuilder::new(1, 4).span(0, 1, 1, 3).build();
    let selected = |s: usize| (1..=3).contains(&s);
    let cells = header.paint_cells(2, &selected);
    assert_eq!(cells.len(), 1);
    assert!(cells[0].selected);
    assert_eq!(cells[0].rect, Rect::new(50, 0, 150, 20));

    let partial = |s: usize| s == 1;
    assert!(!header.paint_cells(2, &partial)[0].selected);
}

#[test]
fn test_section_count_change_through_axis() {
    let mut header = HeaderBuilder::new(1, 2).build();
    header.axis_mut().set_section_count(1);
    assert_eq!(header.section_count(), 1);
    assert_eq!(header.axis().section_count(), 1);
    assert_eq!(header.locate(60, 0), None);
}

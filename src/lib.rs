//! merged-header - multi-level table headers with merged cells
//!
//! Extends a single-level table header into a stack of header levels whose
//! cells can be merged across levels and sections, spreadsheet style:
//! - Span registry resolving any covered cell to its merge anchor
//! - Level thickness and section size hints that share a merged cell's size
//!   across everything it spans
//! - Pixel hit testing that always lands on the merge anchor
//! - Covering rectangles that tile each level exactly
//!
//! Drawing, selection wiring and event delivery stay with the host.
//!
//! # Usage
//!
//! ```
//! use merged_header::{
//!     CellPosition, HeaderConfig, HeaderModel, MultiLevelHeader, Orientation, SectionTrack,
//!     StaticHeaderData, TextMetrics,
//! };
//!
//! let model = HeaderModel::new(StaticHeaderData::horizontal(2, 4));
//! let mut header = MultiLevelHeader::new(
//!     Orientation::Horizontal,
//!     model,
//!     TextMetrics::default(),
//!     SectionTrack::new(4, 80),
//!     HeaderConfig::default(),
//! );
//! header.register_span(0, 1, 1, 2);
//! assert_eq!(header.header_index(0, 2), Some(CellPosition::new(0, 1)));
//! assert_eq!(header.locate(170, 0), Some(CellPosition::new(0, 1)));
//! ```

pub mod definition;
pub mod error;
pub mod layout;
pub mod model;
pub mod types;
pub mod viewer;
pub mod wasm;

use wasm_bindgen::prelude::*;

pub use definition::{HeaderDefinition, StaticHeaderView};
pub use error::{HeaderError, Result};
pub use layout::{
    ContentMeasurer, LayoutEngine, LevelBoundaryTable, SectionAxis, SectionTrack, TextMetrics,
};
pub use model::{CellAttributes, HeaderDataSource, HeaderModel, Span, SpanRegistry, StaticHeaderData};
pub use types::*;
pub use viewer::{HeaderCellPaint, HelpKind, LayoutReport, MultiLevelHeader, NoSelection, SelectionSource};
pub use wasm::MergedHeader;

/// Lay out a JSON header definition and return the layout report as JSON
///
/// # Errors
/// Returns an error if the definition is malformed or inconsistent.
#[wasm_bindgen(js_name = "layoutHeader")]
pub fn layout_header(definition: &str) -> std::result::Result<String, JsValue> {
    let report = layout_definition(definition).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Parse a JSON header definition and produce its layout report.
///
/// # Errors
/// Returns an error if the definition is malformed or inconsistent.
pub fn layout_definition(definition: &str) -> Result<LayoutReport> {
    let def = HeaderDefinition::from_json(definition)?;
    let mut view = def.build(TextMetrics::default())?;
    Ok(view.layout_report())
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

//! JavaScript binding.
//!
//! ```javascript
//! import init, { MergedHeader } from 'merged-header';
//! await init();
//! const header = new MergedHeader(JSON.stringify(definition));
//! const cell = header.locate(x, y);          // [level, section] or undefined
//! const cells = header.coveringRects();      // [{ level, section, rect, ... }]
//! ```

use wasm_bindgen::prelude::*;

use crate::definition::{HeaderDefinition, StaticHeaderView};
use crate::layout::TextMetrics;
use crate::types::{CellPosition, Point};

/// A header built from a JSON definition, driven from JavaScript.
#[wasm_bindgen]
pub struct MergedHeader {
    view: StaticHeaderView,
}

fn position_to_js(pos: CellPosition) -> Option<Vec<u32>> {
    Some(vec![
        u32::try_from(pos.level).ok()?,
        u32::try_from(pos.section).ok()?,
    ])
}

#[wasm_bindgen]
impl MergedHeader {
    /// Build from a JSON header definition.
    #[wasm_bindgen(constructor)]
    pub fn new(definition: &str) -> Result<MergedHeader, JsValue> {
        console_error_panic_hook::set_once();
        let view = HeaderDefinition::from_json(definition)
            .and_then(|def| def.build(TextMetrics::default()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { view })
    }

    /// `[level, section]` of the anchor under a viewport point.
    #[wasm_bindgen]
    pub fn locate(&mut self, x: i32, y: i32) -> Option<Vec<u32>> {
        self.view
            .index_at(Point::new(x, y))
            .and_then(position_to_js)
    }

    /// `[level, section]` of the anchor covering a cell.
    #[wasm_bindgen(js_name = "headerIndex")]
    pub fn header_index(&self, level: usize, section: usize) -> Option<Vec<u32>> {
        self.view
            .header_index(level, section)
            .and_then(position_to_js)
    }

    #[wasm_bindgen(js_name = "registerSpan")]
    pub fn register_span(
        &mut self,
        level: usize,
        section: usize,
        level_extent: i32,
        section_extent: i32,
    ) {
        self.view
            .register_span(level, section, level_extent, section_extent);
    }

    #[wasm_bindgen(js_name = "clearSpans")]
    pub fn clear_spans(&mut self) {
        self.view.clear_spans();
    }

    /// Scroll the section axis.
    #[wasm_bindgen(js_name = "setOffset")]
    pub fn set_offset(&mut self, offset: i32) {
        self.view.axis_mut().set_offset(offset);
    }

    #[wasm_bindgen(js_name = "levelBoundaries")]
    pub fn level_boundaries(&mut self) -> Vec<i32> {
        self.view.ensure_layout().as_slice().to_vec()
    }

    /// Every anchor with its covering rectangle.
    #[wasm_bindgen(js_name = "coveringRects")]
    pub fn covering_rects(&mut self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.view.layout_report().cells)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Full layout report.
    #[wasm_bindgen]
    pub fn report(&mut self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.view.layout_report())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}

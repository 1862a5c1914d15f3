//! Natural content size of header cells.

use crate::model::{HeaderDataSource, HeaderModel};
use crate::types::{CellPosition, HeaderRole, Orientation, Size};

/// Content-size-hint callback supplied by the host.
///
/// Called for anchors only, before explicit size overrides, rotation and span
/// division are applied.
pub trait ContentMeasurer {
    fn content_size<S: HeaderDataSource>(
        &self,
        model: &HeaderModel<S>,
        orientation: Orientation,
        anchor: CellPosition,
    ) -> Size;
}

impl<F> ContentMeasurer for F
where
    F: Fn(Orientation, CellPosition) -> Size,
{
    fn content_size<S: HeaderDataSource>(
        &self,
        _model: &HeaderModel<S>,
        orientation: Orientation,
        anchor: CellPosition,
    ) -> Size {
        self(orientation, anchor)
    }
}

/// Fixed-pitch text measurement.
///
/// Good enough for tests, the CLI and hosts without font shaping: every
/// character is `char_width` wide and every line `line_height` tall at
/// `base_pixel_size`; font overrides scale both. Header labels are drawn bold,
/// which adds `bold_extra` per character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMetrics {
    pub char_width: i32,
    pub line_height: i32,
    pub base_pixel_size: i32,
    pub bold_extra: i32,
    /// Space around the text on every side
    pub padding: i32,
    /// Square icon size used when a cell has a decoration
    pub icon_size: i32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 7,
            line_height: 16,
            base_pixel_size: 12,
            bold_extra: 1,
            padding: 4,
            icon_size: 16,
        }
    }
}

impl TextMetrics {
    /// Size of `text` at `pixel_size`, padding included.
    pub fn measure_text(&self, text: &str, pixel_size: i32) -> Size {
        let base = self.base_pixel_size.max(1);
        let char_width = (self.char_width.saturating_mul(pixel_size) / base)
            .saturating_add(self.bold_extra)
            .max(0);
        let line_height = (self.line_height.saturating_mul(pixel_size) / base).max(0);

        let (columns, lines) = text.lines().fold((0usize, 0usize), |(w, n), line| {
            (w.max(line.chars().count()), n + 1)
        });
        let columns = i32::try_from(columns).unwrap_or(i32::MAX);
        let lines = i32::try_from(lines.max(1)).unwrap_or(i32::MAX);

        let padding = self.padding.saturating_mul(2);
        Size::new(
            columns.saturating_mul(char_width).saturating_add(padding),
            lines.saturating_mul(line_height).saturating_add(padding),
        )
    }
}

impl ContentMeasurer for TextMetrics {
    fn content_size<S: HeaderDataSource>(
        &self,
        model: &HeaderModel<S>,
        orientation: Orientation,
        anchor: CellPosition,
    ) -> Size {
        let pixel_size = model
            .header_data(orientation, anchor, HeaderRole::Font)
            .and_then(|v| v.as_font().and_then(|f| f.pixel_size))
            .unwrap_or(self.base_pixel_size);
        let text = model.text(orientation, anchor).unwrap_or_default();
        let mut size = self.measure_text(&text, pixel_size);

        let has_icon = model
            .header_data(orientation, anchor, HeaderRole::Decoration)
            .is_some_and(|v| v.as_icon().is_some());
        if has_icon {
            size.width = size
                .width
                .saturating_add(self.icon_size.saturating_add(self.padding));
            size.height = size
                .height
                .max(self.icon_size.saturating_add(self.padding.saturating_mul(2)));
        }
        size
    }
}

use serde::{Deserialize, Serialize};

use super::Size;

/// Kinds of per-cell data a header can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderRole {
    Display,
    /// Explicit size override; bypasses content measurement
    SizeHint,
    Font,
    /// Icon shown next to the text
    Decoration,
    Foreground,
    Background,
    TextAlignment,
    ToolTip,
    StatusTip,
    WhatsThis,
    /// Text drawn rotated by -90°; content size is transposed
    Rotation,
    /// Number of sections the cell's span covers (answered by the model)
    SectionSpan,
    /// Number of levels the cell's span covers (answered by the model)
    LevelSpan,
}

/// Horizontal text alignment within a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Font override for a header cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Pixel size; `None` keeps the header's base size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_size: Option<i32>,
    #[serde(default)]
    pub bold: bool,
}

/// A value returned for a [`HeaderRole`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum HeaderValue {
    Text(String),
    Size(Size),
    Font(FontSpec),
    /// Icon name, resolved by the painter
    Icon(String),
    /// CSS-style color string (`#RRGGBB`)
    Brush(String),
    Alignment(Alignment),
    Bool(bool),
    Int(i32),
}

impl HeaderValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_size(&self) -> Option<Size> {
        match self {
            Self::Size(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_font(&self) -> Option<&FontSpec> {
        match self {
            Self::Font(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_icon(&self) -> Option<&str> {
        match self {
            Self::Icon(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_brush(&self) -> Option<&str> {
        match self {
            Self::Brush(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_alignment(&self) -> Option<Alignment> {
        match self {
            Self::Alignment(a) => Some(*a),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }
}

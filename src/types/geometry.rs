//! Integer pixel geometry.
//!
//! Header layout works in whole device pixels so that covering rectangles of
//! neighbouring cells share edges exactly.

use serde::{Deserialize, Serialize};

use super::Orientation;

/// Width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Build a size from its main-axis (along the sections) and depth-axis
    /// (across the levels) components.
    pub fn from_axes(orientation: Orientation, main: i32, depth: i32) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(main, depth),
            Orientation::Vertical => Self::new(depth, main),
        }
    }

    /// Component running along the sections.
    pub fn main(self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Component running across the levels (header thickness).
    pub fn depth(self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.height,
            Orientation::Vertical => self.width,
        }
    }

    /// Swap width and height.
    pub fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Negative components become zero.
    pub fn clamped(self) -> Self {
        Self::new(self.width.max(0), self.height.max(0))
    }
}

/// A point in header viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Split into (main-axis, depth-axis) coordinates.
    pub fn axes(self, orientation: Orientation) -> (i32, i32) {
        match orientation {
            Orientation::Horizontal => (self.x, self.y),
            Orientation::Vertical => (self.y, self.x),
        }
    }
}

/// Axis-aligned rectangle; covers `[x, x + width) × [y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from main-axis and depth-axis intervals.
    pub fn from_axes(
        orientation: Orientation,
        main_start: i32,
        main_len: i32,
        depth_start: i32,
        depth_len: i32,
    ) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(main_start, depth_start, main_len, depth_len),
            Orientation::Vertical => Self::new(depth_start, main_start, depth_len, main_len),
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment test.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// True when the interiors overlap (shared edges do not count).
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

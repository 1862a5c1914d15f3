//! Single-level section geometry.
//!
//! The multi-level header sits on top of an ordinary one-level header that
//! owns section sizes, hiding and scrolling. [`SectionAxis`] is the slice of
//! that header the layout needs; [`SectionTrack`] is a self-contained
//! implementation with pre-computed positions and O(log n) lookup.

/// What the layout needs from the underlying single-level header.
pub trait SectionAxis {
    /// Number of sections.
    fn section_count(&self) -> usize;

    /// Section under a main-axis viewport pixel, if any.
    fn section_at_pixel(&self, pixel: i32) -> Option<usize>;

    /// `(viewport start, size)` of a section.
    fn section_span(&self, section: usize) -> Option<(i32, i32)>;

    /// Hidden sections take no space and contribute nothing to size hints.
    fn is_section_hidden(&self, section: usize) -> bool;
}

/// Default section size in pixels
pub const DEFAULT_SECTION_SIZE: i32 = 100;

/// Pre-computed section positions for a one-level header
#[derive(Debug, Clone)]
pub struct SectionTrack {
    /// Section sizes as set (hidden sections keep theirs for when they are shown again)
    sizes: Vec<i32>,
    hidden: Vec<bool>,
    /// Cumulative positions (`positions[i]` = start of section i, last entry = total)
    positions: Vec<i32>,
    /// Scroll offset subtracted from logical positions
    offset: i32,
    default_size: i32,
}

impl Default for SectionTrack {
    fn default() -> Self {
        Self::new(0, DEFAULT_SECTION_SIZE)
    }
}

impl SectionTrack {
    /// `count` sections of `default_size` pixels each.
    pub fn new(count: usize, default_size: i32) -> Self {
        let default_size = default_size.max(0);
        let mut track = Self {
            sizes: vec![default_size; count],
            hidden: vec![false; count],
            positions: Vec::with_capacity(count + 1),
            offset: 0,
            default_size,
        };
        track.recompute();
        track
    }

    /// Sections with the given sizes.
    pub fn from_sizes(sizes: &[i32]) -> Self {
        let mut track = Self {
            sizes: sizes.iter().map(|s| (*s).max(0)).collect(),
            hidden: vec![false; sizes.len()],
            positions: Vec::with_capacity(sizes.len() + 1),
            offset: 0,
            default_size: DEFAULT_SECTION_SIZE,
        };
        track.recompute();
        track
    }

    fn recompute(&mut self) {
        self.positions.clear();
        let mut x = 0;
        for (size, hidden) in self.sizes.iter().zip(&self.hidden) {
            self.positions.push(x);
            if !hidden {
                x = size.saturating_add(x);
            }
        }
        self.positions.push(x); // Final edge
    }

    /// Grow or shrink the number of sections; new sections get the default size.
    pub fn set_section_count(&mut self, count: usize) {
        self.sizes.resize(count, self.default_size);
        self.hidden.resize(count, false);
        self.recompute();
    }

    pub fn set_section_size(&mut self, section: usize, size: i32) {
        if let Some(s) = self.sizes.get_mut(section) {
            *s = size.max(0);
            self.recompute();
        }
    }

    pub fn set_section_hidden(&mut self, section: usize, hidden: bool) {
        if let Some(h) = self.hidden.get_mut(section) {
            *h = hidden;
            self.recompute();
        }
    }

    /// Size a section would have when visible.
    pub fn section_size(&self, section: usize) -> Option<i32> {
        self.sizes.get(section).copied()
    }

    /// Set the scroll offset (logical pixel shown at viewport 0)
    pub fn set_offset(&mut self, offset: i32) {
        self.offset = offset;
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Total length of all visible sections
    pub fn total_size(&self) -> i32 {
        self.positions.last().copied().unwrap_or(0)
    }
}

impl SectionAxis for SectionTrack {
    fn section_count(&self) -> usize {
        self.sizes.len()
    }

    fn section_at_pixel(&self, pixel: i32) -> Option<usize> {
        let logical = pixel.saturating_add(self.offset);
        if logical < 0 || logical >= self.total_size() {
            return None;
        }
        // Last start <= logical; zero-width hidden sections share a start with
        // the next visible one and are skipped over.
        let idx = self.positions.partition_point(|pos| *pos <= logical);
        idx.checked_sub(1).filter(|s| *s < self.sizes.len())
    }

    fn section_span(&self, section: usize) -> Option<(i32, i32)> {
        let start = self.positions.get(section).copied()?;
        let end = self.positions.get(section + 1).copied()?;
        Some((start.saturating_sub(self.offset), end - start))
    }

    fn is_section_hidden(&self, section: usize) -> bool {
        self.hidden.get(section).copied().unwrap_or(false)
    }
}

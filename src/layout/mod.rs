//! Layout engine for merged multi-level headers.
//!
//! This module handles:
//! - Section geometry of the underlying single-level header
//! - Measuring header cells
//! - Dividing merged cell sizes across the levels and sections they span
//! - The cached cumulative level boundaries used for hit testing and painting

mod engine;
mod level_table;
mod measure;
mod section_track;

pub use engine::{LayoutEngine, LayoutInputs};
pub use level_table::LevelBoundaryTable;
pub use measure::{ContentMeasurer, TextMetrics};
pub use section_track::{SectionAxis, SectionTrack, DEFAULT_SECTION_SIZE};

//! Header data and merge bookkeeping.
//!
//! This module handles:
//! - The [`HeaderDataSource`] capability trait and an in-memory implementation
//! - The [`SpanRegistry`] mapping covered cells to their merge
//! - [`HeaderModel`], which composes the two and resolves anchors

mod data_source;
mod header_model;
mod span_registry;

pub use data_source::{CellAttributes, HeaderDataSource, HeaderTable, StaticHeaderData};
pub use header_model::HeaderModel;
pub use span_registry::{Span, SpanRegistry};

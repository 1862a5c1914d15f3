//! Data types shared by the header model, layout and view.

mod config;
mod geometry;
mod orientation;
mod role;

pub use config::*;
pub use geometry::*;
pub use orientation::*;
pub use role::*;

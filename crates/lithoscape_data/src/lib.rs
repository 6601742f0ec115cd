//! Shared data structures for the Lithoscape simulation.
//!
//! This crate holds the plain, serde-derived types exchanged between the
//! simulation core and its external collaborators (dataset loaders, raster
//! writers, renderers). It contains no simulation logic.

pub mod data;

pub use data::raster::{ElevationRaster, IntRaster};
pub use data::source::{QuarryFeature, SourceId};

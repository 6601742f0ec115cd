//! Core data structures for the Lithoscape simulation.

pub mod raster;
pub mod source;

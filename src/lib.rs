//! Lithoscape: a spatially-explicit agent-based simulation of stone-tool
//! raw material procurement and discard by mobile foragers.
//!
//! The simulation engine lives in [`lithoscape_core`]; shared data types in
//! [`lithoscape_data`]. This crate adds the headless runner and JSON raster
//! export used by the `lithoscape` binary.

/// JSON export of assemblage snapshots
pub mod export;

pub use lithoscape_core::{
    init_logging, AssemblageSnapshot, GridCell, Metrics, MovementPolicy, SimError, TerrainGrid,
    World,
};
pub use lithoscape_data::{ElevationRaster, IntRaster, QuarryFeature, SourceId};

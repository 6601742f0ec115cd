//! # Lithoscape Core
//!
//! The simulation engine for Lithoscape - a spatially-explicit agent-based
//! model of stone-tool raw material procurement and discard.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Terrain grid with per-cell artefact assemblages
//! - Quarry registry derived from point features
//! - Forager agents with bounded toolkits and movement policies
//! - Turn-based simulation clock with a fixed per-tick action order
//! - Assemblage analysis (count/diversity rasters) for export
//! - Metrics collection and structured logging
//!
//! ## Architecture
//!
//! The simulation is single-threaded and turn-based. One tick is one full
//! pass over all foragers: every agent moves and reprovisions, then a single
//! global exchange pass runs, then every agent with a non-empty toolkit
//! discards one artefact onto its cell. All randomness flows through one
//! seeded [`rand_chacha::ChaCha8Rng`], so identical seeds reproduce runs
//! bit-for-bit.
//!
//! ## Example
//!
//! ```
//! use lithoscape_core::config::SimConfig;
//! use lithoscape_core::world::World;
//! use lithoscape_data::{ElevationRaster, QuarryFeature};
//!
//! let mut config = SimConfig::default();
//! config.time_limit = 10;
//! let raster = ElevationRaster::filled(20, 20, 1.0);
//! let quarries = vec![QuarryFeature::new("Q1", "Chert outcrop", 5.0, 5.0)];
//!
//! let mut world = World::new(raster, &quarries, config).unwrap();
//! world.run().unwrap();
//! let snapshot = world.snapshot();
//! assert_eq!(snapshot.count.width, 20);
//! ```

/// Assemblage analysis and raster export
pub mod analyzer;
/// Configuration management for simulation parameters
pub mod config;
/// Error taxonomy for the simulation engine
pub mod error;
/// Forager agents with bounded toolkits
pub mod forager;
/// Metrics collection and logging
pub mod metrics;
/// Movement policies (random walk, target walk)
pub mod movement;
/// Quarry registry derived from point features
pub mod quarry;
/// Spatial hashing for forager proximity queries
pub mod spatial_hash;
/// Terrain grid with per-cell assemblages
pub mod terrain;
/// Simulation clock and per-tick orchestration
pub mod world;

pub use analyzer::AssemblageSnapshot;
pub use error::{Result, SimError};
pub use metrics::{init_logging, Metrics};
pub use movement::MovementPolicy;
pub use terrain::{GridCell, TerrainGrid};
pub use world::World;

//! Assemblage analysis: per-cell count and diversity rasters.
//!
//! A snapshot is a pure read of the terrain grid, callable at any tick and
//! idempotent between ticks. Rasters iterate in the grid's row-major layout
//! so external raster reconstruction lines up cell for cell.

use crate::terrain::TerrainGrid;
use lithoscape_data::IntRaster;
use serde::{Deserialize, Serialize};

/// Per-cell assemblage summary at one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblageSnapshot {
    pub tick: u64,
    /// Assemblage length per cell.
    pub count: IntRaster,
    /// Distinct source identifiers per cell.
    pub diversity: IntRaster,
}

impl AssemblageSnapshot {
    /// Captures the current grid state. Non-mutating.
    #[must_use]
    pub fn capture(grid: &TerrainGrid, tick: u64) -> Self {
        let mut count = IntRaster::zeroed(grid.width, grid.height);
        let mut diversity = IntRaster::zeroed(grid.width, grid.height);
        for y in 0..grid.height {
            for x in 0..grid.width {
                let idx = grid.index(x, y);
                count.values[idx] = grid.assemblage_count(x, y) as u32;
                diversity.values[idx] = grid.assemblage_diversity(x, y) as u32;
            }
        }
        Self {
            tick,
            count,
            diversity,
        }
    }

    /// Display intensities for the count raster, scaled to the run maximum.
    #[must_use]
    pub fn count_intensities(&self) -> Vec<f32> {
        self.count.intensities()
    }

    /// Display intensities for the diversity raster.
    #[must_use]
    pub fn diversity_intensities(&self) -> Vec<f32> {
        self.diversity.intensities()
    }

    /// Total artefacts deposited across all cells.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.count.values.iter().map(|&v| u64::from(v)).sum()
    }
}

//! Terrain grid with per-cell artefact assemblages.
//!
//! The grid is a flat row-major `Vec` of cells built once from an elevation
//! raster. Elevation at or below zero is the water sentinel; water cells are
//! never traversable. Each cell accumulates an append-only assemblage of
//! deposited artefact source identifiers.

pub mod generation;

use lithoscape_data::{ElevationRaster, SourceId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One grid cell: fixed elevation, quarry marker, and the accumulated
/// assemblage of artefacts deposited here during the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridCell {
    pub elevation: f32,
    pub is_quarry: bool,
    /// Append-only during a run; multiplicity preserved, order irrelevant
    /// for analysis.
    pub assemblage: Vec<SourceId>,
}

impl GridCell {
    #[must_use]
    pub fn new(elevation: f32) -> Self {
        Self {
            elevation,
            is_quarry: false,
            assemblage: Vec::new(),
        }
    }
}

/// Bounded, non-wrapping terrain grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainGrid {
    pub cells: Vec<GridCell>,
    pub width: u16,
    pub height: u16,
}

impl TerrainGrid {
    /// Builds the grid from an elevation raster, one cell per sample.
    #[must_use]
    pub fn from_raster(raster: &ElevationRaster) -> Self {
        let cells = raster.samples.iter().map(|&e| GridCell::new(e)).collect();
        Self {
            cells,
            width: raster.width,
            height: raster.height,
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn index(&self, x: u16, y: u16) -> usize {
        (y as usize * self.width as usize) + x as usize
    }

    #[must_use]
    pub fn get_cell(&self, x: u16, y: u16) -> &GridCell {
        &self.cells[self.index(x, y)]
    }

    #[must_use]
    pub fn elevation(&self, x: u16, y: u16) -> f32 {
        self.get_cell(x, y).elevation
    }

    /// A cell is traversable iff its elevation is strictly positive.
    #[must_use]
    pub fn is_traversable(&self, x: u16, y: u16) -> bool {
        self.elevation(x, y) > 0.0
    }

    #[must_use]
    pub fn is_quarry(&self, x: u16, y: u16) -> bool {
        self.get_cell(x, y).is_quarry
    }

    /// Marks a cell as overlapped by a quarry feature. Setup only.
    pub fn mark_quarry(&mut self, x: u16, y: u16) {
        let idx = self.index(x, y);
        self.cells[idx].is_quarry = true;
    }

    /// Appends one artefact to the cell's assemblage. Never fails.
    pub fn deposit(&mut self, x: u16, y: u16, source: SourceId) {
        let idx = self.index(x, y);
        self.cells[idx].assemblage.push(source);
    }

    #[must_use]
    pub fn assemblage_count(&self, x: u16, y: u16) -> usize {
        self.get_cell(x, y).assemblage.len()
    }

    /// Number of distinct source identifiers deposited at the cell.
    #[must_use]
    pub fn assemblage_diversity(&self, x: u16, y: u16) -> usize {
        self.get_cell(x, y)
            .assemblage
            .iter()
            .collect::<HashSet<_>>()
            .len()
    }

    /// Total artefacts deposited across the whole grid.
    #[must_use]
    pub fn total_deposited(&self) -> usize {
        self.cells.iter().map(|c| c.assemblage.len()).sum()
    }

    /// The in-bounds subset of the 8 Moore neighbors, in row-major scan
    /// order. Edge cells get a reduced set, never an error. Diagonal and
    /// cardinal neighbors are both one step away.
    #[must_use]
    pub fn moore_neighbors(&self, x: u16, y: u16) -> Vec<(u16, u16)> {
        let mut neighbors = Vec::with_capacity(8);
        let ix = x as i32;
        let iy = y as i32;
        let w = self.width as i32;
        let h = self.height as i32;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = ix + dx;
                let ny = iy + dy;
                if nx >= 0 && nx < w && ny >= 0 && ny < h {
                    neighbors.push((nx as u16, ny as u16));
                }
            }
        }
        neighbors
    }

    /// Moore neighbors restricted to land, in the same stable order.
    #[must_use]
    pub fn traversable_neighbors(&self, x: u16, y: u16) -> Vec<(u16, u16)> {
        self.moore_neighbors(x, y)
            .into_iter()
            .filter(|&(nx, ny)| self.is_traversable(nx, ny))
            .collect()
    }

    /// All traversable cell coordinates, row-major. Used for agent spawning.
    #[must_use]
    pub fn traversable_cells(&self) -> Vec<(u16, u16)> {
        let mut cells = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_traversable(x, y) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }
}

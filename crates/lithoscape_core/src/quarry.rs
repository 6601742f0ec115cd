//! Quarry registry derived from point features.
//!
//! Populated once at setup from the ordered quarry feature sequence and
//! read-only for the rest of the run. Feature coordinates floor to a cell;
//! when two features land on the same cell the first in input order claims
//! it, and the collision is logged.

use crate::error::{Result, SimError};
use crate::terrain::TerrainGrid;
use lithoscape_data::{QuarryFeature, SourceId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One registered quarry source, pinned to a grid cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quarry {
    pub id: SourceId,
    pub name: String,
    pub x: u16,
    pub y: u16,
}

/// The set of discrete quarry sources, with a cell-to-id lookup map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuarryRegistry {
    /// Quarries in input order; this order is the tie-break everywhere.
    pub quarries: Vec<Quarry>,
    cell_ids: HashMap<(u16, u16), SourceId>,
}

impl QuarryRegistry {
    /// Builds the registry and marks the overlapped cells on the grid.
    ///
    /// Features whose floored coordinates fall outside the grid are dropped
    /// with a warning. The first feature to claim a cell wins; later
    /// features on the same cell stay in the list but do not supply that
    /// cell's id.
    #[must_use]
    pub fn from_features(features: &[QuarryFeature], grid: &mut TerrainGrid) -> Self {
        let mut quarries = Vec::with_capacity(features.len());
        let mut cell_ids = HashMap::new();

        for feature in features {
            if feature.x < 0.0
                || feature.y < 0.0
                || feature.x >= f64::from(grid.width)
                || feature.y >= f64::from(grid.height)
            {
                tracing::warn!(
                    id = %feature.id,
                    x = feature.x,
                    y = feature.y,
                    "Quarry feature outside grid bounds, dropped"
                );
                continue;
            }
            let x = feature.x.floor() as u16;
            let y = feature.y.floor() as u16;

            if let Some(existing) = cell_ids.get(&(x, y)) {
                tracing::warn!(
                    id = %feature.id,
                    existing = %existing,
                    x = x,
                    y = y,
                    "Quarry cell collision, first feature keeps the cell"
                );
            } else {
                cell_ids.insert((x, y), feature.id.clone());
                grid.mark_quarry(x, y);
            }

            quarries.push(Quarry {
                id: feature.id.clone(),
                name: feature.name.clone(),
                x,
                y,
            });
        }

        Self { quarries, cell_ids }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cell_ids.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quarries.len()
    }

    /// The quarry cell closest to `from` by squared Euclidean distance.
    ///
    /// Ties break toward the earliest quarry in input order (strict `<` over
    /// an in-order scan). `None` only when no quarry claimed any cell.
    #[must_use]
    pub fn nearest_quarry_cell(&self, from: (u16, u16)) -> Option<(u16, u16)> {
        let mut best: Option<((u16, u16), i64)> = None;
        for quarry in &self.quarries {
            if self.cell_ids.get(&(quarry.x, quarry.y)) != Some(&quarry.id) {
                continue;
            }
            let dx = i64::from(quarry.x) - i64::from(from.0);
            let dy = i64::from(quarry.y) - i64::from(from.1);
            let dist = dx * dx + dy * dy;
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some(((quarry.x, quarry.y), dist));
            }
        }
        best.map(|(cell, _)| cell)
    }

    /// The source id supplying a quarry cell.
    ///
    /// Erroring here means the caller skipped the `is_quarry` check; treat
    /// it as a logic bug, not a runtime condition.
    pub fn quarry_id_at(&self, x: u16, y: u16) -> Result<&SourceId> {
        self.cell_ids
            .get(&(x, y))
            .ok_or(SimError::NoQuarryAtCell { x, y })
    }
}

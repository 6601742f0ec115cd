//! JSON export of assemblage snapshots.
//!
//! The core hands off rasters as raw 2D numeric mappings and owns no file
//! format; serialization to disk lives here with the binary.

use anyhow::Context;
use lithoscape_core::AssemblageSnapshot;
use std::fs;
use std::path::Path;

/// Writes the snapshot's count and diversity rasters as pretty JSON.
pub fn write_snapshot_json(path: &Path, snapshot: &AssemblageSnapshot) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json).with_context(|| format!("writing snapshot to {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        tick = snapshot.tick,
        total_artefacts = snapshot.total_count(),
        "Snapshot written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lithoscape_core::TerrainGrid;
    use lithoscape_data::{ElevationRaster, SourceId};

    #[test]
    fn test_write_and_reparse_snapshot() {
        let mut grid = TerrainGrid::from_raster(&ElevationRaster::filled(3, 3, 1.0));
        grid.deposit(1, 1, SourceId::from("Q1"));
        let snapshot = AssemblageSnapshot::capture(&grid, 9);

        let path = std::env::temp_dir().join("lithoscape_snapshot_test.json");
        write_snapshot_json(&path, &snapshot).unwrap();

        let parsed: AssemblageSnapshot =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, snapshot);
        fs::remove_file(&path).ok();
    }
}

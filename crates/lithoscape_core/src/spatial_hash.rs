//! Spatial indexing for forager proximity queries.
//!
//! Grid-based uniform spatial hash using the offset-array pattern (like
//! compressed sparse rows): `cell_offsets[i]..cell_offsets[i+1]` spans the
//! agent indices in bucket `i`. Rebuilt once per exchange pass, queried once
//! per initiating forager.

/// Spatial hash over agent grid positions.
#[derive(Debug, Clone, Default)]
pub struct SpatialHash {
    pub cell_size: f64,
    pub cols: usize,
    pub rows: usize,
    pub cell_offsets: Vec<usize>,
    pub agent_indices: Vec<usize>,
}

impl SpatialHash {
    /// Creates a spatial hash covering a `width` x `height` grid with square
    /// buckets of `cell_size` grid units.
    #[must_use]
    pub fn new(cell_size: f64, width: u16, height: u16) -> Self {
        let cols = (f64::from(width) / cell_size).ceil().max(1.0) as usize;
        let rows = (f64::from(height) / cell_size).ceil().max(1.0) as usize;
        Self {
            cell_size,
            cols,
            rows,
            cell_offsets: vec![0; cols * rows + 1],
            agent_indices: Vec::new(),
        }
    }

    #[inline]
    fn bucket_idx(&self, x: u16, y: u16) -> usize {
        let cx = ((f64::from(x) / self.cell_size) as usize).min(self.cols - 1);
        let cy = ((f64::from(y) / self.cell_size) as usize).min(self.rows - 1);
        cy * self.cols + cx
    }

    /// Rebuilds the index from agent positions (counting sort into the
    /// offset array).
    pub fn build(&mut self, positions: &[(u16, u16)]) {
        let buckets = self.cols * self.rows;
        self.cell_offsets.clear();
        self.cell_offsets.resize(buckets + 1, 0);

        for &(x, y) in positions {
            let bucket = self.bucket_idx(x, y);
            self.cell_offsets[bucket + 1] += 1;
        }
        for i in 1..=buckets {
            self.cell_offsets[i] += self.cell_offsets[i - 1];
        }

        self.agent_indices.clear();
        self.agent_indices.resize(positions.len(), 0);
        let mut cursors = self.cell_offsets[..buckets].to_vec();
        for (agent, &(x, y)) in positions.iter().enumerate() {
            let bucket = self.bucket_idx(x, y);
            self.agent_indices[cursors[bucket]] = agent;
            cursors[bucket] += 1;
        }
    }

    /// Collects agent indices from every bucket overlapping the square
    /// around `(x, y)` with half-width `radius`. Callers filter by exact
    /// distance.
    pub fn query_into(&self, x: u16, y: u16, radius: f64, out: &mut Vec<usize>) {
        out.clear();
        let min_cx = (((f64::from(x) - radius) / self.cell_size).floor().max(0.0)) as usize;
        let min_cy = (((f64::from(y) - radius) / self.cell_size).floor().max(0.0)) as usize;
        let max_cx = ((f64::from(x) + radius) / self.cell_size) as usize;
        let max_cy = ((f64::from(y) + radius) / self.cell_size) as usize;

        for cy in min_cy..=max_cy.min(self.rows - 1) {
            for cx in min_cx..=max_cx.min(self.cols - 1) {
                let bucket = cy * self.cols + cx;
                let start = self.cell_offsets[bucket];
                let end = self.cell_offsets[bucket + 1];
                out.extend_from_slice(&self.agent_indices[start..end]);
            }
        }
    }
}

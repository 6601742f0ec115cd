use lithoscape_core::config::SimConfig;
use lithoscape_core::World;
use lithoscape_data::{ElevationRaster, QuarryFeature, SourceId};

/// Builder for small, fully-controlled test worlds: flat land by default,
/// with explicit water cells, quarries, and pre-placed foragers.
#[allow(dead_code)]
pub struct WorldBuilder {
    width: u16,
    height: u16,
    water_cells: Vec<(u16, u16)>,
    quarries: Vec<QuarryFeature>,
    foragers: Vec<(u16, u16, Vec<SourceId>)>,
    config: SimConfig,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        Self {
            width: 20,
            height: 20,
            water_cells: Vec::new(),
            quarries: Vec::new(),
            foragers: Vec::new(),
            config: SimConfig {
                seed: Some(42),
                ..Default::default()
            },
        }
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_water(mut self, x: u16, y: u16) -> Self {
        self.water_cells.push((x, y));
        self
    }

    pub fn with_quarry(mut self, id: &str, x: u16, y: u16) -> Self {
        let n = self.quarries.len() + 1;
        self.quarries
            .push(QuarryFeature::new(id, format!("Test quarry {n}"), x as f64, y as f64));
        self
    }

    pub fn with_forager(self, x: u16, y: u16) -> Self {
        self.with_forager_kit(x, y, &[])
    }

    pub fn with_forager_kit(mut self, x: u16, y: u16, items: &[&str]) -> Self {
        let kit = items.iter().map(|&s| SourceId::from(s)).collect();
        self.foragers.push((x, y, kit));
        self
    }

    /// Builds the world. Pre-placed foragers replace the random spawns.
    pub fn build(self) -> World {
        let mut raster = ElevationRaster::filled(self.width, self.height, 1.0);
        for (x, y) in &self.water_cells {
            raster.set_sample(*x, *y, -1.0);
        }

        let mut config = self.config;
        if !self.foragers.is_empty() {
            config.num_foragers = self.foragers.len();
        }

        let mut world =
            World::new(raster, &self.quarries, config).expect("Failed to build test world");
        for (i, (x, y, kit)) in self.foragers.into_iter().enumerate() {
            world.foragers[i].set_position(x, y);
            world.foragers[i].toolkit = kit;
        }
        world
    }
}

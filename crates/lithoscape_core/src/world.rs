//! Simulation clock and per-tick orchestration.
//!
//! The world is the explicit simulation context: terrain grid, quarry
//! registry, forager population, seeded RNG, and metrics, owned by the run
//! loop with no ambient state. One tick is one full pass over all agents in
//! the fixed order Move -> Reprovision -> Exchange -> Discard; the exchange
//! step is a single global pass per tick, executed after all movement and
//! before any discard, reading in-progress toolkit state in agent-index
//! order.

use crate::analyzer::AssemblageSnapshot;
use crate::config::SimConfig;
use crate::error::Result;
use crate::forager::Forager;
use crate::metrics::Metrics;
use crate::movement::MovementPolicy;
use crate::quarry::QuarryRegistry;
use crate::spatial_hash::SpatialHash;
use crate::terrain::TerrainGrid;
use lithoscape_data::{ElevationRaster, QuarryFeature};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Exchange partner search radius, in grid units.
pub const EXCHANGE_RADIUS: f64 = 3.0;

const EXCHANGE_RADIUS_SQ: i64 = (EXCHANGE_RADIUS * EXCHANGE_RADIUS) as i64;

/// The full simulation state for one run.
pub struct World {
    pub grid: TerrainGrid,
    pub registry: QuarryRegistry,
    pub foragers: Vec<Forager>,
    pub config: SimConfig,
    pub tick: u64,
    pub metrics: Metrics,
    /// Snapshot captured on the terminal tick, and every tick when
    /// `visualize_each_tick` is set.
    pub last_snapshot: Option<AssemblageSnapshot>,
    policy: MovementPolicy,
    rng: ChaCha8Rng,
    spatial: SpatialHash,
    seed: u64,
}

impl World {
    /// Builds a world from an elevation raster, ordered quarry features, and
    /// a validated configuration, then spawns the forager population on
    /// random traversable cells.
    pub fn new(
        raster: ElevationRaster,
        features: &[QuarryFeature],
        config: SimConfig,
    ) -> anyhow::Result<Self> {
        config.validate()?;

        let mut grid = TerrainGrid::from_raster(&raster);
        let registry = QuarryRegistry::from_features(features, &mut grid);

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let sites = grid.traversable_cells();
        if sites.is_empty() {
            return Err(crate::error::SimError::NoForagerSpawnSite.into());
        }
        let mut foragers = Vec::with_capacity(config.num_foragers);
        for _ in 0..config.num_foragers {
            let (x, y) = sites[rng.gen_range(0..sites.len())];
            foragers.push(Forager::spawn(x, y, &mut rng));
        }

        let spatial = SpatialHash::new(EXCHANGE_RADIUS, grid.width, grid.height);
        let policy = MovementPolicy::from_switch(config.random_walk);

        tracing::info!(
            seed = seed,
            foragers = foragers.len(),
            quarries = registry.len(),
            width = grid.width,
            height = grid.height,
            ?policy,
            "World initialized"
        );

        Ok(Self {
            grid,
            registry,
            foragers,
            config,
            tick: 0,
            metrics: Metrics::new(),
            last_snapshot: None,
            policy,
            rng,
            spatial,
            seed,
        })
    }

    /// The seed this run was built with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.tick >= self.config.time_limit
    }

    /// Runs one tick: every agent moves and reprovisions, then the global
    /// exchange pass, then every agent with a non-empty toolkit discards.
    /// The counter advances only after the full pass.
    pub fn step(&mut self) -> Result<()> {
        for i in 0..self.foragers.len() {
            self.move_and_reprovision(i)?;
        }
        self.exchange_pass()?;
        self.discard_pass()?;

        self.tick += 1;
        self.metrics
            .record_tick(self.config.report_interval, self.foragers.len());
        if self.config.visualize_each_tick {
            self.last_snapshot = Some(self.snapshot());
        }
        Ok(())
    }

    /// Runs ticks until `time_limit`, then forces a terminal snapshot.
    pub fn run(&mut self) -> Result<()> {
        while !self.is_finished() {
            self.step()?;
        }
        self.last_snapshot = Some(self.snapshot());
        tracing::info!(
            ticks = self.tick,
            deposits = self.metrics.deposits(),
            exchanges = self.metrics.exchanges(),
            elapsed_ms = self.metrics.elapsed().as_millis() as u64,
            "Run complete"
        );
        Ok(())
    }

    /// Captures the current assemblage state. Read-only and idempotent.
    #[must_use]
    pub fn snapshot(&self) -> AssemblageSnapshot {
        AssemblageSnapshot::capture(&self.grid, self.tick)
    }

    fn move_and_reprovision(&mut self, i: usize) -> Result<()> {
        let step = self.policy.choose_step(
            &self.foragers[i],
            &self.grid,
            &self.registry,
            self.config.max_carry,
            &mut self.rng,
        );
        match step {
            Some((x, y)) => self.foragers[i].set_position(x, y),
            // No traversable neighbor: stationary no-op for this tick.
            None => self.metrics.record_blocked_move(),
        }

        let (x, y) = self.foragers[i].position();
        if self.grid.is_quarry(x, y) && self.foragers[i].has_capacity(self.config.max_carry) {
            let source = self.registry.quarry_id_at(x, y)?.clone();
            let added = self.foragers[i].refill(&source, self.config.max_carry);
            self.metrics.record_reprovision(added as u64);
        }
        Ok(())
    }

    /// One global exchange pass: each agent holding items when the pass
    /// starts offers one random item to its nearest peer within
    /// [`EXCHANGE_RADIUS`].
    ///
    /// Initiator eligibility is fixed at pass start, so an agent that only
    /// received its first item during the pass does not hand it straight
    /// back; capacity checks read in-progress state. Only the single
    /// nearest peer is considered; when that peer is full, no transfer
    /// happens. Equidistant peers break toward the lowest agent index.
    /// Public so tests can exercise the pass in isolation.
    pub fn exchange_pass(&mut self) -> Result<()> {
        let positions: Vec<(u16, u16)> = self.foragers.iter().map(Forager::position).collect();
        self.spatial.build(&positions);
        let initiators: Vec<bool> = self
            .foragers
            .iter()
            .map(|f| !f.toolkit.is_empty())
            .collect();

        let mut candidates = Vec::new();
        for i in 0..self.foragers.len() {
            if !initiators[i] || self.foragers[i].toolkit.is_empty() {
                continue;
            }
            let (x, y) = positions[i];
            self.spatial
                .query_into(x, y, EXCHANGE_RADIUS, &mut candidates);

            let mut best: Option<(usize, i64)> = None;
            for &j in &candidates {
                if j == i {
                    continue;
                }
                let dx = i64::from(positions[j].0) - i64::from(x);
                let dy = i64::from(positions[j].1) - i64::from(y);
                let dist_sq = dx * dx + dy * dy;
                if dist_sq > EXCHANGE_RADIUS_SQ {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some((bj, bd)) => dist_sq < bd || (dist_sq == bd && j < bj),
                };
                if better {
                    best = Some((j, dist_sq));
                }
            }

            if let Some((j, _)) = best {
                if self.foragers[j].has_capacity(self.config.max_carry) {
                    let item = self.foragers[i].take_random_item(&mut self.rng)?;
                    self.foragers[j].push_item(item, self.config.max_carry)?;
                    self.metrics.record_exchange();
                }
            }
        }
        Ok(())
    }

    fn discard_pass(&mut self) -> Result<()> {
        for i in 0..self.foragers.len() {
            if self.foragers[i].toolkit.is_empty() {
                continue;
            }
            let item = self.foragers[i].take_random_item(&mut self.rng)?;
            let (x, y) = self.foragers[i].position();
            self.grid.deposit(x, y, item);
            self.metrics.record_deposit();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lithoscape_data::SourceId;

    fn flat_world(width: u16, height: u16, config: SimConfig) -> World {
        World::new(
            ElevationRaster::filled(width, height, 1.0),
            &[QuarryFeature::new("Q1", "One", 5.0, 5.0)],
            config,
        )
        .unwrap()
    }

    fn seeded_config() -> SimConfig {
        SimConfig {
            seed: Some(42),
            ..Default::default()
        }
    }

    #[test]
    fn test_world_spawns_configured_population() {
        let config = SimConfig {
            num_foragers: 7,
            ..seeded_config()
        };
        let world = flat_world(20, 20, config);
        assert_eq!(world.foragers.len(), 7);
        for f in &world.foragers {
            assert!(world.grid.is_traversable(f.x, f.y));
            assert!(f.toolkit.is_empty());
        }
    }

    #[test]
    fn test_all_water_world_rejected() {
        let result = World::new(
            ElevationRaster::filled(5, 5, -1.0),
            &[],
            seeded_config(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_tick_counter_advances_once_per_step() {
        let mut world = flat_world(20, 20, seeded_config());
        assert_eq!(world.tick, 0);
        world.step().unwrap();
        assert_eq!(world.tick, 1);
        world.step().unwrap();
        assert_eq!(world.tick, 2);
    }

    #[test]
    fn test_run_halts_at_time_limit() {
        let config = SimConfig {
            time_limit: 25,
            ..seeded_config()
        };
        let mut world = flat_world(20, 20, config);
        world.run().unwrap();
        assert_eq!(world.tick, 25);
        assert!(world.is_finished());
        assert!(world.last_snapshot.is_some());
        assert_eq!(world.last_snapshot.as_ref().unwrap().tick, 25);
    }

    #[test]
    fn test_reprovision_fills_toolkit_at_quarry() {
        // Single quarry cell world: the move is blocked, reprovision fires.
        let config = SimConfig {
            num_foragers: 1,
            max_carry: 10,
            ..seeded_config()
        };
        let mut world = World::new(
            ElevationRaster::filled(1, 1, 1.0),
            &[QuarryFeature::new("Q1", "One", 0.0, 0.0)],
            config,
        )
        .unwrap();
        world.move_and_reprovision(0).unwrap();
        assert_eq!(world.foragers[0].toolkit_len(), 10);
        assert!(world.foragers[0]
            .toolkit
            .iter()
            .all(|s| s == &SourceId::from("Q1")));
        assert_eq!(world.metrics.reprovisions(), 10);
        assert_eq!(world.metrics.blocked_moves(), 1);
    }

    #[test]
    fn test_capacity_invariant_over_run() {
        let config = SimConfig {
            num_foragers: 12,
            max_carry: 5,
            time_limit: 60,
            ..seeded_config()
        };
        let mut world = flat_world(30, 15, config);
        for _ in 0..60 {
            world.step().unwrap();
            for f in &world.foragers {
                assert!(f.toolkit_len() <= 5);
            }
        }
    }

    #[test]
    fn test_exchange_pass_nearest_full_peer_blocks_transfer() {
        let config = SimConfig {
            num_foragers: 3,
            max_carry: 2,
            ..seeded_config()
        };
        let mut world = flat_world(20, 20, config);
        // Initiator at (10, 10); nearest peer adjacent but full; a third
        // peer with capacity sits farther away and must not receive.
        world.foragers[0].set_position(10, 10);
        world.foragers[0].toolkit = vec![SourceId::from("Q1"), SourceId::from("Q1")];
        world.foragers[1].set_position(11, 10);
        world.foragers[1].toolkit = vec![SourceId::from("Q2"), SourceId::from("Q2")];
        world.foragers[2].set_position(13, 10);
        world.foragers[2].toolkit = vec![];

        world.exchange_pass().unwrap();

        assert_eq!(world.foragers[0].toolkit_len(), 2);
        // Forager 1 is full and initiates its own offer to forager 0 (also
        // full), so nothing moves anywhere except forager 2's no-op.
        assert_eq!(world.foragers[1].toolkit_len(), 2);
        assert_eq!(world.foragers[2].toolkit_len(), 0);
    }

    #[test]
    fn test_exchange_out_of_radius_is_noop() {
        let config = SimConfig {
            num_foragers: 2,
            max_carry: 3,
            ..seeded_config()
        };
        let mut world = flat_world(20, 20, config);
        world.foragers[0].set_position(0, 0);
        world.foragers[0].toolkit = vec![SourceId::from("Q1")];
        world.foragers[1].set_position(10, 10);
        world.foragers[1].toolkit = vec![];

        world.exchange_pass().unwrap();
        assert_eq!(world.foragers[0].toolkit_len(), 1);
        assert_eq!(world.foragers[1].toolkit_len(), 0);
    }

    #[test]
    fn test_conservation_of_artefacts() {
        let config = SimConfig {
            num_foragers: 10,
            max_carry: 8,
            time_limit: 80,
            random_walk: false,
            ..seeded_config()
        };
        let mut world = flat_world(25, 25, config);
        world.run().unwrap();

        let deposited = world.grid.total_deposited() as u64;
        assert_eq!(deposited, world.metrics.deposits());
        // Everything ever handed out by quarries is either on the ground or
        // still carried.
        let carried: usize = world.foragers.iter().map(Forager::toolkit_len).sum();
        assert_eq!(
            world.metrics.reprovisions(),
            deposited + carried as u64
        );
    }

    #[test]
    fn test_foragers_never_on_water() {
        let mut raster = ElevationRaster::filled(20, 20, 1.0);
        for x in 0..20 {
            raster.set_sample(x, 10, -2.0);
        }
        let config = SimConfig {
            num_foragers: 15,
            time_limit: 50,
            ..seeded_config()
        };
        let mut world = World::new(
            raster,
            &[QuarryFeature::new("Q1", "One", 3.0, 3.0)],
            config,
        )
        .unwrap();
        for _ in 0..50 {
            world.step().unwrap();
            for f in &world.foragers {
                assert!(world.grid.is_traversable(f.x, f.y));
            }
        }
    }
}

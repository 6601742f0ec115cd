//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration structures that map to the `config.toml`
//! file. Defaults are hardcoded in the `Default` impls and overridden by the
//! file when present.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [sim]
//! num_foragers = 20
//! max_carry = 10
//! time_limit = 1000
//! random_walk = true
//! seed = 42
//!
//! [landscape]
//! width = 100
//! height = 50
//! quarry_count = 5
//! ```

use serde::{Deserialize, Serialize};

/// Simulation-level configuration.
///
/// These are the recognized options of the model itself: population size,
/// toolkit capacity, run length, and the movement policy switch.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SimConfig {
    /// Number of forager agents spawned at setup.
    pub num_foragers: usize,
    /// Toolkit capacity bound per forager.
    pub max_carry: usize,
    /// Tick count at which the run halts.
    pub time_limit: u64,
    /// `true` selects the random-walk policy, `false` the target walk.
    pub random_walk: bool,
    /// Emit an intensity snapshot every tick instead of only at the end.
    pub visualize_each_tick: bool,
    /// RNG seed; `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Tick interval between progress log lines.
    pub report_interval: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_foragers: 20,
            max_carry: 10,
            time_limit: 1000,
            random_walk: true,
            visualize_each_tick: false,
            seed: None,
            report_interval: 100,
        }
    }
}

/// Demo landscape generation parameters.
///
/// Used only when no external elevation raster and quarry features are
/// supplied; the generator synthesizes a value-noise landscape with these
/// knobs.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LandscapeConfig {
    pub width: u16,
    pub height: u16,
    /// Noise values at or below this threshold become water.
    pub sea_level: f32,
    /// Number of synthetic quarry features placed on land.
    pub quarry_count: usize,
}

impl Default for LandscapeConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 50,
            sea_level: 0.25,
            quarry_count: 5,
        }
    }
}

/// Top-level application configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    pub landscape: LandscapeConfig,
}

impl SimConfig {
    /// Validates simulation parameters.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.num_foragers >= 1, "num_foragers must be at least 1");
        anyhow::ensure!(
            self.num_foragers <= 100_000,
            "num_foragers too large (max 100000)"
        );
        anyhow::ensure!(self.time_limit >= 1, "time_limit must be at least 1");
        anyhow::ensure!(self.report_interval >= 1, "report_interval must be positive");
        Ok(())
    }
}

impl LandscapeConfig {
    /// Validates landscape generation parameters.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.width > 0, "Landscape width must be positive");
        anyhow::ensure!(self.width <= 1000, "Landscape width too large (max 1000)");
        anyhow::ensure!(self.height > 0, "Landscape height must be positive");
        anyhow::ensure!(self.height <= 1000, "Landscape height too large (max 1000)");
        anyhow::ensure!(
            (0.0..1.0).contains(&self.sea_level),
            "sea_level must be in [0.0, 1.0)"
        );
        anyhow::ensure!(
            self.quarry_count <= self.width as usize * self.height as usize,
            "quarry_count exceeds cell count"
        );
        Ok(())
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.sim.validate()?;
        self.landscape.validate()?;
        Ok(())
    }

    /// Loads and validates configuration from a toml string.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Stable digest of the parameters that shape a run, for log correlation.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.sim).as_bytes());
        hasher.update(format!("{:?}", self.landscape).as_bytes());
        hex::encode(hasher.finalize())
    }
}

//! Seeded demo landscape generation.
//!
//! Synthesizes an elevation raster and a set of quarry point features so the
//! simulation can run without external GIS datasets. Elevation is layered
//! value noise shifted by the sea level, so anything at or below the
//! threshold lands on the water sentinel.

use crate::config::LandscapeConfig;
use lithoscape_data::{ElevationRaster, QuarryFeature};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generates a landscape from the config knobs and a seed.
///
/// Quarries are placed on distinct land cells by rejection sampling; on a
/// nearly-drowned map fewer than `quarry_count` features may be placed.
#[must_use]
pub fn generate_landscape(
    config: &LandscapeConfig,
    seed: u64,
) -> (ElevationRaster, Vec<QuarryFeature>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let w = config.width as usize;
    let h = config.height as usize;

    let mut samples = vec![0.0f32; w * h];
    for (idx, sample) in samples.iter_mut().enumerate() {
        let x = (idx % w) as f32;
        let y = (idx / w) as f32;
        *sample = value_noise(x, y, seed) - config.sea_level;
    }
    let raster = ElevationRaster {
        width: config.width,
        height: config.height,
        samples,
    };

    let mut quarries = Vec::with_capacity(config.quarry_count);
    let mut taken = vec![false; w * h];
    let mut attempts = 0;
    while quarries.len() < config.quarry_count && attempts < config.quarry_count * 20 {
        let x = rng.gen_range(0..w);
        let y = rng.gen_range(0..h);
        let idx = y * w + x;
        if raster.samples[idx] > 0.0 && !taken[idx] {
            taken[idx] = true;
            let n = quarries.len() + 1;
            quarries.push(QuarryFeature::new(
                format!("Q{n}"),
                format!("Synthetic quarry {n}"),
                x as f64,
                y as f64,
            ));
        }
        attempts += 1;
    }

    (raster, quarries)
}

fn value_noise(x: f32, y: f32, seed: u64) -> f32 {
    let scale1 = 0.1;
    let scale2 = 0.05;
    let scale3 = 0.02;
    let noise1 = hash_noise(x * scale1, y * scale1, seed) * 0.5;
    let noise2 = hash_noise(x * scale2, y * scale2, seed.wrapping_add(1)) * 0.3;
    let noise3 = hash_noise(x * scale3, y * scale3, seed.wrapping_add(2)) * 0.2;
    (noise1 + noise2 + noise3).clamp(0.0, 1.0)
}

fn hash_noise(x: f32, y: f32, seed: u64) -> f32 {
    let ix = x.floor() as i32;
    let iy = y.floor() as i32;
    let fx = x - x.floor();
    let fy = y - y.floor();
    let ux = fx * fx * (3.0 - 2.0 * fx);
    let uy = fy * fy * (3.0 - 2.0 * fy);
    let v00 = hash(ix, iy, seed);
    let v10 = hash(ix + 1, iy, seed);
    let v01 = hash(ix, iy + 1, seed);
    let v11 = hash(ix + 1, iy + 1, seed);
    let v0 = v00 + ux * (v10 - v00);
    let v1 = v01 + ux * (v11 - v01);
    v0 + uy * (v1 - v0)
}

fn hash(x: i32, y: i32, seed: u64) -> f32 {
    let n = (x.wrapping_mul(127) ^ y.wrapping_mul(311)) as u64 ^ seed;
    let n = n.wrapping_mul(0x517cc1b727220a95);
    let n = n ^ (n >> 32);
    (n & 0xFFFFFF) as f32 / 0xFFFFFF as f32
}

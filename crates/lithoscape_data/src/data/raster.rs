use serde::{Deserialize, Serialize};

/// Elevation samples aligned to the terrain grid, row-major.
///
/// A sample `<= 0.0` is the water/no-terrain sentinel; foragers never enter
/// such cells. Produced by the (out-of-scope) raster loader or by the demo
/// landscape generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElevationRaster {
    pub width: u16,
    pub height: u16,
    /// `height * width` samples, row-major (`y * width + x`).
    pub samples: Vec<f32>,
}

impl ElevationRaster {
    /// Builds a raster from row-major samples.
    ///
    /// Returns an error when the sample count does not match the shape.
    pub fn new(width: u16, height: u16, samples: Vec<f32>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            samples.len() == width as usize * height as usize,
            "Raster shape mismatch: {}x{} with {} samples",
            width,
            height,
            samples.len()
        );
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Uniform raster, useful in tests.
    #[must_use]
    pub fn filled(width: u16, height: u16, value: f32) -> Self {
        Self {
            width,
            height,
            samples: vec![value; width as usize * height as usize],
        }
    }

    #[inline]
    #[must_use]
    pub fn index(&self, x: u16, y: u16) -> usize {
        (y as usize * self.width as usize) + x as usize
    }

    #[must_use]
    pub fn sample(&self, x: u16, y: u16) -> f32 {
        self.samples[self.index(x, y)]
    }

    pub fn set_sample(&mut self, x: u16, y: u16, value: f32) {
        let idx = self.index(x, y);
        self.samples[idx] = value;
    }
}

/// Integer-valued output raster, same shape as the input elevation raster.
///
/// Carries per-cell assemblage counts or diversity values, row-major, ready
/// for external raster reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRaster {
    pub width: u16,
    pub height: u16,
    /// `height * width` values, row-major (`y * width + x`).
    pub values: Vec<u32>,
}

impl IntRaster {
    #[must_use]
    pub fn zeroed(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            values: vec![0; width as usize * height as usize],
        }
    }

    #[inline]
    #[must_use]
    pub fn index(&self, x: u16, y: u16) -> usize {
        (y as usize * self.width as usize) + x as usize
    }

    #[must_use]
    pub fn value(&self, x: u16, y: u16) -> u32 {
        self.values[self.index(x, y)]
    }

    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Display intensities scaled against the maximum observed value.
    ///
    /// An all-zero raster scales to all zeros.
    #[must_use]
    pub fn intensities(&self) -> Vec<f32> {
        let max = self.max_value();
        if max == 0 {
            return vec![0.0; self.values.len()];
        }
        self.values
            .iter()
            .map(|&v| v as f32 / max as f32)
            .collect()
    }
}

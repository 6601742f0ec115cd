//! Forager agents: grid position and a bounded toolkit of source ids.
//!
//! The toolkit is an unordered multiset stored as a `Vec`; removal uses
//! `swap_remove` since entry order carries no meaning. All capacity and
//! emptiness guards live here so the per-tick sequence can rely on them.

use crate::error::{Result, SimError};
use lithoscape_data::SourceId;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fraction of `max_carry` below which a target-walking forager reorients
/// toward the nearest quarry.
pub const LOW_SUPPLY_FRACTION: f64 = 0.10;

/// A mobile forager with a bounded toolkit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forager {
    pub id: Uuid,
    pub x: u16,
    pub y: u16,
    pub toolkit: Vec<SourceId>,
}

impl Forager {
    /// Spawns a forager with an empty toolkit. The id is drawn from the
    /// world RNG so seeded runs stay reproducible.
    #[must_use]
    pub fn spawn(x: u16, y: u16, rng: &mut impl Rng) -> Self {
        Self {
            id: Uuid::from_u128(rng.gen()),
            x,
            y,
            toolkit: Vec::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    pub fn set_position(&mut self, x: u16, y: u16) {
        self.x = x;
        self.y = y;
    }

    #[must_use]
    pub fn toolkit_len(&self) -> usize {
        self.toolkit.len()
    }

    #[must_use]
    pub fn has_capacity(&self, max_carry: usize) -> bool {
        self.toolkit.len() < max_carry
    }

    /// Supply is low when the toolkit holds less than
    /// [`LOW_SUPPLY_FRACTION`] of `max_carry`.
    #[must_use]
    pub fn is_low_supply(&self, max_carry: usize) -> bool {
        (self.toolkit.len() as f64) < LOW_SUPPLY_FRACTION * max_carry as f64
    }

    /// Adds one item, enforcing the capacity bound.
    pub fn push_item(&mut self, item: SourceId, max_carry: usize) -> Result<()> {
        if self.toolkit.len() >= max_carry {
            return Err(SimError::CapacityOverflow {
                len: self.toolkit.len() + 1,
                max_carry,
            });
        }
        self.toolkit.push(item);
        Ok(())
    }

    /// Removes and returns a uniformly random item.
    ///
    /// A single-item toolkit is valid; an empty one is a precondition
    /// violation the caller must gate out.
    pub fn take_random_item(&mut self, rng: &mut impl Rng) -> Result<SourceId> {
        if self.toolkit.is_empty() {
            return Err(SimError::EmptyToolkit { forager: self.id });
        }
        let idx = rng.gen_range(0..self.toolkit.len());
        Ok(self.toolkit.swap_remove(idx))
    }

    /// Refills the toolkit with copies of `source` up to `max_carry`.
    ///
    /// No-op at or above capacity, so the loop always terminates and the
    /// bound holds even if a caller shrank `max_carry` between runs.
    pub fn refill(&mut self, source: &SourceId, max_carry: usize) -> usize {
        let mut added = 0;
        while self.toolkit.len() < max_carry {
            self.toolkit.push(source.clone());
            added += 1;
        }
        added
    }
}

//! Movement policies for forager agents.
//!
//! The two policies share one contract: given the agent, the grid, and the
//! quarry registry, produce the next position, or `None` when the agent
//! cannot move this tick. Both diagonal and cardinal Moore steps cost one
//! tick; the distance asymmetry is deliberate.

use crate::forager::Forager;
use crate::quarry::QuarryRegistry;
use crate::terrain::TerrainGrid;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tagged movement policy, selected by the `random_walk` config switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementPolicy {
    /// Uniform choice among traversable Moore neighbors.
    RandomWalk,
    /// Step toward the nearest quarry when supply is low, otherwise (and on
    /// water ahead) fall back to a random-walk step.
    TargetWalk,
}

impl MovementPolicy {
    #[must_use]
    pub fn from_switch(random_walk: bool) -> Self {
        if random_walk {
            Self::RandomWalk
        } else {
            Self::TargetWalk
        }
    }

    /// Picks the next cell for `forager`, or `None` for a blocked tick.
    #[must_use]
    pub fn choose_step(
        self,
        forager: &Forager,
        grid: &TerrainGrid,
        registry: &QuarryRegistry,
        max_carry: usize,
        rng: &mut impl Rng,
    ) -> Option<(u16, u16)> {
        match self {
            Self::RandomWalk => random_step(forager, grid, rng),
            Self::TargetWalk => {
                if !forager.is_low_supply(max_carry) {
                    return random_step(forager, grid, rng);
                }
                let Some(target) = registry.nearest_quarry_cell(forager.position()) else {
                    return random_step(forager, grid, rng);
                };
                let ahead = step_toward(forager.position(), target);
                if grid.is_traversable(ahead.0, ahead.1) {
                    Some(ahead)
                } else {
                    // Water ahead: obstacle-avoidance fallback for this tick.
                    // Does not guarantee eventual reachability.
                    random_step(forager, grid, rng)
                }
            }
        }
    }
}

/// One Moore step from `from` in the facing direction of `target`.
///
/// Already at the target means no displacement.
fn step_toward(from: (u16, u16), target: (u16, u16)) -> (u16, u16) {
    let dx = (i32::from(target.0) - i32::from(from.0)).signum();
    let dy = (i32::from(target.1) - i32::from(from.1)).signum();
    (
        (i32::from(from.0) + dx) as u16,
        (i32::from(from.1) + dy) as u16,
    )
}

fn random_step(
    forager: &Forager,
    grid: &TerrainGrid,
    rng: &mut impl Rng,
) -> Option<(u16, u16)> {
    let candidates = grid.traversable_neighbors(forager.x, forager.y);
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.gen_range(0..candidates.len())])
}

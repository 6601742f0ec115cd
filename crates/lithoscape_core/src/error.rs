//! Error types for the simulation engine.
//!
//! Recoverable per-tick conditions (blocked moves, absent exchange partners)
//! are silent no-ops and never appear here. The variants below are either
//! setup failures or precondition violations that indicate a logic bug; the
//! clock surfaces them instead of panicking.

use thiserror::Error;

/// Main error type for simulation operations.
#[derive(Error, Debug)]
pub enum SimError {
    /// Quarry id lookup on a cell without a quarry. Callers must check
    /// `is_quarry` first.
    #[error("No quarry at cell ({x}, {y})")]
    NoQuarryAtCell { x: u16, y: u16 },

    /// Item selection from an empty toolkit. Gated out by length checks in
    /// the per-tick sequence.
    #[error("Empty toolkit access by forager {forager}")]
    EmptyToolkit { forager: uuid::Uuid },

    /// Toolkit would exceed `max_carry`. Guarded before every insertion.
    #[error("Toolkit capacity overflow: {len} items with max_carry {max_carry}")]
    CapacityOverflow { len: usize, max_carry: usize },

    /// No traversable cell exists to place a forager on at setup.
    #[error("No traversable cell available to spawn a forager")]
    NoForagerSpawnSite,
}

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;

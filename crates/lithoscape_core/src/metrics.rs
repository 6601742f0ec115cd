//! Metrics collection for the simulation.
//!
//! Tracks per-run event counts and emits periodic structured log lines via
//! `tracing`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Event counters for one simulation run.
#[derive(Debug)]
pub struct Metrics {
    ticks: AtomicU64,
    deposits: AtomicU64,
    exchanges: AtomicU64,
    reprovisions: AtomicU64,
    blocked_moves: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ticks: AtomicU64::new(0),
            deposits: AtomicU64::new(0),
            exchanges: AtomicU64::new(0),
            reprovisions: AtomicU64::new(0),
            blocked_moves: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick and emits a progress line every
    /// `report_interval` ticks.
    pub fn record_tick(&self, report_interval: u64, foragers: usize) {
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed) + 1;
        if report_interval > 0 && tick % report_interval == 0 {
            tracing::info!(
                tick = tick,
                foragers = foragers,
                deposits = self.deposits(),
                exchanges = self.exchanges(),
                blocked_moves = self.blocked_moves(),
                "Simulation tick"
            );
        }
    }

    pub fn record_deposit(&self) {
        self.deposits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_exchange(&self) {
        self.exchanges.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a quarry refill of `items` artefacts.
    pub fn record_reprovision(&self, items: u64) {
        self.reprovisions.fetch_add(items, Ordering::Relaxed);
    }

    pub fn record_blocked_move(&self) {
        self.blocked_moves.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn deposits(&self) -> u64 {
        self.deposits.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn exchanges(&self) -> u64 {
        self.exchanges.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn reprovisions(&self) -> u64 {
        self.reprovisions.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn blocked_moves(&self) -> u64 {
        self.blocked_moves.load(Ordering::Relaxed)
    }

    /// Elapsed wall time since the run started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}

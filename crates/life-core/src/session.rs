//! The simulation session: one generation pair and its counter.
//!
//! [`Simulation`] owns a "current" and a "next" [`Grid`]. Each
//! [`Simulation::step`] computes the next generation into the spare buffer
//! and swaps the two, so steady-state stepping never allocates.
//!
//! The session carries no locking of its own. Callers that share it between
//! tasks must serialize access (the HTTP layer wraps it in a mutex).

use chrono::Utc;
use life_engine::{EngineError, Grid, PopulateStrategy};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::WorldConfig;

/// Errors raised by the simulation session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The engine rejected a grid operation.
    #[error("engine error: {source}")]
    Engine {
        /// The underlying engine error.
        #[from]
        source: EngineError,
    },
}

/// A running Game of Life simulation.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Grid at the current generation.
    current: Grid,
    /// Spare buffer the next generation is written into.
    next: Grid,
    /// Number of steps taken since population.
    generation: u64,
}

impl Simulation {
    /// Create a session with two all-dead `height` x `width` grids.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] if either dimension is zero.
    pub fn new(height: usize, width: usize) -> Result<Self, SessionError> {
        Ok(Self {
            current: Grid::new(height, width)?,
            next: Grid::new(height, width)?,
            generation: 0,
        })
    }

    /// Create and populate a session from the `world` config section.
    ///
    /// The seed in `world` is ignored here; `rng` is the random source.
    pub fn from_config<R: Rng + ?Sized>(
        world: &WorldConfig,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let mut simulation = Self::new(world.height, world.width)?;
        simulation.populate(world.density_percent, world.populate_strategy, rng);
        info!(
            height = world.height,
            width = world.width,
            density_percent = world.density_percent,
            strategy = ?world.populate_strategy,
            live_cells = simulation.current.live_count(),
            "Simulation populated"
        );
        Ok(simulation)
    }

    /// Seed the current grid and reset the generation counter.
    pub fn populate<R: Rng + ?Sized>(
        &mut self,
        percentage: u8,
        strategy: PopulateStrategy,
        rng: &mut R,
    ) {
        life_engine::populate(&mut self.current, percentage, strategy, rng);
        self.generation = 0;
    }

    /// Advance one generation and return the new current grid.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] if the buffers have drifted apart
    /// in shape, which cannot happen for a session built by [`Self::new`].
    pub fn step(&mut self) -> Result<&Grid, SessionError> {
        life_engine::advance(&self.current, &mut self.next)?;
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation = self.generation.saturating_add(1);
        debug!(
            generation = self.generation,
            live_cells = self.current.live_count(),
            "Generation advanced"
        );
        Ok(&self.current)
    }

    /// Grid at the current generation.
    pub const fn current(&self) -> &Grid {
        &self.current
    }

    /// Number of steps since population.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Mutable access to the current grid, for hand-built starting patterns.
    pub const fn current_mut(&mut self) -> &mut Grid {
        &mut self.current
    }
}

/// Build the population RNG from `seed`, or from wall-clock time if absent.
///
/// Returns the generator together with the seed actually used, so a run can
/// be reproduced by putting that seed in the config.
pub fn seed_rng(seed: Option<u64>) -> (SmallRng, u64) {
    let seed = seed.unwrap_or_else(wall_clock_seed);
    (SmallRng::seed_from_u64(seed), seed)
}

fn wall_clock_seed() -> u64 {
    let now = Utc::now();
    let nanos = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp());
    // Bit reinterpretation; only the entropy matters.
    u64::from_ne_bytes(nanos.to_ne_bytes())
}

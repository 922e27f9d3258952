//! Configuration and session orchestration for the Life service.
//!
//! - [`config`] -- Typed `life-config.yaml` structures and loader.
//! - [`session`] -- [`Simulation`], the owned generation pair that the
//!   HTTP layer steps once per request.

pub mod config;
pub mod session;

pub use config::{ConfigError, LifeConfig};
pub use session::{SessionError, Simulation, seed_rng};

//! Doctrine Simulator
//!
//! Deterministic scenario simulation:
//! - [`classify`]: keyword classification of assumption names and values
//! - [`score`]: bounded success probability plus ranked drivers
//! - [`branches`]: fixed decision branches per probability band
//! - [`run_simulation`]: scoring followed by branch synthesis
//!
//! Every function here is pure; identical inputs give identical outputs.
//!
//! # Example
//!
//! ```rust
//! use doctrine_model::Assumption;
//! use doctrine_simulator::run_simulation;
//!
//! let result = run_simulation(&[Assumption::new("Market Demand", "High")]).unwrap();
//! assert_eq!(result.probability, 63);
//! assert_eq!(result.branches[0].name, "Accelerated Success Path");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod branches;
pub mod classify;
mod error;
pub mod scoring;

pub use branches::{branches, ProbabilityBand, MAX_BRANCHES};
pub use classify::{NameSignals, RiskDirection, ValueTier};
pub use error::SimulationError;
pub use scoring::{score, Score, FALLBACK_DRIVERS, MAX_PROBABILITY, MIN_PROBABILITY};

use doctrine_model::{Assumption, SimulationResult};

/// Score assumptions and synthesize the matching branches
///
/// # Errors
/// [`SimulationError::InvalidInput`] when `assumptions` is empty.
pub fn run_simulation(assumptions: &[Assumption]) -> Result<SimulationResult, SimulationError> {
    let Score {
        probability,
        drivers,
        ..
    } = score(assumptions)?;

    let branches = branches(probability);
    tracing::debug!(
        probability,
        band = ?ProbabilityBand::of(probability),
        branches = branches.len(),
        "simulation complete"
    );

    Ok(SimulationResult {
        probability,
        drivers,
        branches,
    })
}

/// One-line outcome stored alongside a scenario
#[must_use]
pub fn outcome_summary(probability: u8) -> String {
    format!("{probability}% probability of success")
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

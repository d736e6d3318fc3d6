//! Scenario scoring engine
//!
//! Turns a set of assumptions into a bounded success probability and a
//! ranked list of drivers. Rules are additive; for each assumption they are
//! applied in the order value tier, market signal, risk signal, which is also
//! the order drivers are emitted in.

use crate::classify::{NameSignals, RiskDirection, ValueTier};
use crate::error::SimulationError;
use doctrine_model::Assumption;

/// Starting score before any assumption is applied
pub const BASE_SCORE: i32 = 50;

/// Lowest probability the engine will report
pub const MIN_PROBABILITY: u8 = 15;

/// Highest probability the engine will report
pub const MAX_PROBABILITY: u8 = 85;

/// Number of drivers reported
pub const DRIVER_COUNT: usize = 3;

/// Generic drivers appended when assumptions yield fewer than three
pub const FALLBACK_DRIVERS: [&str; 3] = [
    "Execution capability and team strength",
    "Market timing and competitive positioning",
    "Resource allocation and operational efficiency",
];

const MARKET_DRIVER: &str = "Market dynamics are a key success factor";
const MARKET_ADJUSTMENT: i32 = 5;

/// Result of scoring an assumption set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// Clamped probability in `[15, 85]`
    pub probability: u8,
    /// Accumulated score before clamping
    pub raw: i32,
    /// Exactly three drivers
    pub drivers: Vec<String>,
}

/// Score an assumption set
///
/// # Errors
/// [`SimulationError::InvalidInput`] when `assumptions` is empty.
pub fn score(assumptions: &[Assumption]) -> Result<Score, SimulationError> {
    if assumptions.is_empty() {
        return Err(SimulationError::invalid_input(
            "at least one assumption is required",
        ));
    }

    let mut raw = BASE_SCORE;
    let mut drivers = Vec::new();

    for assumption in assumptions {
        let before = raw;

        let tier = ValueTier::of(&assumption.value);
        raw += tier.adjustment();
        match tier {
            ValueTier::Strong => {
                drivers.push(format!("Strong {} provides positive momentum", assumption.name));
            }
            ValueTier::Weak => {
                drivers.push(format!("Weak {} presents headwinds", assumption.name));
            }
            ValueTier::Moderate | ValueTier::Neutral => {}
        }

        let signals = NameSignals::of(&assumption.name);
        if signals.market {
            raw += MARKET_ADJUSTMENT;
            drivers.push(MARKET_DRIVER.to_string());
        }
        if signals.risk {
            raw += RiskDirection::of(&assumption.value).adjustment();
        }

        tracing::debug!(
            name = %assumption.name,
            value = %assumption.value,
            ?tier,
            delta = raw - before,
            "scored assumption"
        );
    }

    let probability = clamp_probability(raw);
    Ok(Score {
        probability,
        raw,
        drivers: top_drivers(drivers),
    })
}

/// Clamp an accumulated score into the reportable range
#[must_use]
pub fn clamp_probability(raw: i32) -> u8 {
    let clamped = raw.clamp(i32::from(MIN_PROBABILITY), i32::from(MAX_PROBABILITY));
    // Within 15..=85 after the clamp
    u8::try_from(clamped).unwrap_or(MIN_PROBABILITY)
}

/// Keep the first three drivers, padding with fallbacks in order
fn top_drivers(mut drivers: Vec<String>) -> Vec<String> {
    drivers.truncate(DRIVER_COUNT);
    if drivers.len() < DRIVER_COUNT {
        drivers.extend(FALLBACK_DRIVERS.iter().map(|d| (*d).to_string()));
        drivers.truncate(DRIVER_COUNT);
    }
    drivers
}

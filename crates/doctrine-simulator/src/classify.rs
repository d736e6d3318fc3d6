//! Keyword classification of assumption names and values
//!
//! Matching is lower-cased substring membership. Kept apart from scoring so
//! the vocabulary can be tested on its own.

/// Qualitative strength read from an assumption value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTier {
    /// "high", "strong" or "favorable"
    Strong,
    /// "medium" or "moderate"
    Moderate,
    /// "low", "weak" or "unfavorable"
    Weak,
    /// No tier keyword present
    Neutral,
}

const STRONG: [&str; 3] = ["high", "strong", "favorable"];
const MODERATE: [&str; 2] = ["medium", "moderate"];
const WEAK: [&str; 3] = ["low", "weak", "unfavorable"];

impl ValueTier {
    /// Classify a value; tiers are tried strong, moderate, weak
    ///
    /// "unfavorable" contains "favorable", so it lands in `Strong`.
    #[must_use]
    pub fn of(value: &str) -> Self {
        let value = value.to_lowercase();
        if contains_any(&value, &STRONG) {
            Self::Strong
        } else if contains_any(&value, &MODERATE) {
            Self::Moderate
        } else if contains_any(&value, &WEAK) {
            Self::Weak
        } else {
            Self::Neutral
        }
    }

    /// Score adjustment for this tier
    #[inline]
    #[must_use]
    pub fn adjustment(&self) -> i32 {
        match self {
            Self::Strong => 8,
            Self::Moderate => 3,
            Self::Weak => -5,
            Self::Neutral => 0,
        }
    }
}

/// Signals carried by an assumption name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NameSignals {
    /// Name mentions "market" or "demand"
    pub market: bool,
    /// Name mentions "risk" or "competition"
    pub risk: bool,
}

impl NameSignals {
    /// Classify an assumption name
    #[must_use]
    pub fn of(name: &str) -> Self {
        let name = name.to_lowercase();
        Self {
            market: contains_any(&name, &["market", "demand"]),
            risk: contains_any(&name, &["risk", "competition"]),
        }
    }
}

/// Direction of a risk-type assumption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskDirection {
    /// Value mentions "low": exposure is small
    Low,
    /// Value mentions "high": exposure is large
    High,
    /// Neither
    Unspecified,
}

impl RiskDirection {
    /// "low" is checked before "high"
    #[must_use]
    pub fn of(value: &str) -> Self {
        let value = value.to_lowercase();
        if value.contains("low") {
            Self::Low
        } else if value.contains("high") {
            Self::High
        } else {
            Self::Unspecified
        }
    }

    /// Score adjustment for a risk/competition assumption
    #[inline]
    #[must_use]
    pub fn adjustment(&self) -> i32 {
        match self {
            Self::Low => 7,
            Self::High => -8,
            Self::Unspecified => 0,
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

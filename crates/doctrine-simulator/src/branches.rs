//! Branch synthesizer
//!
//! Maps the clamped probability onto one of three fixed branch catalogs.

use doctrine_model::Branch;

/// Most branches ever returned
pub const MAX_BRANCHES: usize = 3;

/// Probability band selecting a branch catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilityBand {
    /// `probability >= 60`
    High,
    /// `40 <= probability < 60`
    Middle,
    /// `probability < 40`
    Low,
}

impl ProbabilityBand {
    /// Band for a probability; lower bounds are inclusive
    #[must_use]
    pub fn of(probability: u8) -> Self {
        match probability {
            60.. => Self::High,
            40..=59 => Self::Middle,
            _ => Self::Low,
        }
    }

    /// Number of branches in this band's catalog
    #[inline]
    #[must_use]
    pub fn catalog_size(&self) -> usize {
        match self {
            Self::High => 2,
            Self::Middle | Self::Low => 3,
        }
    }
}

/// Decision branches for a clamped probability
#[must_use]
pub fn branches(probability: u8) -> Vec<Branch> {
    let mut branches = match ProbabilityBand::of(probability) {
        ProbabilityBand::High => vec![
            Branch::new(
                "Accelerated Success Path",
                format!(
                    "With {probability}% success probability, immediate execution is recommended. \
                     Key assumptions validate market readiness and competitive positioning. \
                     Mitigation: Establish clear milestones and decision gates to maintain \
                     momentum while managing risk."
                ),
            ),
            Branch::new(
                "Measured Rollout",
                "Alternative approach with staged implementation to validate assumptions \
                 incrementally. Mitigation: Pilot program with select segment before full \
                 launch, allowing for course correction.",
            ),
        ],
        ProbabilityBand::Middle => vec![
            Branch::new(
                "Conditional Proceed",
                format!(
                    "Moderate success probability ({probability}%) suggests proceeding with \
                     enhanced risk management. Mitigation: Strengthen weak assumptions through \
                     additional validation, establish clear exit criteria."
                ),
            ),
            Branch::new(
                "Strategic Delay",
                "Defer decision until key assumptions can be strengthened. Mitigation: Use \
                 delay period to improve market position, build capabilities, or wait for more \
                 favorable conditions.",
            ),
            Branch::new(
                "Pivot Approach",
                "Modify core strategy to address identified weaknesses. Mitigation: Redesign \
                 approach to leverage strengths while minimizing exposure to weak assumptions.",
            ),
        ],
        ProbabilityBand::Low => vec![
            Branch::new(
                "Strategic Pause",
                format!(
                    "Low success probability ({probability}%) indicates significant headwinds. \
                     Mitigation: Conduct deeper analysis of weak assumptions, consider whether \
                     fundamental strategy needs revision."
                ),
            ),
            Branch::new(
                "Alternative Approach",
                "Current path shows high risk. Explore alternative strategies that address the \
                 same objective with different risk profile. Mitigation: Brainstorm 3-5 \
                 alternative approaches and run comparative analysis.",
            ),
            Branch::new(
                "No-Go Decision",
                "Recommend against proceeding under current conditions. Mitigation: Document \
                 decision rationale, establish triggers for future reconsideration if conditions \
                 improve.",
            ),
        ],
    };
    branches.truncate(MAX_BRANCHES);
    branches
}

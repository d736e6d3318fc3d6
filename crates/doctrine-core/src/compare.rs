//! Side-by-side scenario comparison

use crate::error::EngineError;
use crate::store::{RecordId, Scenario};
use doctrine_model::Assumption;
use serde::{Deserialize, Serialize};

/// Assumption present in both scenarios
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedAssumption {
    pub name: String,
    pub left: String,
    pub right: String,
}

impl SharedAssumption {
    #[inline]
    #[must_use]
    pub fn differs(&self) -> bool {
        self.left != self.right
    }
}

/// Difference between two stored scenarios
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub left: RecordId,
    pub right: RecordId,
    /// Right probability minus left probability
    pub probability_delta: i16,
    pub shared: Vec<SharedAssumption>,
    pub only_left: Vec<Assumption>,
    pub only_right: Vec<Assumption>,
    pub left_branches: Vec<String>,
    pub right_branches: Vec<String>,
}

/// Compare two scenarios by assumption name
///
/// Shared assumptions keep the left scenario's order; the first occurrence of
/// a repeated name wins.
///
/// # Errors
/// `EngineError::InvalidInput` when both sides are the same record.
pub fn compare_scenarios(
    left: &Scenario,
    right: &Scenario,
) -> Result<ScenarioComparison, EngineError> {
    if left.id == right.id {
        return Err(EngineError::invalid_input(format!(
            "cannot compare scenario {} with itself",
            left.id
        )));
    }

    let find = |list: &[Assumption], name: &str| -> Option<String> {
        list.iter().find(|a| a.name == name).map(|a| a.value.clone())
    };

    let mut shared: Vec<SharedAssumption> = Vec::new();
    let mut only_left = Vec::new();
    for assumption in &left.assumptions {
        if shared.iter().any(|s| s.name == assumption.name) {
            continue;
        }
        match find(&right.assumptions, &assumption.name) {
            Some(value) => shared.push(SharedAssumption {
                name: assumption.name.clone(),
                left: assumption.value.clone(),
                right: value,
            }),
            None => only_left.push(assumption.clone()),
        }
    }

    let only_right = right
        .assumptions
        .iter()
        .filter(|a| find(&left.assumptions, &a.name).is_none())
        .cloned()
        .collect();

    let branch_names =
        |s: &Scenario| -> Vec<String> { s.branches.iter().map(|b| b.name.clone()).collect() };

    Ok(ScenarioComparison {
        left: left.id.clone(),
        right: right.id.clone(),
        probability_delta: i16::from(right.probability) - i16::from(left.probability),
        shared,
        only_left,
        only_right,
        left_branches: branch_names(left),
        right_branches: branch_names(right),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use doctrine_model::{Branch, SimulationResult};
    use pretty_assertions::assert_eq;

    fn scenario(probability: u8, assumptions: &[(&str, &str)], branches: &[&str]) -> Scenario {
        let assumptions: Vec<Assumption> = assumptions
            .iter()
            .map(|(n, v)| Assumption::new(*n, *v))
            .collect();
        let result = SimulationResult {
            probability,
            drivers: vec![],
            branches: branches.iter().map(|b| Branch::new(*b, "")).collect(),
        };
        Scenario::from_simulation("s", None, &assumptions, &result, Utc::now())
    }

    #[test]
    fn splits_shared_and_unique() {
        let left = scenario(63, &[("Market Demand", "High"), ("Funding", "weak")], &["A"]);
        let right = scenario(35, &[("Market Demand", "Low"), ("Team", "strong")], &["B", "C"]);

        let cmp = compare_scenarios(&left, &right).unwrap();
        assert_eq!(cmp.probability_delta, -28);
        assert_eq!(
            cmp.shared,
            vec![SharedAssumption {
                name: "Market Demand".into(),
                left: "High".into(),
                right: "Low".into(),
            }]
        );
        assert!(cmp.shared[0].differs());
        assert_eq!(cmp.only_left, vec![Assumption::new("Funding", "weak")]);
        assert_eq!(cmp.only_right, vec![Assumption::new("Team", "strong")]);
        assert_eq!(cmp.right_branches, vec!["B", "C"]);
    }

    #[test]
    fn self_comparison_is_rejected() {
        let left = scenario(50, &[("X", "y")], &[]);
        let err = compare_scenarios(&left, &left.clone()).unwrap_err();
        assert!(err.is_invalid_input());
    }
}

//! Repair policy: classification thresholds and the cost table.
//!
//! Both halves are plain serde structs with defaults, so a caller can load a
//! partial policy from any serde format and get the stock values for the rest.

mod rates;
mod thresholds;

use serde::{Deserialize, Serialize};

use crate::error::PlanResult;

pub use rates::CostRates;
pub use thresholds::DensityThresholds;

/// Thresholds plus rates used by a [`Planner`](crate::planner::Planner).
///
/// # Examples
///
/// ```
/// use u_roadrepair::policy::RepairPolicy;
///
/// let policy = RepairPolicy::default();
/// assert!(policy.validate().is_ok());
/// assert_eq!(policy.thresholds.resurfacing, 0.4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RepairPolicy {
    pub thresholds: DensityThresholds,
    pub rates: CostRates,
}

impl RepairPolicy {
    /// Validates thresholds and rates.
    pub fn validate(&self) -> PlanResult<()> {
        self.thresholds.validate()?;
        self.rates.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_policy_fills_defaults() {
        let policy: RepairPolicy =
            serde_json::from_str(r#"{"rates": {"filling_per_pothole": 20.0}}"#).expect("parse");
        assert_eq!(policy.rates.filling_per_pothole, 20.0);
        assert_eq!(policy.rates.patching_per_square_unit, 3.0);
        assert_eq!(policy.thresholds, DensityThresholds::default());
    }

    #[test]
    fn test_empty_policy_is_default() {
        let policy: RepairPolicy = serde_json::from_str("{}").expect("parse");
        assert_eq!(policy, RepairPolicy::default());
    }

    #[test]
    fn test_validate_propagates() {
        let mut policy = RepairPolicy::default();
        policy.thresholds.patching = 0.9;
        assert!(policy.validate().is_err());
    }
}

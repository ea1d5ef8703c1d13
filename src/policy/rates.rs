//! Per-kind cost rates.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::models::RepairKind;

/// Unit prices for each repair kind.
///
/// Filling is priced per pothole; patching and resurfacing per square unit of
/// road surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostRates {
    pub filling_per_pothole: f64,
    pub patching_per_square_unit: f64,
    pub resurfacing_per_square_unit: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            filling_per_pothole: 12.0,
            patching_per_square_unit: 3.0,
            resurfacing_per_square_unit: 5.0,
        }
    }
}

impl CostRates {
    /// The rate applied to the given kind.
    pub fn rate(&self, kind: RepairKind) -> f64 {
        match kind {
            RepairKind::Filling => self.filling_per_pothole,
            RepairKind::Patching => self.patching_per_square_unit,
            RepairKind::Resurfacing => self.resurfacing_per_square_unit,
        }
    }

    /// Checks every rate is finite and non-negative.
    pub fn validate(&self) -> PlanResult<()> {
        for kind in RepairKind::all() {
            let rate = self.rate(kind);
            if !rate.is_finite() || rate < 0.0 {
                return Err(PlanError::InvalidRate { kind, rate });
            }
        }
        Ok(())
    }
}

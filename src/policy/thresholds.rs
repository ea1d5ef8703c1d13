//! Density thresholds that map a road to a repair kind.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::models::RepairKind;

/// Pothole-density cut-offs between repair kinds.
///
/// Both comparisons are strict: a density exactly at a threshold falls into
/// the cheaper kind. No epsilon is applied.
///
/// # Examples
///
/// ```
/// use u_roadrepair::models::RepairKind;
/// use u_roadrepair::policy::DensityThresholds;
///
/// let t = DensityThresholds::default();
/// assert_eq!(t.classify(0.45), RepairKind::Resurfacing);
/// assert_eq!(t.classify(0.4), RepairKind::Patching);
/// assert_eq!(t.classify(0.2), RepairKind::Filling);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityThresholds {
    /// Densities strictly above this are patched (or resurfaced).
    pub patching: f64,
    /// Densities strictly above this are resurfaced.
    pub resurfacing: f64,
}

impl Default for DensityThresholds {
    fn default() -> Self {
        Self {
            patching: 0.2,
            resurfacing: 0.4,
        }
    }
}

impl DensityThresholds {
    /// Returns the repair kind for the given density.
    pub fn classify(&self, density: f64) -> RepairKind {
        if density > self.resurfacing {
            RepairKind::Resurfacing
        } else if density > self.patching {
            RepairKind::Patching
        } else {
            RepairKind::Filling
        }
    }

    /// Checks both thresholds are finite, non-negative, and ordered.
    pub fn validate(&self) -> PlanResult<()> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if !ok(self.patching) || !ok(self.resurfacing) || self.patching > self.resurfacing {
            return Err(PlanError::InvalidThresholds {
                patching: self.patching,
                resurfacing: self.resurfacing,
            });
        }
        Ok(())
    }
}

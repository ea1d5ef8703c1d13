//! Repair types and their cost table.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Road;
use crate::policy::CostRates;

/// The kind of repair, without the road it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairKind {
    /// Fill individual potholes.
    Filling,
    /// Patch sections of the surface.
    Patching,
    /// Resurface the whole road.
    Resurfacing,
}

impl RepairKind {
    /// All kinds, cheapest classification first.
    pub fn all() -> [RepairKind; 3] {
        [Self::Filling, Self::Patching, Self::Resurfacing]
    }

    /// Lowercase name used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Filling => "filling",
            Self::Patching => "patching",
            Self::Resurfacing => "resurfacing",
        }
    }
}

impl fmt::Display for RepairKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A repair bound to the road it applies to.
///
/// Produced transiently by classification; read its cost and drop it.
///
/// # Examples
///
/// ```
/// use u_roadrepair::models::{RepairKind, RepairType, Road};
/// use u_roadrepair::policy::CostRates;
///
/// let road = Road::new(10.0, 10.0, 15).unwrap();
/// let repair = RepairType::new(RepairKind::Filling, &road);
/// assert_eq!(repair.cost(&CostRates::default()), 15.0 * 12.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RepairType<'a> {
    Filling(&'a Road),
    Patching(&'a Road),
    Resurfacing(&'a Road),
}

impl<'a> RepairType<'a> {
    /// Binds a repair kind to a road.
    pub fn new(kind: RepairKind, road: &'a Road) -> Self {
        match kind {
            RepairKind::Filling => Self::Filling(road),
            RepairKind::Patching => Self::Patching(road),
            RepairKind::Resurfacing => Self::Resurfacing(road),
        }
    }

    /// The kind of this repair.
    pub fn kind(&self) -> RepairKind {
        match self {
            Self::Filling(_) => RepairKind::Filling,
            Self::Patching(_) => RepairKind::Patching,
            Self::Resurfacing(_) => RepairKind::Resurfacing,
        }
    }

    /// The road being repaired.
    pub fn road(&self) -> &'a Road {
        match *self {
            Self::Filling(road) | Self::Patching(road) | Self::Resurfacing(road) => road,
        }
    }

    /// Monetary cost of this repair under the given rates.
    ///
    /// - Filling: potholes × per-pothole rate
    /// - Patching: area × per-square-unit patching rate
    /// - Resurfacing: area × per-square-unit resurfacing rate
    pub fn cost(&self, rates: &CostRates) -> f64 {
        match *self {
            Self::Filling(road) => f64::from(road.potholes()) * rates.filling_per_pothole,
            Self::Patching(road) => road.area() * rates.patching_per_square_unit,
            Self::Resurfacing(road) => road.area() * rates.resurfacing_per_square_unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn road() -> Road {
        Road::new(10.0, 10.0, 30).expect("valid")
    }

    #[test]
    fn test_kind_roundtrip() {
        let r = road();
        for kind in RepairKind::all() {
            let repair = RepairType::new(kind, &r);
            assert_eq!(repair.kind(), kind);
            assert_eq!(repair.road(), &r);
        }
    }

    #[test]
    fn test_costs_default_rates() {
        let r = road();
        let rates = CostRates::default();
        assert!((RepairType::Filling(&r).cost(&rates) - 360.0).abs() < 1e-10);
        assert!((RepairType::Patching(&r).cost(&rates) - 300.0).abs() < 1e-10);
        assert!((RepairType::Resurfacing(&r).cost(&rates) - 500.0).abs() < 1e-10);
    }

    #[test]
    fn test_filling_cost_ignores_area() {
        let rates = CostRates::default();
        let small = Road::new(1.0, 1.0, 4).expect("valid");
        let large = Road::new(100.0, 100.0, 4).expect("valid");
        assert_eq!(
            RepairType::Filling(&small).cost(&rates),
            RepairType::Filling(&large).cost(&rates)
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(RepairKind::Filling.to_string(), "filling");
        assert_eq!(RepairKind::Resurfacing.to_string(), "resurfacing");
    }

    #[test]
    fn test_kind_serde_name() {
        let json = serde_json::to_string(&RepairKind::Patching).expect("serialize");
        assert_eq!(json, "\"patching\"");
    }
}

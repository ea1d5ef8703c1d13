//! Road type with its derived pothole density.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// A road segment awaiting repair.
///
/// Width and length are validated on construction, so the road always has a
/// positive, finite area and [`Road::pothole_density`] never divides by zero.
///
/// # Examples
///
/// ```
/// use u_roadrepair::models::Road;
///
/// let road = Road::new(10.0, 10.0, 45).unwrap();
/// assert_eq!(road.area(), 100.0);
/// assert!((road.pothole_density() - 0.45).abs() < 1e-10);
///
/// assert!(Road::new(0.0, 10.0, 5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoadRecord")]
pub struct Road {
    width: f64,
    length: f64,
    potholes: u32,
}

/// Unvalidated wire shape of a [`Road`].
#[derive(Deserialize)]
struct RoadRecord {
    width: f64,
    length: f64,
    potholes: u32,
}

impl TryFrom<RoadRecord> for Road {
    type Error = PlanError;

    fn try_from(record: RoadRecord) -> PlanResult<Self> {
        Road::new(record.width, record.length, record.potholes)
    }
}

impl Road {
    /// Creates a road.
    ///
    /// Returns [`PlanError::InvalidDimension`] if either dimension is zero,
    /// negative, or non-finite, or if the area is so small or so large that
    /// area or density stops being a positive finite number.
    pub fn new(width: f64, length: f64, potholes: u32) -> PlanResult<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        let area = width * length;
        if !valid(width)
            || !valid(length)
            || !valid(area)
            || !(f64::from(potholes) / area).is_finite()
        {
            return Err(PlanError::InvalidDimension { width, length });
        }
        Ok(Self {
            width,
            length,
            potholes,
        })
    }

    /// Road width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Road length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of potholes on the road.
    pub fn potholes(&self) -> u32 {
        self.potholes
    }

    /// Surface area (width × length).
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Potholes per unit area.
    pub fn pothole_density(&self) -> f64 {
        f64::from(self.potholes) / self.area()
    }
}

//! # u-roadrepair
//!
//! Road repair planning: pick a repair per road from its pothole density,
//! price the work, estimate labour time, and choose which roads a budget
//! covers with a greedy heuristic.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Road, RepairKind, RepairType)
//! - [`policy`] — Density thresholds and cost rates
//! - [`planner`] — Planner, greedy budget selection, repair plans
//! - [`error`] — Error type for invalid roads, workforce, budgets, and policies

pub mod error;
pub mod models;
pub mod planner;
pub mod policy;

pub use error::{PlanError, PlanResult};

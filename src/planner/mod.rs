//! Repair planning: classification, costing, time estimates, and greedy
//! budgeted selection.
//!
//! - [`Planner`] — workforce settings plus the repair policy
//! - [`RepairPlan`] — selected and skipped roads from a budgeted run
//! - [`RepairQuote`] — one road's repair kind, density, and cost

mod greedy;
mod plan;
mod repair_planner;

pub use plan::{RepairPlan, RepairQuote};
pub use repair_planner::Planner;

//! Greedy budgeted road selection.
//!
//! Roads are visited in descending pothole order (stable, ties keep input
//! order). Each road is taken if its repair cost fits the money left, and
//! skipped otherwise; there is no backtracking.
//!
//! # Complexity
//!
//! O(n log n) for the sort, O(n) for the pass.
//!
//! # Caveat
//!
//! The ordering assumes more potholes means a dearer repair. Cost depends on
//! the repair kind and the road's area, so a skipped road can be followed by
//! a cheaper, less damaged road that fits. The result is not a cost-optimal
//! subset.

use std::cmp::Reverse;

use tracing::{debug, info, warn};

use super::plan::{RepairPlan, RepairQuote};
use crate::models::Road;

/// Indices of `roads` sorted by descending pothole count, ties in input order.
pub(crate) fn priority_order(roads: &[Road]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..roads.len()).collect();
    order.sort_by_key(|&i| Reverse(roads[i].potholes()));
    order
}

/// Returns `true` if a skipped road had strictly more potholes than the one
/// being selected.
fn skipped_more_damaged(skipped_potholes: Option<u32>, selected_potholes: u32) -> bool {
    skipped_potholes.is_some_and(|p| p > selected_potholes)
}

/// Runs the greedy pass. `quote` prices the road at the given input index.
///
/// `budget` must already be validated as a non-negative number.
pub(crate) fn select_within_budget<F>(roads: &[Road], budget: f64, mut quote: F) -> RepairPlan
where
    F: FnMut(usize, &Road) -> RepairQuote,
{
    let mut plan = RepairPlan::new(budget);
    let mut remaining = budget;
    // Pothole count of the first (and so largest) skipped road.
    let mut skipped_potholes: Option<u32> = None;
    let mut warned = false;

    for i in priority_order(roads) {
        let road = &roads[i];
        let q = quote(i, road);

        if q.cost <= remaining {
            // An unbounded budget stays unbounded, even against an infinite cost.
            if remaining.is_finite() {
                remaining -= q.cost;
            }
            debug!(
                index = i,
                potholes = road.potholes(),
                kind = %q.kind,
                cost = q.cost,
                remaining,
                "road selected"
            );
            if !warned && skipped_more_damaged(skipped_potholes, road.potholes()) {
                warned = true;
                warn!(
                    index = i,
                    potholes = road.potholes(),
                    skipped_potholes = ?skipped_potholes,
                    "selected a road after skipping one with more potholes"
                );
            }
            plan.select(q);
        } else {
            debug!(
                index = i,
                potholes = road.potholes(),
                kind = %q.kind,
                cost = q.cost,
                remaining,
                "road skipped: over budget"
            );
            skipped_potholes.get_or_insert(road.potholes());
            plan.skip(q);
        }
    }

    info!(
        roads = roads.len(),
        selected = plan.selected().len(),
        spent = plan.spent(),
        remaining,
        "repair selection complete"
    );

    plan
}

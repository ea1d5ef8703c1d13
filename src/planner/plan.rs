//! Per-road quotes and the outcome of a budgeted selection.

use serde::{Deserialize, Serialize};

use crate::models::{RepairKind, Road};

/// The classification and price of a single road.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepairQuote {
    /// Position of the road in the caller's input slice.
    pub index: usize,
    pub kind: RepairKind,
    pub density: f64,
    pub cost: f64,
}

/// Result of a greedy budgeted selection.
///
/// `selected` and `skipped` are both in processing order: descending pothole
/// count, ties in input order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RepairPlan {
    selected: Vec<RepairQuote>,
    skipped: Vec<RepairQuote>,
    budget: f64,
    spent: f64,
}

impl RepairPlan {
    pub(crate) fn new(budget: f64) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }

    pub(crate) fn select(&mut self, quote: RepairQuote) {
        self.spent += quote.cost;
        self.selected.push(quote);
    }

    pub(crate) fn skip(&mut self, quote: RepairQuote) {
        self.skipped.push(quote);
    }

    /// Quotes for the roads that fit the budget.
    pub fn selected(&self) -> &[RepairQuote] {
        &self.selected
    }

    /// Quotes for the roads that did not fit.
    pub fn skipped(&self) -> &[RepairQuote] {
        &self.skipped
    }

    /// Input indices of the selected roads.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().map(|q| q.index).collect()
    }

    /// Clones the selected roads out of the slice the plan was built from.
    ///
    /// Returns `None` if `roads` is too short for any selected index.
    pub fn selected_roads(&self, roads: &[Road]) -> Option<Vec<Road>> {
        self.selected
            .iter()
            .map(|q| roads.get(q.index).cloned())
            .collect()
    }

    /// Money available when planning started.
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Total cost of the selected repairs.
    pub fn spent(&self) -> f64 {
        self.spent
    }

    /// Budget left after the selected repairs, never negative. An infinite
    /// budget always has infinite money left.
    pub fn remaining(&self) -> f64 {
        if self.budget.is_infinite() {
            return self.budget;
        }
        (self.budget - self.spent).max(0.0)
    }

    /// Returns `true` if every road was selected.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

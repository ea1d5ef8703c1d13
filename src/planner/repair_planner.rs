//! Planner holding workforce settings and the repair policy.

use serde::{Deserialize, Serialize};

use super::greedy::select_within_budget;
use super::plan::{RepairPlan, RepairQuote};
use crate::error::{PlanError, PlanResult};
use crate::models::{RepairType, Road};
use crate::policy::RepairPolicy;

/// Classifies roads, prices repairs, estimates labour time, and picks the
/// roads a budget can cover.
///
/// `hours_of_work` and `workers` only feed [`Planner::time`]; the per-road
/// logic depends on the [`RepairPolicy`] alone.
///
/// # Examples
///
/// ```
/// use u_roadrepair::models::{RepairKind, Road};
/// use u_roadrepair::planner::Planner;
///
/// let planner = Planner::new(100, 4).unwrap();
/// assert_eq!(planner.time(), 25.0);
///
/// let roads = vec![
///     Road::new(10.0, 10.0, 45).unwrap(), // resurface: 500
///     Road::new(10.0, 10.0, 25).unwrap(), // patch: 300
///     Road::new(10.0, 10.0, 15).unwrap(), // fill: 180
/// ];
/// assert_eq!(planner.select_repair_type(&roads[0]).kind(), RepairKind::Resurfacing);
/// assert_eq!(planner.cost_of_repairs(&roads), 980.0);
///
/// let picked = planner.select_roads_to_repair(&roads, 500.0).unwrap();
/// assert_eq!(picked, vec![roads[0].clone()]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlannerConfig")]
pub struct Planner {
    hours_of_work: u32,
    workers: u32,
    policy: RepairPolicy,
}

/// Unvalidated wire shape of a [`Planner`].
#[derive(Deserialize)]
struct PlannerConfig {
    hours_of_work: u32,
    workers: u32,
    #[serde(default)]
    policy: RepairPolicy,
}

impl TryFrom<PlannerConfig> for Planner {
    type Error = PlanError;

    fn try_from(config: PlannerConfig) -> PlanResult<Self> {
        Planner::new(config.hours_of_work, config.workers)?.with_policy(config.policy)
    }
}

impl Planner {
    /// Creates a planner with the default policy.
    ///
    /// Returns [`PlanError::InvalidWorkerCount`] if `workers` is zero.
    pub fn new(hours_of_work: u32, workers: u32) -> PlanResult<Self> {
        check_workers(workers)?;
        Ok(Self {
            hours_of_work,
            workers,
            policy: RepairPolicy::default(),
        })
    }

    /// Replaces the repair policy after validating it.
    pub fn with_policy(mut self, policy: RepairPolicy) -> PlanResult<Self> {
        policy.validate()?;
        self.policy = policy;
        Ok(self)
    }

    /// Total hours of work to be done.
    pub fn hours_of_work(&self) -> u32 {
        self.hours_of_work
    }

    /// Sets the total hours of work.
    pub fn set_hours_of_work(&mut self, hours: u32) {
        self.hours_of_work = hours;
    }

    /// Number of people available.
    pub fn workers(&self) -> u32 {
        self.workers
    }

    /// Sets the number of workers; zero is rejected and leaves the planner
    /// unchanged.
    pub fn set_workers(&mut self, workers: u32) -> PlanResult<()> {
        check_workers(workers)?;
        self.workers = workers;
        Ok(())
    }

    /// The active repair policy.
    pub fn policy(&self) -> &RepairPolicy {
        &self.policy
    }

    /// Hours to complete the work using every worker.
    pub fn time(&self) -> f64 {
        f64::from(self.hours_of_work) / f64::from(self.workers)
    }

    /// Chooses filling, patching, or resurfacing from the road's density.
    pub fn select_repair_type<'a>(&self, road: &'a Road) -> RepairType<'a> {
        let kind = self.policy.thresholds.classify(road.pothole_density());
        RepairType::new(kind, road)
    }

    /// Cost of the repair selected for one road.
    pub fn repair_cost(&self, road: &Road) -> f64 {
        self.select_repair_type(road).cost(&self.policy.rates)
    }

    /// Total cost of repairing every road, summed in input order.
    pub fn cost_of_repairs(&self, roads: &[Road]) -> f64 {
        let mut total = 0.0;
        for road in roads {
            total += self.repair_cost(road);
        }
        total
    }

    /// Classifies and prices every road, in input order.
    pub fn quote(&self, roads: &[Road]) -> Vec<RepairQuote> {
        roads
            .iter()
            .enumerate()
            .map(|(i, road)| self.quote_one(i, road))
            .collect()
    }

    /// Greedily selects roads that fit `available_money`, returning the full
    /// plan. See [`Planner::select_roads_to_repair`].
    ///
    /// Returns [`PlanError::InvalidBudget`] if the budget is NaN or negative.
    pub fn plan_repairs(&self, roads: &[Road], available_money: f64) -> PlanResult<RepairPlan> {
        if available_money.is_nan() || available_money < 0.0 {
            return Err(PlanError::InvalidBudget(available_money));
        }
        Ok(select_within_budget(roads, available_money, |i, road| {
            self.quote_one(i, road)
        }))
    }

    /// Selects a subset of roads whose repairs fit `available_money`.
    ///
    /// Roads are considered by descending pothole count (ties keep input
    /// order) and taken whenever their cost fits what is left. The result is
    /// in that processing order. This is a greedy heuristic and can leave
    /// money unused that a different subset would spend.
    pub fn select_roads_to_repair(
        &self,
        roads: &[Road],
        available_money: f64,
    ) -> PlanResult<Vec<Road>> {
        let plan = self.plan_repairs(roads, available_money)?;
        Ok(plan
            .selected()
            .iter()
            .map(|q| roads[q.index].clone())
            .collect())
    }

    fn quote_one(&self, index: usize, road: &Road) -> RepairQuote {
        let repair = self.select_repair_type(road);
        RepairQuote {
            index,
            kind: repair.kind(),
            density: road.pothole_density(),
            cost: repair.cost(&self.policy.rates),
        }
    }
}

fn check_workers(workers: u32) -> PlanResult<()> {
    if workers == 0 {
        return Err(PlanError::InvalidWorkerCount(workers));
    }
    Ok(())
}

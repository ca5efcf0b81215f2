//! Crop allocation GA problem definition.
//!
//! Bridges the scenario model to the generation loop: creates individuals
//! and scores them as net profit under the budget ceiling.

use rand::Rng;

use crate::models::{Allocation, Scenario};

/// GA problem for crop land allocation.
///
/// Fitness is net profit (higher = better). Allocations whose production
/// cost exceeds the budget score `f64::NEG_INFINITY`.
///
/// # Example
/// ```
/// use u_cropland::ga::CropAllocationProblem;
/// use u_cropland::models::{Allocation, Crop, Scenario};
///
/// let scenario = Scenario::new(1.0, 200.0)
///     .with_crop(Crop::new("A").with_cost(100.0).with_yield(10.0).with_price(50.0));
/// let problem = CropAllocationProblem::new(scenario);
/// assert_eq!(problem.evaluate(&Allocation::new(vec![1.0])), 400.0);
/// ```
#[derive(Debug, Clone)]
pub struct CropAllocationProblem {
    /// Land, budget and crop economics.
    pub scenario: Scenario,
}

impl CropAllocationProblem {
    /// Creates a problem for the given scenario.
    pub fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }

    /// Genes per individual (= crop count).
    pub fn gene_count(&self) -> usize {
        self.scenario.crop_count()
    }

    /// Creates one normalized random individual.
    pub fn create_individual<R: Rng>(&self, rng: &mut R) -> Allocation {
        Allocation::random(self.gene_count(), rng)
    }

    /// Scores one allocation.
    ///
    /// Returns `f64::NEG_INFINITY` when cost exceeds the budget or the
    /// allocation does not have one gene per crop, otherwise `revenue − cost`.
    pub fn evaluate(&self, allocation: &Allocation) -> f64 {
        if allocation.len() != self.gene_count() {
            return f64::NEG_INFINITY;
        }
        let cost = self.scenario.total_cost(allocation);
        if cost > self.scenario.budget {
            return f64::NEG_INFINITY;
        }
        self.scenario.total_revenue(allocation) - cost
    }

    /// Scores every member of a population, in order.
    pub fn evaluate_population(&self, population: &[Allocation]) -> Vec<f64> {
        population.iter().map(|a| self.evaluate(a)).collect()
    }
}

/// Index of the first maximum fitness (stable argmax).
///
/// An all-infeasible slice yields index 0. Returns `None` for an empty slice.
pub fn best_index(fitness: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &f) in fitness.iter().enumerate() {
        match best {
            Some((_, b)) if f <= b => {}
            _ => best = Some((i, f)),
        }
    }
    best.map(|(i, _)| i)
}

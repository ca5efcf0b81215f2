//! Scenario model: the fixed economics of one optimization run.
//!
//! # Profit Model
//!
//! For allocation `a` over crops with cost `c`, yield `y` and price `p`
//! on total land `L`:
//!
//! ```text
//! cost    = Σ a[i] · L · c[i]
//! revenue = Σ a[i] · L · y[i] · p[i]
//! profit  = revenue − cost
//! ```
//!
//! An allocation is feasible when `cost ≤ budget`.

use serde::{Deserialize, Serialize};

use super::{Allocation, Crop};
use crate::error::Error;

/// Land, budget and crop economics, constant for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Total land area available.
    pub land_area: f64,
    /// Maximum total production cost.
    pub budget: f64,
    /// Candidate crops, in gene order.
    pub crops: Vec<Crop>,
}

impl Scenario {
    /// Creates a scenario with no crops.
    pub fn new(land_area: f64, budget: f64) -> Self {
        Self {
            land_area,
            budget,
            crops: Vec::new(),
        }
    }

    /// Builds a scenario from parallel per-crop arrays.
    ///
    /// Crops are named `"Crop 1"`, `"Crop 2"`, ... in array order.
    ///
    /// # Errors
    /// [`Error::LengthMismatch`] if the arrays differ in length.
    pub fn from_arrays(
        costs: &[f64],
        yields: &[f64],
        prices: &[f64],
        land_area: f64,
        budget: f64,
    ) -> Result<Self, Error> {
        if costs.len() != yields.len() || costs.len() != prices.len() {
            return Err(Error::LengthMismatch {
                costs: costs.len(),
                yields: yields.len(),
                prices: prices.len(),
            });
        }

        let crops = costs
            .iter()
            .zip(yields)
            .zip(prices)
            .enumerate()
            .map(|(i, ((&cost, &yld), &price))| {
                Crop::new(format!("Crop {}", i + 1))
                    .with_cost(cost)
                    .with_yield(yld)
                    .with_price(price)
            })
            .collect();

        Ok(Self {
            land_area,
            budget,
            crops,
        })
    }

    /// Adds a crop.
    pub fn with_crop(mut self, crop: Crop) -> Self {
        self.crops.push(crop);
        self
    }

    /// Replaces the crop list.
    pub fn with_crops(mut self, crops: Vec<Crop>) -> Self {
        self.crops = crops;
        self
    }

    /// Number of crops (= genes per individual).
    pub fn crop_count(&self) -> usize {
        self.crops.len()
    }

    /// Crop names in gene order.
    pub fn crop_names(&self) -> Vec<&str> {
        self.crops.iter().map(|c| c.name.as_str()).collect()
    }

    /// Checks that `allocation` has one gene per crop.
    ///
    /// # Errors
    /// [`Error::GeneCountMismatch`] otherwise.
    pub fn check_allocation(&self, allocation: &Allocation) -> Result<(), Error> {
        if allocation.len() != self.crop_count() {
            return Err(Error::GeneCountMismatch {
                expected: self.crop_count(),
                actual: allocation.len(),
            });
        }
        Ok(())
    }

    /// Total production cost of an allocation.
    ///
    /// The allocation must have one gene per crop.
    pub fn total_cost(&self, allocation: &Allocation) -> f64 {
        debug_assert_eq!(allocation.len(), self.crop_count());
        self.crops
            .iter()
            .zip(&allocation.genes)
            .map(|(crop, share)| share * self.land_area * crop.cost_per_area)
            .sum()
    }

    /// Total sales revenue of an allocation.
    ///
    /// The allocation must have one gene per crop.
    pub fn total_revenue(&self, allocation: &Allocation) -> f64 {
        debug_assert_eq!(allocation.len(), self.crop_count());
        self.crops
            .iter()
            .zip(&allocation.genes)
            .map(|(crop, share)| share * self.land_area * crop.yield_per_area * crop.price_per_unit)
            .sum()
    }

    /// Whether the allocation's cost stays within budget.
    pub fn is_within_budget(&self, allocation: &Allocation) -> bool {
        self.total_cost(allocation) <= self.budget
    }
}

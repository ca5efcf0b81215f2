//! Allocation vector (the GA individual).
//!
//! # Encoding
//!
//! One real-valued gene per crop, in scenario crop order. Gene `i` is the
//! fraction of total land planted with crop `i`. Vectors stored in a
//! population are normalized: genes are non-negative and sum to 1.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tolerance used by [`Allocation::is_normalized`].
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Fractional split of land across crops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Allocation {
    /// Land fraction per crop.
    pub genes: Vec<f64>,
}

impl Allocation {
    /// Wraps raw genes without normalizing.
    pub fn new(genes: Vec<f64>) -> Self {
        Self { genes }
    }

    /// Wraps genes and normalizes them to sum to 1.
    pub fn normalized(genes: Vec<f64>) -> Self {
        let mut allocation = Self { genes };
        allocation.normalize();
        allocation
    }

    /// Equal split across `n` crops.
    pub fn uniform(n: usize) -> Self {
        let share = if n == 0 { 0.0 } else { 1.0 / n as f64 };
        Self {
            genes: vec![share; n],
        }
    }

    /// Draws each gene from U[0, 1) and normalizes by the vector's sum.
    ///
    /// A draw summing to zero falls back to [`Allocation::uniform`].
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let genes = (0..n).map(|_| rng.random::<f64>()).collect();
        Self::normalized(genes)
    }

    /// Rescales genes in place so they sum to 1.
    ///
    /// A zero-sum (or non-finite) vector becomes the uniform split.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 && sum.is_finite() {
            for gene in &mut self.genes {
                *gene /= sum;
            }
        } else {
            *self = Self::uniform(self.genes.len());
        }
    }

    /// Sum of all genes.
    pub fn sum(&self) -> f64 {
        self.genes.iter().sum()
    }

    /// Whether genes are non-negative and sum to 1 within `tolerance`.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        self.genes.iter().all(|&g| g >= 0.0) && (self.sum() - 1.0).abs() <= tolerance
    }

    /// Number of genes (crops).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the vector has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Absolute area per crop for the given total land area.
    pub fn areas(&self, land_area: f64) -> Vec<f64> {
        self.genes.iter().map(|g| g * land_area).collect()
    }
}

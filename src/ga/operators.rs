//! Genetic operators for allocation vectors.
//!
//! - **Initialization**: uniform random genes, normalized per vector
//! - **Selection**: roulette wheel over profit, infeasible individuals excluded
//! - **Crossover**: arithmetic (convex) blend of two parents
//! - **Mutation**: non-uniform additive perturbation that decays with
//!   generation, followed by renormalization
//!
//! [`GeneticOperators`] bundles the per-child crossover/mutation gates so the
//! runner can produce one offspring with a single call.
//!
//! # Reference
//! Michalewicz (1996), "Genetic Algorithms + Data Structures = Evolution
//! Programs", Ch. 6 (arithmetic crossover, non-uniform mutation)

use rand::Rng;

use super::GaConfig;
use crate::models::Allocation;

/// Creates `count` normalized random individuals with `gene_count` genes.
pub fn initialize_population<R: Rng>(
    count: usize,
    gene_count: usize,
    rng: &mut R,
) -> Vec<Allocation> {
    (0..count)
        .map(|_| Allocation::random(gene_count, rng))
        .collect()
}

// ======================== Selection ========================

/// Fitness-proportional sampler built once per generation.
///
/// Infeasible (`-∞`) and non-positive fitness values get zero weight; the
/// remaining weights are normalized into a cumulative distribution. When no
/// individual has positive weight, sampling is uniform over feasible
/// individuals, or over the whole population if none is feasible.
#[derive(Debug, Clone)]
pub struct RouletteWheel {
    wheel: Wheel,
}

#[derive(Debug, Clone)]
enum Wheel {
    /// (index, cumulative probability) for positive-weight individuals.
    Proportional(Vec<(usize, f64)>),
    /// Candidate indices drawn with equal probability.
    Uniform(Vec<usize>),
}

impl RouletteWheel {
    /// Builds the wheel from a generation's fitness values.
    pub fn new(fitness: &[f64]) -> Self {
        let weight = |f: f64| if f.is_finite() && f > 0.0 { f } else { 0.0 };
        let total: f64 = fitness.iter().map(|&f| weight(f)).sum();

        if total > 0.0 && total.is_finite() {
            let mut cumulative = 0.0;
            let entries = fitness
                .iter()
                .enumerate()
                .filter(|(_, f)| weight(**f) > 0.0)
                .map(|(i, &f)| {
                    cumulative += weight(f) / total;
                    (i, cumulative)
                })
                .collect();
            return Self {
                wheel: Wheel::Proportional(entries),
            };
        }

        let feasible: Vec<usize> = fitness
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_finite())
            .map(|(i, _)| i)
            .collect();
        let candidates = if feasible.is_empty() {
            (0..fitness.len()).collect()
        } else {
            feasible
        };
        Self {
            wheel: Wheel::Uniform(candidates),
        }
    }

    /// Whether selection is fitness-proportional (false = uniform fallback).
    pub fn is_proportional(&self) -> bool {
        matches!(self.wheel, Wheel::Proportional(_))
    }

    /// Spins the wheel and returns a population index.
    ///
    /// Returns `None` only for a wheel built from an empty population.
    pub fn select<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        match &self.wheel {
            Wheel::Proportional(entries) => {
                let spin: f64 = rng.random();
                entries
                    .iter()
                    .find(|(_, cum)| *cum >= spin)
                    .or_else(|| entries.last())
                    .map(|(i, _)| *i)
            }
            Wheel::Uniform(candidates) => {
                if candidates.is_empty() {
                    None
                } else {
                    Some(candidates[rng.random_range(0..candidates.len())])
                }
            }
        }
    }
}

/// One-shot roulette selection over `fitness`.
///
/// Prefer [`RouletteWheel`] when selecting repeatedly from one generation.
pub fn roulette_select<R: Rng>(fitness: &[f64], rng: &mut R) -> Option<usize> {
    RouletteWheel::new(fitness).select(rng)
}

// ======================== Crossover ========================

/// Arithmetic crossover: `alpha · p1 + (1 − alpha) · p2`, gene by gene.
///
/// For normalized parents and `alpha ∈ [0, 1]` the child is normalized.
pub fn arithmetic_crossover(p1: &Allocation, p2: &Allocation, alpha: f64) -> Allocation {
    let genes = p1
        .genes
        .iter()
        .zip(&p2.genes)
        .map(|(a, b)| alpha * a + (1.0 - alpha) * b)
        .collect();
    Allocation::new(genes)
}

// ======================== Mutation ========================

/// Non-uniform mutation step for uniform draw `u`.
///
/// `δ = 1 − u^((1 − generation / max_generations)^shape)`. For a fixed `u`
/// the step shrinks toward zero as `generation` approaches `max_generations`.
pub fn non_uniform_delta(u: f64, generation: usize, max_generations: usize, shape: f64) -> f64 {
    let progress = if max_generations == 0 {
        1.0
    } else {
        generation as f64 / max_generations as f64
    };
    let exponent = (1.0 - progress).max(0.0).powf(shape);
    1.0 - u.powf(exponent)
}

/// Non-uniform mutation in place.
///
/// Each gene receives an additive [`non_uniform_delta`] with probability
/// `gene_probability`; the vector is renormalized afterwards.
pub fn non_uniform_mutation<R: Rng>(
    allocation: &mut Allocation,
    generation: usize,
    max_generations: usize,
    shape: f64,
    gene_probability: f64,
    rng: &mut R,
) {
    for gene in &mut allocation.genes {
        if rng.random::<f64>() < gene_probability {
            let u: f64 = rng.random();
            *gene += non_uniform_delta(u, generation, max_generations, shape);
        }
    }
    allocation.normalize();
}

// ======================== Operator bundle ========================

/// Per-child reproduction policy.
///
/// # Example
///
/// ```
/// use u_cropland::ga::{GaConfig, operators::GeneticOperators};
///
/// let ops = GeneticOperators::from_config(&GaConfig::default());
/// assert_eq!(ops.crossover_alpha, 0.5);
/// assert_eq!(ops.mutation_shape, 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneticOperators {
    /// Chance of arithmetic crossover (else clone parent 1).
    pub crossover_rate: f64,
    /// Chance of mutating the child.
    pub mutation_rate: f64,
    /// Crossover blend weight on parent 1.
    pub crossover_alpha: f64,
    /// Non-uniform mutation shape exponent.
    pub mutation_shape: f64,
    /// Per-gene mutation chance.
    pub gene_mutation_probability: f64,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        Self::from_config(&GaConfig::default())
    }
}

impl GeneticOperators {
    /// Extracts operator parameters from a run configuration.
    pub fn from_config(config: &GaConfig) -> Self {
        Self {
            crossover_rate: config.crossover_rate,
            mutation_rate: config.mutation_rate,
            crossover_alpha: config.crossover_alpha,
            mutation_shape: config.mutation_shape,
            gene_mutation_probability: config.gene_mutation_probability,
        }
    }

    /// Produces one child from two parents.
    ///
    /// Crossover and mutation are gated by independent draws.
    pub fn offspring<R: Rng>(
        &self,
        p1: &Allocation,
        p2: &Allocation,
        generation: usize,
        max_generations: usize,
        rng: &mut R,
    ) -> Allocation {
        let mut child = if rng.random::<f64>() < self.crossover_rate {
            arithmetic_crossover(p1, p2, self.crossover_alpha)
        } else {
            p1.clone()
        };

        if rng.random::<f64>() < self.mutation_rate {
            non_uniform_mutation(
                &mut child,
                generation,
                max_generations,
                self.mutation_shape,
                self.gene_mutation_probability,
                rng,
            );
        }

        child
    }
}

//! GA run configuration.

use serde::{Deserialize, Serialize};

/// Parameters of one GA run.
///
/// Defaults mirror the interactive form the engine was built for:
/// population 50, 100 generations, mutation rate 0.1, crossover rate 0.5,
/// early stop after 50 generations without improvement.
///
/// # Example
/// ```
/// use u_cropland::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_max_generations(200)
///     .with_seed(7);
/// assert_eq!(config.population_size, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Individuals per generation (P).
    pub population_size: usize,
    /// Hard cap on generations (G).
    pub max_generations: usize,
    /// Chance a child is mutated; also sizes diversity injection.
    pub mutation_rate: f64,
    /// Chance a child is produced by crossover instead of cloning parent 1.
    pub crossover_rate: f64,
    /// Consecutive generations without strict improvement before stopping.
    pub stall_generations: usize,
    /// Arithmetic crossover blend weight on parent 1.
    pub crossover_alpha: f64,
    /// Non-uniform mutation shape exponent (b).
    pub mutation_shape: f64,
    /// Per-gene mutation chance inside a mutated child.
    pub gene_mutation_probability: f64,
    /// RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            mutation_rate: 0.1,
            crossover_rate: 0.5,
            stall_generations: 50,
            crossover_alpha: 0.5,
            mutation_shape: 5.0,
            gene_mutation_probability: 0.1,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the early-stop threshold.
    pub fn with_stall_generations(mut self, generations: usize) -> Self {
        self.stall_generations = generations;
        self
    }

    /// Sets the crossover blend weight.
    pub fn with_crossover_alpha(mut self, alpha: f64) -> Self {
        self.crossover_alpha = alpha;
        self
    }

    /// Sets the non-uniform mutation shape exponent.
    pub fn with_mutation_shape(mut self, shape: f64) -> Self {
        self.mutation_shape = shape;
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_gene_mutation_probability(mut self, probability: f64) -> Self {
        self.gene_mutation_probability = probability;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of fresh random individuals injected per generation.
    ///
    /// `max(1, round(P × mutation_rate))`, capped at `P`.
    pub fn injection_count(&self) -> usize {
        let count = (self.population_size as f64 * self.mutation_rate).round() as usize;
        count.max(1).min(self.population_size)
    }
}

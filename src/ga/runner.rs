//! Generation loop.
//!
//! # State machine
//!
//! ```text
//! INIT → EVALUATE → CHECK_CONVERGENCE ─┬─ stalled ──────────→ TERMINATE
//!           ↑                          ├─ generation cap ───→ TERMINATE
//!           └──────── REPRODUCE ←──────┘
//! ```
//!
//! - **EVALUATE** scores the whole population and appends a
//!   [`GenerationRecord`] (stable argmax) to the history.
//! - **CHECK_CONVERGENCE** resets the stall counter only on strict
//!   improvement over every earlier generation.
//! - **REPRODUCE** injects fresh random individuals, then fills the rest of
//!   the next population with roulette-selected, crossed and mutated children.

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::operators::{GeneticOperators, RouletteWheel, initialize_population};
use super::problem::best_index;
use super::{CropAllocationProblem, GaConfig};
use crate::error::Error;
use crate::models::{Allocation, Scenario};
use crate::validation::validate_input;

/// Best individual of one evaluated generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Zero-based generation index.
    pub generation: usize,
    /// Best fitness in the generation (`-∞` if none feasible).
    #[serde(with = "super::fitness_serde")]
    pub best_fitness: f64,
    /// Individual attaining `best_fitness` (first such index).
    pub best_allocation: Allocation,
    /// Members within budget.
    pub feasible_count: usize,
}

impl GenerationRecord {
    /// Whether no member of the generation was within budget.
    pub fn no_feasible_solution(&self) -> bool {
        self.feasible_count == 0
    }
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Ran all configured generations.
    MaxGenerations,
    /// No strict improvement for `threshold` consecutive generations.
    Stalled { threshold: usize },
}

/// Notice raised when the stall threshold stops a run early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarlyStop {
    /// Configured stall threshold.
    pub threshold: usize,
    /// Generation at which the run stopped.
    pub generation: usize,
}

impl std::fmt::Display for EarlyStop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stopped early: no profit improvement for {} consecutive generations",
            self.threshold
        )
    }
}

/// Receives run progress. Purely observational.
pub trait GaObserver {
    /// Called after each evaluated generation with completion in `[0, 1]`.
    fn on_generation(&mut self, _record: &GenerationRecord, _progress: f64) {}

    /// Called once when the stall threshold ends the run.
    fn on_early_stop(&mut self, _notice: &EarlyStop) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GaObserver for NoopObserver {}

/// Outcome of a GA run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaResult {
    /// Best individual of the last evaluated generation.
    pub best_allocation: Allocation,
    /// Its fitness.
    #[serde(with = "super::fitness_serde")]
    pub best_fitness: f64,
    /// One record per evaluated generation.
    pub history: Vec<GenerationRecord>,
    /// Why the loop ended.
    pub termination: Termination,
    /// Wall-clock time of the whole run.
    pub elapsed: Duration,
}

impl GaResult {
    /// Number of generations evaluated.
    pub fn generations(&self) -> usize {
        self.history.len()
    }

    /// Best fitness per generation, in order.
    pub fn fitness_history(&self) -> Vec<f64> {
        self.history.iter().map(|r| r.best_fitness).collect()
    }

    /// Best individual per generation, in order.
    pub fn best_individuals(&self) -> Vec<Allocation> {
        self.history
            .iter()
            .map(|r| r.best_allocation.clone())
            .collect()
    }

    /// Whether the run ended on the stall threshold.
    pub fn stopped_early(&self) -> bool {
        matches!(self.termination, Termination::Stalled { .. })
    }
}

/// Runs the GA for crop land allocation.
///
/// # Example
/// ```
/// use u_cropland::ga::{GaConfig, GaRunner};
/// use u_cropland::models::{Crop, Scenario};
///
/// let scenario = Scenario::new(1.0, 200.0)
///     .with_crop(Crop::new("A").with_cost(100.0).with_yield(10.0).with_price(50.0))
///     .with_crop(Crop::new("B").with_cost(120.0).with_yield(8.0).with_price(40.0));
/// let config = GaConfig::default().with_population_size(20).with_max_generations(10).with_seed(1);
/// let result = GaRunner::run(&scenario, &config).unwrap();
/// assert!(result.generations() <= 10);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs with a generator seeded from `config.seed` (or the OS).
    pub fn run(scenario: &Scenario, config: &GaConfig) -> Result<GaResult, Error> {
        Self::run_with_observer(scenario, config, &mut NoopObserver)
    }

    /// Like [`GaRunner::run`], reporting progress to `observer`.
    pub fn run_with_observer<O: GaObserver>(
        scenario: &Scenario,
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<GaResult, Error> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::run_with_rng(scenario, config, observer, &mut rng)
    }

    /// Runs with a caller-owned random source.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if the scenario or configuration fails
    /// validation. Nothing is evaluated in that case.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            population = config.population_size,
            genes = scenario.crop_count(),
            max_generations = config.max_generations,
        )
    )]
    pub fn run_with_rng<O: GaObserver, R: Rng>(
        scenario: &Scenario,
        config: &GaConfig,
        observer: &mut O,
        rng: &mut R,
    ) -> Result<GaResult, Error> {
        validate_input(scenario, config)?;

        let start = Instant::now();
        let problem = CropAllocationProblem::new(scenario.clone());
        let operators = GeneticOperators::from_config(config);
        let pop_size = config.population_size;
        let max_generations = config.max_generations;
        let gene_count = problem.gene_count();

        let mut population = initialize_population(pop_size, gene_count, rng);
        let mut history: Vec<GenerationRecord> = Vec::with_capacity(max_generations);
        let mut best_so_far = f64::NEG_INFINITY;
        let mut stall = 0usize;
        let mut termination = Termination::MaxGenerations;

        for generation in 0..max_generations {
            let fitness = problem.evaluate_population(&population);
            // validated pop_size ≥ 1
            let best = best_index(&fitness).unwrap_or(0);
            let record = GenerationRecord {
                generation,
                best_fitness: fitness[best],
                best_allocation: population[best].clone(),
                feasible_count: fitness.iter().filter(|f| f.is_finite()).count(),
            };

            tracing::debug!(
                generation,
                best_fitness = record.best_fitness,
                feasible = record.feasible_count,
                "generation evaluated"
            );
            if record.no_feasible_solution() {
                tracing::warn!(generation, "no individual within budget");
            }

            if record.best_fitness > best_so_far {
                best_so_far = record.best_fitness;
                stall = 0;
            } else {
                stall += 1;
            }

            let progress = (generation + 1) as f64 / max_generations as f64;
            observer.on_generation(&record, progress);
            history.push(record);

            if stall >= config.stall_generations {
                let notice = EarlyStop {
                    threshold: config.stall_generations,
                    generation,
                };
                tracing::warn!(threshold = notice.threshold, generation, "{notice}");
                observer.on_early_stop(&notice);
                termination = Termination::Stalled {
                    threshold: config.stall_generations,
                };
                break;
            }

            if generation + 1 == max_generations {
                break;
            }

            population = Self::reproduce(
                &population,
                &fitness,
                &operators,
                config,
                gene_count,
                generation,
                rng,
            );
        }

        let elapsed = start.elapsed();
        let (best_allocation, best_fitness) = history
            .last()
            .map(|r| (r.best_allocation.clone(), r.best_fitness))
            .unwrap_or_else(|| (Allocation::uniform(gene_count), f64::NEG_INFINITY));

        tracing::info!(
            generations = history.len(),
            best_fitness,
            elapsed_ms = elapsed.as_millis() as u64,
            "GA run finished"
        );

        Ok(GaResult {
            best_allocation,
            best_fitness,
            history,
            termination,
            elapsed,
        })
    }

    /// Builds the next population: diversity injection, then offspring.
    fn reproduce<R: Rng>(
        population: &[Allocation],
        fitness: &[f64],
        operators: &GeneticOperators,
        config: &GaConfig,
        gene_count: usize,
        generation: usize,
        rng: &mut R,
    ) -> Vec<Allocation> {
        let pop_size = config.population_size;
        let mut next = initialize_population(config.injection_count(), gene_count, rng);
        next.reserve(pop_size.saturating_sub(next.len()));

        let wheel = RouletteWheel::new(fitness);
        while next.len() < pop_size {
            let (Some(i1), Some(i2)) = (wheel.select(rng), wheel.select(rng)) else {
                break;
            };
            next.push(operators.offspring(
                &population[i1],
                &population[i2],
                generation,
                config.max_generations,
                rng,
            ));
        }

        next
    }
}

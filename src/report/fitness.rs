//! Fitness history summary.

use serde::{Deserialize, Serialize};

use crate::ga::{GaResult, Termination};

/// Headline numbers of a finished run.
///
/// Fitness values are `-∞` when the corresponding generation had no
/// individual within budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessSummary {
    /// Best fitness of generation 0.
    #[serde(with = "crate::ga::fitness_serde")]
    pub initial_fitness: f64,
    /// Best fitness of the last evaluated generation.
    #[serde(with = "crate::ga::fitness_serde")]
    pub final_fitness: f64,
    /// Highest fitness seen in any generation.
    #[serde(with = "crate::ga::fitness_serde")]
    pub peak_fitness: f64,
    /// First generation reaching `peak_fitness`.
    pub peak_generation: usize,
    /// `final_fitness − initial_fitness` (0 when either is infeasible).
    pub improvement: f64,
    /// Generations evaluated.
    pub generations: usize,
    /// Generations with no feasible individual.
    pub infeasible_generations: usize,
    /// Why the loop ended.
    pub termination: Termination,
}

impl FitnessSummary {
    /// Summarizes a run's history.
    pub fn calculate(result: &GaResult) -> Self {
        let history = result.fitness_history();
        let initial_fitness = history.first().copied().unwrap_or(f64::NEG_INFINITY);
        let final_fitness = history.last().copied().unwrap_or(f64::NEG_INFINITY);

        let mut peak_fitness = f64::NEG_INFINITY;
        let mut peak_generation = 0;
        for (generation, &f) in history.iter().enumerate() {
            if f > peak_fitness {
                peak_fitness = f;
                peak_generation = generation;
            }
        }

        let improvement = if initial_fitness.is_finite() && final_fitness.is_finite() {
            final_fitness - initial_fitness
        } else {
            0.0
        };

        Self {
            initial_fitness,
            final_fitness,
            peak_fitness,
            peak_generation,
            improvement,
            generations: history.len(),
            infeasible_generations: result
                .history
                .iter()
                .filter(|r| r.no_feasible_solution())
                .count(),
            termination: result.termination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::GenerationRecord;
    use crate::models::Allocation;
    use std::time::Duration;

    fn result_from(fitness: &[f64]) -> GaResult {
        let history: Vec<GenerationRecord> = fitness
            .iter()
            .enumerate()
            .map(|(generation, &best_fitness)| GenerationRecord {
                generation,
                best_fitness,
                best_allocation: Allocation::uniform(2),
                feasible_count: if best_fitness.is_finite() { 1 } else { 0 },
            })
            .collect();
        GaResult {
            best_allocation: Allocation::uniform(2),
            best_fitness: fitness.last().copied().unwrap_or(f64::NEG_INFINITY),
            history,
            termination: Termination::MaxGenerations,
            elapsed: Duration::ZERO,
        }
    }

    #[test]
    fn test_summary_basic() {
        let summary = FitnessSummary::calculate(&result_from(&[10.0, 15.0, 30.0, 25.0]));
        assert_eq!(summary.initial_fitness, 10.0);
        assert_eq!(summary.final_fitness, 25.0);
        assert_eq!(summary.peak_fitness, 30.0);
        assert_eq!(summary.peak_generation, 2);
        assert!((summary.improvement - 15.0).abs() < 1e-10);
        assert_eq!(summary.generations, 4);
        assert_eq!(summary.infeasible_generations, 0);
    }

    #[test]
    fn test_summary_peak_first_occurrence() {
        let summary = FitnessSummary::calculate(&result_from(&[5.0, 8.0, 8.0]));
        assert_eq!(summary.peak_generation, 1);
    }

    #[test]
    fn test_summary_infeasible_start() {
        let summary =
            FitnessSummary::calculate(&result_from(&[f64::NEG_INFINITY, 4.0, 6.0]));
        assert_eq!(summary.infeasible_generations, 1);
        assert_eq!(summary.improvement, 0.0);
        assert_eq!(summary.peak_fitness, 6.0);
        assert_eq!(summary.peak_generation, 2);
    }

    #[test]
    fn test_summary_empty() {
        let summary = FitnessSummary::calculate(&result_from(&[]));
        assert_eq!(summary.generations, 0);
        assert_eq!(summary.peak_fitness, f64::NEG_INFINITY);
    }
}

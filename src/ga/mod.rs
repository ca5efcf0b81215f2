//! GA engine for crop land allocation.
//!
//! Real-valued encoding: one gene per crop holding its land fraction,
//! normalized to sum to 1.
//!
//! # Submodules
//!
//! - [`operators`]: initialization, roulette selection, arithmetic crossover,
//!   non-uniform mutation
//! - [`fitness_serde`]: JSON-safe encoding of infeasible (`-∞`) fitness
//! - `problem`: fitness (net profit under the budget ceiling)
//! - `runner`: generation loop, stopping policy, observer and result types
//!
//! # Reference
//! - Holland (1975), "Adaptation in Natural and Artificial Systems"
//! - Michalewicz (1996), "Genetic Algorithms + Data Structures = Evolution Programs"

mod config;
pub mod fitness_serde;
pub mod operators;
mod problem;
mod runner;

pub use config::GaConfig;
pub use problem::{CropAllocationProblem, best_index};
pub use runner::{
    EarlyStop, GaObserver, GaResult, GaRunner, GenerationRecord, NoopObserver, Termination,
};

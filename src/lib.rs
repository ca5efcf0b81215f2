//! Crop land allocation for the U-Engine ecosystem.
//!
//! Splits a fixed land area across a small set of crops to maximize net
//! profit without exceeding a production budget, using a generational
//! genetic algorithm.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Crop`, `Scenario`, `Allocation`
//! - **`ga`**: GA engine — fitness, roulette selection, arithmetic crossover,
//!   non-uniform mutation, diversity injection, early stopping
//! - **`report`**: Result views — per-crop breakdown, fitness summary
//! - **`validation`**: Input integrity checks run before every GA run
//!
//! # Example
//!
//! ```
//! use u_cropland::ga::{GaConfig, GaRunner};
//! use u_cropland::models::{Crop, Scenario};
//! use u_cropland::report::AllocationReport;
//!
//! let scenario = Scenario::new(10.0, 20_000_000.0)
//!     .with_crop(Crop::new("Rice").with_cost(1_000_000.0).with_yield(12.0).with_price(200_000.0))
//!     .with_crop(Crop::new("Corn").with_cost(1_500_000.0).with_yield(9.0).with_price(250_000.0));
//! let config = GaConfig::default().with_seed(42);
//!
//! let result = GaRunner::run(&scenario, &config).unwrap();
//! let report = AllocationReport::calculate(&scenario, &result.best_allocation).unwrap();
//! assert_eq!(report.rows.len(), 2);
//! ```
//!
//! # Architecture
//!
//! Single-threaded and synchronous. All randomness flows through a caller-
//! or seed-owned generator; progress leaves the engine only through the
//! `GaObserver` trait and `tracing` events.

pub mod error;
pub mod ga;
pub mod models;
pub mod report;
pub mod validation;

pub use error::Error;

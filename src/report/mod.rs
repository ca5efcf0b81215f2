//! Result views for presentation layers.
//!
//! Turns a finished run into the figures a front end displays: the per-crop
//! breakdown behind the allocation pie chart, and the fitness summary that
//! accompanies the best-fitness-per-generation line chart.
//!
//! # Views
//!
//! - `AllocationReport`: share, area, cost, revenue and profit per crop,
//!   plus totals and budget utilization.
//! - `FitnessSummary`: initial, final and peak fitness, improvement,
//!   generations executed and termination reason.

mod allocation;
mod fitness;

pub use allocation::{AllocationReport, CropBreakdown};
pub use fitness::FitnessSummary;

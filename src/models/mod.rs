//! Crop allocation domain models.
//!
//! Value types describing one optimization run and its candidate solutions.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Crop` | Per-area cost, yield and sale price of one crop |
//! | `Scenario` | Total land, budget ceiling and the crop list |
//! | `Allocation` | Land fraction per crop (the GA individual) |

mod allocation;
mod crop;
mod scenario;

pub use allocation::{Allocation, NORMALIZATION_TOLERANCE};
pub use crop::Crop;
pub use scenario::Scenario;

//! Crop model.
//!
//! A crop is one candidate land use, described by its per-area economics.
//! All monetary values share one currency unit chosen by the consumer.

use serde::{Deserialize, Serialize};

/// A crop type competing for land.
///
/// # Units
/// - `cost_per_area`: currency per unit of land (e.g. IDR/ha)
/// - `yield_per_area`: produce per unit of land (e.g. ton/ha)
/// - `price_per_unit`: currency per unit of produce (e.g. IDR/ton)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    /// Display name.
    pub name: String,
    /// Production cost per unit area.
    pub cost_per_area: f64,
    /// Produce harvested per unit area.
    pub yield_per_area: f64,
    /// Sale price per unit of produce.
    pub price_per_unit: f64,
}

impl Crop {
    /// Creates a crop with zeroed economics.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cost_per_area: 0.0,
            yield_per_area: 0.0,
            price_per_unit: 0.0,
        }
    }

    /// Sets the production cost per unit area.
    pub fn with_cost(mut self, cost_per_area: f64) -> Self {
        self.cost_per_area = cost_per_area;
        self
    }

    /// Sets the yield per unit area.
    pub fn with_yield(mut self, yield_per_area: f64) -> Self {
        self.yield_per_area = yield_per_area;
        self
    }

    /// Sets the sale price per unit of produce.
    pub fn with_price(mut self, price_per_unit: f64) -> Self {
        self.price_per_unit = price_per_unit;
        self
    }

    /// Revenue per unit area (`yield × price`).
    pub fn revenue_per_area(&self) -> f64 {
        self.yield_per_area * self.price_per_unit
    }

    /// Net margin per unit area (`yield × price − cost`).
    pub fn margin_per_area(&self) -> f64 {
        self.revenue_per_area() - self.cost_per_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_builder() {
        let crop = Crop::new("Rice")
            .with_cost(1_000_000.0)
            .with_yield(12.0)
            .with_price(200_000.0);
        assert_eq!(crop.name, "Rice");
        assert_eq!(crop.cost_per_area, 1_000_000.0);
        assert_eq!(crop.yield_per_area, 12.0);
        assert_eq!(crop.price_per_unit, 200_000.0);
    }

    #[test]
    fn test_crop_margin() {
        let crop = Crop::new("Corn")
            .with_cost(100.0)
            .with_yield(10.0)
            .with_price(50.0);
        assert!((crop.revenue_per_area() - 500.0).abs() < 1e-10);
        assert!((crop.margin_per_area() - 400.0).abs() < 1e-10);
    }

    #[test]
    fn test_crop_serde() {
        let crop = Crop::new("Chili")
            .with_cost(3.0)
            .with_yield(2.0)
            .with_price(9.0);
        let json = serde_json::to_string(&crop).unwrap();
        let back: Crop = serde_json::from_str(&json).unwrap();
        assert_eq!(back, crop);
    }
}

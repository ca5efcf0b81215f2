//! Per-crop allocation breakdown.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::{Allocation, Scenario};

/// Economics of one crop under an allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropBreakdown {
    /// Crop name.
    pub name: String,
    /// Fraction of total land (0.0..1.0).
    pub share: f64,
    /// Planted area.
    pub area: f64,
    /// Production cost.
    pub cost: f64,
    /// Sales revenue.
    pub revenue: f64,
    /// `revenue − cost`.
    pub profit: f64,
}

/// Breakdown of an allocation against its scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    /// One row per crop, in scenario order.
    pub rows: Vec<CropBreakdown>,
    /// Sum of row costs.
    pub total_cost: f64,
    /// Sum of row revenues.
    pub total_revenue: f64,
    /// `total_revenue − total_cost`.
    pub total_profit: f64,
    /// `total_cost / budget`.
    pub budget_utilization: f64,
    /// Whether `total_cost ≤ budget`.
    pub within_budget: bool,
}

impl AllocationReport {
    /// Computes the breakdown of `allocation` under `scenario`.
    ///
    /// # Errors
    /// [`Error::GeneCountMismatch`] if the allocation does not have one gene
    /// per crop.
    pub fn calculate(scenario: &Scenario, allocation: &Allocation) -> Result<Self, Error> {
        scenario.check_allocation(allocation)?;

        let rows: Vec<CropBreakdown> = scenario
            .crops
            .iter()
            .zip(&allocation.genes)
            .map(|(crop, &share)| {
                let area = share * scenario.land_area;
                let cost = area * crop.cost_per_area;
                let revenue = area * crop.yield_per_area * crop.price_per_unit;
                CropBreakdown {
                    name: crop.name.clone(),
                    share,
                    area,
                    cost,
                    revenue,
                    profit: revenue - cost,
                }
            })
            .collect();

        let total_cost: f64 = rows.iter().map(|r| r.cost).sum();
        let total_revenue: f64 = rows.iter().map(|r| r.revenue).sum();
        let budget_utilization = if scenario.budget > 0.0 {
            total_cost / scenario.budget
        } else {
            0.0
        };

        Ok(Self {
            rows,
            total_cost,
            total_revenue,
            total_profit: total_revenue - total_cost,
            budget_utilization,
            within_budget: total_cost <= scenario.budget,
        })
    }

    /// Land shares as percentages, for chart labels.
    pub fn shares_percent(&self) -> Vec<(&str, f64)> {
        self.rows
            .iter()
            .map(|r| (r.name.as_str(), r.share * 100.0))
            .collect()
    }

    /// Row with the largest land share.
    pub fn dominant_crop(&self) -> Option<&CropBreakdown> {
        self.rows
            .iter()
            .fold(None, |best: Option<&CropBreakdown>, row| match best {
                Some(b) if b.share >= row.share => Some(b),
                _ => Some(row),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Crop;

    fn sample() -> (Scenario, Allocation) {
        let scenario = Scenario::new(10.0, 5_000.0)
            .with_crop(
                Crop::new("A")
                    .with_cost(100.0)
                    .with_yield(10.0)
                    .with_price(50.0),
            )
            .with_crop(
                Crop::new("B")
                    .with_cost(800.0)
                    .with_yield(4.0)
                    .with_price(300.0),
            );
        (scenario, Allocation::new(vec![0.75, 0.25]))
    }

    #[test]
    fn test_report_rows() {
        let (scenario, allocation) = sample();
        let report = AllocationReport::calculate(&scenario, &allocation).unwrap();
        assert_eq!(report.rows.len(), 2);

        let a = &report.rows[0];
        assert_eq!(a.name, "A");
        assert!((a.area - 7.5).abs() < 1e-10);
        assert!((a.cost - 750.0).abs() < 1e-10);
        assert!((a.revenue - 3_750.0).abs() < 1e-10);
        assert!((a.profit - 3_000.0).abs() < 1e-10);

        let b = &report.rows[1];
        assert!((b.cost - 2_000.0).abs() < 1e-10);
        assert!((b.revenue - 3_000.0).abs() < 1e-10);
    }

    #[test]
    fn test_report_totals_match_scenario() {
        let (scenario, allocation) = sample();
        let report = AllocationReport::calculate(&scenario, &allocation).unwrap();
        assert!((report.total_cost - scenario.total_cost(&allocation)).abs() < 1e-9);
        assert!((report.total_revenue - scenario.total_revenue(&allocation)).abs() < 1e-9);
        assert!((report.total_profit - 4_000.0).abs() < 1e-9);
        assert!((report.budget_utilization - 0.55).abs() < 1e-10);
        assert!(report.within_budget);
    }

    #[test]
    fn test_shares_percent_and_dominant() {
        let (scenario, allocation) = sample();
        let report = AllocationReport::calculate(&scenario, &allocation).unwrap();
        let shares = report.shares_percent();
        assert_eq!(shares[0].0, "A");
        assert!((shares[0].1 - 75.0).abs() < 1e-10);
        assert_eq!(report.dominant_crop().map(|r| r.name.as_str()), Some("A"));
    }

    #[test]
    fn test_over_budget_flagged() {
        let (scenario, _) = sample();
        let allocation = Allocation::new(vec![0.0, 1.0]);
        let report = AllocationReport::calculate(&scenario, &allocation).unwrap();
        assert!(!report.within_budget);
        assert!(report.budget_utilization > 1.0);
    }

    #[test]
    fn test_gene_count_mismatch_rejected() {
        let (scenario, _) = sample();
        let err = AllocationReport::calculate(&scenario, &Allocation::new(vec![1.0])).unwrap_err();
        assert_eq!(
            err,
            Error::GeneCountMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_report_serializes() {
        let (scenario, allocation) = sample();
        let report = AllocationReport::calculate(&scenario, &allocation).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rows"][1]["name"], "B");
        assert_eq!(json["within_budget"], true);
    }
}

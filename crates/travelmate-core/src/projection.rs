// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::catalog::DestinationRecord;
use crate::category::Category;
use crate::error::{Result, TravelError};
use serde::{Deserialize, Serialize};

/// A destination with its costs scaled to a specific trip length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedDestination {
    pub record: DestinationRecord,
    pub days: u32,
    pub food_total: f64,
    pub stay_total: f64,
    pub total_cost: f64,
}

impl ProjectedDestination {
    pub fn new(record: &DestinationRecord, days: u32) -> Self {
        let d = f64::from(days);
        let food_total = record.food_cost_per_day * d;
        let stay_total = record.stay_cost_per_day * d;
        Self {
            record: record.clone(),
            days,
            food_total,
            stay_total,
            total_cost: food_total + stay_total + record.activity_cost,
        }
    }

    pub fn name(&self) -> &str {
        &self.record.destination
    }

    pub fn category(&self) -> Category {
        self.record.category
    }

    pub fn breakdown(&self) -> CostBreakdown {
        CostBreakdown {
            food: self.food_total,
            stay: self.stay_total,
            activity: self.record.activity_cost,
            total: self.total_cost,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostComponent {
    Food,
    Stay,
    Activity,
}

/// Trip cost split into its three components. Values are exact; rounding
/// for display is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub food: f64,
    pub stay: f64,
    pub activity: f64,
    pub total: f64,
}

impl CostBreakdown {
    pub fn component(&self, component: CostComponent) -> f64 {
        match component {
            CostComponent::Food => self.food,
            CostComponent::Stay => self.stay,
            CostComponent::Activity => self.activity,
        }
    }

    /// Fraction of the total taken by `component`, or 0 for a free trip.
    pub fn share_of(&self, component: CostComponent) -> f64 {
        if self.total > 0.0 {
            self.component(component) / self.total
        } else {
            0.0
        }
    }
}

/// Scales every record's per-day costs by `days`, preserving catalog order.
///
/// Source records are left untouched, so one catalog can serve queries with
/// different day counts.
pub fn project(records: &[DestinationRecord], days: u32) -> Result<Vec<ProjectedDestination>> {
    if days == 0 {
        return Err(TravelError::InvalidQuery(
            "trip length must be at least one day".to_string(),
        ));
    }

    Ok(records
        .iter()
        .map(|record| ProjectedDestination::new(record, days))
        .collect())
}

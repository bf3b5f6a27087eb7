// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::catalog::{Catalog, DestinationRecord};
use crate::category::CategoryFilter;
use crate::error::{Result, TravelError};
use crate::projection::{self, ProjectedDestination};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_STRETCH: f64 = 500.0;
pub const DEFAULT_MAX_FALLBACK: usize = 3;

/// What the traveller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub budget: f64,
    pub category: CategoryFilter,
    pub days: u32,
}

impl Query {
    pub fn new(budget: f64, category: CategoryFilter, days: u32) -> Result<Self> {
        let query = Self {
            budget,
            category,
            days,
        };
        query.validate()?;
        Ok(query)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(TravelError::InvalidQuery(format!(
                "budget must be a positive amount (got {})",
                self.budget
            )));
        }
        if self.days == 0 {
            return Err(TravelError::InvalidQuery(
                "trip length must be at least one day".to_string(),
            ));
        }
        Ok(())
    }
}

/// Tuning for the relaxed-budget fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Extra budget allowed when nothing fits the original one.
    #[serde(default = "default_stretch")]
    pub stretch: f64,
    /// Maximum number of fallback destinations returned.
    #[serde(default = "default_max_fallback")]
    pub max_fallback: usize,
}

fn default_stretch() -> f64 {
    DEFAULT_STRETCH
}

fn default_max_fallback() -> usize {
    DEFAULT_MAX_FALLBACK
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            stretch: DEFAULT_STRETCH,
            max_fallback: DEFAULT_MAX_FALLBACK,
        }
    }
}

impl RecommenderConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.stretch.is_finite() || self.stretch < 0.0 {
            return Err(TravelError::InvalidQuery(format!(
                "fallback stretch must be a non-negative amount (got {})",
                self.stretch
            )));
        }
        Ok(())
    }
}

/// Informational signals attached to a result. None of these are errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// The catalog holds no destination of the requested category at any price.
    NoCategoryMatch { category: CategoryFilter },
    /// An unfiltered query ran against a catalog with no destinations.
    EmptyCatalog,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub primary: Vec<ProjectedDestination>,
    pub is_fallback: bool,
    pub fallback: Vec<ProjectedDestination>,
    pub budget_gap_suggestion: Option<f64>,
    pub notice: Option<Notice>,
}

impl RecommendationResult {
    /// The list a front end should show: the primary matches, or the
    /// fallback list when nothing fit the budget.
    pub fn destinations(&self) -> &[ProjectedDestination] {
        if self.is_fallback {
            &self.fallback
        } else {
            &self.primary
        }
    }
}

/// Outcome of the relaxed-budget search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FallbackOutcome {
    pub destinations: Vec<ProjectedDestination>,
    pub budget_gap: Option<f64>,
    pub notice: Option<Notice>,
}

/// Destinations whose total cost fits `budget` (inclusive) and whose category
/// passes `filter`, in input order. Duplicates are kept.
pub fn match_destinations(
    projected: &[ProjectedDestination],
    budget: f64,
    filter: CategoryFilter,
) -> Vec<ProjectedDestination> {
    projected
        .iter()
        .filter(|p| p.total_cost <= budget && filter.accepts(p.category()))
        .cloned()
        .collect()
}

/// Cheapest total cost among destinations passing `filter`.
pub fn cheapest_cost(projected: &[ProjectedDestination], filter: CategoryFilter) -> Option<f64> {
    projected
        .iter()
        .filter(|p| filter.accepts(p.category()))
        .map(|p| p.total_cost)
        .fold(None, |min, cost| match min {
            Some(m) if m <= cost => Some(m),
            _ => Some(cost),
        })
}

/// Relaxed search used when the primary match is empty: matches against
/// `budget + stretch`, keeps the first `max_count`, and works out how much
/// more money the cheapest qualifying destination would need.
pub fn fallback(
    projected: &[ProjectedDestination],
    budget: f64,
    filter: CategoryFilter,
    stretch: f64,
    max_count: usize,
) -> FallbackOutcome {
    let mut destinations = match_destinations(projected, budget + stretch, filter);
    destinations.truncate(max_count);

    let (budget_gap, notice) = match cheapest_cost(projected, filter) {
        Some(min_cost) => {
            let gap = min_cost - budget;
            (if gap > 0.0 { Some(gap) } else { None }, None)
        }
        None => match filter {
            CategoryFilter::Any => (None, Some(Notice::EmptyCatalog)),
            CategoryFilter::Only(_) => (None, Some(Notice::NoCategoryMatch { category: filter })),
        },
    };

    FallbackOutcome {
        destinations,
        budget_gap,
        notice,
    }
}

/// Projects `records` for the query's trip length and picks what fits,
/// falling back to a relaxed budget when nothing does.
pub fn recommend(
    records: &[DestinationRecord],
    query: &Query,
    config: &RecommenderConfig,
) -> Result<RecommendationResult> {
    query.validate()?;
    config.validate()?;

    let projected = projection::project(records, query.days)?;
    let primary = match_destinations(&projected, query.budget, query.category);
    log::debug!(
        "Matched {} of {} destinations (budget={}, category={}, days={})",
        primary.len(),
        projected.len(),
        query.budget,
        query.category,
        query.days
    );

    if !primary.is_empty() {
        return Ok(RecommendationResult {
            primary,
            ..Default::default()
        });
    }

    let outcome = fallback(
        &projected,
        query.budget,
        query.category,
        config.stretch,
        config.max_fallback,
    );
    log::info!(
        "No destination fits budget {}; {} fallback(s) within +{}, gap={:?}",
        query.budget,
        outcome.destinations.len(),
        config.stretch,
        outcome.budget_gap
    );
    if let Some(Notice::NoCategoryMatch { category }) = &outcome.notice {
        log::info!("Catalog has no '{}' destinations", category);
    }

    Ok(RecommendationResult {
        primary: Vec::new(),
        is_fallback: true,
        fallback: outcome.destinations,
        budget_gap_suggestion: outcome.budget_gap,
        notice: outcome.notice,
    })
}

/// A catalog bound to its fallback settings, shareable between sessions.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    config: RecommenderConfig,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, config: RecommenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    pub fn recommend(&self, query: &Query) -> Result<RecommendationResult> {
        recommend(self.catalog.records(), query, &self.config)
    }
}

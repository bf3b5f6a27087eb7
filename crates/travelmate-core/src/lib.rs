// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Budget-constrained destination recommender.
//!
//! A [`Catalog`] is loaded once and shared read-only. Each query projects the
//! catalog's per-day costs for the trip length, keeps the destinations that
//! fit the budget and category, and falls back to a relaxed budget (plus a
//! "how much more would you need" hint) when nothing fits.

pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
mod ingest;
pub mod projection;
pub mod recommender;

pub use catalog::{Catalog, DestinationRecord};
pub use category::{Category, CategoryFilter};
pub use config::AppConfig;
pub use error::{Result, TravelError};
pub use projection::{project, CostBreakdown, CostComponent, ProjectedDestination};
pub use recommender::{
    recommend, Notice, Query, RecommendationResult, Recommender, RecommenderConfig,
};

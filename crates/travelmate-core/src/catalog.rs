// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::category::{Category, CategoryFilter};
use crate::error::{Result, TravelError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// One row of the destination table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationRecord {
    pub destination: String,
    pub state: String,
    pub category: Category,
    pub food_cost_per_day: f64,
    pub stay_cost_per_day: f64,
    /// Flat cost for the whole trip, not scaled by day count.
    pub activity_cost: f64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl DestinationRecord {
    /// Checks the numeric fields. `row` is only used to label the error.
    pub fn validate(&self, row: usize) -> Result<()> {
        if self.destination.trim().is_empty() {
            return Err(TravelError::invalid_record(row, "destination", "is empty"));
        }

        let costs = [
            ("food_cost", self.food_cost_per_day),
            ("stay_cost", self.stay_cost_per_day),
            ("activity_cost", self.activity_cost),
        ];
        for (field, value) in costs {
            if !value.is_finite() {
                return Err(TravelError::invalid_record(row, field, "is not a finite number"));
            }
            if value < 0.0 {
                return Err(TravelError::invalid_record(
                    row,
                    field,
                    format!("is negative ({})", value),
                ));
            }
        }

        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(TravelError::invalid_record(
                row,
                "latitude",
                format!("is out of range ({})", self.latitude),
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(TravelError::invalid_record(
                row,
                "longitude",
                format!("is out of range ({})", self.longitude),
            ));
        }

        Ok(())
    }
}

/// The immutable destination table for one session.
///
/// Records are validated once on construction and never mutated afterwards;
/// per-query cost fields live in [`crate::projection::ProjectedDestination`] values instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<DestinationRecord>,
}

impl Catalog {
    pub fn new(records: Vec<DestinationRecord>) -> Result<Self> {
        for (i, record) in records.iter().enumerate() {
            record.validate(i + 1)?;
        }
        Ok(Self { records })
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading catalog from {:?}", path);
        let catalog = Self::from_reader(std::fs::File::open(path)?)?;
        log::debug!(
            "Loaded {} destinations from {:?}",
            catalog.records.len(),
            path
        );
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records = crate::ingest::read_records(reader)?;
        Ok(Self { records })
    }

    /// Wraps the catalog for read-only sharing across sessions or threads.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn records(&self) -> &[DestinationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter_filtered(
        &self,
        filter: CategoryFilter,
    ) -> impl Iterator<Item = &DestinationRecord> + '_ {
        self.records
            .iter()
            .filter(move |r| filter.accepts(r.category))
    }

    /// Number of destinations per category label, sorted by label.
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.category.label().to_string()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, category: Category) -> DestinationRecord {
        DestinationRecord {
            destination: name.to_string(),
            state: "Somewhere".to_string(),
            category,
            food_cost_per_day: 100.0,
            stay_cost_per_day: 200.0,
            activity_cost: 50.0,
            latitude: 15.0,
            longitude: 74.0,
            image_url: None,
        }
    }

    #[test]
    fn test_new_rejects_negative_cost() {
        let mut bad = record("Goa", Category::Beach);
        bad.stay_cost_per_day = -1.0;

        let err = Catalog::new(vec![record("Ooty", Category::HillStation), bad]).unwrap_err();
        match err {
            TravelError::InvalidRecord { row, field, .. } => {
                assert_eq!(row, 2);
                assert_eq!(field, "stay_cost");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_nan_and_bad_coordinates() {
        let mut nan = record("Goa", Category::Beach);
        nan.activity_cost = f64::NAN;
        assert!(matches!(
            Catalog::new(vec![nan]),
            Err(TravelError::InvalidRecord { ref field, .. }) if field == "activity_cost"
        ));

        let mut lat = record("Goa", Category::Beach);
        lat.latitude = 91.0;
        assert!(matches!(
            Catalog::new(vec![lat]),
            Err(TravelError::InvalidRecord { ref field, .. }) if field == "latitude"
        ));

        let mut lon = record("Goa", Category::Beach);
        lon.longitude = -181.0;
        assert!(matches!(
            Catalog::new(vec![lon]),
            Err(TravelError::InvalidRecord { ref field, .. }) if field == "longitude"
        ));
    }

    #[test]
    fn test_category_counts_and_filter() {
        let catalog = Catalog::new(vec![
            record("Goa", Category::Beach),
            record("Puri", Category::Beach),
            record("Hampi", Category::Heritage),
        ])
        .unwrap();

        let counts = catalog.category_counts();
        assert_eq!(counts.get("beach"), Some(&2));
        assert_eq!(counts.get("heritage"), Some(&1));
        assert_eq!(counts.get("mountain"), None);

        let beaches: Vec<&str> = catalog
            .iter_filtered(CategoryFilter::Only(Category::Beach))
            .map(|r| r.destination.as_str())
            .collect();
        assert_eq!(beaches, vec!["Goa", "Puri"]);
        assert_eq!(catalog.iter_filtered(CategoryFilter::Any).count(), 3);
    }

    #[test]
    fn test_shared_catalog_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        let shared = Catalog::new(vec![record("Goa", Category::Beach)])
            .unwrap()
            .into_shared();
        assert_send_sync(&shared);

        let handle = {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || crate::projection::project(shared.records(), 2).unwrap().len())
        };
        assert_eq!(handle.join().unwrap(), 1);
    }
}

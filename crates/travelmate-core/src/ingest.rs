// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! CSV ingestion for the destination table.
//!
//! Columns are located by header name (case-insensitive, with a few aliases)
//! so the file may carry extra columns in any order. Every row is validated
//! before it reaches the catalog; the first bad row aborts the load.

use crate::catalog::DestinationRecord;
use crate::category::Category;
use crate::error::{Result, TravelError};
use std::io::Read;

const DESTINATION: &[&str] = &["destination", "name"];
const STATE: &[&str] = &["state"];
const CATEGORY: &[&str] = &["type", "category"];
const FOOD_COST: &[&str] = &["food_cost", "food_cost_per_day"];
const STAY_COST: &[&str] = &["stay_cost", "stay_cost_per_day"];
const ACTIVITY_COST: &[&str] = &["activity_cost"];
const LATITUDE: &[&str] = &["latitude", "lat"];
const LONGITUDE: &[&str] = &["longitude", "lon", "lng"];
const IMAGE_URL: &[&str] = &["image_url", "image"];

struct ColumnMap {
    destination: usize,
    state: usize,
    category: usize,
    food_cost: usize,
    stay_cost: usize,
    activity_cost: usize,
    latitude: usize,
    longitude: usize,
    image_url: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |aliases: &[&str]| {
            headers
                .iter()
                .position(|h| aliases.iter().any(|a| h.trim().eq_ignore_ascii_case(a)))
        };
        let require = |aliases: &[&str]| {
            find(aliases).ok_or_else(|| TravelError::invalid_record(0, aliases[0], "column is missing"))
        };

        Ok(Self {
            destination: require(DESTINATION)?,
            state: require(STATE)?,
            category: require(CATEGORY)?,
            food_cost: require(FOOD_COST)?,
            stay_cost: require(STAY_COST)?,
            activity_cost: require(ACTIVITY_COST)?,
            latitude: require(LATITUDE)?,
            longitude: require(LONGITUDE)?,
            image_url: find(IMAGE_URL),
        })
    }
}

pub(crate) fn read_records<R: Read>(reader: R) -> Result<Vec<DestinationRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(rdr.headers()?)?;
    let mut records = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let row = i + 1;
        let raw = result?;
        let record = parse_row(&raw, &columns, row)?;
        record.validate(row)?;
        records.push(record);
    }

    Ok(records)
}

fn parse_row(raw: &csv::StringRecord, columns: &ColumnMap, row: usize) -> Result<DestinationRecord> {
    let text = |idx: usize, field: &str| -> Result<String> {
        match raw.get(idx).map(str::trim) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(TravelError::invalid_record(row, field, "is missing")),
        }
    };
    let number = |idx: usize, field: &str| -> Result<f64> {
        let value = text(idx, field)?;
        value.parse::<f64>().map_err(|_| {
            TravelError::invalid_record(row, field, format!("is not a number ('{}')", value))
        })
    };

    let category_label = text(columns.category, "category")?;
    let category = Category::from_label(&category_label).ok_or_else(|| {
        TravelError::invalid_record(
            row,
            "category",
            format!("has unknown value '{}'", category_label),
        )
    })?;

    let image_url = columns
        .image_url
        .and_then(|idx| raw.get(idx))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(DestinationRecord {
        destination: text(columns.destination, "destination")?,
        state: text(columns.state, "state")?,
        category,
        food_cost_per_day: number(columns.food_cost, "food_cost")?,
        stay_cost_per_day: number(columns.stay_cost, "stay_cost")?,
        activity_cost: number(columns.activity_cost, "activity_cost")?,
        latitude: number(columns.latitude, "latitude")?,
        longitude: number(columns.longitude, "longitude")?,
        image_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "destination,state,type,food_cost,stay_cost,activity_cost,latitude,longitude\n";

    fn field_of(err: TravelError) -> (usize, String) {
        match err {
            TravelError::InvalidRecord { row, field, .. } => (row, field),
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_sample() {
        let data = format!(
            "{}Goa,Goa,beach,500,800,300,15.2993,74.1240\nManali,Himachal Pradesh,mountain,300,600,200,32.2432,77.1892\n",
            HEADER
        );
        let records = read_records(Cursor::new(data)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].destination, "Goa");
        assert_eq!(records[0].category, Category::Beach);
        assert_eq!(records[0].food_cost_per_day, 500.0);
        assert_eq!(records[1].state, "Himachal Pradesh");
        assert_eq!(records[1].activity_cost, 200.0);
        assert_eq!(records[1].image_url, None);
    }

    #[test]
    fn test_header_aliases_and_column_order() {
        let data = "\
Image, Category ,Name,State,Longitude,Latitude,Activity_Cost,Stay_Cost_Per_Day,Food_Cost_Per_Day
https://example.org/ooty.jpg,Hill Station,Ooty,Tamil Nadu,76.6950,11.4064,150,700,350
";
        let records = read_records(Cursor::new(data)).unwrap();

        assert_eq!(records.len(), 1);
        let ooty = &records[0];
        assert_eq!(ooty.destination, "Ooty");
        assert_eq!(ooty.category, Category::HillStation);
        assert_eq!(ooty.food_cost_per_day, 350.0);
        assert_eq!(ooty.stay_cost_per_day, 700.0);
        assert_eq!(ooty.latitude, 11.4064);
        assert_eq!(ooty.image_url.as_deref(), Some("https://example.org/ooty.jpg"));
    }

    #[test]
    fn test_short_coordinate_aliases() {
        let data = "name,state,category,food_cost,stay_cost,activity_cost,lat,lng\n\
                    Puri,Odisha,beach,250,450,100,19.8135,85.8312\n";
        let records = read_records(Cursor::new(data)).unwrap();

        assert_eq!(records[0].destination, "Puri");
        assert_eq!(records[0].latitude, 19.8135);
        assert_eq!(records[0].longitude, 85.8312);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let data = "destination,state,type,food_cost,activity_cost,latitude,longitude\n";
        let (row, field) = field_of(read_records(Cursor::new(data)).unwrap_err());
        assert_eq!(row, 0);
        assert_eq!(field, "stay_cost");
    }

    #[test]
    fn test_non_numeric_cost_names_row_and_field() {
        let data = format!(
            "{}Goa,Goa,beach,500,800,300,15.2,74.1\nJaipur,Rajasthan,heritage,400,cheap,250,26.9,75.8\n",
            HEADER
        );
        let (row, field) = field_of(read_records(Cursor::new(data)).unwrap_err());
        assert_eq!(row, 2);
        assert_eq!(field, "stay_cost");
    }

    #[test]
    fn test_empty_and_short_rows_are_missing_fields() {
        let data = format!("{}Goa,Goa,beach,,800,300,15.2,74.1\n", HEADER);
        let (row, field) = field_of(read_records(Cursor::new(data)).unwrap_err());
        assert_eq!((row, field.as_str()), (1, "food_cost"));

        let data = format!("{}Goa,Goa,beach,500,800\n", HEADER);
        let (_, field) = field_of(read_records(Cursor::new(data)).unwrap_err());
        assert_eq!(field, "activity_cost");
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let data = format!("{}Thar,Rajasthan,desert,300,500,400,27.0,71.0\n", HEADER);
        let (row, field) = field_of(read_records(Cursor::new(data)).unwrap_err());
        assert_eq!((row, field.as_str()), (1, "category"));
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let data = format!("{}Goa,Goa,beach,500,800,-1,15.2,74.1\n", HEADER);
        let (_, field) = field_of(read_records(Cursor::new(data)).unwrap_err());
        assert_eq!(field, "activity_cost");
    }
}

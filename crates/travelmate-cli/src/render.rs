// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Presentation shells over a `RecommendationResult`. Every view consumes the
//! same result; none of them decide anything about matching.

use crate::View;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;
use travelmate_core::{
    Catalog, CategoryFilter, CostComponent, Notice, ProjectedDestination, Query,
    RecommendationResult, RecommenderConfig,
};

/// Centre of the default India map view.
const MAP_CENTER: (f64, f64) = (20.5937, 78.9629);
const MAP_ZOOM: u8 = 4;

/// Width of a full bar in the chart view.
const CHART_WIDTH: usize = 40;
const CHART_SEGMENTS: [(CostComponent, char); 3] = [
    (CostComponent::Food, '#'),
    (CostComponent::Stay, '='),
    (CostComponent::Activity, '+'),
];

/// Currency display truncates to whole rupees.
fn rupees(amount: f64) -> String {
    format!("₹{}", amount.trunc() as i64)
}

fn days_label(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

pub fn render(
    view: View,
    query: &Query,
    result: &RecommendationResult,
    settings: &RecommenderConfig,
) -> Result<String> {
    match view {
        View::Json => Ok(serde_json::to_string_pretty(result)? + "\n"),
        View::Map => render_map(result),
        View::Table => Ok(render_text(query, result, settings, table_rows)),
        View::Cards => Ok(render_text(query, result, settings, cards)),
        View::Chart => Ok(render_text(query, result, settings, chart)),
    }
}

fn render_text(
    query: &Query,
    result: &RecommendationResult,
    settings: &RecommenderConfig,
    body: fn(&[ProjectedDestination]) -> String,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Recommended trips under {} for {} ({})",
        rupees(query.budget),
        days_label(query.days),
        query.category
    );
    let _ = writeln!(out);

    if !result.is_fallback {
        out.push_str(&body(&result.primary));
        return out;
    }

    let _ = writeln!(
        out,
        "No destinations match your preferences. Try adjusting filters."
    );

    match &result.notice {
        Some(Notice::NoCategoryMatch { category }) => {
            let _ = writeln!(out, "The catalog has no '{}' destinations.", category);
        }
        Some(Notice::EmptyCatalog) => {
            let _ = writeln!(out, "The catalog is empty.");
        }
        None => {}
    }

    if let Some(gap) = result.budget_gap_suggestion {
        let _ = writeln!(
            out,
            "Add {} to your budget to reach the cheapest option.",
            rupees(gap.ceil())
        );
    }

    if !result.fallback.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Closest matches within {} over budget:",
            rupees(settings.stretch)
        );
        let _ = writeln!(out);
        out.push_str(&body(&result.fallback));
    }

    out
}

fn cards(list: &[ProjectedDestination]) -> String {
    let mut out = String::new();
    for p in list {
        let r = &p.record;
        let _ = writeln!(out, "### {} ({})", r.destination, r.state);
        let _ = writeln!(out, "- Total Cost: {}", rupees(p.total_cost));
        let _ = writeln!(
            out,
            "- Food ({}/day): {}",
            rupees(r.food_cost_per_day),
            rupees(p.food_total)
        );
        let _ = writeln!(
            out,
            "- Stay ({}/day): {}",
            rupees(r.stay_cost_per_day),
            rupees(p.stay_total)
        );
        let _ = writeln!(out, "- Activities: {}", rupees(r.activity_cost));
        let _ = writeln!(out, "---");
    }
    out
}

fn table_rows(list: &[ProjectedDestination]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<18} {:<18} {:<13} {:>9} {:>9} {:>9} {:>9}",
        "Destination", "State", "Category", "Food", "Stay", "Activity", "Total"
    );
    for p in list {
        let b = p.breakdown();
        let _ = writeln!(
            out,
            "{:<18} {:<18} {:<13} {:>9} {:>9} {:>9} {:>9}",
            p.record.destination,
            p.record.state,
            p.record.category,
            rupees(b.food),
            rupees(b.stay),
            rupees(b.activity),
            rupees(b.total)
        );
    }
    out
}

/// Number of cells per component. Cells are allotted by largest remainder
/// so a bar for a non-free trip is always exactly `width` wide.
fn bar_cells(p: &ProjectedDestination, width: usize) -> [usize; 3] {
    let breakdown = p.breakdown();
    let exact: Vec<f64> = CHART_SEGMENTS
        .iter()
        .map(|(component, _)| breakdown.share_of(*component) * width as f64)
        .collect();

    let mut cells = [0usize; 3];
    for (cell, value) in cells.iter_mut().zip(&exact) {
        *cell = value.floor() as usize;
    }
    if breakdown.total <= 0.0 {
        return cells;
    }

    let mut order: Vec<usize> = (0..cells.len()).collect();
    order.sort_by(|a, b| {
        let ra = exact[*a] - exact[*a].floor();
        let rb = exact[*b] - exact[*b].floor();
        rb.total_cmp(&ra)
    });
    let assigned: usize = cells.iter().sum();
    for idx in order.into_iter().take(width.saturating_sub(assigned)) {
        cells[idx] += 1;
    }
    cells
}

/// Cost breakdown per destination as stacked text bars, scaled to trip totals.
fn chart(list: &[ProjectedDestination]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Cost breakdown per destination (# food, = stay, + activities)");
    for p in list {
        let mut bar = String::with_capacity(CHART_WIDTH);
        for ((_, symbol), count) in CHART_SEGMENTS.iter().zip(bar_cells(p, CHART_WIDTH)) {
            bar.extend(std::iter::repeat(*symbol).take(count));
        }
        let breakdown = p.breakdown();
        let _ = writeln!(
            out,
            "{:<18} |{:<width$}| {} (food {:.0}%, stay {:.0}%, activities {:.0}%)",
            p.record.destination,
            bar,
            rupees(p.total_cost),
            breakdown.share_of(CostComponent::Food) * 100.0,
            breakdown.share_of(CostComponent::Stay) * 100.0,
            breakdown.share_of(CostComponent::Activity) * 100.0,
            width = CHART_WIDTH
        );
    }
    out
}

#[derive(Serialize)]
struct MapMarker<'a> {
    latitude: f64,
    longitude: f64,
    tooltip: &'a str,
    popup: String,
    image_url: Option<&'a str>,
}

#[derive(Serialize)]
struct MapView<'a> {
    center: [f64; 2],
    zoom: u8,
    markers: Vec<MapMarker<'a>>,
}

fn render_map(result: &RecommendationResult) -> Result<String> {
    let markers = result
        .destinations()
        .iter()
        .map(|p| MapMarker {
            latitude: p.record.latitude,
            longitude: p.record.longitude,
            tooltip: &p.record.destination,
            popup: format!("{} - {}", p.record.destination, rupees(p.total_cost)),
            image_url: p.record.image_url.as_deref(),
        })
        .collect();

    let view = MapView {
        center: [MAP_CENTER.0, MAP_CENTER.1],
        zoom: MAP_ZOOM,
        markers,
    };
    Ok(serde_json::to_string_pretty(&view)? + "\n")
}

pub fn catalog_listing(catalog: &Catalog, filter: CategoryFilter) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<18} {:<18} {:<13} {:>9} {:>9} {:>9}",
        "Destination", "State", "Category", "Food/day", "Stay/day", "Activity"
    );
    for r in catalog.iter_filtered(filter) {
        let _ = writeln!(
            out,
            "{:<18} {:<18} {:<13} {:>9} {:>9} {:>9}",
            r.destination,
            r.state,
            r.category,
            rupees(r.food_cost_per_day),
            rupees(r.stay_cost_per_day),
            rupees(r.activity_cost)
        );
    }
    out
}

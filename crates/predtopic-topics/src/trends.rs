//! Year-over-year publication trends per topic.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use predtopic_types::{ModelKind, TopicId};

use crate::catalog::TopicCatalog;
use crate::charts::YearCount;

/// Absolute growth at or above this fraction counts as a significant change.
pub const SIGNIFICANT_CHANGE: f64 = 0.2;

/// Growth from one year to the next.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthRate {
    pub from_year: i32,
    pub to_year: i32,
    /// (current - previous) / previous
    pub rate: f64,
}

impl GrowthRate {
    pub fn is_significant(&self) -> bool {
        self.rate.abs() >= SIGNIFICANT_CHANGE
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicTrend {
    pub topic_id: TopicId,
    pub topic_name: Option<String>,
    pub total: usize,
    /// One point per corpus year, zero counts included
    pub yearly: Vec<YearCount>,
    pub growth: Vec<GrowthRate>,
    pub average_growth: Option<f64>,
}

impl TopicTrend {
    pub fn significant_changes(&self) -> impl Iterator<Item = &GrowthRate> {
        self.growth.iter().filter(|g| g.is_significant())
    }
}

/// Trends for every topic of one model, largest topic first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub model: ModelKind,
    pub years: Vec<i32>,
    pub topics: Vec<TopicTrend>,
}

impl TrendReport {
    pub fn topic(&self, topic_id: TopicId) -> Option<&TopicTrend> {
        self.topics.iter().find(|t| t.topic_id == topic_id)
    }
}

/// Growth between consecutive points. A year following a zero count has no
/// rate.
pub fn growth_rates(points: &[YearCount]) -> Vec<GrowthRate> {
    points
        .windows(2)
        .filter(|pair| pair[0].count > 0)
        .map(|pair| {
            let previous = pair[0].count as f64;
            GrowthRate {
                from_year: pair[0].year,
                to_year: pair[1].year,
                rate: (pair[1].count as f64 - previous) / previous,
            }
        })
        .collect()
}

pub fn average_growth(rates: &[GrowthRate]) -> Option<f64> {
    if rates.is_empty() {
        return None;
    }
    Some(rates.iter().map(|g| g.rate).sum::<f64>() / rates.len() as f64)
}

/// Analyze every topic that appears in the catalog.
pub fn analyze(catalog: &TopicCatalog) -> TrendReport {
    let documents = catalog.documents();
    let mut years: BTreeSet<i32> = BTreeSet::new();
    let mut counts: BTreeMap<TopicId, BTreeMap<i32, usize>> = BTreeMap::new();
    for entry in catalog.entries() {
        let Some(document) = documents.get(entry.assignment.document_id) else {
            continue;
        };
        years.insert(document.year);
        *counts
            .entry(entry.assignment.topic_id)
            .or_default()
            .entry(document.year)
            .or_insert(0) += 1;
    }

    let mut topics: Vec<TopicTrend> = counts
        .into_iter()
        .map(|(topic_id, by_year)| {
            let yearly: Vec<YearCount> = years
                .iter()
                .map(|year| YearCount {
                    year: *year,
                    count: by_year.get(year).copied().unwrap_or(0),
                })
                .collect();
            let growth = growth_rates(&yearly);
            TopicTrend {
                topic_id,
                topic_name: catalog.topic_name(topic_id),
                total: by_year.values().sum(),
                average_growth: average_growth(&growth),
                yearly,
                growth,
            }
        })
        .collect();
    // Stable sort keeps ascending ids on equal totals.
    topics.sort_by(|a, b| b.total.cmp(&a.total));

    debug!(
        model = %catalog.model(),
        topics = topics.len(),
        years = years.len(),
        "Computed topic trends"
    );
    TrendReport {
        model: catalog.model(),
        years: years.into_iter().collect(),
        topics,
    }
}

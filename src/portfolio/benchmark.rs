//! Benchmark tier classification
//!
//! Classifies each building's metric value against the industry-average and
//! top-performer reference points; pure three-way thresholding.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::Error;
use crate::core::types::{Benchmarks, Building, MetricBenchmark};

/// Metric axes the comparison view can pivot on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonMetric {
    Occupancy,
    Roi,
    EsgScore,
}

impl ComparisonMetric {
    pub fn display_name(&self) -> &'static str {
        match self {
            ComparisonMetric::Occupancy => "Occupancy Rate",
            ComparisonMetric::Roi => "Return on Investment",
            ComparisonMetric::EsgScore => "ESG Score",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ComparisonMetric::Occupancy | ComparisonMetric::Roi => "%",
            ComparisonMetric::EsgScore => "/100",
        }
    }
}

impl FromStr for ComparisonMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "occupancy" => Ok(ComparisonMetric::Occupancy),
            "roi" => Ok(ComparisonMetric::Roi),
            "esg" | "esg-score" | "esgscore" => Ok(ComparisonMetric::EsgScore),
            other => Err(Error::invalid_input(format!("unknown metric: {other}"))),
        }
    }
}

/// Performance tier relative to the two reference points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenchmarkTier {
    /// Meets or exceeds the top performer
    ExceedsTopPerformer,
    /// Meets or exceeds the industry average
    AboveIndustryAverage,
    /// Below the industry average
    BelowAverage,
}

impl BenchmarkTier {
    pub fn label(&self) -> &'static str {
        match self {
            BenchmarkTier::ExceedsTopPerformer => "Top Performer",
            BenchmarkTier::AboveIndustryAverage => "Above Average",
            BenchmarkTier::BelowAverage => "Below Average",
        }
    }
}

/// Classify one value against a metric's benchmark pair
pub fn classify(value: f64, benchmark: MetricBenchmark) -> BenchmarkTier {
    if value >= benchmark.top_performer {
        BenchmarkTier::ExceedsTopPerformer
    } else if value >= benchmark.industry {
        BenchmarkTier::AboveIndustryAverage
    } else {
        BenchmarkTier::BelowAverage
    }
}

/// Pull the compared metric off a building
pub fn metric_value(building: &Building, metric: ComparisonMetric) -> f64 {
    match metric {
        ComparisonMetric::Occupancy => building.occupancy,
        ComparisonMetric::Roi => building.roi,
        ComparisonMetric::EsgScore => building.esg.score as f64,
    }
}

fn metric_benchmark(benchmarks: &Benchmarks, metric: ComparisonMetric) -> MetricBenchmark {
    match metric {
        ComparisonMetric::Occupancy => benchmarks.occupancy,
        ComparisonMetric::Roi => benchmarks.roi,
        ComparisonMetric::EsgScore => benchmarks.esg_score,
    }
}

/// One building's standing in the comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub name: String,
    pub value: f64,
    pub tier: BenchmarkTier,
    /// value / top-performer, used for relative bar widths
    pub ratio_to_top: f64,
}

/// Full comparison across the portfolio for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub metric: ComparisonMetric,
    pub benchmark: MetricBenchmark,
    pub rows: Vec<ComparisonRow>,
}

/// Classify every building against the selected metric's benchmarks
pub fn compare_portfolio(
    buildings: &[Building],
    metric: ComparisonMetric,
    benchmarks: &Benchmarks,
) -> ComparisonReport {
    let benchmark = metric_benchmark(benchmarks, metric);

    let rows = buildings
        .iter()
        .map(|building| {
            let value = metric_value(building, metric);
            ComparisonRow {
                name: building.name.clone(),
                value,
                tier: classify(value, benchmark),
                ratio_to_top: value / benchmark.top_performer,
            }
        })
        .collect();

    ComparisonReport {
        metric,
        benchmark,
        rows,
    }
}

//! File-based configuration
//!
//! Optional `.estatemap.toml` in the working directory or any ancestor.
//! Every field has a default, so a missing or partial file is never an
//! error; a malformed file is logged and ignored.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::core::types::{Benchmarks, MetricBenchmark};

fn default_upcoming_window_days() -> i64 {
    40
}

fn default_warning_band_days() -> i64 {
    30
}

fn default_low_occupancy_threshold() -> f64 {
    80.0
}

fn default_esg_improvement_threshold() -> f64 {
    75.0
}

/// Compliance and screening thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Days-to-expiry window inside which a document is Upcoming
    #[serde(default = "default_upcoming_window_days")]
    pub upcoming_window_days: i64,

    /// Days-to-expiry below which the display shows a warning band
    #[serde(default = "default_warning_band_days")]
    pub warning_band_days: i64,

    /// Occupancy percentage under which a building is flagged
    #[serde(default = "default_low_occupancy_threshold")]
    pub low_occupancy: f64,

    /// Composite ESG score under which a building needs improvement
    #[serde(default = "default_esg_improvement_threshold")]
    pub esg_improvement: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            upcoming_window_days: default_upcoming_window_days(),
            warning_band_days: default_warning_band_days(),
            low_occupancy: default_low_occupancy_threshold(),
            esg_improvement: default_esg_improvement_threshold(),
        }
    }
}

impl Thresholds {
    // Pure function: check a percentage-valued threshold
    fn is_valid_percent(value: f64) -> bool {
        (0.0..=100.0).contains(&value)
    }

    /// Validate all thresholds, reporting the first violation
    pub fn validate(&self) -> Result<(), String> {
        if self.upcoming_window_days < 0 {
            return Err("upcoming_window_days must not be negative".to_string());
        }
        if self.warning_band_days < 0 {
            return Err("warning_band_days must not be negative".to_string());
        }
        if !Self::is_valid_percent(self.low_occupancy) {
            return Err("low_occupancy must be between 0 and 100".to_string());
        }
        if !Self::is_valid_percent(self.esg_improvement) {
            return Err("esg_improvement must be between 0 and 100".to_string());
        }
        Ok(())
    }
}

fn default_esg_run_ms() -> u64 {
    1500
}

fn default_forecast_run_ms() -> u64 {
    2000
}

/// Latencies of the simulated long-running operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Latency {
    #[serde(default = "default_esg_run_ms")]
    pub esg_run_ms: u64,

    #[serde(default = "default_forecast_run_ms")]
    pub forecast_run_ms: u64,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            esg_run_ms: default_esg_run_ms(),
            forecast_run_ms: default_forecast_run_ms(),
        }
    }
}

fn default_benchmark_occupancy() -> MetricBenchmark {
    MetricBenchmark {
        industry: 82.0,
        top_performer: 95.0,
    }
}

fn default_benchmark_roi() -> MetricBenchmark {
    MetricBenchmark {
        industry: 7.2,
        top_performer: 9.5,
    }
}

fn default_benchmark_esg() -> MetricBenchmark {
    MetricBenchmark {
        industry: 75.0,
        top_performer: 90.0,
    }
}

/// Overridable benchmark reference points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    #[serde(default = "default_benchmark_occupancy")]
    pub occupancy: MetricBenchmark,

    #[serde(default = "default_benchmark_roi")]
    pub roi: MetricBenchmark,

    #[serde(default = "default_benchmark_esg")]
    pub esg_score: MetricBenchmark,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            occupancy: default_benchmark_occupancy(),
            roi: default_benchmark_roi(),
            esg_score: default_benchmark_esg(),
        }
    }
}

impl From<&BenchmarkConfig> for Benchmarks {
    fn from(config: &BenchmarkConfig) -> Self {
        Benchmarks {
            occupancy: config.occupancy,
            roi: config.roi,
            esg_score: config.esg_score,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstatemapConfig {
    #[serde(default)]
    pub thresholds: Thresholds,

    #[serde(default)]
    pub latency: Latency,

    #[serde(default)]
    pub benchmarks: BenchmarkConfig,
}

impl EstatemapConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.thresholds.validate()
    }
}

fn try_load_config_from_path(path: &Path) -> Option<EstatemapConfig> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<EstatemapConfig>(&contents) {
        Ok(config) => match config.validate() {
            Ok(()) => {
                log::debug!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(message) => {
                log::warn!("Ignoring {}: {}", path.display(), message);
                None
            }
        },
        Err(e) => {
            log::warn!("Ignoring malformed {}: {}", path.display(), e);
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> Vec<PathBuf> {
    start
        .ancestors()
        .take(max_depth)
        .map(Path::to_path_buf)
        .collect()
}

/// Load configuration, walking up the directory tree for `.estatemap.toml`
pub fn load_config() -> EstatemapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {e}. Using default config.");
            return EstatemapConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .into_iter()
        .map(|dir| dir.join(".estatemap.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}

static CONFIG: OnceLock<EstatemapConfig> = OnceLock::new();

/// Cached configuration for the lifetime of the process
pub fn get_config() -> &'static EstatemapConfig {
    CONFIG.get_or_init(load_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EstatemapConfig::default();
        assert_eq!(config.thresholds.upcoming_window_days, 40);
        assert_eq!(config.latency.esg_run_ms, 1500);
        assert_eq!(config.latency.forecast_run_ms, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: EstatemapConfig =
            toml::from_str("[thresholds]\nupcoming_window_days = 60\n").unwrap();
        assert_eq!(config.thresholds.upcoming_window_days, 60);
        assert_eq!(config.thresholds.warning_band_days, 30);
        assert_eq!(config.benchmarks.roi.top_performer, 9.5);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let config: EstatemapConfig =
            toml::from_str("[thresholds]\nlow_occupancy = 140.0\n").unwrap();
        assert!(config.validate().is_err());
    }
}

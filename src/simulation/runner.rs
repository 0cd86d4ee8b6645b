//! Long-running operation modeling
//!
//! The retrofit simulation and forecast re-run both present as slow calls
//! with a fixed latency. Overlapping invocations are resolved by a
//! generation counter: a run publishes its result only if no newer run has
//! started in the meantime, making repeated triggers strictly
//! last-write-wins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::debug;

/// Default latency of a retrofit simulation run
pub const ESG_RUN_LATENCY: Duration = Duration::from_millis(1500);

/// Default latency of a forecast re-run
pub const FORECAST_RUN_LATENCY: Duration = Duration::from_millis(2000);

/// Serializes overlapping runs of one operation kind
#[derive(Debug, Default)]
pub struct SimulationRunner {
    generation: AtomicU64,
}

impl SimulationRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `compute` after `latency`, returning `None` if a newer run
    /// started while this one was pending.
    pub async fn run<T, F>(&self, latency: Duration, compute: F) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        let result = compute();

        if self.generation.load(Ordering::SeqCst) == my_generation {
            Some(result)
        } else {
            debug!("run {my_generation} superseded, discarding result");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_single_run_publishes() {
        let runner = SimulationRunner::new();
        let result = runner.run(Duration::ZERO, || 7).await;
        assert_eq!(result, Some(7));
    }

    #[tokio::test]
    async fn test_later_run_supersedes_earlier() {
        let runner = SimulationRunner::new();

        let slow = runner.run(Duration::from_millis(50), || "first");
        let fast = runner.run(Duration::ZERO, || "second");

        let (slow_result, fast_result) = tokio::join!(slow, fast);

        assert_eq!(slow_result, None);
        assert_eq!(fast_result, Some("second"));
    }

    #[tokio::test]
    async fn test_sequential_runs_both_publish() {
        let runner = SimulationRunner::new();
        assert_eq!(runner.run(Duration::ZERO, || 1).await, Some(1));
        assert_eq!(runner.run(Duration::ZERO, || 2).await, Some(2));
    }
}

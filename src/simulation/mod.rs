//! Derived-metric simulators: retrofit impact and forecast scenarios

pub mod esg;
pub mod forecast;
pub mod runner;

pub use esg::{run_simulation, EsgSimulationInput, EsgSimulationResult};
pub use forecast::{
    run_forecast, FixedSource, SeededSource, ThreadRngSource, VariationSource,
};
pub use runner::{SimulationRunner, ESG_RUN_LATENCY, FORECAST_RUN_LATENCY};

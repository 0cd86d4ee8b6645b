// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod io;
pub mod notifications;
pub mod portfolio;
pub mod simulation;
pub mod state;

// Re-export commonly used types
pub use crate::core::{
    Benchmarks, Building, BuildingType, CertificationTier, ChurnRisk, Document, DocumentKind,
    DocumentStatus, Error, ForecastPoint, ForecastScenario, MaintenanceRequest, Notification,
    Portfolio, PriorityArea, RequestPriority, RequestStatus, Result, Scenario, Tenant, Timeframe,
};

pub use crate::simulation::{
    run_forecast, run_simulation, EsgSimulationInput, EsgSimulationResult, SimulationRunner,
    VariationSource,
};

pub use crate::portfolio::{
    compare_portfolio, derive_status, BenchmarkTier, ComparisonMetric, DocumentQuery,
    MaintenanceQuery, PortfolioSummary, TenantQuery, TenantSort,
};

pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};

pub use crate::notifications::Inbox;
pub use crate::state::{AppState, Settings, UserProfile, View};

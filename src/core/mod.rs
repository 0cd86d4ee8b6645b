//! Core domain model shared across the crate

pub mod errors;
pub mod types;

pub use errors::{Error, Result, ResultExt};
pub use types::{
    Benchmarks, Building, BuildingType, CertificationTier, ChurnRisk, Document, DocumentKind,
    DocumentStatus, EsgHistoryPoint, EsgProfile, ForecastPoint, ForecastScenario,
    MaintenanceRequest, MetricBenchmark, Notification, NotificationKind, Portfolio,
    PriorityArea, RequestPriority, RequestStatus, Scenario, Tenant, Timeframe,
};

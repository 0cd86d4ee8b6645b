//! Portfolio analytics: list queries, benchmarking, KPI rollups, compliance

pub mod benchmark;
pub mod compliance;
pub mod filters;
pub mod kpi;

pub use benchmark::{compare_portfolio, BenchmarkTier, ComparisonMetric, ComparisonReport};
pub use compliance::{derive_status, summarize as summarize_compliance, ComplianceSummary};
pub use filters::{DocumentQuery, MaintenanceQuery, TenantQuery, TenantSort};
pub use kpi::{summarize, GeoBounds, PortfolioSummary};

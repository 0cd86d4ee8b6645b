//! Common type definitions used across the codebase

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::Error;

/// Tenant churn-risk category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChurnRisk {
    Low,
    Medium,
    High,
}

impl ChurnRisk {
    /// Get the display name for this risk level
    pub fn display_name(&self) -> &'static str {
        match self {
            ChurnRisk::Low => "Low",
            ChurnRisk::Medium => "Medium",
            ChurnRisk::High => "High",
        }
    }
}

/// Compliance document categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    Safety,
    Insurance,
    Lease,
    Esg,
    Regulatory,
}

impl DocumentKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentKind::Safety => "Safety",
            DocumentKind::Insurance => "Insurance",
            DocumentKind::Lease => "Lease",
            DocumentKind::Esg => "ESG",
            DocumentKind::Regulatory => "Regulatory",
        }
    }
}

impl FromStr for DocumentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "safety" => Ok(DocumentKind::Safety),
            "insurance" => Ok(DocumentKind::Insurance),
            "lease" => Ok(DocumentKind::Lease),
            "esg" => Ok(DocumentKind::Esg),
            "regulatory" => Ok(DocumentKind::Regulatory),
            other => Err(Error::invalid_input(format!(
                "unknown document type: {other}"
            ))),
        }
    }
}

/// Compliance document status, derived from days-to-expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentStatus {
    Valid,
    Expired,
    Upcoming,
}

impl DocumentStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentStatus::Valid => "Valid",
            DocumentStatus::Expired => "Expired",
            DocumentStatus::Upcoming => "Upcoming",
        }
    }
}

impl FromStr for DocumentStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "valid" => Ok(DocumentStatus::Valid),
            "expired" => Ok(DocumentStatus::Expired),
            "upcoming" => Ok(DocumentStatus::Upcoming),
            other => Err(Error::invalid_input(format!(
                "unknown document status: {other}"
            ))),
        }
    }
}

/// Maintenance request priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RequestPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl RequestPriority {
    pub fn display_name(&self) -> &'static str {
        match self {
            RequestPriority::Low => "Low",
            RequestPriority::Medium => "Medium",
            RequestPriority::High => "High",
            RequestPriority::Critical => "Critical",
        }
    }
}

impl FromStr for RequestPriority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RequestPriority::Low),
            "medium" => Ok(RequestPriority::Medium),
            "high" => Ok(RequestPriority::High),
            "critical" => Ok(RequestPriority::Critical),
            other => Err(Error::invalid_input(format!("unknown priority: {other}"))),
        }
    }
}

/// Maintenance request workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Open,
    InProgress,
    Scheduled,
    Completed,
}

impl RequestStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            RequestStatus::Open => "Open",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Scheduled => "Scheduled",
            RequestStatus::Completed => "Completed",
        }
    }
}

impl FromStr for RequestStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "open" => Ok(RequestStatus::Open),
            "in progress" | "in-progress" | "inprogress" => Ok(RequestStatus::InProgress),
            "scheduled" => Ok(RequestStatus::Scheduled),
            "completed" => Ok(RequestStatus::Completed),
            other => Err(Error::invalid_input(format!("unknown status: {other}"))),
        }
    }
}

/// Notification severity/kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    Alert,
    Warning,
    Info,
    Success,
}

/// Building usage type for simulation adjustments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    Office,
    Retail,
    Mixed,
    Residential,
}

impl BuildingType {
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildingType::Office => "Office",
            BuildingType::Retail => "Retail",
            BuildingType::Mixed => "Mixed Use",
            BuildingType::Residential => "Residential",
        }
    }
}

impl FromStr for BuildingType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "office" => Ok(BuildingType::Office),
            "retail" => Ok(BuildingType::Retail),
            "mixed" | "mixed-use" => Ok(BuildingType::Mixed),
            "residential" => Ok(BuildingType::Residential),
            other => Err(Error::invalid_input(format!(
                "unknown building type: {other}"
            ))),
        }
    }
}

/// Simulation and forecast scenario selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    Conservative,
    Moderate,
    Aggressive,
}

impl Scenario {
    pub fn display_name(&self) -> &'static str {
        match self {
            Scenario::Conservative => "Conservative",
            Scenario::Moderate => "Moderate",
            Scenario::Aggressive => "Aggressive",
        }
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "conservative" => Ok(Scenario::Conservative),
            "moderate" => Ok(Scenario::Moderate),
            "aggressive" => Ok(Scenario::Aggressive),
            other => Err(Error::invalid_input(format!("unknown scenario: {other}"))),
        }
    }
}

/// Forecast scenario selector (separate axis from the retrofit scenario)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForecastScenario {
    Baseline,
    Optimistic,
    Pessimistic,
}

impl ForecastScenario {
    pub fn display_name(&self) -> &'static str {
        match self {
            ForecastScenario::Baseline => "Baseline",
            ForecastScenario::Optimistic => "Optimistic",
            ForecastScenario::Pessimistic => "Pessimistic",
        }
    }
}

impl FromStr for ForecastScenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "baseline" => Ok(ForecastScenario::Baseline),
            "optimistic" => Ok(ForecastScenario::Optimistic),
            "pessimistic" => Ok(ForecastScenario::Pessimistic),
            other => Err(Error::invalid_input(format!(
                "unknown forecast scenario: {other}"
            ))),
        }
    }
}

/// Retrofit focus area driving the simulation weight vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriorityArea {
    Energy,
    Water,
    Waste,
    Social,
}

impl PriorityArea {
    pub fn display_name(&self) -> &'static str {
        match self {
            PriorityArea::Energy => "Energy Efficiency",
            PriorityArea::Water => "Water Conservation",
            PriorityArea::Waste => "Waste Management",
            PriorityArea::Social => "Social Programs",
        }
    }
}

impl FromStr for PriorityArea {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "energy" => Ok(PriorityArea::Energy),
            "water" => Ok(PriorityArea::Water),
            "waste" => Ok(PriorityArea::Waste),
            "social" => Ok(PriorityArea::Social),
            other => Err(Error::invalid_input(format!(
                "unknown priority area: {other}"
            ))),
        }
    }
}

/// Retrofit implementation timeframe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    Short,
    Medium,
    Long,
}

impl Timeframe {
    /// Human-readable implementation window
    pub fn window_label(&self) -> &'static str {
        match self {
            Timeframe::Short => "6-12 months",
            Timeframe::Medium => "12-24 months",
            Timeframe::Long => "24-36 months",
        }
    }
}

impl FromStr for Timeframe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "short" => Ok(Timeframe::Short),
            "medium" => Ok(Timeframe::Medium),
            "long" => Ok(Timeframe::Long),
            other => Err(Error::invalid_input(format!("unknown timeframe: {other}"))),
        }
    }
}

/// Certification tier a retrofit can reach
///
/// Ordering matters: tiers are monotonic non-decreasing in both budget and
/// ESG improvement, which tests assert via this Ord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CertificationTier {
    Silver,
    Gold,
    Platinum,
}

impl CertificationTier {
    pub fn label(&self) -> &'static str {
        match self {
            CertificationTier::Silver => "LEED Silver",
            CertificationTier::Gold => "LEED Gold",
            CertificationTier::Platinum => "LEED Platinum",
        }
    }
}

impl fmt::Display for CertificationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sustainability profile attached to a building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsgProfile {
    /// Composite score; stored independently of the sub-scores, not derived
    pub score: u32,
    pub environmental: u32,
    pub social: u32,
    pub governance: u32,
    /// Tons per year
    pub co2_emissions: f64,
    pub energy_grade: String,
    pub water_grade: String,
    pub waste_grade: String,
    pub certifications: Vec<String>,
}

/// A building in the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: u32,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Percent, 0-100
    pub occupancy: f64,
    /// Millions of currency units
    pub asset_value: f64,
    /// Annual return, percent
    pub roi: f64,
    pub esg: EsgProfile,
}

/// A tenant with an active lease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: u32,
    pub name: String,
    pub sector: String,
    pub lease_end: NaiveDate,
    pub churn_risk: ChurnRisk,
    /// Monthly revenue contribution, millions
    pub revenue: f64,
}

/// A compliance document tied to a building
///
/// Status is not stored; it derives from `days_to_expiry` via
/// [`crate::portfolio::compliance::derive_status`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: u32,
    pub name: String,
    pub kind: DocumentKind,
    pub building: String,
    pub expiry_date: NaiveDate,
    /// Negative once expired
    pub days_to_expiry: i64,
}

/// A building maintenance request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: u32,
    pub building: String,
    pub unit: String,
    pub issue: String,
    pub priority: RequestPriority,
    pub status: RequestStatus,
    pub date: NaiveDate,
    pub assignee: String,
}

/// One month of the revenue forecast series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub month: String,
    /// None for months that have not happened yet
    pub actual: Option<f64>,
    pub predicted: f64,
    pub optimistic: f64,
    pub pessimistic: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub market_avg: f64,
}

/// An inbox notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: String,
    pub read: bool,
}

/// Industry/top-performer reference values for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricBenchmark {
    pub industry: f64,
    pub top_performer: f64,
}

/// Benchmark set covering the comparable portfolio metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Benchmarks {
    pub occupancy: MetricBenchmark,
    pub roi: MetricBenchmark,
    pub esg_score: MetricBenchmark,
}

/// One year of historical portfolio ESG performance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EsgHistoryPoint {
    pub year: i32,
    pub esg_score: u32,
    pub environmental: u32,
    pub social: u32,
    pub governance: u32,
    pub co2_emissions: f64,
}

/// The full portfolio dataset the views operate on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub buildings: Vec<Building>,
    pub tenants: Vec<Tenant>,
    pub documents: Vec<Document>,
    pub requests: Vec<MaintenanceRequest>,
    pub forecast: Vec<ForecastPoint>,
    pub notifications: Vec<Notification>,
    pub esg_history: Vec<EsgHistoryPoint>,
    pub benchmarks: Benchmarks,
}

//! Reference portfolio dataset
//!
//! The sample portfolio used by the CLI and the test suites. Records are
//! constructed once per call; callers own their copy.

use chrono::NaiveDate;

use crate::core::types::{
    Benchmarks, Building, ChurnRisk, Document, DocumentKind, EsgHistoryPoint, EsgProfile,
    ForecastPoint, MaintenanceRequest, MetricBenchmark, Notification, NotificationKind,
    Portfolio, RequestPriority, RequestStatus, Tenant,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date literal")
}

fn esg(
    score: u32,
    environmental: u32,
    social: u32,
    governance: u32,
    co2_emissions: f64,
    energy: &str,
    water: &str,
    waste: &str,
    certifications: &[&str],
) -> EsgProfile {
    EsgProfile {
        score,
        environmental,
        social,
        governance,
        co2_emissions,
        energy_grade: energy.to_string(),
        water_grade: water.to_string(),
        waste_grade: waste.to_string(),
        certifications: certifications.iter().map(|c| c.to_string()).collect(),
    }
}

/// The four buildings of the reference portfolio
pub fn sample_buildings() -> Vec<Building> {
    vec![
        Building {
            id: 1,
            name: "Gate District".to_string(),
            lat: 25.2285,
            lng: 55.2830,
            occupancy: 92.0,
            asset_value: 450.0,
            roi: 8.2,
            esg: esg(85, 88, 82, 84, 180.0, "A-", "B+", "A", &["LEED Gold", "WELL Gold"]),
        },
        Building {
            id: 2,
            name: "Index Tower".to_string(),
            lat: 25.2290,
            lng: 55.2825,
            occupancy: 85.0,
            asset_value: 380.0,
            roi: 7.5,
            esg: esg(78, 75, 80, 82, 210.0, "B+", "B", "B+", &["LEED Silver"]),
        },
        Building {
            id: 3,
            name: "Liberty House".to_string(),
            lat: 25.2275,
            lng: 55.2835,
            occupancy: 78.0,
            asset_value: 320.0,
            roi: 6.8,
            esg: esg(72, 68, 75, 76, 245.0, "B-", "C+", "B-", &["BREEAM Good"]),
        },
        Building {
            id: 4,
            name: "Central Park Towers".to_string(),
            lat: 25.2295,
            lng: 55.2820,
            occupancy: 94.0,
            asset_value: 520.0,
            roi: 9.1,
            esg: esg(
                88,
                90,
                85,
                87,
                150.0,
                "A",
                "A-",
                "A+",
                &["LEED Platinum", "WELL Platinum"],
            ),
        },
    ]
}

/// The five active tenants
pub fn sample_tenants() -> Vec<Tenant> {
    vec![
        Tenant {
            id: 1,
            name: "Emirates NBD".to_string(),
            sector: "Banking".to_string(),
            lease_end: date(2026, 12, 31),
            churn_risk: ChurnRisk::Low,
            revenue: 45.2,
        },
        Tenant {
            id: 2,
            name: "ADCB Securities".to_string(),
            sector: "Financial Services".to_string(),
            lease_end: date(2025, 8, 15),
            churn_risk: ChurnRisk::Medium,
            revenue: 32.1,
        },
        Tenant {
            id: 3,
            name: "Mashreq Bank".to_string(),
            sector: "Banking".to_string(),
            lease_end: date(2027, 3, 20),
            churn_risk: ChurnRisk::Low,
            revenue: 38.7,
        },
        Tenant {
            id: 4,
            name: "Accenture MENA".to_string(),
            sector: "Consulting".to_string(),
            lease_end: date(2025, 11, 30),
            churn_risk: ChurnRisk::High,
            revenue: 28.5,
        },
        Tenant {
            id: 5,
            name: "PwC Middle East".to_string(),
            sector: "Professional Services".to_string(),
            lease_end: date(2026, 6, 15),
            churn_risk: ChurnRisk::Low,
            revenue: 41.3,
        },
    ]
}

/// Compliance documents across the portfolio
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document {
            id: 1,
            name: "Gate District - Fire Safety Certificate".to_string(),
            kind: DocumentKind::Safety,
            building: "Gate District".to_string(),
            expiry_date: date(2025, 12, 15),
            days_to_expiry: 198,
        },
        Document {
            id: 2,
            name: "Index Tower - Insurance Policy".to_string(),
            kind: DocumentKind::Insurance,
            building: "Index Tower".to_string(),
            expiry_date: date(2025, 4, 20),
            days_to_expiry: -41,
        },
        Document {
            id: 3,
            name: "Emirates NBD - Lease Agreement".to_string(),
            kind: DocumentKind::Lease,
            building: "Gate District".to_string(),
            expiry_date: date(2026, 12, 31),
            days_to_expiry: 579,
        },
        Document {
            id: 4,
            name: "Liberty House - ESG Certificate".to_string(),
            kind: DocumentKind::Esg,
            building: "Liberty House".to_string(),
            expiry_date: date(2025, 7, 10),
            days_to_expiry: 40,
        },
        Document {
            id: 5,
            name: "Central Park - Building Permit".to_string(),
            kind: DocumentKind::Regulatory,
            building: "Central Park Towers".to_string(),
            expiry_date: date(2027, 3, 25),
            days_to_expiry: 933,
        },
    ]
}

/// Open and recent maintenance requests
pub fn sample_requests() -> Vec<MaintenanceRequest> {
    vec![
        MaintenanceRequest {
            id: 1,
            building: "Gate District".to_string(),
            unit: "1204".to_string(),
            issue: "HVAC Malfunction".to_string(),
            priority: RequestPriority::High,
            status: RequestStatus::Open,
            date: date(2025, 5, 15),
            assignee: "Technical Team".to_string(),
        },
        MaintenanceRequest {
            id: 2,
            building: "Index Tower".to_string(),
            unit: "3305".to_string(),
            issue: "Plumbing Leak".to_string(),
            priority: RequestPriority::Critical,
            status: RequestStatus::InProgress,
            date: date(2025, 5, 14),
            assignee: "Plumbing Contractor".to_string(),
        },
        MaintenanceRequest {
            id: 3,
            building: "Liberty House".to_string(),
            unit: "905".to_string(),
            issue: "Electrical Outlet Failure".to_string(),
            priority: RequestPriority::Medium,
            status: RequestStatus::Open,
            date: date(2025, 5, 13),
            assignee: "Electrical Team".to_string(),
        },
        MaintenanceRequest {
            id: 4,
            building: "Central Park Towers".to_string(),
            unit: "2210".to_string(),
            issue: "Elevator Maintenance".to_string(),
            priority: RequestPriority::Low,
            status: RequestStatus::Scheduled,
            date: date(2025, 5, 20),
            assignee: "Elevator Services Inc.".to_string(),
        },
        MaintenanceRequest {
            id: 5,
            building: "Gate District".to_string(),
            unit: "1510".to_string(),
            issue: "Window Seal Damage".to_string(),
            priority: RequestPriority::Medium,
            status: RequestStatus::Open,
            date: date(2025, 5, 12),
            assignee: "Unassigned".to_string(),
        },
    ]
}

fn forecast_point(
    month: &str,
    actual: Option<f64>,
    predicted: f64,
    optimistic: f64,
    pessimistic: f64,
    lower: f64,
    upper: f64,
    market: f64,
) -> ForecastPoint {
    ForecastPoint {
        month: month.to_string(),
        actual,
        predicted,
        optimistic,
        pessimistic,
        lower_bound: lower,
        upper_bound: upper,
        market_avg: market,
    }
}

/// The twelve-month revenue baseline; actuals stop after June
pub fn sample_forecast() -> Vec<ForecastPoint> {
    vec![
        forecast_point("Jan 2025", Some(245.7), 250.2, 255.3, 245.1, 242.5, 258.0, 240.5),
        forecast_point("Feb 2025", Some(248.1), 252.8, 258.9, 246.7, 245.0, 260.6, 242.3),
        forecast_point("Mar 2025", Some(251.3), 255.1, 262.4, 248.0, 247.2, 263.0, 244.8),
        forecast_point("Apr 2025", Some(254.8), 258.4, 266.1, 250.9, 250.1, 266.7, 247.2),
        forecast_point("May 2025", Some(257.2), 261.9, 270.5, 253.2, 253.5, 270.3, 249.5),
        forecast_point("Jun 2025", Some(260.1), 265.3, 274.8, 255.8, 256.8, 273.8, 251.9),
        forecast_point("Jul 2025", None, 269.2, 279.6, 258.8, 260.1, 278.3, 254.4),
        forecast_point("Aug 2025", None, 273.5, 284.9, 262.1, 263.7, 283.3, 257.0),
        forecast_point("Sep 2025", None, 278.1, 290.5, 265.7, 267.5, 288.7, 259.6),
        forecast_point("Oct 2025", None, 283.2, 296.4, 269.8, 271.6, 294.8, 262.2),
        forecast_point("Nov 2025", None, 288.7, 302.8, 274.3, 276.0, 301.4, 264.8),
        forecast_point("Dec 2025", None, 294.5, 309.7, 279.2, 280.7, 308.3, 267.5),
    ]
}

/// Seed notifications for the inbox
pub fn sample_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            kind: NotificationKind::Alert,
            title: "Insurance Policy Expired".to_string(),
            message: "Index Tower insurance needs renewal".to_string(),
            time: "10 minutes ago".to_string(),
            read: false,
        },
        Notification {
            id: 2,
            kind: NotificationKind::Warning,
            title: "High Churn Risk Alert".to_string(),
            message: "Accenture MENA lease expiring soon".to_string(),
            time: "1 hour ago".to_string(),
            read: false,
        },
        Notification {
            id: 3,
            kind: NotificationKind::Info,
            title: "Maintenance Request Updated".to_string(),
            message: "HVAC repair in Gate District scheduled".to_string(),
            time: "3 hours ago".to_string(),
            read: true,
        },
        Notification {
            id: 4,
            kind: NotificationKind::Success,
            title: "ESG Score Improved".to_string(),
            message: "Liberty House score increased by 5 points".to_string(),
            time: "1 day ago".to_string(),
            read: true,
        },
        Notification {
            id: 5,
            kind: NotificationKind::Alert,
            title: "Fire Safety Certificate Expiring".to_string(),
            message: "Central Park Towers certificate expires in 30 days".to_string(),
            time: "2 days ago".to_string(),
            read: true,
        },
    ]
}

/// Portfolio ESG trajectory, 2020 through 2024
pub fn sample_esg_history() -> Vec<EsgHistoryPoint> {
    vec![
        EsgHistoryPoint { year: 2020, esg_score: 68, environmental: 65, social: 70, governance: 72, co2_emissions: 280.0 },
        EsgHistoryPoint { year: 2021, esg_score: 72, environmental: 70, social: 73, governance: 74, co2_emissions: 260.0 },
        EsgHistoryPoint { year: 2022, esg_score: 75, environmental: 74, social: 76, governance: 76, co2_emissions: 240.0 },
        EsgHistoryPoint { year: 2023, esg_score: 78, environmental: 77, social: 78, governance: 79, co2_emissions: 220.0 },
        EsgHistoryPoint { year: 2024, esg_score: 81, environmental: 80, social: 81, governance: 82, co2_emissions: 200.0 },
    ]
}

/// Industry and top-performer reference values
pub fn sample_benchmarks() -> Benchmarks {
    Benchmarks {
        occupancy: MetricBenchmark {
            industry: 82.0,
            top_performer: 95.0,
        },
        roi: MetricBenchmark {
            industry: 7.2,
            top_performer: 9.5,
        },
        esg_score: MetricBenchmark {
            industry: 75.0,
            top_performer: 90.0,
        },
    }
}

/// The complete reference portfolio
pub fn sample_portfolio() -> Portfolio {
    Portfolio {
        buildings: sample_buildings(),
        tenants: sample_tenants(),
        documents: sample_documents(),
        requests: sample_requests(),
        forecast: sample_forecast(),
        notifications: sample_notifications(),
        esg_history: sample_esg_history(),
        benchmarks: sample_benchmarks(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocumentStatus;
    use crate::portfolio::compliance::derive_status;

    #[test]
    fn test_dataset_shape() {
        let portfolio = sample_portfolio();
        assert_eq!(portfolio.buildings.len(), 4);
        assert_eq!(portfolio.tenants.len(), 5);
        assert_eq!(portfolio.documents.len(), 5);
        assert_eq!(portfolio.requests.len(), 5);
        assert_eq!(portfolio.forecast.len(), 12);
        assert_eq!(portfolio.notifications.len(), 5);
    }

    #[test]
    fn test_document_statuses_match_derivation() {
        // The derived statuses reproduce the published sample labels
        let docs = sample_documents();
        assert_eq!(derive_status(docs[0].days_to_expiry), DocumentStatus::Valid);
        assert_eq!(derive_status(docs[1].days_to_expiry), DocumentStatus::Expired);
        assert_eq!(derive_status(docs[3].days_to_expiry), DocumentStatus::Upcoming);
    }

    #[test]
    fn test_future_months_have_no_actuals() {
        let forecast = sample_forecast();
        assert!(forecast[..6].iter().all(|p| p.actual.is_some()));
        assert!(forecast[6..].iter().all(|p| p.actual.is_none()));
    }
}

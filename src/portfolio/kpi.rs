//! Portfolio-level aggregation and screening

use serde::{Deserialize, Serialize};

use crate::core::types::{Building, ChurnRisk, Tenant};

/// Headline figures for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub building_count: usize,
    pub tenant_count: usize,
    /// Percent, averaged across buildings
    pub average_occupancy: f64,
    /// Millions per month, summed over tenants
    pub total_rental_income: f64,
    /// Millions, summed over buildings
    pub total_asset_value: f64,
    pub average_esg_score: f64,
    pub high_churn_risk_tenants: usize,
}

/// Compute the dashboard summary
pub fn summarize(buildings: &[Building], tenants: &[Tenant]) -> PortfolioSummary {
    PortfolioSummary {
        building_count: buildings.len(),
        tenant_count: tenants.len(),
        average_occupancy: average_occupancy(buildings),
        total_rental_income: total_monthly_revenue(tenants),
        total_asset_value: buildings.iter().map(|b| b.asset_value).sum(),
        average_esg_score: average_esg_score(buildings),
        high_churn_risk_tenants: count_high_churn(tenants),
    }
}

/// Mean occupancy across buildings; zero for an empty portfolio
pub fn average_occupancy(buildings: &[Building]) -> f64 {
    if buildings.is_empty() {
        return 0.0;
    }
    buildings.iter().map(|b| b.occupancy).sum::<f64>() / buildings.len() as f64
}

/// Mean composite ESG score; zero for an empty portfolio
pub fn average_esg_score(buildings: &[Building]) -> f64 {
    if buildings.is_empty() {
        return 0.0;
    }
    buildings.iter().map(|b| b.esg.score as f64).sum::<f64>() / buildings.len() as f64
}

/// Sum of monthly tenant revenue
pub fn total_monthly_revenue(tenants: &[Tenant]) -> f64 {
    tenants.iter().map(|t| t.revenue).sum()
}

/// Number of tenants flagged high churn risk
pub fn count_high_churn(tenants: &[Tenant]) -> usize {
    tenants
        .iter()
        .filter(|t| t.churn_risk == ChurnRisk::High)
        .count()
}

/// Top `limit` buildings by ROI, best first
pub fn top_performers(buildings: &[Building], limit: usize) -> Vec<&Building> {
    let mut ranked: Vec<&Building> = buildings.iter().collect();
    ranked.sort_by(|a, b| b.roi.total_cmp(&a.roi));
    ranked.truncate(limit);
    ranked
}

/// Buildings whose occupancy sits below the alert threshold
pub fn low_occupancy(buildings: &[Building], threshold: f64) -> Vec<&Building> {
    buildings
        .iter()
        .filter(|b| b.occupancy < threshold)
        .collect()
}

/// Buildings whose composite ESG score sits below the improvement threshold
pub fn needs_esg_improvement(buildings: &[Building], threshold: f64) -> Vec<&Building> {
    buildings
        .iter()
        .filter(|b| (b.esg.score as f64) < threshold)
        .collect()
}

/// Geographic window for the map view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

/// Buildings inside the bounding box, inclusive
pub fn within_bounds<'a>(buildings: &'a [Building], bounds: &GeoBounds) -> Vec<&'a Building> {
    buildings
        .iter()
        .filter(|b| {
            (bounds.min_lat..=bounds.max_lat).contains(&b.lat)
                && (bounds.min_lng..=bounds.max_lng).contains(&b.lng)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::EsgProfile;

    fn building(name: &str, occupancy: f64, value: f64, roi: f64, esg: u32) -> Building {
        Building {
            id: 0,
            name: name.to_string(),
            lat: 25.22,
            lng: 55.28,
            occupancy,
            asset_value: value,
            roi,
            esg: EsgProfile {
                score: esg,
                environmental: esg,
                social: esg,
                governance: esg,
                co2_emissions: 200.0,
                energy_grade: "B".to_string(),
                water_grade: "B".to_string(),
                waste_grade: "B".to_string(),
                certifications: vec![],
            },
        }
    }

    #[test]
    fn test_summary_averages() {
        let buildings = vec![
            building("A", 92.0, 450.0, 8.2, 85),
            building("B", 85.0, 380.0, 7.5, 78),
        ];
        let summary = summarize(&buildings, &[]);
        assert!((summary.average_occupancy - 88.5).abs() < 1e-9);
        assert!((summary.total_asset_value - 830.0).abs() < 1e-9);
        assert!((summary.average_esg_score - 81.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_portfolio_is_zeroed() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.average_occupancy, 0.0);
        assert_eq!(summary.average_esg_score, 0.0);
    }

    #[test]
    fn test_top_performers_ranked_by_roi() {
        let buildings = vec![
            building("A", 92.0, 450.0, 8.2, 85),
            building("B", 94.0, 520.0, 9.1, 88),
            building("C", 78.0, 320.0, 6.8, 72),
        ];
        let top = top_performers(&buildings, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "B");
        assert_eq!(top[1].name, "A");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let buildings = vec![building("A", 92.0, 450.0, 8.2, 85)];
        let bounds = GeoBounds {
            min_lat: 25.22,
            max_lat: 25.23,
            min_lng: 55.28,
            max_lng: 55.29,
        };
        assert_eq!(within_bounds(&buildings, &bounds).len(), 1);
    }
}

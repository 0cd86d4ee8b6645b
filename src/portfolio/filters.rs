//! List view queries
//!
//! Each view applies a case-insensitive substring search AND-combined with
//! exact-match category filters, then an optional stable sort. All queries
//! are pure and order-preserving; ties keep the input order.

use serde::{Deserialize, Serialize};

use super::compliance::derive_status;
use crate::core::types::{
    Document, DocumentKind, DocumentStatus, MaintenanceRequest, RequestPriority, RequestStatus,
    Tenant,
};

/// Case-insensitive substring match; an empty needle matches everything
fn matches_search(haystacks: &[&str], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    haystacks
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Sort orders available on the tenant list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TenantSort {
    /// Alphabetical by name
    #[default]
    Name,
    /// Descending by monthly revenue
    Revenue,
    /// Ascending by lease end date
    LeaseEnd,
}

impl std::str::FromStr for TenantSort {
    type Err = crate::core::errors::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(TenantSort::Name),
            "revenue" => Ok(TenantSort::Revenue),
            "lease-end" | "leaseend" | "lease_end" => Ok(TenantSort::LeaseEnd),
            other => Err(crate::core::errors::Error::invalid_input(format!(
                "unknown sort order: {other}"
            ))),
        }
    }
}

/// Query over the tenant list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TenantQuery {
    pub search: String,
    pub sort: TenantSort,
}

impl TenantQuery {
    /// Filter by name/sector search, then apply the stable sort
    pub fn apply(&self, tenants: &[Tenant]) -> Vec<Tenant> {
        let mut matched: Vec<Tenant> = tenants
            .iter()
            .filter(|t| matches_search(&[&t.name, &t.sector], &self.search))
            .cloned()
            .collect();

        match self.sort {
            TenantSort::Name => matched.sort_by(|a, b| a.name.cmp(&b.name)),
            TenantSort::Revenue => matched.sort_by(|a, b| b.revenue.total_cmp(&a.revenue)),
            TenantSort::LeaseEnd => matched.sort_by(|a, b| a.lease_end.cmp(&b.lease_end)),
        }

        matched
    }
}

/// Query over the compliance document list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentQuery {
    pub search: String,
    pub status: Option<DocumentStatus>,
    pub kind: Option<DocumentKind>,
    /// Exact building name
    pub building: Option<String>,
}

impl DocumentQuery {
    /// Filter by name/building search AND status/kind/building equality
    pub fn apply(&self, documents: &[Document]) -> Vec<Document> {
        documents
            .iter()
            .filter(|d| matches_search(&[&d.name, &d.building], &self.search))
            .filter(|d| {
                self.status
                    .map_or(true, |status| derive_status(d.days_to_expiry) == status)
            })
            .filter(|d| self.kind.map_or(true, |kind| d.kind == kind))
            .filter(|d| {
                self.building
                    .as_ref()
                    .map_or(true, |building| &d.building == building)
            })
            .cloned()
            .collect()
    }
}

/// Query over the maintenance request list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaintenanceQuery {
    pub search: String,
    pub priority: Option<RequestPriority>,
    pub status: Option<RequestStatus>,
}

impl MaintenanceQuery {
    /// Filter by building/unit/issue search AND priority/status equality
    pub fn apply(&self, requests: &[MaintenanceRequest]) -> Vec<MaintenanceRequest> {
        requests
            .iter()
            .filter(|r| matches_search(&[&r.building, &r.unit, &r.issue], &self.search))
            .filter(|r| self.priority.map_or(true, |p| r.priority == p))
            .filter(|r| self.status.map_or(true, |s| r.status == s))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tenant(id: u32, name: &str, sector: &str, revenue: f64, lease_end: &str) -> Tenant {
        Tenant {
            id,
            name: name.to_string(),
            sector: sector.to_string(),
            lease_end: lease_end.parse::<NaiveDate>().unwrap(),
            churn_risk: crate::core::types::ChurnRisk::Low,
            revenue,
        }
    }

    fn sample_tenants() -> Vec<Tenant> {
        vec![
            tenant(1, "Emirates NBD", "Banking", 45.2, "2026-12-31"),
            tenant(2, "ADCB Securities", "Financial Services", 32.1, "2025-08-15"),
            tenant(3, "Mashreq Bank", "Banking", 38.7, "2027-03-20"),
            tenant(4, "Accenture MENA", "Consulting", 28.5, "2025-11-30"),
            tenant(5, "PwC Middle East", "Professional Services", 41.3, "2026-06-15"),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let query = TenantQuery {
            search: "bank".to_string(),
            sort: TenantSort::Name,
        };
        let result = query.apply(&sample_tenants());
        // "Banking" sector matches for two tenants, "Mashreq Bank" name also matches
        let names: Vec<&str> = result.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Emirates NBD", "Mashreq Bank"]);
    }

    #[test]
    fn test_revenue_sort_descending() {
        let query = TenantQuery {
            search: String::new(),
            sort: TenantSort::Revenue,
        };
        let result = query.apply(&sample_tenants());
        let names: Vec<&str> = result.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Emirates NBD",
                "PwC Middle East",
                "Mashreq Bank",
                "ADCB Securities",
                "Accenture MENA"
            ]
        );
    }

    #[test]
    fn test_lease_end_sort_ascending() {
        let query = TenantQuery {
            search: String::new(),
            sort: TenantSort::LeaseEnd,
        };
        let result = query.apply(&sample_tenants());
        assert_eq!(result[0].name, "ADCB Securities"); // 2025-08-15
        assert_eq!(result[4].name, "Mashreq Bank"); // 2027-03-20
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let query = TenantQuery {
            search: "e".to_string(),
            sort: TenantSort::Revenue,
        };
        let once = query.apply(&sample_tenants());
        let twice = query.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_search_matches_all() {
        assert!(matches_search(&["anything"], ""));
    }
}

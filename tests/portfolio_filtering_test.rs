// Integration tests for the list view queries over the sample portfolio

use estatemap::core::types::{DocumentStatus, RequestPriority, RequestStatus};
use estatemap::data;
use estatemap::portfolio::filters::{DocumentQuery, MaintenanceQuery, TenantQuery, TenantSort};
use proptest::prelude::*;

#[test]
fn test_revenue_sort_order_on_sample_tenants() {
    let query = TenantQuery {
        search: String::new(),
        sort: TenantSort::Revenue,
    };
    let tenants = query.apply(&data::sample_tenants());

    let names: Vec<&str> = tenants.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Emirates NBD",     // 45.2
            "PwC Middle East",  // 41.3
            "Mashreq Bank",     // 38.7
            "ADCB Securities",  // 32.1
            "Accenture MENA",   // 28.5
        ]
    );
}

#[test]
fn test_tenant_search_covers_sector() {
    let query = TenantQuery {
        search: "consult".to_string(),
        sort: TenantSort::Name,
    };
    let tenants = query.apply(&data::sample_tenants());
    assert_eq!(tenants.len(), 1);
    assert_eq!(tenants[0].name, "Accenture MENA");
}

#[test]
fn test_document_status_filter_uses_derived_status() {
    let query = DocumentQuery {
        status: Some(DocumentStatus::Expired),
        ..Default::default()
    };
    let documents = query.apply(&data::sample_documents());
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].name, "Index Tower - Insurance Policy");
    assert_eq!(documents[0].days_to_expiry, -41);
}

#[test]
fn test_document_filters_combine_with_and() {
    let query = DocumentQuery {
        search: "gate".to_string(),
        building: Some("Gate District".to_string()),
        status: Some(DocumentStatus::Valid),
        ..Default::default()
    };
    let documents = query.apply(&data::sample_documents());
    // Fire safety certificate and the Emirates NBD lease both qualify
    assert_eq!(documents.len(), 2);
}

#[test]
fn test_document_building_filter_is_exact() {
    let query = DocumentQuery {
        building: Some("gate district".to_string()),
        ..Default::default()
    };
    assert!(query.apply(&data::sample_documents()).is_empty());
}

#[test]
fn test_maintenance_filters() {
    let query = MaintenanceQuery {
        priority: Some(RequestPriority::Medium),
        status: Some(RequestStatus::Open),
        ..Default::default()
    };
    let requests = query.apply(&data::sample_requests());

    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.priority == RequestPriority::Medium));
    assert!(requests.iter().all(|r| r.status == RequestStatus::Open));
}

#[test]
fn test_maintenance_search_covers_unit_and_issue() {
    let by_unit = MaintenanceQuery {
        search: "3305".to_string(),
        ..Default::default()
    };
    assert_eq!(by_unit.apply(&data::sample_requests()).len(), 1);

    let by_issue = MaintenanceQuery {
        search: "hvac".to_string(),
        ..Default::default()
    };
    assert_eq!(by_issue.apply(&data::sample_requests()).len(), 1);
}

#[test]
fn test_unmatched_search_yields_empty() {
    let query = TenantQuery {
        search: "no such tenant".to_string(),
        sort: TenantSort::Name,
    };
    assert!(query.apply(&data::sample_tenants()).is_empty());
}

proptest! {
    // Applying the same query twice equals applying it once
    #[test]
    fn prop_tenant_query_is_idempotent(search in "[a-zA-Z ]{0,12}") {
        for sort in [TenantSort::Name, TenantSort::Revenue, TenantSort::LeaseEnd] {
            let query = TenantQuery { search: search.clone(), sort };
            let once = query.apply(&data::sample_tenants());
            let twice = query.apply(&once);
            prop_assert_eq!(once, twice);
        }
    }

    // Search never invents records
    #[test]
    fn prop_search_result_is_subset(search in "[a-zA-Z0-9 ]{0,12}") {
        let all = data::sample_requests();
        let query = MaintenanceQuery { search, ..Default::default() };
        let matched = query.apply(&all);
        prop_assert!(matched.len() <= all.len());
        for request in &matched {
            prop_assert!(all.contains(request));
        }
    }
}

//! End-to-end scenarios over the privilege form calculator: roles and
//! features come in as JSON, the catalog is derived, and the calculator is
//! queried the way a role-editing UI would.

use warden_features::Feature;
use warden_privileges::{PrivilegeCatalog, PrivilegeFormCalculator, Role};

fn discover() -> Feature {
    serde_json::from_value(serde_json::json!({
        "id": "discover",
        "name": "Discover",
        "app": ["discover"],
        "privileges": [
            {
                "id": "all",
                "name": "All",
                "saved_object": { "all": ["search"] },
                "ui": ["show", "save"],
                "app": ["discover"]
            },
            {
                "id": "read",
                "name": "Read",
                "saved_object": { "read": ["search"] },
                "ui": ["show"],
                "app": ["discover"]
            }
        ],
        "sub_features": [
            {
                "name": "Saved searches",
                "groups": [
                    {
                        "group_type": "independent",
                        "privileges": [
                            {
                                "id": "store_search",
                                "name": "Store searches",
                                "saved_object": { "all": ["stored-search"] },
                                "ui": ["store"],
                                "include_in": "all"
                            },
                            {
                                "id": "generate_report",
                                "name": "Generate reports",
                                "api": ["reporting"],
                                "ui": ["report"],
                                "include_in": "none"
                            }
                        ]
                    }
                ]
            }
        ]
    }))
    .unwrap()
}

fn catalog() -> PrivilegeCatalog {
    PrivilegeCatalog::from_features(&[discover()])
}

fn parse_role(value: serde_json::Value) -> Role {
    serde_json::from_value(value).unwrap()
}

/// A space entry customized with `minimal_all` plus a sub-feature privilege
/// that the full primary already implies. The UI should show `all` as
/// chosen and report no genuine customization.
#[test]
fn test_minimal_primary_with_implied_sub_feature() {
    let catalog = catalog();
    let role = parse_role(serde_json::json!({
        "entries": [
            { "spaces": ["*"], "base": ["read"] },
            {
                "spaces": ["marketing"],
                "feature": { "discover": ["minimal_all", "store_search"] }
            }
        ]
    }));
    let calculator = PrivilegeFormCalculator::new(&catalog, &role);

    let effective = calculator
        .effective_primary_feature_privilege("discover", 1)
        .unwrap()
        .unwrap();
    assert_eq!(effective.id(), "minimal_all");

    assert_eq!(
        calculator
            .displayed_primary_feature_privilege_id("discover", 1)
            .unwrap(),
        Some("all")
    );

    // `store_search` is folded into the composed `all`, so selecting it
    // alongside `minimal_all` is not genuine customization.
    assert!(!calculator
        .has_non_superseded_sub_feature_privileges("discover", 1)
        .unwrap());

    // The global `read` base grants nothing the space assignment lacks.
    assert!(!calculator
        .has_superseded_inherited_privileges(1)
        .unwrap());
}

#[test]
fn test_global_all_supersedes_a_space_read_assignment() {
    let catalog = catalog();
    let role = parse_role(serde_json::json!({
        "entries": [
            { "spaces": ["*"], "base": ["all"] },
            { "spaces": ["marketing"], "feature": { "discover": ["read"] } }
        ]
    }));
    let calculator = PrivilegeFormCalculator::new(&catalog, &role);

    assert!(calculator.has_superseded_inherited_privileges(1).unwrap());
    // The global entry itself can never be superseded.
    assert!(!calculator.has_superseded_inherited_privileges(0).unwrap());
}

#[test]
fn test_global_read_does_not_supersede_a_space_all_assignment() {
    let catalog = catalog();
    let role = parse_role(serde_json::json!({
        "entries": [
            { "spaces": ["*"], "base": ["read"] },
            { "spaces": ["marketing"], "feature": { "discover": ["all"] } }
        ]
    }));
    let calculator = PrivilegeFormCalculator::new(&catalog, &role);

    assert!(!calculator.has_superseded_inherited_privileges(1).unwrap());
}

#[test]
fn test_customization_round_trip_preserves_granted_access() {
    let catalog = catalog();
    let role = parse_role(serde_json::json!({
        "entries": [
            { "spaces": ["marketing"], "feature": { "discover": ["all"] } }
        ]
    }));
    let calculator = PrivilegeFormCalculator::new(&catalog, &role);

    let customized = calculator
        .update_selected_feature_privileges_for_customization("discover", 0, true)
        .unwrap();
    assert_eq!(customized, ["minimal_all", "store_search"]);

    let role = parse_role(serde_json::json!({
        "entries": [
            {
                "spaces": ["marketing"],
                "feature": { "discover": ["minimal_all", "store_search"] }
            }
        ]
    }));
    let calculator = PrivilegeFormCalculator::new(&catalog, &role);
    let restored = calculator
        .update_selected_feature_privileges_for_customization("discover", 0, false)
        .unwrap();
    assert_eq!(restored, ["all"]);
}

#[test]
fn test_grants_are_explained_with_their_sources() {
    let catalog = catalog();
    let role = parse_role(serde_json::json!({
        "entries": [
            { "spaces": ["*"], "base": ["all"] },
            { "spaces": ["marketing"] }
        ]
    }));
    let calculator = PrivilegeFormCalculator::new(&catalog, &role);

    let explanation = calculator
        .explain_primary_feature_privilege("discover", 1)
        .unwrap()
        .unwrap();
    assert_eq!(explanation.privilege_id, "all");
    assert!(explanation.is_granted);
    assert!(explanation.is_inherited);
    assert!(explanation.grant_sources.space.is_empty());
    assert_eq!(explanation.grant_sources.global.len(), 1);

    // Nothing to explain for a feature the role never touches and no
    // global grant would cover.
    let role = parse_role(serde_json::json!({
        "entries": [{ "spaces": ["marketing"] }]
    }));
    let calculator = PrivilegeFormCalculator::new(&catalog, &role);
    assert!(calculator
        .explain_primary_feature_privilege("discover", 0)
        .unwrap()
        .is_none());
}

#[test]
fn test_stale_privilege_ids_are_dropped_during_resolution() {
    let catalog = catalog();
    let role = parse_role(serde_json::json!({
        "entries": [
            {
                "spaces": ["marketing"],
                "base": ["superuser"],
                "feature": { "discover": ["all", "retired_privilege"] }
            }
        ]
    }));

    let collection = catalog
        .collection_from_role_entries(&role.entries)
        .unwrap();
    let ids: Vec<&str> = collection
        .privileges()
        .iter()
        .map(|privilege| privilege.id())
        .collect();
    assert_eq!(ids, ["all"]);
}

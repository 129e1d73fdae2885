//! Transitions on the selected-privilege-id lists stored in a role entry.
//!
//! These are pure functions from the current selection to the next one. The
//! mutually-exclusive invariant lives here: the group transition always
//! strips every member before adding the chosen one, so no reachable
//! selection contains two members of the same group.

use crate::{PrivilegeError, PrivilegeResult, SecuredSubFeatureGroup};

/// Toggle an independent sub-feature privilege on or off.
pub fn toggle_independent_sub_feature_privilege(
    selected: &[String],
    privilege_id: &str,
    granted: bool,
) -> Vec<String> {
    let mut next: Vec<String> = selected
        .iter()
        .filter(|id| id.as_str() != privilege_id)
        .cloned()
        .collect();
    if granted {
        next.push(privilege_id.to_string());
    }
    next
}

/// Replace whatever member of a mutually-exclusive group is selected with
/// `choice`, or clear the group with `None`.
///
/// A choice that is not a member of the group is a programmer error.
pub fn select_mutually_exclusive_sub_feature_privilege(
    selected: &[String],
    group: &SecuredSubFeatureGroup,
    choice: Option<&str>,
) -> PrivilegeResult<Vec<String>> {
    if let Some(choice) = choice {
        if !group.contains(choice) {
            return Err(PrivilegeError::UnknownGroupMember {
                privilege_id: choice.to_string(),
            });
        }
    }

    let mut next: Vec<String> = selected
        .iter()
        .filter(|id| !group.contains(id))
        .cloned()
        .collect();
    next.extend(choice.map(str::to_string));
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrivilegeCatalog;
    use warden_features::{
        Feature, IncludeIn, PrivilegeDeclaration, SubFeature, SubFeatureGroup,
        SubFeatureGroupType, SubFeaturePrivilegeDeclaration,
    };

    fn selection(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn alerts_group() -> SecuredSubFeatureGroup {
        let feature = Feature {
            id: "discover".into(),
            name: "Discover".into(),
            app: vec![],
            privileges: vec![PrivilegeDeclaration::new("all", "All")],
            sub_features: vec![SubFeature {
                name: "Alerts".into(),
                groups: vec![SubFeatureGroup {
                    group_type: SubFeatureGroupType::MutuallyExclusive,
                    privileges: vec![
                        SubFeaturePrivilegeDeclaration {
                            declaration: PrivilegeDeclaration::new("alerts_all", "Alerts: all"),
                            include_in: IncludeIn::None,
                        },
                        SubFeaturePrivilegeDeclaration {
                            declaration: PrivilegeDeclaration::new("alerts_read", "Alerts: read"),
                            include_in: IncludeIn::None,
                        },
                    ],
                }],
            }],
        };
        let catalog = PrivilegeCatalog::from_features(&[feature]);
        catalog.secured_feature("discover").unwrap().sub_features()[0].groups()[0].clone()
    }

    #[test]
    fn it_toggles_independent_privileges() {
        let next =
            toggle_independent_sub_feature_privilege(&selection(&["minimal_all"]), "report", true);
        assert_eq!(next, ["minimal_all", "report"]);

        let next = toggle_independent_sub_feature_privilege(&next, "report", false);
        assert_eq!(next, ["minimal_all"]);
    }

    #[test]
    fn it_does_not_duplicate_an_already_selected_privilege() {
        let next = toggle_independent_sub_feature_privilege(
            &selection(&["minimal_all", "report"]),
            "report",
            true,
        );
        assert_eq!(next, ["minimal_all", "report"]);
    }

    #[test]
    fn it_never_selects_two_members_of_an_exclusive_group() {
        let group = alerts_group();
        let next = select_mutually_exclusive_sub_feature_privilege(
            &selection(&["minimal_all", "alerts_all"]),
            &group,
            Some("alerts_read"),
        )
        .unwrap();
        assert_eq!(next, ["minimal_all", "alerts_read"]);
    }

    #[test]
    fn it_clears_the_group_when_no_member_is_chosen() {
        let group = alerts_group();
        let next = select_mutually_exclusive_sub_feature_privilege(
            &selection(&["minimal_all", "alerts_read"]),
            &group,
            None,
        )
        .unwrap();
        assert_eq!(next, ["minimal_all"]);
    }

    #[test]
    fn it_rejects_a_choice_outside_the_group() {
        let group = alerts_group();
        let error = select_mutually_exclusive_sub_feature_privilege(
            &selection(&[]),
            &group,
            Some("ghost"),
        )
        .unwrap_err();
        assert_eq!(
            error,
            PrivilegeError::UnknownGroupMember {
                privilege_id: "ghost".into()
            }
        );
    }
}

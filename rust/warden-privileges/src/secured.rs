use indexmap::IndexMap;
use warden_features::{Feature, SubFeatureGroupType};

use crate::{Action, Privilege, PrivilegeKind, minimal_privilege_id};

/// A feature as seen by the privilege engine: its declared privileges
/// resolved into [`Privilege`] values with concrete action lists.
///
/// Ordering is preserved end to end. Primaries keep their declaration
/// (precedence) order, and sub-feature privileges keep the depth-first
/// sub-feature, group, member order; both orders feed the tie-break rules
/// of the form calculator.
#[derive(Debug, Clone)]
pub struct SecuredFeature {
    id: String,
    name: String,
    primary: Vec<Privilege>,
    minimal_primary: Vec<Privilege>,
    sub_features: Vec<SecuredSubFeature>,
}

/// A sub-feature with resolved privilege groups.
#[derive(Debug, Clone)]
pub struct SecuredSubFeature {
    name: String,
    groups: Vec<SecuredSubFeatureGroup>,
}

/// A resolved sub-feature privilege group.
#[derive(Debug, Clone)]
pub struct SecuredSubFeatureGroup {
    group_type: SubFeatureGroupType,
    privileges: Vec<Privilege>,
}

impl SecuredFeature {
    pub(crate) fn new(
        feature: &Feature,
        raw_feature: Option<&IndexMap<String, Vec<Action>>>,
    ) -> Self {
        let actions_of = |privilege_id: &str| {
            raw_feature
                .and_then(|privileges| privileges.get(privilege_id))
                .cloned()
                .unwrap_or_default()
        };

        let primary = feature
            .privileges
            .iter()
            .map(|declaration| {
                Privilege::new(
                    PrivilegeKind::Feature,
                    &declaration.id,
                    actions_of(&declaration.id),
                )
            })
            .collect();

        let minimal_primary = feature
            .privileges
            .iter()
            .map(|declaration| {
                let minimal_id = minimal_privilege_id(&declaration.id);
                let actions = actions_of(&minimal_id);
                Privilege::new(PrivilegeKind::Feature, minimal_id, actions)
            })
            .collect();

        let sub_features = feature
            .sub_features
            .iter()
            .map(|sub_feature| SecuredSubFeature {
                name: sub_feature.name.clone(),
                groups: sub_feature
                    .groups
                    .iter()
                    .map(|group| SecuredSubFeatureGroup {
                        group_type: group.group_type,
                        privileges: group
                            .privileges
                            .iter()
                            .map(|member| {
                                Privilege::new(
                                    PrivilegeKind::SubFeature,
                                    &member.declaration.id,
                                    actions_of(&member.declaration.id),
                                )
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            id: feature.id.clone(),
            name: feature.name.clone(),
            primary,
            minimal_primary,
            sub_features,
        }
    }

    /// The feature id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The feature display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Primary privileges in precedence order.
    pub fn primary_feature_privileges(&self) -> &[Privilege] {
        &self.primary
    }

    /// Minimal variants of the primaries, in the same order.
    pub fn minimal_primary_feature_privileges(&self) -> &[Privilege] {
        &self.minimal_primary
    }

    /// Primaries followed by their minimal variants.
    ///
    /// This is the scan order for effective-primary resolution: full
    /// primaries come first so a grant is explained by the full privilege
    /// whenever both would match.
    pub fn primary_and_minimal_feature_privileges(&self) -> impl Iterator<Item = &Privilege> {
        self.primary.iter().chain(self.minimal_primary.iter())
    }

    /// The sub-features in declaration order.
    pub fn sub_features(&self) -> &[SecuredSubFeature] {
        &self.sub_features
    }

    /// Sub-feature privileges in depth-first declaration order.
    pub fn sub_feature_privileges(&self) -> impl Iterator<Item = &Privilege> {
        self.sub_features
            .iter()
            .flat_map(|sub_feature| sub_feature.groups.iter())
            .flat_map(|group| group.privileges.iter())
    }

    /// Flattened union of primary, minimal-primary and sub-feature
    /// privileges.
    pub fn all_privileges(&self) -> impl Iterator<Item = &Privilege> {
        self.primary_and_minimal_feature_privileges()
            .chain(self.sub_feature_privileges())
    }
}

impl SecuredSubFeature {
    /// The sub-feature display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The privilege groups in declaration order.
    pub fn groups(&self) -> &[SecuredSubFeatureGroup] {
        &self.groups
    }
}

impl SecuredSubFeatureGroup {
    /// The combination rule for this group.
    pub fn group_type(&self) -> SubFeatureGroupType {
        self.group_type
    }

    /// The member privileges in declaration order.
    pub fn privileges(&self) -> &[Privilege] {
        &self.privileges
    }

    /// Whether the given privilege id belongs to this group.
    pub fn contains(&self, privilege_id: &str) -> bool {
        self.privileges
            .iter()
            .any(|privilege| privilege.id() == privilege_id)
    }
}

use indexmap::IndexMap;
use tracing::debug;
use warden_features::Feature;

use crate::{
    Privilege, PrivilegeCollection, PrivilegeError, PrivilegeKind, PrivilegeResult, RawPrivileges,
    RoleEntry, SecuredFeature, build_raw_privileges,
};

/// The full declared privilege set for one authorization context.
///
/// Built once from raw action maps and feature definitions; read-only
/// afterwards. Every collection and calculator question ultimately resolves
/// against this catalog.
#[derive(Debug, Clone)]
pub struct PrivilegeCatalog {
    global_base: Vec<Privilege>,
    space_base: Vec<Privilege>,
    features: IndexMap<String, SecuredFeature>,
}

impl PrivilegeCatalog {
    /// Build the catalog from raw per-privilege action lists and feature
    /// definitions.
    ///
    /// A declared privilege with no entry in `raw` resolves to an empty
    /// action list rather than an error; the two inputs are expected to be
    /// derived from the same feature set.
    pub fn new(raw: &RawPrivileges, features: &[Feature]) -> Self {
        let global_base = raw
            .global
            .iter()
            .map(|(id, actions)| Privilege::new(PrivilegeKind::Base, id, actions.clone()))
            .collect();
        let space_base = raw
            .space
            .iter()
            .map(|(id, actions)| Privilege::new(PrivilegeKind::Base, id, actions.clone()))
            .collect();

        let features = features
            .iter()
            .map(|feature| {
                (
                    feature.id.clone(),
                    SecuredFeature::new(feature, raw.features.get(&feature.id)),
                )
            })
            .collect();

        Self {
            global_base,
            space_base,
            features,
        }
    }

    /// Build the catalog directly from feature definitions, deriving the
    /// raw action maps along the way.
    pub fn from_features(features: &[Feature]) -> Self {
        Self::new(&build_raw_privileges(features), features)
    }

    /// The base privileges assignable at the scope of `entry`: the global
    /// set for the global entry, the space set otherwise.
    pub fn base_privileges(&self, entry: &RoleEntry) -> &[Privilege] {
        if entry.is_global() {
            &self.global_base
        } else {
            &self.space_base
        }
    }

    /// Look up a feature by id.
    ///
    /// Unknown feature ids indicate that the catalog and the querying code
    /// disagree about the feature set, which cannot be worked around here.
    pub fn secured_feature(&self, feature_id: &str) -> PrivilegeResult<&SecuredFeature> {
        self.features
            .get(feature_id)
            .ok_or_else(|| PrivilegeError::UnknownFeature {
                feature_id: feature_id.to_string(),
            })
    }

    /// All features in registration order.
    pub fn secured_features(&self) -> impl Iterator<Item = &SecuredFeature> {
        self.features.values()
    }

    /// Resolve the assigned privilege ids of the given entries into one
    /// flat collection.
    ///
    /// Privilege ids with no match in the catalog are stale data from an
    /// earlier release: they are dropped, not errors. Feature ids are held
    /// to the stricter standard and fail the resolution.
    pub fn collection_from_role_entries<'e>(
        &self,
        entries: impl IntoIterator<Item = &'e RoleEntry>,
    ) -> PrivilegeResult<PrivilegeCollection> {
        let mut resolved = Vec::new();

        for entry in entries {
            let base_pool = self.base_privileges(entry);
            for privilege_id in &entry.base {
                match base_pool.iter().find(|base| base.id() == privilege_id) {
                    Some(privilege) => resolved.push(privilege.clone()),
                    None => debug!(%privilege_id, "dropping unknown base privilege id"),
                }
            }

            for (feature_id, privilege_ids) in &entry.feature {
                let feature = self.secured_feature(feature_id)?;
                for privilege_id in privilege_ids {
                    match feature
                        .all_privileges()
                        .find(|privilege| privilege.id() == privilege_id)
                    {
                        Some(privilege) => resolved.push(privilege.clone()),
                        None => debug!(
                            %feature_id,
                            %privilege_id,
                            "dropping unknown feature privilege id"
                        ),
                    }
                }
            }
        }

        Ok(PrivilegeCollection::new(resolved))
    }
}

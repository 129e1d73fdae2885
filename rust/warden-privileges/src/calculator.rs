use crate::{
    Privilege, PrivilegeCatalog, PrivilegeError, PrivilegeResult, Role, RoleEntry,
    SecuredSubFeatureGroup, minimal_privilege_id,
};
use itertools::Itertools;

/// How one feature privilege came to be granted at a role entry.
///
/// Ephemeral query output for the role-editing UI; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivilegeExplanation {
    /// The explained privilege id.
    pub privilege_id: String,
    /// Whether the privilege is granted at all.
    pub is_granted: bool,
    /// Whether the grant comes exclusively from the global entry.
    pub is_inherited: bool,
    /// The privileges responsible for the grant.
    pub grant_sources: GrantSources,
}

/// The privileges granting something, split by the scope they come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantSources {
    /// Granting privileges assigned at the global entry.
    pub global: Vec<Privilege>,
    /// Granting privileges assigned at the entry itself.
    pub space: Vec<Privilege>,
}

/// Pure query layer over a role and the privilege catalog.
///
/// The calculator holds no state of its own: every method is a function of
/// `(catalog, role, entry index)` and recomputing after a role mutation
/// yields consistent answers. The entry index identifies which
/// [`RoleEntry`] is being edited, which matters because a space entry can be
/// superseded by the global entry.
#[derive(Debug, Clone, Copy)]
pub struct PrivilegeFormCalculator<'a> {
    catalog: &'a PrivilegeCatalog,
    role: &'a Role,
}

impl<'a> PrivilegeFormCalculator<'a> {
    /// Create a calculator over the given catalog and role.
    pub fn new(catalog: &'a PrivilegeCatalog, role: &'a Role) -> Self {
        Self { catalog, role }
    }

    fn entry(&self, index: usize) -> PrivilegeResult<&'a RoleEntry> {
        self.role
            .entries
            .get(index)
            .ok_or(PrivilegeError::EntryIndexOutOfBounds {
                index,
                len: self.role.entries.len(),
            })
    }

    fn selected_feature_privileges(
        &self,
        feature_id: &str,
        index: usize,
    ) -> PrivilegeResult<&'a [String]> {
        Ok(self.entry(index)?.feature_privileges(feature_id))
    }

    /// The single base privilege assigned at the entry, if any.
    pub fn base_privilege(&self, index: usize) -> PrivilegeResult<Option<&'a Privilege>> {
        let entry = self.entry(index)?;
        Ok(self
            .catalog
            .base_privileges(entry)
            .iter()
            .find(|base| entry.base.iter().any(|id| id == base.id())))
    }

    /// The first primary (or minimal primary) privilege of the feature that
    /// is either explicitly selected at the entry or granted by the entry's
    /// base privilege.
    ///
    /// Full primaries are scanned before their minimal variants, so a grant
    /// is explained by the full primary whenever both would match.
    pub fn effective_primary_feature_privilege(
        &self,
        feature_id: &str,
        index: usize,
    ) -> PrivilegeResult<Option<&'a Privilege>> {
        let feature = self.catalog.secured_feature(feature_id)?;
        let base = self.base_privilege(index)?;
        let selected = self.selected_feature_privileges(feature_id, index)?;

        Ok(feature
            .primary_and_minimal_feature_privileges()
            .find(|primary| {
                selected.iter().any(|id| id == primary.id())
                    || base.is_some_and(|base| base.grants_privilege(primary).has_all_requested)
            }))
    }

    /// The primary privilege the UI should show as currently chosen: the
    /// first full primary whose exact id or `minimal_` form is selected, or
    /// which the entry's base privilege covers.
    fn displayed_primary_feature_privilege(
        &self,
        feature_id: &str,
        index: usize,
    ) -> PrivilegeResult<Option<&'a Privilege>> {
        let feature = self.catalog.secured_feature(feature_id)?;
        let base = self.base_privilege(index)?;
        let selected = self.selected_feature_privileges(feature_id, index)?;

        Ok(feature.primary_feature_privileges().iter().find(|primary| {
            let minimal_id = minimal_privilege_id(primary.id());
            selected
                .iter()
                .any(|id| id == primary.id() || *id == minimal_id)
                || base.is_some_and(|base| base.grants_privilege(primary).has_all_requested)
        }))
    }

    /// Id of the primary privilege the UI should show as currently chosen.
    pub fn displayed_primary_feature_privilege_id(
        &self,
        feature_id: &str,
        index: usize,
    ) -> PrivilegeResult<Option<&'a str>> {
        Ok(self
            .displayed_primary_feature_privilege(feature_id, index)?
            .map(|privilege| privilege.id()))
    }

    /// Whether some sub-feature privilege is granted by the entry's actual
    /// assignment but not already implied by the displayed primary.
    ///
    /// This detects genuine customization: privileges the chosen primary
    /// already subsumes are not counted.
    pub fn has_non_superseded_sub_feature_privileges(
        &self,
        feature_id: &str,
        index: usize,
    ) -> PrivilegeResult<bool> {
        let feature = self.catalog.secured_feature(feature_id)?;
        let displayed = self.displayed_primary_feature_privilege(feature_id, index)?;
        let form_privileges = self
            .catalog
            .collection_from_role_entries([self.entry(index)?])?;

        Ok(feature.sub_feature_privileges().any(|sub| {
            form_privileges.grants_privilege(sub).has_all_requested
                && !displayed.is_some_and(|primary| {
                    primary.grants_privilege(sub).has_all_requested
                })
        }))
    }

    /// Whether an independent sub-feature privilege is granted: covered by
    /// the effective primary, or explicitly selected.
    ///
    /// Sub-feature grants are only meaningful relative to some primary;
    /// with no effective primary nothing is granted. An id that is not a
    /// sub-feature privilege of the feature is a programmer error.
    pub fn is_independent_sub_feature_privilege_granted(
        &self,
        feature_id: &str,
        privilege_id: &str,
        index: usize,
    ) -> PrivilegeResult<bool> {
        let feature = self.catalog.secured_feature(feature_id)?;
        let sub = feature
            .sub_feature_privileges()
            .find(|privilege| privilege.id() == privilege_id)
            .ok_or_else(|| PrivilegeError::UnknownSubFeaturePrivilege {
                feature_id: feature_id.to_string(),
                privilege_id: privilege_id.to_string(),
            })?;

        let Some(primary) = self.effective_primary_feature_privilege(feature_id, index)? else {
            return Ok(false);
        };

        let selected = self.selected_feature_privileges(feature_id, index)?;
        Ok(primary.grants_privilege(sub).has_all_requested
            || selected.iter().any(|id| id == sub.id()))
    }

    /// The single member of a mutually-exclusive group that is covered by
    /// the effective primary or explicitly selected, if any.
    ///
    /// The at-most-one invariant is not enforced here but by the selection
    /// transitions in [`crate::select_mutually_exclusive_sub_feature_privilege`].
    pub fn selected_mutually_exclusive_sub_feature_privilege<'g>(
        &self,
        feature_id: &str,
        group: &'g SecuredSubFeatureGroup,
        index: usize,
    ) -> PrivilegeResult<Option<&'g Privilege>> {
        let primary = self.effective_primary_feature_privilege(feature_id, index)?;
        let selected = self.selected_feature_privileges(feature_id, index)?;

        Ok(group.privileges().iter().find(|member| {
            primary.is_some_and(|primary| primary.grants_privilege(member).has_all_requested)
                || selected.iter().any(|id| id == member.id())
        }))
    }

    /// Whether sub-feature customization is possible at all: some primary
    /// or minimal-primary id of the feature is currently selected.
    pub fn can_customize_sub_feature_privileges(
        &self,
        feature_id: &str,
        index: usize,
    ) -> PrivilegeResult<bool> {
        let feature = self.catalog.secured_feature(feature_id)?;
        let selected = self.selected_feature_privileges(feature_id, index)?;

        Ok(feature
            .primary_and_minimal_feature_privileges()
            .any(|primary| selected.iter().any(|id| id == primary.id())))
    }

    /// The next selected-id list for toggling customization on or off.
    ///
    /// Entering customization replaces the primary id with its `minimal_`
    /// form and seeds every sub-feature privilege the outgoing primary
    /// already granted, so toggling into custom mode never silently revokes
    /// access. Leaving customization strips the minimal and sub-feature ids
    /// and restores the bare primary id. The role itself is not touched.
    pub fn update_selected_feature_privileges_for_customization(
        &self,
        feature_id: &str,
        index: usize,
        will_be_customizing: bool,
    ) -> PrivilegeResult<Vec<String>> {
        let feature = self.catalog.secured_feature(feature_id)?;
        let selected = self.selected_feature_privileges(feature_id, index)?;
        let Some(primary) = self.displayed_primary_feature_privilege(feature_id, index)? else {
            return Ok(selected.to_vec());
        };

        let minimal_id = minimal_privilege_id(primary.id());
        let next = if will_be_customizing {
            let seeded = feature
                .sub_feature_privileges()
                .filter(|sub| primary.grants_privilege(sub).has_all_requested)
                .map(|sub| sub.id().to_string());

            selected
                .iter()
                .filter(|id| *id != primary.id())
                .cloned()
                .chain(std::iter::once(minimal_id))
                .chain(seeded)
                .unique()
                .collect()
        } else {
            selected
                .iter()
                .filter(|id| {
                    **id != minimal_id
                        && !feature.sub_feature_privileges().any(|sub| sub.id() == id.as_str())
                })
                .cloned()
                .chain(std::iter::once(primary.id().to_string()))
                .collect()
        };

        Ok(next)
    }

    /// Whether the global entry grants some base or feature privilege that
    /// the entry's own assignment does not.
    ///
    /// A space entry in that state is about to be saved with less access
    /// than the global entry already grants everywhere, which is almost
    /// certainly a user error the UI must warn about.
    pub fn has_superseded_inherited_privileges(&self, index: usize) -> PrivilegeResult<bool> {
        let entry = self.entry(index)?;
        if entry.is_global() {
            return Ok(false);
        }
        let Some(global) = self.role.global_entry() else {
            return Ok(false);
        };

        let global_privileges = self.catalog.collection_from_role_entries([global])?;
        let form_privileges = self.catalog.collection_from_role_entries([entry])?;
        let superseded = |privilege: &Privilege| {
            global_privileges.grants_privilege(privilege).has_all_requested
                && !form_privileges.grants_privilege(privilege).has_all_requested
        };

        Ok(self
            .catalog
            .base_privileges(entry)
            .iter()
            .any(|base| superseded(base))
            || self.catalog.secured_features().any(|feature| {
                feature
                    .primary_and_minimal_feature_privileges()
                    .chain(feature.sub_feature_privileges())
                    .any(|privilege| superseded(privilege))
            }))
    }

    /// Explain how the feature's primary privilege is granted at the entry,
    /// with inheritance from the global entry taken into account.
    ///
    /// Unlike [`Self::effective_primary_feature_privilege`], which only
    /// consults the entry being edited, this also recognizes grants that
    /// come exclusively from the global entry and marks them inherited.
    pub fn explain_primary_feature_privilege(
        &self,
        feature_id: &str,
        index: usize,
    ) -> PrivilegeResult<Option<PrivilegeExplanation>> {
        let feature = self.catalog.secured_feature(feature_id)?;
        let entry = self.entry(index)?;
        let entry_privileges = self.catalog.collection_from_role_entries([entry])?;
        let global_privileges = match self.role.global_entry() {
            Some(global) if !entry.is_global() => {
                Some(self.catalog.collection_from_role_entries([global])?)
            }
            _ => None,
        };

        for primary in feature.primary_and_minimal_feature_privileges() {
            let space: Vec<Privilege> = entry_privileges
                .privileges_granting(primary)
                .into_iter()
                .cloned()
                .collect();
            let global: Vec<Privilege> = global_privileges
                .as_ref()
                .map(|privileges| {
                    privileges
                        .privileges_granting(primary)
                        .into_iter()
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();

            if !space.is_empty() || !global.is_empty() {
                return Ok(Some(PrivilegeExplanation {
                    privilege_id: primary.id().to_string(),
                    is_granted: true,
                    is_inherited: space.is_empty(),
                    grant_sources: GrantSources { global, space },
                }));
            }
        }

        Ok(None)
    }
}

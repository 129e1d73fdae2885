//! Derivation of raw privilege action maps from feature definitions.
//!
//! This is the server-facing half of the privilege model: every declared
//! privilege id is expanded into the flat list of canonical actions it
//! grants, which is what authorization checks compare against.

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use warden_features::{Feature, IncludeIn, PrivilegeDeclaration};

use crate::{Action, Actions};

/// Saved-object operations granted by read access.
const READ_OPERATIONS: &[&str] = &["bulk_get", "get", "find"];

/// Saved-object operations granted by write access, on top of the read set.
const WRITE_OPERATIONS: &[&str] = &[
    "create",
    "bulk_create",
    "update",
    "bulk_update",
    "delete",
    "bulk_delete",
    "share_to_space",
];

/// Flattened action lists per privilege id.
///
/// The catalog resolves declared privileges against these maps, and
/// server-side authorization consumes them directly. Map order follows
/// feature registration and declaration order, so repeated builds over the
/// same features produce identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPrivileges {
    /// Base privileges assignable at the global scope.
    pub global: IndexMap<String, Vec<Action>>,
    /// Base privileges assignable at the space scope.
    pub space: IndexMap<String, Vec<Action>>,
    /// Per-feature action lists, keyed by feature id and then privilege id.
    /// Each feature contributes its composed primaries, their `minimal_`
    /// variants, and its sub-feature privileges.
    pub features: IndexMap<String, IndexMap<String, Vec<Action>>>,
}

/// Derive the full raw privilege map from feature definitions.
///
/// Per feature:
/// - each primary privilege id maps to its *composed* actions: the declared
///   actions plus the actions of every sub-feature privilege included in it
///   via [`IncludeIn`];
/// - each `minimal_` variant maps to the declared actions only;
/// - each sub-feature privilege maps to its declared actions.
///
/// The space base `all`/`read` sets union the corresponding composed
/// primaries across all features. The global base sets add global-only
/// management actions on top, so global `all` is a strict superset of space
/// `all`.
pub fn build_raw_privileges(features: &[Feature]) -> RawPrivileges {
    let mut raw = RawPrivileges::default();

    for feature in features {
        let mut privileges: IndexMap<String, Vec<Action>> = IndexMap::new();

        for primary in &feature.privileges {
            let declared = declared_actions(&feature.id, primary);
            let included: Vec<Action> = feature
                .sub_feature_privileges()
                .filter(|sub| included_in_primary(&primary.id, sub.include_in))
                .flat_map(|sub| declared_actions(&feature.id, &sub.declaration))
                .collect();

            let composed: Vec<Action> = declared
                .iter()
                .cloned()
                .chain(included)
                .unique()
                .collect();

            privileges.insert(primary.id.clone(), composed);
            privileges.insert(crate::minimal_privilege_id(&primary.id), declared);
        }

        for sub in feature.sub_feature_privileges() {
            privileges.insert(
                sub.declaration.id.clone(),
                declared_actions(&feature.id, &sub.declaration),
            );
        }

        raw.features.insert(feature.id.clone(), privileges);
    }

    let feature_union = |privilege_id: &str| -> Vec<Action> {
        raw.features
            .values()
            .flat_map(|privileges| privileges.get(privilege_id).into_iter().flatten())
            .cloned()
            .collect()
    };

    let space_all: Vec<Action> = std::iter::once(Actions::login())
        .chain(feature_union("all"))
        .unique()
        .collect();
    let space_read: Vec<Action> = std::iter::once(Actions::login())
        .chain(feature_union("read"))
        .unique()
        .collect();

    let global_all: Vec<Action> = space_all
        .iter()
        .cloned()
        .chain([
            Actions::space("manage"),
            Actions::ui("spaces", "manage"),
            Actions::api("spaces"),
        ])
        .unique()
        .collect();
    let global_read = space_read.clone();

    raw.global.insert("all".into(), global_all);
    raw.global.insert("read".into(), global_read);
    raw.space.insert("all".into(), space_all);
    raw.space.insert("read".into(), space_read);

    raw
}

/// Whether a sub-feature privilege is folded into the given composed
/// primary. The `minimal_` variants never include sub-features.
fn included_in_primary(primary_id: &str, include_in: IncludeIn) -> bool {
    match include_in {
        IncludeIn::All => primary_id == "all",
        IncludeIn::Read => primary_id == "all" || primary_id == "read",
        IncludeIn::None => false,
    }
}

/// Expand one declaration into the actions it grants on its own.
fn declared_actions(feature_id: &str, declaration: &PrivilegeDeclaration) -> Vec<Action> {
    let mut actions = vec![Actions::login()];

    actions.extend(declaration.api.iter().map(|tag| Actions::api(tag)));
    actions.extend(declaration.app.iter().map(|app| Actions::app(app)));

    for type_id in &declaration.saved_object.all {
        actions.extend(
            READ_OPERATIONS
                .iter()
                .chain(WRITE_OPERATIONS)
                .map(|operation| Actions::saved_object(type_id, operation)),
        );
    }
    for type_id in &declaration.saved_object.read {
        actions.extend(
            READ_OPERATIONS
                .iter()
                .map(|operation| Actions::saved_object(type_id, operation)),
        );
    }

    actions.extend(
        declaration
            .ui
            .iter()
            .map(|capability| Actions::ui(feature_id, capability)),
    );

    actions.into_iter().unique().collect()
}

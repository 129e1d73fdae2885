use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::Action;

/// Prefix marking the minimal variant of a primary feature privilege.
pub const MINIMAL_PRIVILEGE_PREFIX: &str = "minimal_";

/// The minimal-variant id of a primary privilege id.
///
/// Idempotent: ids that already carry the prefix are returned unchanged.
pub fn minimal_privilege_id(privilege_id: &str) -> String {
    if privilege_id.starts_with(MINIMAL_PRIVILEGE_PREFIX) {
        privilege_id.to_string()
    } else {
        format!("{MINIMAL_PRIVILEGE_PREFIX}{privilege_id}")
    }
}

/// Where a privilege is assignable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivilegeKind {
    /// Assignable at global or space scope, not tied to a feature.
    Base,
    /// A feature's primary privilege or its minimal variant.
    Feature,
    /// A finer-grained privilege nested under a feature.
    SubFeature,
}

/// A named bundle of actions.
///
/// Identity is `(kind, id)`; the action set participates in covering tests,
/// not in equality. Privileges are created once from declarations and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Privilege {
    kind: PrivilegeKind,
    id: String,
    actions: Vec<Action>,
}

impl Privilege {
    /// Create a privilege from its kind, id and action list.
    pub fn new(kind: PrivilegeKind, id: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            kind,
            id: id.into(),
            actions,
        }
    }

    /// The privilege kind.
    pub fn kind(&self) -> PrivilegeKind {
        self.kind
    }

    /// The privilege id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The actions granted by this privilege.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Covering test: does this privilege's action set contain every action
    /// of `other`?
    ///
    /// This is containment, not equality. A privilege with a superset of
    /// actions grants any privilege it fully contains, including itself.
    pub fn grants_privilege(&self, other: &Privilege) -> Coverage {
        Coverage::compute(other.actions(), |action| self.actions.contains(action))
    }
}

impl PartialEq for Privilege {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.id == other.id
    }
}

impl Eq for Privilege {}

impl Hash for Privilege {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.id.hash(state);
    }
}

/// Result of a covering test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    /// Whether every requested action was covered.
    pub has_all_requested: bool,
    /// The requested actions that were not covered, in request order.
    pub missing: Vec<Action>,
}

impl Coverage {
    pub(crate) fn compute(requested: &[Action], covers: impl Fn(&Action) -> bool) -> Self {
        let missing: Vec<Action> = requested
            .iter()
            .filter(|action| !covers(action))
            .cloned()
            .collect();

        Self {
            has_all_requested: missing.is_empty(),
            missing,
        }
    }
}

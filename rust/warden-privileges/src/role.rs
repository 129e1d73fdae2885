use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One assignment scope within a role: base and feature privilege ids
/// granted either globally or for a set of spaces.
///
/// The global entry is distinguished structurally rather than by a flag: an
/// entry is global when its `spaces` list is empty or equals `["*"]`. That
/// single predicate, [`RoleEntry::is_global`], is reused everywhere
/// inheritance decisions are made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEntry {
    /// The spaces this entry applies to. Empty or `["*"]` means global.
    #[serde(default)]
    pub spaces: Vec<String>,
    /// Assigned base privilege ids.
    #[serde(default)]
    pub base: Vec<String>,
    /// Assigned feature privilege ids, keyed by feature id.
    #[serde(default)]
    pub feature: IndexMap<String, Vec<String>>,
}

impl RoleEntry {
    /// Whether this entry is the global entry.
    pub fn is_global(&self) -> bool {
        self.spaces.is_empty() || self.spaces == ["*"]
    }

    /// The selected privilege ids for one feature.
    pub fn feature_privileges(&self, feature_id: &str) -> &[String] {
        self.feature
            .get(feature_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A role: an ordered list of assignment scopes.
///
/// Entries are owned by whatever persists roles; this engine only ever
/// reads them. At most one entry is expected to be global.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// The privilege entries.
    #[serde(default)]
    pub entries: Vec<RoleEntry>,
}

impl Role {
    /// The global entry, if any. The first structural match wins.
    pub fn global_entry(&self) -> Option<&RoleEntry> {
        self.entries.iter().find(|entry| entry.is_global())
    }
}
